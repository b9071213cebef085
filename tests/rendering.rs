mod common;

use common::{controller, dashboard_page, detail_page};
use imagedeck::app::{Event, Input, Target};
use imagedeck::render_document;

#[test]
fn detail_page_renders_every_section() {
    let controller = controller(detail_page());
    let html = render_document(&controller.view(), "php");

    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains(r#"data-theme="dark""#));
    assert!(html.contains(r#"<i class="ti ti-moon">"#));
    assert!(html.contains(r#"<dd data-meta="current-tag">latest</dd>"#));
    assert!(html.contains("1 update available"));
    assert!(html.contains("142 packages"));
    assert!(html.contains("+1 -0 ~1"));
    assert!(html.contains("Mar 5, 2025"));
    assert!(html.contains("last tuesday"));
}

#[test]
fn swapped_out_lineage_renders_exit_state() {
    let mut controller = controller(detail_page());
    controller.dispatch(Event::SelectVariant { section: 0, index: 1 });

    let html = render_document(&controller.view(), "php");
    assert!(html.contains("lineage-item lineage-exit"));
    assert!(!html.contains(r#"class="sbom""#));

    controller.advance(250);
    let html = render_document(&controller.view(), "php");
    assert!(!html.contains("lineage-exit"));
    assert!(html.contains(r#"data-build-arg="curl""#));
}

#[test]
fn dashboard_renders_cards_and_placeholder() {
    let mut controller = controller(dashboard_page());
    let html = render_document(&controller.view(), "Containers");

    assert!(html.contains(r#"id="pull-nginx""#));
    assert!(html.contains("docker pull ghcr.io/acme/nginx:latest"));
    assert!(html.contains("All (3)"));
    assert!(!html.contains("no-results"));

    controller.interact(&Target::SearchInput, &Input::Text("zzz".into()));
    let html = render_document(&controller.view(), "Containers");
    assert!(html.contains(r#"<p class="no-results">"#));
    assert!(html.contains("No containers match your filters</div>"));
}

#[test]
fn dashboard_uses_the_site_dom_hooks() {
    let mut controller = controller(dashboard_page());
    controller.interact(&Target::SearchInput, &Input::Text("ngi".into()));
    let html = render_document(&controller.view(), "Containers");

    assert!(html.contains(r#"<div id="status-live" role="status" aria-live="polite">"#));
    assert!(html.contains(r#"<div class="cards-grid">"#));
    assert!(html.contains(r#"id="search-input""#));
    assert!(html.contains(r#"data-status="all" aria-checked="true""#));
    assert!(html.contains(r#"data-status="up-to-date" aria-checked="false""#));
    assert!(html.contains(r#"data-registry="ghcr" aria-checked="true""#));
    assert!(!html.contains("data-filter"));
}

#[test]
fn json_view_is_stable() {
    let controller = controller(detail_page());
    let view = controller.view();

    let json = serde_json::to_value(&view).unwrap();
    assert_eq!(json["dependency_health"]["badge"]["state"], "updates-available");
    assert_eq!(json["dependency_health"]["badge"]["count"], 1);
    assert_eq!(json, serde_json::to_value(controller.view()).unwrap());
}
