mod common;

use common::{controller, detail_page};
use imagedeck::app::Event;
use imagedeck::ui::{DependencyHealthView, HealthBadge};
use imagedeck::Page;
use serde_json::json;

/// Catalog `openssl` (monitored) and `curl` (disabled), one update for
/// `openssl`, and one variant per build-argument set.
fn example_page() -> Page {
    let variant = |tag: &str, arg: &str, selected: bool| {
        json!({
            "tag": tag,
            "build_args": json!([{"name": arg, "value": "1"}]).to_string(),
            "selected": selected
        })
    };
    let document = json!({
        "sections": [{
            "variants": [variant("ssl", "openssl", true), variant("curl", "curl", false)]
        }],
        "dependencies": {
            "catalog": json!([
                {"name": "openssl", "status": "monitored"},
                {"name": "curl", "status": "disabled"}
            ]).to_string(),
            "updates": json!([{"name": "openssl"}]).to_string()
        }
    });
    Page::from_json(&document.to_string()).unwrap()
}

#[test]
fn relevant_update_shows_update_badge() {
    let controller = controller(example_page());
    let health = controller.view().dependency_health.unwrap();

    assert_eq!(health.badge, HealthBadge::UpdatesAvailable(1));
    assert_eq!(health.badge.label(), "1 update available");
    assert!(DependencyHealthView::visible_names(&health.disabled_rows).is_empty());
}

#[test]
fn unrelated_update_still_reads_all_up_to_date() {
    let mut controller = controller(example_page());
    controller.dispatch(Event::SelectVariant { section: 0, index: 1 });
    let health = controller.view().dependency_health.unwrap();

    assert_eq!(health.badge, HealthBadge::AllUpToDate);
    assert_eq!(health.badge.label(), "all up to date");
    assert_eq!(DependencyHealthView::visible_names(&health.disabled_rows), vec!["curl"]);
    assert!(DependencyHealthView::visible_names(&health.update_rows).is_empty());
}

#[test]
fn progress_follows_the_active_variant() {
    let mut controller = controller(detail_page());

    let health = controller.view().dependency_health.unwrap();
    assert_eq!((health.progress.monitored, health.progress.unmonitored), (2, 0));
    assert_eq!(DependencyHealthView::visible_names(&health.up_to_date_rows), vec!["php"]);

    controller.dispatch(Event::SelectVariant { section: 0, index: 1 });
    let health = controller.view().dependency_health.unwrap();
    assert_eq!((health.progress.monitored, health.progress.unmonitored), (0, 1));
    assert!((health.progress.unmonitored_pct - 100.0).abs() < f64::EPSILON);
}

#[test]
fn catalog_rows_are_toggled_not_removed() {
    let mut controller = controller(detail_page());
    controller.dispatch(Event::SelectVariant { section: 0, index: 1 });
    let health = controller.view().dependency_health.unwrap();

    assert_eq!(health.update_rows.len(), 1);
    assert_eq!(health.up_to_date_rows.len(), 2);
    assert_eq!(health.disabled_rows.len(), 1);
}

#[test]
fn malformed_catalog_hides_the_section() {
    let mut page = example_page();
    page.dependencies.catalog = Some("[{\"name\":".into());
    assert!(controller(page).view().dependency_health.is_none());
}

#[test]
fn missing_anchor_hides_the_section() {
    let mut page = example_page();
    page.anchors.dependency_health = false;
    let controller = controller(page);

    assert!(controller.view().dependency_health.is_none());
    assert!(controller.dependencies().is_some());
}
