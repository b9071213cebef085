//! HTML rendering of a computed [`PageView`].
//!
//! The renderer is a pure function of the view model. Each region renders only
//! when the view carries it, which mirrors the page: a region whose anchor is
//! missing, or whose data is absent or empty, produces no markup.
//!
//! # Example
//!
//! ```rust
//! use imagedeck::app::{AppState, ViewSettings};
//! use imagedeck::domain::Registry;
//! use imagedeck::page::Page;
//! use imagedeck::ui::render_document;
//!
//! let state = AppState::new(ViewSettings::default(), Registry::Ghcr);
//! let view = state.compute_view(&Page::default(), None);
//! let html = render_document(&view, "Containers");
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! ```

use crate::ui::dashboard::NO_RESULTS_MESSAGE;
use crate::ui::viewmodel::{
    CardView, ChangelogView, DashboardView, DependencyHealthView, HistoryView, LineageView,
    MetaView, PageView, RowToggle, SbomView, VariantSectionView,
};
use maud::{html, Markup, DOCTYPE};

/// Renders a complete HTML document.
#[must_use]
pub fn render_document(view: &PageView, title: &str) -> String {
    let markup = html! {
        (DOCTYPE)
        html lang="en" data-theme=(view.theme.mode.key()) {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
            }
            body {
                (render_page(view))
            }
        }
    };
    markup.into_string()
}

/// Renders the page body regions.
#[must_use]
pub fn render_page(view: &PageView) -> Markup {
    html! {
        header.page-header {
            button.theme-toggle type="button" aria-label="Toggle theme" {
                @if let Some(icon) = view.theme.icon_class {
                    i class=(icon) {}
                }
            }
        }
        main {
            @for (i, section) in view.sections.iter().enumerate() {
                (variant_section(i, section))
            }
            (meta(&view.meta))
            @if let Some(lineage) = &view.lineage {
                (lineage_grid(lineage))
            }
            @if let Some(health) = &view.dependency_health {
                (dependency_health(health))
            }
            @if let Some(sbom) = &view.sbom {
                (sbom_section(sbom))
            }
            @if let Some(changelog) = &view.changelog {
                (changelog_section(changelog))
            }
            @if let Some(history) = &view.history {
                (history_section(history))
            }
            @if let Some(dashboard) = &view.dashboard {
                (dashboard_grid(dashboard))
            }
        }
        div id="status-live" role="status" aria-live="polite" {
            @if let Some(message) = &view.announcement {
                (message)
            }
        }
    }
}

fn aria_bool(selected: bool) -> &'static str {
    if selected {
        "true"
    } else {
        "false"
    }
}

fn variant_section(index: usize, section: &VariantSectionView) -> Markup {
    html! {
        div.variants-section data-section=(index) {
            @for tag in &section.tags {
                button.variant-tag.selected[tag.selected]
                    type="button"
                    data-tag=(tag.tag)
                    aria-pressed=(aria_bool(tag.selected)) {
                    (tag.tag)
                }
            }
        }
    }
}

fn meta(meta: &MetaView) -> Markup {
    let rows = [
        ("current-tag", "Tag", &meta.current_tag),
        ("size-amd64", "amd64", &meta.size_amd64),
        ("size-arm64", "arm64", &meta.size_arm64),
        ("build-digest", "Build digest", &meta.build_digest),
        ("base-image", "Base image", &meta.base_image),
    ];

    html! {
        dl.variant-meta {
            @for (key, label, value) in rows {
                @if let Some(value) = value {
                    dt { (label) }
                    dd data-meta=(key) { (value) }
                }
            }
        }
    }
}

fn lineage_grid(lineage: &LineageView) -> Markup {
    html! {
        div.lineage-grid {
            @for item in &lineage.items {
                div.lineage-item.lineage-exit[item.exiting]
                    data-build-arg=(item.name)
                    style={ "animation-delay: " (item.animation_delay_ms) "ms" } {
                    span.lineage-label { (item.name) }
                    span.lineage-value { (item.value) }
                }
            }
        }
    }
}

fn toggled_rows(class: &str, rows: &[RowToggle]) -> Markup {
    html! {
        ul class=(class) {
            @for row in rows {
                li data-dep=(row.name) hidden[!row.visible] { (row.name) }
            }
        }
    }
}

fn dependency_health(health: &DependencyHealthView) -> Markup {
    let progress = &health.progress;
    html! {
        section.dependency-health {
            h2 { "Dependency health" }
            span class={ "dep-badge " (health.badge.css_class()) } { (health.badge.label()) }
            div.dep-progress {
                div.dep-progress-monitored
                    style={ "width: " (format!("{:.1}", progress.monitored_pct)) "%" } {}
                div.dep-progress-unmonitored
                    style={ "width: " (format!("{:.1}", progress.unmonitored_pct)) "%" } {}
            }
            p.dep-progress-label {
                (progress.monitored) " monitored, " (progress.unmonitored) " unmonitored"
            }
            (toggled_rows("dep-updates", &health.update_rows))
            (toggled_rows("dep-up-to-date", &health.up_to_date_rows))
            (toggled_rows("dep-disabled", &health.disabled_rows))
        }
    }
}

fn sbom_section(sbom: &SbomView) -> Markup {
    html! {
        section.sbom {
            h2 { "SBOM" }
            p.sbom-total { (sbom.packages_total) " packages" }
            @if let Some(format) = &sbom.format {
                p.sbom-format { (format) }
            }
            @if let Some(generated_at) = &sbom.generated_at {
                p.sbom-generated { (generated_at) }
            }
            @if !sbom.ecosystems.is_empty() {
                ul.sbom-ecosystems {
                    @for (name, count) in &sbom.ecosystems {
                        li { span.eco-name { (name) } " " span.eco-count { (count) } }
                    }
                }
            }
            @if !sbom.licenses.is_empty() {
                ul.sbom-licenses {
                    @for (name, count) in &sbom.licenses {
                        li { (name) " (" (count) ")" }
                    }
                }
            }
        }
    }
}

fn changelog_section(changelog: &ChangelogView) -> Markup {
    html! {
        section.changelog {
            h2 { "Changelog" }
            span.changelog-summary { (changelog.compact) }
            ul.changelog-list {
                @for row in &changelog.rows {
                    li.change-item data-kind=(row.kind.marker()) {
                        span.change-marker { (row.kind.marker()) }
                        " " (row.name)
                        @match (&row.from, &row.to) {
                            (Some(from), Some(to)) => { " " (from) " → " (to) },
                            (None, Some(to)) => { " " (to) },
                            (Some(from), None) => { " " (from) },
                            (None, None) => {},
                        }
                    }
                }
            }
            @if changelog.omitted > 0 {
                p.changelog-more { "and " (changelog.omitted) " more" }
            }
        }
    }
}

fn history_section(history: &HistoryView) -> Markup {
    html! {
        section.build-history {
            h2 { "Build history" }
            table {
                tbody {
                    @for row in &history.rows {
                        tr {
                            td { (row.date) }
                            td { (row.version) }
                            td {
                                @if let Some(total) = row.packages_total {
                                    (total)
                                }
                            }
                            td {
                                @if let Some(changes) = &row.changes {
                                    (changes)
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn dashboard_grid(dashboard: &DashboardView) -> Markup {
    html! {
        div.registry-toggle role="radiogroup" aria-label="Registry" {
            @for button in &dashboard.registry_buttons {
                button.registry-btn.active[button.active]
                    type="button"
                    role="radio"
                    data-registry=(button.key)
                    aria-checked=(aria_bool(button.active)) {
                    (button.label)
                }
            }
        }
        div.filter-bar {
            input id="search-input"
                type="search"
                value=(dashboard.search)
                placeholder="Search containers";
            div.status-filters role="radiogroup" aria-label="Status" {
                @for button in &dashboard.filter_buttons {
                    button.filter-btn.active[button.active]
                        type="button"
                        role="radio"
                        data-status=(button.key)
                        aria-checked=(aria_bool(button.active)) {
                        (button.label)
                    }
                }
            }
        }
        div.cards-grid {
            @for card in &dashboard.cards {
                (container_card(card))
            }
            @if let Some(show) = dashboard.no_results {
                p.no-results hidden[!show] { (NO_RESULTS_MESSAGE) }
            }
        }
    }
}

fn container_card(card: &CardView) -> Markup {
    html! {
        article.container-card
            data-container=(card.container)
            data-status=(card.status.key())
            hidden[!card.visible] {
            h3 { (card.container) }
            div.variant-tags {
                @for tag in &card.tags {
                    button.variant-tag.selected[tag.selected]
                        type="button"
                        data-tag=(tag.tag)
                        aria-pressed=(aria_bool(tag.selected)) {
                        (tag.tag)
                    }
                }
            }
            dl.card-meta {
                dt { "amd64" } dd data-meta="size-amd64" { (card.size_amd64) }
                dt { "arm64" } dd data-meta="size-arm64" { (card.size_arm64) }
            }
            div.pull-section {
                input id=(card.pull_field_id) type="text" readonly value=(card.pull_command);
                button.copy-btn.copied[card.copied] type="button" aria-label="Copy pull command" {
                    i class=(if card.copied { "ti ti-check" } else { "ti ti-copy" }) {}
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::viewmodel::LineageItemView;

    #[test]
    fn exiting_items_carry_exit_class_and_stagger() {
        let lineage = LineageView {
            items: vec![
                LineageItemView {
                    name: "PHP_VERSION".into(),
                    value: "8.3".into(),
                    animation_delay_ms: 0,
                    exiting: true,
                },
                LineageItemView {
                    name: "NODE_VERSION".into(),
                    value: "20".into(),
                    animation_delay_ms: 60,
                    exiting: true,
                },
            ],
        };
        let html = lineage_grid(&lineage).into_string();
        assert_eq!(html.matches("lineage-exit").count(), 2);
        assert!(html.contains("animation-delay: 60ms"));
    }

    #[test]
    fn hidden_rows_render_hidden_attribute() {
        let html = toggled_rows(
            "dep-updates",
            &[RowToggle::new("php", true), RowToggle::new("node", false)],
        )
        .into_string();
        assert!(html.contains(r#"<li data-dep="php">"#));
        assert!(html.contains(r#"<li data-dep="node" hidden>"#));
    }

    #[test]
    fn text_is_escaped() {
        let meta_view = MetaView {
            current_tag: Some("<script>".into()),
            ..MetaView::default()
        };
        let html = meta(&meta_view).into_string();
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("amd64"));
    }
}
