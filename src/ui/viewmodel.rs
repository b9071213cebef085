//! View model types representing renderable page state.
//!
//! View models are computed from `AppState` and the page document by
//! `AppState::compute_view` and consumed by the renderer. They contain no
//! business logic, only display-ready data. A region whose anchor is missing
//! on the page is `None`.

use crate::domain::{
    CardStatus, ChangeKind, ChangelogSummary, DependencyRecord, Registry, StatusFilter,
};
use crate::ui::theme::ThemeMode;
use serde::Serialize;

/// Everything visible on a page after the latest transition.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageView {
    pub theme: ThemeView,
    pub sections: Vec<VariantSectionView>,
    pub meta: MetaView,
    pub lineage: Option<LineageView>,
    pub dependency_health: Option<DependencyHealthView>,
    pub sbom: Option<SbomView>,
    pub changelog: Option<ChangelogView>,
    pub history: Option<HistoryView>,
    pub dashboard: Option<DashboardView>,
    /// Content of the live-announcement region.
    pub announcement: Option<String>,
}

/// Theme flag and toggle icon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThemeView {
    pub mode: ThemeMode,
    pub icon_class: Option<&'static str>,
}

/// Variant tags of one section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VariantSectionView {
    pub tags: Vec<VariantTagView>,
}

/// One variant tag; `selected` doubles as its `aria-pressed` state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VariantTagView {
    pub tag: String,
    pub selected: bool,
}

/// Display slots mirrored from the active variant.
///
/// A slot is `None` when its anchor is missing or no variant is active.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MetaView {
    pub current_tag: Option<String>,
    pub size_amd64: Option<String>,
    pub size_arm64: Option<String>,
    pub build_digest: Option<String>,
    pub base_image: Option<String>,
}

/// Build-argument items of the lineage grid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LineageView {
    pub items: Vec<LineageItemView>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineageItemView {
    pub name: String,
    pub value: String,
    /// Staggered entry animation delay.
    pub animation_delay_ms: u64,
    /// Item is playing its exit animation and will be removed.
    pub exiting: bool,
}

/// Summary badge of the dependency health section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "count", rename_all = "kebab-case")]
pub enum HealthBadge {
    UpdatesAvailable(usize),
    AllUpToDate,
    Monitored(usize),
}

impl HealthBadge {
    /// Badge text.
    ///
    /// ```
    /// use imagedeck::ui::HealthBadge;
    ///
    /// assert_eq!(HealthBadge::UpdatesAvailable(1).label(), "1 update available");
    /// assert_eq!(HealthBadge::UpdatesAvailable(3).label(), "3 updates available");
    /// assert_eq!(HealthBadge::AllUpToDate.label(), "all up to date");
    /// assert_eq!(HealthBadge::Monitored(2).label(), "2 monitored");
    /// ```
    #[must_use]
    pub fn label(self) -> String {
        match self {
            Self::UpdatesAvailable(1) => "1 update available".to_string(),
            Self::UpdatesAvailable(n) => format!("{n} updates available"),
            Self::AllUpToDate => "all up to date".to_string(),
            Self::Monitored(n) => format!("{n} monitored"),
        }
    }

    #[must_use]
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::UpdatesAvailable(_) => "badge-warning",
            Self::AllUpToDate => "badge-success",
            Self::Monitored(_) => "badge-neutral",
        }
    }
}

/// Two-segment monitored/unmonitored progress indicator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProgressView {
    pub monitored: usize,
    pub unmonitored: usize,
    pub monitored_pct: f64,
    pub unmonitored_pct: f64,
}

/// Visibility of one server-rendered list row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RowToggle {
    pub name: String,
    pub visible: bool,
}

impl RowToggle {
    pub fn new(name: impl Into<String>, visible: bool) -> Self {
        Self {
            name: name.into(),
            visible,
        }
    }
}

/// Dependency health scoped to the active variant.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DependencyHealthView {
    pub badge: HealthBadge,
    pub progress: ProgressView,
    /// Catalog entries whose name is a build argument of the variant.
    pub relevant: Vec<DependencyRecord>,
    pub relevant_updates: usize,
    /// Rows of the update table, one per update entry.
    pub update_rows: Vec<RowToggle>,
    /// Rows of the up-to-date list, one per monitored catalog entry.
    pub up_to_date_rows: Vec<RowToggle>,
    /// Rows of the disabled list, one per unmonitored catalog entry.
    pub disabled_rows: Vec<RowToggle>,
}

impl DependencyHealthView {
    /// Names of the visible rows in `rows`.
    #[must_use]
    pub fn visible_names(rows: &[RowToggle]) -> Vec<&str> {
        rows.iter().filter(|r| r.visible).map(|r| r.name.as_str()).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SbomView {
    pub packages_total: u64,
    pub format: Option<String>,
    pub generated_at: Option<String>,
    pub ecosystems: Vec<(String, u64)>,
    pub licenses: Vec<(String, u64)>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChangelogRow {
    pub kind: ChangeKind,
    pub name: String,
    pub from: Option<String>,
    pub to: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChangelogView {
    pub rows: Vec<ChangelogRow>,
    pub summary: ChangelogSummary,
    /// Compact `+a -r ~u` form of `summary`.
    pub compact: String,
    /// Entries left out by the row cap.
    pub omitted: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoryRow {
    pub date: String,
    pub version: String,
    pub packages_total: Option<u64>,
    pub changes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoryView {
    pub rows: Vec<HistoryRow>,
}

/// Per-status card counts shown on the filter buttons.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FilterCounts {
    pub all: usize,
    pub up_to_date: usize,
    pub update_available: usize,
    pub not_published: usize,
}

impl FilterCounts {
    #[must_use]
    pub const fn for_filter(&self, filter: StatusFilter) -> usize {
        match filter {
            StatusFilter::All => self.all,
            StatusFilter::Only(CardStatus::UpToDate) => self.up_to_date,
            StatusFilter::Only(CardStatus::UpdateAvailable) => self.update_available,
            StatusFilter::Only(CardStatus::NotPublished) => self.not_published,
        }
    }
}

/// A toggle button and whether it is the active (`aria-checked`) one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToggleButton {
    pub key: &'static str,
    pub label: String,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardView {
    pub container: String,
    pub status: CardStatus,
    pub visible: bool,
    pub pull_field_id: String,
    pub pull_command: String,
    pub tags: Vec<VariantTagView>,
    pub size_amd64: String,
    pub size_arm64: String,
    /// Copy button shows its confirmation state.
    pub copied: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardView {
    pub registry: Registry,
    pub registry_buttons: Vec<ToggleButton>,
    pub filter_buttons: Vec<ToggleButton>,
    pub search: String,
    pub counts: FilterCounts,
    pub cards: Vec<CardView>,
    pub visible_count: usize,
    /// `None` until the "no results" placeholder has been created, then its visibility.
    pub no_results: Option<bool>,
}
