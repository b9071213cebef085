//! SBOM, changelog and build-history sections of the active variant.
//!
//! Each builder takes the variant's parsed blob and returns `None` when the
//! section should be hidden (absent, unparsable or empty blob).

use crate::domain::{format_build_date, Changelog, HistoryEntry, SbomSummary};
use crate::ui::viewmodel::{ChangelogRow, ChangelogView, HistoryRow, HistoryView, SbomView};

/// Default maximum number of changelog rows rendered.
pub const CHANGELOG_ROW_LIMIT: usize = 50;

#[must_use]
pub fn sbom_view(sbom: Option<&SbomSummary>) -> Option<SbomView> {
    let sbom = sbom.filter(|s| !s.is_empty())?;

    let mut licenses: Vec<(String, u64)> = sbom
        .licenses
        .iter()
        .map(|(name, count)| (name.clone(), *count))
        .collect();
    licenses.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

    Some(SbomView {
        packages_total: sbom.packages_total,
        format: sbom.format.clone(),
        generated_at: sbom.generated_at.as_deref().map(format_build_date),
        ecosystems: sbom
            .ranked_ecosystems()
            .into_iter()
            .map(|(name, count)| (name.to_string(), count))
            .collect(),
        licenses,
    })
}

/// Builds the changelog table, capped at `limit` rows.
///
/// The summary comes from the blob's own `summary` when present; otherwise it
/// is counted from every entry, including those past the cap.
///
/// ```
/// use imagedeck::domain::{ChangeKind, Changelog, ChangelogEntry};
/// use imagedeck::ui::sections::changelog_view;
///
/// let changes = (0..80)
///     .map(|i| ChangelogEntry { kind: ChangeKind::Added, name: format!("pkg-{i}"), from: None, to: None })
///     .collect();
/// let log = Changelog { changes, summary: None };
///
/// let view = changelog_view(Some(&log), 50).unwrap();
/// assert_eq!(view.rows.len(), 50);
/// assert_eq!(view.omitted, 30);
/// assert_eq!(view.compact, "+80 -0 ~0");
/// ```
#[must_use]
pub fn changelog_view(changelog: Option<&Changelog>, limit: usize) -> Option<ChangelogView> {
    let changelog = changelog.filter(|c| !c.is_empty())?;

    let rows: Vec<ChangelogRow> = changelog
        .changes
        .iter()
        .take(limit)
        .map(|entry| ChangelogRow {
            kind: entry.kind,
            name: entry.name.clone(),
            from: entry.from.clone(),
            to: entry.to.clone(),
        })
        .collect();

    let summary = changelog.effective_summary();
    let omitted = changelog.changes.len().saturating_sub(rows.len());

    Some(ChangelogView {
        rows,
        compact: summary.compact(),
        summary,
        omitted,
    })
}

/// Builds the build-history table in the order the blob lists it.
#[must_use]
pub fn history_view(history: Option<&[HistoryEntry]>) -> Option<HistoryView> {
    let history = history.filter(|h| !h.is_empty())?;

    let rows = history
        .iter()
        .map(|entry| HistoryRow {
            date: format_build_date(&entry.built_at),
            version: entry.version.clone(),
            packages_total: entry.packages_total,
            changes: entry.changes_summary.as_ref().map(|c| c.display()),
        })
        .collect();

    Some(HistoryView { rows })
}
