//! Dependency health scoped to a variant's build arguments.
//!
//! Everything here is a pure function of the page's dependency data and the
//! active variant's [`ArgNames`]. The catalog and update list are never
//! filtered in place; rows only get visibility toggles.

use crate::domain::{ArgNames, DependencyData, DependencyRecord};
use crate::ui::viewmodel::{DependencyHealthView, HealthBadge, ProgressView, RowToggle};

/// Chooses the summary badge.
///
/// * relevant updates exist: `UpdatesAvailable(n)`
/// * else, if the page has any update data at all or some relevant dependency
///   is monitored: `AllUpToDate`
/// * else: `Monitored(n)`
///
/// `any_update_data` is page-wide, not scoped to the variant.
#[must_use]
pub const fn health_badge(
    relevant_updates: usize,
    relevant_monitored: usize,
    any_update_data: bool,
) -> HealthBadge {
    if relevant_updates > 0 {
        HealthBadge::UpdatesAvailable(relevant_updates)
    } else if any_update_data || relevant_monitored > 0 {
        HealthBadge::AllUpToDate
    } else {
        HealthBadge::Monitored(relevant_monitored)
    }
}

/// Splits `monitored + unmonitored` into two percentage segments.
///
/// Both segments are zero when there is nothing to show.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn progress(monitored: usize, unmonitored: usize) -> ProgressView {
    let total = monitored + unmonitored;
    let (monitored_pct, unmonitored_pct) = if total == 0 {
        (0.0, 0.0)
    } else {
        let m = monitored as f64 / total as f64 * 100.0;
        (m, 100.0 - m)
    };

    ProgressView {
        monitored,
        unmonitored,
        monitored_pct,
        unmonitored_pct,
    }
}

/// Computes the dependency health view for the active variant.
///
/// # Examples
///
/// ```
/// use imagedeck::domain::{ArgNames, DependencyData, DependencyRecord, DependencyStatus, DependencyUpdate};
/// use imagedeck::ui::{dependency_health, HealthBadge};
///
/// let data = DependencyData {
///     catalog: vec![
///         DependencyRecord::new("openssl", DependencyStatus::Monitored),
///         DependencyRecord::new("curl", DependencyStatus::Disabled),
///     ],
///     updates: vec![DependencyUpdate::new("openssl")],
/// };
///
/// let names: ArgNames = ["openssl"].into_iter().collect();
/// assert_eq!(dependency_health(&data, &names).badge, HealthBadge::UpdatesAvailable(1));
///
/// let names: ArgNames = ["curl"].into_iter().collect();
/// assert_eq!(dependency_health(&data, &names).badge, HealthBadge::AllUpToDate);
/// ```
#[must_use]
pub fn dependency_health(data: &DependencyData, names: &ArgNames) -> DependencyHealthView {
    let _span = tracing::trace_span!("dependency_health", arg_names = names.len()).entered();

    let relevant: Vec<DependencyRecord> = data
        .catalog
        .iter()
        .filter(|record| names.contains(&record.name))
        .cloned()
        .collect();

    let relevant_updates = data
        .updates
        .iter()
        .filter(|update| names.contains(&update.name))
        .count();

    let monitored = relevant.iter().filter(|r| r.is_monitored()).count();
    let unmonitored = relevant.len() - monitored;

    let update_rows = data
        .updates
        .iter()
        .map(|update| RowToggle::new(&update.name, names.contains(&update.name)))
        .collect();

    let up_to_date_rows = data
        .catalog
        .iter()
        .filter(|record| record.is_monitored())
        .map(|record| {
            let visible = names.contains(&record.name) && !data.has_update(&record.name);
            RowToggle::new(&record.name, visible)
        })
        .collect();

    let disabled_rows = data
        .catalog
        .iter()
        .filter(|record| !record.is_monitored())
        .map(|record| RowToggle::new(&record.name, names.contains(&record.name)))
        .collect();

    let badge = health_badge(relevant_updates, monitored, data.has_update_data());

    tracing::trace!(
        relevant = relevant.len(),
        relevant_updates,
        monitored,
        badge = ?badge,
        "dependency health computed"
    );

    DependencyHealthView {
        badge,
        progress: progress(monitored, unmonitored),
        relevant,
        relevant_updates,
        update_rows,
        up_to_date_rows,
        disabled_rows,
    }
}
