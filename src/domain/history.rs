//! Build history entries and build-date normalization.

use super::changelog::ChangelogSummary;
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Display format for normalized build dates, e.g. `Mar 5, 2025`.
const DATE_DISPLAY_FORMAT: &str = "%b %-d, %Y";

/// Naive timestamp layouts accepted in addition to RFC 3339.
const NAIVE_LAYOUTS: [&str; 3] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M:%S%.f"];

/// Change summary of one build: either free text or package counters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ChangesSummary {
    Text(String),
    Counts(ChangelogSummary),
}

impl ChangesSummary {
    #[must_use]
    pub fn display(&self) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::Counts(counts) => counts.compact(),
        }
    }
}

/// One past build of a variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub built_at: String,
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub packages_total: Option<u64>,
    #[serde(default)]
    pub changes_summary: Option<ChangesSummary>,
}

/// Normalizes a build timestamp to a calendar-date display.
///
/// Accepts RFC 3339, `YYYY-MM-DD HH:MM:SS`, `YYYY-MM-DDTHH:MM:SS` and bare
/// `YYYY-MM-DD`. Anything else is returned verbatim.
///
/// # Examples
///
/// ```
/// use imagedeck::domain::format_build_date;
///
/// assert_eq!(format_build_date("2025-03-05T14:22:10Z"), "Mar 5, 2025");
/// assert_eq!(format_build_date("2025-03-05"), "Mar 5, 2025");
/// assert_eq!(format_build_date("last tuesday"), "last tuesday");
/// ```
#[must_use]
pub fn format_build_date(raw: &str) -> String {
    let trimmed = raw.trim();

    if let Ok(parsed) = DateTime::parse_from_rfc3339(trimmed) {
        return parsed.date_naive().format(DATE_DISPLAY_FORMAT).to_string();
    }

    for layout in NAIVE_LAYOUTS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(trimmed, layout) {
            return parsed.date().format(DATE_DISPLAY_FORMAT).to_string();
        }
    }

    if let Ok(parsed) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return parsed.format(DATE_DISPLAY_FORMAT).to_string();
    }

    tracing::trace!(raw = %raw, "unparsable build timestamp, showing raw value");
    raw.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rfc3339_with_offset_keeps_its_own_calendar_day() {
        assert_eq!(format_build_date("2024-12-31T23:30:00-05:00"), "Dec 31, 2024");
    }

    #[test]
    fn naive_layouts_are_accepted() {
        assert_eq!(format_build_date("2024-01-09 08:00:00"), "Jan 9, 2024");
        assert_eq!(format_build_date("2024-01-09T08:00:00"), "Jan 9, 2024");
        assert_eq!(format_build_date("2024-01-09T08:00:00.123"), "Jan 9, 2024");
    }

    #[test]
    fn invalid_dates_fall_back_to_raw() {
        assert_eq!(format_build_date("2024-02-30"), "2024-02-30");
        assert_eq!(format_build_date(""), "");
    }

    #[test]
    fn changes_summary_accepts_text_or_counts() {
        let text: ChangesSummary = serde_json::from_str(r#""3 packages updated""#).unwrap();
        assert_eq!(text.display(), "3 packages updated");

        let counts: ChangesSummary =
            serde_json::from_str(r#"{"added":1,"removed":0,"updated":4}"#).unwrap();
        assert_eq!(counts.display(), "+1 -0 ~4");
    }
}
