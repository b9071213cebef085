//! Package changelog attached to a variant.
//!
//! The wire format is either a document with `changes` and an optional
//! precomputed `summary`, or a bare array of entries. Both deserialize into
//! [`Changelog`].

use serde::{Deserialize, Serialize};

/// Kind of package change between two builds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeKind {
    Added,
    Removed,
    Updated,
}

impl ChangeKind {
    /// Single-character marker used in compact summaries and row badges.
    #[must_use]
    pub const fn marker(self) -> char {
        match self {
            Self::Added => '+',
            Self::Removed => '-',
            Self::Updated => '~',
        }
    }
}

/// One package change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangelogEntry {
    #[serde(rename = "type")]
    pub kind: ChangeKind,
    pub name: String,
    /// Previous version for updates and removals; the version for additions.
    #[serde(default, alias = "version")]
    pub from: Option<String>,
    #[serde(default)]
    pub to: Option<String>,
}

/// Added/removed/updated counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangelogSummary {
    #[serde(default)]
    pub added: u64,
    #[serde(default)]
    pub removed: u64,
    #[serde(default)]
    pub updated: u64,
}

impl ChangelogSummary {
    /// Counts entries by kind.
    #[must_use]
    pub fn count(entries: &[ChangelogEntry]) -> Self {
        entries.iter().fold(Self::default(), |mut acc, entry| {
            match entry.kind {
                ChangeKind::Added => acc.added += 1,
                ChangeKind::Removed => acc.removed += 1,
                ChangeKind::Updated => acc.updated += 1,
            }
            acc
        })
    }

    /// Total number of changes, saturating at `u64::MAX`.
    #[must_use]
    pub const fn total(&self) -> u64 {
        self.added.saturating_add(self.removed).saturating_add(self.updated)
    }

    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.added == 0 && self.removed == 0 && self.updated == 0
    }

    /// Compact display form, e.g. `+3 -1 ~2`.
    ///
    /// ```
    /// use imagedeck::domain::ChangelogSummary;
    ///
    /// let summary = ChangelogSummary { added: 3, removed: 1, updated: 2 };
    /// assert_eq!(summary.compact(), "+3 -1 ~2");
    /// ```
    #[must_use]
    pub fn compact(&self) -> String {
        format!("+{} -{} ~{}", self.added, self.removed, self.updated)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ChangelogWire {
    Document {
        #[serde(default)]
        changes: Vec<ChangelogEntry>,
        #[serde(default)]
        summary: Option<ChangelogSummary>,
    },
    Entries(Vec<ChangelogEntry>),
}

/// A variant's changelog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "ChangelogWire")]
pub struct Changelog {
    pub changes: Vec<ChangelogEntry>,
    /// Precomputed summary from the build pipeline, if it shipped one.
    pub summary: Option<ChangelogSummary>,
}

impl From<ChangelogWire> for Changelog {
    fn from(wire: ChangelogWire) -> Self {
        match wire {
            ChangelogWire::Document { changes, summary } => Self { changes, summary },
            ChangelogWire::Entries(changes) => Self {
                changes,
                summary: None,
            },
        }
    }
}

impl Changelog {
    /// Summary counts: the shipped summary when present, otherwise counted.
    #[must_use]
    pub fn effective_summary(&self) -> ChangelogSummary {
        self.summary
            .unwrap_or_else(|| ChangelogSummary::count(&self.changes))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty() && self.effective_summary().is_zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_array_is_accepted() {
        let log: Changelog = serde_json::from_str(
            r#"[{"type":"added","name":"zlib","version":"1.3"},{"type":"removed","name":"bash"}]"#,
        )
        .unwrap();
        assert_eq!(log.changes.len(), 2);
        assert_eq!(log.changes[0].from.as_deref(), Some("1.3"));
        assert_eq!(log.summary, None);
        assert_eq!(log.effective_summary().compact(), "+1 -1 ~0");
    }

    #[test]
    fn shipped_summary_wins_over_counting() {
        let log: Changelog = serde_json::from_str(
            r#"{"changes":[{"type":"updated","name":"curl","from":"8.5","to":"8.6"}],
                "summary":{"added":10,"removed":2,"updated":7}}"#,
        )
        .unwrap();
        assert_eq!(log.effective_summary().compact(), "+10 -2 ~7");
    }

    #[test]
    fn empty_document_is_empty() {
        let log: Changelog = serde_json::from_str(r#"{"changes":[]}"#).unwrap();
        assert!(log.is_empty());
    }

    #[test]
    fn huge_shipped_counts_do_not_overflow() {
        let log: Changelog = serde_json::from_str(
            r#"{"changes":[],"summary":{
                "added":18446744073709551615,"removed":1,"updated":18446744073709551615
            }}"#,
        )
        .unwrap();
        assert!(!log.is_empty());
        assert_eq!(log.effective_summary().total(), u64::MAX);
    }

    #[test]
    fn unknown_change_kind_is_rejected() {
        let parsed = serde_json::from_str::<Changelog>(r#"[{"type":"renamed","name":"x"}]"#);
        assert!(parsed.is_err());
    }
}
