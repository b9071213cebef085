//! Software bill of materials summary attached to a variant.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Package inventory summary of one variant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SbomSummary {
    #[serde(default, alias = "total")]
    pub packages_total: u64,
    /// Package counts per ecosystem (`apk`, `pypi`, `npm`, ...).
    #[serde(default, alias = "by_type")]
    pub ecosystems: BTreeMap<String, u64>,
    /// Package counts per declared license.
    #[serde(default)]
    pub licenses: BTreeMap<String, u64>,
    /// SBOM document format, e.g. `spdx-json`.
    #[serde(default)]
    pub format: Option<String>,
    #[serde(default)]
    pub generated_at: Option<String>,
}

impl SbomSummary {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.packages_total == 0 && self.ecosystems.is_empty()
    }

    /// Ecosystems ordered by package count, largest first, ties by name.
    #[must_use]
    pub fn ranked_ecosystems(&self) -> Vec<(&str, u64)> {
        let mut ranked: Vec<(&str, u64)> = self
            .ecosystems
            .iter()
            .map(|(name, count)| (name.as_str(), *count))
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        ranked
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aliases_are_accepted() {
        let sbom: SbomSummary =
            serde_json::from_str(r#"{"total":12,"by_type":{"apk":10,"pypi":2}}"#).unwrap();
        assert_eq!(sbom.packages_total, 12);
        assert_eq!(sbom.ranked_ecosystems(), vec![("apk", 10), ("pypi", 2)]);
    }

    #[test]
    fn zero_packages_without_ecosystems_is_empty() {
        let sbom: SbomSummary = serde_json::from_str("{}").unwrap();
        assert!(sbom.is_empty());
    }

    #[test]
    fn ties_rank_by_name() {
        let sbom: SbomSummary =
            serde_json::from_str(r#"{"ecosystems":{"npm":3,"cargo":3,"apk":9}}"#).unwrap();
        assert_eq!(
            sbom.ranked_ecosystems(),
            vec![("apk", 9), ("cargo", 3), ("npm", 3)]
        );
    }
}
