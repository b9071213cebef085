//! Dependency catalog and update records.
//!
//! The catalog is global to a page: every tracked upstream dependency with its
//! monitoring status. Updates list the subset of names with a newer upstream
//! release available. Neither is scoped to a variant; scoping happens at render
//! time through [`ArgNames`](super::ArgNames).

use serde::{Deserialize, Serialize};

/// Monitoring status of a tracked dependency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DependencyStatus {
    /// Upstream releases are checked for this dependency.
    Monitored,
    /// Monitoring is switched off.
    #[serde(alias = "unmonitored")]
    Disabled,
}

/// One entry of the global dependency catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyRecord {
    pub name: String,
    pub status: DependencyStatus,
}

impl DependencyRecord {
    pub fn new(name: impl Into<String>, status: DependencyStatus) -> Self {
        Self {
            name: name.into(),
            status,
        }
    }

    #[must_use]
    pub fn is_monitored(&self) -> bool {
        self.status == DependencyStatus::Monitored
    }
}

/// A dependency with an available upstream update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyUpdate {
    pub name: String,
    #[serde(default)]
    pub current: Option<String>,
    #[serde(default)]
    pub latest: Option<String>,
}

impl DependencyUpdate {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            current: None,
            latest: None,
        }
    }
}

/// Parsed dependency data carried by a page.
///
/// Built once per page load from the dependency data carrier and never
/// invalidated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencyData {
    pub catalog: Vec<DependencyRecord>,
    pub updates: Vec<DependencyUpdate>,
}

impl DependencyData {
    /// Whether any update data exists for the page, regardless of variant.
    #[must_use]
    pub fn has_update_data(&self) -> bool {
        !self.updates.is_empty()
    }

    /// Whether `name` appears in the update list.
    #[must_use]
    pub fn has_update(&self, name: &str) -> bool {
        self.updates.iter().any(|u| u.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unmonitored_is_an_alias_for_disabled() {
        let record: DependencyRecord =
            serde_json::from_str(r#"{"name":"curl","status":"unmonitored"}"#).unwrap();
        assert_eq!(record.status, DependencyStatus::Disabled);
        assert!(!record.is_monitored());
    }

    #[test]
    fn unknown_status_is_rejected() {
        let parsed =
            serde_json::from_str::<DependencyRecord>(r#"{"name":"curl","status":"maybe"}"#);
        assert!(parsed.is_err());
    }

    #[test]
    fn update_versions_are_optional() {
        let update: DependencyUpdate = serde_json::from_str(r#"{"name":"openssl"}"#).unwrap();
        assert_eq!(update, DependencyUpdate::new("openssl"));
    }
}
