//! Defensive parsing of attribute-encoded data contracts.
//!
//! Every blob a page embeds goes through [`parse_blob`]: it must deserialize
//! into the expected type and pass [`Validate`]. Anything else (absent
//! attribute, invalid JSON, wrong shape, failed validation) yields `None` and a
//! `debug` event, and the section that depends on the blob is hidden.

use super::document::{DependencyCarrier, VariantElement};
use crate::domain::{
    BuildArg, Changelog, ChangelogEntry, DependencyData, DependencyRecord, DependencyUpdate,
    HistoryEntry, SbomSummary, Variant,
};
use serde::de::DeserializeOwned;

/// Schema checks that go beyond what serde enforces.
pub trait Validate {
    /// Returns a description of the first violation found.
    ///
    /// # Errors
    ///
    /// Returns the violation as a message when the value breaks the contract.
    fn validate(&self) -> Result<(), String> {
        Ok(())
    }
}

impl<T: Validate> Validate for Vec<T> {
    fn validate(&self) -> Result<(), String> {
        self.iter()
            .enumerate()
            .try_for_each(|(i, item)| item.validate().map_err(|e| format!("item {i}: {e}")))
    }
}

fn require_name(name: &str) -> Result<(), String> {
    if name.trim().is_empty() {
        Err("empty name".to_string())
    } else {
        Ok(())
    }
}

impl Validate for BuildArg {
    fn validate(&self) -> Result<(), String> {
        require_name(&self.name)
    }
}

impl Validate for DependencyRecord {
    fn validate(&self) -> Result<(), String> {
        require_name(&self.name)
    }
}

impl Validate for DependencyUpdate {
    fn validate(&self) -> Result<(), String> {
        require_name(&self.name)
    }
}

impl Validate for ChangelogEntry {
    fn validate(&self) -> Result<(), String> {
        require_name(&self.name)
    }
}

impl Validate for Changelog {
    fn validate(&self) -> Result<(), String> {
        self.changes.validate()
    }
}

impl Validate for HistoryEntry {
    fn validate(&self) -> Result<(), String> {
        if self.built_at.trim().is_empty() {
            Err("empty built_at".to_string())
        } else {
            Ok(())
        }
    }
}

impl Validate for SbomSummary {}

/// Parses one embedded blob.
///
/// `what` names the blob in log output only.
///
/// # Examples
///
/// ```
/// use imagedeck::domain::BuildArg;
/// use imagedeck::page::contract::parse_blob;
///
/// let args: Option<Vec<BuildArg>> = parse_blob(Some(r#"[{"name":"openssl","value":"3.2"}]"#), "build_args");
/// assert_eq!(args.map(|a| a.len()), Some(1));
///
/// let broken: Option<Vec<BuildArg>> = parse_blob(Some("[{"), "build_args");
/// assert!(broken.is_none());
/// ```
#[must_use]
pub fn parse_blob<T>(raw: Option<&str>, what: &'static str) -> Option<T>
where
    T: DeserializeOwned + Validate,
{
    let raw = raw?.trim();
    if raw.is_empty() {
        tracing::trace!(blob = what, "blob attribute is empty");
        return None;
    }

    let value: T = match serde_json::from_str(raw) {
        Ok(value) => value,
        Err(e) => {
            tracing::debug!(blob = what, error = %e, "blob failed to parse, hiding section");
            return None;
        }
    };

    if let Err(violation) = value.validate() {
        tracing::debug!(
            blob = what,
            violation = %violation,
            "blob failed validation, hiding section"
        );
        return None;
    }

    Some(value)
}

impl VariantElement {
    /// Interprets this element's attributes as a [`Variant`].
    ///
    /// A missing or malformed build-args attribute yields an empty argument
    /// list, which clears the lineage grid. Other blobs become `None`, which
    /// hides their section.
    #[must_use]
    pub fn to_variant(&self) -> Variant {
        let _span = tracing::trace_span!("to_variant", tag = %self.tag).entered();

        Variant {
            tag: self.tag.clone(),
            size_amd64: self.size_amd64.clone(),
            size_arm64: self.size_arm64.clone(),
            build_digest: self.build_digest.clone(),
            base_image: self.base_image.clone(),
            build_args: parse_blob(self.build_args.as_deref(), "build_args").unwrap_or_default(),
            sbom: parse_blob::<SbomSummary>(self.sbom.as_deref(), "sbom").filter(|s| !s.is_empty()),
            changelog: parse_blob::<Changelog>(self.changelog.as_deref(), "changelog")
                .filter(|c| !c.is_empty()),
            history: parse_blob::<Vec<HistoryEntry>>(self.build_history.as_deref(), "build_history")
                .filter(|h| !h.is_empty()),
        }
    }
}

impl DependencyCarrier {
    /// Interprets the dependency data carrier.
    ///
    /// Returns `None` when the catalog is absent or malformed. A missing or
    /// malformed update list is treated as "no update data".
    #[must_use]
    pub fn to_dependency_data(&self) -> Option<DependencyData> {
        let catalog: Vec<DependencyRecord> =
            parse_blob(self.catalog.as_deref(), "dependency_catalog")?;
        let updates: Vec<DependencyUpdate> =
            parse_blob(self.updates.as_deref(), "dependency_updates").unwrap_or_default();

        tracing::debug!(
            catalog = catalog.len(),
            updates = updates.len(),
            "dependency data parsed"
        );

        Some(DependencyData { catalog, updates })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DependencyStatus;

    #[test]
    fn absent_blob_is_none() {
        assert!(parse_blob::<SbomSummary>(None, "sbom").is_none());
        assert!(parse_blob::<SbomSummary>(Some("   "), "sbom").is_none());
    }

    #[test]
    fn empty_names_fail_validation() {
        let args: Option<Vec<BuildArg>> =
            parse_blob(
                Some(r#"[{"name":"ok","value":"1"},{"name":"","value":"2"}]"#),
                "build_args",
            );
        assert!(args.is_none());
    }

    #[test]
    fn malformed_build_args_clear_the_list() {
        let element = VariantElement {
            tag: "latest".into(),
            build_args: Some("{not json".into()),
            ..Default::default()
        };
        assert!(element.to_variant().build_args.is_empty());
    }

    #[test]
    fn empty_blobs_hide_sections() {
        let element = VariantElement {
            tag: "latest".into(),
            sbom: Some("{}".into()),
            changelog: Some(r#"{"changes":[]}"#.into()),
            build_history: Some("[]".into()),
            ..Default::default()
        };
        let variant = element.to_variant();
        assert!(variant.sbom.is_none());
        assert!(variant.changelog.is_none());
        assert!(variant.history.is_none());
    }

    #[test]
    fn missing_updates_mean_no_update_data() {
        let carrier = DependencyCarrier {
            catalog: Some(r#"[{"name":"openssl","status":"monitored"}]"#.into()),
            updates: None,
        };
        let data = carrier.to_dependency_data().unwrap();
        assert_eq!(data.catalog[0].status, DependencyStatus::Monitored);
        assert!(!data.has_update_data());
    }

    #[test]
    fn malformed_catalog_hides_dependency_health() {
        let carrier = DependencyCarrier {
            catalog: Some("oops".into()),
            updates: Some(r#"[{"name":"openssl"}]"#.into()),
        };
        assert!(carrier.to_dependency_data().is_none());
    }
}
