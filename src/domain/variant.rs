//! Image variant domain model.
//!
//! A [`Variant`] is one selectable image build: a tag, per-architecture sizes,
//! provenance (digest, base image) and the ordered build arguments baked into it.
//! The build-argument names double as the join key between a variant and the
//! dependency catalog, exposed as [`ArgNames`].

use super::changelog::Changelog;
use super::history::HistoryEntry;
use super::sbom::SbomSummary;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Placeholder shown in lineage and detail-page meta slots when a value is missing.
pub const DETAIL_PLACEHOLDER: &str = "---";

/// Placeholder shown in dashboard card size slots when a value is missing.
pub const CARD_PLACEHOLDER: &str = "—";

/// Value the build pipeline writes when it could not resolve provenance.
const UNKNOWN_MARKER: &str = "unknown";

/// A named input parameter baked into a variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildArg {
    pub name: String,
    #[serde(default)]
    pub value: String,
}

impl BuildArg {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// The set of build-argument names belonging to one variant.
///
/// Dependency records, updates and list rows are relevant to a variant exactly
/// when their name is a member of this set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArgNames(BTreeSet<String>);

impl ArgNames {
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for ArgNames {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

/// One selectable image build configuration, with its embedded blobs parsed.
///
/// Blobs that were absent, unparsable or failed validation are `None`; the
/// corresponding page section is hidden for this variant.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Variant {
    pub tag: String,
    pub size_amd64: Option<String>,
    pub size_arm64: Option<String>,
    pub build_digest: Option<String>,
    pub base_image: Option<String>,
    pub build_args: Vec<BuildArg>,
    pub sbom: Option<SbomSummary>,
    pub changelog: Option<Changelog>,
    pub history: Option<Vec<HistoryEntry>>,
}

impl Variant {
    /// Creates a variant with only a tag set.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Self::default()
        }
    }

    /// Returns the build-argument name set used to scope dependent sections.
    ///
    /// # Examples
    ///
    /// ```
    /// use imagedeck::domain::{BuildArg, Variant};
    ///
    /// let mut variant = Variant::new("1.2-alpine");
    /// variant.build_args = vec![BuildArg::new("openssl", "3.2.1")];
    /// assert!(variant.arg_names().contains("openssl"));
    /// assert!(!variant.arg_names().contains("curl"));
    /// ```
    #[must_use]
    pub fn arg_names(&self) -> ArgNames {
        self.build_args.iter().map(|arg| arg.name.clone()).collect()
    }

    /// Digest for the lineage slot, or the placeholder when missing or unknown.
    #[must_use]
    pub fn display_digest(&self) -> String {
        provenance_or_placeholder(self.build_digest.as_deref())
    }

    /// Base image for the lineage slot, or the placeholder when missing or unknown.
    #[must_use]
    pub fn display_base_image(&self) -> String {
        provenance_or_placeholder(self.base_image.as_deref())
    }
}

/// Returns a size value, or `placeholder` when missing or blank.
#[must_use]
pub fn size_or(value: Option<&str>, placeholder: &str) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v.to_string(),
        _ => placeholder.to_string(),
    }
}

fn provenance_or_placeholder(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.is_empty() && v != UNKNOWN_MARKER => v.to_string(),
        _ => DETAIL_PLACEHOLDER.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_digest_renders_placeholder() {
        let mut variant = Variant::new("latest");
        variant.build_digest = Some("unknown".to_string());
        assert_eq!(variant.display_digest(), "---");

        variant.build_digest = Some("sha256:abc".to_string());
        assert_eq!(variant.display_digest(), "sha256:abc");
    }

    #[test]
    fn missing_base_image_renders_placeholder() {
        let variant = Variant::new("latest");
        assert_eq!(variant.display_base_image(), "---");
    }

    #[test]
    fn blank_size_uses_placeholder() {
        assert_eq!(size_or(Some("  "), CARD_PLACEHOLDER), "—");
        assert_eq!(size_or(None, DETAIL_PLACEHOLDER), "---");
        assert_eq!(size_or(Some("42 MB"), DETAIL_PLACEHOLDER), "42 MB");
    }

    #[test]
    fn arg_names_deduplicate() {
        let names: ArgNames = ["openssl", "curl", "openssl"].into_iter().collect();
        assert_eq!(names.len(), 2);
        assert_eq!(names.iter().collect::<Vec<_>>(), vec!["curl", "openssl"]);
    }
}
