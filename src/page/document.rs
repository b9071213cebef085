//! The server-rendered page document.
//!
//! A [`Page`] is a read-only snapshot of everything the surrounding page hands
//! to the controller: variant elements with their attribute-encoded blobs, the
//! dependency data carrier, dashboard cards, the initially rendered lineage
//! items and the set of display anchors that actually exist.
//!
//! Blob attributes are kept as raw strings here. They are only interpreted by
//! [`contract`](super::contract), which never fails loudly.

use crate::domain::error::{DashboardError, Result};
use crate::domain::{BuildArg, ContainerCard};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A selectable variant element and its data attributes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantElement {
    pub tag: String,
    #[serde(default)]
    pub size_amd64: Option<String>,
    #[serde(default)]
    pub size_arm64: Option<String>,
    #[serde(default)]
    pub build_digest: Option<String>,
    #[serde(default)]
    pub base_image: Option<String>,
    /// JSON-encoded `[{name, value}]`.
    #[serde(default)]
    pub build_args: Option<String>,
    /// JSON-encoded SBOM summary.
    #[serde(default)]
    pub sbom: Option<String>,
    /// JSON-encoded changelog.
    #[serde(default)]
    pub changelog: Option<String>,
    /// JSON-encoded build history.
    #[serde(default)]
    pub build_history: Option<String>,
    /// Whether the page rendered this element as the default selection.
    #[serde(default)]
    pub selected: bool,
}

/// A group of mutually exclusive variant elements.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantSection {
    #[serde(default)]
    pub variants: Vec<VariantElement>,
}

impl VariantSection {
    /// Index of the element marked selected by the page, if any.
    ///
    /// When the page (incorrectly) marks several, the first one wins.
    #[must_use]
    pub fn default_variant(&self) -> Option<usize> {
        self.variants.iter().position(|v| v.selected)
    }
}

/// JSON-encoded dependency catalog and update list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyCarrier {
    #[serde(default)]
    pub catalog: Option<String>,
    #[serde(default)]
    pub updates: Option<String>,
}

/// Display targets present on the page.
///
/// Every mutation checks its anchor first; a missing anchor turns the
/// mutation into a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
#[allow(clippy::struct_excessive_bools)]
pub struct Anchors {
    pub current_tag: bool,
    pub size_amd64: bool,
    pub size_arm64: bool,
    pub build_digest: bool,
    pub base_image: bool,
    pub lineage_grid: bool,
    pub dependency_health: bool,
    pub sbom: bool,
    pub changelog: bool,
    pub history: bool,
    pub cards_grid: bool,
    pub live_region: bool,
    pub theme_icon: bool,
}

impl Default for Anchors {
    fn default() -> Self {
        Self {
            current_tag: true,
            size_amd64: true,
            size_arm64: true,
            build_digest: true,
            base_image: true,
            lineage_grid: true,
            dependency_health: true,
            sbom: true,
            changelog: true,
            history: true,
            cards_grid: true,
            live_region: true,
            theme_icon: true,
        }
    }
}

/// The whole page as handed over by the server renderer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub sections: Vec<VariantSection>,
    /// Single data carrier used by pages without variant selection.
    #[serde(default)]
    pub static_data: Option<VariantElement>,
    #[serde(default)]
    pub dependencies: DependencyCarrier,
    #[serde(default)]
    pub cards: Vec<ContainerCard>,
    /// Build-argument items the server rendered into the lineage grid.
    #[serde(default)]
    pub lineage_items: Vec<BuildArg>,
    #[serde(default)]
    pub anchors: Anchors,
}

impl Page {
    /// Parses a page document from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::Contract`] if the document is not valid JSON or
    /// does not have the page shape. Malformed *embedded* blobs are not checked
    /// here.
    ///
    /// # Examples
    ///
    /// ```
    /// use imagedeck::page::Page;
    ///
    /// let page = Page::from_json(r#"{"sections":[{"variants":[{"tag":"latest","selected":true}]}]}"#)?;
    /// assert_eq!(page.sections[0].default_variant(), Some(0));
    /// # Ok::<(), imagedeck::DashboardError>(())
    /// ```
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| DashboardError::Contract(format!("failed to parse page document: {e}")))
    }

    /// Reads and parses a page document file.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be read, or a contract error if
    /// its content is not a page document.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!(path = ?path, "loading page document");
        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    /// Whether the page shows variant sections (as opposed to a static carrier
    /// or a dashboard grid).
    #[must_use]
    pub fn has_variants(&self) -> bool {
        self.sections.iter().any(|s| !s.variants.is_empty())
    }

    #[must_use]
    pub fn variant(&self, section: usize, index: usize) -> Option<&VariantElement> {
        self.sections.get(section)?.variants.get(index)
    }

    /// First element marked selected by the page, as `(section, index)`.
    ///
    /// This is the variant auto-selected on load.
    #[must_use]
    pub fn default_selection(&self) -> Option<(usize, usize)> {
        self.sections
            .iter()
            .enumerate()
            .find_map(|(i, s)| s.default_variant().map(|j| (i, j)))
    }

    #[must_use]
    pub fn card(&self, container: &str) -> Option<&ContainerCard> {
        self.cards.iter().find(|c| c.container == container)
    }
}
