//! imagedeck: view-state controller for container image documentation pages.
//!
//! imagedeck drives the interactive parts of a container-image docs site:
//! - Variant selection with a two-phase lineage (build argument) swap
//! - Dependency health for the selected variant: badge, progress bar, row filters
//! - SBOM, changelog and build history sections from embedded JSON blobs
//! - Dashboard card filtering by name and status, with live announcements
//! - Registry switching for pull commands and clipboard copy with fallback
//! - Light/dark theme with a stored preference or the system signal

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  CLI (main.rs)                                      │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Interaction dispatch and event handling          │
//! │  - Lineage swap and copy-feedback timers            │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Storage Layer │   │ Page Layer    │
//! │ (ui/)         │   │ (storage/)    │   │ (page/)       │
//! │ - Derivations │   │ - Preferences │   │ - Document    │
//! │ - HTML render │   │ - JSON I/O    │   │ - Blob parse  │
//! │ - Theme       │   │               │   │               │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Data paths and clipboard (infrastructure/)       │
//! │  - Error types (domain/error)                       │
//! │  - Variants, dependencies, SBOM, cards (domain/)    │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Configuration
//!
//! Configuration is a TOML file, every key optional:
//!
//! ```toml
//! trace_level = "debug"
//! preferences_path = "~/.local/share/imagedeck/preferences.json"
//! default_registry = "dockerhub"
//! swap_delay_ms = 250
//! copy_feedback_ms = 2000
//! changelog_limit = 50
//! ```
//!
//! # Example
//!
//! ```rust
//! use imagedeck::app::{Input, Target};
//! use imagedeck::infrastructure::MemoryClipboard;
//! use imagedeck::page::Page;
//! use imagedeck::storage::MemoryPreferenceStore;
//! use imagedeck::{initialize, Config};
//!
//! let page = Page::from_json(r#"{"sections":[{"variants":[
//!     {"tag":"latest","selected":true},
//!     {"tag":"alpine"}
//! ]}]}"#)?;
//!
//! let mut controller = initialize(
//!     &Config::default(),
//!     page,
//!     MemoryPreferenceStore::default(),
//!     MemoryClipboard::new(),
//! );
//! controller.interact(&Target::VariantTag { section: 0, index: 1 }, &Input::Click);
//! assert_eq!(controller.view().meta.current_tag.as_deref(), Some("alpine"));
//! # Ok::<(), imagedeck::DashboardError>(())
//! ```

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod page;
pub mod storage;

pub mod ui;

pub mod observability;

pub use app::{handle_event, Action, AppState, Controller, Event, ViewSettings};
pub use domain::{DashboardError, Registry, Result};
pub use page::Page;
pub use ui::{render_document, PageView, ThemeMode};

use crate::infrastructure::clipboard::Clipboard;
use crate::storage::{JsonPreferenceStore, PreferenceStore};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Runtime configuration.
///
/// # Example
///
/// ```rust
/// use imagedeck::{Config, Registry};
///
/// let config: Config = toml::from_str(r#"
///     default_registry = "dockerhub"
///     swap_delay_ms = 100
/// "#).unwrap();
/// assert_eq!(config.default_registry, Registry::DockerHub);
/// assert_eq!(config.copy_feedback_ms, 2000);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Tracing filter directive when `RUST_LOG` is unset.
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`. Default: `"info"`
    pub trace_level: Option<String>,

    /// Location of the preferences file. `~` is expanded.
    ///
    /// Default: `preferences.json` in the platform data directory.
    pub preferences_path: Option<String>,

    /// Registry used until the user picks one. Default: `ghcr`
    pub default_registry: Registry,

    /// Lineage exit-animation delay. Default: 250
    pub swap_delay_ms: u64,

    /// Copy confirmation duration. Default: 2000
    pub copy_feedback_ms: u64,

    /// Maximum changelog rows rendered. Default: 50
    pub changelog_limit: usize,
}

impl Default for Config {
    fn default() -> Self {
        let settings = ViewSettings::default();
        Self {
            trace_level: None,
            preferences_path: None,
            default_registry: Registry::default(),
            swap_delay_ms: settings.swap_delay_ms,
            copy_feedback_ms: settings.copy_feedback_ms,
            changelog_limit: settings.changelog_limit,
        }
    }
}

impl Config {
    /// Parses configuration from a flat key/value map.
    ///
    /// Unknown keys are ignored and unparsable values fall back to defaults.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use imagedeck::{Config, Registry};
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("default_registry".to_string(), "dockerhub".to_string());
    /// map.insert("swap_delay_ms".to_string(), "not a number".to_string());
    ///
    /// let config = Config::from_map(&map);
    /// assert_eq!(config.default_registry, Registry::DockerHub);
    /// assert_eq!(config.swap_delay_ms, 250);
    /// ```
    #[must_use]
    pub fn from_map(config: &BTreeMap<String, String>) -> Self {
        Self::default().with_overrides(config)
    }

    /// Applies `key = value` overrides on top of this configuration.
    ///
    /// Keys match the TOML field names. Unknown keys are ignored and
    /// unparsable values keep the current setting.
    #[must_use]
    pub fn with_overrides(self, overrides: &BTreeMap<String, String>) -> Self {
        fn parsed<T: std::str::FromStr>(map: &BTreeMap<String, String>, key: &str) -> Option<T> {
            map.get(key).and_then(|s| s.trim().parse().ok())
        }

        Self {
            trace_level: overrides.get("trace_level").cloned().or(self.trace_level),
            preferences_path: overrides
                .get("preferences_path")
                .cloned()
                .or(self.preferences_path),
            default_registry: parsed(overrides, "default_registry")
                .unwrap_or(self.default_registry),
            swap_delay_ms: parsed(overrides, "swap_delay_ms").unwrap_or(self.swap_delay_ms),
            copy_feedback_ms: parsed(overrides, "copy_feedback_ms")
                .unwrap_or(self.copy_feedback_ms),
            changelog_limit: parsed(overrides, "changelog_limit").unwrap_or(self.changelog_limit),
        }
    }

    /// Reads a TOML configuration file.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be read and
    /// [`DashboardError::Config`] if it is not valid configuration.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        toml::from_str(&contents)
            .map_err(|e| DashboardError::Config(format!("{}: {e}", path.display())))
    }

    /// Controller timing and limits.
    #[must_use]
    pub const fn view_settings(&self) -> ViewSettings {
        ViewSettings {
            swap_delay_ms: self.swap_delay_ms,
            copy_feedback_ms: self.copy_feedback_ms,
            changelog_limit: self.changelog_limit,
        }
    }

    /// Resolved preferences file path.
    #[must_use]
    pub fn preferences_path(&self) -> PathBuf {
        self.preferences_path.as_deref().map_or_else(
            infrastructure::paths::preferences_path,
            infrastructure::paths::expand_tilde,
        )
    }

    /// Opens the JSON preference store at [`Config::preferences_path`].
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn open_preferences(&self) -> Result<JsonPreferenceStore> {
        JsonPreferenceStore::new(self.preferences_path())
    }
}

/// Loads a page into a new controller.
///
/// The stored theme and registry are restored from `store`. Without a stored
/// theme the system light/dark signal is used, then dark.
pub fn initialize<S: PreferenceStore, C: Clipboard>(
    config: &Config,
    page: Page,
    store: S,
    clipboard: C,
) -> Controller<S, C> {
    tracing::debug!(
        registry = %config.default_registry,
        swap_delay_ms = config.swap_delay_ms,
        "initializing controller"
    );

    Controller::new(
        page,
        config.view_settings(),
        config.default_registry,
        store,
        clipboard,
        ThemeMode::detect_system(),
    )
}
