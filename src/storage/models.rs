//! Persisted preference keys and file format.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Key of the stored theme preference (`"light"` or `"dark"`).
pub const THEME_KEY: &str = "preferredTheme";

/// Key of the stored registry preference (`"ghcr"` or `"dockerhub"`).
pub const REGISTRY_KEY: &str = "preferredRegistry";

/// Top-level structure of the preferences file.
///
/// ```json
/// {
///   "version": 1,
///   "preferences": {
///     "preferredTheme": "light",
///     "preferredRegistry": "dockerhub"
///   }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreferenceFile {
    /// Version of the file format for future migrations.
    pub version: u32,

    #[serde(default)]
    pub preferences: BTreeMap<String, String>,
}

impl Default for PreferenceFile {
    fn default() -> Self {
        Self {
            version: 1,
            preferences: BTreeMap::new(),
        }
    }
}
