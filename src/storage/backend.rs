//! Preference store abstraction.
//!
//! The controller persists two user preferences (theme and registry). This
//! trait keeps it independent of where they live, so tests and the
//! `--no-persist` CLI mode can swap in [`MemoryPreferenceStore`].

use crate::domain::error::Result;
use std::collections::BTreeMap;

/// Key/value store for user preferences.
///
/// # Implementations
///
/// - [`JsonPreferenceStore`](super::JsonPreferenceStore): JSON file with atomic writes
/// - [`MemoryPreferenceStore`]: in-process map, nothing survives the process
///
/// # Examples
///
/// ```
/// use imagedeck::storage::{MemoryPreferenceStore, PreferenceStore};
///
/// let mut store = MemoryPreferenceStore::default();
/// store.set("preferredTheme", "light")?;
/// assert_eq!(store.get("preferredTheme")?.as_deref(), Some("light"));
/// # Ok::<(), imagedeck::DashboardError>(())
/// ```
pub trait PreferenceStore {
    /// Reads a stored preference. `Ok(None)` when nothing is stored.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Stores a preference, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be written.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Preference store that lives only as long as the process.
#[derive(Debug, Clone, Default)]
pub struct MemoryPreferenceStore {
    values: BTreeMap<String, String>,
}

impl MemoryPreferenceStore {
    /// Creates a store pre-populated with `values`.
    #[must_use]
    pub fn with_values<K, V>(values: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            values: values.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        tracing::trace!(key, value, "preference stored in memory");
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
