//! JSON file-based preference store.
//!
//! Preferences are kept in memory and written with an atomic
//! write-to-temp + rename, so a crash never leaves a half-written file.

use crate::domain::error::{DashboardError, Result};
use crate::storage::backend::PreferenceStore;
use crate::storage::models::PreferenceFile;
use std::path::{Path, PathBuf};

/// JSON file preference store.
///
/// Every `set` that changes a value is saved immediately; anything still
/// dirty is saved again on drop.
pub struct JsonPreferenceStore {
    /// Path to the JSON file on disk.
    file_path: PathBuf,

    data: PreferenceFile,

    /// Tracks if data has been modified since last save.
    dirty: bool,
}

impl JsonPreferenceStore {
    /// Opens (or starts) a preferences file.
    ///
    /// Parent directories are created automatically. A missing file starts an
    /// empty store.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Parent directory creation fails
    /// - File exists but contains invalid JSON
    /// - File permissions prevent reading
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use imagedeck::storage::{JsonPreferenceStore, PreferenceStore};
    /// use std::path::PathBuf;
    ///
    /// let store = JsonPreferenceStore::new(PathBuf::from("/tmp/preferences.json"))?;
    /// let theme = store.get("preferredTheme")?;
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn new(file_path: PathBuf) -> Result<Self> {
        tracing::debug!(path = ?file_path, "initializing preference store");

        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let data = if file_path.exists() {
            Self::load_from_file(&file_path)?
        } else {
            tracing::debug!("starting empty preference store");
            PreferenceFile::default()
        };

        tracing::debug!(count = data.preferences.len(), "preference store initialized");

        Ok(Self {
            file_path,
            data,
            dirty: false,
        })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.file_path
    }

    fn load_from_file(path: &Path) -> Result<PreferenceFile> {
        let contents = std::fs::read_to_string(path)?;
        let data: PreferenceFile = serde_json::from_str(&contents)
            .map_err(|e| DashboardError::Storage(format!("failed to parse preferences: {e}")))?;

        tracing::debug!(
            version = data.version,
            count = data.preferences.len(),
            "loaded preferences"
        );
        Ok(data)
    }

    /// Saves to disk using an atomic write. A clean store is not written.
    ///
    /// # Errors
    ///
    /// Returns an error if the temporary file cannot be written or renamed.
    pub fn save(&mut self) -> Result<()> {
        if !self.dirty {
            tracing::trace!("skipping save, no changes");
            return Ok(());
        }

        tracing::debug!(path = ?self.file_path, "saving preferences");

        let json = serde_json::to_string_pretty(&self.data)
            .map_err(|e| DashboardError::Storage(format!("failed to serialize preferences: {e}")))?;

        let tmp_path = self.file_path.with_extension("tmp");
        std::fs::write(&tmp_path, json)?;
        std::fs::rename(&tmp_path, &self.file_path)?;

        self.dirty = false;
        Ok(())
    }
}

impl PreferenceStore for JsonPreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let value = self.data.preferences.get(key).cloned();
        tracing::trace!(key, found = value.is_some(), "preference lookup");
        Ok(value)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let _span = tracing::debug_span!("json_set_preference", key, value).entered();

        if self.data.preferences.get(key).map(String::as_str) == Some(value) {
            return Ok(());
        }

        self.data.preferences.insert(key.to_string(), value.to_string());
        self.dirty = true;
        self.save()
    }
}

impl Drop for JsonPreferenceStore {
    fn drop(&mut self) {
        if self.dirty {
            tracing::debug!("saving dirty preferences on drop");
            if let Err(e) = self.save() {
                tracing::error!(error = %e, "failed to save on drop");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::models::THEME_KEY;

    #[test]
    fn creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/deeper/preferences.json");

        let mut store = JsonPreferenceStore::new(path.clone()).unwrap();
        store.set(THEME_KEY, "light").unwrap();

        assert!(path.exists());
        assert!(!path.with_extension("tmp").exists());
    }

    #[test]
    fn invalid_file_is_a_storage_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preferences.json");
        std::fs::write(&path, "not json").unwrap();

        let err = JsonPreferenceStore::new(path).err().unwrap();
        assert!(matches!(err, DashboardError::Storage(_)));
    }
}
