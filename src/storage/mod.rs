//! Storage layer for user preferences.
//!
//! # Modules
//!
//! - `backend`: the [`PreferenceStore`] trait and the in-memory store
//! - `json`: JSON file store with atomic writes
//! - `models`: preference keys and the on-disk format

pub mod backend;
pub mod json;
pub mod models;

pub use backend::{MemoryPreferenceStore, PreferenceStore};
pub use json::JsonPreferenceStore;
pub use models::{PreferenceFile, REGISTRY_KEY, THEME_KEY};
