//! Error types for imagedeck.
//!
//! This module defines the centralized error type [`DashboardError`] and a type alias
//! [`Result`] used throughout the crate. All errors are implemented using the
//! `thiserror` crate for automatic `Error` trait implementation.
//!
//! Note that most runtime failures never surface as errors: a malformed embedded
//! blob hides its section, a missing anchor is a no-op, and a rejected clipboard
//! write falls back to selection copy. Errors are reserved for loading inputs
//! (page documents, configuration, scripts) and for the preference store.

use thiserror::Error;

/// The main error type for imagedeck operations.
///
/// # Examples
///
/// ```
/// use imagedeck::DashboardError;
///
/// fn load_page() -> Result<(), DashboardError> {
///     Err(DashboardError::Contract("missing `sections` array".to_string()))
/// }
///
/// assert!(load_page().is_err());
/// ```
#[derive(Debug, Error)]
pub enum DashboardError {
    /// The page document itself could not be read as a data contract.
    ///
    /// Embedded blobs (build args, SBOM, changelog, history) never produce this
    /// error; they degrade to a hidden section instead.
    #[error("Page contract error: {0}")]
    Contract(String),

    /// Preference storage failed.
    ///
    /// Occurs when reading from or writing to the preference file fails.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration is invalid or missing.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The primary clipboard rejected a write.
    ///
    /// Only ever observed by [`copy_with_fallback`](crate::infrastructure::clipboard::copy_with_fallback),
    /// which switches to the selection-copy path.
    #[error("Clipboard error: {0}")]
    Clipboard(String),

    /// An interaction script line could not be parsed.
    #[error("Script error on line {line}: {message}")]
    Script {
        /// 1-based line number in the script.
        line: usize,
        /// What was wrong with the line.
        message: String,
    },
}

/// A specialized `Result` type for imagedeck operations.
pub type Result<T> = std::result::Result<T, DashboardError>;
