//! Filesystem locations for persisted state.

use std::path::PathBuf;

const APP_DIR: &str = "imagedeck";

/// Returns the data directory for imagedeck storage.
///
/// This is the platform data directory (`~/.local/share/imagedeck` on Linux),
/// or `./.imagedeck` when the platform has none.
#[must_use]
pub fn data_dir() -> PathBuf {
    dirs::data_dir().map_or_else(|| PathBuf::from(".").join(".imagedeck"), |d| d.join(APP_DIR))
}

/// Default location of the preferences file.
#[must_use]
pub fn preferences_path() -> PathBuf {
    data_dir().join("preferences.json")
}

/// Expands a leading `~` to the user's home directory.
///
/// Paths without a tilde, or a tilde when no home directory is known, are
/// returned unchanged.
///
/// ```
/// use imagedeck::infrastructure::expand_tilde;
/// use std::path::PathBuf;
///
/// assert_eq!(expand_tilde("/absolute/path"), PathBuf::from("/absolute/path"));
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> PathBuf {
    let home = dirs::home_dir();
    match (path, home) {
        ("~", Some(home)) => home,
        (p, Some(home)) if p.starts_with("~/") => home.join(&p[2..]),
        (p, _) => PathBuf::from(p),
    }
}
