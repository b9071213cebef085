//! Light/dark theme mode.
//!
//! The page carries a `data-theme` attribute and a toggle icon. The mode is
//! restored from the stored preference; without one, the operating
//! environment's light/dark signal decides, falling back to dark when the
//! signal is unavailable.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Theme flag applied to the page root.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    #[default]
    Dark,
}

impl ThemeMode {
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Value of the `data-theme` attribute and of the stored preference.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Icon class of the theme toggle.
    #[must_use]
    pub const fn icon_class(self) -> &'static str {
        match self {
            Self::Light => "ti ti-sun",
            Self::Dark => "ti ti-moon",
        }
    }

    /// Reads the operating environment's light/dark signal.
    ///
    /// Returns `None` when the platform does not report a preference.
    #[must_use]
    pub fn detect_system() -> Option<Self> {
        match dark_light::detect() {
            Ok(dark_light::Mode::Light) => Some(Self::Light),
            Ok(dark_light::Mode::Dark) => Some(Self::Dark),
            Ok(dark_light::Mode::Unspecified) => None,
            Err(e) => {
                tracing::debug!(error = ?e, "system theme detection failed");
                None
            }
        }
    }

    /// Resolves the initial theme from a stored preference and a system signal.
    ///
    /// A valid stored preference wins; otherwise the system signal; otherwise dark.
    ///
    /// ```
    /// use imagedeck::ui::ThemeMode;
    ///
    /// assert_eq!(ThemeMode::resolve(Some("light"), Some(ThemeMode::Dark)), ThemeMode::Light);
    /// assert_eq!(ThemeMode::resolve(None, Some(ThemeMode::Light)), ThemeMode::Light);
    /// assert_eq!(ThemeMode::resolve(Some("sepia"), None), ThemeMode::Dark);
    /// ```
    #[must_use]
    pub fn resolve(stored: Option<&str>, system: Option<Self>) -> Self {
        stored
            .and_then(|s| s.parse().ok())
            .or(system)
            .unwrap_or_default()
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for ThemeMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(format!("unknown theme: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_and_swaps_icon() {
        assert_eq!(ThemeMode::Dark.toggled(), ThemeMode::Light);
        assert_eq!(ThemeMode::Dark.icon_class(), "ti ti-moon");
        assert_eq!(ThemeMode::Dark.toggled().icon_class(), "ti ti-sun");
    }

    #[test]
    fn unparsable_stored_value_defers_to_system() {
        assert_eq!(ThemeMode::resolve(Some("sepia"), Some(ThemeMode::Light)), ThemeMode::Light);
    }
}
