//! Container registries a pull command can target.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the two registries images are published to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Registry {
    /// GitHub Container Registry.
    #[default]
    Ghcr,
    /// Docker Hub.
    #[serde(alias = "docker-hub")]
    DockerHub,
}

impl Registry {
    pub const ALL: [Self; 2] = [Self::Ghcr, Self::DockerHub];

    /// Preference/attribute key (`ghcr`, `dockerhub`).
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Ghcr => "ghcr",
            Self::DockerHub => "dockerhub",
        }
    }

    /// Human-readable name used in announcements.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Ghcr => "GitHub Container Registry",
            Self::DockerHub => "Docker Hub",
        }
    }
}

impl fmt::Display for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Registry {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "ghcr" => Ok(Self::Ghcr),
            "dockerhub" | "docker-hub" => Ok(Self::DockerHub),
            other => Err(format!("unknown registry: {other}")),
        }
    }
}

/// Builds the `docker pull` command for an image reference.
///
/// ```
/// use imagedeck::domain::pull_command;
///
/// assert_eq!(
///     pull_command("ghcr.io/acme/nginx", "1.27-alpine"),
///     "docker pull ghcr.io/acme/nginx:1.27-alpine"
/// );
/// ```
#[must_use]
pub fn pull_command(base: &str, tag: &str) -> String {
    format!("docker pull {base}:{tag}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_round_trip_through_from_str() {
        for registry in Registry::ALL {
            assert_eq!(registry.key().parse::<Registry>(), Ok(registry));
        }
        assert!("quay".parse::<Registry>().is_err());
    }
}
