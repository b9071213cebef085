//! Dashboard container cards and their status classification.

use super::registry::{pull_command, Registry};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Publication status of a container, derived from its card's status class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CardStatus {
    UpToDate,
    UpdateAvailable,
    NotPublished,
}

impl CardStatus {
    pub const ALL: [Self; 3] = [Self::UpToDate, Self::UpdateAvailable, Self::NotPublished];

    /// Classifies a card by its class list.
    ///
    /// A `status-green` class is up to date, `status-warning` has an update
    /// available, anything else is treated as not published.
    ///
    /// ```
    /// use imagedeck::domain::CardStatus;
    ///
    /// assert_eq!(CardStatus::from_class("container-card status-green"), CardStatus::UpToDate);
    /// assert_eq!(CardStatus::from_class("status-gray"), CardStatus::NotPublished);
    /// ```
    #[must_use]
    pub fn from_class(class: &str) -> Self {
        let has = |wanted: &str| class.split_whitespace().any(|c| c == wanted);
        if has("status-green") {
            Self::UpToDate
        } else if has("status-warning") {
            Self::UpdateAvailable
        } else {
            Self::NotPublished
        }
    }

    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::UpToDate => "up-to-date",
            Self::UpdateAvailable => "update-available",
            Self::NotPublished => "not-published",
        }
    }
}

/// Status filter applied to the card grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum StatusFilter {
    #[default]
    All,
    Only(CardStatus),
}

impl StatusFilter {
    pub const ALL: [Self; 4] = [
        Self::All,
        Self::Only(CardStatus::UpToDate),
        Self::Only(CardStatus::UpdateAvailable),
        Self::Only(CardStatus::NotPublished),
    ];

    #[must_use]
    pub fn matches(self, status: CardStatus) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == status,
        }
    }

    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Only(status) => status.key(),
        }
    }

    /// Button caption.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Only(CardStatus::UpToDate) => "Up to date",
            Self::Only(CardStatus::UpdateAvailable) => "Update available",
            Self::Only(CardStatus::NotPublished) => "Not published",
        }
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl From<StatusFilter> for String {
    fn from(filter: StatusFilter) -> Self {
        filter.key().to_string()
    }
}

impl TryFrom<String> for StatusFilter {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl FromStr for StatusFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|filter| filter.key() == s.trim())
            .ok_or_else(|| format!("unknown status filter: {s}"))
    }
}

/// A variant tag shown on a dashboard card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardVariant {
    pub tag: String,
    #[serde(default)]
    pub size_amd64: Option<String>,
    #[serde(default)]
    pub size_arm64: Option<String>,
    #[serde(default)]
    pub selected: bool,
}

/// One container card on the dashboard grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContainerCard {
    /// Container name; also keys the card's pull field (`pull-{container}`).
    pub container: String,
    #[serde(default)]
    pub status_class: String,
    #[serde(default)]
    pub ghcr_base: String,
    #[serde(default)]
    pub dockerhub_base: String,
    #[serde(default = "default_tag")]
    pub default_tag: String,
    #[serde(default)]
    pub size_amd64: Option<String>,
    #[serde(default)]
    pub size_arm64: Option<String>,
    #[serde(default)]
    pub variants: Vec<CardVariant>,
}

fn default_tag() -> String {
    "latest".to_string()
}

impl ContainerCard {
    #[must_use]
    pub fn status(&self) -> CardStatus {
        CardStatus::from_class(&self.status_class)
    }

    /// Id of the pull-command field this card owns.
    #[must_use]
    pub fn pull_field_id(&self) -> String {
        format!("pull-{}", self.container)
    }

    #[must_use]
    pub fn registry_base(&self, registry: Registry) -> &str {
        match registry {
            Registry::Ghcr => &self.ghcr_base,
            Registry::DockerHub => &self.dockerhub_base,
        }
    }

    /// Pull command for `tag`, or the default tag when no variant is selected.
    #[must_use]
    pub fn pull_command(&self, registry: Registry, tag: Option<&str>) -> String {
        pull_command(self.registry_base(registry), tag.unwrap_or(&self.default_tag))
    }

    /// Index of the variant the page marked as selected, if any.
    #[must_use]
    pub fn default_variant(&self) -> Option<usize> {
        self.variants.iter().position(|v| v.selected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card() -> ContainerCard {
        ContainerCard {
            container: "nginx".to_string(),
            status_class: "status-warning".to_string(),
            ghcr_base: "ghcr.io/acme/nginx".to_string(),
            dockerhub_base: "acme/nginx".to_string(),
            default_tag: "latest".to_string(),
            size_amd64: None,
            size_arm64: None,
            variants: vec![],
        }
    }

    #[test]
    fn status_class_classification() {
        assert_eq!(CardStatus::from_class("status-green"), CardStatus::UpToDate);
        assert_eq!(CardStatus::from_class("status-warning"), CardStatus::UpdateAvailable);
        assert_eq!(CardStatus::from_class("status-red"), CardStatus::NotPublished);
        assert_eq!(CardStatus::from_class(""), CardStatus::NotPublished);
    }

    #[test]
    fn status_class_is_found_in_a_class_list() {
        assert_eq!(
            CardStatus::from_class("container-card status-green"),
            CardStatus::UpToDate
        );
        assert_eq!(
            CardStatus::from_class("  container-card\tstatus-warning featured "),
            CardStatus::UpdateAvailable
        );
        assert_eq!(
            CardStatus::from_class("container-card status-greenish"),
            CardStatus::NotPublished
        );
    }

    #[test]
    fn pull_command_uses_default_tag_without_selection() {
        let card = card();
        assert_eq!(card.pull_command(Registry::DockerHub, None), "docker pull acme/nginx:latest");
        assert_eq!(
            card.pull_command(Registry::Ghcr, Some("1.27")),
            "docker pull ghcr.io/acme/nginx:1.27"
        );
    }

    #[test]
    fn status_filter_parses_keys() {
        assert_eq!("all".parse::<StatusFilter>(), Ok(StatusFilter::All));
        assert_eq!(
            "update-available".parse::<StatusFilter>(),
            Ok(StatusFilter::Only(CardStatus::UpdateAvailable))
        );
        assert!("stale".parse::<StatusFilter>().is_err());
    }

    #[test]
    fn all_filter_matches_every_status() {
        assert!(CardStatus::ALL.iter().all(|s| StatusFilter::All.matches(*s)));
        assert!(!StatusFilter::Only(CardStatus::UpToDate).matches(CardStatus::NotPublished));
    }
}
