//! Dashboard card grid: search/status filtering, counts and card views.

use crate::domain::{size_or, CardStatus, ContainerCard, Registry, StatusFilter, CARD_PLACEHOLDER};
use crate::ui::viewmodel::{CardView, FilterCounts, VariantTagView};

/// Announcement used when no card survives the filters.
pub const NO_RESULTS_MESSAGE: &str = "No containers match your filters";

/// Normalizes a raw search input: trimmed and lowercased.
#[must_use]
pub fn normalize_search(query: &str) -> String {
    query.trim().to_lowercase()
}

/// Whether a card passes both filters.
///
/// `search` must already be normalized. An empty search matches everything.
#[must_use]
pub fn card_matches(card: &ContainerCard, search: &str, status: StatusFilter) -> bool {
    let name_matches = search.is_empty() || card.container.to_lowercase().contains(search);
    name_matches && status.matches(card.status())
}

/// Result of applying the filters to the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOutcome {
    /// Visibility per card, in grid order.
    pub visible: Vec<bool>,
    pub visible_count: usize,
}

impl FilterOutcome {
    /// Live-region message describing the outcome.
    ///
    /// ```
    /// use imagedeck::ui::dashboard::FilterOutcome;
    ///
    /// let one = FilterOutcome { visible: vec![true, false], visible_count: 1 };
    /// assert_eq!(one.announcement(), "1 container shown");
    ///
    /// let none = FilterOutcome { visible: vec![false], visible_count: 0 };
    /// assert_eq!(none.announcement(), "No containers match your filters");
    /// ```
    #[must_use]
    pub fn announcement(&self) -> String {
        match self.visible_count {
            0 => NO_RESULTS_MESSAGE.to_string(),
            1 => "1 container shown".to_string(),
            n => format!("{n} containers shown"),
        }
    }
}

#[must_use]
pub fn apply_filters(cards: &[ContainerCard], search: &str, status: StatusFilter) -> FilterOutcome {
    let _span = tracing::trace_span!(
        "apply_filters",
        cards = cards.len(),
        search = %search,
        status = %status
    )
    .entered();

    let visible: Vec<bool> = cards
        .iter()
        .map(|card| card_matches(card, search, status))
        .collect();
    let visible_count = visible.iter().filter(|v| **v).count();

    FilterOutcome { visible, visible_count }
}

/// Counts cards per status category.
#[must_use]
pub fn filter_counts(cards: &[ContainerCard]) -> FilterCounts {
    cards.iter().fold(
        FilterCounts {
            all: cards.len(),
            ..FilterCounts::default()
        },
        |mut counts, card| {
            match card.status() {
                CardStatus::UpToDate => counts.up_to_date += 1,
                CardStatus::UpdateAvailable => counts.update_available += 1,
                CardStatus::NotPublished => counts.not_published += 1,
            }
            counts
        },
    )
}

/// Builds one card's view.
///
/// `selected` is the index of the card's selected variant tag, if any; sizes
/// fall back to the card-level values and then to the placeholder.
#[must_use]
pub fn card_view(
    card: &ContainerCard,
    registry: Registry,
    selected: Option<usize>,
    visible: bool,
    copied: bool,
) -> CardView {
    let selected_variant = selected.and_then(|i| card.variants.get(i));

    let (size_amd64, size_arm64) = selected_variant.map_or_else(
        || (card.size_amd64.as_deref(), card.size_arm64.as_deref()),
        |v| (v.size_amd64.as_deref(), v.size_arm64.as_deref()),
    );

    CardView {
        container: card.container.clone(),
        status: card.status(),
        visible,
        pull_field_id: card.pull_field_id(),
        pull_command: card.pull_command(registry, selected_variant.map(|v| v.tag.as_str())),
        tags: card
            .variants
            .iter()
            .enumerate()
            .map(|(i, v)| VariantTagView {
                tag: v.tag.clone(),
                selected: Some(i) == selected,
            })
            .collect(),
        size_amd64: size_or(size_amd64, CARD_PLACEHOLDER),
        size_arm64: size_or(size_arm64, CARD_PLACEHOLDER),
        copied,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CardVariant;

    fn card(name: &str, class: &str) -> ContainerCard {
        ContainerCard {
            container: name.to_string(),
            status_class: class.to_string(),
            ghcr_base: format!("ghcr.io/acme/{name}"),
            dockerhub_base: format!("acme/{name}"),
            default_tag: "latest".to_string(),
            size_amd64: Some("40 MB".to_string()),
            size_arm64: None,
            variants: vec![
                CardVariant {
                    tag: "latest".into(),
                    size_amd64: Some("41 MB".into()),
                    size_arm64: Some("39 MB".into()),
                    selected: true,
                },
                CardVariant {
                    tag: "alpine".into(),
                    size_amd64: None,
                    size_arm64: None,
                    selected: false,
                },
            ],
        }
    }

    fn grid() -> Vec<ContainerCard> {
        vec![
            card("nginx", "status-green"),
            card("Postgres", "status-warning"),
            card("redis", "status-red"),
        ]
    }

    #[test]
    fn visibility_is_name_and_status_conjunction() {
        let cards = grid();
        let outcome = apply_filters(&cards, &normalize_search("  POST "), StatusFilter::All);
        assert_eq!(outcome.visible, vec![false, true, false]);

        let outcome = apply_filters(
            &cards,
            &normalize_search("post"),
            StatusFilter::Only(CardStatus::UpToDate),
        );
        assert_eq!(outcome.visible_count, 0);
    }

    #[test]
    fn counts_add_up_to_total() {
        let counts = filter_counts(&grid());
        assert_eq!(counts.all, 3);
        assert_eq!(counts.up_to_date + counts.update_available + counts.not_published, counts.all);
    }

    #[test]
    fn card_view_sizes_follow_selection() {
        let card = card("nginx", "status-green");

        let view = card_view(&card, Registry::Ghcr, Some(0), true, false);
        assert_eq!(view.size_amd64, "41 MB");
        assert_eq!(view.pull_command, "docker pull ghcr.io/acme/nginx:latest");

        let view = card_view(&card, Registry::DockerHub, Some(1), true, false);
        assert_eq!(view.size_amd64, "—");
        assert_eq!(view.pull_command, "docker pull acme/nginx:alpine");

        let view = card_view(&card, Registry::Ghcr, None, true, false);
        assert_eq!(view.size_amd64, "40 MB");
        assert_eq!(view.size_arm64, "—");
    }

    #[test]
    fn plural_announcement() {
        let outcome = apply_filters(&grid(), "", StatusFilter::All);
        assert_eq!(outcome.announcement(), "3 containers shown");
    }
}
