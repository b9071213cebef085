//! Application state management and view computation.
//!
//! [`AppState`] is the single, serializable source of truth for everything the
//! user can change on a page: theme, registry, filters, variant selections, the
//! lineage swap phase, copy confirmations and the live announcement. Page data
//! is never stored here; it is passed in by reference and never mutated.
//!
//! # View Computation
//!
//! [`AppState::compute_view`] is a pure function of the state, the page and
//! the page's parsed dependency data. Calling it twice gives the same
//! [`PageView`].

use super::actions::Action;
use super::modes::{ActiveVariant, LineageSwap, SectionSelection};
use super::timers::{TimerId, TimerKind};
use crate::domain::{
    size_or, BuildArg, DependencyData, Registry, StatusFilter, Variant, DETAIL_PLACEHOLDER,
};
use crate::page::{Page, VariantElement};
use crate::ui::dashboard::{apply_filters, card_view, filter_counts};
use crate::ui::health::dependency_health;
use crate::ui::sections::{changelog_view, history_view, sbom_view, CHANGELOG_ROW_LIMIT};
use crate::ui::theme::ThemeMode;
use crate::ui::viewmodel::{
    DashboardView, LineageItemView, LineageView, MetaView, PageView, ThemeView, ToggleButton,
    VariantSectionView, VariantTagView,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Stagger between the entry animations of consecutive lineage items.
const LINEAGE_STAGGER_MS: u64 = 60;

/// Timing and size limits applied by the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewSettings {
    /// Exit-animation delay before swapped-out lineage items are removed.
    pub swap_delay_ms: u64,
    /// How long a copy button shows its confirmation state.
    pub copy_feedback_ms: u64,
    /// Maximum number of changelog rows rendered.
    pub changelog_limit: usize,
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self {
            swap_delay_ms: 250,
            copy_feedback_ms: 2_000,
            changelog_limit: CHANGELOG_ROW_LIMIT,
        }
    }
}

/// Central application state container.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppState {
    pub theme: ThemeMode,
    pub registry: Registry,

    /// Normalized (trimmed, lowercased) search query.
    pub search: String,
    pub status_filter: StatusFilter,

    /// Selection state per variant section, in page order.
    pub sections: Vec<SectionSelection>,

    /// Variant mirrored into the page-level display slots.
    pub active: Option<ActiveVariant>,

    /// Selected variant tag per dashboard card.
    pub card_selection: BTreeMap<String, usize>,

    /// Build-argument items settled in the lineage grid.
    pub lineage: Vec<BuildArg>,
    pub swap: LineageSwap,

    /// Cards whose copy button is in its confirmation state, with the reset timer.
    pub copied: BTreeMap<String, TimerId>,

    /// Whether the "no results" placeholder has been created on the grid.
    pub no_results_created: bool,

    /// Latest live-region message.
    pub announcement: Option<String>,

    pub settings: ViewSettings,

    next_timer: u64,
}

impl AppState {
    /// Creates a state with nothing selected and default filters.
    ///
    /// ```rust
    /// use imagedeck::app::{AppState, ViewSettings};
    /// use imagedeck::domain::Registry;
    ///
    /// let state = AppState::new(ViewSettings::default(), Registry::Ghcr);
    /// assert!(state.active.is_none());
    /// assert_eq!(state.settings.swap_delay_ms, 250);
    /// ```
    #[must_use]
    pub fn new(settings: ViewSettings, registry: Registry) -> Self {
        Self {
            theme: ThemeMode::default(),
            registry,
            search: String::new(),
            status_filter: StatusFilter::All,
            sections: Vec::new(),
            active: None,
            card_selection: BTreeMap::new(),
            lineage: Vec::new(),
            swap: LineageSwap::Idle,
            copied: BTreeMap::new(),
            no_results_created: false,
            announcement: None,
            settings,
            next_timer: 0,
        }
    }

    /// Allocates a fresh timer id.
    pub fn allocate_timer(&mut self) -> TimerId {
        self.next_timer += 1;
        TimerId(self.next_timer)
    }

    pub fn announce(&mut self, message: impl Into<String>) {
        let message = message.into();
        tracing::debug!(message = %message, "announcement");
        self.announcement = Some(message);
    }

    /// Resets per-page state for `page`: empty selections, the server-rendered
    /// lineage items and the card tags the page marked as selected.
    ///
    /// A page without variant sections shows its static carrier's build
    /// arguments when the carrier has them.
    pub fn attach(&mut self, page: &Page) {
        self.sections = vec![SectionSelection::NoVariantSelected; page.sections.len()];
        self.active = None;
        self.lineage = match &page.static_data {
            Some(carrier) if !page.has_variants() && carrier.build_args.is_some() => {
                carrier.to_variant().build_args
            }
            _ => page.lineage_items.clone(),
        };
        self.swap = LineageSwap::Idle;
        self.card_selection = page
            .cards
            .iter()
            .filter_map(|card| card.default_variant().map(|i| (card.container.clone(), i)))
            .collect();
    }

    /// Element of the active variant, if any.
    #[must_use]
    pub fn active_element<'p>(&self, page: &'p Page) -> Option<&'p VariantElement> {
        let active = self.active?;
        page.variant(active.section, active.index)
    }

    /// Variant whose data drives the derived sections.
    ///
    /// On variant pages this is the active variant; pages without variant
    /// sections fall back to their static data carrier.
    #[must_use]
    pub fn source_variant(&self, page: &Page) -> Option<Variant> {
        if page.has_variants() {
            self.active_element(page).map(VariantElement::to_variant)
        } else {
            page.static_data.as_ref().map(VariantElement::to_variant)
        }
    }

    /// Marks `index` as the exclusive selection of `section` and makes it active.
    ///
    /// Returns the actions for the lineage swap, or `None` when no such variant
    /// exists on the page.
    pub fn select_variant(
        &mut self,
        page: &Page,
        section: usize,
        index: usize,
    ) -> Option<Vec<Action>> {
        let element = page.variant(section, index)?;
        let variant = element.to_variant();

        if let Some(slot) = self.sections.get_mut(section) {
            *slot = SectionSelection::VariantSelected(index);
        }
        self.active = Some(ActiveVariant { section, index });

        tracing::debug!(
            section,
            index,
            tag = %variant.tag,
            build_args = variant.build_args.len(),
            "variant selected"
        );

        if !page.anchors.lineage_grid {
            return Some(vec![]);
        }

        Some(self.begin_lineage_swap(variant.build_args))
    }

    /// Starts (or retargets) the lineage swap towards `incoming`.
    ///
    /// Idle with `incoming` already shown, or exiting towards the same
    /// `incoming`, is left untouched so repeated selection changes nothing.
    pub fn begin_lineage_swap(&mut self, incoming: Vec<BuildArg>) -> Vec<Action> {
        let mut actions = Vec::new();

        let outgoing = match std::mem::take(&mut self.swap) {
            LineageSwap::Idle => {
                if self.lineage == incoming {
                    tracing::trace!("lineage already shows these build args");
                    return actions;
                }
                self.lineage.clone()
            }
            LineageSwap::Exiting {
                outgoing,
                incoming: pending,
                timer,
            } => {
                if pending == incoming {
                    self.swap = LineageSwap::Exiting {
                        outgoing,
                        incoming: pending,
                        timer,
                    };
                    return actions;
                }
                tracing::debug!(timer = timer.0, "cancelling pending lineage swap");
                actions.push(Action::CancelTimer(timer));
                outgoing
            }
        };

        let timer = self.allocate_timer();
        self.swap = LineageSwap::Exiting {
            outgoing,
            incoming,
            timer,
        };
        actions.push(Action::ScheduleTimer {
            id: timer,
            kind: TimerKind::LineageSwap,
            delay_ms: self.settings.swap_delay_ms,
        });
        actions
    }

    /// Applies a fired timer. Returns whether anything visible changed.
    ///
    /// Stale ids (cancelled or superseded) are ignored.
    pub fn complete_timer(&mut self, id: TimerId) -> bool {
        if let LineageSwap::Exiting { timer, .. } = &self.swap {
            if *timer == id {
                if let LineageSwap::Exiting { incoming, .. } = std::mem::take(&mut self.swap) {
                    tracing::debug!(items = incoming.len(), "lineage swap completed");
                    self.lineage = incoming;
                }
                return true;
            }
        }

        let expired: Vec<String> = self
            .copied
            .iter()
            .filter(|(_, timer)| **timer == id)
            .map(|(container, _)| container.clone())
            .collect();
        for container in &expired {
            self.copied.remove(container);
        }

        if expired.is_empty() {
            tracing::trace!(timer = id.0, "stale timer ignored");
        }
        !expired.is_empty()
    }

    /// Re-applies search and status filters and announces the outcome.
    pub fn apply_filters(&mut self, page: &Page) {
        let outcome = apply_filters(&page.cards, &self.search, self.status_filter);

        tracing::debug!(
            visible = outcome.visible_count,
            total = page.cards.len(),
            "filters applied"
        );

        if page.cards.is_empty() || !page.anchors.cards_grid {
            return;
        }

        if outcome.visible_count == 0 {
            self.no_results_created = true;
        }
        self.announce(outcome.announcement());
    }

    /// Computes the page view from current state.
    ///
    /// `dependencies` is the page's parsed dependency data (`None` when the page
    /// carries none or it failed to parse).
    #[must_use]
    pub fn compute_view(&self, page: &Page, dependencies: Option<&DependencyData>) -> PageView {
        let _span = tracing::trace_span!("compute_view").entered();

        let anchors = page.anchors;
        let source = self.source_variant(page);

        let dependency_health = source
            .as_ref()
            .filter(|_| anchors.dependency_health)
            .zip(dependencies)
            .map(|(variant, data)| dependency_health(data, &variant.arg_names()));

        let sbom = source
            .as_ref()
            .filter(|_| anchors.sbom)
            .and_then(|v| sbom_view(v.sbom.as_ref()));
        let changelog = source
            .as_ref()
            .filter(|_| anchors.changelog)
            .and_then(|v| changelog_view(v.changelog.as_ref(), self.settings.changelog_limit));
        let history = source
            .as_ref()
            .filter(|_| anchors.history)
            .and_then(|v| history_view(v.history.as_deref()));

        PageView {
            theme: ThemeView {
                mode: self.theme,
                icon_class: anchors.theme_icon.then_some(self.theme.icon_class()),
            },
            sections: self.compute_sections(page),
            meta: self.compute_meta(page),
            lineage: anchors.lineage_grid.then(|| self.compute_lineage()),
            dependency_health,
            sbom,
            changelog,
            history,
            dashboard: self.compute_dashboard(page),
            announcement: self.announcement.clone().filter(|_| anchors.live_region),
        }
    }

    fn compute_sections(&self, page: &Page) -> Vec<VariantSectionView> {
        page.sections
            .iter()
            .enumerate()
            .map(|(i, section)| {
                let selected = self.sections.get(i).and_then(|s| s.index());
                VariantSectionView {
                    tags: section
                        .variants
                        .iter()
                        .enumerate()
                        .map(|(j, element)| VariantTagView {
                            tag: element.tag.clone(),
                            selected: selected == Some(j),
                        })
                        .collect(),
                }
            })
            .collect()
    }

    fn compute_meta(&self, page: &Page) -> MetaView {
        let Some(variant) = self.source_variant(page) else {
            return MetaView::default();
        };
        let anchors = page.anchors;

        MetaView {
            current_tag: anchors.current_tag.then(|| variant.tag.clone()),
            size_amd64: anchors
                .size_amd64
                .then(|| size_or(variant.size_amd64.as_deref(), DETAIL_PLACEHOLDER)),
            size_arm64: anchors
                .size_arm64
                .then(|| size_or(variant.size_arm64.as_deref(), DETAIL_PLACEHOLDER)),
            build_digest: anchors.build_digest.then(|| variant.display_digest()),
            base_image: anchors.base_image.then(|| variant.display_base_image()),
        }
    }

    fn compute_lineage(&self) -> LineageView {
        let (items, exiting) = match &self.swap {
            LineageSwap::Idle => (&self.lineage, false),
            LineageSwap::Exiting { outgoing, .. } => (outgoing, true),
        };

        LineageView {
            items: items
                .iter()
                .zip(0_u64..)
                .map(|(arg, i)| LineageItemView {
                    name: arg.name.clone(),
                    value: arg.value.clone(),
                    animation_delay_ms: i * LINEAGE_STAGGER_MS,
                    exiting,
                })
                .collect(),
        }
    }

    fn compute_dashboard(&self, page: &Page) -> Option<DashboardView> {
        if page.cards.is_empty() {
            return None;
        }

        let outcome = apply_filters(&page.cards, &self.search, self.status_filter);
        let counts = filter_counts(&page.cards);

        let cards = page
            .cards
            .iter()
            .zip(&outcome.visible)
            .map(|(card, visible)| {
                card_view(
                    card,
                    self.registry,
                    self.card_selection.get(&card.container).copied(),
                    *visible,
                    self.copied.contains_key(&card.container),
                )
            })
            .collect();

        let no_results = (page.anchors.cards_grid && self.no_results_created)
            .then_some(outcome.visible_count == 0);

        Some(DashboardView {
            registry: self.registry,
            registry_buttons: Registry::ALL
                .iter()
                .map(|r| ToggleButton {
                    key: r.key(),
                    label: r.label().to_string(),
                    active: *r == self.registry,
                })
                .collect(),
            filter_buttons: StatusFilter::ALL
                .iter()
                .map(|f| ToggleButton {
                    key: f.key(),
                    label: format!("{} ({})", f.label(), counts.for_filter(*f)),
                    active: *f == self.status_filter,
                })
                .collect(),
            search: self.search.clone(),
            counts,
            cards,
            visible_count: outcome.visible_count,
            no_results,
        })
    }
}
