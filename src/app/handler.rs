//! Event handling and state transition logic.
//!
//! [`handle_event`] is the only place where [`AppState`] changes. It never
//! performs side effects: storage writes, clipboard access and deferred work
//! come back as [`Action`]s for the [`Controller`](super::Controller) to run.
//!
//! # Event Types
//!
//! - **Lifecycle**: `Restore`
//! - **Variants**: `SelectVariant`, `SelectCardVariant`
//! - **Filters**: `Search`, `FilterStatus`
//! - **Preferences**: `SetRegistry`, `ToggleTheme`
//! - **Clipboard**: `CopyPullCommand`, `CopyCompleted`
//! - **Clock**: `TimerElapsed`
//!
//! # Example
//!
//! ```rust
//! use imagedeck::app::{handle_event, AppState, Event, ViewSettings};
//! use imagedeck::domain::Registry;
//! use imagedeck::page::Page;
//!
//! let page = Page::default();
//! let mut state = AppState::new(ViewSettings::default(), Registry::Ghcr);
//! let (changed, actions) = handle_event(&mut state, &page, &Event::ToggleTheme);
//! assert!(changed);
//! assert_eq!(actions.len(), 1);
//! ```

use crate::app::timers::{TimerId, TimerKind};
use crate::app::{Action, AppState};
use crate::domain::{Registry, StatusFilter};
use crate::page::Page;
use crate::storage::models::{REGISTRY_KEY, THEME_KEY};
use crate::ui::dashboard::normalize_search;
use crate::ui::theme::ThemeMode;

/// Announcement after a successful copy.
pub const COPIED_MESSAGE: &str = "Pull command copied to clipboard";

/// Events triggered by page load, user interaction or the timer queue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Page load: restores preferences and the page's initial selections.
    ///
    /// No announcement is made and nothing is persisted.
    Restore {
        /// Stored theme preference, if any.
        stored_theme: Option<String>,
        /// Stored registry preference, if any.
        stored_registry: Option<String>,
        /// System light/dark signal, when available.
        system_theme: Option<ThemeMode>,
    },

    /// Selects a variant tag within a variant section.
    SelectVariant { section: usize, index: usize },

    /// Selects a variant tag on a dashboard card.
    SelectCardVariant { container: String, index: usize },

    /// Replaces the search query (raw input, normalized by the handler).
    Search(String),

    /// Replaces the status filter.
    FilterStatus(StatusFilter),

    /// Switches the registry used for every pull command.
    SetRegistry { registry: Registry, persist: bool },

    ToggleTheme,

    /// Requests a copy of a card's pull command.
    CopyPullCommand { container: String },

    /// Reports that the copy finished, via the primary clipboard or the fallback.
    CopyCompleted { container: String, used_fallback: bool },

    /// A scheduled timer came due.
    TimerElapsed(TimerId),
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// The returned flag tells whether the visible state may have changed and the
/// view should be recomputed. Events that reference variants or cards that do
/// not exist on the page are ignored.
///
/// # Tracing
///
/// Each call creates a debug-level span with the event.
#[allow(clippy::too_many_lines)]
pub fn handle_event(state: &mut AppState, page: &Page, event: &Event) -> (bool, Vec<Action>) {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::Restore {
            stored_theme,
            stored_registry,
            system_theme,
        } => {
            state.theme = ThemeMode::resolve(stored_theme.as_deref(), *system_theme);

            if let Some(raw) = stored_registry {
                match raw.parse::<Registry>() {
                    Ok(registry) => state.registry = registry,
                    Err(e) => {
                        tracing::debug!(stored = %raw, error = %e, "ignoring stored registry");
                    }
                }
            }

            state.attach(page);

            let mut actions = Vec::new();
            if let Some((section, index)) = page.default_selection() {
                if let Some(mut swap) = state.select_variant(page, section, index) {
                    actions.append(&mut swap);
                }
            }

            tracing::debug!(
                theme = %state.theme,
                registry = %state.registry,
                active = ?state.active,
                "page state restored"
            );
            (true, actions)
        }

        Event::SelectVariant { section, index } => {
            let Some(actions) = state.select_variant(page, *section, *index) else {
                tracing::debug!(section, index, "no such variant");
                return (false, vec![]);
            };
            if let Some(element) = page.variant(*section, *index) {
                state.announce(format!("Selected variant {}", element.tag));
            }
            (true, actions)
        }

        Event::SelectCardVariant { container, index } => {
            let Some(variant) = page
                .card(container)
                .and_then(|card| card.variants.get(*index))
            else {
                tracing::debug!(container = %container, index, "no such card variant");
                return (false, vec![]);
            };
            state.card_selection.insert(container.clone(), *index);
            state.announce(format!("Selected variant {}", variant.tag));
            (true, vec![])
        }

        Event::Search(query) => {
            state.search = normalize_search(query);
            state.apply_filters(page);
            (true, vec![])
        }

        Event::FilterStatus(filter) => {
            state.status_filter = *filter;
            state.apply_filters(page);
            (true, vec![])
        }

        Event::SetRegistry { registry, persist } => {
            state.registry = *registry;
            if !persist {
                return (true, vec![]);
            }
            state.announce(format!("Registry switched to {}", registry.label()));
            (
                true,
                vec![Action::PersistPreference {
                    key: REGISTRY_KEY,
                    value: registry.key().to_string(),
                }],
            )
        }

        Event::ToggleTheme => {
            state.theme = state.theme.toggled();
            state.announce(format!("Theme switched to {} mode", state.theme));
            (
                true,
                vec![Action::PersistPreference {
                    key: THEME_KEY,
                    value: state.theme.key().to_string(),
                }],
            )
        }

        Event::CopyPullCommand { container } => {
            let Some(card) = page.card(container) else {
                tracing::debug!(container = %container, "copy requested for unknown card");
                return (false, vec![]);
            };
            let selected = state.card_selection.get(container).and_then(|i| card.variants.get(*i));
            (
                false,
                vec![Action::CopyToClipboard {
                    container: container.clone(),
                    field_id: card.pull_field_id(),
                    text: card.pull_command(state.registry, selected.map(|v| v.tag.as_str())),
                }],
            )
        }

        Event::CopyCompleted {
            container,
            used_fallback,
        } => {
            tracing::debug!(container = %container, used_fallback, "copy completed");

            let mut actions = Vec::new();
            if let Some(previous) = state.copied.remove(container) {
                actions.push(Action::CancelTimer(previous));
            }

            let timer = state.allocate_timer();
            state.copied.insert(container.clone(), timer);
            state.announce(COPIED_MESSAGE);

            actions.push(Action::ScheduleTimer {
                id: timer,
                kind: TimerKind::CopyFeedbackReset {
                    container: container.clone(),
                },
                delay_ms: state.settings.copy_feedback_ms,
            });
            (true, actions)
        }

        Event::TimerElapsed(id) => (state.complete_timer(*id), vec![]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::modes::LineageSwap;
    use crate::app::ViewSettings;
    use crate::domain::BuildArg;
    use crate::page::{VariantElement, VariantSection};

    fn element(tag: &str, args: Option<&str>, selected: bool) -> VariantElement {
        VariantElement {
            tag: tag.to_string(),
            build_args: args.map(String::from),
            selected,
            ..VariantElement::default()
        }
    }

    fn page() -> Page {
        Page {
            sections: vec![VariantSection {
                variants: vec![
                    element("latest", Some(r#"[{"name":"PHP_VERSION","value":"8.3"}]"#), true),
                    element("8.2", Some(r#"[{"name":"PHP_VERSION","value":"8.2"}]"#), false),
                    element("bare", None, false),
                ],
            }],
            ..Page::default()
        }
    }

    fn restored(page: &Page) -> AppState {
        let mut state = AppState::new(ViewSettings::default(), Registry::Ghcr);
        handle_event(
            &mut state,
            page,
            &Event::Restore {
                stored_theme: None,
                stored_registry: None,
                system_theme: None,
            },
        );
        state
    }

    #[test]
    fn restore_selects_marked_variant_without_announcing() {
        let page = page();
        let state = restored(&page);
        assert_eq!(state.sections[0].index(), Some(0));
        assert!(state.announcement.is_none());
        assert!(matches!(state.swap, LineageSwap::Exiting { .. }));
    }

    #[test]
    fn restore_ignores_unknown_registry() {
        let page = page();
        let mut state = AppState::new(ViewSettings::default(), Registry::DockerHub);
        handle_event(
            &mut state,
            &page,
            &Event::Restore {
                stored_theme: Some("light".into()),
                stored_registry: Some("quay".into()),
                system_theme: Some(ThemeMode::Dark),
            },
        );
        assert_eq!(state.registry, Registry::DockerHub);
        assert_eq!(state.theme, ThemeMode::Light);
    }

    #[test]
    fn selection_is_exclusive_within_section() {
        let page = page();
        let mut state = restored(&page);
        let select = Event::SelectVariant { section: 0, index: 1 };
        let (changed, _) = handle_event(&mut state, &page, &select);
        assert!(changed);
        assert_eq!(state.sections[0].index(), Some(1));
        assert_eq!(state.announcement.as_deref(), Some("Selected variant 8.2"));
    }

    #[test]
    fn unknown_variant_is_ignored() {
        let page = page();
        let mut state = restored(&page);
        let before = state.clone();
        let select = Event::SelectVariant { section: 3, index: 0 };
        let (changed, actions) = handle_event(&mut state, &page, &select);
        assert!(!changed);
        assert!(actions.is_empty());
        assert_eq!(state, before);
    }

    #[test]
    fn reselect_during_swap_cancels_pending_timer() {
        let page = page();
        let mut state = restored(&page);
        let LineageSwap::Exiting { timer: first, .. } = state.swap.clone() else {
            panic!("expected a pending swap");
        };

        let select = Event::SelectVariant { section: 0, index: 1 };
        let (_, actions) = handle_event(&mut state, &page, &select);
        assert_eq!(actions[0], Action::CancelTimer(first));

        let LineageSwap::Exiting { outgoing, incoming, timer } = state.swap.clone() else {
            panic!("expected a pending swap");
        };
        assert!(outgoing.is_empty());
        assert_eq!(incoming, vec![BuildArg::new("PHP_VERSION", "8.2")]);
        assert_ne!(timer, first);

        assert!(!handle_event(&mut state, &page, &Event::TimerElapsed(first)).0);
        assert!(handle_event(&mut state, &page, &Event::TimerElapsed(timer)).0);
        assert_eq!(state.lineage, incoming);
    }

    #[test]
    fn missing_build_args_clear_the_lineage() {
        let page = page();
        let mut state = restored(&page);
        let LineageSwap::Exiting { timer, .. } = state.swap.clone() else {
            panic!("expected a pending swap");
        };
        handle_event(&mut state, &page, &Event::TimerElapsed(timer));

        let select = Event::SelectVariant { section: 0, index: 2 };
        let (_, actions) = handle_event(&mut state, &page, &select);
        let Some(Action::ScheduleTimer { id, .. }) = actions.last().cloned() else {
            panic!("expected a swap timer");
        };
        handle_event(&mut state, &page, &Event::TimerElapsed(id));
        assert!(state.lineage.is_empty());
    }

    #[test]
    fn registry_restore_does_not_persist_or_announce() {
        let page = page();
        let mut state = restored(&page);
        let (_, actions) = handle_event(
            &mut state,
            &page,
            &Event::SetRegistry {
                registry: Registry::DockerHub,
                persist: false,
            },
        );
        assert!(actions.is_empty());
        assert!(state.announcement.is_none());

        let (_, actions) = handle_event(
            &mut state,
            &page,
            &Event::SetRegistry {
                registry: Registry::Ghcr,
                persist: true,
            },
        );
        assert_eq!(
            actions,
            vec![Action::PersistPreference {
                key: REGISTRY_KEY,
                value: "ghcr".into()
            }]
        );
        assert_eq!(
            state.announcement.as_deref(),
            Some("Registry switched to GitHub Container Registry")
        );
    }

    #[test]
    fn theme_toggle_persists_and_announces() {
        let page = page();
        let mut state = restored(&page);
        assert_eq!(state.theme, ThemeMode::Dark);

        let (_, actions) = handle_event(&mut state, &page, &Event::ToggleTheme);
        assert_eq!(state.theme, ThemeMode::Light);
        assert_eq!(
            actions,
            vec![Action::PersistPreference {
                key: THEME_KEY,
                value: "light".into()
            }]
        );
        assert_eq!(state.announcement.as_deref(), Some("Theme switched to light mode"));
    }
}
