//! The view state controller.
//!
//! [`Controller`] owns one page, its [`AppState`], the timer queue and the two
//! host services (preference store and clipboard). It feeds events through
//! [`handle_event`] and executes the returned actions until the event queue is
//! drained, so every call leaves the state settled.

use super::dispatch::{dispatch, Input, Target};
use super::handler::{handle_event, Event};
use super::state::{AppState, ViewSettings};
use super::timers::TimerQueue;
use super::Action;
use crate::domain::{DependencyData, Registry};
use crate::infrastructure::clipboard::{copy_with_fallback, Clipboard};
use crate::page::Page;
use crate::storage::models::{REGISTRY_KEY, THEME_KEY};
use crate::storage::PreferenceStore;
use crate::ui::theme::ThemeMode;
use crate::ui::viewmodel::PageView;
use std::cell::OnceCell;
use std::collections::VecDeque;

/// Drives one page.
///
/// # Example
///
/// ```rust
/// use imagedeck::app::{Controller, Event, ViewSettings};
/// use imagedeck::domain::Registry;
/// use imagedeck::infrastructure::MemoryClipboard;
/// use imagedeck::page::Page;
/// use imagedeck::storage::MemoryPreferenceStore;
///
/// let mut controller = Controller::new(
///     Page::default(),
///     ViewSettings::default(),
///     Registry::Ghcr,
///     MemoryPreferenceStore::default(),
///     MemoryClipboard::new(),
///     None,
/// );
/// controller.dispatch(Event::ToggleTheme);
/// assert_eq!(controller.view().theme.mode.key(), "light");
/// ```
pub struct Controller<S: PreferenceStore, C: Clipboard> {
    page: Page,
    state: AppState,
    timers: TimerQueue,
    store: S,
    clipboard: C,
    /// Parsed dependency data, computed on first use and kept for the page's lifetime.
    dependencies: OnceCell<Option<DependencyData>>,
}

impl<S: PreferenceStore, C: Clipboard> Controller<S, C> {
    /// Loads a page: restores stored preferences and the page's default selection.
    ///
    /// `system_theme` is the host's light/dark signal, used only when no theme
    /// preference is stored.
    pub fn new(
        page: Page,
        settings: ViewSettings,
        default_registry: Registry,
        store: S,
        clipboard: C,
        system_theme: Option<ThemeMode>,
    ) -> Self {
        let _span = tracing::debug_span!(
            "controller_new",
            sections = page.sections.len(),
            cards = page.cards.len()
        )
        .entered();

        let stored_theme = read_preference(&store, THEME_KEY);
        let stored_registry = read_preference(&store, REGISTRY_KEY);

        let mut controller = Self {
            page,
            state: AppState::new(settings, default_registry),
            timers: TimerQueue::new(),
            store,
            clipboard,
            dependencies: OnceCell::new(),
        };

        controller.dispatch(Event::Restore {
            stored_theme,
            stored_registry,
            system_theme,
        });
        controller
    }

    /// Handles an event and everything it triggers. Returns whether the view changed.
    pub fn dispatch(&mut self, event: Event) -> bool {
        let mut queue = VecDeque::from([event]);
        let mut changed = false;

        while let Some(event) = queue.pop_front() {
            let (event_changed, actions) = handle_event(&mut self.state, &self.page, &event);
            changed |= event_changed;

            for action in actions {
                if let Some(follow_up) = self.execute(action) {
                    queue.push_back(follow_up);
                }
            }
        }
        changed
    }

    /// Routes a raw interaction through the dispatch table.
    pub fn interact(&mut self, target: &Target, input: &Input) -> bool {
        dispatch(target, input).is_some_and(|event| self.dispatch(event))
    }

    /// Advances the virtual clock and fires every timer that came due.
    pub fn advance(&mut self, elapsed_ms: u64) -> bool {
        let due = self.timers.advance(elapsed_ms);
        tracing::trace!(now_ms = self.timers.now_ms(), fired = due.len(), "clock advanced");

        due.into_iter().fold(false, |changed, timer| {
            self.dispatch(Event::TimerElapsed(timer.id)) | changed
        })
    }

    /// Fires pending timers in due order until none are left.
    pub fn settle(&mut self) -> bool {
        let mut changed = false;
        while let Some(due) = self.timers.next_due() {
            changed |= self.advance(due.saturating_sub(self.timers.now_ms()));
        }
        changed
    }

    /// Computes the current view.
    #[must_use]
    pub fn view(&self) -> PageView {
        self.state.compute_view(&self.page, self.dependencies())
    }

    #[must_use]
    pub fn state(&self) -> &AppState {
        &self.state
    }

    #[must_use]
    pub fn page(&self) -> &Page {
        &self.page
    }

    #[must_use]
    pub fn timers(&self) -> &TimerQueue {
        &self.timers
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    #[must_use]
    pub fn clipboard(&self) -> &C {
        &self.clipboard
    }

    /// Parsed dependency catalog and updates for this page.
    pub fn dependencies(&self) -> Option<&DependencyData> {
        self.dependencies
            .get_or_init(|| self.page.dependencies.to_dependency_data())
            .as_ref()
    }

    /// Runs one side effect. Returns the event it produces, if any.
    fn execute(&mut self, action: Action) -> Option<Event> {
        tracing::trace!(action = ?action, "executing action");

        match action {
            Action::PersistPreference { key, value } => {
                if let Err(e) = self.store.set(key, &value) {
                    tracing::debug!(key, error = %e, "failed to persist preference");
                }
                None
            }
            Action::ScheduleTimer { id, kind, delay_ms } => {
                self.timers.schedule(id, kind, delay_ms);
                None
            }
            Action::CancelTimer(id) => {
                self.timers.cancel(id);
                None
            }
            Action::CopyToClipboard {
                container,
                field_id,
                text,
            } => {
                let outcome = copy_with_fallback(&mut self.clipboard, &field_id, &text);
                Some(Event::CopyCompleted {
                    container,
                    used_fallback: outcome.used_fallback(),
                })
            }
        }
    }

    /// Pending copy-feedback reset timers, by container.
    #[must_use]
    pub fn pending_copy_resets(&self) -> Vec<String> {
        self.state
            .copied
            .iter()
            .filter(|(_, id)| self.timers.is_pending(**id))
            .map(|(container, _)| container.clone())
            .collect()
    }
}

fn read_preference<S: PreferenceStore>(store: &S, key: &str) -> Option<String> {
    store.get(key).unwrap_or_else(|e| {
        tracing::debug!(key, error = %e, "failed to read preference");
        None
    })
}

impl<S: PreferenceStore, C: Clipboard> std::fmt::Debug for Controller<S, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Controller")
            .field("state", &self.state)
            .field("timers", &self.timers)
            .finish_non_exhaustive()
    }
}

