//! Actions representing side effects to be executed by the controller.
//!
//! The event handler never touches storage, the clipboard or the clock. It
//! returns a `Vec<Action>` after each event and the
//! [`Controller`](super::Controller) executes them in order.
//!
//! # Example
//!
//! ```rust
//! use imagedeck::app::timers::{TimerId, TimerKind};
//! use imagedeck::app::Action;
//!
//! let actions = vec![
//!     Action::CancelTimer(TimerId(1)),
//!     Action::ScheduleTimer { id: TimerId(2), kind: TimerKind::LineageSwap, delay_ms: 250 },
//! ];
//! assert_eq!(actions.len(), 2);
//! ```

use super::timers::{TimerId, TimerKind};

/// Commands produced by the event handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Writes a user preference to the preference store.
    PersistPreference {
        key: &'static str,
        value: String,
    },

    /// Schedules deferred work on the timer queue.
    ScheduleTimer {
        id: TimerId,
        kind: TimerKind,
        delay_ms: u64,
    },

    /// Cancels a pending timer; a no-op if it already fired.
    CancelTimer(TimerId),

    /// Copies a generated command to the clipboard.
    ///
    /// The controller tries the primary clipboard and falls back to selection
    /// copy, then feeds `Event::CopyCompleted` back to the handler.
    CopyToClipboard {
        container: String,
        field_id: String,
        text: String,
    },
}
