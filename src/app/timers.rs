//! Deterministic, cancellable timers on a virtual clock.
//!
//! The controller never sleeps. Deferred work (the lineage exit animation, the
//! copy-confirmation reset) is scheduled here and released by
//! [`TimerQueue::advance`], which makes every interleaving reproducible.

use serde::{Deserialize, Serialize};

/// Identifier of a scheduled timer. Allocated by `AppState`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TimerId(pub u64);

/// What a timer does when it fires.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimerKind {
    /// Remove exiting lineage items and insert the incoming ones.
    LineageSwap,
    /// Restore a card's copy button from its confirmation state.
    CopyFeedbackReset { container: String },
}

/// A timer waiting for its due time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timer {
    pub id: TimerId,
    pub kind: TimerKind,
    /// Virtual time, in milliseconds, at which the timer fires.
    pub due_ms: u64,
}

/// Virtual-time timer queue.
#[derive(Debug, Default)]
pub struct TimerQueue {
    now_ms: u64,
    pending: Vec<Timer>,
}

impl TimerQueue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time in milliseconds.
    #[must_use]
    pub const fn now_ms(&self) -> u64 {
        self.now_ms
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    #[must_use]
    pub fn is_pending(&self, id: TimerId) -> bool {
        self.pending.iter().any(|t| t.id == id)
    }

    /// Due time of the earliest pending timer.
    #[must_use]
    pub fn next_due(&self) -> Option<u64> {
        self.pending.iter().map(|t| t.due_ms).min()
    }

    /// Schedules `kind` to fire `delay_ms` from now.
    ///
    /// Re-using an id replaces the earlier timer with that id.
    pub fn schedule(&mut self, id: TimerId, kind: TimerKind, delay_ms: u64) {
        self.pending.retain(|t| t.id != id);
        let due_ms = self.now_ms.saturating_add(delay_ms);
        tracing::trace!(timer = id.0, due_ms, kind = ?kind, "timer scheduled");
        self.pending.push(Timer { id, kind, due_ms });
    }

    /// Cancels a pending timer. Returns whether it was still pending.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        let before = self.pending.len();
        self.pending.retain(|t| t.id != id);
        let cancelled = self.pending.len() != before;
        tracing::trace!(timer = id.0, cancelled, "timer cancel requested");
        cancelled
    }

    /// Moves the clock forward and returns the timers that came due.
    ///
    /// Due timers are ordered by due time, then by id (scheduling order).
    ///
    /// ```
    /// use imagedeck::app::timers::{TimerId, TimerKind, TimerQueue};
    ///
    /// let mut queue = TimerQueue::new();
    /// queue.schedule(TimerId(1), TimerKind::LineageSwap, 250);
    /// assert!(queue.advance(249).is_empty());
    /// assert_eq!(queue.advance(1).len(), 1);
    /// assert!(queue.is_empty());
    /// ```
    pub fn advance(&mut self, elapsed_ms: u64) -> Vec<Timer> {
        self.now_ms = self.now_ms.saturating_add(elapsed_ms);
        let now = self.now_ms;

        let (mut due, pending): (Vec<Timer>, Vec<Timer>) =
            self.pending.drain(..).partition(|t| t.due_ms <= now);
        self.pending = pending;

        due.sort_by_key(|t| (t.due_ms, t.id));
        due
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cancelled_timer_never_fires() {
        let mut queue = TimerQueue::new();
        queue.schedule(TimerId(1), TimerKind::LineageSwap, 250);
        assert!(queue.cancel(TimerId(1)));
        assert!(!queue.cancel(TimerId(1)));
        assert!(queue.advance(1_000).is_empty());
    }

    #[test]
    fn due_timers_come_out_in_order() {
        let mut queue = TimerQueue::new();
        queue.schedule(TimerId(3), TimerKind::LineageSwap, 300);
        queue.schedule(
            TimerId(2),
            TimerKind::CopyFeedbackReset { container: "nginx".into() },
            100,
        );
        queue.schedule(TimerId(1), TimerKind::LineageSwap, 300);

        let fired: Vec<u64> = queue.advance(500).iter().map(|t| t.id.0).collect();
        assert_eq!(fired, vec![2, 1, 3]);
        assert_eq!(queue.now_ms(), 500);
    }

    #[test]
    fn schedule_is_relative_to_current_time() {
        let mut queue = TimerQueue::new();
        queue.advance(1_000);
        queue.schedule(TimerId(7), TimerKind::LineageSwap, 250);
        assert!(queue.advance(200).is_empty());
        assert!(queue.is_pending(TimerId(7)));
        assert_eq!(queue.advance(50)[0].due_ms, 1_250);
    }
}
