//! Single-slot debounce timer.
//!
//! The timer holds at most one deadline. Scheduling while a deadline is
//! pending replaces it, so only the most recent request can ever fire.
//! Time is passed in by the caller; nothing here reads the clock, which keeps
//! the scheduler deterministic under test and lets the event loop decide how
//! long to sleep.

use std::time::{Duration, Instant};

/// Quiet interval used when none is configured.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(220);

/// Cancelable, restartable single-shot timer.
#[derive(Debug, Clone)]
pub struct Debouncer {
    interval: Duration,
    deadline: Option<Instant>,
}

impl Debouncer {
    /// Idle timer firing `interval` after the last schedule.
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            deadline: None,
        }
    }

    /// Quiet period required before firing.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Instant the pending timer fires at, if any.
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// True while a deadline is pending.
    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Start the timer, superseding any pending deadline.
    ///
    /// Returns `true` if a pending deadline was replaced.
    pub fn schedule(&mut self, now: Instant) -> bool {
        self.deadline.replace(now + self.interval).is_some()
    }

    /// Drop the pending deadline. Returns `true` if one was pending.
    pub fn cancel(&mut self) -> bool {
        self.deadline.take().is_some()
    }

    /// Consume the deadline if it has passed.
    ///
    /// Returns `true` at most once per `schedule`.
    pub fn fire_if_due(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// Remaining time before the pending deadline, zero if overdue.
    pub fn time_until_due(&self, now: Instant) -> Option<Duration> {
        self.deadline
            .map(|deadline| deadline.saturating_duration_since(now))
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE)
    }
}
