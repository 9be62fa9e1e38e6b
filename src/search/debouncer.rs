//! Debounced query scheduling
//!
//! Holds at most one pending query. Scheduling replaces whatever was pending
//! and restarts the delay, so a burst of keystrokes collapses into a single
//! dispatch of the last text. The UI loop polls [`Debouncer::take_ready`];
//! nothing fires on its own.

use std::time::{Duration, Instant};

use super::{DEBOUNCE_DELAY, is_queryable};

#[derive(Debug)]
struct PendingQuery {
    text: String,
    armed_at: Instant,
}

#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    pending: Option<PendingQuery>,
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new()
    }
}

impl Debouncer {
    pub fn new() -> Self {
        Self::with_delay(DEBOUNCE_DELAY)
    }

    pub fn with_delay(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// Arm the timer for `text`, dropping any pending query
    ///
    /// Short text never arms a timer; it only clears what was pending.
    /// Returns whether a timer is now armed.
    pub fn schedule(&mut self, text: &str) -> bool {
        self.schedule_at(text, Instant::now())
    }

    pub fn schedule_at(&mut self, text: &str, now: Instant) -> bool {
        self.pending = None;

        if !is_queryable(text) {
            return false;
        }

        self.pending = Some(PendingQuery {
            text: text.to_string(),
            armed_at: now,
        });
        true
    }

    /// Drop the pending query, if any
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    /// Take the pending query once its delay has elapsed
    pub fn take_ready(&mut self) -> Option<String> {
        self.take_ready_at(Instant::now())
    }

    pub fn take_ready_at(&mut self, now: Instant) -> Option<String> {
        let ready = self
            .pending
            .as_ref()
            .is_some_and(|p| now.saturating_duration_since(p.armed_at) >= self.delay);

        if !ready {
            return None;
        }

        self.pending.take().map(|p| {
            log::debug!("Debounce elapsed, firing query {:?}", p.text);
            p.text
        })
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn pending_text(&self) -> Option<&str> {
        self.pending.as_ref().map(|p| p.text.as_str())
    }

    /// Time left before the pending query fires
    pub fn time_until_ready_at(&self, now: Instant) -> Option<Duration> {
        self.pending
            .as_ref()
            .map(|p| self.delay.saturating_sub(now.saturating_duration_since(p.armed_at)))
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

#[cfg(test)]
#[path = "debouncer_tests.rs"]
mod debouncer_tests;
