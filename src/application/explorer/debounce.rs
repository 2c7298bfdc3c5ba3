//! Debounced search input.
//!
//! The caller supplies the current `Instant` on every call, so the
//! debouncer has no timer thread of its own and is deterministic in tests.

use std::time::{Duration, Instant};

/// Quiet period before search text is applied
pub const DEFAULT_DEBOUNCE_MS: u64 = 300;

#[derive(Debug, Clone)]
pub struct SearchDebouncer {
    delay: Duration,
    pending: Option<String>,
    deadline: Option<Instant>,
}

impl Default for SearchDebouncer {
    fn default() -> Self {
        Self::new(Duration::from_millis(DEFAULT_DEBOUNCE_MS))
    }
}

impl SearchDebouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
            deadline: None,
        }
    }

    /// Record new text and restart the quiet period
    pub fn input(&mut self, text: impl Into<String>, now: Instant) {
        self.pending = Some(text.into());
        self.deadline = Some(now + self.delay);
    }

    /// Take the pending text once the quiet period has elapsed
    pub fn poll(&mut self, now: Instant) -> Option<String> {
        match self.deadline {
            Some(deadline) if now >= deadline => self.flush(),
            _ => None,
        }
    }

    /// Take the pending text immediately
    pub fn flush(&mut self) -> Option<String> {
        self.deadline = None;
        self.pending.take()
    }

    /// Drop pending text without applying it
    pub fn cancel(&mut self) {
        self.pending = None;
        self.deadline = None;
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Text typed but not yet applied
    pub fn pending(&self) -> Option<&str> {
        self.pending.as_deref()
    }

    /// Time left until the pending text is due, if any
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.deadline.map(|d| d.saturating_duration_since(now))
    }
}
