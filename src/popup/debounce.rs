use std::time::{Duration, Instant};

/// Default coalescing window for container resize notifications.
pub const DEFAULT_RESIZE_WINDOW: Duration = Duration::from_millis(100);

/// Coalesces bursts of resize notifications into a single relayout.
///
/// The first notification opens a window of fixed length; notifications arriving
/// while it is open are absorbed. [`ResizeDebouncer::poll`] reports `true` exactly
/// once, at the first poll after the window closes. The clock is passed in, so the
/// caller decides what drives polling (a frame tick, a timer, a test).
#[derive(Clone, Debug)]
pub struct ResizeDebouncer {
    window: Duration,
    deadline: Option<Instant>,
    coalesced: u32,
}

impl ResizeDebouncer {
    /// Debouncer with the given window.
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            deadline: None,
            coalesced: 0,
        }
    }

    /// Coalescing window.
    pub fn window(&self) -> Duration {
        self.window
    }

    /// Record a resize notification at `now`.
    pub fn notify(&mut self, now: Instant) {
        match self.deadline {
            Some(_) => self.coalesced += 1,
            None => {
                self.deadline = Some(now + self.window);
                self.coalesced = 0;
            }
        }
    }

    /// `true` once per window, when the window has elapsed at `now`.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                tracing::trace!(coalesced = self.coalesced, "resize window elapsed");
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// Whether a relayout is waiting for its window to close.
    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Time left until the pending relayout is due, if any.
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.deadline
            .map(|deadline| deadline.saturating_duration_since(now))
    }

    /// Drop a pending relayout.
    pub fn cancel(&mut self) {
        self.deadline = None;
        self.coalesced = 0;
    }
}

impl Default for ResizeDebouncer {
    fn default() -> Self {
        Self::new(DEFAULT_RESIZE_WINDOW)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/popup/debounce.rs"]
mod tests;
