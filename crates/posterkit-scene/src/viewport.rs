//! Host viewport tracking.
//!
//! Hosts report surface size changes in bursts while a window is dragged.
//! [`ResizeDebouncer`] collapses a burst into the final size once the events
//! have been quiet for the configured period. Time is passed in by the
//! caller so the debouncer can be driven from any event loop.

use std::time::{Duration, Instant};

use crate::geometry::Size;

/// Trailing-edge debouncer for viewport sizes.
#[derive(Debug, Clone)]
pub struct ResizeDebouncer {
    quiet: Duration,
    pending: Option<Size>,
    last_event: Option<Instant>,
}

impl ResizeDebouncer {
    pub fn new(quiet: Duration) -> Self {
        Self {
            quiet,
            pending: None,
            last_event: None,
        }
    }

    pub fn quiet_period(&self) -> Duration {
        self.quiet
    }

    /// Record a resize event. Restarts the quiet period.
    pub fn push(&mut self, size: Size, now: Instant) {
        self.pending = Some(size);
        self.last_event = Some(now);
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// When the pending size becomes due, if there is one.
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.and(self.last_event).map(|t| t + self.quiet)
    }

    /// Take the latest size once the quiet period has elapsed.
    pub fn poll(&mut self, now: Instant) -> Option<Size> {
        let due = self.deadline()?;
        if now < due {
            return None;
        }
        self.last_event = None;
        self.pending.take()
    }
}
