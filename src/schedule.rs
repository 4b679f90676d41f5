//! Fixed-period timers polled from a single loop.
//!
//! The animation loop runs as fast as the LED strip lets it and asks each
//! [`Periodic`] on every pass whether its period has elapsed. This keeps
//! four cadences (generation, fade, hue, reseed) in one task with no timer
//! queue.

use embassy_time::{Duration, Instant};

/// A timer that fires once per period when polled.
#[derive(Debug, Clone, Copy)]
pub struct Periodic {
    period: Duration,
    last_fired: Instant,
}

impl Periodic {
    /// Creates a timer that first fires one `period` after `start`.
    #[must_use]
    pub const fn new(period: Duration, start: Instant) -> Self {
        Self {
            period,
            last_fired: start,
        }
    }

    /// Returns `true` if the period has elapsed since the last firing.
    ///
    /// On firing, the timer rebases to `now`. A poll that arrives several
    /// periods late still fires only once; missed firings are dropped
    /// rather than replayed.
    pub fn poll(&mut self, now: Instant) -> bool {
        if now - self.last_fired >= self.period {
            self.last_fired = now;
            true
        } else {
            false
        }
    }
}
