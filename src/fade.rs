//! Per-cell fade counters for the death animation.
//!
//! When a live cell dies its counter jumps to [`FADE_MAX`]; an independent,
//! faster schedule then walks every counter down by [`FADE_STEP`] until it
//! reaches zero. The renderer draws a fading cell at half its counter value,
//! so a death glows for about 170 ms (255 / 15 steps of 10 ms) before going
//! dark.

/// Counter value a cell starts fading from at the moment it dies.
pub const FADE_MAX: u8 = 255;

/// Amount subtracted from every nonzero counter per decay step.
pub const FADE_STEP: u8 = 15;

/// Fade counters for a W x H cell grid.
#[derive(Clone, Copy, Debug)]
pub struct FadeMap<const W: usize, const H: usize> {
    counters: [[u8; W]; H],
}

impl<const W: usize, const H: usize> FadeMap<W, H> {
    /// Creates a map with every counter at zero.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            counters: [[0; W]; H],
        }
    }

    /// Current counter value at (x, y).
    #[must_use]
    pub fn get(&self, x: usize, y: usize) -> u8 {
        self.counters[y][x]
    }

    /// Starts the fade for a cell that just died.
    pub fn mark_dead(&mut self, x: usize, y: usize) {
        self.counters[y][x] = FADE_MAX;
    }

    /// One decay step: every counter moves [`FADE_STEP`] toward zero.
    ///
    /// Saturating: a counter smaller than the step clamps to zero instead
    /// of wrapping.
    pub fn decay_step(&mut self) {
        for row in &mut self.counters {
            for counter in row {
                *counter = counter.saturating_sub(FADE_STEP);
            }
        }
    }

    /// Zeroes every counter. Part of a full reseed.
    pub fn reset(&mut self) {
        self.counters = [[0; W]; H];
    }
}

impl<const W: usize, const H: usize> Default for FadeMap<W, H> {
    fn default() -> Self {
        Self::new()
    }
}
