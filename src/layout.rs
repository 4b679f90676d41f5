//! Physical panel layout: logical (x, y) cell coordinates to LED strip
//! indices.
//!
//! The panel is a single WS2812 strip folded into rows. Two wirings exist:
//!
//! - **Serpentine** (the `serpentine` feature, default): even rows run
//!   left-to-right, odd rows run right-to-left.
//! - **Linear** (feature disabled): every row runs left-to-right, as on the
//!   Wokwi simulator matrix.
//!
//! [`led_index`] is the single source of truth for the mapping. Out-of-range
//! coordinates map to the off-buffer index `W * H`, one past the last LED;
//! [`crate::led_strip::Frame1d::set`] absorbs writes there, so callers may
//! probe coordinates without bounds-checking first.

/// Panel width in cells (and LEDs per row).
pub const PANEL_WIDTH: usize = 19;

/// Panel height in cells.
pub const PANEL_HEIGHT: usize = 19;

/// Total LED count of the panel.
pub const NUM_LEDS: usize = PANEL_WIDTH * PANEL_HEIGHT;

/// Maps a logical cell coordinate to its physical LED index.
///
/// (0, 0) is the top-left corner. Returns the off-buffer index `W * H` for
/// any out-of-range coordinate.
#[must_use]
pub const fn led_index<const W: usize, const H: usize>(x: usize, y: usize) -> usize {
    if x >= W || y >= H {
        return off_buffer_index::<W, H>();
    }
    if cfg!(feature = "serpentine") && y % 2 == 1 {
        // Odd rows are wired right-to-left
        y * W + (W - 1 - x)
    } else {
        y * W + x
    }
}

/// The sentinel index returned by [`led_index`] for out-of-range
/// coordinates: one past the last LED, never a valid slot.
#[must_use]
pub const fn off_buffer_index<const W: usize, const H: usize>() -> usize {
    W * H
}
