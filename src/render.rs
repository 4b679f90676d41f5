//! Converts (grid, fade, hue) state into an LED frame.
//!
//! Colors are computed in HSV and converted with the `smart_leds` hsv
//! support. Every cell gets a position-dependent hue offset from the global
//! hue phase, so the panel shows a diagonal rainbow that drifts as the
//! phase advances:
//!
//! - a live cell renders fully saturated at value [`LIVE_CELL_VALUE`];
//! - a dead cell still fading renders at half its fade counter;
//! - everything else stays off.

use smart_leds::hsv::{Hsv, hsv2rgb};

use crate::fade::FadeMap;
use crate::layout::led_index;
use crate::led_strip::Frame1d;
use crate::life::LifeGrid;

/// HSV value (brightness) of a live cell, out of 255.
pub const LIVE_CELL_VALUE: u8 = 200;

/// Hue of the cell at (x, y) given the global hue phase.
///
/// All arithmetic wraps modulo 256; hue is a circle.
#[must_use]
pub const fn pixel_hue(base_hue: u8, x: usize, y: usize) -> u8 {
    base_hue
        .wrapping_add((x as u8).wrapping_mul(3))
        .wrapping_add((y as u8).wrapping_mul(2))
}

/// Renders the whole board into `frame`, starting from all-off.
///
/// The frame is fully recomputed: cells that are neither alive nor fading
/// come out black. Physical placement goes through
/// [`led_index`](crate::layout::led_index), so the frame is in strip order.
pub fn render_frame<const N: usize, const W: usize, const H: usize>(
    grid: &LifeGrid<W, H>,
    fade_map: &FadeMap<W, H>,
    base_hue: u8,
    frame: &mut Frame1d<N>,
) {
    assert_eq!(N, W * H, "frame length must equal the panel's LED count");

    *frame = Frame1d::new();
    for y in 0..H {
        for x in 0..W {
            let value = if grid.is_alive(x, y) {
                LIVE_CELL_VALUE
            } else {
                let fade = fade_map.get(x, y);
                if fade == 0 {
                    continue;
                }
                fade / 2
            };
            let color = hsv2rgb(Hsv {
                hue: pixel_hue(base_hue, x, y),
                sat: 255,
                val: value,
            });
            frame.set(led_index::<W, H>(x, y), color);
        }
    }
}
