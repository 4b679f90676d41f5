//! LED strip frames and the strip driver capability.
//!
//! The simulation core never talks to hardware directly: it fills a
//! [`Frame1d`] and hands it to whatever implements [`LedStrip`]. On the
//! Pico that is `Ws2812Strip`, which transmits over PIO + DMA and applies
//! the global brightness scale and color correction. Host tests inspect
//! the frame buffer itself and never construct a driver.

use core::ops::{Deref, DerefMut};

use crate::Result;

/// Predefined RGB color constants from the `smart_leds` crate.
#[doc(inline)]
pub use smart_leds::colors;

/// RGB color type used by LED strip frames.
pub type Rgb = smart_leds::RGB8;

/// Per-channel color correction for typical WS2812 strips
/// (full red, 176/255 green, 240/255 blue).
pub const TYPICAL_STRIP_CORRECTION: Rgb = Rgb::new(255, 176, 240);

/// A capability that accepts a full frame of pixel colors and transmits it
/// to the physical strip, returning once the frame is on the wire.
///
/// There is no partial-update operation: every transmit carries all `N`
/// pixels in physical strip order.
pub trait LedStrip<const N: usize> {
    /// Transmits `pixels` to the strip.
    async fn update_pixels(&mut self, pixels: &[Rgb; N]) -> Result<()>;
}

/// Fixed-size 1D LED strip frame.
#[derive(Clone, Copy, Debug)]
pub struct Frame1d<const N: usize>(pub [Rgb; N]);

impl<const N: usize> Frame1d<N> {
    /// Number of LEDs in this frame.
    pub const LEN: usize = N;

    /// Create a new blank (all black) frame.
    #[must_use]
    pub const fn new() -> Self {
        Self([Rgb::new(0, 0, 0); N])
    }

    /// Create a frame filled with a single color.
    #[must_use]
    pub const fn filled(color: Rgb) -> Self {
        Self([color; N])
    }

    /// Sets the pixel at `index`, silently absorbing out-of-range writes.
    ///
    /// [`crate::layout::led_index`] maps out-of-range coordinates to the
    /// off-buffer index `N`; writing there must be a no-op, not a panic.
    pub fn set(&mut self, index: usize, color: Rgb) {
        if let Some(slot) = self.0.get_mut(index) {
            *slot = color;
        }
    }
}

impl<const N: usize> Deref for Frame1d<N> {
    type Target = [Rgb; N];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<const N: usize> DerefMut for Frame1d<N> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<const N: usize> From<[Rgb; N]> for Frame1d<N> {
    fn from(array: [Rgb; N]) -> Self {
        Self(array)
    }
}

impl<const N: usize> From<Frame1d<N>> for [Rgb; N] {
    fn from(frame: Frame1d<N>) -> Self {
        frame.0
    }
}

impl<const N: usize> Default for Frame1d<N> {
    fn default() -> Self {
        Self::new()
    }
}

/// Scales `value` by `scale`/256, with `scale` 255 acting as identity.
///
/// Same rounding as the `smart_leds` brightness adapter, so correction and
/// brightness compose consistently.
const fn scale8(value: u8, scale: u8) -> u8 {
    ((value as u16 * (scale as u16 + 1)) >> 8) as u8
}

/// Applies [`TYPICAL_STRIP_CORRECTION`] to one color.
pub(crate) const fn color_corrected(color: Rgb) -> Rgb {
    Rgb::new(
        scale8(color.r, TYPICAL_STRIP_CORRECTION.r),
        scale8(color.g, TYPICAL_STRIP_CORRECTION.g),
        scale8(color.b, TYPICAL_STRIP_CORRECTION.b),
    )
}

#[cfg(target_os = "none")]
mod ws2812;
#[cfg(target_os = "none")]
pub use ws2812::Ws2812Strip;

#[cfg(all(test, feature = "host"))]
mod host_tests;
