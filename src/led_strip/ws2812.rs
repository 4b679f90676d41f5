//! WS2812 strip driver over PIO + DMA.

use embassy_rp::Peri;
use embassy_rp::dma::Channel;
use embassy_rp::pio::{Instance, Pio, PioPin};
use embassy_rp::pio_programs::ws2812::{PioWs2812, PioWs2812Program};
use smart_leds::brightness;

use super::{LedStrip, Rgb, color_corrected};
use crate::Result;
use crate::pio_irqs::PioIrqMap;

/// A WS2812B-class (NeoPixel) strip of `N` LEDs on one PIO state machine.
///
/// The PIO program clocks out GRB at the chipset's timing; DMA feeds it, so
/// a transmit suspends the caller only until the last pixel is on the wire.
/// Each transmit scales every pixel by the global `brightness` (0-255,
/// applied multiplicatively) and then by
/// [`TYPICAL_STRIP_CORRECTION`](super::TYPICAL_STRIP_CORRECTION).
pub struct Ws2812Strip<P: Instance, const N: usize> {
    driver: PioWs2812<'static, P, 0, N>,
    brightness: u8,
}

impl<P: PioIrqMap, const N: usize> Ws2812Strip<P, N> {
    /// Creates the strip driver on the given pin, PIO block, and DMA
    /// channel.
    ///
    /// `brightness` is fixed for the life of the strip; pass 255 for
    /// unscaled output.
    #[must_use]
    pub fn new(
        pin: Peri<'static, impl PioPin>,
        pio: Peri<'static, P>,
        dma: Peri<'static, impl Channel>,
        brightness: u8,
    ) -> Self {
        let Pio {
            mut common, sm0, ..
        } = Pio::new(pio, P::irqs());
        let program = PioWs2812Program::new(&mut common);
        let driver = PioWs2812::new(&mut common, sm0, dma, pin, &program);
        defmt::info!("ws2812 strip: {} leds, brightness {}", N, brightness);
        Self { driver, brightness }
    }
}

impl<P: Instance, const N: usize> LedStrip<N> for Ws2812Strip<P, N> {
    async fn update_pixels(&mut self, pixels: &[Rgb; N]) -> Result<()> {
        let mut adjusted = [Rgb::new(0, 0, 0); N];
        let scaled = brightness(pixels.iter().copied(), self.brightness);
        for (slot, color) in adjusted.iter_mut().zip(scaled) {
            *slot = color_corrected(color);
        }
        self.driver.write(&adjusted).await;
        Ok(())
    }
}
