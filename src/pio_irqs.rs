//! Maps each PIO peripheral to its interrupt binding.
//!
//! [`Ws2812Strip`](crate::led_strip::Ws2812Strip) is generic over the PIO
//! block it runs on. This trait hands it the matching `bind_interrupts!`
//! struct so callers only name the block.

use embassy_rp::interrupt::typelevel::Binding;
use embassy_rp::pio::{Instance, InterruptHandler};

/// A PIO peripheral together with its bound interrupt handler.
pub trait PioIrqMap: Instance {
    /// The `bind_interrupts!` struct for this PIO block.
    type Irqs: Binding<Self::Interrupt, InterruptHandler<Self>>;

    /// Returns the binding to pass to [`embassy_rp::pio::Pio::new`].
    fn irqs() -> Self::Irqs;
}

::embassy_rp::bind_interrupts! {
    pub struct Pio0Irqs {
        PIO0_IRQ_0 => ::embassy_rp::pio::InterruptHandler<::embassy_rp::peripherals::PIO0>;
    }
}

impl PioIrqMap for embassy_rp::peripherals::PIO0 {
    type Irqs = Pio0Irqs;

    fn irqs() -> Self::Irqs {
        Pio0Irqs
    }
}

::embassy_rp::bind_interrupts! {
    pub struct Pio1Irqs {
        PIO1_IRQ_0 => ::embassy_rp::pio::InterruptHandler<::embassy_rp::peripherals::PIO1>;
    }
}

impl PioIrqMap for embassy_rp::peripherals::PIO1 {
    type Irqs = Pio1Irqs;

    fn irqs() -> Self::Irqs {
        Pio1Irqs
    }
}

#[cfg(feature = "pico2")]
::embassy_rp::bind_interrupts! {
    pub struct Pio2Irqs {
        PIO2_IRQ_0 => ::embassy_rp::pio::InterruptHandler<::embassy_rp::peripherals::PIO2>;
    }
}

#[cfg(feature = "pico2")]
impl PioIrqMap for embassy_rp::peripherals::PIO2 {
    type Irqs = Pio2Irqs;

    fn irqs() -> Self::Irqs {
        Pio2Irqs
    }
}
