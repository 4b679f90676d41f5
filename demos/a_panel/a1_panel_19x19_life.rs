#![no_std]
#![no_main]
#![cfg(not(feature = "host"))]

use core::{convert::Infallible, future, panic};

use embassy_executor::Spawner;
use embassy_rp::peripherals::PIO0;
use embassy_time::{Duration, Instant, Timer};
use life_panel::{
    Result,
    layout::{NUM_LEDS, PANEL_HEIGHT, PANEL_WIDTH},
    led_strip::Ws2812Strip,
    life::DIEHARD,
    sim::{LifeSim, panel_loop},
};
use {defmt_rtt as _, panic_probe as _};

/// Master brightness applied on top of per-channel color correction.
const GLOBAL_BRIGHTNESS: u8 = 100;

#[embassy_executor::main]
async fn main(spawner: Spawner) -> ! {
    let err = inner_main(spawner).await.unwrap_err();
    panic!("{err}");
}

async fn inner_main(spawner: Spawner) -> Result<Infallible> {
    let p = embassy_rp::init(Default::default());

    // Let the strip's power rail settle before the first frame.
    Timer::after(Duration::from_millis(1_000)).await;

    let strip: Ws2812Strip<PIO0, NUM_LEDS> =
        Ws2812Strip::new(p.PIN_14, p.PIO0, p.DMA_CH0, GLOBAL_BRIGHTNESS);
    let sim = LifeSim::<PANEL_WIDTH, PANEL_HEIGHT>::new(Instant::now(), &DIEHARD);

    spawner.spawn(life_panel(sim, strip))?;

    future::pending().await // run forever
}

#[embassy_executor::task]
async fn life_panel(
    mut sim: LifeSim<PANEL_WIDTH, PANEL_HEIGHT>,
    mut strip: Ws2812Strip<PIO0, NUM_LEDS>,
) -> ! {
    let err = panel_loop(&mut sim, &mut strip).await.unwrap_err();
    panic!("{err}");
}
