//! The animation itself: board, fade counters, hue phase, and cadence.
//!
//! [`LifeSim`] bundles every piece of mutable state behind a single
//! [`tick`](LifeSim::tick) call. Four [`Periodic`] timers give each part
//! its own cadence inside one loop:
//!
//! - every 200 ms the board advances a generation;
//! - every 10 ms the fade counters step down;
//! - every 50 ms the global hue drifts forward;
//! - every 30 s the board is reseeded from its seed pattern.
//!
//! On the device, `panel_loop` polls the timers between strip writes.

#[cfg(not(feature = "host"))]
use core::convert::Infallible;

use embassy_time::{Duration, Instant};

#[cfg(not(feature = "host"))]
use crate::Result;
use crate::fade::FadeMap;
#[cfg(not(feature = "host"))]
use crate::led_strip::LedStrip;
use crate::led_strip::Frame1d;
use crate::life::LifeGrid;
use crate::render;
use crate::schedule::Periodic;

/// Board advance cadence.
pub const GENERATION_PERIOD: Duration = Duration::from_millis(200);

/// Fade counter decay cadence.
pub const FADE_PERIOD: Duration = Duration::from_millis(10);

/// Global hue drift cadence.
pub const HUE_PERIOD: Duration = Duration::from_millis(50);

/// How often the board is reseeded from its seed pattern.
pub const RESEED_PERIOD: Duration = Duration::from_secs(30);

/// Hue increment applied every [`HUE_PERIOD`], wrapping modulo 256.
pub const HUE_STEP: u8 = 4;

/// Complete state of the Life animation on a `W` x `H` panel.
///
/// Construction seeds the board; afterwards the state only changes through
/// [`tick`](LifeSim::tick) and [`reseed`](LifeSim::reseed). Rendering is a
/// read-only view, so a frame can be drawn between any two ticks.
pub struct LifeSim<const W: usize, const H: usize> {
    grid: LifeGrid<W, H>,
    fade_map: FadeMap<W, H>,
    hue: u8,
    seed_pattern: &'static [(usize, usize)],
    generation_timer: Periodic,
    fade_timer: Periodic,
    hue_timer: Periodic,
    reseed_timer: Periodic,
}

impl<const W: usize, const H: usize> LifeSim<W, H> {
    /// Creates a simulation seeded with `seed_pattern`.
    ///
    /// All four timers start counting from `start`, so the first
    /// generation lands one [`GENERATION_PERIOD`] later.
    #[must_use]
    pub fn new(start: Instant, seed_pattern: &'static [(usize, usize)]) -> Self {
        let mut grid = LifeGrid::new();
        grid.seed(seed_pattern);
        Self {
            grid,
            fade_map: FadeMap::new(),
            hue: 0,
            seed_pattern,
            generation_timer: Periodic::new(GENERATION_PERIOD, start),
            fade_timer: Periodic::new(FADE_PERIOD, start),
            hue_timer: Periodic::new(HUE_PERIOD, start),
            reseed_timer: Periodic::new(RESEED_PERIOD, start),
        }
    }

    /// Advances whichever parts of the animation are due at `now`.
    ///
    /// The board advances before the fade counters decay, so a cell that
    /// dies in this tick starts fading in this same tick. The reseed check
    /// runs last and overwrites the board when it fires.
    pub fn tick(&mut self, now: Instant) {
        if self.generation_timer.poll(now) {
            self.grid.advance_generation(&mut self.fade_map);
        }
        if self.fade_timer.poll(now) {
            self.fade_map.decay_step();
        }
        if self.hue_timer.poll(now) {
            self.hue = self.hue.wrapping_add(HUE_STEP);
        }
        if self.reseed_timer.poll(now) {
            self.reseed();
        }
    }

    /// Replaces the board with the seed pattern and clears all fades.
    ///
    /// The hue phase keeps drifting across reseeds.
    pub fn reseed(&mut self) {
        self.grid.seed(self.seed_pattern);
        self.fade_map.reset();
    }

    /// Renders the current state into `frame`.
    pub fn render_frame<const N: usize>(&self, frame: &mut Frame1d<N>) {
        render::render_frame(&self.grid, &self.fade_map, self.hue, frame);
    }

    /// The current board.
    #[must_use]
    pub fn grid(&self) -> &LifeGrid<W, H> {
        &self.grid
    }

    /// The current fade counters.
    #[must_use]
    pub fn fade_map(&self) -> &FadeMap<W, H> {
        &self.fade_map
    }

    /// The current global hue phase.
    #[must_use]
    pub fn hue(&self) -> u8 {
        self.hue
    }
}

/// Drives the panel forever: render, push to the strip, advance.
///
/// The strip write paces the loop, so the timers are polled roughly once
/// per frame (about 11 ms of wire time for a 361-LED strip). Returns only
/// if the strip write fails.
#[cfg(not(feature = "host"))]
pub async fn panel_loop<Strip, const N: usize, const W: usize, const H: usize>(
    sim: &mut LifeSim<W, H>,
    strip: &mut Strip,
) -> Result<Infallible>
where
    Strip: LedStrip<N>,
{
    defmt::info!("life panel: {}x{} cells on {} leds", W, H, N);
    loop {
        let mut frame = Frame1d::new();
        sim.render_frame(&mut frame);
        strip.update_pixels(&frame).await?;
        sim.tick(Instant::now());
    }
}
