//! Animation engine - render loop orchestrator
//!
//! The `AnimationEngine`:
//! - Reads the current mode from the shared mode cell
//! - Renders one frame of that mode into its pixel buffer
//! - Post-processes a copy and writes it to the driver
//! - Sleeps for the mode's frame delay

use embassy_time::{Duration, Timer};

use crate::color::{BLACK, Rgb};
use crate::driver::LedDriver;
use crate::effect::EffectSet;
use crate::mode::{Mode, SharedMode};
use crate::processor::{ColorCorrection, OutputProcessor};

/// Animation engine
///
/// Generic over `D: LedDriver` to support different hardware backends.
pub struct AnimationEngine<'a, D: LedDriver<N>, const N: usize> {
    /// Hardware driver for LED output
    driver: D,
    /// Mode selected by the command side
    mode: &'a SharedMode,
    /// Current strip state, owned by the engine
    frame: [Rgb; N],
    /// Per-mode animation state
    effects: EffectSet,
    /// Output processor
    processor: OutputProcessor,
}

impl<'a, D: LedDriver<N>, const N: usize> AnimationEngine<'a, D, N> {
    pub fn new(driver: D, mode: &'a SharedMode) -> Self {
        Self {
            driver,
            mode,
            frame: [BLACK; N],
            effects: EffectSet::new(N),
            processor: OutputProcessor::default(),
        }
    }

    /// Set the color correction applied on output
    #[must_use]
    pub fn with_color_correction(mut self, color_correction: ColorCorrection) -> Self {
        self.processor.color_correction = color_correction;
        self
    }

    /// Mode the next frame will render
    pub fn mode(&self) -> Mode {
        self.mode.get()
    }

    /// Uncorrected strip state after the last frame
    pub fn frame(&self) -> &[Rgb; N] {
        &self.frame
    }

    pub fn effects(&self) -> &EffectSet {
        &self.effects
    }

    pub fn driver(&self) -> &D {
        &self.driver
    }

    /// Turn the strip off and forget the buffered frame
    pub fn clear(&mut self) {
        self.frame = [BLACK; N];
        self.driver.clear();
    }

    /// Render and output one frame of the current mode
    ///
    /// Returns how long to wait before the next frame.
    pub fn render_frame(&mut self) -> Duration {
        let mode = self.mode.get();
        let delay = self.effects.render(mode, &mut self.frame);
        let output = self.processor.process(&self.frame);
        self.driver.write(&output);
        delay
    }

    /// Process one frame
    pub async fn tick(&mut self) {
        let delay = self.render_frame();
        Timer::after(delay).await;
    }

    /// Run the engine loop indefinitely
    pub async fn run(&mut self) -> ! {
        loop {
            self.tick().await;
        }
    }
}
