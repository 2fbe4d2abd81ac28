//! Rotating rainbow gradient

use embassy_time::Duration;

use super::EffectImpl;
use crate::color::{Rgb, fill_rainbow};

const FRAME_DELAY: Duration = Duration::from_millis(50);
const HUE_STEP: u8 = 5;

/// Rainbow effect
///
/// Fills the strip with a hue gradient and rotates the starting hue by one
/// step per frame.
#[derive(Clone, Default)]
pub struct RainbowEffect {
    base_hue: u8,
}

impl RainbowEffect {
    /// Hue of the first pixel in the next frame
    pub fn base_hue(&self) -> u8 {
        self.base_hue
    }
}

impl<const N: usize> EffectImpl<N> for RainbowEffect {
    fn render(&mut self, frame: &mut [Rgb; N]) {
        fill_rainbow(frame, self.base_hue, HUE_STEP);
        self.base_hue = self.base_hue.wrapping_add(1);
    }

    fn frame_delay(&self) -> Duration {
        FRAME_DELAY
    }
}
