//! Color correction processor
//!
//! Applies multiplicative color correction to each RGB channel.
//! Compensates for the uneven channel brightness of LED strips.
//!
//! The correction color represents the scaling factors for each channel:
//! - 0xFFFFFF = no correction (100% for all channels)
//! - 0xFFB0F0 = R at 100%, G at 69%, B at 94% (typical 5050 strip)

use crate::color::{Rgb, rgb_from_u32};
use crate::math8::scale8_video;

/// Correction profile for common SMD5050 strips
pub const TYPICAL_LED_STRIP: u32 = 0xFF_B0_F0;

/// Pass-through profile
pub const UNCORRECTED: u32 = 0xFF_FF_FF;

/// Color correction processor
///
/// Default is no correction (all channels at 100%).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColorCorrection {
    /// Correction factors for each channel (0-255 = 0%-100%)
    factors: Rgb,
}

impl Default for ColorCorrection {
    fn default() -> Self {
        Self::from_rgb(UNCORRECTED)
    }
}

impl ColorCorrection {
    /// Create color correction from a u32 color value (0xRRGGBB format)
    pub const fn from_rgb(color: u32) -> Self {
        Self {
            factors: rgb_from_u32(color),
        }
    }

    /// Check if correction is active (not all channels at 100%)
    pub fn is_active(&self) -> bool {
        self.factors.r != 255 || self.factors.g != 255 || self.factors.b != 255
    }

    /// Apply color correction to a frame
    pub fn apply(&self, frame: &mut [Rgb]) {
        if !self.is_active() {
            return;
        }

        for pixel in frame.iter_mut() {
            pixel.r = scale8_video(pixel.r, self.factors.r);
            pixel.g = scale8_video(pixel.g, self.factors.g);
            pixel.b = scale8_video(pixel.b, self.factors.b);
        }
    }
}
