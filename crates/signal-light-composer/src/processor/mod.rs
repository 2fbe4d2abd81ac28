//! Output processing pipeline
//!
//! Applies post-processing to rendered frames before sending to hardware.
//! Processing works on a copy; the engine's frame buffer is never modified.

mod color_correction;

pub use color_correction::{ColorCorrection, TYPICAL_LED_STRIP, UNCORRECTED};

use crate::color::Rgb;

/// Output processor - applies post-processing to frames
#[derive(Clone, Copy, Default)]
pub struct OutputProcessor {
    pub color_correction: ColorCorrection,
}

impl OutputProcessor {
    /// Return the frame as it should be sent to the strip
    pub fn process<const N: usize>(&self, frame: &[Rgb; N]) -> [Rgb; N] {
        let mut out = *frame;
        self.color_correction.apply(&mut out);
        out
    }
}
