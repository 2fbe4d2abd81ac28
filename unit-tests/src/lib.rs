//! Host-side tests for the signal light composer.
//!
//! [`RecordingDriver`] stands in for the strip and keeps every frame the
//! engine writes.

use signal_light_composer::{AnimationEngine, LedDriver, Rgb, SharedMode};

#[cfg(test)]
mod engine;
#[cfg(test)]
mod scenario;

/// Driver that records written frames instead of driving hardware
pub struct RecordingDriver<const N: usize> {
    frames: Vec<[Rgb; N]>,
    clears: usize,
}

impl<const N: usize> RecordingDriver<N> {
    pub fn new() -> Self {
        Self {
            frames: Vec::new(),
            clears: 0,
        }
    }

    pub fn frames(&self) -> &[[Rgb; N]] {
        &self.frames
    }

    pub fn last(&self) -> Option<&[Rgb; N]> {
        self.frames.last()
    }

    pub fn clears(&self) -> usize {
        self.clears
    }
}

impl<const N: usize> Default for RecordingDriver<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> LedDriver<N> for RecordingDriver<N> {
    fn write(&mut self, colors: &[Rgb; N]) {
        self.frames.push(*colors);
    }

    fn clear(&mut self) {
        self.clears += 1;
        self.write(&[Rgb::default(); N]);
    }
}

/// Engine over a fresh [`RecordingDriver`] for a strip of `N` pixels
pub fn new_engine<const N: usize>(mode: &SharedMode) -> AnimationEngine<'_, RecordingDriver<N>, N> {
    AnimationEngine::new(RecordingDriver::new(), mode)
}
