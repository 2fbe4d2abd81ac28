//! Edge blinking

use embassy_time::Duration;

use super::{EffectImpl, fill_edges};
use crate::color::{BLACK, Rgb};

const FRAME_DELAY: Duration = Duration::from_millis(500);

/// Blinks the leading and trailing pixels in one color
///
/// The interior of the strip is left as it was.
#[derive(Clone)]
pub struct BlinkEffect {
    color: Rgb,
    lit: bool,
}

impl BlinkEffect {
    pub fn new(color: Rgb) -> Self {
        Self { color, lit: false }
    }

    /// Whether the last rendered frame had the edges lit
    pub fn is_lit(&self) -> bool {
        self.lit
    }
}

impl<const N: usize> EffectImpl<N> for BlinkEffect {
    fn render(&mut self, frame: &mut [Rgb; N]) {
        self.lit = !self.lit;
        let color = if self.lit { self.color } else { BLACK };
        fill_edges(frame, color);
    }

    fn frame_delay(&self) -> Duration {
        FRAME_DELAY
    }
}
