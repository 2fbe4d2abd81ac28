//! Stop light

use embassy_time::Duration;

use super::{EffectImpl, fill_edges, interior};
use crate::color::{BLACK, RED, Rgb, fill_solid};

const FRAME_DELAY: Duration = Duration::from_millis(500);

/// Solid red edges with the interior switched off
#[derive(Clone, Default)]
pub struct StopEffect;

impl<const N: usize> EffectImpl<N> for StopEffect {
    fn render(&mut self, frame: &mut [Rgb; N]) {
        fill_edges(frame, RED);
        fill_solid(interior(frame), BLACK);
    }

    fn frame_delay(&self) -> Duration {
        FRAME_DELAY
    }
}
