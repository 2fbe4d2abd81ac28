//! Two-pixel scroller

use embassy_time::Duration;

use super::EffectImpl;
use crate::color::{BLACK, Rgb, fill_solid};

const FRAME_DELAY: Duration = Duration::from_millis(100);

/// Direction the lit pair travels in
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollDirection {
    /// Towards index 0, the trailing pixel sits at `cursor - 1`
    Left,
    /// Towards the strip end, the trailing pixel sits at `cursor + 1`
    Right,
}

/// Moves a pair of lit pixels along the strip, wrapping at both ends
#[derive(Clone)]
pub struct ScrollEffect {
    direction: ScrollDirection,
    color: Rgb,
    cursor: usize,
}

impl ScrollEffect {
    /// Create a scroller for a strip of `led_count` pixels
    ///
    /// Left scrollers start at the last pixel, right scrollers at the first.
    pub fn new(direction: ScrollDirection, color: Rgb, led_count: usize) -> Self {
        let cursor = match direction {
            ScrollDirection::Left => led_count.saturating_sub(1),
            ScrollDirection::Right => 0,
        };
        Self {
            direction,
            color,
            cursor,
        }
    }

    /// Pixel lit first in the next frame
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    fn step(&self, index: usize, len: usize) -> usize {
        match self.direction {
            ScrollDirection::Left => (index + len - 1) % len,
            ScrollDirection::Right => (index + 1) % len,
        }
    }
}

impl<const N: usize> EffectImpl<N> for ScrollEffect {
    fn render(&mut self, frame: &mut [Rgb; N]) {
        fill_solid(frame, BLACK);
        if N == 0 {
            return;
        }

        let cursor = self.cursor % N;
        frame[cursor] = self.color;
        frame[self.step(cursor, N)] = self.color;
        self.cursor = self.step(cursor, N);
    }

    fn frame_delay(&self) -> Duration {
        FRAME_DELAY
    }
}
