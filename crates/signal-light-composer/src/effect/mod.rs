//! Per-mode frame renderers
//!
//! Every mode owns its own animation state, kept in [`EffectSet`] for the
//! whole program lifetime. Switching modes never resets the state of the
//! other modes.
//! Each effect implements the `EffectImpl` trait.

mod blink;
mod rainbow;
mod scroll;
mod stop;

pub use blink::BlinkEffect;
pub use rainbow::RainbowEffect;
pub use scroll::{ScrollDirection, ScrollEffect};
pub use stop::StopEffect;

use embassy_time::Duration;

use crate::color::{AMBER, CYAN, PURPLE, Rgb, WHITE};
use crate::mode::Mode;

/// Number of pixels lit at each end of the strip by the edge modes
pub const EDGE_LEN: usize = 15;

/// Trait for effect implementations
///
/// Effects draw into the persistent frame buffer. An effect may leave
/// pixels it does not own untouched.
pub trait EffectImpl<const N: usize> {
    /// Render a single frame into `frame`
    fn render(&mut self, frame: &mut [Rgb; N]);

    /// Pause before the next frame of this effect
    fn frame_delay(&self) -> Duration;
}

/// Set the first and last [`EDGE_LEN`] pixels to `color`
///
/// Both ranges are clamped to the strip. On strips shorter than
/// `2 * EDGE_LEN` they overlap and the shared pixels get the same color.
pub(crate) fn fill_edges<const N: usize>(frame: &mut [Rgb; N], color: Rgb) {
    for i in 0..EDGE_LEN.min(N) {
        frame[i] = color;
        frame[N - 1 - i] = color;
    }
}

/// Interior pixels not covered by either edge range
pub(crate) fn interior<const N: usize>(frame: &mut [Rgb; N]) -> &mut [Rgb] {
    let end = N.saturating_sub(EDGE_LEN);
    let start = EDGE_LEN.min(end);
    &mut frame[start..end]
}

/// Animation state of every mode
pub struct EffectSet {
    pub rainbow: RainbowEffect,
    pub reverse: BlinkEffect,
    pub hazard: BlinkEffect,
    pub left: ScrollEffect,
    pub right: ScrollEffect,
    pub stop: StopEffect,
}

impl EffectSet {
    /// Create the initial state for a strip of `led_count` pixels
    pub fn new(led_count: usize) -> Self {
        Self {
            rainbow: RainbowEffect::default(),
            reverse: BlinkEffect::new(WHITE),
            hazard: BlinkEffect::new(AMBER),
            left: ScrollEffect::new(ScrollDirection::Left, PURPLE, led_count),
            right: ScrollEffect::new(ScrollDirection::Right, CYAN, led_count),
            stop: StopEffect::default(),
        }
    }

    /// Render one frame of `mode`
    ///
    /// Returns the pause before the next frame.
    pub fn render<const N: usize>(&mut self, mode: Mode, frame: &mut [Rgb; N]) -> Duration {
        match mode {
            Mode::Rainbow => render_with(&mut self.rainbow, frame),
            Mode::ReverseBlink => render_with(&mut self.reverse, frame),
            Mode::IntermittentBlink => render_with(&mut self.hazard, frame),
            Mode::ScrollLeft => render_with(&mut self.left, frame),
            Mode::ScrollRight => render_with(&mut self.right, frame),
            Mode::Stop => render_with(&mut self.stop, frame),
        }
    }
}

fn render_with<E: EffectImpl<N>, const N: usize>(effect: &mut E, frame: &mut [Rgb; N]) -> Duration {
    effect.render(frame);
    effect.frame_delay()
}
