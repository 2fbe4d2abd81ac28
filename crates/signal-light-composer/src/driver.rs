//! LED Driver abstraction layer
//!
//! Provides a trait-based abstraction for LED strip drivers,
//! allowing the animation engine to be hardware-agnostic.
//! Wire-level timing is entirely the driver's concern.

use crate::color::{BLACK, Rgb};

/// Abstract LED driver trait
///
/// Implement this trait to support different hardware platforms.
/// The animation engine is generic over this trait.
pub trait LedDriver<const N: usize> {
    /// Write a full frame to the LED strip
    fn write(&mut self, colors: &[Rgb; N]);

    /// Turn every pixel off
    fn clear(&mut self) {
        self.write(&[BLACK; N]);
    }
}

/// Order in which a strip expects color channels on the wire
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorOrder {
    Rgb,
    Rbg,
    /// WS2812B and most clones
    #[default]
    Grb,
    Gbr,
    Brg,
    Bgr,
}

impl ColorOrder {
    /// Channel bytes in transmission order
    pub const fn wire_bytes(self, color: Rgb) -> [u8; 3] {
        let Rgb { r, g, b } = color;
        match self {
            Self::Rgb => [r, g, b],
            Self::Rbg => [r, b, g],
            Self::Grb => [g, r, b],
            Self::Gbr => [g, b, r],
            Self::Brg => [b, r, g],
            Self::Bgr => [b, g, r],
        }
    }
}
