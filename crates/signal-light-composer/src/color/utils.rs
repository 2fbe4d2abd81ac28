pub use smart_leds::hsv::hsv2rgb;

use crate::color::{Hsv, Rgb};

/// Saturation used by rainbow fills
const RAINBOW_SATURATION: u8 = 240;

/// Create a color from a packed `0xRRGGBB` value
#[allow(clippy::cast_possible_truncation)]
pub const fn rgb_from_u32(color: u32) -> Rgb {
    Rgb {
        r: (color >> 16) as u8,
        g: (color >> 8) as u8,
        b: color as u8,
    }
}

/// Fill the slice with a hue gradient
///
/// The first pixel gets `initial_hue`, each following pixel is `delta_hue`
/// further along the color wheel (wrapping).
///
/// Colors come from `smart_leds` `hsv2rgb`, a spectrum mapping; FastLED's
/// `fill_rainbow` uses its rainbow mapping with a wider yellow band.
pub fn fill_rainbow(leds: &mut [Rgb], initial_hue: u8, delta_hue: u8) {
    let mut hsv = Hsv {
        hue: initial_hue,
        sat: RAINBOW_SATURATION,
        val: 255,
    };
    for led in leds.iter_mut() {
        *led = hsv2rgb(hsv);
        hsv.hue = hsv.hue.wrapping_add(delta_hue);
    }
}

/// Fill the slice with a single color
pub fn fill_solid(leds: &mut [Rgb], color: Rgb) {
    for led in leds.iter_mut() {
        *led = color;
    }
}
