/// Scale an 8-bit value by a factor (0-255 = 0.0-1.0), "video" style
///
/// `(value * scale) >> 8`, plus one whenever both inputs are nonzero, so a lit
/// channel never scales down to off and a 255 factor is a pass-through.
#[inline]
#[allow(clippy::cast_possible_truncation)]
pub fn scale8_video(value: u8, scale: u8) -> u8 {
    let scaled = ((u16::from(value) * u16::from(scale)) >> 8) as u8;
    scaled + u8::from(value != 0 && scale != 0)
}
