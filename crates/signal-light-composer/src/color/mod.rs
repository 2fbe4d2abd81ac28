mod utils;

use smart_leds::RGB8;
use smart_leds::hsv::Hsv as HSV;

pub use utils::{fill_rainbow, fill_solid, hsv2rgb, rgb_from_u32};

pub type Rgb = RGB8;
pub type Hsv = HSV;

pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };
pub const WHITE: Rgb = Rgb { r: 255, g: 255, b: 255 };
pub const RED: Rgb = Rgb { r: 255, g: 0, b: 0 };
pub const AMBER: Rgb = Rgb { r: 255, g: 191, b: 0 };
pub const PURPLE: Rgb = Rgb { r: 128, g: 0, b: 128 };
pub const CYAN: Rgb = Rgb { r: 0, g: 255, b: 255 };
