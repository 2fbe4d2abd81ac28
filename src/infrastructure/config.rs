#![allow(clippy::unreadable_literal)]

use signal_light_composer::ColorOrder;
use signal_light_composer::processor::TYPICAL_LED_STRIP;

pub(crate) struct LightConfig {
    pub color_order: ColorOrder,
    pub color_correction: u32,
}

pub(crate) struct SerialConfig {
    pub baudrate: u32,
}

/// Pixels on the strip
pub const LIGHT_LED_COUNT: usize = 30;

/// Stack of the app core running the animation executor
pub const ANIMATION_CORE_STACK_SIZE: usize = 8192;

pub(crate) const LIGHT: LightConfig = LightConfig {
    color_order: ColorOrder::Grb,
    color_correction: TYPICAL_LED_STRIP,
};

pub(crate) const SERIAL: SerialConfig = SerialConfig { baudrate: 115200 };

/// LED strip data line
#[macro_export]
macro_rules! led_gpio {
    ($p:expr) => {
        $p.GPIO5
    };
}

/// UART0 RX, wired to the USB bridge on devkits
#[macro_export]
macro_rules! serial_rx_gpio {
    ($p:expr) => {
        $p.GPIO3
    };
}
