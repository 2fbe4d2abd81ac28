mod led_ws2812;
mod uart;

pub use led_ws2812::EspLedDriver;
pub(crate) use uart::init_serial_rx;
