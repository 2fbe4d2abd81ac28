use esp_hal::Async;
use esp_hal::uart::UartRx;

use crate::infrastructure::drivers::EspLedDriver;

pub type LightDriver = EspLedDriver<'static>;

pub type SerialRx = UartRx<'static, Async>;
