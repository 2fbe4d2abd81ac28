use esp_hal::gpio::interconnect::PeripheralInput;
use esp_hal::peripherals::UART0;
use esp_hal::uart::{Config, UartRx};

use crate::infrastructure::config;
use crate::infrastructure::types::SerialRx;

/// Receive half of UART0, used for single-byte commands
///
/// Status output goes through `esp_println`, which writes UART0 directly,
/// so only the RX side is claimed here.
pub(crate) fn init_serial_rx<I>(uart: UART0<'static>, rx: I) -> SerialRx
where
    I: PeripheralInput<'static>,
{
    let config = Config::default().with_baudrate(config::SERIAL.baudrate);

    UartRx::new(uart, config)
        .expect("serial: invalid UART configuration")
        .with_rx(rx)
        .into_async()
}
