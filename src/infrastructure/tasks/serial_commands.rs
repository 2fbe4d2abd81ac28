use embedded_io_async::Read;
use esp_hal::gpio::interconnect::PeripheralInput;
use esp_hal::peripherals::UART0;
use log::warn;

use crate::controllers::SerialController;
use crate::infrastructure::drivers::init_serial_rx;
use crate::infrastructure::state::LIGHT_MODE;
use crate::infrastructure::types::SerialRx;

/// Task feeding serial input to the command interpreter one byte at a time
#[embassy_executor::task]
pub async fn serial_command_task(mut rx: SerialRx) {
    let controller = SerialController::new(&LIGHT_MODE);
    controller.print_help();

    let mut byte = [0u8; 1];
    loop {
        match rx.read(&mut byte).await {
            Ok(0) => {}
            Ok(_) => controller.on_byte(byte[0]),
            Err(e) => warn!("serial: read failed: {:?}", e),
        }
    }
}

pub fn init_serial_commands<I>(uart: UART0<'static>, rx: I) -> SerialRx
where
    I: PeripheralInput<'static>,
{
    init_serial_rx(uart, rx)
}
