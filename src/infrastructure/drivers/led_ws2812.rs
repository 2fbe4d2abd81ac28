use log::warn;
use static_cell::make_static;

use esp_hal::xtensa_lx::interrupt;
use esp_hal::{gpio::interconnect::PeripheralOutput, peripherals::RMT, rmt::Rmt, time::Rate};
use esp_hal_smartled::{SmartLedsAdapter, buffer_size, smart_led_buffer};
use smart_leds::{RGB8, SmartLedsWrite};

use signal_light_composer::{ColorOrder, LedDriver};

use crate::infrastructure::config::{self, LIGHT_LED_COUNT};

/// ESP-specific LED driver using RMT peripheral
///
/// This driver uses the ESP32's RMT (Remote Control) peripheral
/// to generate the precise timing signals required by WS2812B LEDs.
pub struct EspLedDriver<'a> {
    adapter: SmartLedsAdapter<'a, { buffer_size(LIGHT_LED_COUNT) }>,
    color_order: ColorOrder,
}

impl<'a> EspLedDriver<'a> {
    /// Create a new ESP LED driver
    ///
    /// # Arguments
    /// * `rmt` - RMT peripheral
    /// * `pin` - GPIO pin connected to the LED data line
    pub(crate) fn new<O>(rmt: RMT<'a>, pin: O) -> Self
    where
        O: PeripheralOutput<'a>,
    {
        let rmt = Rmt::new(rmt, Rate::from_mhz(80)).expect("led: failed to configure RMT");

        // Safety: This is a static buffer that lives for the entire program
        // We use make_static! to ensure the buffer has 'static lifetime
        let rmt_buffer = make_static!(smart_led_buffer!(LIGHT_LED_COUNT));
        let adapter = SmartLedsAdapter::new(rmt.channel0, pin, rmt_buffer);

        Self {
            adapter,
            color_order: config::LIGHT.color_order,
        }
    }

    /// Map a color so the adapter's G-R-B transmission matches the strip
    fn arrange(&self, color: RGB8) -> RGB8 {
        let [first, second, third] = self.color_order.wire_bytes(color);
        RGB8 {
            r: second,
            g: first,
            b: third,
        }
    }
}

impl LedDriver<LIGHT_LED_COUNT> for EspLedDriver<'static> {
    fn write(&mut self, colors: &[RGB8; LIGHT_LED_COUNT]) {
        let mut arranged = [RGB8::default(); LIGHT_LED_COUNT];
        for (out, color) in arranged.iter_mut().zip(colors) {
            *out = self.arrange(*color);
        }

        let result = interrupt::free(|| self.adapter.write(arranged.iter().copied()));
        if let Err(e) = result {
            warn!("led: frame write failed: {:?}", e);
        }
    }
}
