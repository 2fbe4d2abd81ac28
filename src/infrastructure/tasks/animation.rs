use esp_hal::gpio::interconnect::PeripheralOutput;
use esp_hal::peripherals::RMT;
use log::info;

use signal_light_composer::{AnimationEngine, ColorCorrection};

use crate::infrastructure::config::{self, LIGHT_LED_COUNT};
use crate::infrastructure::drivers::EspLedDriver;
use crate::infrastructure::state::LIGHT_MODE;
use crate::infrastructure::types::LightDriver;

const COLOR_CORRECTION: ColorCorrection = ColorCorrection::from_rgb(config::LIGHT.color_correction);

/// Task rendering the active mode forever
/// It reads the mode on every frame, so commands take effect on the next frame.
#[embassy_executor::task]
pub async fn animation_task(driver: LightDriver) {
    let mut engine: AnimationEngine<LightDriver, LIGHT_LED_COUNT> =
        AnimationEngine::new(driver, &LIGHT_MODE).with_color_correction(COLOR_CORRECTION);
    engine.clear();

    info!(
        "animation: started with {} leds, mode {}",
        LIGHT_LED_COUNT,
        engine.mode().as_str()
    );
    engine.run().await;
}

pub fn init_animation<O>(rmt: RMT<'static>, pin: O) -> LightDriver
where
    O: PeripheralOutput<'static>,
{
    EspLedDriver::new(rmt, pin)
}
