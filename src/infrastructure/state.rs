use signal_light_composer::SharedMode;

/// Mode written by the serial controller and read by the animation task
pub(crate) static LIGHT_MODE: SharedMode = SharedMode::new();
