use esp_println::println;
use log::{debug, info};

use signal_light_composer::{Command, CommandInterpreter, Notice, SharedMode};

/// Turns serial bytes into mode changes and status lines
pub(crate) struct SerialController {
    interpreter: CommandInterpreter<'static>,
}

impl SerialController {
    pub(crate) fn new(mode: &'static SharedMode) -> Self {
        Self {
            interpreter: CommandInterpreter::new(mode),
        }
    }

    /// Print the command list and the starting mode
    pub(crate) fn print_help(&self) {
        println!("Commands (send again to return to rainbow):");
        for command in Command::ALL {
            println!("  {} - {}", command.key(), command.target_mode().label());
        }
        println!("{}", Notice::ModeChanged(self.interpreter.mode()));
    }

    pub(crate) fn on_byte(&self, byte: u8) {
        let Some(notice) = self.interpreter.handle(byte) else {
            return;
        };

        println!("{}", notice);
        match notice {
            Notice::ModeChanged(mode) => info!("serial: mode set to {}", mode.as_str()),
            Notice::Unrecognized(byte) => debug!("serial: rejected byte 0x{:02x}", byte),
        }
    }
}
