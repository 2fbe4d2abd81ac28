pub mod animation;
pub mod serial_commands;

pub use animation::{animation_task, init_animation};
pub use serial_commands::{init_serial_commands, serial_command_task};
