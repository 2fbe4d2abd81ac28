//! Infrastructure layer
//!
//! Concrete hardware drivers, compile-time configuration and the embassy
//! tasks that run the composer on the ESP32.

pub mod config;
pub mod drivers;
pub(crate) mod state;
pub mod tasks;
pub mod types;
