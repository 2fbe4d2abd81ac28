#![no_std]

//! Signal light composer
//!
//! Architecture layers:
//! - `driver` - Hardware abstraction ([`LedDriver`] trait)
//! - `mode` - Mode identifiers and the [`SharedMode`] cell shared between tasks
//! - `command` - Serial command parsing and the [`CommandInterpreter`]
//! - `effect` - Per-mode frame renderers and the [`EffectSet`] that owns them
//! - `processor` - Output processing (color correction)
//! - `engine` - Render loop orchestrator
//!
//! The engine is generic over `LedDriver`, allowing different hardware backends.

pub mod color;
pub mod command;
pub mod driver;
pub mod effect;
pub mod engine;
pub mod math8;
pub mod mode;
pub mod processor;

// Driver exports
pub use driver::{ColorOrder, LedDriver};

// Command exports
pub use command::{Command, CommandInterpreter, Input, Notice};

// Effect exports
pub use effect::{EffectImpl, EffectSet};

// Engine exports
pub use engine::AnimationEngine;

// Mode exports
pub use mode::{Mode, SharedMode};

// Processor exports
pub use processor::{ColorCorrection, OutputProcessor};

pub use color::Rgb;
