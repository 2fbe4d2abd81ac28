//! Serial command interpreter
//!
//! Commands are single ASCII letters, case-insensitive. Each recognized
//! letter toggles one mode on and off. Line endings are skipped silently
//! so terminals that send `\r\n` after every key work as expected.

use core::fmt;

use crate::mode::{Mode, SharedMode};

/// Recognized command letters
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// `B` - reverse blink
    Reverse,
    /// `I` - intermittent (hazard) blink
    Hazard,
    /// `L` - scroll left
    Left,
    /// `R` - scroll right
    Right,
    /// `S` - stop
    Stop,
}

impl Command {
    pub const ALL: [Command; 5] = [
        Self::Reverse,
        Self::Hazard,
        Self::Left,
        Self::Right,
        Self::Stop,
    ];

    /// Parse an already uppercased byte
    pub const fn from_key(key: u8) -> Option<Self> {
        Some(match key {
            b'B' => Self::Reverse,
            b'I' => Self::Hazard,
            b'L' => Self::Left,
            b'R' => Self::Right,
            b'S' => Self::Stop,
            _ => return None,
        })
    }

    pub const fn key(self) -> char {
        match self {
            Self::Reverse => 'B',
            Self::Hazard => 'I',
            Self::Left => 'L',
            Self::Right => 'R',
            Self::Stop => 'S',
        }
    }

    /// Mode this command toggles
    pub const fn target_mode(self) -> Mode {
        match self {
            Self::Reverse => Mode::ReverseBlink,
            Self::Hazard => Mode::IntermittentBlink,
            Self::Left => Mode::ScrollLeft,
            Self::Right => Mode::ScrollRight,
            Self::Stop => Mode::Stop,
        }
    }

    /// Command bound to a mode, if any
    pub fn for_mode(mode: Mode) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|command| command.target_mode() == mode)
    }
}

/// Classification of a single input byte
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Input {
    /// Line ending, skipped without a reply
    Ignored,
    Command(Command),
    Unknown(u8),
}

impl Input {
    pub const fn parse(byte: u8) -> Self {
        if byte == b'\n' || byte == b'\r' {
            return Self::Ignored;
        }
        match Command::from_key(byte.to_ascii_uppercase()) {
            Some(command) => Self::Command(command),
            None => Self::Unknown(byte),
        }
    }
}

/// Status line produced by the interpreter
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Notice {
    /// The mode changed to the contained value
    ModeChanged(Mode),
    /// The byte is not a command, the mode is unchanged
    Unrecognized(u8),
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ModeChanged(mode) => match Command::for_mode(*mode) {
                Some(command) => write!(f, "Mode: {} ({})", mode.label(), command.key()),
                None => write!(f, "Mode: {}", mode.label()),
            },
            Self::Unrecognized(_) => f.write_str("Command not recognized"),
        }
    }
}

/// Applies serial commands to the shared mode
pub struct CommandInterpreter<'a> {
    mode: &'a SharedMode,
}

impl<'a> CommandInterpreter<'a> {
    pub fn new(mode: &'a SharedMode) -> Self {
        Self { mode }
    }

    /// Consume one input byte
    ///
    /// Returns the notice to report back, or `None` for skipped bytes.
    pub fn handle(&self, byte: u8) -> Option<Notice> {
        match Input::parse(byte) {
            Input::Ignored => None,
            Input::Command(command) => {
                let mode = self.mode.toggle(command.target_mode());
                Some(Notice::ModeChanged(mode))
            }
            Input::Unknown(byte) => Some(Notice::Unrecognized(byte)),
        }
    }

    /// Currently active mode
    pub fn mode(&self) -> Mode {
        self.mode.get()
    }
}
