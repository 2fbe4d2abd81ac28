//! Lighting modes and the shared mode cell
//!
//! The mode is the only state shared between the command side and the
//! render loop. It is kept in a single atomic byte so both sides can
//! touch it without locking.

use core::fmt;
use core::sync::atomic::{AtomicU8, Ordering};

const MODE_NAME_RAINBOW: &str = "rainbow";
const MODE_NAME_REVERSE_BLINK: &str = "reverse_blink";
const MODE_NAME_INTERMITTENT_BLINK: &str = "intermittent_blink";
const MODE_NAME_SCROLL_LEFT: &str = "scroll_left";
const MODE_NAME_SCROLL_RIGHT: &str = "scroll_right";
const MODE_NAME_STOP: &str = "stop";

const MODE_ID_RAINBOW: u8 = 0;
const MODE_ID_REVERSE_BLINK: u8 = 1;
const MODE_ID_INTERMITTENT_BLINK: u8 = 2;
const MODE_ID_SCROLL_LEFT: u8 = 3;
const MODE_ID_SCROLL_RIGHT: u8 = 4;
const MODE_ID_STOP: u8 = 5;

/// Known lighting modes
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[repr(u8)]
pub enum Mode {
    /// Rotating hue gradient
    #[default]
    Rainbow = MODE_ID_RAINBOW,
    /// Leading and trailing pixels blink white
    ReverseBlink = MODE_ID_REVERSE_BLINK,
    /// Leading and trailing pixels blink amber
    IntermittentBlink = MODE_ID_INTERMITTENT_BLINK,
    /// Two purple pixels moving towards index 0
    ScrollLeft = MODE_ID_SCROLL_LEFT,
    /// Two cyan pixels moving towards the strip end
    ScrollRight = MODE_ID_SCROLL_RIGHT,
    /// Leading and trailing pixels solid red, interior off
    Stop = MODE_ID_STOP,
}

impl Mode {
    pub const ALL: [Mode; 6] = [
        Self::Rainbow,
        Self::ReverseBlink,
        Self::IntermittentBlink,
        Self::ScrollLeft,
        Self::ScrollRight,
        Self::Stop,
    ];

    pub const fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            MODE_ID_RAINBOW => Self::Rainbow,
            MODE_ID_REVERSE_BLINK => Self::ReverseBlink,
            MODE_ID_INTERMITTENT_BLINK => Self::IntermittentBlink,
            MODE_ID_SCROLL_LEFT => Self::ScrollLeft,
            MODE_ID_SCROLL_RIGHT => Self::ScrollRight,
            MODE_ID_STOP => Self::Stop,
            _ => return None,
        })
    }

    pub const fn as_raw(self) -> u8 {
        self as u8
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Rainbow => MODE_NAME_RAINBOW,
            Self::ReverseBlink => MODE_NAME_REVERSE_BLINK,
            Self::IntermittentBlink => MODE_NAME_INTERMITTENT_BLINK,
            Self::ScrollLeft => MODE_NAME_SCROLL_LEFT,
            Self::ScrollRight => MODE_NAME_SCROLL_RIGHT,
            Self::Stop => MODE_NAME_STOP,
        }
    }

    /// Human-readable name printed to the operator
    pub const fn label(self) -> &'static str {
        match self {
            Self::Rainbow => "Rainbow",
            Self::ReverseBlink => "Reverse",
            Self::IntermittentBlink => "Hazard lights",
            Self::ScrollLeft => "Left scroll",
            Self::ScrollRight => "Right scroll",
            Self::Stop => "Stop",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Current mode, shared between the command side and the render loop
///
/// Uses an atomic byte for lock-free access from both tasks.
/// Holds only valid [`Mode`] ids; reads of anything else fall back to the default.
pub struct SharedMode {
    value: AtomicU8,
}

impl SharedMode {
    /// Create a cell holding the default mode
    pub const fn new() -> Self {
        Self::with_mode(Mode::Rainbow)
    }

    pub const fn with_mode(mode: Mode) -> Self {
        Self {
            value: AtomicU8::new(mode.as_raw()),
        }
    }

    /// Get the current mode
    pub fn get(&self) -> Mode {
        Mode::from_raw(self.value.load(Ordering::Relaxed)).unwrap_or_default()
    }

    /// Replace the current mode
    pub fn set(&self, mode: Mode) {
        self.value.store(mode.as_raw(), Ordering::Relaxed);
    }

    /// Switch to `target`, or back to the default if `target` is already active
    ///
    /// Returns the mode that is active afterwards.
    pub fn toggle(&self, target: Mode) -> Mode {
        let target = target.as_raw();
        let default = Mode::default().as_raw();
        let previous = self
            .value
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |current| {
                Some(if current == target { default } else { target })
            })
            .unwrap_or(default);
        if previous == target {
            Mode::default()
        } else {
            Mode::from_raw(target).unwrap_or_default()
        }
    }
}

impl Default for SharedMode {
    fn default() -> Self {
        Self::new()
    }
}
