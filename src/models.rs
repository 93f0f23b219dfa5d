use std::fmt;
use std::time::Duration;

pub const MIN_WPM: u16 = 50;
pub const MAX_WPM: u16 = 1000;
pub const DEFAULT_WPM: u16 = 500;
/// Amount a single faster/slower command moves the rate by.
pub const SPEED_STEP: i32 = 25;

/// Reading rate in words per minute, always within `MIN_WPM..=MAX_WPM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Wpm(u16);

impl Wpm {
    pub fn new(value: u32) -> Self {
        Self::clamped(i64::from(value))
    }

    pub fn clamped(value: i64) -> Self {
        let value = value.clamp(i64::from(MIN_WPM), i64::from(MAX_WPM));
        // the clamp above keeps this within u16
        Self(value as u16)
    }

    pub fn get(self) -> u16 {
        self.0
    }

    pub fn adjusted(self, delta: i32) -> Self {
        Self::clamped(i64::from(self.0) + i64::from(delta))
    }

    /// Time between two word advances: one minute divided by the rate.
    pub fn interval(self) -> Duration {
        Duration::from_millis(60_000 / u64::from(self.0))
    }
}

impl Default for Wpm {
    fn default() -> Self {
        Self(DEFAULT_WPM)
    }
}

impl fmt::Display for Wpm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Back,
    Forward,
}

/// Discrete reader commands, independent of the keys bound to them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    PlayPause,
    PrevWord,
    NextWord,
    Faster,
    Slower,
    JumpBack,
    JumpForward,
    Restart,
    OpenFile,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerCommand {
    Up,
    Down,
    Open,
    Back,
    Select,
    Cancel,
}

/// Terminal dimensions and the column the highlighted letter is pinned to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
    pub focus_column: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            focus_column: width / 2,
        }
    }

    pub fn is_known(&self) -> bool {
        self.width > 0 && self.height > 0
    }
}
