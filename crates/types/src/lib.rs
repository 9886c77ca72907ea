//! Core types module - shared constants, options, and commands
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are plain data with no external dependencies, so they can be used
//! by the score ledger, the game loop, and the command-line tools alike.
//!
//! # Score Units
//!
//! The running score is kept in a *scaled* unit to avoid losing precision when
//! the formula halves a delta:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `SCORE_FACTOR` | 2 | Scaled score = displayed score × factor |
//! | `LEDGER_CAPACITY` | 10 | Slots in the high-score table |
//! | `NAME_LEN` | 20 | Name budget in bytes, terminator included |
//! | `MAX_NAME_BYTES` | 18 | Longest name the ledger file accepts |
//!
//! # Levels
//!
//! Levels run from `MIN_LEVEL` (1) to `MAX_LEVEL` (9). The time a shape may
//! stay on a row shrinks with the level:
//!
//! | Level | Delay |
//! |-------|-------|
//! | 1 | 333ms |
//! | 5 | 142ms |
//! | 9 | 90ms |
//!
//! # Examples
//!
//! ```
//! use std::time::Duration;
//! use tint_types::{turn_delay, Command, GameOptions, MAX_LEVEL};
//!
//! assert_eq!(turn_delay(1), Duration::from_micros(333_333));
//! assert_eq!(Command::from_key('q'), Command::Quit);
//!
//! let options = GameOptions::with_level(MAX_LEVEL).unwrap();
//! assert_eq!(options.level, 9);
//! assert!(GameOptions::with_level(0).is_none());
//! ```

use std::time::Duration;

/// Multiplier between the stored (scaled) score and the displayed score.
pub const SCORE_FACTOR: u32 = 2;

/// Name budget in bytes, including the terminator.
pub const NAME_LEN: usize = 20;

/// Longest name (in bytes) the ledger loader accepts before the terminator.
pub const MAX_NAME_BYTES: usize = NAME_LEN - 2;

/// Number of slots in the high-score table.
pub const LEDGER_CAPACITY: usize = 10;

/// Score value of an unoccupied ledger slot.
pub const SENTINEL_SCORE: i32 = -1;

/// Name of an unoccupied ledger slot.
pub const SENTINEL_NAME: &str = "None";

/// Name recorded when the player gave none and no login name is known.
pub const ANONYMOUS_NAME: &str = "Anonymous";

/// Lowest selectable level.
pub const MIN_LEVEL: u32 = 1;

/// Highest reachable level.
pub const MAX_LEVEL: u32 = 9;

/// Cleared lines needed per level.
pub const LINES_PER_LEVEL: u32 = 10;

/// Number of distinct shapes dealt by the engine.
pub const NUM_SHAPES: usize = 7;

/// Default location of the high-score file.
pub const DEFAULT_SCORE_FILE: &str = "/var/games/tint.scores";

/// Environment variable that overrides [`DEFAULT_SCORE_FILE`].
pub const SCORE_FILE_ENV: &str = "TINT_SCORE_FILE";

/// Time a shape may stay on a row before it is moved down.
///
/// `1_000_000 / (level + 2)` microseconds.
pub fn turn_delay(level: u32) -> Duration {
    Duration::from_micros(1_000_000 / (u64::from(level) + 2))
}


/// Options chosen before the game starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOptions {
    /// Starting level (`MIN_LEVEL..=MAX_LEVEL`).
    pub level: u32,
    /// Draw the next shape (halves every score delta).
    pub show_next: bool,
    /// Draw vertical guide lines (halves every score delta).
    pub guide_lines: bool,
    /// Draw the shadow of the falling shape.
    pub shadow: bool,
    /// Character used to draw blocks.
    pub block_char: char,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            level: MIN_LEVEL,
            show_next: false,
            guide_lines: false,
            shadow: false,
            block_char: ' ',
        }
    }
}

impl GameOptions {
    /// Default options starting at `level`, or `None` when the level is out of range.
    pub fn with_level(level: u32) -> Option<Self> {
        is_valid_level(level).then(|| Self {
            level,
            ..Self::default()
        })
    }
}

/// Check that a level lies in `MIN_LEVEL..=MAX_LEVEL`.
pub fn is_valid_level(level: u32) -> bool {
    (MIN_LEVEL..=MAX_LEVEL).contains(&level)
}

/// Piece movement forwarded to the game engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Left,
    Right,
    Rotate,
    Down,
    Drop,
}

impl Action {
    pub fn as_str(self) -> &'static str {
        match self {
            Action::Left => "left",
            Action::Right => "right",
            Action::Rotate => "rotate",
            Action::Down => "down",
            Action::Drop => "drop",
        }
    }
}

/// A player command, as delivered by the input layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Move(Action),
    ShowNext,
    ToggleGuideLines,
    SpeedUp,
    Pause,
    Quit,
    /// Any key without a binding.
    Unknown,
}

impl Command {
    /// Map a key character to a command using the classic bindings.
    ///
    /// ```
    /// use tint_types::{Action, Command};
    ///
    /// assert_eq!(Command::from_key('j'), Command::Move(Action::Left));
    /// assert_eq!(Command::from_key(' '), Command::Move(Action::Drop));
    /// assert_eq!(Command::from_key('x'), Command::Unknown);
    /// ```
    pub fn from_key(key: char) -> Self {
        match key {
            'j' => Command::Move(Action::Left),
            'l' => Command::Move(Action::Right),
            'k' | '\n' => Command::Move(Action::Rotate),
            ' ' => Command::Move(Action::Drop),
            's' => Command::ShowNext,
            'd' => Command::ToggleGuideLines,
            'a' => Command::SpeedUp,
            'p' => Command::Pause,
            'q' => Command::Quit,
            _ => Command::Unknown,
        }
    }
}
