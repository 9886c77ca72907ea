//! Score record module - one slot of the high-score table

use std::cmp::Ordering;
use std::fmt;

use arrayvec::ArrayString;

use crate::types::{ANONYMOUS_NAME, MAX_NAME_BYTES, SENTINEL_NAME, SENTINEL_SCORE};

/// A player name that fits the ledger's name budget.
///
/// Names never contain NUL or other control characters and are at most
/// [`MAX_NAME_BYTES`] bytes long; longer input is cut on a char boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PlayerName(ArrayString<MAX_NAME_BYTES>);

impl PlayerName {
    /// Build a name from arbitrary input, dropping control characters and
    /// truncating to the budget.
    ///
    /// ```
    /// use tint_core::PlayerName;
    ///
    /// assert_eq!(PlayerName::new("abz\n").as_str(), "abz");
    /// assert_eq!(PlayerName::new("a-very-long-player-name").as_str(), "a-very-long-player");
    /// ```
    pub fn new(input: &str) -> Self {
        let mut name = ArrayString::new();
        for ch in input.chars().filter(|c| !c.is_control()) {
            if name.try_push(ch).is_err() {
                break;
            }
        }
        Self(name)
    }

    /// Decode raw name bytes read from a score file.
    ///
    /// Decoding is lossy: each invalid UTF-8 sequence becomes U+FFFD (three
    /// bytes), and the result is cut to the budget again. A legacy name with
    /// invalid bytes is therefore written back differently on the next save.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self::new(&String::from_utf8_lossy(bytes))
    }

    /// Resolve the name typed by the player, falling back to `login`
    /// when nothing usable was entered, then to [`ANONYMOUS_NAME`].
    pub fn resolve(typed: &str, login: Option<&str>) -> Self {
        let name = Self::new(typed.trim());
        let name = match login {
            Some(login) if name.is_empty() => Self::new(login.trim()),
            _ => name,
        };
        name.or_anonymous()
    }

    /// This name, or [`ANONYMOUS_NAME`] when it is empty.
    pub fn or_anonymous(self) -> Self {
        if self.is_empty() {
            Self::new(ANONYMOUS_NAME)
        } else {
            self
        }
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for PlayerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry of the high-score table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScoreRecord {
    pub name: PlayerName,
    pub score: i32,
    /// Seconds since the Unix epoch.
    pub timestamp: i64,
}

impl ScoreRecord {
    pub fn new(name: PlayerName, score: i32, timestamp: i64) -> Self {
        Self {
            name,
            score,
            timestamp,
        }
    }

    /// The unoccupied-slot marker.
    pub fn sentinel() -> Self {
        Self {
            name: PlayerName::new(SENTINEL_NAME),
            score: SENTINEL_SCORE,
            timestamp: 0,
        }
    }

    pub fn is_sentinel(&self) -> bool {
        self.score == SENTINEL_SCORE
    }

    pub fn is_occupied(&self) -> bool {
        !self.is_sentinel()
    }

    /// Ranking order: `Less` means `self` ranks ahead of `other`.
    ///
    /// Higher scores come first; on equal scores the older record wins.
    /// Sentinels carry the lowest score and therefore sort last.
    pub fn rank_cmp(&self, other: &Self) -> Ordering {
        other
            .score
            .cmp(&self.score)
            .then(self.timestamp.cmp(&other.timestamp))
    }

    /// Whether `self` ranks strictly ahead of `other`.
    pub fn outranks(&self, other: &Self) -> bool {
        self.rank_cmp(other) == Ordering::Less
    }
}

impl Default for ScoreRecord {
    fn default() -> Self {
        Self::sentinel()
    }
}
