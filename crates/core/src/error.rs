use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Score file truncated in slot {slot} while reading {field}")]
    Truncated { slot: usize, field: &'static str },

    #[error("Name in slot {slot} exceeds {max} bytes")]
    NameTooLong { slot: usize, max: usize },

    #[error("Invalid score {score} in slot {slot}")]
    InvalidScore { slot: usize, score: i32 },

    #[error("Unsupported score file version: {0}")]
    UnsupportedVersion(u16),

    #[error("Slot count mismatch: expected {expected}, got {actual}")]
    SlotCountMismatch { expected: usize, actual: usize },

    #[error("Error writing to {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl LedgerError {
    /// Whether the error describes a damaged or foreign file rather than an I/O failure.
    pub fn is_corrupt(&self) -> bool {
        !matches!(self, LedgerError::Io(_) | LedgerError::Write { .. })
    }
}

pub type Result<T> = std::result::Result<T, LedgerError>;
