//! File-backed ledger store
//!
//! Every submission loads the table, inserts the record, and rewrites the whole
//! file. Read-side problems never surface as errors: a missing, unreadable, or
//! corrupt file is replaced by a fresh table. Write-side problems are fatal to
//! the submission and are returned to the caller.
//!
//! Rewrites go through a temporary sibling file that is renamed over the
//! target, so a crash mid-write leaves either the old or the new table.
//! There is no locking; concurrent submitters race and the last writer wins.

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use chrono::Utc;
use tracing::{debug, info, warn};

use crate::codec;
use crate::error::{LedgerError, Result};
use crate::ledger::{RankingReport, ScoreLedger};
use crate::record::{PlayerName, ScoreRecord};
use crate::types::{DEFAULT_SCORE_FILE, SCORE_FILE_ENV};

/// Where the high-score table lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerConfig {
    pub path: PathBuf,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_SCORE_FILE),
        }
    }
}

impl LedgerConfig {
    /// Read the score file path from `TINT_SCORE_FILE`, falling back to the default.
    pub fn from_env() -> Self {
        match std::env::var_os(SCORE_FILE_ENV) {
            Some(path) if !path.is_empty() => Self {
                path: PathBuf::from(path),
            },
            _ => Self::default(),
        }
    }
}

/// Result of a submission that was recorded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    /// The record built for this submission.
    pub record: ScoreRecord,
    /// 0-based slot the record landed in, `None` if it did not make the table.
    pub index: Option<usize>,
    pub report: RankingReport,
}

/// The high-score table persisted in a single file.
#[derive(Debug, Clone)]
pub struct LedgerStore {
    path: PathBuf,
}

impl LedgerStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn from_config(config: &LedgerConfig) -> Self {
        Self::new(&config.path)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the table, reporting why it could not be read.
    pub fn try_load(&self) -> Result<ScoreLedger> {
        let bytes = fs::read(&self.path)?;
        codec::decode(&bytes)
    }

    /// Load the table, or a fresh one when the file is absent or damaged.
    pub fn load(&self) -> ScoreLedger {
        match self.try_load() {
            Ok(ledger) => ledger,
            Err(LedgerError::Io(e)) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "score file absent, starting fresh");
                ScoreLedger::new()
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "ignoring unreadable score file");
                ScoreLedger::new()
            }
        }
    }

    /// Replace the file with `ledger`.
    pub fn save(&self, ledger: &ScoreLedger) -> Result<()> {
        let bytes = codec::encode(ledger);
        self.atomic_write(&bytes).map_err(|source| LedgerError::Write {
            path: self.path.clone(),
            source,
        })
    }

    /// Record `score` for `name` at the current time.
    ///
    /// A zero score is not worth recording: the file is left untouched and
    /// `None` is returned.
    pub fn submit(&self, name: PlayerName, score: u32) -> Result<Option<Submission>> {
        self.submit_at(name, score, Utc::now().timestamp())
    }

    /// Record `score` for `name` with an explicit timestamp.
    ///
    /// An empty name is recorded as [`ANONYMOUS_NAME`](crate::types::ANONYMOUS_NAME).
    pub fn submit_at(
        &self,
        name: PlayerName,
        score: u32,
        timestamp: i64,
    ) -> Result<Option<Submission>> {
        if score == 0 {
            debug!(player = %name, "zero score, nothing to record");
            return Ok(None);
        }

        let mut ledger = self.load();
        let record = ScoreRecord::new(name.or_anonymous(), clamp_score(score), timestamp);
        let index = ledger.insert(record);
        self.save(&ledger)?;

        info!(
            target: "tint::ledger",
            player = %record.name,
            score = record.score,
            timestamp = record.timestamp,
            rank = index.map(|i| i + 1),
            "final score recorded"
        );

        Ok(Some(Submission {
            record,
            index,
            report: ledger.report(index),
        }))
    }

    /// Write to a temporary sibling, then rename it over the target.
    fn atomic_write(&self, content: &[u8]) -> io::Result<()> {
        let temp_path = temp_path_for(&self.path);

        let result =
            write_file(&temp_path, content).and_then(|()| fs::rename(&temp_path, &self.path));
        if result.is_err() {
            let _ = fs::remove_file(&temp_path);
        }
        result
    }
}

fn write_file(path: &Path, content: &[u8]) -> io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(content)?;
    file.sync_all()
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}

fn clamp_score(score: u32) -> i32 {
    i32::try_from(score).unwrap_or(i32::MAX)
}
