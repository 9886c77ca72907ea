//! Score ledger core - ranked, persistent high-score table
//!
//! This crate turns a finished game into a durable entry of a bounded,
//! ordered table of best results. It has no dependency on the terminal or the
//! game engine.
//!
//! # Module Structure
//!
//! - [`scoring`]: per-turn score delta and scaled/displayed conversions
//! - [`record`]: player names and score records, with the ranking order
//! - [`ledger`]: fixed-capacity ranked table and its report
//! - [`codec`]: binary file layout with corruption detection
//! - [`store`]: file-backed load / submit / save
//!
//! # Ranking Rules
//!
//! - **Capacity**: the table holds exactly `LEDGER_CAPACITY` slots
//! - **Order**: descending score; equal scores keep the older record first
//! - **Overflow**: the lowest record falls off; a record that outranks nothing is dropped
//! - **Zero scores**: never recorded
//!
//! # Example
//!
//! ```
//! use tint_core::{LedgerStore, PlayerName};
//!
//! let dir = std::env::temp_dir().join(format!("tint-doc-{}", std::process::id()));
//! std::fs::create_dir_all(&dir).unwrap();
//! let store = LedgerStore::new(dir.join("tint.scores"));
//!
//! let submission = store.submit(PlayerName::new("abz"), 120).unwrap().unwrap();
//! assert_eq!(submission.report.new_entry().map(|e| e.score), Some(120));
//!
//! // Zero scores are not recorded.
//! assert!(store.submit(PlayerName::new("abz"), 0).unwrap().is_none());
//! # std::fs::remove_dir_all(&dir).unwrap();
//! ```

pub mod codec;
pub mod error;
pub mod ledger;
pub mod record;
pub mod scoring;
pub mod store;

pub use tint_types as types;

// Re-export commonly used types for convenience
pub use error::{LedgerError, Result};
pub use ledger::{RankedEntry, RankingReport, ScoreLedger, REPORT_TITLE};
pub use record::{PlayerName, ScoreRecord};
pub use scoring::{calculate_delta, display_score, scaled, ScoreModifiers, TurnScore};
pub use store::{LedgerConfig, LedgerStore, Submission};
