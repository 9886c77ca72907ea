//! Game session - the loop between the engine, the player, and the ledger
//!
//! This crate owns the per-game state and the turn loop. The piece-physics
//! engine, the keyboard, and the screen are reached through the traits in
//! [`engine`]; the only persistent side effect is the final
//! [`finish`] call into the score ledger.
//!
//! # Module Structure
//!
//! - [`engine`]: `Engine`, `Controls`, and `StatusDisplay` seams
//! - [`session`]: level, score, shape tallies, and statistics of one game
//! - [`game_loop`]: the turn loop and end-of-game submission

pub mod engine;
pub mod game_loop;
pub mod session;

pub use tint_core as core;
pub use tint_types as types;

pub use engine::{Controls, Engine, EngineStatus, Evaluation, StatusDisplay};
pub use game_loop::{finish, run, GameEnd, GameResult};
pub use session::{PlayerStats, Session, SessionStats};
