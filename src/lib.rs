//! tint (workspace facade crate).
//!
//! Re-exports the member crates as `tint::{core,session,types}` and hosts the
//! score tool front end in [`scores`].

pub mod scores;

pub use tint_core as core;
pub use tint_session as session;
pub use tint_types as types;
