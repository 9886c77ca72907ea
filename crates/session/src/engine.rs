//! Collaborator seams of the game loop.
//!
//! The piece physics, the keyboard, and the screen live outside this
//! workspace. The loop talks to them only through these traits.

use std::time::Duration;

use crate::session::SessionStats;
use crate::types::{Action, Command};

/// Outcome of one engine evaluation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Evaluation {
    /// The falling shape moved down one row.
    MovedDown,
    /// The shape was placed and the next one released.
    Landed,
    /// The shape was placed and the board is full.
    GameOver,
}

/// Per-turn counters reported by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EngineStatus {
    /// Single-row descents forced by the player this turn.
    pub drop_count: u32,
    /// Rows cleared by the last placement (0-4).
    pub cleared_lines: u32,
    /// Rows cleared since the game started.
    pub total_lines: u32,
    /// Engine-computed efficiency metric, shown as-is.
    pub efficiency: i32,
}

/// The piece-physics engine.
pub trait Engine {
    /// Index of the falling shape (`0..NUM_SHAPES`).
    fn current_shape(&self) -> usize;

    /// Index of the shape released after the current one.
    fn next_shape(&self) -> usize;

    /// Board position of the falling shape.
    fn position(&self) -> (i32, i32);

    fn status(&self) -> EngineStatus;

    fn set_shadow(&mut self, enabled: bool);

    /// Move or rotate the falling shape if the board allows it.
    fn apply(&mut self, action: Action);

    /// Advance the falling shape by one step.
    fn evaluate(&mut self) -> Evaluation;
}

/// Player input.
pub trait Controls {
    /// Wait up to `timeout` for a command; `None` when the time ran out.
    fn poll(&mut self, timeout: Duration) -> Option<Command>;

    /// Block until any key is pressed.
    fn wait_any(&mut self);

    /// Audible feedback for a rejected command.
    fn beep(&mut self) {}
}

/// The status panel.
pub trait StatusDisplay {
    fn show(&mut self, stats: &SessionStats);
}
