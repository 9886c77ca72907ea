//! Session module - state of one game, shared with the display layer
//!
//! Everything that changes while a game runs (level, score, shape tallies,
//! turn counter, enabled modifiers) lives here and is passed by reference.

use std::fmt;
use std::time::Duration;

use chrono::{DateTime, Local};

use crate::core::{calculate_delta, display_score, PlayerName, ScoreModifiers, TurnScore};
use crate::engine::EngineStatus;
use crate::types::{turn_delay, GameOptions, LINES_PER_LEVEL, MAX_LEVEL, NUM_SHAPES};

/// Mutable state of a running game.
#[derive(Debug, Clone)]
pub struct Session {
    player: PlayerName,
    options: GameOptions,
    level: u32,
    /// Scaled score.
    score: u32,
    shape_counts: [u32; NUM_SHAPES],
    turn: u32,
    new_turn: bool,
    started_at: DateTime<Local>,
}

impl Session {
    pub fn new(player: PlayerName, options: GameOptions) -> Self {
        Self {
            player,
            options,
            level: options.level,
            score: 0,
            shape_counts: [0; NUM_SHAPES],
            turn: 0,
            new_turn: true,
            started_at: Local::now(),
        }
    }

    pub fn player(&self) -> &PlayerName {
        &self.player
    }

    pub fn options(&self) -> &GameOptions {
        &self.options
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    /// Score in the scaled unit.
    pub fn scaled_score(&self) -> u32 {
        self.score
    }

    /// Score as shown to the player.
    pub fn display_score(&self) -> u32 {
        display_score(self.score)
    }

    pub fn turn(&self) -> u32 {
        self.turn
    }

    pub fn started_at(&self) -> DateTime<Local> {
        self.started_at
    }

    pub fn shape_counts(&self) -> &[u32; NUM_SHAPES] {
        &self.shape_counts
    }

    /// Number of shapes dealt so far.
    pub fn shape_sum(&self) -> u32 {
        self.shape_counts.iter().sum()
    }

    /// Displayed score per shape dealt (0 before the first shape).
    pub fn score_ratio(&self) -> u32 {
        match self.shape_sum() {
            0 => 0,
            sum => self.display_score() / sum,
        }
    }

    pub fn modifiers(&self) -> ScoreModifiers {
        ScoreModifiers {
            preview: self.options.show_next,
            guide_lines: self.options.guide_lines,
        }
    }

    pub fn turn_delay(&self) -> Duration {
        turn_delay(self.level)
    }

    /// Show the next shape for the rest of the game.
    pub fn enable_show_next(&mut self) {
        self.options.show_next = true;
    }

    /// Flip the guide lines, returning the new state.
    pub fn toggle_guide_lines(&mut self) -> bool {
        self.options.guide_lines = !self.options.guide_lines;
        self.options.guide_lines
    }

    /// Raise the level by one. Returns `false` at the top level.
    pub fn speed_up(&mut self) -> bool {
        if self.level < MAX_LEVEL {
            self.level += 1;
            true
        } else {
            false
        }
    }

    /// Raise the level once enough lines are cleared. Returns whether it rose.
    pub fn level_up_for(&mut self, total_lines: u32) -> bool {
        if self.level < MAX_LEVEL && total_lines / LINES_PER_LEVEL > self.level {
            self.level += 1;
            true
        } else {
            false
        }
    }

    /// Add the score of a finished placement and return the scaled delta.
    pub fn score_turn(&mut self, status: &EngineStatus) -> u32 {
        let delta = calculate_delta(
            TurnScore {
                level: self.level,
                drop_count: status.drop_count,
                cleared_lines: status.cleared_lines,
            },
            self.modifiers(),
        );
        self.score = self.score.saturating_add(delta);
        delta
    }

    /// Tally a dealt shape. Out-of-range indices are ignored.
    pub fn count_shape(&mut self, shape: usize) {
        if let Some(count) = self.shape_counts.get_mut(shape) {
            *count += 1;
        }
    }

    /// Close the current turn.
    pub fn finish_turn(&mut self) {
        self.turn += 1;
        self.new_turn = true;
    }

    /// Whether a turn started since the last call.
    pub fn take_new_turn(&mut self) -> bool {
        std::mem::replace(&mut self.new_turn, false)
    }

    /// Read-only projection for the status panel.
    pub fn stats(&self, status: &EngineStatus, next_shape: usize) -> SessionStats {
        SessionStats {
            level: self.level,
            score: self.display_score(),
            total_lines: status.total_lines,
            shape_counts: self.shape_counts,
            shape_sum: self.shape_sum(),
            score_ratio: self.score_ratio(),
            efficiency: status.efficiency,
            next_shape: self.options.show_next.then_some(next_shape),
            guide_lines: self.options.guide_lines,
        }
    }

    /// End-of-game statistics for the player.
    pub fn summary(&self, efficiency: i32) -> PlayerStats {
        PlayerStats {
            score: self.display_score(),
            efficiency,
            score_ratio: self.score_ratio(),
        }
    }
}

/// What the status panel shows each frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionStats {
    pub level: u32,
    /// Displayed score.
    pub score: u32,
    pub total_lines: u32,
    pub shape_counts: [u32; NUM_SHAPES],
    pub shape_sum: u32,
    pub score_ratio: u32,
    pub efficiency: i32,
    /// Shape to preview, when the preview is enabled.
    pub next_shape: Option<usize>,
    pub guide_lines: bool,
}

/// Statistics printed when a game ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerStats {
    pub score: u32,
    pub efficiency: i32,
    pub score_ratio: u32,
}

impl fmt::Display for PlayerStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "\n\t   PLAYER STATISTICS\n\n\tScore       {:11}\n\tEfficiency  {:11}\n\tScore ratio {:11}\n",
            self.score, self.efficiency, self.score_ratio
        )
    }
}
