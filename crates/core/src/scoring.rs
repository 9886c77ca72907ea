//! Scoring module - per-turn score delta and scale conversions
//!
//! Scores are accumulated in a scaled unit (`SCORE_FACTOR` × displayed value)
//! so that the halving modifiers below do not lose the odd point.
//!
//! The line-clear term grows with the square of the cleared rows: clearing four
//! rows at once is worth sixteen single clears.

use crate::types::SCORE_FACTOR;

/// Options that make the game easier and therefore halve every delta.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoreModifiers {
    /// The next shape is shown.
    pub preview: bool,
    /// Vertical guide lines are drawn.
    pub guide_lines: bool,
}

/// What happened during one turn, as reported by the game engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TurnScore {
    /// Current level (1-based).
    pub level: u32,
    /// Single-row descents the player forced this turn.
    pub drop_count: u32,
    /// Rows cleared by the placement that ended the turn (0-4).
    pub cleared_lines: u32,
}

/// Calculate the scaled score delta for a finished turn.
///
/// `FACTOR * level * (drops + 1) + FACTOR * (level + 10) * lines²`, halved once
/// per active modifier (preview first, then guide lines).
pub fn calculate_delta(turn: TurnScore, modifiers: ScoreModifiers) -> u32 {
    let lines = turn.cleared_lines;
    let mut delta = scaled(turn.level.saturating_mul(turn.drop_count.saturating_add(1)))
        .saturating_add(scaled(
            turn.level
                .saturating_add(10)
                .saturating_mul(lines.saturating_mul(lines)),
        ));

    if modifiers.preview {
        delta /= 2;
    }
    if modifiers.guide_lines {
        delta /= 2;
    }
    delta
}

/// Convert displayed points into the scaled unit.
pub fn scaled(points: u32) -> u32 {
    points.saturating_mul(SCORE_FACTOR)
}

/// Convert a scaled score into the displayed value (truncating).
pub fn display_score(scaled: u32) -> u32 {
    scaled / SCORE_FACTOR
}
