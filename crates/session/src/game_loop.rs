//! Game loop - drives turns and records the final score.
//!
//! Each iteration shows the status panel, then waits up to the level's turn
//! delay for a command. A command is applied immediately; a timeout lets the
//! engine move the shape down. Placements are scored with the session's
//! modifiers.
//!
//! When the game ends the player statistics are built and the score is
//! submitted to the ledger exactly once, unless the player quit.

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::core::{LedgerStore, Submission};
use crate::engine::{Controls, Engine, Evaluation, StatusDisplay};
use crate::session::{PlayerStats, Session};
use crate::types::{Action, Command};

/// How a game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEnd {
    /// The board filled up.
    GameOver,
    /// The player pressed quit.
    Quit,
}

/// Run a game until the board fills up or the player quits.
pub fn run<E, C, D>(
    session: &mut Session,
    engine: &mut E,
    controls: &mut C,
    display: &mut D,
) -> GameEnd
where
    E: Engine,
    C: Controls,
    D: StatusDisplay,
{
    start(session, engine);

    loop {
        if session.take_new_turn() {
            log_turn_start(session, engine);
        }

        display.show(&session.stats(&engine.status(), engine.next_shape()));

        let end = match controls.poll(session.turn_delay()) {
            Some(command) => handle_command(session, engine, controls, command),
            None => evaluate(session, engine),
        };

        if let Some(end) = end {
            let (x, y) = engine.position();
            let cause = match end {
                GameEnd::GameOver => "board full",
                GameEnd::Quit => "player quit",
            };
            info!(
                shape = engine.current_shape(),
                x,
                y,
                score = session.display_score(),
                cause,
                "game finished"
            );
            return end;
        }
    }
}

/// What a finished (not quit) game leaves behind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameResult {
    /// Statistics shown to the player.
    pub stats: PlayerStats,
    /// `None` when the score was zero and nothing was recorded.
    pub submission: Option<Submission>,
}

/// Build the player statistics and record the final score, unless the
/// player quit.
pub fn finish<E: Engine>(
    session: &Session,
    engine: &E,
    end: GameEnd,
    store: &LedgerStore,
) -> Result<Option<GameResult>> {
    if end == GameEnd::Quit {
        info!(player = %session.player(), "player quit, score discarded");
        return Ok(None);
    }

    let stats = session.summary(engine.status().efficiency);
    info!(
        player = %session.player(),
        score = stats.score,
        efficiency = stats.efficiency,
        score_ratio = stats.score_ratio,
        "player statistics"
    );

    let submission = store
        .submit(*session.player(), session.display_score())
        .with_context(|| format!("recording final score in {}", store.path().display()))?;
    Ok(Some(GameResult { stats, submission }))
}

fn start<E: Engine>(session: &mut Session, engine: &mut E) {
    let options = *session.options();
    engine.set_shadow(options.shadow);
    session.count_shape(engine.current_shape());

    info!(
        player = %session.player(),
        started_at = %session.started_at().format("%Y-%m-%d %H:%M:%S%.3f"),
        level = session.level(),
        show_next = options.show_next,
        guide_lines = options.guide_lines,
        shadow = options.shadow,
        block_char = %options.block_char,
        "game started"
    );
}

fn log_turn_start<E: Engine>(session: &Session, engine: &E) {
    let (x, y) = engine.position();
    let status = engine.status();
    info!(
        turn = session.turn(),
        shape = engine.current_shape(),
        x,
        y,
        next_shape = engine.next_shape(),
        level = session.level(),
        score = session.display_score(),
        lines = status.total_lines,
        shape_sum = session.shape_sum(),
        score_ratio = session.score_ratio(),
        efficiency = status.efficiency,
        "turn started"
    );
    debug!(shape_counts = ?session.shape_counts(), "statistics");
}

fn handle_command<E, C>(
    session: &mut Session,
    engine: &mut E,
    controls: &mut C,
    command: Command,
) -> Option<GameEnd>
where
    E: Engine,
    C: Controls,
{
    match command {
        Command::Move(action) => {
            let (x, y) = engine.position();
            debug!(action = action.as_str(), x, y, "action");
            engine.apply(action);
            if action == Action::Drop {
                // No key may move the shape between a drop and its placement.
                return evaluate(session, engine);
            }
        }
        Command::ShowNext => {
            session.enable_show_next();
            info!("show next piece enabled");
        }
        Command::ToggleGuideLines => {
            let enabled = session.toggle_guide_lines();
            info!(enabled, "guide lines toggled");
        }
        Command::SpeedUp => {
            if session.speed_up() {
                info!(level = session.level(), "level increased");
            } else {
                controls.beep();
            }
        }
        Command::Pause => {
            info!("game paused");
            controls.wait_any();
            info!("game resumed");
        }
        Command::Quit => {
            info!("player quit game");
            return Some(GameEnd::Quit);
        }
        Command::Unknown => controls.beep(),
    }
    None
}

fn evaluate<E: Engine>(session: &mut Session, engine: &mut E) -> Option<GameEnd> {
    let evaluation = engine.evaluate();
    let (x, y) = engine.position();

    match evaluation {
        Evaluation::MovedDown => {
            debug!(shape = engine.current_shape(), x, y, "shape moved down");
            None
        }
        Evaluation::Landed | Evaluation::GameOver => {
            let status = engine.status();
            let delta = session.score_turn(&status);
            if session.level_up_for(status.total_lines) {
                info!(level = session.level(), "level increased");
            }

            if evaluation == Evaluation::GameOver {
                return Some(GameEnd::GameOver);
            }

            session.count_shape(engine.current_shape());
            info!(
                turn = session.turn(),
                shape = engine.current_shape(),
                x,
                y,
                lines = status.cleared_lines,
                delta,
                "shape landed"
            );
            session.finish_turn();
            None
        }
    }
}
