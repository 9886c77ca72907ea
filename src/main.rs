//! High-score tool (default binary).
//!
//! Shows the ranked table stored in the score file, or records a score by
//! hand. The score file comes from `TINT_SCORE_FILE` unless `--file` is given.

use std::io::{self, IsTerminal};
use std::process::ExitCode;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use tint::core::{LedgerConfig, LedgerStore};
use tint::scores::{parse_scores_args, write_report, ScoresCommand, USAGE};

fn main() -> ExitCode {
    if let Err(e) = init_logging() {
        eprintln!("tint-scores: cannot initialise logging: {:#}", e);
    }

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("tint-scores: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_logging() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("tint=info".parse()?)
                .add_directive("tint_core=info".parse()?)
                .add_directive("tint_session=info".parse()?),
        )
        .init();
    Ok(())
}

fn run() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let args = parse_scores_args(&args, LedgerConfig::from_env())?;
    let store = LedgerStore::from_config(&args.config);

    let report = match args.command {
        ScoresCommand::Help => {
            eprint!("{}", USAGE);
            return Ok(());
        }
        ScoresCommand::Show => store.load().report(None),
        ScoresCommand::Submit { name, score } => {
            match store
                .submit(name, score)
                .with_context(|| format!("cannot record score for {}", name))?
            {
                Some(submission) => submission.report,
                None => {
                    eprintln!("tint-scores: a zero score is not recorded");
                    return Ok(());
                }
            }
        }
    };

    let mut stdout = io::stdout();
    let styled = stdout.is_terminal();
    write_report(&mut stdout, &report, styled)
}
