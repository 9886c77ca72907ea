//! Score tool front end: argument handling and report printing.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{anyhow, Result};
use crossterm::{
    style::{Attribute, Print, SetAttribute},
    QueueableCommand,
};

use crate::core::{LedgerConfig, PlayerName, RankingReport, REPORT_TITLE};

pub const USAGE: &str = "USAGE: tint-scores [show] [--file PATH]\n       tint-scores submit NAME SCORE [--file PATH]\n";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScoresCommand {
    Show,
    Submit { name: PlayerName, score: u32 },
    Help,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoresArgs {
    pub command: ScoresCommand,
    pub config: LedgerConfig,
}

/// Parse the arguments after the program name.
///
/// `base` supplies the score file used when `--file` is absent.
pub fn parse_scores_args(args: &[String], base: LedgerConfig) -> Result<ScoresArgs> {
    let mut config = base;
    let mut positional: Vec<&str> = Vec::new();
    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "--file" | "-f" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("scores: missing value for --file"))?;
                config.path = PathBuf::from(v);
            }
            "--help" | "-h" => {
                return Ok(ScoresArgs {
                    command: ScoresCommand::Help,
                    config,
                });
            }
            other if other.starts_with('-') && other.len() > 1 => {
                return Err(anyhow!("scores: unknown argument: {}", other));
            }
            other => positional.push(other),
        }
        i += 1;
    }

    let command = match positional.as_slice() {
        [] | ["show"] => ScoresCommand::Show,
        ["submit", name, score] => {
            let score = score
                .parse::<u32>()
                .map_err(|_| anyhow!("scores: invalid score: {}", score))?;
            ScoresCommand::Submit {
                name: PlayerName::new(name),
                score,
            }
        }
        ["submit", ..] => return Err(anyhow!("scores: submit needs NAME and SCORE")),
        [other, ..] => return Err(anyhow!("scores: unknown command: {}", other)),
    };

    Ok(ScoresArgs { command, config })
}

/// Print the ranking, highlighting the entry added by this run.
///
/// Styling is skipped when `styled` is false (e.g. output is not a terminal).
pub fn write_report<W: Write>(out: &mut W, report: &RankingReport, styled: bool) -> Result<()> {
    out.write_all(REPORT_TITLE.as_bytes())?;
    for entry in &report.entries {
        if styled && entry.is_new {
            out.queue(SetAttribute(Attribute::Bold))?;
            out.queue(Print(entry))?;
            out.queue(SetAttribute(Attribute::Reset))?;
        } else {
            out.queue(Print(entry))?;
        }
        out.write_all(b"\n")?;
    }
    out.write_all(b"\n")?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{PlayerName, ScoreLedger, ScoreRecord};

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn base() -> LedgerConfig {
        LedgerConfig {
            path: PathBuf::from("/tmp/base.scores"),
        }
    }

    #[test]
    fn test_default_is_show() {
        let parsed = parse_scores_args(&[], base()).unwrap();
        assert_eq!(parsed.command, ScoresCommand::Show);
        assert_eq!(parsed.config, base());
    }

    #[test]
    fn test_submit_with_file() {
        let parsed =
            parse_scores_args(&args(&["submit", "abz", "120", "--file", "x.scores"]), base())
                .unwrap();
        assert_eq!(
            parsed.command,
            ScoresCommand::Submit {
                name: PlayerName::new("abz"),
                score: 120
            }
        );
        assert_eq!(parsed.config.path, PathBuf::from("x.scores"));
    }

    #[test]
    fn test_invalid_arguments() {
        assert!(parse_scores_args(&args(&["submit", "abz"]), base()).is_err());
        assert!(parse_scores_args(&args(&["submit", "abz", "-3"]), base()).is_err());
        assert!(parse_scores_args(&args(&["submit", "abz", "lots"]), base()).is_err());
        assert!(parse_scores_args(&args(&["--file"]), base()).is_err());
        assert!(parse_scores_args(&args(&["reset"]), base()).is_err());
    }

    #[test]
    fn test_help() {
        let parsed = parse_scores_args(&args(&["show", "-h"]), base()).unwrap();
        assert_eq!(parsed.command, ScoresCommand::Help);
    }

    #[test]
    fn test_plain_report_matches_display() {
        let mut ledger = ScoreLedger::new();
        ledger.insert(ScoreRecord::new(PlayerName::new("abz"), 120, 1));
        let index = ledger.insert(ScoreRecord::new(PlayerName::new("maria"), 80, 2));
        let report = ledger.report(index);

        let mut out = Vec::new();
        write_report(&mut out, &report, false).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), report.to_string());
    }
}
