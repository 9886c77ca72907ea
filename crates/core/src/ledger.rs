//! Score ledger module - the fixed-capacity ranked table
//!
//! The table always holds exactly [`LEDGER_CAPACITY`] slots. Occupied slots
//! come first, ordered by descending score with the older record winning
//! ties; unoccupied slots hold the sentinel record.

use std::fmt;

use crate::record::ScoreRecord;
use crate::types::LEDGER_CAPACITY;

/// The high-score table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreLedger {
    slots: [ScoreRecord; LEDGER_CAPACITY],
}

impl Default for ScoreLedger {
    fn default() -> Self {
        Self::new()
    }
}

impl ScoreLedger {
    /// Create a table where every slot is unoccupied.
    pub fn new() -> Self {
        Self {
            slots: [ScoreRecord::sentinel(); LEDGER_CAPACITY],
        }
    }

    /// Build a table from raw slots, restoring rank order.
    pub fn from_slots(mut slots: [ScoreRecord; LEDGER_CAPACITY]) -> Self {
        slots.sort_by(ScoreRecord::rank_cmp);
        Self { slots }
    }

    pub fn slots(&self) -> &[ScoreRecord; LEDGER_CAPACITY] {
        &self.slots
    }

    /// Occupied slots in rank order.
    pub fn occupied(&self) -> impl Iterator<Item = &ScoreRecord> {
        self.slots.iter().filter(|slot| slot.is_occupied())
    }

    pub fn occupied_count(&self) -> usize {
        self.occupied().count()
    }

    pub fn is_full(&self) -> bool {
        self.slots.iter().all(ScoreRecord::is_occupied)
    }

    /// Insert a record at its rank, pushing the last slot out.
    ///
    /// Returns the 0-based index the record landed at, or `None` when it does
    /// not outrank any slot and the table is left unchanged.
    pub fn insert(&mut self, record: ScoreRecord) -> Option<usize> {
        let index = self.slots.iter().position(|slot| record.outranks(slot))?;
        self.slots[index..].rotate_right(1);
        self.slots[index] = record;
        Some(index)
    }

    /// Build the ranking report, marking the slot at `new_index`.
    pub fn report(&self, new_index: Option<usize>) -> RankingReport {
        let entries = self
            .slots
            .iter()
            .enumerate()
            .take_while(|(_, slot)| slot.is_occupied())
            .map(|(index, slot)| RankedEntry {
                rank: index + 1,
                score: slot.score,
                name: slot.name.as_str().to_string(),
                is_new: new_index == Some(index),
            })
            .collect();
        RankingReport { entries }
    }
}

/// One line of the ranking report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedEntry {
    /// 1-based rank.
    pub rank: usize,
    pub score: i32,
    pub name: String,
    /// The entry was added by the submission that produced the report.
    pub is_new: bool,
}

/// Human-readable ranking of the occupied slots.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RankingReport {
    pub entries: Vec<RankedEntry>,
}

impl RankingReport {
    /// The entry added by this submission, if it made the table.
    pub fn new_entry(&self) -> Option<&RankedEntry> {
        self.entries.iter().find(|entry| entry.is_new)
    }
}

/// Heading printed above the ranking.
pub const REPORT_TITLE: &str = "\n\t   TINT HIGH SCORES\n\n\tRank   Score        Name\n\n";

impl fmt::Display for RankedEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mark = if self.is_new { '*' } else { ' ' };
        write!(f, "\t {:2}{} {:7}        {}", self.rank, mark, self.score, self.name)
    }
}

impl fmt::Display for RankingReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(REPORT_TITLE)?;
        for entry in &self.entries {
            writeln!(f, "{}", entry)?;
        }
        writeln!(f)
    }
}
