//! Ledger tests - ranking and persistence through the score file

use std::fs;

use tempfile::TempDir;
use tint::core::codec::{self, FormatVersion};
use tint::core::{LedgerStore, PlayerName, ScoreLedger, ScoreRecord};
use tint::types::LEDGER_CAPACITY;

fn store(dir: &TempDir) -> LedgerStore {
    LedgerStore::new(dir.path().join("tint.scores"))
}

fn name(s: &str) -> PlayerName {
    PlayerName::new(s)
}

#[test]
fn test_decreasing_submissions_fill_in_order() {
    let dir = TempDir::new().unwrap();
    let store = store(&dir);

    let scores = [900u32, 700, 500, 300, 100];
    for (i, score) in scores.iter().enumerate() {
        let submission = store
            .submit_at(name(&format!("p{}", i)), *score, 1_000 + i as i64)
            .unwrap()
            .unwrap();
        assert_eq!(submission.index, Some(i));
    }

    let ledger = store.try_load().unwrap();
    assert_eq!(ledger.occupied_count(), scores.len());
    let stored: Vec<(String, i32)> = ledger
        .occupied()
        .map(|r| (r.name.to_string(), r.score))
        .collect();
    assert_eq!(
        stored,
        [
            ("p0".to_string(), 900),
            ("p1".to_string(), 700),
            ("p2".to_string(), 500),
            ("p3".to_string(), 300),
            ("p4".to_string(), 100),
        ]
    );
}

#[test]
fn test_equal_scores_rank_earlier_first() {
    let dir = TempDir::new().unwrap();
    let store = store(&dir);

    store.submit_at(name("later"), 250, 2_000).unwrap();
    let submission = store.submit_at(name("earlier"), 250, 1_000).unwrap().unwrap();
    assert_eq!(submission.index, Some(0));

    let report = submission.report;
    assert_eq!(report.entries[0].name, "earlier");
    assert_eq!(report.entries[1].name, "later");
    assert!(report.entries[0].is_new);
}

#[test]
fn test_full_table_ignores_lower_score() {
    let dir = TempDir::new().unwrap();
    let store = store(&dir);
    for i in 0..LEDGER_CAPACITY {
        store
            .submit_at(name("p"), 50 + i as u32, i as i64)
            .unwrap();
    }
    let before = fs::read(store.path()).unwrap();

    let submission = store.submit_at(name("low"), 10, 100).unwrap().unwrap();
    assert_eq!(submission.index, None);
    assert_eq!(submission.report.entries.len(), LEDGER_CAPACITY);
    assert_eq!(fs::read(store.path()).unwrap(), before);
}

#[test]
fn test_full_table_evicts_lowest() {
    let dir = TempDir::new().unwrap();
    let store = store(&dir);
    for i in 0..LEDGER_CAPACITY {
        store
            .submit_at(name(&format!("p{}", i)), 50 + i as u32, i as i64)
            .unwrap();
    }

    let submission = store.submit_at(name("top"), 1_000, 100).unwrap().unwrap();
    assert_eq!(submission.index, Some(0));

    let ledger = store.try_load().unwrap();
    assert_eq!(ledger.occupied_count(), LEDGER_CAPACITY);
    assert_eq!(ledger.slots()[0].name.as_str(), "top");
    assert!(ledger.occupied().all(|r| r.name.as_str() != "p0"));
}

#[test]
fn test_zero_score_never_touches_file() {
    let dir = TempDir::new().unwrap();
    let store = store(&dir);

    assert!(store.submit(name("abz"), 0).unwrap().is_none());
    assert!(!store.path().exists());

    store.submit_at(name("abz"), 3, 1).unwrap();
    let before = fs::read(store.path()).unwrap();
    assert!(store.submit(name("abz"), 0).unwrap().is_none());
    assert_eq!(fs::read(store.path()).unwrap(), before);
}

#[test]
fn test_truncated_file_falls_back_to_fresh_table() {
    let dir = TempDir::new().unwrap();
    let store = store(&dir);
    store.submit_at(name("abz"), 120, 1).unwrap();
    store.submit_at(name("maria"), 80, 2).unwrap();

    let bytes = fs::read(store.path()).unwrap();
    fs::write(store.path(), &bytes[..bytes.len() / 2]).unwrap();

    assert!(store.try_load().is_err());
    assert_eq!(store.load(), ScoreLedger::new());

    // The next submission starts over with only the new record.
    let submission = store.submit_at(name("zoe"), 5, 3).unwrap().unwrap();
    assert_eq!(submission.report.entries.len(), 1);
    assert_eq!(submission.report.entries[0].name, "zoe");
}

#[test]
fn test_legacy_file_is_upgraded_on_submit() {
    let dir = TempDir::new().unwrap();
    let store = store(&dir);

    let mut ledger = ScoreLedger::new();
    ledger.insert(ScoreRecord::new(name("abz"), 120, 1));
    fs::write(
        store.path(),
        codec::encode_with_version(&ledger, FormatVersion::Legacy),
    )
    .unwrap();
    assert_eq!(store.try_load().unwrap(), ledger);

    store.submit_at(name("maria"), 80, 2).unwrap();
    let bytes = fs::read(store.path()).unwrap();
    assert_eq!(FormatVersion::detect(&bytes), FormatVersion::V1);

    let names: Vec<String> = store
        .try_load()
        .unwrap()
        .occupied()
        .map(|r| r.name.to_string())
        .collect();
    assert_eq!(names, ["abz", "maria"]);
}

#[test]
fn test_round_trip_through_file() {
    let dir = TempDir::new().unwrap();
    let store = store(&dir);

    let mut ledger = ScoreLedger::new();
    for (i, n) in ["abz", "maria", "a-name-of-eighteen"].iter().enumerate() {
        ledger.insert(ScoreRecord::new(name(n), 10 * (i as i32 + 1), i as i64));
    }
    store.save(&ledger).unwrap();
    assert_eq!(store.try_load().unwrap(), ledger);
}

#[test]
fn test_long_name_is_truncated_and_readable() {
    let dir = TempDir::new().unwrap();
    let store = store(&dir);

    store
        .submit_at(name("a-name-that-does-not-fit-the-budget"), 10, 1)
        .unwrap();
    let ledger = store.try_load().unwrap();
    assert_eq!(ledger.slots()[0].name.as_str(), "a-name-that-does-n");
}
