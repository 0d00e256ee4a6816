//! Tests for score persistence: load-or-default, unit increments,
//! immediate writes, and fail-soft behavior.

use strum::IntoEnumIterator;
use tictactoe_core::{FileStore, MemoryStore, Outcome, SCORES_KEY, ScoreStore, ScoreTally};

#[test]
fn test_load_missing_yields_zeros() {
    let store = ScoreStore::load(Box::new(MemoryStore::new()));
    assert_eq!(store.tally(), ScoreTally::default());
}

#[test]
fn test_load_corrupt_yields_zeros() {
    let mut storage = MemoryStore::new();
    storage.seed(SCORES_KEY, "definitely not json");

    let store = ScoreStore::load(Box::new(storage));
    assert_eq!(store.tally(), ScoreTally::default());
}

#[test]
fn test_load_partial_object_defaults_missing_fields() {
    let mut storage = MemoryStore::new();
    storage.seed(SCORES_KEY, r#"{"X":3}"#);

    let store = ScoreStore::load(Box::new(storage));
    assert_eq!(store.tally(), ScoreTally::new(3, 0, 0));
}

#[test]
fn test_record_moves_exactly_one_counter() {
    for outcome in Outcome::iter() {
        let mut store = ScoreStore::load(Box::new(MemoryStore::new()));
        store.record(outcome);

        let expected = match outcome {
            Outcome::WinX => ScoreTally::new(1, 0, 0),
            Outcome::WinO => ScoreTally::new(0, 1, 0),
            Outcome::Draw => ScoreTally::new(0, 0, 1),
        };
        assert_eq!(store.tally(), expected, "tally after {outcome:?}");
    }
}

#[test]
fn test_record_persists_immediately() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = ScoreStore::load(Box::new(FileStore::new(dir.path())));

    store.record(Outcome::WinO);

    let raw = std::fs::read_to_string(dir.path().join(SCORES_KEY)).unwrap();
    let persisted: ScoreTally = serde_json::from_str(&raw).unwrap();
    assert_eq!(persisted, ScoreTally::new(0, 1, 0));
}

#[test]
fn test_tally_survives_reload() {
    let dir = tempfile::tempdir().unwrap();

    let mut store = ScoreStore::load(Box::new(FileStore::new(dir.path())));
    store.record(Outcome::WinX);
    store.record(Outcome::WinO);
    store.record(Outcome::Draw);
    store.record(Outcome::Draw);
    drop(store);

    let reloaded = ScoreStore::load(Box::new(FileStore::new(dir.path())));
    assert_eq!(reloaded.tally(), ScoreTally::new(1, 1, 2));
}

#[test]
fn test_failed_write_keeps_memory_tally() {
    let mut storage = MemoryStore::new();
    storage.fail_writes(true);

    let mut store = ScoreStore::load(Box::new(storage));
    store.record(Outcome::WinX);
    store.record(Outcome::WinX);

    // Writes were dropped, but the in-memory tally stays authoritative.
    assert_eq!(store.tally(), ScoreTally::new(2, 0, 0));
}

#[test]
fn test_persisted_layout_uses_short_keys() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = ScoreStore::load(Box::new(FileStore::new(dir.path())));

    store.record(Outcome::WinX);

    let raw = std::fs::read_to_string(dir.path().join(SCORES_KEY)).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value["X"], 1);
    assert_eq!(value["O"], 0);
    assert_eq!(value["D"], 0);
}
