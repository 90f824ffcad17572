//! Unit tests for storage functionality

use super::*;
use crate::cli::types::PlayerId;

fn create_test_db() -> ComparisonDatabase {
    ComparisonDatabase::new_in_memory().unwrap()
}

fn id(s: &str) -> PlayerId {
    PlayerId::new(s)
}

#[test]
fn test_database_creation() {
    let _db = create_test_db();
}

#[test]
fn test_schema_is_idempotent() {
    let mut db = create_test_db();
    assert!(db.initialize_schema().is_ok());
}

#[test]
fn test_increment_player_count() {
    let mut db = create_test_db();
    let player = id("john_doe_1_nfl");

    assert!(db.get_player_count(&player).unwrap().is_none());

    db.increment_player_count(&player, 100).unwrap();
    db.increment_player_count(&player, 250).unwrap();

    let count = db.get_player_count(&player).unwrap().unwrap();
    assert_eq!(count.count, 2);
    assert_eq!(count.created_at, 100);
    assert_eq!(count.updated_at, 250);
}

#[test]
fn test_increment_pair_count_is_unordered() {
    let mut db = create_test_db();
    let a = id("a_1_nfl");
    let b = id("b_1_nfl");

    db.increment_pair_count(&b, &a, 100).unwrap();
    db.increment_pair_count(&a, &b, 200).unwrap();

    let pair = db.get_pair_count(&b, &a).unwrap().unwrap();
    assert_eq!(pair.player1, a);
    assert_eq!(pair.player2, b);
    assert_eq!(pair.count, 2);
    assert_eq!(pair.updated_at, 200);
}

#[test]
fn test_players_updated_since() {
    let mut db = create_test_db();
    for _ in 0..3 {
        db.increment_player_count(&id("busy_1_nfl"), 500).unwrap();
    }
    for _ in 0..3 {
        db.increment_player_count(&id("also_busy_1_nfl"), 500).unwrap();
    }
    db.increment_player_count(&id("quiet_1_nfl"), 500).unwrap();
    for _ in 0..5 {
        db.increment_player_count(&id("stale_1_nfl"), 10).unwrap();
    }

    let rows = db.players_updated_since(100, 3).unwrap();
    let ids: Vec<_> = rows.iter().map(|r| r.player_id.as_str()).collect();
    assert_eq!(ids, vec!["also_busy_1_nfl", "busy_1_nfl"]);
}

#[test]
fn test_pairs_updated_since() {
    let mut db = create_test_db();
    for _ in 0..2 {
        db.increment_pair_count(&id("a"), &id("b"), 500).unwrap();
    }
    for _ in 0..4 {
        db.increment_pair_count(&id("c"), &id("d"), 500).unwrap();
    }
    db.increment_pair_count(&id("e"), &id("f"), 500).unwrap();

    let rows = db.pairs_updated_since(100, 2).unwrap();
    let pairs: Vec<_> = rows
        .iter()
        .map(|r| (r.player1.as_str(), r.player2.as_str(), r.count))
        .collect();
    assert_eq!(pairs, vec![("c", "d", 4), ("a", "b", 2)]);
}

#[test]
fn test_clear_all_data() {
    let mut db = create_test_db();
    db.increment_player_count(&id("a"), 1).unwrap();
    db.increment_pair_count(&id("a"), &id("b"), 1).unwrap();

    db.clear_all_data().unwrap();

    assert!(db.get_player_count(&id("a")).unwrap().is_none());
    assert!(db.get_pair_count(&id("a"), &id("b")).unwrap().is_none());
}

#[test]
fn test_file_backed_database_persists() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("comparisons.db");

    {
        let mut db = ComparisonDatabase::open(&path).unwrap();
        db.increment_player_count(&id("a"), 1).unwrap();
    }

    let db = ComparisonDatabase::open(&path).unwrap();
    assert_eq!(db.get_player_count(&id("a")).unwrap().unwrap().count, 1);
}
