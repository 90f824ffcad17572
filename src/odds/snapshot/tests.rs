//! Unit tests for snapshot parsing and loading

use super::*;
use serde_json::json;
use tempfile::TempDir;

fn event_json(starts_at: &str) -> serde_json::Value {
    json!({
        "status": { "startsAt": starts_at },
        "odds": {}
    })
}

#[test]
fn test_parse_stored_document() {
    let raw = json!({ "data": [event_json("2025-09-07T17:00:00Z"), null] }).to_string();
    let events = parse_snapshot(&raw).unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].starts_at(), Some("2025-09-07T17:00:00Z"));
}

#[test]
fn test_parse_bare_array() {
    let raw = json!([event_json("a"), event_json("b")]).to_string();
    let events = parse_snapshot(&raw).unwrap();
    assert_eq!(events.len(), 2);
}

#[test]
fn test_document_without_events_is_empty_not_missing() {
    assert!(parse_snapshot("{}").unwrap().is_empty());
    assert!(parse_snapshot("{\"data\": null}").unwrap().is_empty());
    assert!(parse_snapshot("[]").unwrap().is_empty());
}

#[test]
fn test_missing_document_is_no_data() {
    assert!(matches!(parse_snapshot(""), Err(ScoreError::NoOddsData)));
    assert!(matches!(parse_snapshot("  null "), Err(ScoreError::NoOddsData)));
}

#[test]
fn test_invalid_document_is_json_error() {
    assert!(matches!(parse_snapshot("{not json"), Err(ScoreError::Json(_))));
}

#[test]
fn test_location_from_str() {
    assert_eq!(
        "https://odds.example.com/latest".parse::<SnapshotLocation>().unwrap(),
        SnapshotLocation::Url("https://odds.example.com/latest".to_string())
    );
    assert_eq!(
        "./snapshots/latest.json".parse::<SnapshotLocation>().unwrap(),
        SnapshotLocation::File(PathBuf::from("./snapshots/latest.json"))
    );
}

#[tokio::test]
async fn test_load_from_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("snapshot.json");
    std::fs::write(&path, json!({ "data": [event_json("2025-09-07T17:00:00Z")] }).to_string())
        .unwrap();

    let events = load_latest_odds_snapshot(&SnapshotLocation::File(path), false)
        .await
        .unwrap();
    assert_eq!(events.len(), 1);
}

#[tokio::test]
async fn test_load_from_missing_file() {
    let dir = TempDir::new().unwrap();
    let location = SnapshotLocation::File(dir.path().join("missing.json"));

    let result = load_latest_odds_snapshot(&location, false).await;
    assert!(matches!(result, Err(ScoreError::NoOddsData)));
}
