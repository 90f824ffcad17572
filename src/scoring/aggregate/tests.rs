//! Unit tests for per-player aggregation

use super::*;
use rand::{rngs::StdRng, SeedableRng};
use serde_json::{json, Value};

fn event(starts_at: Option<&str>, odds: Value) -> OddsEvent {
    let mut raw = json!({ "odds": odds });
    if let Some(starts_at) = starts_at {
        raw["status"] = json!({ "startsAt": starts_at });
    }
    serde_json::from_value(raw).unwrap()
}

fn id(s: &str) -> PlayerId {
    PlayerId::new(s)
}

fn rng() -> StdRng {
    StdRng::seed_from_u64(2025)
}

#[test]
fn test_single_receiving_line_end_to_end() {
    let events = vec![event(
        Some("2025-09-07T17:00:00Z"),
        json!({
            "k1": {
                "statID": "receiving_yards",
                "oddID": "receiving_yards-JANE_SMITH_1_NFL-game-ou-over",
                "byBookmaker": { "draftkings": { "overUnder": 75 } }
            }
        }),
    )];

    let results =
        compute_scores(&[id("jane_smith_1_nfl")], &events, "draftkings", &mut rng()).unwrap();
    assert_eq!(results.len(), 1);

    let result = &results[0];
    assert!(!result.is_fallback);
    assert_eq!(result.player_id.as_str(), "jane_smith_1_nfl");
    assert_eq!(result.starts_at.as_deref(), Some("2025-09-07T17:00:00Z"));
    assert!((result.weighted_score - 7.5).abs() < 1e-9);

    let line = &result.stats[&Position::WrTe][&StatCategory::ReceivingYards];
    assert_eq!(line.name.as_deref(), Some("draftkings"));
    assert_eq!(line.over_under, Some(75.0));
    assert_eq!(line.odds, None);

    // receiving_yards also belongs to RB
    assert_eq!(
        result.positions().collect::<Vec<_>>(),
        vec![Position::WrTe, Position::RB]
    );
    // Stats the position expects but never matched are explicit "no data"
    assert_eq!(
        result.stats[&Position::WrTe][&StatCategory::ReceivingReceptions],
        StatLine::no_data()
    );
    assert_eq!(result.stats[&Position::RB].len(), 4);
}

#[test]
fn test_unmatched_player_falls_back() {
    let events = vec![event(
        Some("2025-09-07T17:00:00Z"),
        json!({
            "k1": {
                "statID": "receiving_yards",
                "oddID": "receiving_yards-someone_else_1_nfl-game-ou-over",
                "byBookmaker": { "draftkings": { "overUnder": 75 } }
            }
        }),
    )];

    let result = score_player(&id("jane_smith_1_nfl"), &events, "draftkings", &mut rng());
    assert!(result.is_fallback);
    assert!(result.starts_at.is_none());
    assert!((10.0..=100.0).contains(&result.weighted_score));

    assert!(score_matched(&id("jane_smith_1_nfl"), &events, "draftkings").is_none());
}

#[test]
fn test_empty_snapshot_falls_back() {
    let result = score_player(&id("qb_josh_allen"), &[], "draftkings", &mut rng());
    assert!(result.is_fallback);
    assert_eq!(result.positions().collect::<Vec<_>>(), vec![Position::QB]);
}

#[test]
fn test_latest_event_wins() {
    let odds = |line: f64| {
        json!({
            "k": {
                "statID": "rushing_yards",
                "oddID": "rushing_yards-BIJAN_ROBINSON_1_NFL-game-ou-over",
                "byBookmaker": { "draftkings": { "overUnder": line } }
            }
        })
    };
    let events = vec![
        event(Some("2025-09-07T17:00:00Z"), odds(60.0)),
        event(Some("2025-09-14T17:00:00Z"), odds(80.0)),
        event(None, odds(100.0)),
        event(Some("not a date"), odds(120.0)),
    ];

    let result = score_matched(&id("bijan_robinson_1_nfl"), &events, "draftkings").unwrap();
    assert_eq!(result.starts_at.as_deref(), Some("2025-09-14T17:00:00Z"));
    assert_eq!(result.over_under(StatCategory::RushingYards), Some(80.0));
}

#[test]
fn test_events_without_start_time_still_usable() {
    let events = vec![
        event(
            None,
            json!({
                "k": {
                    "statID": "passing_touchdowns",
                    "oddID": "passing_touchdowns-JOE_BURROW_1_NFL-game-ou-over",
                    "byBookmaker": { "fanduel": { "overUnder": "1.5", "odds": "+105" } }
                }
            }),
        ),
        event(Some("2025-09-14T17:00:00Z"), json!({})),
    ];

    let result = score_matched(&id("joe_burrow_1_nfl"), &events, "draftkings").unwrap();
    assert!(result.starts_at.is_none());
    let line = &result.stats[&Position::QB][&StatCategory::PassingTouchdowns];
    assert_eq!(line.name.as_deref(), Some("fanduel"));
    assert_eq!(line.odds, Some(105.0));
    assert_eq!(line.over_under, Some(1.5));
    assert!((result.weighted_score - 6.0).abs() < 1e-9);
}

#[test]
fn test_newest_quote_per_stat_wins() {
    let events = vec![event(
        Some("2025-09-07T17:00:00Z"),
        json!({
            "a-old": {
                "statID": "receiving_receptions",
                "oddID": "receiving_receptions-JANE_SMITH_1_NFL-game-ou-over",
                "byBookmaker": {
                    "draftkings": { "overUnder": 4.5, "lastUpdatedAt": "2025-09-05T10:00:00Z" }
                }
            },
            "b-new": {
                "statID": "receiving_receptions",
                "oddID": "receiving_receptions-JANE_SMITH_1_NFL-game-ou-under",
                "byBookmaker": {
                    "betmgm": { "overUnder": 5.5, "lastUpdatedAt": "2025-09-06T10:00:00Z" }
                }
            },
            "c-older": {
                "statID": "receiving_receptions",
                "oddID": "receiving_receptions-JANE_SMITH_1_NFL-alt",
                "byBookmaker": {
                    "fanduel": { "overUnder": 6.5, "lastUpdatedAt": "2025-09-04T10:00:00Z" }
                }
            }
        }),
    )];

    let result = score_matched(&id("jane_smith_1_nfl"), &events, "draftkings").unwrap();
    let line = &result.stats[&Position::WrTe][&StatCategory::ReceivingReceptions];
    assert_eq!(line.name.as_deref(), Some("betmgm"));
    assert_eq!(line.over_under, Some(5.5));
}

#[test]
fn test_quote_without_timestamp_uses_event_start() {
    let events = vec![event(
        Some("2025-09-07T17:00:00Z"),
        json!({
            "a": {
                "statID": "rushing_yards",
                "oddID": "rushing_yards-DERRICK_HENRY_1_NFL-game-ou-over",
                "byBookmaker": {
                    "draftkings": { "overUnder": 90.5, "lastUpdatedAt": "2025-09-06T10:00:00Z" }
                }
            },
            "b": {
                "statID": "rushing_yards",
                "oddID": "rushing_yards-DERRICK_HENRY_1_NFL-game-ou-under",
                "byBookmaker": { "draftkings": { "overUnder": 95.5 } }
            }
        }),
    )];

    // "b" inherits the event start, which is later than "a"'s update
    let result = score_matched(&id("derrick_henry_1_nfl"), &events, "draftkings").unwrap();
    assert_eq!(result.over_under(StatCategory::RushingYards), Some(95.5));
}

#[test]
fn test_preferred_bookmaker_is_used() {
    let events = vec![event(
        Some("2025-09-07T17:00:00Z"),
        json!({
            "td": {
                "statID": "touchdowns",
                "oddID": "touchdowns-JANE_SMITH_1_NFL-game-yn-yes",
                "byBookmaker": {
                    "draftkings": { "odds": "+150" },
                    "fanduel": { "odds": "-110" }
                }
            }
        }),
    )];

    let with_default = score_matched(&id("JANE_SMITH_1_NFL"), &events, "draftkings").unwrap();
    assert!((with_default.weighted_score - 40.0).abs() < 1e-9);

    let with_fanduel = score_matched(&id("JANE_SMITH_1_NFL"), &events, "fanduel").unwrap();
    assert!((with_fanduel.weighted_score - 52.380_952_380_952_38).abs() < 1e-9);
    assert_eq!(
        with_fanduel.stats[&Position::QB][&StatCategory::Touchdowns]
            .name
            .as_deref(),
        Some("fanduel")
    );
    // touchdowns belongs to every position
    assert_eq!(with_fanduel.stats.len(), 3);
}

#[test]
fn test_matched_score_is_floored() {
    let events = vec![event(
        Some("2025-09-07T17:00:00Z"),
        json!({
            "k": {
                "statID": "receiving_receptions",
                "oddID": "receiving_receptions-BACKUP_TE_1_NFL-game-ou-over",
                "byBookmaker": { "draftkings": { "overUnder": 0.5 } }
            }
        }),
    )];

    let result = score_matched(&id("backup_te_1_nfl"), &events, "draftkings").unwrap();
    assert!(!result.is_fallback);
    assert_eq!(result.weighted_score, 5.0);
}

#[test]
fn test_matched_entry_without_quotes_keeps_positions() {
    let events = vec![event(
        Some("2025-09-07T17:00:00Z"),
        json!({
            "k": {
                "statID": "passing_yards",
                "oddID": "passing_yards-JOSH_ALLEN_1_NFL-game-ou-over",
                "byBookmaker": { "draftkings": { "odds": null, "overUnder": null } }
            }
        }),
    )];

    let result = score_matched(&id("josh_allen_1_nfl"), &events, "draftkings").unwrap();
    assert_eq!(result.positions().collect::<Vec<_>>(), vec![Position::QB]);
    // null fields still select the bookmaker, with no numbers
    let line = &result.stats[&Position::QB][&StatCategory::PassingYards];
    assert_eq!(line.name.as_deref(), Some("draftkings"));
    assert_eq!((line.odds, line.over_under), (None, None));
    assert!(result.stats[&Position::QB]
        .iter()
        .filter(|(stat, _)| **stat != StatCategory::PassingYards)
        .all(|(_, line)| *line == StatLine::no_data()));
    assert_eq!(result.weighted_score, 5.0);
}

#[test]
fn test_null_preferred_quote_beats_lower_ranked_data() {
    let events = vec![event(
        Some("2025-09-07T17:00:00Z"),
        json!({
            "k": {
                "statID": "receiving_yards",
                "oddID": "receiving_yards-JANE_SMITH_1_NFL-game-ou-over",
                "byBookmaker": {
                    "draftkings": { "odds": null, "overUnder": null },
                    "fanduel": { "overUnder": 75 }
                }
            }
        }),
    )];

    let result = score_matched(&id("jane_smith_1_nfl"), &events, "draftkings").unwrap();
    let line = &result.stats[&Position::WrTe][&StatCategory::ReceivingYards];
    assert_eq!(line.name.as_deref(), Some("draftkings"));
    assert_eq!(line.over_under, None);
    assert_eq!(result.weighted_score, 5.0);
}

#[test]
fn test_unparseable_values_normalize_to_none() {
    let events = vec![event(
        Some("2025-09-07T17:00:00Z"),
        json!({
            "k": {
                "statID": "rushing_yards",
                "oddID": "rushing_yards-JAHMYR_GIBBS_1_NFL-game-ou-over",
                "byBookmaker": { "draftkings": { "odds": "abc", "overUnder": "+65.5" } }
            }
        }),
    )];

    let result = score_matched(&id("jahmyr_gibbs_1_nfl"), &events, "draftkings").unwrap();
    let line = &result.stats[&Position::RB][&StatCategory::RushingYards];
    assert_eq!(line.odds, None);
    assert_eq!(line.over_under, Some(65.5));
}

#[test]
fn test_compute_scores_requires_players() {
    let result = compute_scores(&[], &[], "draftkings", &mut rng());
    assert!(matches!(
        result,
        Err(ScoreError::InsufficientPlayers { provided: 0, .. })
    ));
}

#[test]
fn test_compute_scores_preserves_request_order() {
    let ids = vec![id("B_PLAYER_1_NFL"), id("a_player_1_nfl"), id("c_wr")];
    let results = compute_scores(&ids, &[], "draftkings", &mut rng()).unwrap();
    let returned: Vec<_> = results.iter().map(|r| r.player_id.as_str()).collect();
    assert_eq!(returned, vec!["B_PLAYER_1_NFL", "a_player_1_nfl", "c_wr"]);
}
