//! Synthesized stat lines for players the feed has no odds for.
//!
//! Comparisons should never come back empty, so unmatched players get
//! plausible position-typical numbers instead. Results are flagged with
//! `is_fallback` and carry no bookmaker names or start time.

use rand::Rng;
use std::collections::BTreeMap;
use tracing::info;

use super::compute::{weighted_score, FALLBACK_SCORE_RANGE};
use super::types::{PlayerScoreResult, StatLine, StatMap};
use crate::cli::types::{PlayerId, Position, StatCategory};

/// Guess a position from tokens embedded in the identifier. Defaults to RB.
pub fn infer_position(player_id: &PlayerId) -> Position {
    let id = player_id.as_str().to_lowercase();
    let has = |tag: &str| id.contains(&format!("{tag}_")) || id.contains(&format!("_{tag}"));

    if has("qb") {
        Position::QB
    } else if has("wr") || has("te") {
        Position::WrTe
    } else {
        Position::RB
    }
}

/// `base + [0, spread)` as a whole number.
fn draw<R: Rng + ?Sized>(rng: &mut R, base: i32, spread: i32) -> f64 {
    f64::from(base + rng.gen_range(0..spread))
}

fn over_under(value: f64) -> StatLine {
    StatLine {
        name: None,
        odds: None,
        over_under: Some(value),
    }
}

fn moneyline(value: f64) -> StatLine {
    StatLine {
        name: None,
        odds: Some(value),
        over_under: None,
    }
}

/// Position-typical baseline stats.
pub fn baseline_stats<R: Rng + ?Sized>(position: Position, rng: &mut R) -> StatMap {
    let lines: Vec<(StatCategory, StatLine)> = match position {
        Position::QB => vec![
            (StatCategory::PassingYards, over_under(draw(rng, 220, 100))),
            (StatCategory::PassingTouchdowns, over_under(1.5)),
            (StatCategory::Touchdowns, moneyline(draw(rng, -110, 50))),
        ],
        Position::WrTe => vec![
            (StatCategory::ReceivingYards, over_under(draw(rng, 45, 40))),
            (StatCategory::ReceivingReceptions, over_under(3.5)),
            (StatCategory::Touchdowns, moneyline(draw(rng, 150, 200))),
        ],
        Position::RB => vec![
            (StatCategory::RushingYards, over_under(draw(rng, 35, 30))),
            (StatCategory::ReceivingReceptions, over_under(2.5)),
            (StatCategory::ReceivingYards, over_under(draw(rng, 15, 20))),
            (StatCategory::Touchdowns, moneyline(draw(rng, 120, 150))),
        ],
    };
    lines.into_iter().collect()
}

/// Build a flagged, synthesized result for `player_id`.
pub fn synthesize<R: Rng + ?Sized>(player_id: &PlayerId, rng: &mut R) -> PlayerScoreResult {
    let position = infer_position(player_id);
    let stats = baseline_stats(position, rng);
    let (low, high) = FALLBACK_SCORE_RANGE;
    let weighted_score = weighted_score(&stats).clamp(low, high);

    info!(player = %player_id, %position, weighted_score, "no odds found, using fallback data");

    PlayerScoreResult {
        player_id: player_id.clone(),
        starts_at: None,
        stats: BTreeMap::from([(position, stats)]),
        weighted_score,
        is_fallback: true,
    }
}
