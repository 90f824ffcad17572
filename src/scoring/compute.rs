use crate::cli::types::StatCategory;
use crate::odds::implied_probability_score;

use super::types::StatMap;

/// Floor for a matched player's score.
pub const MIN_MATCHED_SCORE: f64 = 5.0;
/// Clamp range for synthesized scores.
pub const FALLBACK_SCORE_RANGE: (f64, f64) = (10.0, 100.0);

/// Per-unit weights applied to over/under lines.
pub const LINE_WEIGHTS: [(StatCategory, f64); 5] = [
    (StatCategory::PassingYards, 0.1),
    (StatCategory::PassingTouchdowns, 4.0),
    (StatCategory::ReceivingYards, 0.1),
    (StatCategory::ReceivingReceptions, 1.0),
    (StatCategory::RushingYards, 0.1),
];

/// Weighted sum of the lines plus the touchdown implied probability.
///
/// Terms are summed in [`LINE_WEIGHTS`] order so results are reproducible to
/// the bit. Missing lines count as 0; a touchdown moneyline of 0 (not a real
/// price) contributes nothing.
pub fn weighted_score(stats: &StatMap) -> f64 {
    let line = |stat: StatCategory| stats.get(&stat).and_then(|l| l.over_under).unwrap_or(0.0);

    let lines = LINE_WEIGHTS
        .iter()
        .fold(0.0, |acc, (stat, weight)| acc + line(*stat) * weight);

    let touchdown_odds = stats
        .get(&StatCategory::Touchdowns)
        .and_then(|l| l.odds)
        .filter(|odds| *odds != 0.0);

    lines
        + match touchdown_odds {
            Some(odds) => implied_probability_score(Some(odds)),
            None => 0.0,
        }
}
