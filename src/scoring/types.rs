//! Output models used for printing and JSON serialization.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::cli::types::{PlayerId, Position, StatCategory};

/// The quote used for one stat, already normalized.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatLine {
    /// Bookmaker the quote came from (`None` for synthesized or missing stats).
    pub name: Option<String>,
    pub odds: Option<f64>,
    pub over_under: Option<f64>,
}

impl StatLine {
    /// A stat the position expects but the feed never offered.
    pub fn no_data() -> Self {
        Self::default()
    }
}

/// Stat category -> quote.
pub type StatMap = BTreeMap<StatCategory, StatLine>;

/// Scored player payload.
///
/// `is_fallback == true` marks synthesized numbers; they must never be shown
/// as real odds.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerScoreResult {
    #[serde(rename = "playerID")]
    pub player_id: PlayerId,
    /// Start time of the event the odds came from, as sent by the feed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub starts_at: Option<String>,
    pub stats: BTreeMap<Position, StatMap>,
    pub weighted_score: f64,
    pub is_fallback: bool,
}

impl PlayerScoreResult {
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.stats.keys().copied()
    }

    /// Line for `stat`, looked up in QB, WR_TE, RB order.
    pub fn over_under(&self, stat: StatCategory) -> Option<f64> {
        self.stats
            .values()
            .find_map(|line| line.get(&stat).and_then(|l| l.over_under))
    }
}
