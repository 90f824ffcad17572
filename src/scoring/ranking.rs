//! Paged leaderboard over every player listed in a snapshot.

use rayon::prelude::*;
use serde::Serialize;
use std::collections::HashSet;
use tracing::debug;

use super::aggregate::score_matched;
use super::types::PlayerScoreResult;
use crate::cli::types::{PlayerId, Position, SortOrder, StatCategory};
use crate::odds::OddsEvent;

/// Paging, ordering and filtering for [`rank_players`].
#[derive(Debug, Clone, PartialEq)]
pub struct RankingQuery {
    /// 1-based page number.
    pub page: usize,
    pub limit: usize,
    /// Order by this stat's line instead of the weighted score.
    pub sort_by: Option<StatCategory>,
    pub order: SortOrder,
    pub position: Option<Position>,
}

impl Default for RankingQuery {
    fn default() -> Self {
        Self {
            page: 1,
            limit: 10,
            sort_by: None,
            order: SortOrder::Desc,
            position: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedPlayer {
    /// Overall 1-based rank, not the position within the page.
    pub rank: usize,
    #[serde(flatten)]
    pub result: PlayerScoreResult,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankingPage {
    pub total_players: usize,
    pub current_page: usize,
    pub total_pages: usize,
    pub players: Vec<RankedPlayer>,
}

/// Unique roster ids across all events, in first-seen order.
pub fn roster_player_ids(events: &[OddsEvent]) -> Vec<PlayerId> {
    let mut seen = HashSet::new();
    events
        .iter()
        .flat_map(|event| event.players.values())
        .filter_map(|player| player.player_id.as_deref())
        .filter(|id| seen.insert(*id))
        .map(PlayerId::from)
        .collect()
}

/// Score every rostered player that has real odds and return one page.
///
/// Players without odds are left out rather than synthesized.
pub fn rank_players(events: &[OddsEvent], preferred: &str, query: &RankingQuery) -> RankingPage {
    let ids = roster_player_ids(events);
    debug!(roster = ids.len(), "ranking players");

    let mut scored: Vec<PlayerScoreResult> = ids
        .par_iter()
        .filter_map(|id| score_matched(id, events, preferred))
        .filter(|result| {
            query
                .position
                .map_or(true, |position| result.stats.contains_key(&position))
        })
        .collect();

    match query.sort_by {
        Some(stat) => {
            let line = |r: &PlayerScoreResult| r.over_under(stat).unwrap_or(0.0);
            scored.sort_by(|a, b| match query.order {
                SortOrder::Asc => line(a).total_cmp(&line(b)),
                SortOrder::Desc => line(b).total_cmp(&line(a)),
            });
        }
        None => scored.sort_by(|a, b| b.weighted_score.total_cmp(&a.weighted_score)),
    }

    let page = query.page.max(1);
    let limit = query.limit.max(1);
    let total_players = scored.len();
    let total_pages = total_players.div_ceil(limit);
    let start = (page - 1).saturating_mul(limit);

    let players = scored
        .into_iter()
        .enumerate()
        .skip(start)
        .take(limit)
        .map(|(i, result)| RankedPlayer { rank: i + 1, result })
        .collect();

    RankingPage {
        total_players,
        current_page: page,
        total_pages,
        players,
    }
}
