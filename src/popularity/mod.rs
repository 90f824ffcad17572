//! Comparison popularity tracking.
//!
//! Every comparison bumps a counter for each player involved and for the
//! head-to-head pairs it contains. Reports list recently active counters
//! above a threshold.

pub mod store;

pub use store::{CounterStore, InMemoryCounterStore};

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use tracing::{debug, info};

use crate::cli::types::PlayerId;
use crate::error::{Result, ScoreError};


/// Minimum number of players in one comparison.
pub const MIN_COMPARISON_PLAYERS: usize = 2;

/// Report window and thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PopularityQuery {
    pub window_days: u32,
    pub min_player_count: u64,
    pub min_pair_count: u64,
}

impl Default for PopularityQuery {
    fn default() -> Self {
        Self {
            window_days: 3,
            min_player_count: 3,
            min_pair_count: 2,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayerRef {
    pub id: PlayerId,
    pub name: String,
}

impl PlayerRef {
    fn new(id: PlayerId) -> Self {
        let name = id.display_name();
        Self { id, name }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PopularPlayer {
    pub id: PlayerId,
    pub name: String,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PopularComparison {
    pub players: [PlayerRef; 2],
    pub count: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PopularityReport {
    pub popular_players: Vec<PopularPlayer>,
    pub popular_comparisons: Vec<PopularComparison>,
}

/// Head-to-head pairs implied by one comparison, each ordered ascending.
///
/// Two players form one pair and four form two, `(0, 1)` and `(2, 3)`. Any
/// other size records no pairs.
pub fn comparison_pairs(player_ids: &[PlayerId]) -> Vec<(&PlayerId, &PlayerId)> {
    match player_ids {
        [a, b] => vec![ordered(a, b)],
        [a, b, c, d] => vec![ordered(a, b), ordered(c, d)],
        _ => Vec::new(),
    }
}

fn ordered<'a>(a: &'a PlayerId, b: &'a PlayerId) -> (&'a PlayerId, &'a PlayerId) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

/// Start of a report window. Windows reaching past the earliest
/// representable instant cover everything.
fn window_start(now: DateTime<Utc>, window_days: u32) -> DateTime<Utc> {
    Duration::try_days(i64::from(window_days))
        .and_then(|window| now.checked_sub_signed(window))
        .unwrap_or(DateTime::<Utc>::MIN_UTC)
}

/// Records comparisons into a [`CounterStore`] and reads them back.
pub struct ComparisonTracker<S> {
    store: S,
}

impl<S: CounterStore> ComparisonTracker<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_inner(self) -> S {
        self.store
    }

    pub fn record_comparison(&mut self, player_ids: &[PlayerId]) -> Result<()> {
        self.record_comparison_at(player_ids, Utc::now())
    }

    /// Count a comparison as happening at `now`.
    ///
    /// Fails before touching the store when fewer than two ids are given.
    /// Store errors are returned as-is; counters already bumped stay bumped.
    pub fn record_comparison_at(
        &mut self,
        player_ids: &[PlayerId],
        now: DateTime<Utc>,
    ) -> Result<()> {
        if player_ids.len() < MIN_COMPARISON_PLAYERS {
            return Err(ScoreError::InsufficientPlayers {
                required: MIN_COMPARISON_PLAYERS,
                provided: player_ids.len(),
            });
        }

        for player_id in player_ids {
            self.store.increment_player(player_id, now)?;
        }

        let pairs = comparison_pairs(player_ids);
        for (a, b) in &pairs {
            self.store.increment_pair(a, b, now)?;
        }

        info!(
            players = player_ids.len(),
            pairs = pairs.len(),
            "recorded comparison"
        );
        Ok(())
    }

    pub fn popularity_report(&self, query: &PopularityQuery) -> Result<PopularityReport> {
        self.popularity_report_at(query, Utc::now())
    }

    /// Counters updated within `query.window_days` before `now`.
    pub fn popularity_report_at(
        &self,
        query: &PopularityQuery,
        now: DateTime<Utc>,
    ) -> Result<PopularityReport> {
        let since = window_start(now, query.window_days);
        debug!(%since, ?query, "building popularity report");

        let popular_players = self
            .store
            .players_updated_since(since, query.min_player_count)?
            .into_iter()
            .map(|c| PopularPlayer {
                name: c.player_id.display_name(),
                id: c.player_id,
                count: c.count,
            })
            .collect();

        let popular_comparisons = self
            .store
            .pairs_updated_since(since, query.min_pair_count)?
            .into_iter()
            .map(|c| PopularComparison {
                players: [PlayerRef::new(c.player1), PlayerRef::new(c.player2)],
                count: c.count,
            })
            .collect();

        Ok(PopularityReport {
            popular_players,
            popular_comparisons,
        })
    }
}
