//! Persistence seam for comparison counters.

use chrono::{DateTime, Utc};
use std::collections::{BTreeMap, HashMap};

use crate::cli::types::PlayerId;
use crate::error::Result;
use crate::storage::{ComparisonDatabase, PairCount, PlayerCount};

/// Keyed counters with a last-updated time.
///
/// Each increment must be atomic per key. Pair keys are unordered; stores
/// keep them as `(smaller, larger)`.
pub trait CounterStore {
    fn increment_player(&mut self, player_id: &PlayerId, at: DateTime<Utc>) -> Result<()>;
    fn increment_pair(&mut self, a: &PlayerId, b: &PlayerId, at: DateTime<Utc>) -> Result<()>;
    /// Counters updated at or after `since` with `count >= min_count`,
    /// highest count first, ties by id.
    fn players_updated_since(&self, since: DateTime<Utc>, min_count: u64)
        -> Result<Vec<PlayerCount>>;
    fn pairs_updated_since(&self, since: DateTime<Utc>, min_count: u64) -> Result<Vec<PairCount>>;
}

impl CounterStore for ComparisonDatabase {
    fn increment_player(&mut self, player_id: &PlayerId, at: DateTime<Utc>) -> Result<()> {
        Ok(self.increment_player_count(player_id, at.timestamp())?)
    }

    fn increment_pair(&mut self, a: &PlayerId, b: &PlayerId, at: DateTime<Utc>) -> Result<()> {
        Ok(self.increment_pair_count(a, b, at.timestamp())?)
    }

    fn players_updated_since(
        &self,
        since: DateTime<Utc>,
        min_count: u64,
    ) -> Result<Vec<PlayerCount>> {
        Ok(ComparisonDatabase::players_updated_since(
            self,
            since.timestamp(),
            min_count,
        )?)
    }

    fn pairs_updated_since(&self, since: DateTime<Utc>, min_count: u64) -> Result<Vec<PairCount>> {
        Ok(ComparisonDatabase::pairs_updated_since(
            self,
            since.timestamp(),
            min_count,
        )?)
    }
}

/// Process-local store, handy for tests and one-off runs.
#[derive(Debug, Default)]
pub struct InMemoryCounterStore {
    players: HashMap<PlayerId, PlayerCount>,
    pairs: BTreeMap<(PlayerId, PlayerId), PairCount>,
}

impl InMemoryCounterStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CounterStore for InMemoryCounterStore {
    fn increment_player(&mut self, player_id: &PlayerId, at: DateTime<Utc>) -> Result<()> {
        let now = at.timestamp();
        let counter = self
            .players
            .entry(player_id.clone())
            .or_insert_with(|| PlayerCount {
                player_id: player_id.clone(),
                count: 0,
                created_at: now,
                updated_at: now,
            });
        counter.count += 1;
        counter.updated_at = now;
        Ok(())
    }

    fn increment_pair(&mut self, a: &PlayerId, b: &PlayerId, at: DateTime<Utc>) -> Result<()> {
        let now = at.timestamp();
        let (player1, player2) = if a <= b { (a, b) } else { (b, a) };
        let counter = self
            .pairs
            .entry((player1.clone(), player2.clone()))
            .or_insert_with(|| PairCount {
                player1: player1.clone(),
                player2: player2.clone(),
                count: 0,
                created_at: now,
                updated_at: now,
            });
        counter.count += 1;
        counter.updated_at = now;
        Ok(())
    }

    fn players_updated_since(
        &self,
        since: DateTime<Utc>,
        min_count: u64,
    ) -> Result<Vec<PlayerCount>> {
        let since = since.timestamp();
        let mut counts: Vec<PlayerCount> = self
            .players
            .values()
            .filter(|c| c.updated_at >= since && c.count >= min_count)
            .cloned()
            .collect();
        counts.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.player_id.cmp(&b.player_id)));
        Ok(counts)
    }

    fn pairs_updated_since(&self, since: DateTime<Utc>, min_count: u64) -> Result<Vec<PairCount>> {
        let since = since.timestamp();
        // BTreeMap iteration already orders ties by (player1, player2)
        let mut counts: Vec<PairCount> = self
            .pairs
            .values()
            .filter(|c| c.updated_at >= since && c.count >= min_count)
            .cloned()
            .collect();
        counts.sort_by(|a, b| b.count.cmp(&a.count));
        Ok(counts)
    }
}
