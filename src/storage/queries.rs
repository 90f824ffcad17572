//! Counter queries

use super::{models::*, schema::ComparisonDatabase};
use crate::PlayerId;
use anyhow::Result;
use rusqlite::{params, OptionalExtension, Row};

impl ComparisonDatabase {
    /// Add one to a player's counter, creating it on first sight.
    ///
    /// A single upsert statement, so concurrent writers never lose counts.
    pub fn increment_player_count(&mut self, player_id: &PlayerId, now: i64) -> Result<()> {
        self.conn.execute(
            "INSERT INTO player_counts (player_id, count, created_at, updated_at)
             VALUES (?1, 1, ?2, ?2)
             ON CONFLICT(player_id) DO UPDATE SET
                 count = count + 1,
                 updated_at = excluded.updated_at",
            params![player_id.as_str(), now],
        )?;
        Ok(())
    }

    /// Add one to the counter of an unordered pair
    pub fn increment_pair_count(&mut self, a: &PlayerId, b: &PlayerId, now: i64) -> Result<()> {
        let (player1, player2) = if a <= b { (a, b) } else { (b, a) };
        self.conn.execute(
            "INSERT INTO pair_counts (player1, player2, count, created_at, updated_at)
             VALUES (?1, ?2, 1, ?3, ?3)
             ON CONFLICT(player1, player2) DO UPDATE SET
                 count = count + 1,
                 updated_at = excluded.updated_at",
            params![player1.as_str(), player2.as_str(), now],
        )?;
        Ok(())
    }

    pub fn get_player_count(&self, player_id: &PlayerId) -> Result<Option<PlayerCount>> {
        let count = self
            .conn
            .query_row(
                "SELECT player_id, count, created_at, updated_at
                 FROM player_counts WHERE player_id = ?",
                params![player_id.as_str()],
                |row| self.row_to_player_count(row),
            )
            .optional()?;
        Ok(count)
    }

    /// Pair lookup; argument order does not matter
    pub fn get_pair_count(&self, a: &PlayerId, b: &PlayerId) -> Result<Option<PairCount>> {
        let (player1, player2) = if a <= b { (a, b) } else { (b, a) };
        let count = self
            .conn
            .query_row(
                "SELECT player1, player2, count, created_at, updated_at
                 FROM pair_counts WHERE player1 = ? AND player2 = ?",
                params![player1.as_str(), player2.as_str()],
                |row| self.row_to_pair_count(row),
            )
            .optional()?;
        Ok(count)
    }

    /// Players touched at or after `since` with at least `min_count` appearances,
    /// most compared first
    pub fn players_updated_since(&self, since: i64, min_count: u64) -> Result<Vec<PlayerCount>> {
        let mut stmt = self.conn.prepare(
            "SELECT player_id, count, created_at, updated_at
             FROM player_counts
             WHERE updated_at >= ? AND count >= ?
             ORDER BY count DESC, player_id ASC",
        )?;

        let rows = stmt.query_map(params![since, min_count], |row| {
            self.row_to_player_count(row)
        })?;

        let mut counts = Vec::new();
        for row in rows {
            counts.push(row?);
        }
        Ok(counts)
    }

    /// Pairs touched at or after `since` with at least `min_count` comparisons
    pub fn pairs_updated_since(&self, since: i64, min_count: u64) -> Result<Vec<PairCount>> {
        let mut stmt = self.conn.prepare(
            "SELECT player1, player2, count, created_at, updated_at
             FROM pair_counts
             WHERE updated_at >= ? AND count >= ?
             ORDER BY count DESC, player1 ASC, player2 ASC",
        )?;

        let rows = stmt.query_map(params![since, min_count], |row| {
            self.row_to_pair_count(row)
        })?;

        let mut counts = Vec::new();
        for row in rows {
            counts.push(row?);
        }
        Ok(counts)
    }

    /// Clear all data from the database (useful for starting fresh)
    pub fn clear_all_data(&mut self) -> Result<()> {
        self.conn.execute("DELETE FROM pair_counts", [])?;
        self.conn.execute("DELETE FROM player_counts", [])?;
        Ok(())
    }

    fn row_to_player_count(&self, row: &Row) -> rusqlite::Result<PlayerCount> {
        Ok(PlayerCount {
            player_id: PlayerId::new(row.get::<_, String>(0)?),
            count: row.get(1)?,
            created_at: row.get(2)?,
            updated_at: row.get(3)?,
        })
    }

    fn row_to_pair_count(&self, row: &Row) -> rusqlite::Result<PairCount> {
        Ok(PairCount {
            player1: PlayerId::new(row.get::<_, String>(0)?),
            player2: PlayerId::new(row.get::<_, String>(1)?),
            count: row.get(2)?,
            created_at: row.get(3)?,
            updated_at: row.get(4)?,
        })
    }
}
