//! Command implementations for the prop-score CLI

pub mod compare;
pub mod popular;
pub mod rank;
pub mod score;


use std::path::PathBuf;

use crate::{
    odds::{SnapshotLocation, DEFAULT_BOOKMAKER},
    storage::ComparisonDatabase,
    PlayerId, Result, ScoreError, BOOKMAKER_ENV_VAR, SNAPSHOT_ENV_VAR,
};

/// Minimum number of players for `score` and `compare`.
pub const MIN_COMPARE_PLAYERS: usize = 2;

/// Snapshot from the flag, else `PROP_SCORE_SNAPSHOT`.
pub fn resolve_snapshot_location(location: Option<SnapshotLocation>) -> Result<SnapshotLocation> {
    if let Some(location) = location {
        return Ok(location);
    }
    match std::env::var(SNAPSHOT_ENV_VAR) {
        Ok(raw) if !raw.trim().is_empty() => raw.parse(),
        _ => Err(ScoreError::MissingSnapshot {
            env_var: SNAPSHOT_ENV_VAR.to_string(),
        }),
    }
}

/// Bookmaker from the flag, else `PROP_SCORE_BOOKMAKER`, else `draftkings`.
pub fn resolve_bookmaker(bookmaker: Option<String>) -> String {
    bookmaker
        .or_else(|| std::env::var(BOOKMAKER_ENV_VAR).ok())
        .map(|b| b.trim().to_lowercase())
        .filter(|b| !b.is_empty())
        .unwrap_or_else(|| DEFAULT_BOOKMAKER.to_string())
}

/// Database file from the flag, else `PROP_SCORE_DB`, else the cache default.
pub fn resolve_database_path(database: Option<PathBuf>) -> PathBuf {
    database.unwrap_or_else(ComparisonDatabase::database_path)
}

pub fn require_players(players: &[PlayerId]) -> Result<()> {
    if players.len() < MIN_COMPARE_PLAYERS {
        return Err(ScoreError::InsufficientPlayers {
            required: MIN_COMPARE_PLAYERS,
            provided: players.len(),
        });
    }
    Ok(())
}

/// Format an optional number for text output
pub(crate) fn fmt_opt(value: Option<f64>) -> String {
    value.map_or_else(|| "-".to_string(), |v| format!("{v}"))
}
