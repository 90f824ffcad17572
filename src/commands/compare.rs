//! Compare command implementation

use std::path::PathBuf;

use super::{require_players, resolve_database_path};
use crate::{
    popularity::{ComparisonTracker, CounterStore},
    storage::ComparisonDatabase,
    PlayerId, Result,
};

/// Handle the compare command
pub fn handle_compare(players: &[PlayerId], database: Option<PathBuf>) -> Result<()> {
    require_players(players)?;
    let db = ComparisonDatabase::open(&resolve_database_path(database))?;
    let pairs = record_with(db, players)?;

    println!(
        "✓ Comparison recorded for {} players ({} head-to-head)",
        players.len(),
        pairs
    );
    Ok(())
}

/// Record into any store and return the number of pairs counted
pub fn record_with<S: CounterStore>(store: S, players: &[PlayerId]) -> Result<usize> {
    let mut tracker = ComparisonTracker::new(store);
    tracker.record_comparison(players)?;
    Ok(crate::popularity::comparison_pairs(players).len())
}
