//! Score command implementation

use std::fmt::Write as _;
use std::path::PathBuf;

use rand::{rngs::StdRng, SeedableRng};
use serde::Serialize;
use tracing::debug;

use super::{
    fmt_opt, require_players, resolve_bookmaker, resolve_database_path, resolve_snapshot_location,
};
use crate::{
    odds::{load_latest_odds_snapshot, SnapshotLocation},
    popularity::ComparisonTracker,
    scoring::{compute_scores, PlayerScoreResult},
    storage::ComparisonDatabase,
    PlayerId, Result,
};

/// Parameters for the score command
#[derive(Debug, Clone, Default)]
pub struct ScoreParams {
    pub players: Vec<PlayerId>,
    pub snapshot: Option<SnapshotLocation>,
    pub bookmaker: Option<String>,
    pub refresh: bool,
    pub seed: Option<u64>,
    pub record: bool,
    pub database: Option<PathBuf>,
    pub as_json: bool,
}

#[derive(Debug, Serialize)]
struct ScoreResponse<'a> {
    players: &'a [PlayerScoreResult],
}

/// Handle the score command
pub async fn handle_score(params: ScoreParams) -> Result<()> {
    require_players(&params.players)?;
    let location = resolve_snapshot_location(params.snapshot)?;
    let bookmaker = resolve_bookmaker(params.bookmaker);
    debug!(%location, %bookmaker, "scoring players");

    // tarpaulin::skip - file/HTTP I/O
    let events = load_latest_odds_snapshot(&location, params.refresh).await?;

    let mut rng = match params.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let results = compute_scores(&params.players, &events, &bookmaker, &mut rng)?;

    if params.record {
        let db = ComparisonDatabase::open(&resolve_database_path(params.database))?;
        ComparisonTracker::new(db).record_comparison(&params.players)?;
    }

    if params.as_json {
        let response = ScoreResponse { players: &results };
        println!("{}", serde_json::to_string_pretty(&response)?);
    } else {
        print!("{}", render_results(&results));
    }

    Ok(())
}

/// Text rendering: one header per player, one row per stat line.
pub fn render_results(results: &[PlayerScoreResult]) -> String {
    let mut out = String::new();
    for result in results {
        let _ = write!(out, "{}  score {:.2}", result.player_id, result.weighted_score);
        if result.is_fallback {
            out.push_str("  [fallback]");
        }
        if let Some(starts_at) = &result.starts_at {
            let _ = write!(out, "  starts {starts_at}");
        }
        out.push('\n');

        for (position, stats) in &result.stats {
            for (stat, line) in stats {
                let _ = writeln!(
                    out,
                    "  {:<6} {:<22} line {:>7}  odds {:>6}  {}",
                    position.to_string(),
                    stat.as_str(),
                    fmt_opt(line.over_under),
                    fmt_opt(line.odds),
                    line.name.as_deref().unwrap_or("-"),
                );
            }
        }
    }
    out
}
