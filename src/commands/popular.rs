//! Popular command implementation

use std::fmt::Write as _;
use std::path::PathBuf;

use super::resolve_database_path;
use crate::{
    popularity::{ComparisonTracker, PopularityQuery, PopularityReport},
    storage::ComparisonDatabase,
    Result,
};

/// Handle the popular command
pub fn handle_popular(
    query: PopularityQuery,
    database: Option<PathBuf>,
    as_json: bool,
) -> Result<()> {
    let db = ComparisonDatabase::open(&resolve_database_path(database))?;
    let report = ComparisonTracker::new(db).popularity_report(&query)?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", render_report(&report, &query));
    }
    Ok(())
}

pub fn render_report(report: &PopularityReport, query: &PopularityQuery) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Popular players (last {} days)", query.window_days);
    if report.popular_players.is_empty() {
        out.push_str("  none\n");
    }
    for player in &report.popular_players {
        let _ = writeln!(out, "  {:<24} {:>4}  {}", player.name, player.count, player.id);
    }

    let _ = writeln!(out, "Popular comparisons (last {} days)", query.window_days);
    if report.popular_comparisons.is_empty() {
        out.push_str("  none\n");
    }
    for pair in &report.popular_comparisons {
        let [a, b] = &pair.players;
        let _ = writeln!(out, "  {} vs {} {:>4}", a.name, b.name, pair.count);
    }

    out
}
