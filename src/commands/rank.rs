//! Rank command implementation

use std::fmt::Write as _;

use super::{fmt_opt, resolve_bookmaker, resolve_snapshot_location};
use crate::{
    odds::{load_latest_odds_snapshot, SnapshotLocation},
    scoring::{rank_players, RankingPage, RankingQuery},
    Result,
};

/// Handle the rank command
pub async fn handle_rank(
    snapshot: Option<SnapshotLocation>,
    bookmaker: Option<String>,
    refresh: bool,
    query: RankingQuery,
    as_json: bool,
) -> Result<()> {
    let location = resolve_snapshot_location(snapshot)?;
    let bookmaker = resolve_bookmaker(bookmaker);

    // tarpaulin::skip - file/HTTP I/O
    let events = load_latest_odds_snapshot(&location, refresh).await?;
    let page = rank_players(&events, &bookmaker, &query);

    if as_json {
        println!("{}", serde_json::to_string_pretty(&page)?);
    } else {
        print!("{}", render_page(&page, &query));
    }
    Ok(())
}

pub fn render_page(page: &RankingPage, query: &RankingQuery) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Page {}/{} ({} players)",
        page.current_page, page.total_pages, page.total_players
    );

    for ranked in &page.players {
        let result = &ranked.result;
        let positions: Vec<String> = result.positions().map(|p| p.to_string()).collect();
        let _ = write!(
            out,
            "{:>4}. {:<28} {:<12} score {:>7.2}",
            ranked.rank,
            result.player_id.as_str(),
            positions.join("/"),
            result.weighted_score
        );
        if let Some(stat) = query.sort_by {
            let _ = write!(out, "  {} {}", stat, fmt_opt(result.over_under(stat)));
        }
        out.push('\n');
    }
    out
}
