//! Per-player scoring over an odds snapshot.
//!
//! For each requested player:
//! 1. keep events with at least one matching proposition,
//! 2. take the most recently started one,
//! 3. resolve one quote per stat (newest quote wins),
//! 4. derive positions from the matched stats,
//! 5. score, or fall back to synthesized data when nothing matched.
//!
//! Everything here borrows the snapshot immutably and is safe to run from
//! many threads at once.

use chrono::{DateTime, Utc};
use rand::Rng;
use std::collections::{BTreeMap, BTreeSet};
use tracing::{debug, info, Level};

use super::compute::{weighted_score, MIN_MATCHED_SCORE};
use super::fallback::synthesize;
use super::types::{PlayerScoreResult, StatLine, StatMap};
use crate::cli::types::{PlayerId, Position, StatCategory};
use crate::error::{Result, ScoreError};
use crate::odds::{normalize_odds, select_quote, BookmakerQuote, OddsEvent, PlayerMatcher};

#[cfg(test)]
mod tests;

/// Score every requested player, in request order.
///
/// Players without odds get synthesized results, so this only fails when
/// `player_ids` is empty.
pub fn compute_scores<R: Rng + ?Sized>(
    player_ids: &[PlayerId],
    events: &[OddsEvent],
    preferred_bookmaker: &str,
    rng: &mut R,
) -> Result<Vec<PlayerScoreResult>> {
    if player_ids.is_empty() {
        return Err(ScoreError::InsufficientPlayers {
            required: 1,
            provided: 0,
        });
    }

    let results: Vec<PlayerScoreResult> = player_ids
        .iter()
        .map(|player_id| score_player(player_id, events, preferred_bookmaker, rng))
        .collect();

    for result in &results {
        info!(
            player = %result.player_id,
            weighted_score = result.weighted_score,
            is_fallback = result.is_fallback,
            positions = result.stats.len(),
            "scored player"
        );
    }

    Ok(results)
}

/// Score one player, synthesizing data if the snapshot has nothing usable.
pub fn score_player<R: Rng + ?Sized>(
    player_id: &PlayerId,
    events: &[OddsEvent],
    preferred_bookmaker: &str,
    rng: &mut R,
) -> PlayerScoreResult {
    score_matched(player_id, events, preferred_bookmaker)
        .unwrap_or_else(|| synthesize(player_id, rng))
}

/// Score one player from real odds only. `None` means the fallback applies.
pub fn score_matched(
    player_id: &PlayerId,
    events: &[OddsEvent],
    preferred_bookmaker: &str,
) -> Option<PlayerScoreResult> {
    let matcher = PlayerMatcher::new(player_id);
    let allowed = &StatCategory::ALL;

    let Some(event) = latest_matching_event(&matcher, events) else {
        debug!(player = %player_id, "no events with matching odds");
        return None;
    };
    debug!(
        player = %player_id,
        event = event.event_id.as_deref().unwrap_or("N/A"),
        starts_at = event.starts_at().unwrap_or("N/A"),
        "using latest event"
    );
    log_available_odds(player_id, &matcher, event);

    let event_time = event.start_time();
    let mut matched: BTreeSet<StatCategory> = BTreeSet::new();
    let mut props: BTreeMap<StatCategory, (StatLine, Option<DateTime<Utc>>)> = BTreeMap::new();

    for (key, entry) in &event.odds {
        let Some(stat) = matcher.matched_category(entry, allowed) else {
            continue;
        };
        matched.insert(stat);
        debug!(
            player = %player_id,
            key = key.as_str(),
            %stat,
            bookmakers = entry.by_bookmaker.len(),
            "matched odds entry"
        );

        let Some(chosen) = select_quote(&entry.by_bookmaker, stat, preferred_bookmaker) else {
            continue;
        };

        let time = chosen.quote.last_updated().or(event_time);
        let is_newer = match props.get(&stat) {
            Some((_, existing)) => time > *existing,
            None => true,
        };
        if is_newer {
            let line = StatLine {
                name: Some(chosen.bookmaker.to_string()),
                odds: normalize_odds(chosen.quote.odds.as_ref()),
                over_under: normalize_odds(chosen.quote.over_under.as_ref()),
            };
            props.insert(stat, (line, time));
        }
    }

    let positions: Vec<Position> = Position::ALL
        .into_iter()
        .filter(|position| position.stats().iter().any(|s| matched.contains(s)))
        .collect();
    if positions.is_empty() {
        debug!(player = %player_id, "no positions inferred");
        return None;
    }
    debug!(player = %player_id, ?positions, "found positions");

    let quotes: StatMap = props
        .into_iter()
        .map(|(stat, (line, _))| (stat, line))
        .collect();

    let stats = positions
        .into_iter()
        .map(|position| {
            let lines = position
                .stats()
                .iter()
                .map(|stat| {
                    let line = quotes.get(stat).cloned().unwrap_or_else(StatLine::no_data);
                    (*stat, line)
                })
                .collect::<StatMap>();
            (position, lines)
        })
        .collect();

    let raw_score = weighted_score(&quotes);
    debug!(player = %player_id, raw_score, "weighted score");

    Some(PlayerScoreResult {
        player_id: player_id.clone(),
        starts_at: event.starts_at().map(str::to_string),
        stats,
        weighted_score: raw_score.max(MIN_MATCHED_SCORE),
        is_fallback: false,
    })
}

/// Most recently started event that carries odds for the player. Missing or
/// unparseable start times sort oldest; ties keep the earlier event.
fn latest_matching_event<'a>(
    matcher: &PlayerMatcher,
    events: &'a [OddsEvent],
) -> Option<&'a OddsEvent> {
    let allowed = &StatCategory::ALL;
    let mut latest: Option<(Option<DateTime<Utc>>, &'a OddsEvent)> = None;

    for event in events
        .iter()
        .filter(|event| event.odds.values().any(|entry| matcher.matches(entry, allowed)))
    {
        let start = event.start_time();
        if latest.map_or(true, |(best, _)| start > best) {
            latest = Some((start, event));
        }
    }

    latest.map(|(_, event)| event)
}

/// Every bookmaker quote for the player's matched stats, newest first.
fn log_available_odds(player_id: &PlayerId, matcher: &PlayerMatcher, event: &OddsEvent) {
    if !tracing::enabled!(Level::DEBUG) {
        return;
    }

    let mut by_stat: BTreeMap<StatCategory, Vec<(&str, &BookmakerQuote)>> = BTreeMap::new();
    for entry in event.odds.values() {
        if let Some(stat) = matcher.matched_category(entry, &StatCategory::ALL) {
            let rows = by_stat.entry(stat).or_default();
            rows.extend(entry.by_bookmaker.iter().map(|(book, q)| (book.as_str(), q)));
        }
    }

    for (stat, rows) in by_stat.iter_mut() {
        rows.sort_by(|a, b| b.1.last_updated().cmp(&a.1.last_updated()));
        for (book, quote) in rows.iter() {
            debug!(
                player = %player_id,
                %stat,
                book,
                odds = ?normalize_odds(quote.odds.as_ref()),
                over_under = ?normalize_odds(quote.over_under.as_ref()),
                last_updated_at = ?quote.last_updated_at,
                "available odds"
            );
        }
    }
}
