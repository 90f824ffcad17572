//! Choosing one bookmaker quote per proposition.

use std::collections::BTreeMap;

use super::types::BookmakerQuote;
use crate::cli::types::StatCategory;

/// Used when the caller doesn't name a preferred bookmaker.
pub const DEFAULT_BOOKMAKER: &str = "draftkings";

/// Fallback order for yardage props, after the preferred bookmaker.
pub const LINE_PRIORITY: [&str; 8] = [
    "bovada",
    "caesars",
    "prophetexchange",
    "betonline",
    "hardrockbet",
    "draftkings",
    "fanduel",
    "betmgm",
];

/// Fallback order for everything else, after the preferred bookmaker.
pub const ODDS_PRIORITY: [&str; 6] = [
    "draftkings",
    "espnbet",
    "fanduel",
    "betmgm",
    "bovada",
    "caesars",
];

/// The quote picked for a proposition, still in raw feed form.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelectedQuote<'a> {
    pub bookmaker: &'a str,
    pub quote: &'a BookmakerQuote,
}

/// Pick the quote to use for `stat`.
///
/// Walks `preferred` then the stat's fixed priority list, taking the first
/// bookmaker that is present and carries an `odds` or `overUnder` field
/// (`null` counts). If none qualify, any such bookmaker is used.
pub fn select_quote<'a>(
    by_bookmaker: &'a BTreeMap<String, BookmakerQuote>,
    stat: StatCategory,
    preferred: &str,
) -> Option<SelectedQuote<'a>> {
    if by_bookmaker.is_empty() {
        return None;
    }

    let fallback: &[&str] = if stat.is_yardage() {
        &LINE_PRIORITY
    } else {
        &ODDS_PRIORITY
    };

    std::iter::once(preferred)
        .chain(fallback.iter().copied())
        .find_map(|book| {
            by_bookmaker
                .get_key_value(book)
                .filter(|(_, quote)| quote.has_value())
        })
        .or_else(|| by_bookmaker.iter().find(|(_, quote)| quote.has_value()))
        .map(|(bookmaker, quote)| SelectedQuote {
            bookmaker: bookmaker.as_str(),
            quote,
        })
}
