//! Odds feed model, normalization, matching and snapshot retrieval.

pub mod bookmaker;
pub mod http;
pub mod matcher;
pub mod normalize;
pub mod snapshot;
pub mod types;

pub use bookmaker::{select_quote, SelectedQuote, DEFAULT_BOOKMAKER};
pub use matcher::{canonicalize, matches_player_stat, PlayerMatcher};
pub use normalize::{implied_probability_score, normalize_odds};
pub use snapshot::{load_latest_odds_snapshot, parse_snapshot, SnapshotLocation};
pub use types::{BookmakerQuote, OddsEntry, OddsEvent, OddsValue};
