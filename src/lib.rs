//! Player odds scoring engine
//!
//! Turns a snapshot of bookmaker player propositions into comparable
//! per-player scores, and keeps counters of which players get compared.
//!
//! ## Features
//!
//! - **Odds Matching**: Find a player's propositions in loosely keyed feed data
//! - **Bookmaker Selection**: Preferred bookmaker first, then fixed priority lists
//! - **Weighted Scoring**: Over/under lines and touchdown probability in one number
//! - **Fallback Synthesis**: Flagged, position-typical numbers when a player has no odds
//! - **Popularity Tracking**: SQLite counters for players and head-to-head pairs
//!
//! ## Quick Start
//!
//! ```rust
//! use prop_score::{compute_scores, OddsEvent, PlayerId};
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let events: Vec<OddsEvent> = serde_json::from_str(r#"[{
//!     "status": { "startsAt": "2025-09-07T17:00:00Z" },
//!     "odds": {
//!         "k": {
//!             "statID": "receiving_yards",
//!             "oddID": "receiving_yards-JANE_SMITH_1_NFL-game-ou-over",
//!             "byBookmaker": { "draftkings": { "overUnder": 75 } }
//!         }
//!     }
//! }]"#).unwrap();
//!
//! let ids = [PlayerId::new("jane_smith_1_nfl")];
//! let mut rng = StdRng::seed_from_u64(1);
//! let results = compute_scores(&ids, &events, "draftkings", &mut rng).unwrap();
//! assert!((results[0].weighted_score - 7.5).abs() < 1e-9);
//! assert!(!results[0].is_fallback);
//! ```
//!
//! ## Environment Configuration
//!
//! ```bash
//! export PROP_SCORE_SNAPSHOT=https://odds.example.com/latest.json
//! export PROP_SCORE_BOOKMAKER=fanduel
//! ```

pub mod cli;
pub mod commands;
pub mod core;
pub mod error;
pub mod odds;
pub mod popularity;
pub mod scoring;
pub mod storage;

// Re-export commonly used types
pub use cli::types::{PlayerId, Position, SortOrder, StatCategory};
pub use error::{Result, ScoreError};
pub use odds::{OddsEvent, SnapshotLocation};
pub use popularity::{ComparisonTracker, CounterStore, PopularityQuery, PopularityReport};
pub use scoring::{compute_scores, rank_players, PlayerScoreResult, RankingQuery, StatLine};

pub const SNAPSHOT_ENV_VAR: &str = "PROP_SCORE_SNAPSHOT";
pub const BOOKMAKER_ENV_VAR: &str = "PROP_SCORE_BOOKMAKER";
pub const DATABASE_ENV_VAR: &str = "PROP_SCORE_DB";
