//! Player scoring: aggregation, weighting, fallback synthesis and ranking.

pub mod aggregate;
pub mod compute;
pub mod fallback;
pub mod ranking;
pub mod types;

pub use aggregate::{compute_scores, score_matched, score_player};
pub use compute::{weighted_score, LINE_WEIGHTS, MIN_MATCHED_SCORE};
pub use fallback::synthesize;
pub use ranking::{rank_players, roster_player_ids, RankedPlayer, RankingPage, RankingQuery};
pub use types::{PlayerScoreResult, StatLine, StatMap};
