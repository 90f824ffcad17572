//! Data models for the storage layer

use crate::cli::types::PlayerId;
use serde::{Deserialize, Serialize};

/// How often one player has appeared in a comparison
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerCount {
    pub player_id: PlayerId,
    pub count: u64,
    pub created_at: i64,
    pub updated_at: i64,
}

/// How often an unordered pair has been compared head-to-head.
/// `player1 <= player2` always holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairCount {
    pub player1: PlayerId,
    pub player2: PlayerId,
    pub count: u64,
    pub created_at: i64,
    pub updated_at: i64,
}
