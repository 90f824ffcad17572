//! Stat categories offered as player propositions.

use crate::error::ScoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The stat categories the scoring engine understands.
///
/// Wire names are the feed's `statID` values and are matched exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatCategory {
    PassingYards,
    PassingTouchdowns,
    Touchdowns,
    RushingYards,
    ReceivingReceptions,
    ReceivingYards,
}

impl StatCategory {
    pub const ALL: [StatCategory; 6] = [
        StatCategory::PassingYards,
        StatCategory::PassingTouchdowns,
        StatCategory::Touchdowns,
        StatCategory::RushingYards,
        StatCategory::ReceivingReceptions,
        StatCategory::ReceivingYards,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StatCategory::PassingYards => "passing_yards",
            StatCategory::PassingTouchdowns => "passing_touchdowns",
            StatCategory::Touchdowns => "touchdowns",
            StatCategory::RushingYards => "rushing_yards",
            StatCategory::ReceivingReceptions => "receiving_receptions",
            StatCategory::ReceivingYards => "receiving_yards",
        }
    }

    /// Yardage props are priced on the line rather than the moneyline.
    pub fn is_yardage(&self) -> bool {
        matches!(
            self,
            StatCategory::ReceivingYards | StatCategory::RushingYards | StatCategory::PassingYards
        )
    }

    /// Parse a feed `statID`, returning `None` for categories we don't score.
    pub fn from_stat_id(stat_id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == stat_id)
    }
}

impl fmt::Display for StatCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for StatCategory {
    type Err = ScoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_stat_id(s).ok_or_else(|| ScoreError::InvalidStatCategory {
            stat: s.to_string(),
        })
    }
}
