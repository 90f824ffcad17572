//! Scoring positions and the stat categories each one is judged on.

use super::stat::StatCategory;
use crate::error::ScoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Position groups used for scoring.
///
/// Wide receivers and tight ends share one group since the feed offers the
/// same propositions for both.
///
/// # Examples
///
/// ```rust
/// use prop_score::{Position, StatCategory};
///
/// assert_eq!(Position::WrTe.to_string(), "WR_TE");
/// assert!(Position::RB.stats().contains(&StatCategory::ReceivingYards));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Position {
    QB,
    #[serde(rename = "WR_TE")]
    WrTe,
    RB,
}

impl Position {
    pub const ALL: [Position; 3] = [Position::QB, Position::WrTe, Position::RB];

    /// Stat categories that make up this position's line.
    pub fn stats(&self) -> &'static [StatCategory] {
        match self {
            Position::QB => &[
                StatCategory::PassingYards,
                StatCategory::PassingTouchdowns,
                StatCategory::Touchdowns,
            ],
            Position::WrTe => &[
                StatCategory::ReceivingYards,
                StatCategory::ReceivingReceptions,
                StatCategory::Touchdowns,
            ],
            Position::RB => &[
                StatCategory::RushingYards,
                StatCategory::ReceivingReceptions,
                StatCategory::ReceivingYards,
                StatCategory::Touchdowns,
            ],
        }
    }

    pub fn covers(&self, stat: StatCategory) -> bool {
        self.stats().contains(&stat)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Position::QB => "QB",
            Position::WrTe => "WR_TE",
            Position::RB => "RB",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for Position {
    type Err = ScoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "QB" => Ok(Position::QB),
            "WR_TE" | "WR/TE" | "WR" | "TE" => Ok(Position::WrTe),
            "RB" => Ok(Position::RB),
            _ => Err(ScoreError::InvalidPosition {
                position: s.to_string(),
            }),
        }
    }
}
