//! Identifier types for players in the odds feed.

use crate::error::{ScoreError, Result};
use crate::odds::matcher::canonicalize;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Opaque player identifier as used by the odds feed, e.g. `"josh_allen_1_nfl"`.
///
/// The original text is kept verbatim for all output. Comparisons against
/// feed keys go through [`PlayerId::canonical`], never through `==` on the
/// raw string.
///
/// # Examples
///
/// ```rust
/// use prop_score::PlayerId;
///
/// let id = PlayerId::new("Josh_Allen_1_NFL");
/// assert_eq!(id.as_str(), "Josh_Allen_1_NFL");
/// assert_eq!(id.canonical(), "josh_allen_1_nfl");
/// assert_eq!(id.display_name(), "Josh Allen");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(pub String);

impl PlayerId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Trimmed, whitespace-collapsed, lowercased form used for matching.
    pub fn canonical(&self) -> String {
        canonicalize(&self.0)
    }

    /// Human-readable name: the trailing two `_` segments (team index and
    /// league) are dropped and the rest is title-cased.
    pub fn display_name(&self) -> String {
        let mut parts: Vec<&str> = self.0.split('_').collect();
        parts.pop();
        parts.pop();
        parts
            .into_iter()
            .map(title_case)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PlayerId {
    type Err = ScoreError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(s.to_string()))
    }
}

impl From<&str> for PlayerId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for PlayerId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl AsRef<str> for PlayerId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
