//! Player-to-proposition matching.
//!
//! Feed keys are loosely formatted composite strings such as
//! `receiving_yards-JANE_SMITH_1_NFL-game-ou-over`. Matching policy differs
//! per category:
//!
//! | category     | rule                                                    |
//! |--------------|---------------------------------------------------------|
//! | `touchdowns` | exact `touchdowns-{player}-game-yn-yes`                 |
//! | all others   | `oddID` contains the player id, or the id minus suffix  |
//!
//! Touchdown props are exact because anytime-scorer keys for different
//! players are routinely substrings of one another.

use super::types::OddsEntry;
use crate::cli::types::{PlayerId, StatCategory};


/// Trim, collapse whitespace runs to `_`, and lowercase.
pub fn canonicalize(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for (i, word) in raw.split_whitespace().enumerate() {
        if i > 0 {
            out.push('_');
        }
        out.extend(word.chars().flat_map(char::to_lowercase));
    }
    out
}

/// Strip a trailing `_<digits>_<league>` variant suffix, e.g. `_1_nfl`.
fn strip_variant_suffix(canonical: &str) -> Option<&str> {
    let (rest, league) = canonical.rsplit_once('_')?;
    let (name, variant) = rest.rsplit_once('_')?;
    let is_league = !league.is_empty() && league.chars().all(|c| c.is_ascii_alphabetic());
    let is_variant = !variant.is_empty() && variant.chars().all(|c| c.is_ascii_digit());
    (is_league && is_variant && !name.is_empty()).then_some(name)
}

/// Matching state for one player, computed once and reused across every
/// entry of every candidate event.
#[derive(Debug, Clone)]
pub struct PlayerMatcher {
    canonical: String,
    name_only: Option<String>,
    touchdown_token: String,
}

impl PlayerMatcher {
    pub fn new(player_id: &PlayerId) -> Self {
        Self::from_raw(player_id.as_str())
    }

    pub fn from_raw(player_id: &str) -> Self {
        let canonical = canonicalize(player_id);
        let name_only = strip_variant_suffix(&canonical).map(str::to_string);
        let touchdown_token = format!(
            "{}-{}-game-yn-yes",
            StatCategory::Touchdowns.as_str(),
            canonical
        );
        Self {
            canonical,
            name_only,
            touchdown_token,
        }
    }

    pub fn canonical(&self) -> &str {
        &self.canonical
    }

    /// The entry's category if it belongs to this player and is one of `allowed`.
    pub fn matched_category(
        &self,
        entry: &OddsEntry,
        allowed: &[StatCategory],
    ) -> Option<StatCategory> {
        let odd_id = entry.odd_id.as_deref()?;
        let stat = entry.stat_category()?;
        if !allowed.contains(&stat) {
            return None;
        }

        let odd_id = canonicalize(odd_id);
        let hit = match stat {
            StatCategory::Touchdowns => odd_id == self.touchdown_token,
            _ => {
                odd_id.contains(&self.canonical)
                    || self
                        .name_only
                        .as_deref()
                        .is_some_and(|name| odd_id.contains(name))
            }
        };
        hit.then_some(stat)
    }

    pub fn matches(&self, entry: &OddsEntry, allowed: &[StatCategory]) -> bool {
        self.matched_category(entry, allowed).is_some()
    }
}

/// One-shot form of [`PlayerMatcher::matches`].
pub fn matches_player_stat(entry: &OddsEntry, player_id: &str, allowed: &[StatCategory]) -> bool {
    PlayerMatcher::from_raw(player_id).matches(entry, allowed)
}
