use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

use crate::cli::types::StatCategory;


/// Feed payloads occasionally carry `null` entries; drop them instead of
/// failing the whole snapshot.
fn de_skip_null_values<'de, D, T>(deserializer: D) -> Result<BTreeMap<String, T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    let raw: Option<BTreeMap<String, Option<T>>> = Deserialize::deserialize(deserializer)?;
    Ok(raw
        .unwrap_or_default()
        .into_iter()
        .filter_map(|(k, v)| v.map(|vv| (k, vv)))
        .collect())
}

/// A field that is present keeps its value even when it is `null`.
fn de_present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

/// Timestamps that aren't strings are treated as absent.
fn de_timestamp_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<Value> = Deserialize::deserialize(deserializer)?;
    Ok(match raw {
        Some(Value::String(s)) => Some(s),
        _ => None,
    })
}

/// Parse a feed timestamp: RFC 3339, or a bare `YYYY-MM-DD` read as UTC
/// midnight. Unparseable values are treated as absent.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// A raw odds or line value as it appears in the feed.
///
/// Bookmakers disagree on representation: some send numbers, some send
/// signed strings such as `"+120"`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum OddsValue {
    Number(f64),
    Text(String),
    Null,
    Other(Value),
}

/// One bookmaker's price for a proposition.
///
/// `None` means the field was missing; an explicit `null` is kept as
/// [`OddsValue::Null`].
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct BookmakerQuote {
    #[serde(default, deserialize_with = "de_present")]
    pub odds: Option<OddsValue>,
    #[serde(rename = "overUnder", default, deserialize_with = "de_present")]
    pub over_under: Option<OddsValue>,
    #[serde(rename = "lastUpdatedAt", default, deserialize_with = "de_timestamp_string")]
    pub last_updated_at: Option<String>,
}

impl BookmakerQuote {
    /// A quote is usable when it carries an `odds` or `overUnder` field,
    /// even a `null` one.
    pub fn has_value(&self) -> bool {
        self.odds.is_some() || self.over_under.is_some()
    }

    pub fn last_updated(&self) -> Option<DateTime<Utc>> {
        self.last_updated_at.as_deref().and_then(parse_timestamp)
    }
}

/// A single proposition, e.g. "player X over/under Y receiving yards".
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct OddsEntry {
    #[serde(rename = "statID", default)]
    pub stat_id: Option<String>,
    #[serde(rename = "oddID", default)]
    pub odd_id: Option<String>,
    #[serde(rename = "byBookmaker", default, deserialize_with = "de_skip_null_values")]
    pub by_bookmaker: BTreeMap<String, BookmakerQuote>,
}

impl OddsEntry {
    /// The scorable category of this entry, if it has one.
    pub fn stat_category(&self) -> Option<StatCategory> {
        self.stat_id.as_deref().and_then(StatCategory::from_stat_id)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct EventStatus {
    #[serde(rename = "startsAt", default, deserialize_with = "de_timestamp_string")]
    pub starts_at: Option<String>,
}

/// A player listed on an event's roster.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct EventPlayer {
    #[serde(rename = "playerID", default)]
    pub player_id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

/// One scheduled contest and every proposition offered on it.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct OddsEvent {
    #[serde(rename = "eventID", default)]
    pub event_id: Option<String>,
    #[serde(default)]
    pub status: Option<EventStatus>,
    #[serde(default, deserialize_with = "de_skip_null_values")]
    pub odds: BTreeMap<String, OddsEntry>,
    #[serde(default, deserialize_with = "de_skip_null_values")]
    pub players: BTreeMap<String, EventPlayer>,
}

impl OddsEvent {
    /// Raw start time exactly as the feed sent it.
    pub fn starts_at(&self) -> Option<&str> {
        self.status.as_ref().and_then(|s| s.starts_at.as_deref())
    }

    pub fn start_time(&self) -> Option<DateTime<Utc>> {
        self.starts_at().and_then(parse_timestamp)
    }
}
