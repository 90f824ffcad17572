//! Loading the latest odds snapshot.
//!
//! The ingestion job stores one document per refresh, shaped as
//! `{ "data": [event, ...] }`. Bare arrays of events are accepted too.

use serde::Deserialize;
use std::{fmt, path::PathBuf, str::FromStr};
use tracing::{debug, info};

use super::{http::fetch_snapshot, types::OddsEvent};
use crate::{
    core::{maybe_api_key_header_map, snapshot_cache_path, try_read_to_string, write_string},
    error::{Result, ScoreError},
};

#[cfg(test)]
mod tests;

/// Where the snapshot comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SnapshotLocation {
    File(PathBuf),
    Url(String),
}

impl FromStr for SnapshotLocation {
    type Err = ScoreError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.starts_with("http://") || s.starts_with("https://") {
            Ok(Self::Url(s.to_string()))
        } else {
            Ok(Self::File(PathBuf::from(s)))
        }
    }
}

impl fmt::Display for SnapshotLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SnapshotLocation::File(path) => write!(f, "{}", path.display()),
            SnapshotLocation::Url(url) => write!(f, "{}", url),
        }
    }
}

/// Stored document formats
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum SnapshotDocument {
    /// Plain list of events
    Bare(Vec<Option<OddsEvent>>),
    /// Ingestion job envelope with a `data` field
    Stored {
        #[serde(default)]
        data: Option<Vec<Option<OddsEvent>>>,
    },
}

impl SnapshotDocument {
    fn into_events(self) -> Vec<OddsEvent> {
        let events = match self {
            SnapshotDocument::Bare(events) => events,
            SnapshotDocument::Stored { data } => data.unwrap_or_default(),
        };
        events.into_iter().flatten().collect()
    }
}

/// Parse a snapshot document. An empty or `null` document means there is no
/// snapshot at all, which is reported as [`ScoreError::NoOddsData`].
pub fn parse_snapshot(raw: &str) -> Result<Vec<OddsEvent>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed == "null" {
        return Err(ScoreError::NoOddsData);
    }
    let document: SnapshotDocument = serde_json::from_str(trimmed)?;
    Ok(document.into_events())
}

/// Load the latest snapshot.
///
/// Remote snapshots are cached on disk; the cached copy is used unless
/// `refresh == true` or it can't be parsed.
pub async fn load_latest_odds_snapshot(
    location: &SnapshotLocation,
    refresh: bool,
) -> Result<Vec<OddsEvent>> {
    match location {
        SnapshotLocation::File(path) => {
            let raw = try_read_to_string(path).ok_or(ScoreError::NoOddsData)?;
            let events = parse_snapshot(&raw)?;
            debug!(path = %path.display(), events = events.len(), "loaded odds snapshot");
            Ok(events)
        }
        SnapshotLocation::Url(url) => {
            let path = snapshot_cache_path();

            if !refresh {
                if let Some(raw) = try_read_to_string(&path) {
                    if let Ok(events) = parse_snapshot(&raw) {
                        debug!(path = %path.display(), events = events.len(), "odds snapshot cache hit");
                        return Ok(events);
                    }
                }
            }

            // tarpaulin::skip - HTTP call
            let client = reqwest::Client::new();
            let raw = fetch_snapshot(&client, url, maybe_api_key_header_map()?).await?;
            let events = parse_snapshot(&raw)?;
            info!(url = %url, events = events.len(), "fetched odds snapshot");

            if let Err(e) = write_string(&path, &raw) {
                debug!(error = %e, "could not write odds snapshot cache");
            }

            Ok(events)
        }
    }
}
