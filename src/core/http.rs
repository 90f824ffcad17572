//! HTTP utilities for snapshot retrieval

use crate::Result;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};

pub const API_KEY_ENV_VAR: &str = "PROP_SCORE_API_KEY";

/// Build `x-api-key` headers from `PROP_SCORE_API_KEY`, if present.
///
/// Returns `Ok(None)` when the env var is missing (public snapshot hosts).
pub fn maybe_api_key_header_map() -> Result<Option<HeaderMap>> {
    match std::env::var(API_KEY_ENV_VAR).ok() {
        Some(key) => {
            let mut h = HeaderMap::new();
            h.insert(ACCEPT, HeaderValue::from_static("application/json"));
            h.insert("x-api-key", HeaderValue::from_str(key.trim())?);
            Ok(Some(h))
        }
        None => Ok(None),
    }
}
