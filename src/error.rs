//! Error types for the player odds scoring engine

use thiserror::Error;


pub type Result<T> = std::result::Result<T, ScoreError>;

#[derive(Error, Debug)]
pub enum ScoreError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    /// Persistence failures are passed through untouched.
    #[error(transparent)]
    Storage(#[from] anyhow::Error),

    #[error("At least {required} player IDs are required, got {provided}")]
    InsufficientPlayers { required: usize, provided: usize },

    #[error("No odds data found")]
    NoOddsData,

    #[error("Odds snapshot not provided and {env_var} environment variable not set")]
    MissingSnapshot { env_var: String },

    #[error("Invalid position: {position}")]
    InvalidPosition { position: String },

    #[error("Invalid stat category: {stat}")]
    InvalidStatCategory { stat: String },
}
