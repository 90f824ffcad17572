//! Database schema and connection management

use crate::core::cache::default_database_path;
use crate::DATABASE_ENV_VAR;
use anyhow::Result;
use rusqlite::Connection;
use std::path::{Path, PathBuf};

/// SQLite-backed comparison counters
pub struct ComparisonDatabase {
    pub(crate) conn: Connection,
}

impl ComparisonDatabase {
    /// Open the database at `PROP_SCORE_DB`, or the default cache location
    pub fn new() -> Result<Self> {
        Self::open(&Self::database_path())
    }

    /// Open (creating if needed) the database at `path` and ensure tables exist
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let conn = Connection::open(path)?;
        let mut db = Self { conn };
        db.initialize_schema()?;
        Ok(db)
    }

    /// Fresh in-memory database, mostly for tests
    pub fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let mut db = Self { conn };
        db.initialize_schema()?;
        Ok(db)
    }

    /// Get the path to the database file
    pub fn database_path() -> PathBuf {
        match std::env::var(DATABASE_ENV_VAR) {
            Ok(path) if !path.trim().is_empty() => PathBuf::from(path),
            _ => default_database_path(),
        }
    }

    /// Initialize the database schema
    pub(crate) fn initialize_schema(&mut self) -> Result<()> {
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS player_counts (
                player_id TEXT PRIMARY KEY,
                count INTEGER NOT NULL DEFAULT 0,
                created_at INTEGER NOT NULL,
                updated_at INTEGER NOT NULL
            )",
            [],
        )?;

        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS pair_counts (
                player1 TEXT NOT NULL,
                player2 TEXT NOT NULL,
                count INTEGER NOT NULL DEFAULT 0,
                created_at INTEGER NOT NULL,
                updated_at INTEGER NOT NULL,
                PRIMARY KEY (player1, player2),
                CHECK (player1 <= player2)
            )",
            [],
        )?;

        // Popularity reports filter on recency first
        self.conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_player_counts_updated
             ON player_counts(updated_at)",
            [],
        )?;

        self.conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_pair_counts_updated
             ON pair_counts(updated_at)",
            [],
        )?;

        Ok(())
    }
}
