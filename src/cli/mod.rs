//! CLI argument definitions and parsing.

pub mod types;

use crate::odds::SnapshotLocation;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use types::{PlayerId, Position, SortOrder, StatCategory};

/// Where odds come from and which bookmaker to prefer
#[derive(Debug, Args)]
pub struct SnapshotArgs {
    /// Snapshot file path or http(s) URL (or set `PROP_SCORE_SNAPSHOT` env var).
    #[clap(long)]
    pub snapshot: Option<SnapshotLocation>,

    /// Preferred bookmaker (or set `PROP_SCORE_BOOKMAKER`, default `draftkings`).
    #[clap(long, short)]
    pub bookmaker: Option<String>,

    /// Re-download a remote snapshot, overwriting the cached copy.
    #[clap(long)]
    pub refresh: bool,
}

/// Location of the comparison counter database
#[derive(Debug, Args)]
pub struct DatabaseArgs {
    /// SQLite file (or set `PROP_SCORE_DB`, default under the user cache dir).
    #[clap(long = "db")]
    pub database: Option<PathBuf>,
}

#[derive(Debug, Parser)]
#[clap(name = "prop-score", about = "Score and compare players from bookmaker prop odds")]
pub struct PropScore {
    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Score players from the latest odds snapshot.
    ///
    /// Players with no odds get synthesized numbers, flagged as fallback.
    Score {
        /// Player id (repeatable, at least two): `-p josh_allen_1_nfl -p joe_burrow_1_nfl`.
        #[clap(short = 'p', long = "player", required = true)]
        players: Vec<PlayerId>,

        #[clap(flatten)]
        snapshot: SnapshotArgs,

        /// Seed for fallback synthesis, for reproducible output.
        #[clap(long)]
        seed: Option<u64>,

        /// Also count this as a comparison.
        #[clap(long)]
        record: bool,

        #[clap(flatten)]
        database: DatabaseArgs,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Record a comparison between players without scoring them.
    Compare {
        /// Player id (repeatable, at least two).
        #[clap(short = 'p', long = "player", required = true)]
        players: Vec<PlayerId>,

        #[clap(flatten)]
        database: DatabaseArgs,
    },

    /// Show the most compared players and pairs.
    Popular {
        /// Only count activity from the last N days.
        #[clap(long, default_value_t = 3)]
        window_days: u32,

        /// Minimum appearances for a player to be listed.
        #[clap(long, default_value_t = 3)]
        min_player_count: u64,

        /// Minimum head-to-head comparisons for a pair to be listed.
        #[clap(long, default_value_t = 2)]
        min_pair_count: u64,

        #[clap(flatten)]
        database: DatabaseArgs,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Rank every player in the snapshot that has odds.
    Rank {
        #[clap(flatten)]
        snapshot: SnapshotArgs,

        /// Page number, starting at 1.
        #[clap(long, default_value_t = 1)]
        page: usize,

        /// Players per page.
        #[clap(long, default_value_t = 10)]
        limit: usize,

        /// Order by this stat's line instead of the weighted score.
        #[clap(long)]
        sort_by: Option<StatCategory>,

        /// Sort direction for `--sort-by`.
        #[clap(long, value_enum, default_value_t = SortOrder::Desc)]
        order: SortOrder,

        /// Only players with a line at this position (QB, WR_TE, RB).
        #[clap(long)]
        position: Option<Position>,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },
}
