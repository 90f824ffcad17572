//! Entry point: parse CLI and dispatch to command handlers.

use clap::Parser;
use prop_score::{
    cli::{Commands, PropScore},
    commands::{
        compare::handle_compare,
        popular::handle_popular,
        rank::handle_rank,
        score::{handle_score, ScoreParams},
    },
    PopularityQuery, RankingQuery, Result,
};
use tracing_subscriber::EnvFilter;

/// Run the CLI.
#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so `--json` output stays clean
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("prop_score=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let app = PropScore::parse();

    match app.command {
        Commands::Score {
            players,
            snapshot,
            seed,
            record,
            database,
            json,
        } => {
            handle_score(ScoreParams {
                players,
                snapshot: snapshot.snapshot,
                bookmaker: snapshot.bookmaker,
                refresh: snapshot.refresh,
                seed,
                record,
                database: database.database,
                as_json: json,
            })
            .await?
        }

        Commands::Compare { players, database } => handle_compare(&players, database.database)?,

        Commands::Popular {
            window_days,
            min_player_count,
            min_pair_count,
            database,
            json,
        } => handle_popular(
            PopularityQuery {
                window_days,
                min_player_count,
                min_pair_count,
            },
            database.database,
            json,
        )?,

        Commands::Rank {
            snapshot,
            page,
            limit,
            sort_by,
            order,
            position,
            json,
        } => {
            handle_rank(
                snapshot.snapshot,
                snapshot.bookmaker,
                snapshot.refresh,
                RankingQuery {
                    page,
                    limit,
                    sort_by,
                    order,
                    position,
                },
                json,
            )
            .await?
        }
    }

    Ok(())
}
