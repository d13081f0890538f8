//! Pathway CLI - train and inspect the course recommender

// Clippy pedantic allows - these are intentional design choices
#![allow(clippy::doc_markdown)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::unused_async)]

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

use commands::{catalog, students, train};

#[derive(Parser)]
#[command(name = "pathway")]
#[command(author, version, about = "Pathway - curriculum RL course recommender", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a training session and persist the action-value table
    Train(train::TrainArgs),

    /// Student pool operations
    #[command(subcommand)]
    Students(students::StudentsCommands),

    /// Catalog operations
    #[command(subcommand)]
    Catalog(catalog::CatalogCommands),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    let log_level = if cli.verbose { "debug" } else { "info" };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| {
                    format!(
                        "pathway_cli={log_level},pathway_core={log_level},pathway_rl={log_level}"
                    )
                    .into()
                }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    match cli.command {
        Commands::Train(args) => train::run(args).await,
        Commands::Students(cmd) => students::run(cmd).await,
        Commands::Catalog(cmd) => catalog::run(cmd).await,
    }
}
