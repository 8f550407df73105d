//! Pokedle - CLI
//!
//! Pokemon Wordle in the terminal: the answer is a random PokeAPI entry and
//! every guess must be a valid Pokemon name.

use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use pokedle::{
    catalog::{Catalog, PokeApiClient, PokeApiConfig, StaticCatalog},
    commands::run_simple,
    game::{Game, SystemClock},
    interactive::{run_tui, App},
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "pokedle",
    about = "Pokemon Wordle in the terminal, backed by PokeAPI",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Play offline against the embedded Generation-I catalog
    #[arg(long, global = true)]
    offline: bool,

    /// Seed for secret selection (reproducible games)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Override the PokeAPI base URL
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// How many catalog entries to play with
    #[arg(long, global = true)]
    limit: Option<u32>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (plain stdin/stdout, no TUI)
    Simple,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logs stay quiet by default so they don't fight the TUI for the screen.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let catalog = build_catalog(&cli)?;
    let clock = Arc::new(SystemClock);
    let game = match cli.seed {
        Some(seed) => Game::with_seed(catalog, clock, seed),
        None => Game::new(catalog, clock),
    };

    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => run_tui(App::new(game)).await,
        Commands::Simple => run_simple(game).await,
    }
}

fn build_catalog(cli: &Cli) -> Result<Arc<dyn Catalog>> {
    if cli.offline {
        return Ok(Arc::new(StaticCatalog::kanto()));
    }

    let client = PokeApiClient::new(PokeApiConfig {
        base_url: cli.base_url.clone(),
        limit: cli.limit,
    })?;
    Ok(Arc::new(client))
}
