//! userhub CLI - random-user import service
//!
//! - `serve`: run the HTTP API (import trigger, list, update)
//! - `import`: run one import against the database and exit

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser, Debug)]
#[command(name = "userhub", version, about = "Import random users into Postgres and serve them over HTTP")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP API server
    Serve(commands::serve::ServeArgs),
    /// Run one import from the random-user source and exit
    Import(commands::import::ImportArgs),
}

fn init_tracing() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .compact()
        .try_init()
        .map_err(|err| anyhow!(err))
}

#[tokio::main]
async fn main() -> Result<()> {
    // .env is optional; real environment variables win
    let _ = dotenvy::dotenv();
    init_tracing()?;

    let cli = Cli::parse();
    match cli.command {
        Commands::Serve(args) => commands::run_serve(args).await?,
        Commands::Import(args) => commands::run_import(args).await?,
    }

    Ok(())
}
