//! HTTP server command
//!
//! Connects the pool, creates the users table if needed, and serves the API.

use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use userhub_server::{create_pool, ensure_schema, run_server, AppState, DbConfig, RandomUserClient, ServerConfig};

use super::args::{DbArgs, SourceArgs};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: IpAddr,

    /// Port to listen on
    #[arg(long, short = 'p', env = "PORT", default_value_t = 3000)]
    pub port: u16,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,

    #[command(flatten)]
    pub db: DbArgs,

    #[command(flatten)]
    pub source: SourceArgs,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let db = DbConfig::from(args.db);
    let pool = create_pool(&db)
        .await
        .context("Failed to create database pool")?;
    ensure_schema(&pool)
        .await
        .context("Failed to create users table")?;

    let source = RandomUserClient::new(args.source.source_url)
        .context("Failed to build random-user client")?;
    tracing::info!(source = source.base_url(), "import source configured");

    let config = ServerConfig {
        bind_addr: SocketAddr::new(args.host, args.port),
        cors_permissive: args.cors_permissive,
    };

    // Run server (blocks until shutdown)
    run_server(AppState::new(pool, Arc::new(source)), config)
        .await
        .context("Server error")?;

    Ok(())
}
