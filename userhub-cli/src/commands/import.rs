//! One-shot import command

use anyhow::{Context, Result};
use clap::Parser;
use userhub_server::{
    create_pool, ensure_schema, DbConfig, ImportPlan, Importer, RandomUserClient, UserRepo,
};

use super::args::{DbArgs, SourceArgs};

/// Arguments for the import command
#[derive(Parser, Debug)]
pub struct ImportArgs {
    #[command(flatten)]
    pub db: DbArgs,

    #[command(flatten)]
    pub source: SourceArgs,
}

/// Run one import and report the count
pub async fn run_import(args: ImportArgs) -> Result<()> {
    let db = DbConfig::from(args.db);
    let pool = create_pool(&db)
        .await
        .context("Failed to create database pool")?;
    ensure_schema(&pool)
        .await
        .context("Failed to create users table")?;

    let source = RandomUserClient::new(args.source.source_url)
        .context("Failed to build random-user client")?;
    let repo = UserRepo::new(&pool);

    let report = Importer::new(&source, &repo, ImportPlan::default())
        .run()
        .await
        .context("Fetch failed")?;

    println!("Inserted or updated {} users", report.upserted);
    Ok(())
}
