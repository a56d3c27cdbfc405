//! Arguments shared by every subcommand

use std::time::Duration;

use clap::Args;
use userhub_server::db::pool::{DEFAULT_ACQUIRE_TIMEOUT, DEFAULT_MAX_CONNECTIONS};
use userhub_server::{DbConfig, DEFAULT_SOURCE_URL};

/// Database connection settings
#[derive(Args, Debug, Clone)]
pub struct DbArgs {
    /// Database host
    #[arg(long, env = "DB_HOST", default_value = "localhost")]
    pub db_host: String,

    /// Database port
    #[arg(long, env = "DB_PORT", default_value_t = 5432)]
    pub db_port: u16,

    /// Database user
    #[arg(long, env = "DB_USER", default_value = "postgres")]
    pub db_user: String,

    /// Database password
    #[arg(long, env = "DB_PASS", default_value = "", hide_env_values = true)]
    pub db_pass: String,

    /// Database name
    #[arg(long, env = "DB_NAME", default_value = "users_db")]
    pub db_name: String,

    /// Full database URL (overrides the individual settings)
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    pub database_url: Option<String>,

    /// Maximum pooled connections
    #[arg(long, env = "DB_MAX_CONNECTIONS", default_value_t = DEFAULT_MAX_CONNECTIONS)]
    pub max_connections: u32,

    /// Seconds to wait for a free pooled connection
    #[arg(long, env = "DB_ACQUIRE_TIMEOUT", default_value_t = DEFAULT_ACQUIRE_TIMEOUT.as_secs())]
    pub db_acquire_timeout: u64,
}

impl From<DbArgs> for DbConfig {
    fn from(args: DbArgs) -> Self {
        Self {
            host: args.db_host,
            port: args.db_port,
            user: args.db_user,
            password: args.db_pass,
            database: args.db_name,
            url: args.database_url,
            max_connections: args.max_connections,
            acquire_timeout: Duration::from_secs(args.db_acquire_timeout),
        }
    }
}

/// External source settings
#[derive(Args, Debug, Clone)]
pub struct SourceArgs {
    /// Random-user API endpoint
    #[arg(long, env = "RANDOM_USER_URL", default_value = DEFAULT_SOURCE_URL)]
    pub source_url: String,
}
