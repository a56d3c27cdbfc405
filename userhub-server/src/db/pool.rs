//! Database connection pool management
//!
//! Uses sqlx PgPool with an explicit connection limit. Callers block on
//! acquisition when every connection is checked out, up to the acquire
//! timeout.

use std::str::FromStr;
use std::time::Duration;

use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::PgPool;

/// Default maximum connections for the pool.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 10;

/// Default wait for a free connection before an operation fails.
pub const DEFAULT_ACQUIRE_TIMEOUT: Duration = Duration::from_secs(300);

/// Connection settings, either as discrete fields or a full URL.
#[derive(Debug, Clone)]
pub struct DbConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub database: String,
    /// Overrides the discrete fields when set
    pub url: Option<String>,
    pub max_connections: u32,
    /// How long a caller waits for a pooled connection
    pub acquire_timeout: Duration,
}

impl Default for DbConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 5432,
            user: "postgres".to_string(),
            password: String::new(),
            database: "users_db".to_string(),
            url: None,
            max_connections: DEFAULT_MAX_CONNECTIONS,
            acquire_timeout: DEFAULT_ACQUIRE_TIMEOUT,
        }
    }
}

impl DbConfig {
    /// Resolve into sqlx connect options.
    pub fn connect_options(&self) -> Result<PgConnectOptions, sqlx::Error> {
        if let Some(url) = &self.url {
            return PgConnectOptions::from_str(url);
        }

        let mut options = PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .database(&self.database);
        if !self.password.is_empty() {
            options = options.password(&self.password);
        }
        Ok(options)
    }

    /// Pool sizing: at most `max_connections`, callers queue for
    /// `acquire_timeout` when all are in use.
    pub fn pool_options(&self) -> PgPoolOptions {
        PgPoolOptions::new()
            .max_connections(self.max_connections.max(1))
            .acquire_timeout(self.acquire_timeout)
    }
}

/// Create a PostgreSQL connection pool.
///
/// # Errors
///
/// Returns an error if the settings are invalid or the connection fails.
/// Once built, an exhausted pool makes callers wait up to
/// [`DbConfig::acquire_timeout`] rather than failing immediately.
///
/// # Example
///
/// ```ignore
/// let pool = create_pool(&DbConfig::default()).await?;
/// ```
pub async fn create_pool(config: &DbConfig) -> Result<PgPool, sqlx::Error> {
    let options = config.connect_options()?;
    tracing::info!(
        host = options.get_host(),
        database = options.get_database().unwrap_or_default(),
        max_connections = config.max_connections,
        "connecting to database"
    );
    config.pool_options().connect_with(options).await
}
