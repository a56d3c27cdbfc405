//! Table bootstrap

use sqlx::PgPool;

const CREATE_USERS: &str = r#"
    CREATE TABLE IF NOT EXISTS users (
        uuid VARCHAR(100) PRIMARY KEY,
        name VARCHAR(255) NOT NULL,
        email VARCHAR(255) NOT NULL,
        city VARCHAR(255) NOT NULL
    )
"#;

/// Create the `users` table if it doesn't exist.
pub async fn ensure_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query(CREATE_USERS).execute(pool).await?;
    tracing::info!("users table ready");
    Ok(())
}
