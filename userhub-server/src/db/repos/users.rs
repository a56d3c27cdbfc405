//! User repository
//!
//! - list: single SELECT ordered by name
//! - upsert_batch: INSERT ... ON CONFLICT in one transaction
//! - update: UPDATE by uuid, zero rows is NotFound

use std::collections::HashMap;

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};

use crate::import::UserSink;
use crate::models::{UserRecord, UserUpdate};

/// Rows per INSERT statement; keeps bind parameters well under the
/// Postgres limit of 65535.
const MAX_ROWS_PER_STATEMENT: usize = 1000;

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },
}

/// User repository
pub struct UserRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> UserRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// All users, ordered by name ascending.
    pub async fn list(&self) -> Result<Vec<UserRecord>, DbError> {
        let users = sqlx::query_as::<_, UserRecord>(
            "SELECT uuid, name, email, city FROM users ORDER BY name ASC",
        )
        .fetch_all(self.pool)
        .await?;
        Ok(users)
    }

    /// Insert new uuids and overwrite name/email/city for existing ones.
    ///
    /// The whole batch commits or none of it does. A uuid repeated inside
    /// the batch keeps its last occurrence. Returns rows written.
    pub async fn upsert_batch(&self, rows: &[UserRecord]) -> Result<u64, DbError> {
        let rows = last_wins(rows);
        if rows.is_empty() {
            return Ok(0);
        }

        let mut tx = self.pool.begin().await?;
        let mut written = 0;

        for chunk in rows.chunks(MAX_ROWS_PER_STATEMENT) {
            let mut builder =
                QueryBuilder::<Postgres>::new("INSERT INTO users (uuid, name, email, city) ");
            builder.push_values(chunk.iter().copied(), |mut b, row| {
                b.push_bind(row.uuid.as_str())
                    .push_bind(row.name.as_str())
                    .push_bind(row.email.as_str())
                    .push_bind(row.city.as_str());
            });
            builder.push(
                " ON CONFLICT (uuid) DO UPDATE SET \
                 name = EXCLUDED.name, email = EXCLUDED.email, city = EXCLUDED.city",
            );

            written += builder.build().execute(&mut *tx).await?.rows_affected();
        }

        tx.commit().await?;
        Ok(written)
    }

    /// Overwrite name/email/city of an existing user.
    pub async fn update(&self, uuid: &str, update: &UserUpdate) -> Result<(), DbError> {
        let result = sqlx::query("UPDATE users SET name = $1, email = $2, city = $3 WHERE uuid = $4")
            .bind(update.name())
            .bind(update.email())
            .bind(update.city())
            .bind(uuid)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotFound {
                resource: "User",
                id: uuid.to_owned(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl UserSink for UserRepo<'_> {
    async fn upsert_batch(&self, rows: &[UserRecord]) -> Result<u64, DbError> {
        UserRepo::upsert_batch(self, rows).await
    }
}

/// Drop earlier duplicates of a uuid, keeping first-seen order of the survivors.
fn last_wins(rows: &[UserRecord]) -> Vec<&UserRecord> {
    let last: HashMap<&str, usize> = rows
        .iter()
        .enumerate()
        .map(|(i, row)| (row.uuid.as_str(), i))
        .collect();

    rows.iter()
        .enumerate()
        .filter(|(i, row)| last.get(row.uuid.as_str()) == Some(i))
        .map(|(_, row)| row)
        .collect()
}
