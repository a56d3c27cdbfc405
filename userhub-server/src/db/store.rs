//! Storage seam for the HTTP layer
//!
//! Handlers talk to a `UserStore`; the Postgres implementation wraps the
//! pool and opens a `UserRepo` per call.

use async_trait::async_trait;
use sqlx::PgPool;

use super::repos::{DbError, UserRepo};
use crate::import::UserSink;
use crate::models::{UserRecord, UserUpdate};

/// List/update access plus the import sink (testable)
#[async_trait]
pub trait UserStore: UserSink {
    /// All users, ordered by name ascending.
    async fn list(&self) -> Result<Vec<UserRecord>, DbError>;

    /// Overwrite an existing user; `DbError::NotFound` when no row matches.
    async fn update(&self, uuid: &str, update: &UserUpdate) -> Result<(), DbError>;

    /// This store as the importer's sink
    fn as_sink(&self) -> &dyn UserSink;
}

/// Postgres-backed store
#[derive(Debug, Clone)]
pub struct PgUserStore {
    pool: PgPool,
}

impl PgUserStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserSink for PgUserStore {
    async fn upsert_batch(&self, rows: &[UserRecord]) -> Result<u64, DbError> {
        UserRepo::new(&self.pool).upsert_batch(rows).await
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn list(&self) -> Result<Vec<UserRecord>, DbError> {
        UserRepo::new(&self.pool).list().await
    }

    async fn update(&self, uuid: &str, update: &UserUpdate) -> Result<(), DbError> {
        UserRepo::new(&self.pool).update(uuid, update).await
    }

    fn as_sink(&self) -> &dyn UserSink {
        self
    }
}
