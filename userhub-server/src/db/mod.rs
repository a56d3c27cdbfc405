//! Database layer - connection pool, schema, and repositories
//!
//! # Design Principles
//!
//! - Bounded connection pool passed explicitly; no global handle
//! - Rely on the primary key and ON CONFLICT, no check-then-insert
//! - Transactions for multi-statement writes

pub mod pool;
pub mod repos;
pub mod schema;
pub mod store;

pub use pool::{create_pool, DbConfig};
pub use repos::{DbError, UserRepo};
pub use schema::ensure_schema;
pub use store::{PgUserStore, UserStore};
