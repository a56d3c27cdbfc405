//! userhub-server: random-user import service
//!
//! Pulls synthetic user records from a paginated random-user API,
//! upserts them into Postgres keyed by uuid, and serves list/update
//! endpoints over the stored table.

pub mod db;
pub mod http;
pub mod import;
pub mod models;
pub mod source;

pub use db::{create_pool, ensure_schema, DbConfig, DbError, PgUserStore, UserRepo, UserStore};
pub use http::{build_router, run_server, ApiError, AppState, ServerConfig};
pub use import::{ImportError, ImportPlan, ImportReport, Importer, UserSink};
pub use models::{UserRecord, UserUpdate, ValidationError};
pub use source::{RandomUserClient, RawUser, SourceError, UserSource, DEFAULT_SOURCE_URL};
