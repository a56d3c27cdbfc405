//! Random-user source - paginated external API
//!
//! - `UserSource` trait so the importer can run against fakes
//! - `RandomUserClient` over reqwest for the real API
//! - `RawUser` keeps every field optional; absence is typed, not falsy

pub mod client;
pub mod raw;

use async_trait::async_trait;

pub use client::{RandomUserClient, DEFAULT_SOURCE_URL};
pub use raw::{RawLocation, RawLogin, RawName, RawUser};

/// Error reaching the external source
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("source returned HTTP {status} for page {page}")]
    Status { status: u16, page: u32 },
}

/// Paginated provider of raw user entries (testable)
#[async_trait]
pub trait UserSource: Send + Sync {
    /// Fetch page `page` (1-based) with up to `results` entries.
    ///
    /// `Ok(None)` means the body was missing or not the expected shape.
    async fn fetch_page(&self, page: u32, results: usize)
        -> Result<Option<Vec<RawUser>>, SourceError>;
}
