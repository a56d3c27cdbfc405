//! Import loop
//!
//! Sequential page-fetch -> normalize -> upsert. Any source or storage
//! error aborts the run; batches committed before the failure stay.
//! A run always starts at page 1.

use async_trait::async_trait;

use super::normalize::normalize;
use crate::db::DbError;
use crate::models::UserRecord;
use crate::source::{SourceError, UserSource};

/// Total records one run tries to insert or refresh
pub const IMPORT_TARGET: usize = 1000;

/// Entries requested per page
pub const BATCH_SIZE: usize = 50;

/// Storage side of the import (testable)
#[async_trait]
pub trait UserSink: Send + Sync {
    /// Insert new uuids and overwrite name/email/city for existing ones,
    /// atomically for the whole batch.
    async fn upsert_batch(&self, rows: &[UserRecord]) -> Result<u64, DbError>;
}

/// Fixed sizing of an import run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportPlan {
    target: usize,
    batch_size: usize,
}

impl Default for ImportPlan {
    fn default() -> Self {
        Self {
            target: IMPORT_TARGET,
            batch_size: BATCH_SIZE,
        }
    }
}

impl ImportPlan {
    #[cfg(test)]
    pub(crate) fn with_limits(target: usize, batch_size: usize) -> Self {
        Self {
            target,
            batch_size: batch_size.max(1),
        }
    }

    pub fn target(&self) -> usize {
        self.target
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size
    }
}

/// Outcome of a completed run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportReport {
    /// Accepted records sent to storage, counted per normalized batch
    pub upserted: usize,
    pub pages_fetched: u32,
}

/// Import failure with the underlying cause
#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("source error: {0}")]
    Source(#[from] SourceError),

    #[error("storage error: {0}")]
    Storage(#[from] DbError),
}

/// Drives one import run
pub struct Importer<'a> {
    source: &'a dyn UserSource,
    sink: &'a dyn UserSink,
    plan: ImportPlan,
}

impl<'a> Importer<'a> {
    pub fn new(source: &'a dyn UserSource, sink: &'a dyn UserSink, plan: ImportPlan) -> Self {
        Self { source, sink, plan }
    }

    pub async fn run(&self) -> Result<ImportReport, ImportError> {
        let mut inserted = 0usize;
        let mut page = 1u32;
        let mut pages_fetched = 0u32;

        while inserted < self.plan.target {
            let take = self.plan.batch_size.min(self.plan.target - inserted);

            let entries = self.source.fetch_page(page, take).await?;
            pages_fetched += 1;

            let entries = match entries {
                Some(entries) if !entries.is_empty() => entries,
                Some(_) => {
                    tracing::info!(page, "source returned no results, stopping");
                    break;
                }
                None => {
                    tracing::info!(page, "source returned no usable body, stopping");
                    break;
                }
            };

            let rows: Vec<UserRecord> = entries.iter().filter_map(normalize).collect();
            tracing::debug!(
                page,
                requested = take,
                accepted = rows.len(),
                rejected = entries.len() - rows.len(),
                "page normalized"
            );

            if rows.is_empty() {
                tracing::info!(page, "no complete records on page, stopping");
                break;
            }

            self.sink.upsert_batch(&rows).await?;

            inserted += rows.len();
            page += 1;
        }

        tracing::info!(upserted = inserted, pages = pages_fetched, "import finished");

        Ok(ImportReport {
            upserted: inserted,
            pages_fetched,
        })
    }
}
