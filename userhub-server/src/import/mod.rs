//! Batched fetch-and-upsert import
//!
//! Pages through the random-user source, normalizes each page, and
//! upserts the accepted rows until the target is met or the source
//! runs dry.

pub mod importer;
pub mod normalize;

pub use importer::{ImportError, ImportPlan, ImportReport, Importer, UserSink, BATCH_SIZE, IMPORT_TARGET};
pub use normalize::normalize;
