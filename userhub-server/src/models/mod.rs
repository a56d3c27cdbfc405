//! Domain models with validation at construction
//!
//! Client input is validated when building these types.
//! Invalid input returns ValidationError, not panic.

pub mod user;
pub mod validation;

pub use user::{UserRecord, UserUpdate};
pub use validation::ValidationError;
