//! Validation error types

use std::fmt;

/// Validation error for client-supplied input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Field is empty when it shouldn't be
    Empty { field: &'static str },

    /// Request body is missing or not the expected JSON object
    MalformedBody,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{} cannot be empty", field),
            Self::MalformedBody => write!(f, "request body must be a JSON object"),
        }
    }
}

impl std::error::Error for ValidationError {}
