//! API error types with IntoResponse
//!
//! Errors are converted to JSON responses with appropriate status codes.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::db::DbError;
use crate::import::ImportError;
use crate::models::ValidationError;

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Client input failed validation (400)
    Validation(ValidationError),

    /// Resource not found (404)
    NotFound { resource: &'static str, id: String },

    /// Storage failure (500, logged)
    Database { message: &'static str, source: DbError },

    /// Import run aborted (500, cause reported)
    Import(ImportError),
}

impl ApiError {
    /// Map a storage error, reporting `message` if it's a database failure.
    pub fn db(message: &'static str) -> impl FnOnce(DbError) -> Self {
        move |e| match e {
            DbError::NotFound { resource, id } => Self::NotFound { resource, id },
            source => Self::Database { message, source },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            Self::Validation(e) => {
                let error = match e {
                    ValidationError::Empty { field: "uuid" } => "UUID is required",
                    _ => "Name, email, and city are required",
                };
                (
                    StatusCode::BAD_REQUEST,
                    json!({
                        "error": error,
                        "details": e.to_string()
                    }),
                )
            }
            Self::NotFound { resource, id } => {
                tracing::debug!(resource, id = %id, "not found");
                (
                    StatusCode::NOT_FOUND,
                    json!({
                        "error": format!("{} not found", resource)
                    }),
                )
            }
            Self::Database { message, source } => {
                // Log the actual error, return the operation message
                tracing::error!("{}: {}", message, source);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({
                        "error": message
                    }),
                )
            }
            Self::Import(e) => {
                tracing::error!("Fetch failed: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({
                        "error": "Fetch failed",
                        "details": e.to_string()
                    }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

impl From<ImportError> for ApiError {
    fn from(e: ImportError) -> Self {
        Self::Import(e)
    }
}
