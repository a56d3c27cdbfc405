//! Custom Axum extractors

use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;

use super::error::ApiError;
use crate::models::ValidationError;

/// Extract a non-empty user uuid from the path, kept as sent
pub struct UserKey(pub String);

impl<S> FromRequestParts<S> for UserKey
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(uuid): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::Validation(ValidationError::Empty { field: "uuid" }))?;

        if uuid.is_empty() {
            return Err(ApiError::Validation(ValidationError::Empty { field: "uuid" }));
        }

        Ok(Self(uuid))
    }
}
