//! User endpoints - import trigger, list, update

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    routing::{get, post, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::http::error::ApiError;
use crate::http::extractors::UserKey;
use crate::http::server::AppState;
use crate::import::Importer;
use crate::models::{UserRecord, UserUpdate, ValidationError};

/// Update user request; every field is checked by [`UserUpdate::new`]
#[derive(Debug, Default, Deserialize)]
pub struct UpdateUserRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
}

/// Confirmation response
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// POST /api/users/fetch - run one import
async fn fetch_users(State(state): State<Arc<AppState>>) -> Result<Json<MessageResponse>, ApiError> {
    let report = Importer::new(state.source.as_ref(), state.store.as_sink(), state.plan)
        .run()
        .await?;

    Ok(Json(MessageResponse {
        message: format!("Inserted or updated {} users", report.upserted),
    }))
}

/// GET /api/users - all users sorted by name
async fn list_users(State(state): State<Arc<AppState>>) -> Result<Json<Vec<UserRecord>>, ApiError> {
    let users = state
        .store
        .list()
        .await
        .map_err(ApiError::db("Database query failed"))?;
    Ok(Json(users))
}

/// PUT /api/users/{uuid} - overwrite name, email, city
async fn update_user(
    State(state): State<Arc<AppState>>,
    UserKey(uuid): UserKey,
    payload: Result<Json<UpdateUserRequest>, JsonRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Json(req) = payload.map_err(|e| {
        tracing::debug!(error = %e, "rejected update body");
        ApiError::Validation(ValidationError::MalformedBody)
    })?;
    let update = UserUpdate::new(req.name.as_deref(), req.email.as_deref(), req.city.as_deref())?;

    state
        .store
        .update(&uuid, &update)
        .await
        .map_err(ApiError::db("Update failed"))?;

    tracing::info!(uuid = %uuid, "user updated");
    Ok(Json(MessageResponse {
        message: "User updated successfully".to_string(),
    }))
}

/// User routes
///
/// `/api/users/fetch` is matched before `{uuid}`, so `PUT /api/users/fetch`
/// answers 405 rather than treating "fetch" as a uuid.
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/users", get(list_users))
        .route("/api/users/fetch", post(fetch_users))
        .route("/api/users/{uuid}", put(update_user))
}
