use crate::{errors::ApiError, AppState};
use axum::{extract::rejection::JsonRejection, extract::State, Json};
use roster_core::models::User;
use std::sync::Arc;

/// `POST /users`: assign the next id to the submitted user and echo it back.
pub async fn create_user(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<User>, JsonRejection>,
) -> Result<Json<User>, ApiError> {
    // Rejected bodies never reach the allocator.
    let Json(user) = payload?;

    let user = state.handler.create(user);
    tracing::info!(user_id = ?user.id, "created user");

    Ok(Json(user))
}
