//! Admin routes

use std::sync::Arc;

use axum::{extract::State, response::Json};

use crate::api::dto::MessageResponse;
use crate::api::error::{roster_error, ApiError};
use crate::api::AppState;
use crate::application::roster::ResetRoster;

/// POST /admin/reset - Delete every player
pub async fn reset_roster(
    State(state): State<Arc<AppState>>,
) -> Result<Json<MessageResponse>, ApiError> {
    let use_case = ResetRoster::new(state.player_repo.clone(), state.roster_lock.clone());
    let result = use_case.execute().await.map_err(roster_error)?;

    Ok(Json(MessageResponse::message(result.message)))
}
