use std::sync::Arc;

use axum::{
    extract::{Path, State},
    response::Json,
};

use crate::api::dto::{MessageResponse, PlayerResponse};
use crate::api::error::{roster_error, ApiError};
use crate::api::AppState;
use crate::application::roster::{
    CheckInPlayer, CheckInPlayerInput, GetCheckInStats, UndoCheckIn, UndoCheckInInput,
};
use crate::domain::entities::Standing;
use crate::domain::services::RosterStats;

/// PUT /players/:playerId/checkin - Game-day check-in (confirmed and paid only)
pub async fn check_in_player(
    State(state): State<Arc<AppState>>,
    Path(player_id): Path<i64>,
) -> Result<Json<MessageResponse>, ApiError> {
    let use_case = CheckInPlayer::new(state.player_repo.clone(), state.roster_lock.clone());
    let result = use_case
        .execute(CheckInPlayerInput { player_id })
        .await
        .map_err(roster_error)?;

    // Check-in only succeeds for confirmed players
    Ok(Json(MessageResponse::with_player(
        result.message,
        PlayerResponse::new(&result.player, Standing::Confirmed),
    )))
}

/// PUT /players/:playerId/undo-checkin - Clear a check-in (admin)
pub async fn undo_check_in(
    State(state): State<Arc<AppState>>,
    Path(player_id): Path<i64>,
) -> Result<Json<MessageResponse>, ApiError> {
    let use_case = UndoCheckIn::new(state.player_repo.clone(), state.roster_lock.clone());
    let result = use_case
        .execute(UndoCheckInInput { player_id })
        .await
        .map_err(roster_error)?;

    Ok(Json(MessageResponse::with_player(
        result.message,
        PlayerResponse::new(&result.player, result.standing),
    )))
}

/// GET /checkin/stats
pub async fn get_check_in_stats(
    State(state): State<Arc<AppState>>,
) -> Result<Json<RosterStats>, ApiError> {
    let use_case = GetCheckInStats::new(state.player_repo.clone(), state.roster_lock.clone());
    let stats = use_case.execute().await.map_err(roster_error)?;

    Ok(Json(stats))
}
