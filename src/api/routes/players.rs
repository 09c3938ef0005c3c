use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    response::Json,
};

use crate::api::dto::{MessageResponse, PaymentRequest, PlayerListResponse, PlayerResponse, RsvpRequest};
use crate::api::error::{json_rejection, roster_error, ApiError};
use crate::api::AppState;
use crate::application::roster::{
    GetPlayer, ListPlayers, RemovePlayer, RemovePlayerInput, RsvpPlayer, RsvpPlayerInput, SetPaid,
    SetPaidInput,
};

// ============================================================================
// Route Handlers
// ============================================================================

/// GET /players - Confirmed, waitlist and out views with counts
pub async fn list_players(
    State(state): State<Arc<AppState>>,
) -> Result<Json<PlayerListResponse>, ApiError> {
    let use_case = ListPlayers::new(state.player_repo.clone(), state.roster_lock.clone());
    let roster = use_case.execute().await.map_err(roster_error)?;

    Ok(Json(PlayerListResponse::from(&roster)))
}

/// GET /players/:playerId - Single player
pub async fn get_player(
    State(state): State<Arc<AppState>>,
    Path(player_id): Path<i64>,
) -> Result<Json<PlayerResponse>, ApiError> {
    let use_case = GetPlayer::new(state.player_repo.clone(), state.roster_lock.clone());
    let result = use_case.execute(player_id).await.map_err(roster_error)?;

    Ok(Json(PlayerResponse::new(&result.player, result.standing)))
}

/// POST /players/rsvp - Vote IN or OUT
pub async fn rsvp_player(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<RsvpRequest>, JsonRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Json(body) = payload.map_err(json_rejection)?;
    let use_case = RsvpPlayer::new(state.player_repo.clone(), state.roster_lock.clone());
    let result = use_case
        .execute(RsvpPlayerInput {
            name: body.name,
            status: body.status,
        })
        .await
        .map_err(roster_error)?;

    Ok(Json(MessageResponse::with_player(
        result.message,
        PlayerResponse::new(&result.player, result.standing),
    )))
}

/// PUT /players/:playerId/pay - Mark paid or unpaid
pub async fn set_paid(
    State(state): State<Arc<AppState>>,
    Path(player_id): Path<i64>,
    payload: Result<Json<PaymentRequest>, JsonRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Json(body) = payload.map_err(json_rejection)?;
    let use_case = SetPaid::new(state.player_repo.clone(), state.roster_lock.clone());
    let result = use_case
        .execute(SetPaidInput {
            player_id,
            paid: body.paid,
        })
        .await
        .map_err(roster_error)?;

    Ok(Json(MessageResponse::with_player(
        result.message,
        PlayerResponse::new(&result.player, result.standing),
    )))
}

/// DELETE /players/:playerId - Remove a player (admin)
pub async fn remove_player(
    State(state): State<Arc<AppState>>,
    Path(player_id): Path<i64>,
) -> Result<Json<MessageResponse>, ApiError> {
    let use_case = RemovePlayer::new(state.player_repo.clone(), state.roster_lock.clone());
    let result = use_case
        .execute(RemovePlayerInput { player_id })
        .await
        .map_err(roster_error)?;

    Ok(Json(MessageResponse::message(result.message)))
}
