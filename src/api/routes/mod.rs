pub mod admin;
pub mod checkin;
pub mod export;
pub mod health;
pub mod players;

use std::sync::Arc;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::api::AppState;

/// Create the roster API router
pub fn create_api_router(state: Arc<AppState>) -> Router<Arc<AppState>> {
    Router::new()
        .nest("/players", create_players_router(state.clone()))
        .nest("/checkin", create_checkin_router(state.clone()))
        .nest("/export", create_export_router(state.clone()))
        .nest("/admin", create_admin_router(state.clone()))
        .with_state(state)
}

/// Create players router
fn create_players_router(state: Arc<AppState>) -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(players::list_players))
        .route("/rsvp", post(players::rsvp_player))
        .route(
            "/:playerId",
            get(players::get_player).delete(players::remove_player),
        )
        .route("/:playerId/pay", put(players::set_paid))
        .route("/:playerId/checkin", put(checkin::check_in_player))
        .route("/:playerId/undo-checkin", put(checkin::undo_check_in))
        .with_state(state)
}

/// Create check-in router
fn create_checkin_router(state: Arc<AppState>) -> Router<Arc<AppState>> {
    Router::new()
        .route("/stats", get(checkin::get_check_in_stats))
        .with_state(state)
}

/// Create export router
fn create_export_router(state: Arc<AppState>) -> Router<Arc<AppState>> {
    Router::new()
        .route("/csv", get(export::export_csv))
        .with_state(state)
}

/// Create admin router
fn create_admin_router(state: Arc<AppState>) -> Router<Arc<AppState>> {
    Router::new()
        .route("/reset", post(admin::reset_roster))
        .with_state(state)
}
