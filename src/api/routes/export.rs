use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
};

use crate::api::error::{api_error, roster_error, ApiError};
use crate::api::AppState;
use crate::application::roster::ListPlayers;
use crate::infrastructure::export::{export_filename, write_roster_csv};

/// GET /export/csv - Download every player as CSV
pub async fn export_csv(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, ApiError> {
    let use_case = ListPlayers::new(state.player_repo.clone(), state.roster_lock.clone());
    let roster = use_case.execute().await.map_err(roster_error)?;

    let csv_bytes = write_roster_csv(&roster).map_err(|e| {
        tracing::error!("CSV export failed: {}", e);
        api_error(StatusCode::INTERNAL_SERVER_ERROR, e.to_string(), "EXPORT_ERROR")
    })?;

    let filename = export_filename(chrono::Utc::now());
    tracing::info!("Exported {} players to {}", roster.len(), filename);

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename={}", filename),
            ),
        ],
        csv_bytes,
    ))
}
