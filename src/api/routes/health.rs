use axum::Json;
use serde::Serialize;

#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
    version: String,
    uptime_seconds: u64,
}

#[derive(Serialize)]
pub struct RootResponse {
    status: String,
    message: String,
}

static START_TIME: std::sync::OnceLock<std::time::Instant> = std::sync::OnceLock::new();

/// Record the process start for uptime reporting
pub fn mark_started() {
    START_TIME.get_or_init(std::time::Instant::now);
}

pub async fn health_handler() -> Json<HealthResponse> {
    let start = START_TIME.get_or_init(std::time::Instant::now);
    let uptime = start.elapsed().as_secs();

    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: uptime,
    })
}

/// GET / - Liveness message for the frontend
pub async fn root_handler() -> Json<RootResponse> {
    Json(RootResponse {
        status: "healthy".to_string(),
        message: "Pickup Soccer RSVP System is running!".to_string(),
    })
}
