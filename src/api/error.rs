use axum::{extract::rejection::JsonRejection, http::StatusCode, response::Json};
use serde::Serialize;

use crate::application::roster::RosterError;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

pub type ApiError = (StatusCode, Json<ErrorResponse>);

pub fn api_error(status: StatusCode, error: impl Into<String>, code: &str) -> ApiError {
    (
        status,
        Json(ErrorResponse {
            error: error.into(),
            code: code.to_string(),
            details: None,
        }),
    )
}

/// Malformed or mistyped request bodies are validation failures too
pub fn json_rejection(rejection: JsonRejection) -> ApiError {
    api_error(
        StatusCode::BAD_REQUEST,
        rejection.body_text(),
        "VALIDATION_ERROR",
    )
}

/// Map a roster failure to its HTTP status and error code
pub fn roster_error(e: RosterError) -> ApiError {
    match e {
        RosterError::Validation(msg) => api_error(StatusCode::BAD_REQUEST, msg, "VALIDATION_ERROR"),
        RosterError::NotFound => {
            api_error(StatusCode::NOT_FOUND, "Player not found", "PLAYER_NOT_FOUND")
        }
        RosterError::PaymentRequired => api_error(
            StatusCode::PAYMENT_REQUIRED,
            e.to_string(),
            "PAYMENT_REQUIRED",
        ),
        RosterError::Ineligible(_) => {
            api_error(StatusCode::CONFLICT, e.to_string(), "NOT_CONFIRMED")
        }
        RosterError::Storage(inner) => {
            tracing::error!("Storage failure: {}", inner);
            api_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Storage unavailable",
                "STORAGE_ERROR",
            )
        }
    }
}
