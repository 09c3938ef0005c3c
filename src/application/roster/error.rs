use crate::domain::repositories::RepositoryError;

/// Failures reported by roster operations. None are retried internally.
#[derive(Debug, thiserror::Error)]
pub enum RosterError {
    #[error("Validation error: {0}")]
    Validation(String),
    #[error("Player not found")]
    NotFound,
    #[error("Player must pay before checking in. Payment required!")]
    PaymentRequired,
    #[error("Player is not confirmed: {0}")]
    Ineligible(String),
    #[error("Storage error: {0}")]
    Storage(#[from] RepositoryError),
}
