use async_trait::async_trait;

use crate::domain::entities::{NewPlayer, Player};

/// Error type for repository operations
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Database error: {0}")]
    Database(String),
}

/// Player repository trait
///
/// Implementations only store records. Confirmed/waitlisted standing is
/// always recomputed by the caller from `status` and `rsvp_timestamp`.
#[async_trait]
pub trait PlayerRepository: Send + Sync {
    /// Load every player in one query (a consistent snapshot)
    async fn find_all(&self) -> Result<Vec<Player>, RepositoryError>;

    /// Find player by exact name. Lowest id wins when names repeat.
    async fn find_by_name(&self, name: &str) -> Result<Option<Player>, RepositoryError>;

    /// Insert a new player and return it with its assigned id
    async fn insert(&self, player: NewPlayer) -> Result<Player, RepositoryError>;

    /// Update an existing player
    async fn save(&self, player: &Player) -> Result<(), RepositoryError>;

    /// Delete a player. Returns false when no row matched.
    async fn delete(&self, id: i64) -> Result<bool, RepositoryError>;

    /// Delete every player, returning how many were removed
    async fn delete_all(&self) -> Result<u64, RepositoryError>;
}
