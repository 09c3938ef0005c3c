use std::sync::Arc;

use crate::application::roster::{RosterError, RosterLock};
use crate::domain::repositories::PlayerRepository;

/// Reset output
#[derive(Debug)]
pub struct ResetRosterOutput {
    pub removed: u64,
    pub message: String,
}

/// Reset use case (admin): deletes every player. Idempotent.
pub struct ResetRoster<P: PlayerRepository> {
    player_repo: Arc<P>,
    lock: Arc<RosterLock>,
}

impl<P: PlayerRepository> ResetRoster<P> {
    pub fn new(player_repo: Arc<P>, lock: Arc<RosterLock>) -> Self {
        Self { player_repo, lock }
    }

    pub async fn execute(&self) -> Result<ResetRosterOutput, RosterError> {
        let _guard = self.lock.write().await;

        let removed = self.player_repo.delete_all().await?;
        tracing::warn!("Roster reset, {} players removed", removed);

        Ok(ResetRosterOutput {
            removed,
            message: "All player data has been reset".to_string(),
        })
    }
}
