use std::sync::Arc;

use crate::application::roster::{RosterError, RosterLock};
use crate::domain::repositories::PlayerRepository;
use crate::domain::services::{Roster, RosterStats};

/// Game-day check-in statistics use case
pub struct GetCheckInStats<P: PlayerRepository> {
    player_repo: Arc<P>,
    lock: Arc<RosterLock>,
}

impl<P: PlayerRepository> GetCheckInStats<P> {
    pub fn new(player_repo: Arc<P>, lock: Arc<RosterLock>) -> Self {
        Self { player_repo, lock }
    }

    pub async fn execute(&self) -> Result<RosterStats, RosterError> {
        let _guard = self.lock.read().await;
        Ok(Roster::classify(self.player_repo.find_all().await?).stats())
    }
}
