use std::sync::Arc;

use crate::application::roster::{RosterError, RosterLock};
use crate::domain::entities::{Player, Standing};
use crate::domain::repositories::PlayerRepository;
use crate::domain::services::Roster;

/// Get player output
#[derive(Debug)]
pub struct GetPlayerOutput {
    pub player: Player,
    pub standing: Standing,
}

/// Get player use case
pub struct GetPlayer<P: PlayerRepository> {
    player_repo: Arc<P>,
    lock: Arc<RosterLock>,
}

impl<P: PlayerRepository> GetPlayer<P> {
    pub fn new(player_repo: Arc<P>, lock: Arc<RosterLock>) -> Self {
        Self { player_repo, lock }
    }

    pub async fn execute(&self, player_id: i64) -> Result<GetPlayerOutput, RosterError> {
        let _guard = self.lock.read().await;

        // Standing depends on every other player, so classify the whole set
        let roster = Roster::classify(self.player_repo.find_all().await?);
        let (player, standing) = roster.get(player_id).ok_or(RosterError::NotFound)?;

        Ok(GetPlayerOutput {
            player: player.clone(),
            standing,
        })
    }
}
