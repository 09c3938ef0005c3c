use std::sync::Arc;

use crate::application::roster::{RosterError, RosterLock};
use crate::domain::entities::{Player, Standing};
use crate::domain::repositories::PlayerRepository;
use crate::domain::services::Roster;

/// Undo check-in input
pub struct UndoCheckInInput {
    pub player_id: i64,
}

/// Undo check-in output
#[derive(Debug)]
pub struct UndoCheckInOutput {
    pub player: Player,
    pub standing: Standing,
    pub message: String,
}

/// Undo check-in use case (admin)
pub struct UndoCheckIn<P: PlayerRepository> {
    player_repo: Arc<P>,
    lock: Arc<RosterLock>,
}

impl<P: PlayerRepository> UndoCheckIn<P> {
    pub fn new(player_repo: Arc<P>, lock: Arc<RosterLock>) -> Self {
        Self { player_repo, lock }
    }

    pub async fn execute(&self, input: UndoCheckInInput) -> Result<UndoCheckInOutput, RosterError> {
        let _guard = self.lock.write().await;

        let roster = Roster::classify(self.player_repo.find_all().await?);
        let (player, standing) = roster.get(input.player_id).ok_or(RosterError::NotFound)?;

        let mut player = player.clone();
        if !player.checked_in {
            return Ok(UndoCheckInOutput {
                player,
                standing,
                message: "Player was not checked in".to_string(),
            });
        }

        player.checked_in = false;
        self.player_repo.save(&player).await?;
        tracing::info!("Check-in undone for {} (id {})", player.name, player.id);

        Ok(UndoCheckInOutput {
            message: format!("Check-in undone for {}", player.name),
            player,
            standing,
        })
    }
}
