use std::sync::Arc;

use crate::application::roster::{with_promotions, RosterError, RosterLock};
use crate::domain::entities::Player;
use crate::domain::repositories::PlayerRepository;
use crate::domain::services::Roster;

/// Remove player input
pub struct RemovePlayerInput {
    pub player_id: i64,
}

/// Remove player output
#[derive(Debug)]
pub struct RemovePlayerOutput {
    pub removed: Player,
    /// Players moved off the waitlist into the freed slot
    pub promoted: Vec<Player>,
    pub message: String,
}

/// Remove player use case (admin)
///
/// There is no separate promotion step: reclassifying the remaining players
/// advances the earliest waitlisted player into a freed confirmed slot.
pub struct RemovePlayer<P: PlayerRepository> {
    player_repo: Arc<P>,
    lock: Arc<RosterLock>,
}

impl<P: PlayerRepository> RemovePlayer<P> {
    pub fn new(player_repo: Arc<P>, lock: Arc<RosterLock>) -> Self {
        Self { player_repo, lock }
    }

    pub async fn execute(&self, input: RemovePlayerInput) -> Result<RemovePlayerOutput, RosterError> {
        let _guard = self.lock.write().await;

        let before = Roster::classify(self.player_repo.find_all().await?);
        let removed = before
            .get(input.player_id)
            .map(|(p, _)| p.clone())
            .ok_or(RosterError::NotFound)?;

        if !self.player_repo.delete(removed.id).await? {
            return Err(RosterError::NotFound);
        }

        let mut remaining = before.clone().into_players();
        remaining.retain(|p| p.id != removed.id);
        let after = Roster::classify(remaining);
        let promoted: Vec<Player> = after.promoted_since(&before).into_iter().cloned().collect();

        tracing::info!("Removed {} (id {})", removed.name, removed.id);
        for p in &promoted {
            tracing::info!("{} (id {}) promoted from waitlist", p.name, p.id);
        }

        Ok(RemovePlayerOutput {
            message: with_promotions(format!("Deleted {}", removed.name), &promoted),
            removed,
            promoted,
        })
    }
}
