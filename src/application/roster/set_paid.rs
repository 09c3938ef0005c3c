use std::sync::Arc;

use crate::application::roster::{RosterError, RosterLock};
use crate::domain::entities::{Player, Standing};
use crate::domain::repositories::PlayerRepository;
use crate::domain::services::Roster;

/// Set paid input
pub struct SetPaidInput {
    pub player_id: i64,
    pub paid: bool,
}

/// Set paid output
#[derive(Debug)]
pub struct SetPaidOutput {
    pub player: Player,
    pub standing: Standing,
    pub message: String,
}

/// Set paid use case
///
/// Clearing `paid` leaves an existing check-in in place; the payment gate is
/// only enforced when checking in.
pub struct SetPaid<P: PlayerRepository> {
    player_repo: Arc<P>,
    lock: Arc<RosterLock>,
}

impl<P: PlayerRepository> SetPaid<P> {
    pub fn new(player_repo: Arc<P>, lock: Arc<RosterLock>) -> Self {
        Self { player_repo, lock }
    }

    pub async fn execute(&self, input: SetPaidInput) -> Result<SetPaidOutput, RosterError> {
        let _guard = self.lock.write().await;

        let roster = Roster::classify(self.player_repo.find_all().await?);
        let (player, standing) = roster.get(input.player_id).ok_or(RosterError::NotFound)?;

        let mut player = player.clone();
        player.paid = input.paid;
        self.player_repo.save(&player).await?;

        let label = if input.paid { "paid" } else { "unpaid" };
        tracing::info!("{} (id {}) marked as {}", player.name, player.id, label);

        Ok(SetPaidOutput {
            message: format!("{} marked as {}", player.name, label),
            player,
            standing,
        })
    }
}
