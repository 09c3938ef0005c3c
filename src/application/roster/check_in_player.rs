use std::sync::Arc;

use crate::application::roster::{RosterError, RosterLock};
use crate::domain::entities::{Player, Standing};
use crate::domain::repositories::PlayerRepository;
use crate::domain::services::Roster;

/// Check-in input
pub struct CheckInPlayerInput {
    pub player_id: i64,
}

/// Check-in output
#[derive(Debug)]
pub struct CheckInPlayerOutput {
    pub player: Player,
    pub message: String,
}

/// Check-in use case. The only path that sets `checked_in`.
///
/// Checks run in order: player exists, standing is Confirmed, player has paid.
pub struct CheckInPlayer<P: PlayerRepository> {
    player_repo: Arc<P>,
    lock: Arc<RosterLock>,
}

impl<P: PlayerRepository> CheckInPlayer<P> {
    pub fn new(player_repo: Arc<P>, lock: Arc<RosterLock>) -> Self {
        Self { player_repo, lock }
    }

    pub async fn execute(
        &self,
        input: CheckInPlayerInput,
    ) -> Result<CheckInPlayerOutput, RosterError> {
        let _guard = self.lock.write().await;

        let roster = Roster::classify(self.player_repo.find_all().await?);
        let (player, standing) = roster.get(input.player_id).ok_or(RosterError::NotFound)?;

        match standing {
            Standing::Confirmed => {}
            Standing::Waitlisted { position } => {
                tracing::debug!("Check-in refused for {}: waitlisted #{}", player.name, position);
                return Err(RosterError::Ineligible(format!(
                    "on waitlist at position {}, cannot check in from waitlist",
                    position
                )));
            }
            Standing::Out => {
                tracing::debug!("Check-in refused for {}: RSVP'd OUT", player.name);
                return Err(RosterError::Ineligible("player is RSVP'd OUT".into()));
            }
        }

        if !player.paid {
            tracing::debug!("Check-in refused for {}: unpaid", player.name);
            return Err(RosterError::PaymentRequired);
        }

        let mut player = player.clone();
        if player.checked_in {
            return Ok(CheckInPlayerOutput {
                player,
                message: "Player is already checked in".to_string(),
            });
        }

        player.checked_in = true;
        self.player_repo.save(&player).await?;
        tracing::info!("{} (id {}) checked in", player.name, player.id);

        Ok(CheckInPlayerOutput {
            message: format!("Successfully checked in {}!", player.name),
            player,
        })
    }
}
