use std::sync::Arc;

use crate::application::roster::{with_promotions, RosterError, RosterLock, MAX_NAME_LEN};
use crate::domain::entities::{NewPlayer, Player, RsvpStatus, Standing};
use crate::domain::repositories::PlayerRepository;
use crate::domain::services::{Roster, CAPACITY_LIMIT};

/// RSVP input
pub struct RsvpPlayerInput {
    pub name: String,
    /// Raw vote, must be `IN` or `OUT`
    pub status: String,
}

/// RSVP output
#[derive(Debug)]
pub struct RsvpPlayerOutput {
    pub player: Player,
    pub standing: Standing,
    pub message: String,
    /// Players moved off the waitlist by this vote
    pub promoted: Vec<Player>,
}

/// RSVP use case
///
/// Creates the player on first vote for a name, otherwise re-stamps the
/// existing record. A re-vote always moves the player to the back of the
/// current IN queue.
pub struct RsvpPlayer<P: PlayerRepository> {
    player_repo: Arc<P>,
    lock: Arc<RosterLock>,
}

impl<P: PlayerRepository> RsvpPlayer<P> {
    pub fn new(player_repo: Arc<P>, lock: Arc<RosterLock>) -> Self {
        Self { player_repo, lock }
    }

    pub async fn execute(&self, input: RsvpPlayerInput) -> Result<RsvpPlayerOutput, RosterError> {
        let name = validate_name(&input.name)?;
        let status = RsvpStatus::from_str(input.status.trim()).ok_or_else(|| {
            RosterError::Validation(format!(
                "Invalid status '{}', expected IN or OUT",
                input.status
            ))
        })?;

        let _guard = self.lock.write().await;

        let before = Roster::classify(self.player_repo.find_all().await?);
        let rsvp_timestamp = before.next_rsvp_timestamp(chrono::Utc::now().timestamp_micros());

        let player = match self.player_repo.find_by_name(&name).await? {
            Some(mut existing) => {
                existing.status = status;
                existing.rsvp_timestamp = rsvp_timestamp;
                self.player_repo.save(&existing).await?;
                existing
            }
            None => {
                self.player_repo
                    .insert(NewPlayer::new(name, status, rsvp_timestamp))
                    .await?
            }
        };

        let mut players = before.clone().into_players();
        players.retain(|p| p.id != player.id);
        players.push(player.clone());
        let after = Roster::classify(players);

        let standing = after
            .standing_of(player.id)
            .ok_or(RosterError::NotFound)?;
        let promoted: Vec<Player> = after.promoted_since(&before).into_iter().cloned().collect();

        let message = match standing {
            Standing::Confirmed => format!(
                "Confirmed IN! ({}/{} spots filled)",
                after.confirmed().len(),
                CAPACITY_LIMIT
            ),
            Standing::Waitlisted { position } => {
                format!("Added to waitlist at position {}", position)
            }
            Standing::Out => "Marked as OUT".to_string(),
        };
        let message = with_promotions(message, &promoted);

        tracing::info!(
            "RSVP {} for {} (id {}): {}",
            status.as_str(),
            player.name,
            player.id,
            standing.as_str()
        );
        for p in &promoted {
            tracing::info!("{} (id {}) promoted from waitlist", p.name, p.id);
        }

        Ok(RsvpPlayerOutput {
            player,
            standing,
            message,
            promoted,
        })
    }
}

/// Trim and check a requested player name
pub fn validate_name(raw: &str) -> Result<String, RosterError> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(RosterError::Validation("Player name is required".into()));
    }
    if name.chars().count() > MAX_NAME_LEN {
        return Err(RosterError::Validation(format!(
            "Player name must be at most {} characters",
            MAX_NAME_LEN
        )));
    }
    Ok(name.to_string())
}
