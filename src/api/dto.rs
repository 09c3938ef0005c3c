//! Wire shapes shared by the route handlers

use serde::{Deserialize, Serialize};

use crate::domain::entities::{format_timestamp, Player, Standing};
use crate::domain::services::Roster;

// ============================================================================
// Requests
// ============================================================================

/// Missing fields deserialize as empty so they surface as validation errors
#[derive(Debug, Deserialize)]
pub struct RsvpRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub status: String,
}

#[derive(Debug, Deserialize)]
pub struct PaymentRequest {
    pub paid: bool,
}

// ============================================================================
// Responses
// ============================================================================

#[derive(Debug, Serialize)]
pub struct PlayerResponse {
    pub id: i64,
    pub name: String,
    pub status: String,
    pub rsvp_timestamp: String,
    pub paid: bool,
    pub checked_in: bool,
    /// Present only while waitlisted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub waitlist_position: Option<u32>,
}

impl PlayerResponse {
    pub fn new(player: &Player, standing: Standing) -> Self {
        Self {
            id: player.id,
            name: player.name.clone(),
            status: player.status.as_str().to_string(),
            rsvp_timestamp: format_timestamp(player.rsvp_timestamp).unwrap_or_else(|| {
                tracing::warn!(
                    "Player {} has out-of-range rsvp_timestamp {}",
                    player.id,
                    player.rsvp_timestamp
                );
                player.rsvp_timestamp.to_string()
            }),
            paid: player.paid,
            checked_in: player.checked_in,
            waitlist_position: standing.waitlist_position(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PlayerListResponse {
    pub confirmed: Vec<PlayerResponse>,
    pub waitlist: Vec<PlayerResponse>,
    pub out: Vec<PlayerResponse>,
    pub total_confirmed: usize,
    pub total_waitlist: usize,
    pub spots_available: usize,
}

impl From<&Roster> for PlayerListResponse {
    fn from(roster: &Roster) -> Self {
        let mut confirmed = Vec::with_capacity(roster.confirmed().len());
        let mut waitlist = Vec::with_capacity(roster.waitlist().len());
        let mut out = Vec::with_capacity(roster.out().len());

        for (player, standing) in roster.entries() {
            let response = PlayerResponse::new(player, standing);
            match standing {
                Standing::Confirmed => confirmed.push(response),
                Standing::Waitlisted { .. } => waitlist.push(response),
                Standing::Out => out.push(response),
            }
        }

        Self {
            total_confirmed: confirmed.len(),
            total_waitlist: waitlist.len(),
            spots_available: roster.spots_available(),
            confirmed,
            waitlist,
            out,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub player: Option<PlayerResponse>,
}

impl MessageResponse {
    pub fn with_player(message: String, player: PlayerResponse) -> Self {
        Self {
            success: true,
            message,
            player: Some(player),
        }
    }

    pub fn message(message: String) -> Self {
        Self {
            success: true,
            message,
            player: None,
        }
    }
}
