//! Roster manager: one use case per roster operation.
//!
//! Mutating use cases hold the [`RosterLock`] write guard for their whole
//! read, classify, write cycle. Queries hold the read guard while taking
//! their snapshot.

mod check_in_player;
mod error;
mod get_check_in_stats;
mod get_player;
mod list_players;
mod lock;
mod remove_player;
mod reset_roster;
mod rsvp_player;
mod set_paid;
mod undo_check_in;

pub use check_in_player::*;
pub use error::*;
pub use get_check_in_stats::*;
pub use get_player::*;
pub use list_players::*;
pub use lock::*;
pub use remove_player::*;
pub use reset_roster::*;
pub use rsvp_player::*;
pub use set_paid::*;
pub use undo_check_in::*;

use crate::domain::entities::Player;

/// Longest accepted player name, in characters
pub const MAX_NAME_LEN: usize = 100;

/// Append one "promoted from waitlist" note per promoted player
fn with_promotions(mut message: String, promoted: &[Player]) -> String {
    for player in promoted {
        message.push_str(&format!(". {} promoted from waitlist!", player.name));
    }
    message
}
