use serde::{Deserialize, Serialize};

/// A player's current RSVP vote
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RsvpStatus {
    In,
    Out,
}

impl RsvpStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RsvpStatus::In => "IN",
            RsvpStatus::Out => "OUT",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "IN" => Some(RsvpStatus::In),
            "OUT" => Some(RsvpStatus::Out),
            _ => None,
        }
    }
}

/// Derived classification of a player. Never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Standing {
    Confirmed,
    /// 1-based rank beyond the capacity limit
    Waitlisted { position: u32 },
    Out,
}

impl Standing {
    pub fn as_str(&self) -> &'static str {
        match self {
            Standing::Confirmed => "Confirmed",
            Standing::Waitlisted { .. } => "Waitlisted",
            Standing::Out => "Out",
        }
    }

    pub fn waitlist_position(&self) -> Option<u32> {
        match self {
            Standing::Waitlisted { position } => Some(*position),
            _ => None,
        }
    }
}

/// Player entity - the only record the roster keeps
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: i64,
    pub name: String,
    pub status: RsvpStatus,
    /// Microseconds since the Unix epoch (UTC) of the latest RSVP
    pub rsvp_timestamp: i64,
    pub paid: bool,
    pub checked_in: bool,
}

impl Player {
    /// Rank key among IN players: earliest vote first, id breaks ties
    pub fn rank_key(&self) -> (i64, i64) {
        (self.rsvp_timestamp, self.id)
    }

    pub fn is_in(&self) -> bool {
        self.status == RsvpStatus::In
    }
}

/// A player that has not been stored yet
#[derive(Debug, Clone)]
pub struct NewPlayer {
    pub name: String,
    pub status: RsvpStatus,
    pub rsvp_timestamp: i64,
}

impl NewPlayer {
    pub fn new(name: String, status: RsvpStatus, rsvp_timestamp: i64) -> Self {
        Self {
            name,
            status,
            rsvp_timestamp,
        }
    }

    /// Attach the id assigned by the store. Flags start cleared.
    pub fn into_player(self, id: i64) -> Player {
        Player {
            id,
            name: self.name,
            status: self.status,
            rsvp_timestamp: self.rsvp_timestamp,
            paid: false,
            checked_in: false,
        }
    }
}

/// Render a stored microsecond timestamp as RFC 3339 UTC with microseconds.
/// None when the value is outside the representable date range.
pub fn format_timestamp(micros: i64) -> Option<String> {
    chrono::DateTime::from_timestamp_micros(micros)
        .map(|dt| dt.format("%Y-%m-%dT%H:%M:%S%.6fZ").to_string())
}

/// Parse a timestamp written by [`format_timestamp`]
pub fn parse_timestamp(s: &str) -> Option<i64> {
    chrono::DateTime::parse_from_rfc3339(s)
        .ok()
        .map(|dt| dt.with_timezone(&chrono::Utc).timestamp_micros())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timestamp_text_keeps_microseconds() {
        let text = format_timestamp(1_760_778_902_123_456).unwrap();
        assert_eq!(text, "2025-10-18T09:15:02.123456Z");
        assert_eq!(parse_timestamp(&text), Some(1_760_778_902_123_456));
    }

    #[test]
    fn test_out_of_range_timestamp_has_no_text() {
        assert_eq!(format_timestamp(i64::MAX), None);
        assert_eq!(format_timestamp(i64::MIN), None);
    }
}
