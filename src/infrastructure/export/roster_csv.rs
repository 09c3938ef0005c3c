//! CSV projection of the roster.
//!
//! One row per player, confirmed first (by rank), then the waitlist (by rank),
//! then players who are out. The output reads back into equivalent records
//! through [`read_roster_csv`].

use std::io::Read;

use serde::{Deserialize, Serialize};

use crate::domain::entities::{format_timestamp, parse_timestamp, Player, RsvpStatus, Standing};
use crate::domain::services::Roster;

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Failed to flush CSV output: {0}")]
    Flush(String),
    #[error("Invalid timestamp '{0}'")]
    InvalidTimestamp(String),
    #[error("Invalid standing '{0}'")]
    InvalidStanding(String),
}

/// Wire row. Field order is the column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct RosterCsvRow {
    id: i64,
    name: String,
    status: RsvpStatus,
    rsvp_timestamp: String,
    paid: bool,
    checked_in: bool,
    standing: String,
    waitlist_position: Option<u32>,
}

impl RosterCsvRow {
    fn from_entry(player: &Player, standing: Standing) -> Result<Self, ExportError> {
        let rsvp_timestamp = format_timestamp(player.rsvp_timestamp)
            .ok_or_else(|| ExportError::InvalidTimestamp(player.rsvp_timestamp.to_string()))?;

        Ok(Self {
            id: player.id,
            name: player.name.clone(),
            status: player.status,
            rsvp_timestamp,
            paid: player.paid,
            checked_in: player.checked_in,
            standing: standing.as_str().to_string(),
            waitlist_position: standing.waitlist_position(),
        })
    }

    fn into_exported(self) -> Result<ExportedPlayer, ExportError> {
        let rsvp_timestamp = parse_timestamp(&self.rsvp_timestamp)
            .ok_or_else(|| ExportError::InvalidTimestamp(self.rsvp_timestamp.clone()))?;

        let standing = match (self.standing.as_str(), self.waitlist_position) {
            ("Confirmed", None) => Standing::Confirmed,
            ("Waitlisted", Some(position)) if position > 0 => Standing::Waitlisted { position },
            ("Out", None) => Standing::Out,
            _ => return Err(ExportError::InvalidStanding(self.standing)),
        };

        Ok(ExportedPlayer {
            player: Player {
                id: self.id,
                name: self.name,
                status: self.status,
                rsvp_timestamp,
                paid: self.paid,
                checked_in: self.checked_in,
            },
            standing,
        })
    }
}

/// A player read back from an export, with the standing it had at export time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedPlayer {
    pub player: Player,
    pub standing: Standing,
}

/// Serialize a roster snapshot to CSV bytes
pub fn write_roster_csv(roster: &Roster) -> Result<Vec<u8>, ExportError> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    // Header row even when the roster is empty
    if roster.is_empty() {
        writer.write_record([
            "id",
            "name",
            "status",
            "rsvp_timestamp",
            "paid",
            "checked_in",
            "standing",
            "waitlist_position",
        ])?;
    }

    for (player, standing) in roster.entries() {
        writer.serialize(RosterCsvRow::from_entry(player, standing)?)?;
    }

    writer
        .into_inner()
        .map_err(|e| ExportError::Flush(e.to_string()))
}

/// Parse CSV produced by [`write_roster_csv`]
pub fn read_roster_csv<R: Read>(reader: R) -> Result<Vec<ExportedPlayer>, ExportError> {
    let mut reader = csv::Reader::from_reader(reader);
    reader
        .deserialize::<RosterCsvRow>()
        .map(|row| row?.into_exported())
        .collect()
}

/// Download name, e.g. `rsvp_export_20261018_091502.csv`
pub fn export_filename(now: chrono::DateTime<chrono::Utc>) -> String {
    format!("rsvp_export_{}.csv", now.format("%Y%m%d_%H%M%S"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn player(id: i64, name: &str, status: RsvpStatus, ts: i64) -> Player {
        Player {
            id,
            name: name.to_string(),
            status,
            rsvp_timestamp: ts,
            paid: false,
            checked_in: false,
        }
    }

    #[test]
    fn test_rows_follow_standing_order() {
        let players = vec![
            player(1, "Out Olly", RsvpStatus::Out, 1_700_000_000_000_000),
            player(2, "Wait, Will", RsvpStatus::In, 1_700_000_000_000_300),
            player(3, "Conf Cam", RsvpStatus::In, 1_700_000_000_000_100),
        ];
        let roster = Roster::classify_with_capacity(players, 1);

        let bytes = write_roster_csv(&roster).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(
            lines[0],
            "id,name,status,rsvp_timestamp,paid,checked_in,standing,waitlist_position"
        );
        assert_eq!(
            lines[1],
            "3,Conf Cam,IN,2023-11-14T22:13:20.000100Z,false,false,Confirmed,"
        );
        assert_eq!(
            lines[2],
            "2,\"Wait, Will\",IN,2023-11-14T22:13:20.000300Z,false,false,Waitlisted,1"
        );
        assert_eq!(
            lines[3],
            "1,Out Olly,OUT,2023-11-14T22:13:20.000000Z,false,false,Out,"
        );
    }

    #[test]
    fn test_export_reads_back() {
        let mut paid = player(1, "Ana", RsvpStatus::In, 1_760_000_000_123_456);
        paid.paid = true;
        paid.checked_in = true;
        let players = vec![
            paid,
            player(2, "Ben", RsvpStatus::In, 1_760_000_000_200_000),
            player(3, "Cy", RsvpStatus::Out, 1_760_000_000_300_000),
        ];
        let roster = Roster::classify_with_capacity(players.clone(), 1);

        let bytes = write_roster_csv(&roster).unwrap();
        let parsed = read_roster_csv(bytes.as_slice()).unwrap();

        assert_eq!(parsed.len(), 3);
        assert_eq!(parsed[0].player, players[0]);
        assert_eq!(parsed[0].standing, Standing::Confirmed);
        assert_eq!(parsed[1].player, players[1]);
        assert_eq!(parsed[1].standing, Standing::Waitlisted { position: 1 });
        assert_eq!(parsed[2].player, players[2]);
        assert_eq!(parsed[2].standing, Standing::Out);
    }

    #[test]
    fn test_empty_roster_has_header_only() {
        let bytes = write_roster_csv(&Roster::classify(Vec::new())).unwrap();
        let text = String::from_utf8(bytes).unwrap();

        assert_eq!(text.lines().count(), 1);
        assert!(read_roster_csv(text.as_bytes()).unwrap().is_empty());
    }

    #[test]
    fn test_rejects_inconsistent_standing() {
        let csv = "id,name,status,rsvp_timestamp,paid,checked_in,standing,waitlist_position\n\
                   1,Ana,IN,2026-10-18T09:15:02.000000Z,false,false,Waitlisted,\n";

        assert!(matches!(
            read_roster_csv(csv.as_bytes()),
            Err(ExportError::InvalidStanding(_))
        ));
    }

    #[test]
    fn test_out_of_range_timestamp_fails_export() {
        let roster = Roster::classify(vec![player(1, "Ana", RsvpStatus::In, i64::MAX)]);

        assert!(matches!(
            write_roster_csv(&roster),
            Err(ExportError::InvalidTimestamp(_))
        ));
    }

    #[test]
    fn test_export_filename() {
        let now = chrono::Utc.with_ymd_and_hms(2026, 10, 18, 9, 15, 2).unwrap();
        assert_eq!(export_filename(now), "rsvp_export_20261018_091502.csv");
    }
}
