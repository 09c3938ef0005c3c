//! Roster partitioning.
//!
//! Confirmed and waitlisted standing is never stored. Every caller that needs
//! to reason about standing re-runs [`Roster::classify`] over the current set
//! of players, so promotion off the waitlist falls out of the recomputation
//! whenever a slot frees up.

use serde::Serialize;

use crate::domain::entities::{Player, Standing};

/// Maximum number of confirmed slots
pub const CAPACITY_LIMIT: usize = 22;

/// Categorized snapshot of every player
#[derive(Debug, Clone, Default)]
pub struct Roster {
    capacity: usize,
    confirmed: Vec<Player>,
    waitlist: Vec<Player>,
    out: Vec<Player>,
}

/// Aggregate check-in counters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RosterStats {
    pub total_confirmed: usize,
    /// Paid players regardless of standing
    pub total_paid: usize,
    pub total_checked_in: usize,
    /// Confirmed players that have not paid
    pub awaiting_payment: usize,
    /// Confirmed, paid, not yet checked in
    pub awaiting_check_in: usize,
}

impl Roster {
    /// Partition players using the fixed capacity limit
    pub fn classify(players: Vec<Player>) -> Self {
        Self::classify_with_capacity(players, CAPACITY_LIMIT)
    }

    pub fn classify_with_capacity(players: Vec<Player>, capacity: usize) -> Self {
        let (mut ins, mut out): (Vec<Player>, Vec<Player>) =
            players.into_iter().partition(Player::is_in);

        ins.sort_by_key(Player::rank_key);
        out.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));

        let waitlist = if ins.len() > capacity {
            ins.split_off(capacity)
        } else {
            Vec::new()
        };

        Self {
            capacity,
            confirmed: ins,
            waitlist,
            out,
        }
    }

    /// Confirmed players ordered by rank
    pub fn confirmed(&self) -> &[Player] {
        &self.confirmed
    }

    /// Waitlisted players ordered by rank; index 0 holds position 1
    pub fn waitlist(&self) -> &[Player] {
        &self.waitlist
    }

    /// Out players ordered by name
    pub fn out(&self) -> &[Player] {
        &self.out
    }

    pub fn spots_available(&self) -> usize {
        self.capacity.saturating_sub(self.confirmed.len())
    }

    pub fn len(&self) -> usize {
        self.confirmed.len() + self.waitlist.len() + self.out.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Look up a player together with its current standing
    pub fn get(&self, id: i64) -> Option<(&Player, Standing)> {
        self.entries().find(|(p, _)| p.id == id)
    }

    pub fn standing_of(&self, id: i64) -> Option<Standing> {
        self.get(id).map(|(_, standing)| standing)
    }

    /// Every player with its standing: confirmed, then waitlist, then out
    pub fn entries(&self) -> impl Iterator<Item = (&Player, Standing)> + '_ {
        let confirmed = self.confirmed.iter().map(|p| (p, Standing::Confirmed));
        let waitlist = self.waitlist.iter().enumerate().map(|(i, p)| {
            (
                p,
                Standing::Waitlisted {
                    position: i as u32 + 1,
                },
            )
        });
        let out = self.out.iter().map(|p| (p, Standing::Out));
        confirmed.chain(waitlist).chain(out)
    }

    /// Give back the players, e.g. to reclassify after an in-memory change
    pub fn into_players(self) -> Vec<Player> {
        let mut players = self.confirmed;
        players.extend(self.waitlist);
        players.extend(self.out);
        players
    }

    /// Timestamp for a new vote: `now`, bumped past every stored vote so a
    /// re-vote always ranks strictly behind existing ones.
    pub fn next_rsvp_timestamp(&self, now_micros: i64) -> i64 {
        self.confirmed
            .iter()
            .chain(&self.waitlist)
            .chain(&self.out)
            .map(|p| p.rsvp_timestamp.saturating_add(1))
            .fold(now_micros, i64::max)
    }

    /// Players confirmed now that were waitlisted in `before`
    pub fn promoted_since<'a>(&'a self, before: &Roster) -> Vec<&'a Player> {
        self.confirmed
            .iter()
            .filter(|p| before.waitlist.iter().any(|w| w.id == p.id))
            .collect()
    }

    pub fn stats(&self) -> RosterStats {
        let all = || self.confirmed.iter().chain(&self.waitlist).chain(&self.out);

        let total_confirmed = self.confirmed.len();
        let awaiting_payment = self.confirmed.iter().filter(|p| !p.paid).count();
        let awaiting_check_in = self
            .confirmed
            .iter()
            .filter(|p| p.paid && !p.checked_in)
            .count();

        RosterStats {
            total_confirmed,
            total_paid: all().filter(|p| p.paid).count(),
            total_checked_in: all().filter(|p| p.checked_in).count(),
            awaiting_payment,
            awaiting_check_in,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::RsvpStatus;
    use proptest::prelude::*;

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

    fn ins(count: i64) -> Vec<Player> {
        (1..=count)
            .map(|i| player(i, &format!("p{}", i), RsvpStatus::In, i * 10))
            .collect()
    }

    #[test]
    fn test_first_capacity_players_are_confirmed() {
        let roster = Roster::classify(ins(22));

        assert_eq!(roster.confirmed().len(), 22);
        assert!(roster.waitlist().is_empty());
        assert_eq!(roster.spots_available(), 0);
    }

    #[test]
    fn test_overflow_goes_to_waitlist_in_order() {
        let roster = Roster::classify(ins(25));

        assert_eq!(roster.confirmed().len(), 22);
        let ids: Vec<i64> = roster.waitlist().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![23, 24, 25]);
        assert_eq!(
            roster.standing_of(24),
            Some(Standing::Waitlisted { position: 2 })
        );
    }

    #[test]
    fn test_input_order_does_not_matter() {
        let mut players = ins(24);
        players.reverse();
        let roster = Roster::classify(players);

        assert_eq!(roster.confirmed()[0].id, 1);
        assert_eq!(roster.waitlist()[0].id, 23);
    }

    #[test]
    fn test_timestamp_ties_broken_by_id() {
        let players = vec![
            player(3, "c", RsvpStatus::In, 100),
            player(1, "a", RsvpStatus::In, 100),
            player(2, "b", RsvpStatus::In, 100),
        ];
        let roster = Roster::classify_with_capacity(players, 2);

        let confirmed: Vec<i64> = roster.confirmed().iter().map(|p| p.id).collect();
        assert_eq!(confirmed, vec![1, 2]);
        assert_eq!(roster.waitlist()[0].id, 3);
    }

    #[test]
    fn test_out_players_sorted_by_name_and_excluded_from_ranking() {
        let mut players = ins(3);
        players.push(player(10, "zed", RsvpStatus::Out, 1));
        players.push(player(11, "amy", RsvpStatus::Out, 2));
        let roster = Roster::classify(players);

        assert_eq!(roster.confirmed().len(), 3);
        let names: Vec<&str> = roster.out().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["amy", "zed"]);
        assert_eq!(roster.standing_of(10), Some(Standing::Out));
        assert_eq!(roster.spots_available(), 19);
    }

    #[test]
    fn test_promotion_is_emergent_on_reclassify() {
        let before = Roster::classify(ins(24));
        let remaining: Vec<Player> = ins(24).into_iter().filter(|p| p.id != 5).collect();
        let after = Roster::classify(remaining);

        let promoted: Vec<i64> = after.promoted_since(&before).iter().map(|p| p.id).collect();
        assert_eq!(promoted, vec![23]);
        assert_eq!(
            after.standing_of(24),
            Some(Standing::Waitlisted { position: 1 })
        );
    }

    #[test]
    fn test_stats() {
        let mut players = ins(23);
        players[0].paid = true;
        players[0].checked_in = true;
        players[1].paid = true;
        // waitlisted but paid
        players[22].paid = true;
        players.push(Player {
            paid: true,
            ..player(30, "gone", RsvpStatus::Out, 5)
        });
        let stats = Roster::classify(players).stats();

        assert_eq!(stats.total_confirmed, 22);
        assert_eq!(stats.total_paid, 4);
        assert_eq!(stats.total_checked_in, 1);
        assert_eq!(stats.awaiting_payment, 20);
        assert_eq!(stats.awaiting_check_in, 1);
    }

    #[test]
    fn test_next_rsvp_timestamp_is_monotonic() {
        let roster = Roster::classify(ins(3));

        // clock behind the latest vote (30)
        assert_eq!(roster.next_rsvp_timestamp(25), 31);
        assert_eq!(roster.next_rsvp_timestamp(30), 31);
        assert_eq!(roster.next_rsvp_timestamp(500), 500);
        assert_eq!(Roster::default().next_rsvp_timestamp(7), 7);
    }

    #[test]
    fn test_into_players_keeps_everyone() {
        let mut players = ins(24);
        players.push(player(40, "out", RsvpStatus::Out, 1));
        let mut ids: Vec<i64> = Roster::classify(players)
            .into_players()
            .iter()
            .map(|p| p.id)
            .collect();
        ids.sort();

        let mut expected: Vec<i64> = (1..=24).collect();
        expected.push(40);
        assert_eq!(ids, expected);
    }

    #[test]
    fn test_empty_roster() {
        let roster = Roster::classify(Vec::new());

        assert!(roster.is_empty());
        assert_eq!(roster.spots_available(), CAPACITY_LIMIT);
        assert_eq!(roster.get(1), None);
    }

    proptest! {
        #[test]
        fn prop_confirmed_never_exceeds_capacity(
            votes in prop::collection::vec((0i64..40, any::<bool>()), 0..80)
        ) {
            let players: Vec<Player> = votes
                .iter()
                .enumerate()
                .map(|(i, (ts, is_in))| {
                    let status = if *is_in { RsvpStatus::In } else { RsvpStatus::Out };
                    player(i as i64 + 1, "p", status, *ts)
                })
                .collect();
            let in_count = players.iter().filter(|p| p.is_in()).count();
            let roster = Roster::classify(players);

            prop_assert!(roster.confirmed().len() <= CAPACITY_LIMIT);
            prop_assert_eq!(roster.confirmed().len(), in_count.min(CAPACITY_LIMIT));
            prop_assert_eq!(roster.waitlist().len(), in_count.saturating_sub(CAPACITY_LIMIT));
        }

        #[test]
        fn prop_ranks_strictly_increase(
            stamps in prop::collection::vec(0i64..10, 0..60)
        ) {
            let players: Vec<Player> = stamps
                .iter()
                .enumerate()
                .map(|(i, ts)| player(i as i64 + 1, "p", RsvpStatus::In, *ts))
                .collect();
            let roster = Roster::classify(players);

            let ranked: Vec<(i64, i64)> = roster
                .confirmed()
                .iter()
                .chain(roster.waitlist())
                .map(Player::rank_key)
                .collect();
            prop_assert!(ranked.windows(2).all(|w| w[0] < w[1]));

            for (i, (_, standing)) in roster
                .entries()
                .filter(|(_, s)| s.waitlist_position().is_some())
                .enumerate()
            {
                prop_assert_eq!(standing.waitlist_position(), Some(i as u32 + 1));
            }
        }
    }
}
