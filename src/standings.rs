use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashMap;
use std::ops::Range;

use crate::game::Game;

/// A team's win/loss tally.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TeamRecord {
    pub team: String,

    pub wins: u32,

    pub losses: u32,

    /// wins / games played, 0.0 for a team without games
    pub win_fraction: f64,
}

impl TeamRecord {
    pub fn new(team: &str, wins: u32, losses: u32) -> Self {
        let (num, den) = fraction_parts(wins, losses);
        TeamRecord {
            team: team.to_string(),
            wins,
            losses,
            win_fraction: num as f64 / den as f64,
        }
    }

    pub fn games(&self) -> u32 {
        self.wins + self.losses
    }

    /// Compare win fractions exactly, without going through floats.
    pub fn cmp_fraction(&self, other: &TeamRecord) -> Ordering {
        compare_fractions((self.wins, self.games()), (other.wins, other.games()))
    }

    pub fn same_fraction(&self, other: &TeamRecord) -> bool {
        self.cmp_fraction(other) == Ordering::Equal
    }
}

/// Numerator and denominator of a win fraction; an empty record is 0/1.
fn fraction_parts(wins: u32, losses: u32) -> (u64, u64) {
    let games = (wins + losses) as u64;
    if games == 0 {
        (0, 1)
    } else {
        (wins as u64, games)
    }
}

/// Exact comparison of `a.0 / a.1` against `b.0 / b.1`, where a zero
/// denominator reads as 0%.
pub fn compare_fractions(a: (u32, u32), b: (u32, u32)) -> Ordering {
    let (an, ad) = fraction_parts(a.0, a.1.saturating_sub(a.0));
    let (bn, bd) = fraction_parts(b.0, b.1.saturating_sub(b.0));
    (an * bd).cmp(&(bn * ad))
}

/// Fold the played games of a schedule into ranked team records.
///
/// Every listed team gets a record, as does any team that only appears in
/// a game. Records are ordered by win fraction, best first, then by team
/// name; this ordering is for display and is not a tie-break.
pub fn standings(teams: &[String], games: &[Game]) -> Vec<TeamRecord> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut tally: Vec<(&str, u32, u32)> = Vec::new();

    let participants = games.iter().flat_map(|g| [g.winner.as_str(), g.loser.as_str()]);
    for team in teams.iter().map(String::as_str).chain(participants) {
        if !index.contains_key(team) {
            index.insert(team, tally.len());
            tally.push((team, 0, 0));
        }
    }

    for game in games.iter().filter(|g| g.played) {
        tally[index[game.winner.as_str()]].1 += 1;
        tally[index[game.loser.as_str()]].2 += 1;
    }

    let mut records: Vec<TeamRecord> = tally
        .into_iter()
        .map(|(team, wins, losses)| TeamRecord::new(team, wins, losses))
        .collect();
    records.sort_by(|a, b| b.cmp_fraction(a).then_with(|| a.team.cmp(&b.team)));
    records
}

/// Index ranges of consecutive records sharing a win fraction.
///
/// Expects records sorted by [`standings`]; singletons are included.
pub fn fraction_groups(records: &[TeamRecord]) -> Vec<Range<usize>> {
    let mut groups = Vec::new();
    let mut start = 0;
    for i in 1..=records.len() {
        if i == records.len() || !records[i].same_fraction(&records[start]) {
            if start < i {
                groups.push(start..i);
            }
            start = i;
        }
    }
    groups
}
