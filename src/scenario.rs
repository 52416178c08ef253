use log::{info, warn};
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::chains::{Rule, RuleChain};
use crate::conference::Conference;
use crate::constants::{MAX_UNPLAYED_GAMES, QUALIFYING_PLACES};
use crate::game::{Game, Outcome};
use crate::standings::{standings, TeamRecord};
use crate::tiebreak::resolve_standings;

/// Knobs for a single enumeration run.
#[derive(Clone, Debug)]
pub struct EnumerationOptions {
    /// Refuse to enumerate beyond this many unplayed games
    pub max_unplayed_games: usize,

    /// Seed for the random tie-break fallback; entropy when absent
    pub seed: Option<u64>,
}

impl Default for EnumerationOptions {
    fn default() -> Self {
        EnumerationOptions {
            max_unplayed_games: MAX_UNPLAYED_GAMES,
            seed: None,
        }
    }
}

impl EnumerationOptions {
    pub fn seeded(seed: u64) -> Self {
        EnumerationOptions {
            seed: Some(seed),
            ..Default::default()
        }
    }
}

/// One complete result assignment for the unplayed games and the final
/// standings it produces.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    /// One outcome per unplayed game, in schedule order
    pub outcomes: Vec<Outcome>,

    /// Final standings with every tie resolved, best first
    pub standings: Vec<TeamRecord>,

    pub top_two: Vec<String>,

    /// Every tie-break rule that made a decision in this scenario
    pub rules: BTreeSet<Rule>,
}

impl Scenario {
    /// Outcome vector as a bit pattern: bit i set when the home slot of
    /// unplayed game i wins.
    pub fn mask(&self) -> u64 {
        self.outcomes
            .iter()
            .enumerate()
            .filter(|(_, o)| o.bit())
            .fold(0, |mask, (i, _)| mask | (1 << i))
    }

    pub fn is_top_two(&self, team: &str) -> bool {
        self.top_two.iter().any(|t| t == team)
    }

    /// Final place of a team, 1-based.
    pub fn place(&self, team: &str) -> Option<usize> {
        self.standings.iter().position(|r| r.team == team).map(|i| i + 1)
    }

    pub fn used_coin_toss(&self) -> bool {
        self.rules.contains(&Rule::CoinToss)
    }

    /// "Duke beats UNC, Clemson beats FSU"
    pub fn describe(&self, unplayed: &[&Game]) -> String {
        unplayed
            .iter()
            .zip(&self.outcomes)
            .map(|(game, &outcome)| {
                format!("{} beats {}", game.winner_under(outcome), game.loser_under(outcome))
            })
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Enumerate every result assignment of the conference's unplayed games.
///
/// Scenarios come back in numeric order of their outcome bit pattern. With
/// no unplayed games the single scenario is the current standings. More
/// unplayed games than `options.max_unplayed_games` yields an empty list.
pub fn enumerate(
    conference: &Conference,
    chain: &RuleChain,
    options: &EnumerationOptions,
) -> Vec<Scenario> {
    let n = conference.unplayed_count();
    if n > options.max_unplayed_games || n >= u64::BITS as usize {
        warn!(
            "{}: {} unplayed games exceeds the limit of {}, not enumerating",
            conference.name(),
            n,
            options.max_unplayed_games
        );
        return Vec::new();
    }

    let mut rng = match options.seed {
        Some(s) => ChaCha8Rng::seed_from_u64(s),
        None => ChaCha8Rng::from_entropy(),
    };

    let count = 1u64 << n;
    let mut scenarios = Vec::with_capacity(count as usize);
    for mask in 0..count {
        let outcomes: Vec<Outcome> = (0..n).map(|i| Outcome::from_bit(mask >> i & 1 == 1)).collect();
        scenarios.push(play_out(conference, &outcomes, chain, &mut rng));
    }

    info!(
        "{}: enumerated {} scenarios over {} unplayed games",
        conference.name(),
        scenarios.len(),
        n
    );
    scenarios
}

/// Final standings for one outcome assignment.
pub fn play_out<R: Rng>(
    conference: &Conference,
    outcomes: &[Outcome],
    chain: &RuleChain,
    rng: &mut R,
) -> Scenario {
    let games = conference.with_outcomes(outcomes);
    let records = standings(conference.teams(), &games);
    let resolved = resolve_standings(&records, &games, chain, rng);

    let top_two = resolved
        .records
        .iter()
        .take(QUALIFYING_PLACES)
        .map(|r| r.team.clone())
        .collect();

    Scenario {
        outcomes: outcomes.to_vec(),
        standings: resolved.records,
        top_two,
        rules: resolved.rules.into_iter().collect(),
    }
}
