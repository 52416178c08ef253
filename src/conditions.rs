//! Minimal outcome combinations that decide a team's top-two fate.
//!
//! A sufficient condition is a small set of required results such that every
//! enumerated scenario agreeing with it puts the team in the top two; a
//! blocking condition keeps the team out of the top two in every agreeing
//! scenario. Conditions are searched smallest first, up to a fixed depth.

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use statrs::function::factorial::binomial;
use std::cmp::Ordering;

use crate::constants::{MAX_CONDITION_DEPTH, MAX_CONDITION_GAMES};
use crate::game::{Game, Outcome};
use crate::scenario::Scenario;

/// Limits for the condition search.
#[derive(Clone, Debug)]
pub struct AnalysisOptions {
    /// Refuse to search when more games than this are unplayed
    pub max_condition_games: usize,

    /// Most required results in one condition
    pub max_depth: usize,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        AnalysisOptions {
            max_condition_games: MAX_CONDITION_GAMES,
            max_depth: MAX_CONDITION_DEPTH,
        }
    }
}

/// A team's standing across all scenarios.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outlook {
    /// Top two in every scenario
    Clinched,
    /// Top two in some scenarios
    Contending,
    /// Top two in no scenario
    Eliminated,
    /// Too many unplayed games, or nothing was enumerated
    Undetermined,
}

/// One game result a condition requires.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequiredResult {
    /// Position of the game among the unplayed games
    pub game_index: usize,

    pub game_id: u32,

    pub outcome: Outcome,

    pub winner: String,

    pub loser: String,
}

impl RequiredResult {
    fn new(game_index: usize, game: &Game, outcome: Outcome) -> Self {
        RequiredResult {
            game_index,
            game_id: game.id,
            outcome,
            winner: game.winner_under(outcome).to_string(),
            loser: game.loser_under(outcome).to_string(),
        }
    }

    pub fn involves(&self, team: &str) -> bool {
        self.winner == team || self.loser == team
    }
}

/// A set of required results and the scenarios consistent with it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Condition {
    pub results: Vec<RequiredResult>,

    pub scenario_count: usize,

    /// Indices into the scenario list, ascending
    pub scenarios: Vec<usize>,
}

impl Condition {
    pub fn outcome_count(&self) -> usize {
        self.results.len()
    }

    /// True when every result required here is also required by `other`.
    pub fn is_subset_of(&self, other: &Condition) -> bool {
        self.results.iter().all(|r| {
            other
                .results
                .iter()
                .any(|o| o.game_index == r.game_index && o.outcome == r.outcome)
        })
    }

    /// "Duke beats UNC, Clemson beats FSU"
    pub fn describe(&self) -> String {
        self.results
            .iter()
            .map(|r| format!("{} beats {}", r.winner, r.loser))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Sufficient and blocking conditions for one team.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ConditionReport {
    pub team: String,

    pub outlook: Outlook,

    pub sufficient: Vec<Condition>,

    pub blocking: Vec<Condition>,

    pub top_two_scenarios: usize,

    pub total_scenarios: usize,

    /// Number of (game subset, outcome pattern) candidates examined at most
    pub search_space: f64,
}

impl ConditionReport {
    fn empty(team: &str, outlook: Outlook, top_two_scenarios: usize, total_scenarios: usize) -> Self {
        ConditionReport {
            team: team.to_string(),
            outlook,
            sufficient: Vec::new(),
            blocking: Vec::new(),
            top_two_scenarios,
            total_scenarios,
            search_space: 0.0,
        }
    }

    /// False means the team cannot reach the top two in any scenario.
    pub fn can_finish_top_two(&self) -> bool {
        matches!(self.outlook, Outlook::Clinched | Outlook::Contending)
    }

    /// Share of scenarios that put the team in the top two
    pub fn top_two_share(&self) -> f64 {
        if self.total_scenarios == 0 {
            0.0
        } else {
            self.top_two_scenarios as f64 / self.total_scenarios as f64
        }
    }
}

/// Upper bound on the candidates examined: sum over k of C(n, k) * 2^k.
pub fn search_space(unplayed: usize, max_depth: usize) -> f64 {
    (1..=max_depth.min(unplayed))
        .map(|k| binomial(unplayed as u64, k as u64) * 2f64.powi(k as i32))
        .sum()
}

/// Find the sufficient and blocking conditions for `team`.
///
/// `unplayed` must list the unplayed games in the order used to build the
/// scenarios' outcome vectors.
pub fn analyze(
    scenarios: &[Scenario],
    unplayed: &[&Game],
    team: &str,
    options: &AnalysisOptions,
) -> ConditionReport {
    let n = unplayed.len();
    let total = scenarios.len();
    let hits: Vec<bool> = scenarios.iter().map(|s| s.is_top_two(team)).collect();
    let top = hits.iter().filter(|&&hit| hit).count();

    if total == 0 {
        return ConditionReport::empty(team, Outlook::Undetermined, 0, 0);
    }
    if n > options.max_condition_games || n >= u64::BITS as usize {
        warn!(
            "{}: {} unplayed games exceeds the condition search limit of {}",
            team, n, options.max_condition_games
        );
        return ConditionReport::empty(team, Outlook::Undetermined, top, total);
    }
    if top == 0 {
        return ConditionReport::empty(team, Outlook::Eliminated, top, total);
    }
    let outlook = if top == total {
        Outlook::Clinched
    } else {
        Outlook::Contending
    };

    let masks: Vec<u64> = scenarios.iter().map(Scenario::mask).collect();
    let depth = options.max_depth.min(n);
    let space = search_space(n, depth);
    debug!("{}: searching {} candidates over {} games", team, space, n);

    let (sufficient, blocking) = search(&masks, &hits, n, depth);
    let sufficient = finish(reduce(sufficient, &masks), unplayed, team);
    let blocking = finish(reduce(blocking, &masks), unplayed, team);

    debug!(
        "{}: top two in {}/{} scenarios, {} sufficient and {} blocking conditions",
        team,
        top,
        total,
        sufficient.len(),
        blocking.len()
    );

    ConditionReport {
        team: team.to_string(),
        outlook,
        sufficient,
        blocking,
        top_two_scenarios: top,
        total_scenarios: total,
        search_space: space,
    }
}

/// A (game subset, outcome pattern) pair, both as bit masks over the
/// unplayed games.
#[derive(Clone, Debug, PartialEq, Eq)]
struct Candidate {
    games: u64,
    pattern: u64,
    covered: Vec<usize>,
}

impl Candidate {
    fn size(&self) -> u32 {
        self.games.count_ones()
    }

    /// Every outcome of `self` is also an outcome of `other`.
    fn within(&self, other: &Candidate) -> bool {
        self.games & other.games == self.games && other.pattern & self.games == self.pattern
    }
}

/// Iterative deepening over subset size. Returns raw sufficient and
/// blocking candidates; anything extending an accepted candidate is skipped.
fn search(masks: &[u64], hits: &[bool], n: usize, depth: usize) -> (Vec<Candidate>, Vec<Candidate>) {
    let mut sufficient: Vec<Candidate> = Vec::new();
    let mut blocking: Vec<Candidate> = Vec::new();

    for k in 1..=depth {
        for subset in combinations(n, k) {
            let games = subset.iter().fold(0u64, |acc, &g| acc | (1 << g));

            // pattern index -> (scenarios, scenarios with the team top two)
            let mut buckets = vec![(0usize, 0usize); 1 << k];
            for (mask, &hit) in masks.iter().zip(hits) {
                let bucket = &mut buckets[extract(*mask, &subset)];
                bucket.0 += 1;
                bucket.1 += hit as usize;
            }

            for (index, &(count, good)) in buckets.iter().enumerate() {
                if count == 0 || (good != count && good != 0) {
                    continue;
                }
                let candidate = Candidate {
                    games,
                    pattern: deposit(index, &subset),
                    covered: Vec::new(),
                };
                let found = if good == count { &mut sufficient } else { &mut blocking };
                if !found.iter().any(|f| f.within(&candidate)) {
                    found.push(candidate);
                }
            }
        }
    }

    (sufficient, blocking)
}

/// Deduplicate, drop candidates implied by a smaller one, then drop
/// candidates whose coverage is strictly inside another survivor's.
fn reduce(mut candidates: Vec<Candidate>, masks: &[u64]) -> Vec<Candidate> {
    candidates.sort_by_key(|c| (c.size(), c.games, c.pattern));
    candidates.dedup_by_key(|c| (c.games, c.pattern));

    let mut kept: Vec<Candidate> = candidates
        .iter()
        .filter(|c| !candidates.iter().any(|o| o.size() < c.size() && o.within(c)))
        .cloned()
        .collect();

    for candidate in &mut kept {
        candidate.covered = masks
            .iter()
            .enumerate()
            .filter(|(_, &mask)| mask & candidate.games == candidate.pattern)
            .map(|(i, _)| i)
            .collect();
    }

    let mut survivors: Vec<Candidate> = kept
        .iter()
        .filter(|c| !kept.iter().any(|o| strict_subset(&c.covered, &o.covered)))
        .cloned()
        .collect();

    survivors.sort_by(|a, b| {
        a.size()
            .cmp(&b.size())
            .then_with(|| b.covered.len().cmp(&a.covered.len()))
            .then_with(|| game_order(a.games, b.games))
            .then_with(|| a.pattern.cmp(&b.pattern))
    });
    survivors
}

/// Turn candidates into conditions, target team's games first.
fn finish(candidates: Vec<Candidate>, unplayed: &[&Game], team: &str) -> Vec<Condition> {
    candidates
        .into_iter()
        .map(|c| {
            let mut results: Vec<RequiredResult> = (0..unplayed.len())
                .filter(|&i| c.games >> i & 1 == 1)
                .map(|i| RequiredResult::new(i, unplayed[i], Outcome::from_bit(c.pattern >> i & 1 == 1)))
                .collect();
            results.sort_by_key(|r| !r.involves(team));
            Condition {
                results,
                scenario_count: c.covered.len(),
                scenarios: c.covered,
            }
        })
        .collect()
}

/// Compare game subsets by their ascending game indices, lexicographically.
fn game_order(a: u64, b: u64) -> Ordering {
    let (mut a, mut b) = (a, b);
    while a != 0 && b != 0 {
        let (x, y) = (a.trailing_zeros(), b.trailing_zeros());
        if x != y {
            return x.cmp(&y);
        }
        a &= a - 1;
        b &= b - 1;
    }
    a.cmp(&b)
}

/// `a` is a strict subset of `b`; both sorted ascending.
fn strict_subset(a: &[usize], b: &[usize]) -> bool {
    if a.len() >= b.len() {
        return false;
    }
    let mut rest = b.iter();
    a.iter().all(|x| rest.any(|y| y == x))
}

/// Pack the bits of `mask` at the positions in `subset` into a dense index.
fn extract(mask: u64, subset: &[usize]) -> usize {
    subset
        .iter()
        .enumerate()
        .fold(0, |acc, (j, &g)| acc | (((mask >> g) & 1) as usize) << j)
}

/// Inverse of [`extract`]: spread a dense index back onto the subset positions.
fn deposit(index: usize, subset: &[usize]) -> u64 {
    subset
        .iter()
        .enumerate()
        .fold(0, |acc, (j, &g)| acc | (((index >> j) & 1) as u64) << g)
}

/// All k-element subsets of 0..n, in lexicographic order.
fn combinations(n: usize, k: usize) -> Vec<Vec<usize>> {
    let mut out = Vec::new();
    if k == 0 || k > n {
        return out;
    }
    let mut idx: Vec<usize> = (0..k).collect();
    loop {
        out.push(idx.clone());
        let mut i = k;
        loop {
            if i == 0 {
                return out;
            }
            i -= 1;
            if idx[i] != i + n - k {
                break;
            }
        }
        idx[i] += 1;
        for j in i + 1..k {
            idx[j] = idx[j - 1] + 1;
        }
    }
}
