//! Tie-break resolution.
//!
//! A tied group is ordered by offering the still-undecided teams to each rule
//! of a [`RuleChain`] in turn. The first rule that separates one team sends
//! it to the top or the bottom of the group, and the chain restarts on the
//! teams that remain. When no rule separates anyone, the remaining teams are
//! placed by a single random permutation and resolution stops.

use log::{debug, trace};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

use crate::chains::{Rule, RuleChain};
use crate::game::Game;
use crate::standings::{compare_fractions, fraction_groups, TeamRecord};

/// One rule's verdict on one team.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TieBreakResult {
    pub team: String,

    /// true if the team was placed at the top of the group, false for the bottom
    pub top: bool,

    pub rule: Rule,

    pub explanation: String,
}

impl TieBreakResult {
    fn top(team: &str, rule: Rule, explanation: String) -> Self {
        TieBreakResult {
            team: team.to_string(),
            top: true,
            rule,
            explanation,
        }
    }

    fn bottom(team: &str, rule: Rule, explanation: String) -> Self {
        TieBreakResult {
            team: team.to_string(),
            top: false,
            rule,
            explanation,
        }
    }
}

/// Outcome of resolving a single tied group.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Resolution {
    /// Total order of the group, best first
    pub order: Vec<String>,

    /// Rules that made a decision, in the order they did
    pub rules: Vec<Rule>,

    pub verdicts: Vec<TieBreakResult>,
}

impl Resolution {
    pub fn used_coin_toss(&self) -> bool {
        self.rules.contains(&Rule::CoinToss)
    }
}

/// Standings with every tied group ordered.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ResolvedStandings {
    pub records: Vec<TeamRecord>,

    pub rules: Vec<Rule>,

    pub verdicts: Vec<TieBreakResult>,
}

/// Order a group of teams tied on win fraction.
///
/// `standings` must cover every team appearing in `games`; rules C and D
/// read other teams' records from it. Always returns a total order of the
/// group, falling back to a random draw when the chain runs dry.
pub fn resolve_group<R: Rng>(
    group: &[String],
    games: &[Game],
    standings: &[TeamRecord],
    chain: &RuleChain,
    rng: &mut R,
) -> Resolution {
    let played: Vec<&Game> = games.iter().filter(|g| g.played).collect();
    let ctx = Context {
        played: &played,
        standings,
        records: standings.iter().map(|r| (r.team.as_str(), r)).collect(),
        group: group.iter().map(String::as_str).collect(),
        sweep_to_bottom: chain.sweep_to_bottom,
    };

    let mut remaining: Vec<String> = group.to_vec();
    let mut top: Vec<String> = Vec::new();
    let mut bottom: Vec<String> = Vec::new();
    let mut resolution = Resolution::default();

    while remaining.len() > 1 {
        let decision = chain
            .rules
            .iter()
            .take_while(|rule| **rule != Rule::CoinToss)
            .find_map(|&rule| ctx.apply(rule, &remaining));

        match decision {
            Some(verdict) => {
                trace!("{} [{}]: {}", verdict.team, verdict.rule, verdict.explanation);
                remaining.retain(|team| *team != verdict.team);
                if verdict.top {
                    top.push(verdict.team.clone());
                } else {
                    bottom.push(verdict.team.clone());
                }
                resolution.rules.push(verdict.rule);
                resolution.verdicts.push(verdict);
            }
            None => {
                remaining.shuffle(rng);
                debug!("no tie-break rule separates {:?}, drawing lots", remaining);
                let explanation = format!("random draw among {}", remaining.join(", "));
                for team in &remaining {
                    resolution
                        .verdicts
                        .push(TieBreakResult::top(team, Rule::CoinToss, explanation.clone()));
                }
                resolution.rules.push(Rule::CoinToss);
                top.append(&mut remaining);
            }
        }
    }

    top.append(&mut remaining);
    top.append(&mut bottom);
    resolution.order = top;
    resolution
}

/// Resolve every tied group of a sorted standings list.
///
/// Untied teams keep their place; a list without ties comes back unchanged
/// with an empty trace.
pub fn resolve_standings<R: Rng>(
    records: &[TeamRecord],
    games: &[Game],
    chain: &RuleChain,
    rng: &mut R,
) -> ResolvedStandings {
    let mut resolved = ResolvedStandings::default();

    for range in fraction_groups(records) {
        let slice = &records[range];
        if slice.len() < 2 {
            resolved.records.extend_from_slice(slice);
            continue;
        }

        let group: Vec<String> = slice.iter().map(|r| r.team.clone()).collect();
        let resolution = resolve_group(&group, games, records, chain, rng);
        for team in &resolution.order {
            if let Some(record) = slice.iter().find(|r| &r.team == team) {
                resolved.records.push(record.clone());
            }
        }
        resolved.rules.extend(resolution.rules);
        resolved.verdicts.extend(resolution.verdicts);
    }

    resolved
}

/// Shared lookups for one group's resolution.
struct Context<'a> {
    played: &'a [&'a Game],
    standings: &'a [TeamRecord],
    records: HashMap<&'a str, &'a TeamRecord>,
    /// The whole tied group, including teams already placed
    group: HashSet<&'a str>,
    sweep_to_bottom: bool,
}

impl<'a> Context<'a> {
    fn apply(&self, rule: Rule, remaining: &[String]) -> Option<TieBreakResult> {
        match rule {
            Rule::HeadToHead => self.head_to_head(remaining),
            Rule::CommonOpponents => self.common_opponents(remaining),
            Rule::NextHighestOpponents => self.next_highest_opponents(remaining),
            Rule::OpponentStrength => self.opponent_strength(remaining),
            Rule::CoinToss => None,
        }
    }

    /// Rule A: head-to-head between two teams, round robin among more.
    fn head_to_head(&self, remaining: &[String]) -> Option<TieBreakResult> {
        let members: HashSet<&str> = remaining.iter().map(String::as_str).collect();
        let internal: Vec<&Game> = self
            .played
            .iter()
            .copied()
            .filter(|g| members.contains(g.winner.as_str()) && members.contains(g.loser.as_str()))
            .collect();

        // (winner, loser) -> wins
        let mut beat: HashMap<(&str, &str), u32> = HashMap::new();
        for game in &internal {
            *beat.entry((game.winner.as_str(), game.loser.as_str())).or_insert(0) += 1;
        }
        let wins_over = |a: &str, b: &str| beat.get(&(a, b)).copied().unwrap_or(0);

        if let [a, b] = remaining {
            let (a, b) = (a.as_str(), b.as_str());
            let (a_wins, b_wins) = (wins_over(a, b), wins_over(b, a));
            return match a_wins.cmp(&b_wins) {
                Ordering::Greater => Some(TieBreakResult::top(
                    a,
                    Rule::HeadToHead,
                    format!("{} beat {} head-to-head ({}-{})", a, b, a_wins, b_wins),
                )),
                Ordering::Less => Some(TieBreakResult::top(
                    b,
                    Rule::HeadToHead,
                    format!("{} beat {} head-to-head ({}-{})", b, a, b_wins, a_wins),
                )),
                Ordering::Equal => None,
            };
        }

        let complete = remaining.iter().enumerate().all(|(i, a)| {
            remaining[i + 1..]
                .iter()
                .all(|b| wins_over(a.as_str(), b.as_str()) + wins_over(b.as_str(), a.as_str()) == 1)
        });
        if complete {
            let wins: Vec<u32> = remaining
                .iter()
                .map(|team| internal.iter().filter(|g| &g.winner == team).count() as u32)
                .collect();
            if let Some(i) = unique_max_by(&wins, |a, b| a.cmp(b)) {
                return Some(TieBreakResult::top(
                    &remaining[i],
                    Rule::HeadToHead,
                    format!(
                        "{} went {}-{} in the round robin among {}",
                        remaining[i],
                        wins[i],
                        remaining.len() as u32 - 1 - wins[i],
                        remaining.join(", ")
                    ),
                ));
            }
        }

        let sweeps = |team: &str| {
            remaining
                .iter()
                .filter(|other| other.as_str() != team)
                .all(|other| wins_over(team, other.as_str()) > 0 && wins_over(other.as_str(), team) == 0)
        };
        if let Some(team) = remaining.iter().find(|team| sweeps(team.as_str())) {
            return Some(TieBreakResult::top(
                team,
                Rule::HeadToHead,
                format!("{} beat every other tied team", team),
            ));
        }

        if self.sweep_to_bottom {
            let swept = |team: &str| {
                remaining
                    .iter()
                    .filter(|other| other.as_str() != team)
                    .all(|other| wins_over(other.as_str(), team) > 0 && wins_over(team, other.as_str()) == 0)
            };
            if let Some(team) = remaining.iter().find(|team| swept(team.as_str())) {
                return Some(TieBreakResult::bottom(
                    team,
                    Rule::HeadToHead,
                    format!("{} lost to every other tied team", team),
                ));
            }
        }

        None
    }

    /// Rule B: record against opponents outside the tied group that every
    /// remaining team has played.
    fn common_opponents(&self, remaining: &[String]) -> Option<TieBreakResult> {
        let mut common: Option<HashSet<&str>> = None;
        for team in remaining {
            let opponents: HashSet<&str> = self
                .played
                .iter()
                .filter_map(|g| g.opponent_of(team))
                .filter(|opp| !self.group.contains(opp))
                .collect();
            common = Some(match common {
                Some(acc) => acc.intersection(&opponents).copied().collect(),
                None => opponents,
            });
        }
        let common = common.filter(|set| !set.is_empty())?;

        let records: Vec<(u32, u32)> = remaining
            .iter()
            .map(|team| self.record_against(team, &common))
            .collect();
        let i = unique_max_by(&records, |a, b| compare_fractions(*a, *b))?;

        let mut names: Vec<&str> = common.into_iter().collect();
        names.sort_unstable();
        Some(TieBreakResult::top(
            &remaining[i],
            Rule::CommonOpponents,
            format!(
                "{} went {}-{} against common opponents ({})",
                remaining[i],
                records[i].0,
                records[i].1 - records[i].0,
                names.join(", ")
            ),
        ))
    }

    /// Rule C: walk the standings from the top, comparing records against
    /// each win-fraction level above and below the tied group.
    ///
    /// A level is skipped unless every remaining team played someone in it.
    fn next_highest_opponents(&self, remaining: &[String]) -> Option<TieBreakResult> {
        let tied = self.records.get(remaining[0].as_str()).copied();

        for range in fraction_groups(self.standings) {
            let level = &self.standings[range];
            if tied.is_some_and(|t| level[0].same_fraction(t)) {
                continue;
            }

            let opponents: HashSet<&str> = level.iter().map(|r| r.team.as_str()).collect();
            let records: Vec<(u32, u32)> = remaining
                .iter()
                .map(|team| self.record_against(team, &opponents))
                .collect();
            if records.iter().any(|&(_, games)| games == 0) {
                continue;
            }

            if let Some(i) = unique_max_by(&records, |a, b| compare_fractions(*a, *b)) {
                let mut names: Vec<&str> = opponents.into_iter().collect();
                names.sort_unstable();
                return Some(TieBreakResult::top(
                    &remaining[i],
                    Rule::NextHighestOpponents,
                    format!(
                        "{} went {}-{} against {}",
                        remaining[i],
                        records[i].0,
                        records[i].1 - records[i].0,
                        names.join(", ")
                    ),
                ));
            }

            let all_equal = records
                .windows(2)
                .all(|w| compare_fractions(w[0], w[1]) == Ordering::Equal);
            if !all_equal {
                // Some teams fell behind here, but the leaders are still level
                return None;
            }
        }

        None
    }

    /// Rule D: combined win fraction of every opponent a team played.
    fn opponent_strength(&self, remaining: &[String]) -> Option<TieBreakResult> {
        let strength: Vec<(u32, u32)> = remaining
            .iter()
            .map(|team| {
                let opponents: HashSet<&str> =
                    self.played.iter().filter_map(|g| g.opponent_of(team)).collect();
                opponents
                    .iter()
                    .filter_map(|opp| self.records.get(opp))
                    .fold((0, 0), |(wins, games), r| (wins + r.wins, games + r.games()))
            })
            .collect();
        let i = unique_max_by(&strength, |a, b| compare_fractions(*a, *b))?;

        let (wins, games) = strength[i];
        let pct = if games == 0 { 0.0 } else { wins as f64 / games as f64 };
        Some(TieBreakResult::top(
            &remaining[i],
            Rule::OpponentStrength,
            format!(
                "{}'s opponents combined for {}-{} ({:.3})",
                remaining[i],
                wins,
                games - wins,
                pct
            ),
        ))
    }

    /// (wins, games) of `team` against any of `opponents`.
    fn record_against(&self, team: &str, opponents: &HashSet<&str>) -> (u32, u32) {
        self.played
            .iter()
            .filter_map(|g| g.opponent_of(team).map(|opp| (g, opp)))
            .filter(|(_, opp)| opponents.contains(opp))
            .fold((0, 0), |(wins, games), (g, _)| {
                (wins + (g.winner == team) as u32, games + 1)
            })
    }
}

/// Index of the single greatest element, or None when the maximum is shared.
fn unique_max_by<T, F>(values: &[T], cmp: F) -> Option<usize>
where
    F: Fn(&T, &T) -> Ordering,
{
    let mut best: Option<usize> = None;
    let mut shared = false;
    for (i, value) in values.iter().enumerate() {
        match best {
            None => best = Some(i),
            Some(b) => match cmp(value, &values[b]) {
                Ordering::Greater => {
                    best = Some(i);
                    shared = false;
                }
                Ordering::Equal => shared = true,
                Ordering::Less => {}
            },
        }
    }
    if shared {
        None
    } else {
        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::standings::standings;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn names(teams: &[&str]) -> Vec<String> {
        teams.iter().map(|s| s.to_string()).collect()
    }

    /// Played games from (winner, loser) pairs, numbered in order.
    fn results(pairs: &[(&str, &str)]) -> Vec<Game> {
        pairs
            .iter()
            .enumerate()
            .map(|(i, (w, l))| Game::played(i as u32 + 1, w, l))
            .collect()
    }

    fn resolve(group: &[&str], games: &[Game], chain: &str) -> Resolution {
        let table = standings(&[], games);
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        resolve_group(&names(group), games, &table, &RuleChain::from_codes(chain).unwrap(), &mut rng)
    }

    #[test]
    fn test_two_team_head_to_head() {
        // A and B both finish 6-2, A won the meeting
        let games = results(&[
            ("A", "B"),
            ("A", "F1"), ("A", "F2"), ("A", "F3"), ("A", "F4"), ("A", "F5"),
            ("G1", "A"), ("G2", "A"),
            ("B", "F1"), ("B", "F2"), ("B", "F3"), ("B", "F4"), ("B", "F5"), ("B", "F6"),
            ("G3", "B"),
        ]);
        let res = resolve(&["B", "A"], &games, "ABCD");
        assert_eq!(res.order, names(&["A", "B"]));
        assert_eq!(res.rules, vec![Rule::HeadToHead]);
        assert!(!res.used_coin_toss());
        assert!(res.verdicts[0].top);
        assert!(res.verdicts[0].explanation.contains("head-to-head"));
    }

    #[test]
    fn test_split_series_is_not_decided_by_head_to_head() {
        let games = results(&[("A", "B"), ("B", "A")]);
        let res = resolve(&["A", "B"], &games, "A");
        assert_eq!(res.rules, vec![Rule::CoinToss]);
        assert_eq!(res.order.len(), 2);
    }

    #[test]
    fn test_round_robin_leader_needs_only_rule_a() {
        // A 2-0, B 1-1, C 0-2 among themselves; all 2-2 overall
        let games = results(&[
            ("A", "B"), ("A", "C"), ("B", "C"),
            ("F1", "A"), ("F2", "A"),
            ("B", "F1"), ("F2", "B"),
            ("C", "F1"), ("C", "F2"),
        ]);
        let res = resolve(&["C", "B", "A"], &games, "ABCD");
        assert_eq!(res.order, names(&["A", "B", "C"]));
        assert!(res.rules.iter().all(|r| *r == Rule::HeadToHead));
        assert_eq!(res.rules.len(), 2);
    }

    #[test]
    fn test_incomplete_round_robin_sweeper() {
        // A beat B and C, B and C never met
        let games = results(&[("A", "B"), ("A", "C")]);
        let res = resolve(&["B", "C", "A"], &games, "A");
        assert_eq!(res.order[0], "A");
        assert_eq!(res.rules[0], Rule::HeadToHead);
        // B and C are left to the draw
        assert_eq!(res.rules[1], Rule::CoinToss);
    }

    #[test]
    fn test_sweep_to_bottom_variant() {
        // A, B, C form a cycle; D lost to all three
        let games = results(&[
            ("A", "B"), ("B", "C"), ("C", "A"),
            ("A", "D"), ("B", "D"), ("C", "D"),
        ]);
        let table = standings(&[], &games);
        let group = names(&["A", "B", "C", "D"]);

        let chain = RuleChain::from_codes("A").unwrap().with_sweep_to_bottom();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let res = resolve_group(&group, &games, &table, &chain, &mut rng);
        assert_eq!(res.order.len(), 4);
        assert_eq!(res.order[3], "D");
        assert_eq!(res.rules, vec![Rule::HeadToHead, Rule::CoinToss]);
        assert!(!res.verdicts[0].top);

        let chain = RuleChain::from_codes("A").unwrap();
        let res = resolve_group(&group, &games, &table, &chain, &mut rng);
        assert_eq!(res.rules, vec![Rule::CoinToss]);
    }

    #[test]
    fn test_bottom_decisions_follow_decision_order() {
        // D lost to everyone, then C lost to A and B; A and B split
        let games = results(&[
            ("A", "D"), ("B", "D"), ("C", "D"),
            ("A", "C"), ("B", "C"),
            ("A", "B"), ("B", "A"),
        ]);
        let table = standings(&[], &games);
        let chain = RuleChain::from_codes("A").unwrap().with_sweep_to_bottom();
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let res = resolve_group(&names(&["A", "B", "C", "D"]), &games, &table, &chain, &mut rng);
        assert_eq!(&res.order[2..], &names(&["D", "C"])[..]);
        let bottoms: Vec<&str> = res.verdicts.iter().filter(|v| !v.top).map(|v| v.team.as_str()).collect();
        assert_eq!(bottoms, vec!["D", "C"]);
    }

    #[test]
    fn test_common_opponents() {
        // A and B both .500, never met. Common opponents X and Y:
        // A 2-0, B 1-1
        let games = results(&[
            ("A", "X"), ("A", "Y"), ("P", "A"), ("Q", "A"),
            ("B", "X"), ("Y", "B"), ("B", "R"), ("B", "S"), ("T", "B"), ("U", "B"),
        ]);
        let res = resolve(&["B", "A"], &games, "ABCD");
        assert_eq!(res.order, names(&["A", "B"]));
        assert_eq!(res.rules, vec![Rule::CommonOpponents]);
        assert!(res.verdicts[0].explanation.contains("X, Y"));
    }

    #[test]
    fn test_common_opponents_exclude_placed_group_members() {
        // A sweeps B and C and goes first. Against X, B is 1-0 and C 3-1;
        // counting their losses to A would make it 1-1 against 3-2
        let games = results(&[
            ("A", "B"), ("A", "C"),
            ("B", "X"),
            ("C", "X"), ("C", "X"), ("C", "X"), ("X", "C"),
        ]);
        let res = resolve(&["C", "B", "A"], &games, "AB");
        assert_eq!(res.order, names(&["A", "B", "C"]));
        assert_eq!(res.rules, vec![Rule::HeadToHead, Rule::CommonOpponents]);
        assert!(res.verdicts[1].explanation.contains("X"));
        assert!(!res.verdicts[1].explanation.contains("A"));
    }

    #[test]
    fn test_no_common_opponents_makes_no_decision() {
        let games = results(&[("A", "X"), ("B", "Y")]);
        let res = resolve(&["A", "B"], &games, "B");
        assert_eq!(res.rules, vec![Rule::CoinToss]);
    }

    #[test]
    fn test_next_highest_opponent() {
        // L leads at 3-1; A beat L, B lost to L
        let games = results(&[
            ("A", "L"), ("X", "A"),
            ("L", "B"), ("B", "Y"),
            ("L", "X"), ("L", "Y"),
        ]);
        let res = resolve(&["B", "A"], &games, "AC");
        assert_eq!(res.order, names(&["A", "B"]));
        assert_eq!(res.rules, vec![Rule::NextHighestOpponents]);
        assert!(res.verdicts[0].explanation.contains("against L"));
    }

    #[test]
    fn test_next_highest_skips_level_without_games() {
        // Top team L only played A, so its level is skipped. M (2-1) played both:
        // A beat M, B lost to M
        let games = results(&[
            ("L", "A"), ("L", "Z1"), ("L", "Z2"), ("L", "Z3"),
            ("A", "M"), ("M", "B"), ("M", "Z1"), ("M", "Z2"),
            ("B", "Z3"), ("B", "Z4"),
            ("A", "Z4"),
        ]);
        let table = standings(&[], &games);
        let a = table.iter().find(|r| r.team == "A").unwrap();
        let b = table.iter().find(|r| r.team == "B").unwrap();
        assert!(a.same_fraction(b));

        let res = resolve(&["A", "B"], &games, "C");
        assert_eq!(res.order, names(&["A", "B"]));
        assert!(res.verdicts[0].explanation.contains("against M"));
    }

    #[test]
    fn test_opponent_strength() {
        // A beat S (1-1 otherwise), B beat W (0-2)
        let games = results(&[("A", "S"), ("B", "W"), ("S", "W")]);
        let res = resolve(&["B", "A"], &games, "AD");
        assert_eq!(res.order, names(&["A", "B"]));
        assert_eq!(res.rules, vec![Rule::OpponentStrength]);
    }

    #[test]
    fn test_coin_toss_in_chain_stops_the_chain() {
        // D would separate them, but R comes first
        let games = results(&[("A", "S"), ("B", "W"), ("S", "W")]);
        let res = resolve(&["A", "B"], &games, "RD");
        assert_eq!(res.rules, vec![Rule::CoinToss]);
    }

    #[test]
    fn test_coin_toss_is_a_real_permutation() {
        let games = results(&[("A", "X"), ("B", "Y")]);
        let table = standings(&[], &games);
        let chain = RuleChain::from_codes("ABCD").unwrap();
        let group = names(&["A", "B"]);

        let mut firsts = HashSet::new();
        for seed in 0..64 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let res = resolve_group(&group, &games, &table, &chain, &mut rng);
            let mut sorted = res.order.clone();
            sorted.sort();
            assert_eq!(sorted, group);
            firsts.insert(res.order[0].clone());
        }
        assert_eq!(firsts.len(), 2);
    }

    #[test]
    fn test_seeded_coin_toss_is_reproducible() {
        let games = results(&[("A", "X"), ("B", "Y"), ("C", "Z")]);
        let first = resolve(&["A", "B", "C"], &games, "ABCD");
        let second = resolve(&["A", "B", "C"], &games, "ABCD");
        assert_eq!(first.order, second.order);
    }

    #[test]
    fn test_resolve_standings_without_ties_is_identity() {
        let games = results(&[("A", "B"), ("A", "C"), ("B", "C")]);
        let table = standings(&[], &games);
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let resolved = resolve_standings(&table, &games, &RuleChain::default(), &mut rng);
        assert_eq!(resolved.records, table);
        assert!(resolved.rules.is_empty());
        assert!(resolved.verdicts.is_empty());
    }

    #[test]
    fn test_resolve_standings_orders_every_group() {
        // Three-way cycle at 2-1, then E and D untied below it
        let games = results(&[
            ("A", "B"), ("B", "C"), ("C", "A"),
            ("A", "D"), ("B", "E"), ("C", "D"),
            ("E", "D"),
        ]);
        let table = standings(&[], &games);
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let resolved = resolve_standings(&table, &games, &RuleChain::default(), &mut rng);

        assert_eq!(resolved.records.len(), table.len());
        let order: Vec<&str> = resolved.records.iter().map(|r| r.team.as_str()).collect();
        // E (1-1) beat D (0-3)
        assert_eq!(&order[3..], &["E", "D"]);
    }

    #[test]
    fn test_unique_max_by() {
        assert_eq!(unique_max_by(&[1, 3, 2], |a, b| a.cmp(b)), Some(1));
        assert_eq!(unique_max_by(&[3, 3, 2], |a, b| a.cmp(b)), None);
        assert_eq!(unique_max_by::<i32, _>(&[], |a, b| a.cmp(b)), None);
    }
}
