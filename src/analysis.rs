use log::info;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::chains::RuleChain;
use crate::conditions::{analyze, AnalysisOptions, ConditionReport};
use crate::conference::Conference;
use crate::config::EngineConfig;
use crate::error::Result;
use crate::game::Game;
use crate::scenario::{enumerate, Scenario};
use crate::tiebreak::{resolve_standings, ResolvedStandings};

/// Current standings with ties resolved, counting played games only.
pub fn current_standings(conference: &Conference, chain: &RuleChain, seed: Option<u64>) -> ResolvedStandings {
    let mut rng = match seed {
        Some(s) => ChaCha8Rng::seed_from_u64(s),
        None => ChaCha8Rng::from_entropy(),
    };
    resolve_standings(&conference.standings(), conference.games(), chain, &mut rng)
}

/// Condition reports for every team.
///
/// Teams are analyzed in parallel; each analysis only reads the shared
/// scenario list.
pub fn analyze_all_teams(
    scenarios: &[Scenario],
    unplayed: &[&Game],
    teams: &[String],
    options: &AnalysisOptions,
) -> BTreeMap<String, ConditionReport> {
    teams
        .par_iter()
        .map(|team| (team.clone(), analyze(scenarios, unplayed, team, options)))
        .collect::<Vec<_>>()
        .into_iter()
        .collect()
}

/// Full pipeline output for one conference.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Analysis {
    pub conference: String,

    pub chain: RuleChain,

    pub standings: ResolvedStandings,

    /// Unplayed games, in outcome-vector order
    pub unplayed: Vec<Game>,

    pub scenarios: Vec<Scenario>,

    pub reports: BTreeMap<String, ConditionReport>,
}

impl Analysis {
    /// Enumerate the conference's remaining games and analyze every team.
    pub fn run(conference: &Conference, config: &EngineConfig) -> Self {
        let chain = config.chain_table().get(conference.name()).clone();
        let unplayed = conference.unplayed_games();

        let standings = current_standings(conference, &chain, config.seed);
        let scenarios = enumerate(conference, &chain, &config.enumeration_options());
        let reports = analyze_all_teams(
            &scenarios,
            &unplayed,
            conference.teams(),
            &config.analysis_options(),
        );

        let analysis = Analysis {
            conference: conference.name().to_string(),
            chain,
            standings,
            unplayed: unplayed.into_iter().cloned().collect(),
            scenarios,
            reports,
        };
        info!(
            "{}: {} of {} teams can still finish top two",
            analysis.conference,
            analysis.contenders().len(),
            analysis.reports.len()
        );
        analysis
    }

    pub fn report(&self, team: &str) -> Option<&ConditionReport> {
        self.reports.get(team)
    }

    /// Teams that finish top two in at least one scenario, most often first.
    pub fn contenders(&self) -> Vec<&ConditionReport> {
        let mut contenders: Vec<&ConditionReport> = self
            .reports
            .values()
            .filter(|r| r.can_finish_top_two())
            .collect();
        contenders.sort_by(|a, b| {
            b.top_two_scenarios
                .cmp(&a.top_two_scenarios)
                .then_with(|| a.team.cmp(&b.team))
        });
        contenders
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conditions::Outlook;

    fn names(teams: &[&str]) -> Vec<String> {
        teams.iter().map(|s| s.to_string()).collect()
    }

    fn late_season() -> Conference {
        let games = vec![
            Game::played(1, "A", "B"),
            Game::played(2, "A", "C"),
            Game::played(3, "B", "D"),
            Game::played(4, "C", "D"),
            Game::unplayed(5, "A", "D"),
            Game::unplayed(6, "B", "C"),
        ];
        Conference::new("Big 12", names(&["A", "B", "C", "D"]), games).unwrap()
    }

    #[test]
    fn test_run_reports_every_team() {
        let analysis = Analysis::run(&late_season(), &EngineConfig::default().seeded(42));

        assert_eq!(analysis.scenarios.len(), 4);
        assert_eq!(analysis.unplayed.len(), 2);
        assert_eq!(analysis.reports.len(), 4);
        assert_eq!(analysis.chain.codes(), "ABCD");

        assert_eq!(analysis.report("A").unwrap().outlook, Outlook::Clinched);
        assert_eq!(analysis.report("D").unwrap().outlook, Outlook::Eliminated);
        assert!(analysis.report("Nobody").is_none());

        let contenders: Vec<&str> = analysis.contenders().iter().map(|r| r.team.as_str()).collect();
        assert_eq!(contenders, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_current_standings_resolve_ties() {
        // B and C are both 1-1 with no meeting yet; D 0-2 below
        let standings = current_standings(&late_season(), &RuleChain::default(), Some(1));
        let order: Vec<&str> = standings.records.iter().map(|r| r.team.as_str()).collect();
        assert_eq!(order[0], "A");
        assert_eq!(order[3], "D");
        assert_eq!(standings.records.len(), 4);
    }

    #[test]
    fn test_analyze_all_teams_matches_single_analysis() {
        let conf = late_season();
        let scenarios = enumerate(&conf, &RuleChain::default(), &EngineConfig::default().seeded(3).enumeration_options());
        let unplayed = conf.unplayed_games();
        let options = AnalysisOptions::default();

        let all = analyze_all_teams(&scenarios, &unplayed, conf.teams(), &options);
        for team in conf.teams() {
            assert_eq!(all[team], analyze(&scenarios, &unplayed, team, &options));
        }
    }

    #[test]
    fn test_refused_enumeration_leaves_everyone_undetermined() {
        let mut config = EngineConfig::default();
        config.max_unplayed_games = 1;
        let analysis = Analysis::run(&late_season(), &config);

        assert!(analysis.scenarios.is_empty());
        assert!(analysis.reports.values().all(|r| r.outlook == Outlook::Undetermined));
        assert!(analysis.contenders().is_empty());
    }

    #[test]
    fn test_to_json() {
        let analysis = Analysis::run(&late_season(), &EngineConfig::default().seeded(42));
        let json = analysis.to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["conference"], "Big 12");
        assert_eq!(value["reports"]["A"]["outlook"], "Clinched");
        assert_eq!(value["scenarios"].as_array().unwrap().len(), 4);
        assert_eq!(value["chain"]["rules"][0], "A");
    }
}
