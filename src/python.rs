//! Python bindings.
//!
//! Results cross the boundary as plain tuples and lists so the host
//! application never depends on Rust-side classes beyond `Conference`.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::analysis::{current_standings, Analysis};
use crate::conditions::{analyze, Condition};
use crate::conference::Conference;
use crate::config::EngineConfig;
use crate::error::ClinchError;
use crate::game::Game;
use crate::scenario::{enumerate, EnumerationOptions};

impl From<ClinchError> for PyErr {
    fn from(err: ClinchError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}

/// (id, winner, loser, winner_score, loser_score, played)
type GameTuple = (u32, String, String, Option<u32>, Option<u32>, bool);

/// (game id, required winner) pairs of one condition
type ConditionTuple = Vec<(u32, String)>;

fn condition_tuples(conditions: &[Condition]) -> Vec<ConditionTuple> {
    conditions
        .iter()
        .map(|c| c.results.iter().map(|r| (r.game_id, r.winner.clone())).collect())
        .collect()
}

#[pyclass(name = "Conference")]
#[derive(Clone)]
pub struct PyConference {
    inner: Conference,
    config: EngineConfig,
}

#[pymethods]
impl PyConference {
    #[new]
    #[pyo3(signature = (name, teams, games, config_path = None))]
    fn new(
        name: &str,
        teams: Vec<String>,
        games: Vec<GameTuple>,
        config_path: Option<&str>,
    ) -> PyResult<Self> {
        let games = games
            .into_iter()
            .map(|(id, winner, loser, winner_score, loser_score, played)| Game {
                id,
                winner,
                loser,
                winner_score,
                loser_score,
                played,
            })
            .collect();
        let config = match config_path {
            Some(path) => EngineConfig::load(path)?,
            None => EngineConfig::default(),
        };
        Ok(PyConference {
            inner: Conference::new(name, teams, games)?,
            config,
        })
    }

    /// Current standings as (team, wins, losses, win fraction), ties resolved.
    #[pyo3(signature = (seed = None))]
    fn standings(&self, seed: Option<u64>) -> Vec<(String, u32, u32, f64)> {
        let chain = self.config.chain_table().get(self.inner.name()).clone();
        current_standings(&self.inner, &chain, seed.or(self.config.seed))
            .records
            .into_iter()
            .map(|r| (r.team, r.wins, r.losses, r.win_fraction))
            .collect()
    }

    /// Every scenario as (home-wins flags, resolved order, rule codes).
    #[pyo3(signature = (seed = None))]
    fn enumerate(&self, seed: Option<u64>) -> Vec<(Vec<bool>, Vec<String>, Vec<String>)> {
        let chain = self.config.chain_table().get(self.inner.name()).clone();
        let options = self.options(seed);
        enumerate(&self.inner, &chain, &options)
            .into_iter()
            .map(|s| {
                (
                    s.outcomes.iter().map(|o| o.bit()).collect(),
                    s.standings.into_iter().map(|r| r.team).collect(),
                    s.rules.iter().map(|r| r.code().to_string()).collect(),
                )
            })
            .collect()
    }

    /// (outlook, sufficient conditions, blocking conditions) for one team.
    #[pyo3(signature = (team, seed = None, max_depth = None))]
    fn conditions(
        &self,
        team: &str,
        seed: Option<u64>,
        max_depth: Option<usize>,
    ) -> (String, Vec<ConditionTuple>, Vec<ConditionTuple>) {
        let chain = self.config.chain_table().get(self.inner.name()).clone();
        let scenarios = enumerate(&self.inner, &chain, &self.options(seed));

        let mut analysis_options = self.config.analysis_options();
        if let Some(depth) = max_depth {
            analysis_options.max_depth = depth;
        }
        let report = analyze(&scenarios, &self.inner.unplayed_games(), team, &analysis_options);
        (
            format!("{:?}", report.outlook),
            condition_tuples(&report.sufficient),
            condition_tuples(&report.blocking),
        )
    }

    /// Full analysis serialized as JSON.
    #[pyo3(signature = (seed = None))]
    fn analyze_json(&self, seed: Option<u64>) -> PyResult<String> {
        let mut config = self.config.clone();
        config.seed = seed.or(config.seed);
        Ok(Analysis::run(&self.inner, &config).to_json()?)
    }

    fn __repr__(&self) -> String {
        format!(
            "Conference({:?}, {} teams, {} unplayed games)",
            self.inner.name(),
            self.inner.teams().len(),
            self.inner.unplayed_count()
        )
    }
}

impl PyConference {
    fn options(&self, seed: Option<u64>) -> EnumerationOptions {
        let mut options = self.config.enumeration_options();
        options.seed = seed.or(options.seed);
        options
    }
}
