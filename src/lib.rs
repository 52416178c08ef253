//! Clinch Core - title-game race analysis for round-robin conferences.
//!
//! Given a partly played conference schedule, this library enumerates every
//! result of the remaining games, ranks each outcome with the conference's
//! tie-break rules, and derives the smallest combinations of results that
//! guarantee or rule out a top-two finish for each team.
//!
//! Python bindings are available behind the `python` feature.

pub mod analysis;
pub mod chains;
pub mod conditions;
pub mod conference;
pub mod config;
pub mod constants;
pub mod error;
pub mod game;
pub mod scenario;
pub mod standings;
pub mod tiebreak;

#[cfg(feature = "python")]
pub mod python;

pub use analysis::{analyze_all_teams, current_standings, Analysis};
pub use chains::{ChainTable, Rule, RuleChain};
pub use conditions::{analyze, AnalysisOptions, Condition, ConditionReport, Outlook, RequiredResult};
pub use conference::Conference;
pub use config::EngineConfig;
pub use constants::{MAX_CONDITION_DEPTH, MAX_CONDITION_GAMES, MAX_UNPLAYED_GAMES, QUALIFYING_PLACES};
pub use error::{ClinchError, Result};
pub use game::{Game, Outcome};
pub use scenario::{enumerate, EnumerationOptions, Scenario};
pub use standings::{standings, TeamRecord};
pub use tiebreak::{resolve_group, resolve_standings, Resolution, ResolvedStandings, TieBreakResult};

#[cfg(feature = "python")]
use pyo3::prelude::*;

/// Python module definition
#[cfg(feature = "python")]
#[pymodule]
fn clinch_core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    // Classes
    m.add_class::<python::PyConference>()?;

    // Constants
    m.add("MAX_UNPLAYED_GAMES", MAX_UNPLAYED_GAMES)?;
    m.add("MAX_CONDITION_GAMES", MAX_CONDITION_GAMES)?;
    m.add("MAX_CONDITION_DEPTH", MAX_CONDITION_DEPTH)?;

    Ok(())
}
