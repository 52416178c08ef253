//! Engine configuration.
//!
//! Every field has a default, so an empty TOML document is a valid config.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

use crate::chains::{ChainTable, RuleChain};
use crate::conditions::AnalysisOptions;
use crate::constants::{MAX_CONDITION_DEPTH, MAX_CONDITION_GAMES, MAX_UNPLAYED_GAMES};
use crate::error::Result;
use crate::scenario::EnumerationOptions;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Largest number of unplayed games to enumerate
    pub max_unplayed_games: usize,

    /// Largest number of unplayed games to search for conditions
    pub max_condition_games: usize,

    /// Most required results per condition
    pub max_depth: usize,

    /// Seed for random tie-break draws
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,

    /// Per-conference chains, layered over the built-in presets
    pub chains: HashMap<String, RuleChain>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_unplayed_games: MAX_UNPLAYED_GAMES,
            max_condition_games: MAX_CONDITION_GAMES,
            max_depth: MAX_CONDITION_DEPTH,
            seed: None,
            chains: HashMap::new(),
        }
    }
}

impl EngineConfig {
    /// Load from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    pub fn seeded(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Built-in presets with this config's chains applied on top.
    pub fn chain_table(&self) -> ChainTable {
        let mut table = ChainTable::presets();
        table.extend(self.chains.clone());
        table
    }

    pub fn enumeration_options(&self) -> EnumerationOptions {
        EnumerationOptions {
            max_unplayed_games: self.max_unplayed_games,
            seed: self.seed,
        }
    }

    pub fn analysis_options(&self) -> AnalysisOptions {
        AnalysisOptions {
            max_condition_games: self.max_condition_games,
            max_depth: self.max_depth,
        }
    }
}
