use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::constants::{COIN_TOSS_CODE, DEFAULT_CHAIN};
use crate::error::{ClinchError, Result};

/// A tie-break rule, identified by its single-letter code.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rule {
    /// A: head-to-head result, or round-robin record within the group
    #[serde(rename = "A")]
    HeadToHead,

    /// B: win fraction against common opponents
    #[serde(rename = "B")]
    CommonOpponents,

    /// C: win fraction against the next-highest-placed teams, level by level
    #[serde(rename = "C")]
    NextHighestOpponents,

    /// D: combined win fraction of all opponents played
    #[serde(rename = "D")]
    OpponentStrength,

    /// R: random draw. Ends the chain wherever it appears.
    #[serde(rename = "R")]
    CoinToss,
}

impl Rule {
    pub fn code(&self) -> &'static str {
        match self {
            Rule::HeadToHead => "A",
            Rule::CommonOpponents => "B",
            Rule::NextHighestOpponents => "C",
            Rule::OpponentStrength => "D",
            Rule::CoinToss => COIN_TOSS_CODE,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Rule::HeadToHead => "head-to-head",
            Rule::CommonOpponents => "record vs common opponents",
            Rule::NextHighestOpponents => "record vs next-highest-placed opponents",
            Rule::OpponentStrength => "combined opponent win percentage",
            Rule::CoinToss => "random draw",
        }
    }
}

impl FromStr for Rule {
    type Err = ClinchError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "A" => Ok(Rule::HeadToHead),
            "B" => Ok(Rule::CommonOpponents),
            "C" => Ok(Rule::NextHighestOpponents),
            "D" => Ok(Rule::OpponentStrength),
            "R" => Ok(Rule::CoinToss),
            _ => Err(ClinchError::UnknownRule(s.to_string())),
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Ordered tie-break rules for one conference.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleChain {
    pub rules: Vec<Rule>,

    /// Let rule A drop a team that lost to every other tied team to the bottom
    #[serde(default)]
    pub sweep_to_bottom: bool,
}

impl RuleChain {
    pub fn new(rules: Vec<Rule>) -> Self {
        RuleChain {
            rules,
            sweep_to_bottom: false,
        }
    }

    /// Parse a chain from its codes, e.g. "ACBD".
    pub fn from_codes(codes: &str) -> Result<Self> {
        let rules = codes
            .chars()
            .filter(|c| !c.is_whitespace() && *c != ',')
            .map(|c| c.to_string().parse())
            .collect::<Result<Vec<Rule>>>()?;
        Ok(RuleChain::new(rules))
    }

    pub fn with_sweep_to_bottom(mut self) -> Self {
        self.sweep_to_bottom = true;
        self
    }

    pub fn codes(&self) -> String {
        self.rules.iter().map(Rule::code).collect()
    }
}

impl Default for RuleChain {
    fn default() -> Self {
        RuleChain::new(DEFAULT_CHAIN.to_vec())
    }
}

/// Conference name to tie-break chain lookup.
///
/// Keys are normalized to lowercase alphanumerics, so "Big 12", "big-12"
/// and "BIG12" all name the same chain. Unknown conferences fall back to
/// the default chain.
#[derive(Clone, Debug, Default)]
pub struct ChainTable {
    chains: HashMap<String, RuleChain>,
    default: RuleChain,
}

impl ChainTable {
    /// An empty table; every conference resolves to the default chain.
    pub fn new() -> Self {
        ChainTable::default()
    }

    /// Table seeded with the built-in conference presets.
    pub fn presets() -> Self {
        use Rule::*;
        let mut table = ChainTable::new();
        table.insert(
            "ACC",
            RuleChain::new(vec![HeadToHead, CommonOpponents, NextHighestOpponents, OpponentStrength])
                .with_sweep_to_bottom(),
        );
        table.insert(
            "Big 12",
            RuleChain::new(vec![HeadToHead, CommonOpponents, NextHighestOpponents, OpponentStrength]),
        );
        table.insert(
            "Big Ten",
            RuleChain::new(vec![HeadToHead, CommonOpponents, NextHighestOpponents]),
        );
        // Order of finish is checked before common opponents
        table.insert(
            "SEC",
            RuleChain::new(vec![HeadToHead, NextHighestOpponents, CommonOpponents, OpponentStrength]),
        );
        table
    }

    /// Read chains from a TOML file and add them to the table.
    ///
    /// Format: one table per conference, e.g.
    /// `[acc]` / `rules = ["A", "B", "C", "D"]` / `sweep_to_bottom = true`.
    pub fn read_from_file(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let contents = std::fs::read_to_string(path)?;
        let chains: HashMap<String, RuleChain> = toml::from_str(&contents)?;
        self.extend(chains);
        Ok(())
    }

    pub fn extend(&mut self, chains: HashMap<String, RuleChain>) {
        for (conference, chain) in chains {
            self.insert(&conference, chain);
        }
    }

    /// Add or replace the chain for a conference.
    pub fn insert(&mut self, conference: &str, chain: RuleChain) {
        self.chains.insert(normalize_key(conference), chain);
    }

    pub fn remove(&mut self, conference: &str) -> Option<RuleChain> {
        self.chains.remove(&normalize_key(conference))
    }

    /// Chain for a conference, or the default chain.
    pub fn get(&self, conference: &str) -> &RuleChain {
        self.chains.get(&normalize_key(conference)).unwrap_or(&self.default)
    }

    pub fn contains(&self, conference: &str) -> bool {
        self.chains.contains_key(&normalize_key(conference))
    }

    pub fn set_default(&mut self, chain: RuleChain) {
        self.default = chain;
    }

    pub fn default_chain(&self) -> &RuleChain {
        &self.default
    }

    pub fn len(&self) -> usize {
        self.chains.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chains.is_empty()
    }
}

fn normalize_key(conference: &str) -> String {
    conference
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}
