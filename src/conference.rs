use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::error::{ClinchError, Result};
use crate::game::{Game, Outcome};
use crate::standings::{standings, TeamRecord};

/// A conference schedule: its teams and every game, played or not.
///
/// The game list is never mutated after construction; scenarios work on
/// derived copies produced by [`Conference::with_outcomes`].
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(try_from = "ConferenceData")]
pub struct Conference {
    name: String,
    teams: Vec<String>,
    games: Vec<Game>,
}

/// Unvalidated wire shape of a [`Conference`].
#[derive(Deserialize)]
struct ConferenceData {
    name: String,
    teams: Vec<String>,
    games: Vec<Game>,
}

impl TryFrom<ConferenceData> for Conference {
    type Error = ClinchError;

    fn try_from(data: ConferenceData) -> Result<Self> {
        Conference::new(&data.name, data.teams, data.games)
    }
}

impl Conference {
    /// Build a conference, validating that every game pairs two distinct
    /// listed teams and that game ids are unique.
    ///
    /// Repeated team names are collapsed, keeping first-seen order.
    pub fn new(name: &str, teams: Vec<String>, games: Vec<Game>) -> Result<Self> {
        let mut seen = HashSet::new();
        let teams: Vec<String> = teams
            .into_iter()
            .filter(|team| seen.insert(team.clone()))
            .collect();

        let mut ids = HashSet::new();
        for game in &games {
            if !ids.insert(game.id) {
                return Err(ClinchError::DuplicateGame(game.id));
            }
            for team in [&game.winner, &game.loser] {
                if !seen.contains(team) {
                    return Err(ClinchError::UnknownTeam {
                        game: game.id,
                        team: team.clone(),
                    });
                }
            }
            if game.winner == game.loser {
                return Err(ClinchError::SelfMatch {
                    game: game.id,
                    team: game.winner.clone(),
                });
            }
        }

        Ok(Conference {
            name: name.to_string(),
            teams,
            games,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn teams(&self) -> &[String] {
        &self.teams
    }

    pub fn games(&self) -> &[Game] {
        &self.games
    }

    pub fn played_games(&self) -> Vec<&Game> {
        self.games.iter().filter(|g| g.played).collect()
    }

    /// Unplayed games in schedule order. This order fixes the meaning of
    /// every outcome vector.
    pub fn unplayed_games(&self) -> Vec<&Game> {
        self.games.iter().filter(|g| !g.played).collect()
    }

    pub fn unplayed_count(&self) -> usize {
        self.games.iter().filter(|g| !g.played).count()
    }

    /// Fully played copy of the schedule, with the unplayed games decided
    /// by `outcomes` in order.
    ///
    /// Missing outcomes leave the remaining unplayed games unplayed.
    pub fn with_outcomes(&self, outcomes: &[Outcome]) -> Vec<Game> {
        let mut pending = outcomes.iter();
        self.games
            .iter()
            .map(|game| {
                if game.played {
                    game.clone()
                } else {
                    match pending.next() {
                        Some(&outcome) => game.resolved(outcome),
                        None => game.clone(),
                    }
                }
            })
            .collect()
    }

    /// Current standings from played games only, before tie resolution.
    pub fn standings(&self) -> Vec<TeamRecord> {
        standings(&self.teams, &self.games)
    }
}
