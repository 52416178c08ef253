use serde::{Deserialize, Serialize};

/// Result of an unplayed game, relative to its two schedule slots.
///
/// The first slot (`winner`) is the home slot and the second (`loser`) the
/// away slot. For played games the slots already hold the real result.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Outcome {
    HomeWins,
    AwayWins,
}

impl Outcome {
    /// Outcome encoded by a single enumeration bit (set = home slot wins)
    pub fn from_bit(bit: bool) -> Self {
        if bit {
            Outcome::HomeWins
        } else {
            Outcome::AwayWins
        }
    }

    pub fn bit(self) -> bool {
        matches!(self, Outcome::HomeWins)
    }

    pub fn flipped(self) -> Self {
        match self {
            Outcome::HomeWins => Outcome::AwayWins,
            Outcome::AwayWins => Outcome::HomeWins,
        }
    }
}

/// A single conference game.
///
/// While `played` is false, `winner` and `loser` are only slot labels in a
/// fixed order; see [`Outcome`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    pub id: u32,

    pub winner: String,

    pub loser: String,

    #[serde(default)]
    pub winner_score: Option<u32>,

    #[serde(default)]
    pub loser_score: Option<u32>,

    pub played: bool,
}

impl Game {
    /// Create a completed game.
    pub fn played(id: u32, winner: &str, loser: &str) -> Self {
        Game {
            id,
            winner: winner.to_string(),
            loser: loser.to_string(),
            winner_score: None,
            loser_score: None,
            played: true,
        }
    }

    /// Create an unplayed game between `home` and `away`.
    pub fn unplayed(id: u32, home: &str, away: &str) -> Self {
        Game {
            id,
            winner: home.to_string(),
            loser: away.to_string(),
            winner_score: None,
            loser_score: None,
            played: false,
        }
    }

    /// Attach a final score to a game
    pub fn with_score(mut self, winner_score: u32, loser_score: u32) -> Self {
        self.winner_score = Some(winner_score);
        self.loser_score = Some(loser_score);
        self
    }

    pub fn home(&self) -> &str {
        &self.winner
    }

    pub fn away(&self) -> &str {
        &self.loser
    }

    pub fn involves(&self, team: &str) -> bool {
        self.winner == team || self.loser == team
    }

    /// The other participant, if `team` plays in this game.
    pub fn opponent_of(&self, team: &str) -> Option<&str> {
        if self.winner == team {
            Some(&self.loser)
        } else if self.loser == team {
            Some(&self.winner)
        } else {
            None
        }
    }

    /// Team that wins this game under `outcome`
    pub fn winner_under(&self, outcome: Outcome) -> &str {
        match outcome {
            Outcome::HomeWins => &self.winner,
            Outcome::AwayWins => &self.loser,
        }
    }

    /// Team that loses this game under `outcome`
    pub fn loser_under(&self, outcome: Outcome) -> &str {
        match outcome {
            Outcome::HomeWins => &self.loser,
            Outcome::AwayWins => &self.winner,
        }
    }

    /// A played copy of this game with the result decided by `outcome`.
    ///
    /// Scores are dropped since an enumerated result has none.
    pub fn resolved(&self, outcome: Outcome) -> Game {
        Game {
            id: self.id,
            winner: self.winner_under(outcome).to_string(),
            loser: self.loser_under(outcome).to_string(),
            winner_score: None,
            loser_score: None,
            played: true,
        }
    }
}
