//! Errors raised at the edges of the engine.
//!
//! The enumeration and analysis pipeline itself never fails; only schedule
//! construction, configuration loading and export can.

use thiserror::Error;

/// Result type used throughout the crate
pub type Result<T> = std::result::Result<T, ClinchError>;

#[derive(Debug, Error)]
pub enum ClinchError {
    #[error("game {game} names unknown team: {team}")]
    UnknownTeam { game: u32, team: String },

    #[error("game {game} pairs {team} against itself")]
    SelfMatch { game: u32, team: String },

    #[error("duplicate game id: {0}")]
    DuplicateGame(u32),

    #[error("unknown tie-break rule code: {0}")]
    UnknownRule(String),

    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid configuration: {0}")]
    Config(#[from] toml::de::Error),

    #[error("serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}
