//! Error types for the fantasy football rankings tool

use thiserror::Error;

pub type Result<T> = std::result::Result<T, RankingsError>;

#[derive(Error, Debug)]
pub enum RankingsError {
    #[error("Failed to parse rankings; check the format of the pasted list")]
    ParseFailed,

    #[error("Storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid position: {position}")]
    InvalidPosition { position: String },

    #[error("Invalid rank: {value:?}")]
    InvalidRank { value: String },

    #[error("Team not found: {name}")]
    TeamNotFound { name: String },

    #[error("Team already exists: {name}")]
    TeamExists { name: String },

    #[error("Team name must not be empty")]
    EmptyTeamName,

    #[error("Store path not provided and no data directory could be determined (set {env_var})")]
    MissingStorePath { env_var: String },
}
