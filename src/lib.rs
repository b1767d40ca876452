//! Fantasy Football Rankings Library
//!
//! Parses free-form, pasted fantasy football ranking lists into structured
//! player records, and keeps track of favorite players and saved teams.
//!
//! ## Features
//!
//! - **Format-tolerant parsing**: rank markers like `12.` or `12)`, `POS TEAM`
//!   and `TEAM POS` layouts, positional ranks (`WR3`), matchup suffixes (`vs DEN`)
//! - **Skip, don't fail**: lines that can't be resolved are dropped; the rest still parse
//! - **Position grouping**: QB, RB, WR, TE, K and DST display groups
//! - **Saved state**: favorites, teams and the last pasted input in a local SQLite store
//!
//! ## Quick Start
//!
//! ```rust
//! use ffl_rankings::{parse_rankings, Position};
//!
//! let players = parse_rankings("5 Patrick Mahomes KC QB1\n3. Tyreek Hill WR2").unwrap();
//! assert_eq!(players[0].position, Position::QB);
//! assert_eq!(players[0].team.as_ref().map(|t| t.as_str()), Some("KC"));
//! assert!(players[1].team.is_none());
//! ```
//!
//! ## Environment Configuration
//!
//! Point the CLI at a specific store file instead of the platform data dir:
//! ```bash
//! export FFL_RANKINGS_STORE=~/rankings.db
//! ```

pub mod cli;
pub mod commands;
pub mod core;
pub mod error;
pub mod logging;
pub mod parser;
pub mod storage;

// Re-export commonly used types
pub use cli::types::{
    ids::{PositionalRank, Rank, TeamAbbr},
    position::Position,
};
pub use error::{RankingsError, Result};
pub use parser::{parse_rankings, parse_rankings_with, PlayerRecord, Strategy};

pub const STORE_ENV_VAR: &str = "FFL_RANKINGS_STORE";
