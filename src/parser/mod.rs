//! Ranking-list parser.
//!
//! Turns pasted, whitespace-delimited ranking text into [`PlayerRecord`]s:
//! - `position`: position token matching (`WR3`, `DEF`)
//! - `team`: team abbreviation matching (`KC`, `PHI`)
//! - `line`: per-line classification under a [`Strategy`]
//!
//! Lines are independent. A line that can't be resolved is dropped and the
//! rest of the input is still parsed.

pub mod line;
pub mod position;
pub mod team;


use std::panic;

use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::{
    cli::types::{
        ids::{PositionalRank, Rank, TeamAbbr},
        position::Position,
    },
    error::{RankingsError, Result},
};

pub use crate::cli::types::strategy::Strategy;
pub use line::parse_line;

/// One player parsed from a ranking line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerRecord {
    pub rank: Rank,
    pub name: String,
    pub position: Position,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub positional_rank: Option<PositionalRank>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team: Option<TeamAbbr>,
}

/// Parse every line of `text` with the team-aware strategy.
///
/// Output follows input line order. Blank input yields an empty list.
///
/// # Examples
///
/// ```rust
/// use ffl_rankings::parser::parse_rankings;
///
/// let text = "1. Christian McCaffrey SF RB1\n2. CeeDee Lamb WR1 vs NYG\nTier 2\n";
/// let players = parse_rankings(text).unwrap();
/// assert_eq!(players.len(), 2);
/// assert_eq!(players[1].name, "CeeDee Lamb");
/// ```
pub fn parse_rankings(text: &str) -> Result<Vec<PlayerRecord>> {
    parse_rankings_with(text, Strategy::default())
}

/// Parse every line of `text` with the given strategy.
///
/// Dropped lines never fail the batch. [`RankingsError::ParseFailed`] only
/// comes from a panic during the scan; the default panic hook still reports
/// it on stderr, and nothing parsed before it is returned.
pub fn parse_rankings_with(text: &str, strategy: Strategy) -> Result<Vec<PlayerRecord>> {
    scan_lines(text, strategy, |line| parse_line(line, strategy))
}

/// Run `per_line` over every line, turning a panic into a batch failure.
pub(crate) fn scan_lines<F>(
    text: &str,
    strategy: Strategy,
    per_line: F,
) -> Result<Vec<PlayerRecord>>
where
    F: Fn(&str) -> Option<PlayerRecord> + panic::RefUnwindSafe,
{
    let scanned =
        panic::catch_unwind(|| text.lines().filter_map(&per_line).collect::<Vec<_>>());

    match scanned {
        Ok(records) => {
            info!(
                records = records.len(),
                lines = text.lines().count(),
                %strategy,
                "parsed rankings"
            );
            Ok(records)
        }
        Err(_) => {
            error!(%strategy, "ranking batch aborted");
            Err(RankingsError::ParseFailed)
        }
    }
}
