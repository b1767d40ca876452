//! Single-line classification: rank, name, position and team.

use std::fmt;

use tracing::debug;

use super::{
    position::{match_position, PositionMatch},
    PlayerRecord,
};
use crate::cli::types::{
    ids::{Rank, TeamAbbr},
    strategy::Strategy,
};

/// Opponent annotations that end the useful part of a line.
const MATCHUP_MARKERS: [&str; 2] = [" vs ", " @ "];

/// Why a line produced no record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineSkip {
    /// Fewer than two tokens after matchup stripping.
    TooFewTokens,
    /// First token is not a rank.
    MissingRank,
    /// No position in the place the strategy looks.
    MissingPosition,
    /// A trailing team abbreviation with no position next to it.
    TeamWithoutPosition,
    /// Rank and position resolved but nothing left for the name.
    EmptyName,
}

impl fmt::Display for LineSkip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LineSkip::TooFewTokens => "too few tokens",
            LineSkip::MissingRank => "no leading rank",
            LineSkip::MissingPosition => "no position token",
            LineSkip::TeamWithoutPosition => "team without adjacent position",
            LineSkip::EmptyName => "empty player name",
        };
        write!(f, "{}", s)
    }
}

/// Where the name ends and what was found after it.
struct Resolution {
    name_end: usize,
    found: PositionMatch,
    team: Option<TeamAbbr>,
}

/// Cut the line at the first matchup marker (`" vs "` or `" @ "`).
pub fn strip_matchup(line: &str) -> &str {
    MATCHUP_MARKERS
        .iter()
        .filter_map(|marker| line.find(marker))
        .min()
        .map_or(line, |idx| &line[..idx])
}

/// Parse one ranking line, returning `None` for anything that can't be resolved.
pub fn parse_line(line: &str, strategy: Strategy) -> Option<PlayerRecord> {
    if line.trim().is_empty() {
        return None;
    }

    match classify_line(line, strategy) {
        Ok(record) => Some(record),
        Err(reason) => {
            debug!(%reason, %strategy, line, "skipping ranking line");
            None
        }
    }
}

/// Like [`parse_line`] but reports why a line was dropped.
pub fn classify_line(line: &str, strategy: Strategy) -> Result<PlayerRecord, LineSkip> {
    // split_whitespace treats tabs as separators, which covers tab-delimited pastes.
    let tokens: Vec<&str> = strip_matchup(line).split_whitespace().collect();
    if tokens.len() < 2 {
        return Err(LineSkip::TooFewTokens);
    }

    let rank: Rank = tokens[0].parse().map_err(|_| LineSkip::MissingRank)?;
    let rest = &tokens[1..];

    let Resolution {
        name_end,
        found,
        team,
    } = match strategy {
        Strategy::TeamAware => resolve_team_aware(rest)?,
        Strategy::Basic => resolve_basic(rest)?,
    };

    let name = rest[..name_end].join(" ");
    if name.is_empty() {
        return Err(LineSkip::EmptyName);
    }

    Ok(PlayerRecord {
        rank,
        name,
        position: found.position,
        positional_rank: found.positional_rank,
        team,
    })
}

fn resolve_team_aware(rest: &[&str]) -> Result<Resolution, LineSkip> {
    let n = rest.len();
    let last = rest[n - 1];
    let second_last = n.checked_sub(2).map(|i| rest[i]);

    if let Some(found) = match_position(last) {
        return Ok(match second_last.and_then(TeamAbbr::parse) {
            Some(team) => Resolution {
                name_end: n - 2,
                found,
                team: Some(team),
            },
            None => Resolution {
                name_end: n - 1,
                found,
                team: None,
            },
        });
    }

    if let Some(team) = TeamAbbr::parse(last) {
        return match second_last.and_then(match_position) {
            Some(found) => Ok(Resolution {
                name_end: n - 2,
                found,
                team: Some(team),
            }),
            None => Err(LineSkip::TeamWithoutPosition),
        };
    }

    Err(LineSkip::MissingPosition)
}

fn resolve_basic(rest: &[&str]) -> Result<Resolution, LineSkip> {
    rest.iter()
        .enumerate()
        .rev()
        .find_map(|(idx, token)| match_position(token).map(|found| (idx, found)))
        .map(|(name_end, found)| Resolution {
            name_end,
            found,
            team: None,
        })
        .ok_or(LineSkip::MissingPosition)
}
