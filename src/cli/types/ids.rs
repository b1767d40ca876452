//! Rank and team identifier types for parsed ranking lists.

use crate::error::{RankingsError, Result};
use crate::parser::team::is_team_token;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Overall rank of a player as stated on a ranking line.
///
/// Parsing accepts the list markers people paste alongside the number,
/// so `"12."` and `"12)"` both read as rank 12.
///
/// # Examples
///
/// ```rust
/// use ffl_rankings::Rank;
///
/// let rank: Rank = "3.".parse().unwrap();
/// assert_eq!(rank.as_u32(), 3);
/// assert!("QB1".parse::<Rank>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rank(pub u32);

impl Rank {
    pub fn new(rank: u32) -> Self {
        Self(rank)
    }

    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Rank {
    type Err = RankingsError;

    fn from_str(s: &str) -> Result<Self> {
        let digits = s
            .strip_suffix('.')
            .or_else(|| s.strip_suffix(')'))
            .unwrap_or(s);

        let invalid = || RankingsError::InvalidRank {
            value: s.to_string(),
        };

        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }

        match digits.parse::<u32>() {
            Ok(0) | Err(_) => Err(invalid()),
            Ok(n) => Ok(Self(n)),
        }
    }
}

/// Rank of a player within their position group (the `3` in `WR3`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PositionalRank(pub u32);

impl PositionalRank {
    pub fn new(rank: u32) -> Self {
        Self(rank)
    }

    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for PositionalRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Two or three letter uppercase team abbreviation, e.g. `KC` or `PHI`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TeamAbbr(String);

impl TeamAbbr {
    /// Accept `token` only if it already looks like a team abbreviation.
    pub fn parse(token: &str) -> Option<Self> {
        is_team_token(token).then(|| Self(token.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TeamAbbr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
