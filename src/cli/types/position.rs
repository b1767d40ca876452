//! Fantasy football position types.

use crate::error::RankingsError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Base position codes a ranking line can resolve to.
///
/// `DEF` and `D/ST` are accepted on input and always normalize to [`Position::DST`].
///
/// # Examples
///
/// ```rust
/// use ffl_rankings::Position;
///
/// let dst: Position = "def".parse().unwrap();
/// assert_eq!(dst, Position::DST);
/// assert_eq!(dst.to_string(), "DST");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Position {
    QB,
    RB,
    WR,
    TE,
    K,
    DST,
}

impl Position {
    /// The fixed set of positions shown in grouped output, in display order.
    pub const DISPLAY_ORDER: [Position; 6] = [
        Position::QB,
        Position::RB,
        Position::WR,
        Position::TE,
        Position::K,
        Position::DST,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Position::QB => "QB",
            Position::RB => "RB",
            Position::WR => "WR",
            Position::TE => "TE",
            Position::K => "K",
            Position::DST => "DST",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Position {
    type Err = RankingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "QB" => Ok(Position::QB),
            "RB" => Ok(Position::RB),
            "WR" => Ok(Position::WR),
            "TE" => Ok(Position::TE),
            "K" => Ok(Position::K),
            "DST" | "DEF" | "D/ST" => Ok(Position::DST),
            _ => Err(RankingsError::InvalidPosition {
                position: s.to_string(),
            }),
        }
    }
}
