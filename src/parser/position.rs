//! Position token matching (`WR3`, `qb`, `DEF`, `K`).

use crate::cli::types::{ids::PositionalRank, position::Position};

/// Position prefixes in match order. `DEF` sits last and folds into `DST`.
const POSITION_CODES: [(&str, Position); 7] = [
    ("QB", Position::QB),
    ("RB", Position::RB),
    ("WR", Position::WR),
    ("TE", Position::TE),
    ("K", Position::K),
    ("DST", Position::DST),
    ("DEF", Position::DST),
];

/// A token recognized as a position, with the positional rank if one was attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionMatch {
    pub position: Position,
    pub positional_rank: Option<PositionalRank>,
}

/// Decide whether `token` encodes a position and optional positional rank.
///
/// Comparison is case-insensitive. After the position prefix the token may
/// only carry digits; anything else (`KC`, `TEN`, `WR3a`) rules that prefix
/// out and the next code is tried.
///
/// # Examples
///
/// ```rust
/// use ffl_rankings::{parser::position::match_position, Position};
///
/// let m = match_position("wr12").unwrap();
/// assert_eq!(m.position, Position::WR);
/// assert_eq!(m.positional_rank.map(|r| r.as_u32()), Some(12));
///
/// assert!(match_position("KC").is_none());
/// ```
pub fn match_position(token: &str) -> Option<PositionMatch> {
    let upper = token.to_uppercase();

    POSITION_CODES.iter().find_map(|&(code, position)| {
        let rest = upper.strip_prefix(code)?;
        if rest.is_empty() {
            return Some(PositionMatch {
                position,
                positional_rank: None,
            });
        }
        if !rest.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        // Positional ranks start at 1; `WR0` or an overflowing number keeps the position only.
        Some(PositionMatch {
            position,
            positional_rank: rest
                .parse::<u32>()
                .ok()
                .filter(|&n| n > 0)
                .map(PositionalRank::new),
        })
    })
}
