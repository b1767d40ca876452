//! Line classification strategies.

use std::fmt;

/// How the position (and team) are located among the trailing tokens.
///
/// # Examples
///
/// ```rust
/// use ffl_rankings::parser::{line::parse_line, Strategy};
///
/// let line = "5 Patrick Mahomes KC QB1";
/// let aware = parse_line(line, Strategy::TeamAware).unwrap();
/// assert_eq!(aware.name, "Patrick Mahomes");
///
/// // The basic scan has no notion of teams, so KC stays in the name.
/// let basic = parse_line(line, Strategy::Basic).unwrap();
/// assert_eq!(basic.name, "Patrick Mahomes KC");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Strategy {
    /// Look only at the last two tokens; accepts `POS TEAM` and `TEAM POS`.
    #[default]
    TeamAware,
    /// Scan right to left for the first position token; ignores teams.
    Basic,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::TeamAware => write!(f, "team-aware"),
            Strategy::Basic => write!(f, "basic"),
        }
    }
}
