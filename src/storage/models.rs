//! Storage keys and saved data shapes

use std::collections::BTreeMap;

/// Raw ranking text as last pasted
pub const INPUT_KEY: &str = "rankings_input";

/// JSON array of favorite player names
pub const FAVORITES_KEY: &str = "favorites";

/// JSON object of team name to player names
pub const TEAMS_KEY: &str = "teams";

/// Name of the selected team, empty when none
pub const ACTIVE_TEAM_KEY: &str = "active_team";

/// Saved teams keyed by team name; player lists keep the order players were added.
pub type SavedTeams = BTreeMap<String, Vec<String>>;
