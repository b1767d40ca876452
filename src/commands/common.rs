//! Helpers shared across command handlers.

use std::path::Path;

use crate::{
    core::Highlights,
    storage::{KeyValueStore, SqliteStore, UserState},
    Result,
};

/// Open the SQLite-backed user state at `path`
pub fn open_state(path: &Path) -> Result<UserState<SqliteStore>> {
    Ok(UserState::new(SqliteStore::open(path)?))
}

/// Favorites and active-team members to mark in text output
pub fn load_highlights<S: KeyValueStore>(state: &UserState<S>) -> Result<Highlights> {
    Ok(Highlights::new(
        state.favorites()?,
        state.active_team_players()?,
    ))
}
