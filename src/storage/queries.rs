//! Favorites, teams and saved input on top of a key/value store

use tracing::info;

use super::{models::*, store::KeyValueStore};
use crate::{RankingsError, Result};

/// Saved user state: favorite players, teams, the active team and the last pasted input.
pub struct UserState<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> UserState<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Give back the underlying store
    pub fn into_inner(self) -> S {
        self.store
    }

    /// Raw ranking text from the last save, empty if nothing was saved
    pub fn load_input(&self) -> Result<String> {
        self.store.get_or(INPUT_KEY, "")
    }

    pub fn save_input(&mut self, text: &str) -> Result<()> {
        self.store.set(INPUT_KEY, text)?;
        info!(bytes = text.len(), "saved ranking input");
        Ok(())
    }

    /// Favorite player names in the order they were added
    pub fn favorites(&self) -> Result<Vec<String>> {
        let raw = self.store.get_or(FAVORITES_KEY, "[]")?;
        Ok(serde_json::from_str(&raw)?)
    }

    pub fn is_favorite(&self, name: &str) -> Result<bool> {
        Ok(self.favorites()?.iter().any(|f| f == name))
    }

    /// Add or remove `name` from favorites. Returns true if it is now a favorite.
    pub fn toggle_favorite(&mut self, name: &str) -> Result<bool> {
        let mut favorites = self.favorites()?;
        let now_favorite = match favorites.iter().position(|f| f == name) {
            Some(idx) => {
                favorites.remove(idx);
                false
            }
            None => {
                favorites.push(name.to_string());
                true
            }
        };
        self.store
            .set(FAVORITES_KEY, &serde_json::to_string(&favorites)?)?;
        info!(player = name, favorite = now_favorite, "toggled favorite");
        Ok(now_favorite)
    }

    pub fn teams(&self) -> Result<SavedTeams> {
        let raw = self.store.get_or(TEAMS_KEY, "{}")?;
        Ok(serde_json::from_str(&raw)?)
    }

    fn save_teams(&mut self, teams: &SavedTeams) -> Result<()> {
        self.store.set(TEAMS_KEY, &serde_json::to_string(teams)?)
    }

    /// Create an empty team. The name is trimmed and must be unique.
    pub fn create_team(&mut self, name: &str) -> Result<String> {
        let name = name.trim();
        if name.is_empty() {
            return Err(RankingsError::EmptyTeamName);
        }

        let mut teams = self.teams()?;
        if teams.contains_key(name) {
            return Err(RankingsError::TeamExists {
                name: name.to_string(),
            });
        }
        teams.insert(name.to_string(), Vec::new());
        self.save_teams(&teams)?;
        info!(team = name, "created team");
        Ok(name.to_string())
    }

    /// Delete a team, clearing the active selection if it pointed at it
    pub fn delete_team(&mut self, name: &str) -> Result<()> {
        let mut teams = self.teams()?;
        if teams.remove(name).is_none() {
            return Err(RankingsError::TeamNotFound {
                name: name.to_string(),
            });
        }
        self.save_teams(&teams)?;

        if self.active_team()?.as_deref() == Some(name) {
            self.store.set(ACTIVE_TEAM_KEY, "")?;
        }
        info!(team = name, "deleted team");
        Ok(())
    }

    /// Add or remove `player` on `team`. Returns true if the player is now on the team.
    pub fn toggle_team_player(&mut self, team: &str, player: &str) -> Result<bool> {
        let mut teams = self.teams()?;
        let roster = teams
            .get_mut(team)
            .ok_or_else(|| RankingsError::TeamNotFound {
                name: team.to_string(),
            })?;

        let added = match roster.iter().position(|p| p == player) {
            Some(idx) => {
                roster.remove(idx);
                false
            }
            None => {
                roster.push(player.to_string());
                true
            }
        };
        self.save_teams(&teams)?;
        info!(team, player, added, "toggled team player");
        Ok(added)
    }

    /// Currently selected team, if any
    pub fn active_team(&self) -> Result<Option<String>> {
        let name = self.store.get_or(ACTIVE_TEAM_KEY, "")?;
        Ok((!name.is_empty()).then_some(name))
    }

    /// Select a team by name, or clear the selection with `None`
    pub fn set_active_team(&mut self, name: Option<&str>) -> Result<()> {
        match name {
            Some(name) => {
                if !self.teams()?.contains_key(name) {
                    return Err(RankingsError::TeamNotFound {
                        name: name.to_string(),
                    });
                }
                self.store.set(ACTIVE_TEAM_KEY, name)?;
                info!(team = name, "selected active team");
            }
            None => {
                self.store.set(ACTIVE_TEAM_KEY, "")?;
                info!("cleared active team");
            }
        }
        Ok(())
    }

    /// Players on the active team, empty when no team is selected
    pub fn active_team_players(&self) -> Result<Vec<String>> {
        let Some(active) = self.active_team()? else {
            return Ok(Vec::new());
        };
        Ok(self.teams()?.remove(&active).unwrap_or_default())
    }
}
