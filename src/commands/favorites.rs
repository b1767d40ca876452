//! Favorites command implementation

use crate::{
    cli::FavoritesCmd,
    storage::{KeyValueStore, UserState},
    Result,
};

pub fn handle_favorites<S: KeyValueStore>(
    cmd: &FavoritesCmd,
    state: &mut UserState<S>,
) -> Result<String> {
    match cmd {
        FavoritesCmd::Toggle { name } => {
            if state.toggle_favorite(name)? {
                Ok(format!("★ {} added to favorites", name))
            } else {
                Ok(format!("☆ {} removed from favorites", name))
            }
        }
        FavoritesCmd::List => {
            let favorites = state.favorites()?;
            if favorites.is_empty() {
                Ok("No favorites yet".to_string())
            } else {
                Ok(favorites.join("\n"))
            }
        }
    }
}
