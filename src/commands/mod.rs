//! Command implementations for the rankings CLI
//!
//! Handlers take an already-open [`UserState`] and return the text to print,
//! so the binary stays a thin dispatcher.

pub mod common;
pub mod favorites;
pub mod input;
pub mod parse;
pub mod teams;


use std::path::PathBuf;

use crate::{storage::SqliteStore, RankingsError, Result, STORE_ENV_VAR};

pub use common::open_state;

/// Pick the store file: explicit flag, then `FFL_RANKINGS_STORE`, then the platform data dir.
pub fn resolve_store_path(store: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(path) = store {
        return Ok(path);
    }
    if let Ok(path) = std::env::var(STORE_ENV_VAR) {
        if !path.is_empty() {
            return Ok(PathBuf::from(path));
        }
    }
    SqliteStore::default_path().ok_or_else(|| RankingsError::MissingStorePath {
        env_var: STORE_ENV_VAR.to_string(),
    })
}
