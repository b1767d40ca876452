//! Storage layer for saved rankings state
//!
//! Everything the tool remembers between runs goes through a durable
//! string-keyed store:
//! - `store`: the `KeyValueStore` trait and an in-memory implementation
//! - `schema`: SQLite-backed store and its on-disk location
//! - `models`: storage keys and saved data shapes
//! - `queries`: favorites, teams and saved input built on any store

pub mod models;
pub mod queries;
pub mod schema;
pub mod store;

#[cfg(test)]
mod tests;

pub use models::*;
pub use queries::UserState;
pub use schema::SqliteStore;
pub use store::{KeyValueStore, MemoryStore};
