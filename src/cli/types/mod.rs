//! Type-safe wrappers and enums for parsed ranking data.

pub mod ids;
pub mod position;
pub mod strategy;
