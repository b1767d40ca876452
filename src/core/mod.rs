//! Presentation helpers for parsed rankings
//!
//! - `grouping`: grouping by position, favorite/team highlighting and text rendering

pub mod grouping;

pub use grouping::{group_by_position, render_groups, render_list, Highlights, PositionGroup};
