//! Grouping and text rendering of parsed players

use std::collections::HashSet;
use std::fmt::Write;

use crate::{parser::PlayerRecord, Position};

/// Players sharing one display position, in input order.
#[derive(Debug, Clone, PartialEq)]
pub struct PositionGroup<'a> {
    pub position: Position,
    pub players: Vec<&'a PlayerRecord>,
}

/// Names to mark when rendering.
#[derive(Debug, Default, Clone)]
pub struct Highlights {
    pub favorites: HashSet<String>,
    pub team_members: HashSet<String>,
}

impl Highlights {
    pub fn new<F, T>(favorites: F, team_members: T) -> Self
    where
        F: IntoIterator<Item = String>,
        T: IntoIterator<Item = String>,
    {
        Self {
            favorites: favorites.into_iter().collect(),
            team_members: team_members.into_iter().collect(),
        }
    }

    /// Two-character marker column: `*` for favorites, `+` for active team members.
    pub fn marker(&self, name: &str) -> &'static str {
        match (
            self.favorites.contains(name),
            self.team_members.contains(name),
        ) {
            (true, true) => "*+",
            (true, false) => "* ",
            (false, true) => " +",
            (false, false) => "  ",
        }
    }
}

/// Group records by position following [`Position::DISPLAY_ORDER`].
///
/// Every display position gets a group, even when empty.
pub fn group_by_position(records: &[PlayerRecord]) -> Vec<PositionGroup<'_>> {
    Position::DISPLAY_ORDER
        .iter()
        .map(|&position| PositionGroup {
            position,
            players: records.iter().filter(|r| r.position == position).collect(),
        })
        .collect()
}

/// One display line for a player, e.g. `* 12. Justin Jefferson  WR1  MIN`.
pub fn format_player(record: &PlayerRecord, highlights: &Highlights) -> String {
    let mut line = format!(
        "{}{:>4}. {:<28} {}",
        highlights.marker(&record.name),
        record.rank.as_u32(),
        record.name,
        record.position
    );
    if let Some(pos_rank) = record.positional_rank {
        let _ = write!(line, "{}", pos_rank);
    }
    if let Some(team) = &record.team {
        let _ = write!(line, "  {}", team);
    }
    line
}

/// Render the flat list in input order.
pub fn render_list(records: &[PlayerRecord], highlights: &Highlights) -> String {
    records
        .iter()
        .map(|r| format_player(r, highlights))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render one block per non-empty group with a `QB (12)` style header.
pub fn render_groups(groups: &[PositionGroup<'_>], highlights: &Highlights) -> String {
    groups
        .iter()
        .filter(|g| !g.players.is_empty())
        .map(|g| {
            let mut block = format!("{} ({})", g.position, g.players.len());
            for player in &g.players {
                block.push('\n');
                block.push_str(&format_player(player, highlights));
            }
            block
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}
