//! Teams command implementation

use crate::{
    cli::TeamsCmd,
    storage::{KeyValueStore, UserState},
    Result,
};

pub fn handle_teams<S: KeyValueStore>(cmd: &TeamsCmd, state: &mut UserState<S>) -> Result<String> {
    match cmd {
        TeamsCmd::Create { name } => {
            let name = state.create_team(name)?;
            Ok(format!("✓ Created team {}", name))
        }
        TeamsCmd::Delete { name } => {
            state.delete_team(name)?;
            Ok(format!("✓ Deleted team {}", name))
        }
        TeamsCmd::Toggle { team, player } => {
            if state.toggle_team_player(team, player)? {
                Ok(format!("✓ Added {} to {}", player, team))
            } else {
                Ok(format!("✓ Removed {} from {}", player, team))
            }
        }
        TeamsCmd::Select { name } => {
            state.set_active_team(name.as_deref())?;
            Ok(match name {
                Some(name) => format!("✓ Active team: {}", name),
                None => "✓ Active team cleared".to_string(),
            })
        }
        TeamsCmd::List => {
            let teams = state.teams()?;
            if teams.is_empty() {
                return Ok("No teams yet".to_string());
            }
            let active = state.active_team()?;
            let blocks: Vec<String> = teams
                .iter()
                .map(|(name, players)| {
                    let marker = if active.as_deref() == Some(name.as_str()) {
                        "> "
                    } else {
                        "  "
                    };
                    let mut block = format!("{}{} ({})", marker, name, players.len());
                    for player in players {
                        block.push_str("\n    ");
                        block.push_str(player);
                    }
                    block
                })
                .collect();
            Ok(blocks.join("\n"))
        }
    }
}
