//! Parse command implementation

use std::io::Read;

use serde::Serialize;
use tracing::info;

use super::common::load_highlights;
use crate::{
    cli::ParseArgs,
    core::{group_by_position, render_groups, render_list, PositionGroup},
    parser::{parse_rankings_with, PlayerRecord},
    storage::{KeyValueStore, UserState},
    Position, Result,
};

/// JSON shape of `--grouped --json` output
#[derive(Debug, Serialize)]
struct GroupOutput<'a> {
    position: Position,
    players: &'a [&'a PlayerRecord],
}

/// Read the ranking text the arguments point at: saved input, a file, or stdin
pub fn read_input<S: KeyValueStore>(args: &ParseArgs, state: &UserState<S>) -> Result<String> {
    if args.saved {
        return state.load_input();
    }
    match &args.file {
        Some(path) => Ok(std::fs::read_to_string(path)?),
        None => {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}

/// Parse `text` and render it according to `args`
pub fn handle_parse<S: KeyValueStore>(
    args: &ParseArgs,
    text: &str,
    state: &mut UserState<S>,
) -> Result<String> {
    let mut records = parse_rankings_with(text, args.strategy)?;
    if let Some(positions) = &args.positions {
        records.retain(|r| positions.contains(&r.position));
    }

    if args.save && !args.saved {
        state.save_input(text)?;
    }

    if records.is_empty() {
        info!("no players found in input");
    }

    if args.json {
        let json = if args.grouped {
            let groups = selected_groups(&records, args.positions.as_deref());
            let output: Vec<GroupOutput> = groups
                .iter()
                .map(|g| GroupOutput {
                    position: g.position,
                    players: &g.players,
                })
                .collect();
            serde_json::to_string_pretty(&output)?
        } else {
            serde_json::to_string_pretty(&records)?
        };
        return Ok(json);
    }

    let highlights = load_highlights(state)?;
    if args.grouped {
        let groups = selected_groups(&records, args.positions.as_deref());
        Ok(render_groups(&groups, &highlights))
    } else {
        Ok(render_list(&records, &highlights))
    }
}

/// Position groups, limited to `positions` when a filter was given
fn selected_groups<'a>(
    records: &'a [PlayerRecord],
    positions: Option<&[Position]>,
) -> Vec<PositionGroup<'a>> {
    group_by_position(records)
        .into_iter()
        .filter(|g| positions.map_or(true, |ps| ps.contains(&g.position)))
        .collect()
}
