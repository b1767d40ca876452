//! Entry point: parse CLI and dispatch to command handlers.

use anyhow::Context;
use clap::Parser;
use ffl_rankings::{
    cli::{Cli, Commands},
    commands::{
        favorites::handle_favorites,
        input::handle_input,
        open_state,
        parse::{handle_parse, read_input},
        resolve_store_path,
        teams::handle_teams,
    },
    logging::setup_logging,
};

/// Run the CLI.
fn main() -> anyhow::Result<()> {
    let app = Cli::parse();
    setup_logging(app.verbose);

    let store_path = resolve_store_path(app.store)?;
    let mut state = open_state(&store_path)
        .with_context(|| format!("opening store at {}", store_path.display()))?;

    let output = match app.command {
        Commands::Parse(args) => {
            let text = read_input(&args, &state).context("reading ranking input")?;
            handle_parse(&args, &text, &mut state)?
        }
        Commands::Favorites { cmd } => handle_favorites(&cmd, &mut state)?,
        Commands::Teams { cmd } => handle_teams(&cmd, &mut state)?,
        Commands::Input { cmd } => handle_input(&cmd, &mut state)?,
    };

    if !output.is_empty() {
        println!("{}", output);
    }

    Ok(())
}
