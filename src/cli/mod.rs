//! CLI argument definitions and parsing.

pub mod types;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use types::{position::Position, strategy::Strategy};

/// Options for turning pasted rankings into player records
#[derive(Debug, Args)]
pub struct ParseArgs {
    /// File with one ranking per line; reads stdin when omitted.
    pub file: Option<PathBuf>,

    /// Parse the previously saved input instead of a file or stdin.
    #[clap(long, conflicts_with = "file")]
    pub saved: bool,

    /// Output results as JSON instead of text lines.
    #[clap(long)]
    pub json: bool,

    /// Group players by position (QB, RB, WR, TE, K, DST).
    #[clap(long, short)]
    pub grouped: bool,

    /// Only show these positions (repeatable): `-p QB -p DEF`.
    #[clap(short = 'p', long = "position")]
    pub positions: Option<Vec<Position>>,

    /// How position and team tokens are located on each line.
    #[clap(long, value_enum, default_value_t = Strategy::TeamAware)]
    pub strategy: Strategy,

    /// Remember this input so later runs can use `--saved`.
    #[clap(long)]
    pub save: bool,
}

#[derive(Debug, Subcommand)]
pub enum FavoritesCmd {
    /// Mark a player as favorite, or unmark if already marked
    Toggle {
        /// Player name exactly as it appears in the rankings
        name: String,
    },
    /// List favorite players
    List,
}

#[derive(Debug, Subcommand)]
pub enum TeamsCmd {
    /// Create an empty team
    Create { name: String },
    /// Delete a team
    Delete { name: String },
    /// Add a player to a team, or remove them if already on it
    Toggle { team: String, player: String },
    /// Select the team to highlight; clears the selection when no name is given
    Select { name: Option<String> },
    /// List teams and their players
    List,
}

#[derive(Debug, Subcommand)]
pub enum InputCmd {
    /// Print the saved ranking input
    Show,
    /// Forget the saved ranking input
    Clear,
}

#[derive(Debug, Parser)]
#[clap(
    name = "ffl-rankings",
    about = "Parse pasted fantasy football rankings and track favorites and teams"
)]
pub struct Cli {
    /// Store file (or set `FFL_RANKINGS_STORE` env var).
    #[clap(long, global = true)]
    pub store: Option<PathBuf>,

    /// Log skipped lines and store changes to stderr.
    #[clap(long, short, global = true)]
    pub verbose: bool,

    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Parse a ranking list
    Parse(ParseArgs),

    /// Manage favorite players
    Favorites {
        #[clap(subcommand)]
        cmd: FavoritesCmd,
    },

    /// Manage saved teams
    Teams {
        #[clap(subcommand)]
        cmd: TeamsCmd,
    },

    /// Inspect or clear the saved ranking input
    Input {
        #[clap(subcommand)]
        cmd: InputCmd,
    },
}
