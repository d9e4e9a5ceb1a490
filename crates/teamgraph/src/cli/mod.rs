//! CLI argument parsing and command dispatch.
//!
//! # Commands
//!
//! - `path`: shortest teammate chain between two players
//! - `between`: shortest chain that passes through a given player
//! - `number`: players who wore a jersey number
//! - `teammates`: direct teammates of a player
//! - `connected`: whether every player is reachable from every other
//! - `stats`: graph summary
//! - `export`: nodes and edges as JSONL for external renderers
//!
//! # Example
//!
//! ```bash
//! teamgraph --roster roster.jsonl path jordami01 --from bryanko01
//! teamgraph --roster roster.jsonl between jordami01 pippesc01 --from bryanko01
//! teamgraph --json number 23
//! ```

mod args;
mod execute;
mod validators;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use args::{BetweenArgs, ExportArgs, NumberArgs, PathArgs, TeammatesArgs};
pub use execute::{export_records, ExportRecord};
pub use validators::validate_player_id;

/// Teamgraph - teammate relationships across season rosters
///
/// Players are connected when they were on the same team in the same
/// season. Rosters are read from a JSONL file with one row per player-season.
#[derive(Parser, Debug)]
#[command(name = "teamgraph")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Roster JSONL file (overrides `roster` in the config file)
    #[arg(short, long, global = true)]
    pub roster: Option<PathBuf>,

    /// Config file (default: ./teamgraph.yaml if present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output in JSON format for programmatic use
    #[arg(long, global = true)]
    pub json: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Shortest teammate chain to a player
    ///
    /// Prints the chain starting at `--from` (or the configured default
    /// player) and ending at the given player.
    Path(PathArgs),

    /// Shortest chain to a player that passes through another
    ///
    /// Prints nothing but a notice when no shortest chain goes through VIA,
    /// even if a longer one does.
    Between(BetweenArgs),

    /// Players who wore a jersey number
    Number(NumberArgs),

    /// Direct teammates of a player
    Teammates(TeammatesArgs),

    /// Check whether all players form one connected group
    Connected,

    /// Show graph statistics
    Stats,

    /// Export nodes and edges as JSONL
    Export(ExportArgs),
}

impl Cli {
    /// Parse CLI arguments from command line
    pub fn parse_args() -> Self {
        <Self as Parser>::parse()
    }

    /// Parse CLI arguments from an iterator (for testing)
    ///
    /// # Errors
    ///
    /// Returns the clap error for invalid arguments.
    pub fn try_parse_from<I, T>(iter: I) -> std::result::Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        <Self as Parser>::try_parse_from(iter)
    }

    /// Execute the CLI command
    ///
    /// # Errors
    ///
    /// Fails if the roster cannot be loaded, a named player does not exist,
    /// or output cannot be written.
    pub async fn execute(&self) -> Result<()> {
        use crate::app::App;
        use crate::output::OutputMode;

        let output_mode = if self.json {
            OutputMode::Json
        } else {
            OutputMode::Text
        };

        let app = App::load(
            self.roster.clone(),
            self.config.as_deref(),
            &std::env::current_dir()?,
        )
        .await?;
        let graph = app.graph();

        match &self.command {
            Commands::Path(args) => execute::execute_path(graph, app.settings(), args, output_mode),
            Commands::Between(args) => {
                execute::execute_between(graph, app.settings(), args, output_mode)
            }
            Commands::Number(args) => execute::execute_number(graph, args, output_mode),
            Commands::Teammates(args) => execute::execute_teammates(graph, args, output_mode),
            Commands::Connected => execute::execute_connected(graph, output_mode),
            Commands::Stats => execute::execute_stats(graph, app.warnings(), output_mode),
            Commands::Export(args) => execute::execute_export(graph, args).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_path_with_global_flags_after_subcommand() {
        let cli =
            Cli::try_parse_from(["teamgraph", "path", "b01", "--from", "a01", "--json", "-r", "x.jsonl"])
                .unwrap();

        assert!(cli.json);
        assert_eq!(cli.roster, Some(PathBuf::from("x.jsonl")));
        match cli.command {
            Commands::Path(args) => {
                assert_eq!(args.to, "b01");
                assert_eq!(args.from.as_deref(), Some("a01"));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn between_requires_target_and_via() {
        assert!(Cli::try_parse_from(["teamgraph", "between", "only-one"]).is_err());
    }

    #[test]
    fn number_accepts_negative_values() {
        let cli = Cli::try_parse_from(["teamgraph", "number", "-1"]).unwrap();
        assert!(matches!(cli.command, Commands::Number(NumberArgs { number: -1 })));
    }

    #[test]
    fn blank_player_id_is_rejected() {
        assert!(Cli::try_parse_from(["teamgraph", "teammates", " "]).is_err());
    }
}
