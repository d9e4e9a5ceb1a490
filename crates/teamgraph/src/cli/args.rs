//! CLI argument structs for all commands.

use clap::Parser;
use std::path::PathBuf;

use super::validators::validate_player_id;

/// Arguments for the `path` command
#[derive(Parser, Debug, Clone)]
pub struct PathArgs {
    /// Player to reach
    #[arg(value_parser = validate_player_id)]
    pub to: String,

    /// Starting player (defaults to `default-player` from the config file)
    #[arg(short, long, value_parser = validate_player_id)]
    pub from: Option<String>,
}

/// Arguments for the `between` command
#[derive(Parser, Debug, Clone)]
pub struct BetweenArgs {
    /// Player to reach
    #[arg(value_parser = validate_player_id)]
    pub to: String,

    /// Player that must lie on the shortest path
    #[arg(value_parser = validate_player_id)]
    pub via: String,

    /// Starting player (defaults to `default-player` from the config file)
    #[arg(short, long, value_parser = validate_player_id)]
    pub from: Option<String>,
}

/// Arguments for the `number` command
#[derive(Parser, Debug, Clone)]
pub struct NumberArgs {
    /// Jersey number to look up
    #[arg(allow_negative_numbers = true)]
    pub number: i64,
}

/// Arguments for the `teammates` command
#[derive(Parser, Debug, Clone)]
pub struct TeammatesArgs {
    /// Player whose teammates to list
    #[arg(value_parser = validate_player_id)]
    pub player: String,
}

/// Arguments for the `export` command
#[derive(Parser, Debug, Clone)]
pub struct ExportArgs {
    /// Write to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}
