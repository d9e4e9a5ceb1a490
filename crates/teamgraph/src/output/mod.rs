//! Output formatting for CLI commands.
//!
//! Every command prints either human-readable text or, with `--json`, a
//! single JSON document.

pub mod color;

use crate::domain::{Player, PlayerId};
use crate::graph::{GraphStats, PlayerGraph};
use serde::Serialize;
use std::env;
use std::io::{self, Write};

use color::{colorize_id, dimmed, success, warning};

/// Settings that control text rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputConfig {
    /// Whether to use colors in output.
    pub use_colors: bool,
}

impl OutputConfig {
    /// Create an `OutputConfig` with explicit values.
    pub fn new(use_colors: bool) -> Self {
        Self { use_colors }
    }

    /// Create an `OutputConfig` from the environment.
    ///
    /// Reads:
    /// - `NO_COLOR`: any value disables colors
    /// - `TEAMGRAPH_COLOR`: `0` or `false` disables colors
    pub fn from_env() -> Self {
        let no_color = env::var_os("NO_COLOR").is_some();
        let disabled = env::var("TEAMGRAPH_COLOR")
            .map(|v| v == "0" || v.eq_ignore_ascii_case("false"))
            .unwrap_or(false);
        Self::new(!no_color && !disabled)
    }
}

/// Output format mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Human-readable text format
    Text,
    /// JSON format for programmatic use
    Json,
}

/// Print a JSON-formatted result for any serializable value
pub fn print_json<T: Serialize>(value: &T) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    writeln!(handle, "{json}")
}

/// Print a path between two players, optionally constrained to pass `via`.
pub fn print_path(
    graph: &PlayerGraph,
    from: &PlayerId,
    to: &PlayerId,
    via: Option<&PlayerId>,
    path: &[PlayerId],
    mode: OutputMode,
) -> io::Result<()> {
    match mode {
        OutputMode::Json => print_json(&serde_json::json!({
            "from": from,
            "to": to,
            "via": via,
            "found": !path.is_empty(),
            "length": path.len().saturating_sub(1),
            "path": path,
        })),
        OutputMode::Text => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            let config = OutputConfig::from_env();
            write_path_text(&mut handle, graph, from, to, via, path, &config)
        }
    }
}

fn write_path_text<W: Write>(
    w: &mut W,
    graph: &PlayerGraph,
    from: &PlayerId,
    to: &PlayerId,
    via: Option<&PlayerId>,
    path: &[PlayerId],
    config: &OutputConfig,
) -> io::Result<()> {
    if path.is_empty() {
        let msg = match via {
            Some(via) => format!("No shortest path from {from} to {to} through {via}"),
            None => format!("No path from {from} to {to}"),
        };
        return writeln!(w, "{}", warning(&msg, config));
    }

    let hops = path.len() - 1;
    writeln!(
        w,
        "{} ({} {})",
        success("Path found", config),
        hops,
        if hops == 1 { "hop" } else { "hops" }
    )?;
    for (i, id) in path.iter().enumerate() {
        let marker = if i == 0 { "  " } else { "->" };
        writeln!(
            w,
            "  {} {}",
            dimmed(marker, config),
            describe(graph.player(id), id, config)
        )?;
    }
    Ok(())
}

fn describe(player: Option<&Player>, id: &PlayerId, config: &OutputConfig) -> String {
    let id_text = colorize_id(id.as_str(), config);
    match player {
        Some(Player {
            name: Some(name),
            number: Some(number),
            ..
        }) => format!("{id_text}  {name} #{number}"),
        Some(Player {
            name: Some(name), ..
        }) => format!("{id_text}  {name}"),
        _ => id_text,
    }
}

/// Print a list of players, one per line.
pub fn print_players(graph: &PlayerGraph, ids: &[PlayerId], mode: OutputMode) -> io::Result<()> {
    match mode {
        OutputMode::Json => {
            let players: Vec<&Player> = ids.iter().filter_map(|id| graph.player(id)).collect();
            print_json(&players)
        }
        OutputMode::Text => {
            let config = OutputConfig::from_env();
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            if ids.is_empty() {
                return writeln!(handle, "{}", warning("No players found", &config));
            }
            for id in ids {
                writeln!(handle, "{}", describe(graph.player(id), id, &config))?;
            }
            Ok(())
        }
    }
}

/// Print the connectivity verdict.
pub fn print_connectivity(connected: bool, components: usize, mode: OutputMode) -> io::Result<()> {
    match mode {
        OutputMode::Json => print_json(&serde_json::json!({
            "fully_connected": connected,
            "components": components,
        })),
        OutputMode::Text => {
            let config = OutputConfig::from_env();
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            if connected {
                writeln!(handle, "{}", success("Fully connected", &config))
            } else {
                let msg = format!("Not fully connected ({components} components)");
                writeln!(handle, "{}", warning(&msg, &config))
            }
        }
    }
}

/// Graph figures plus the count of unparsable roster lines.
#[derive(Debug, Serialize)]
struct StatsReport<'a> {
    #[serde(flatten)]
    graph: &'a GraphStats,
    skipped_lines: usize,
}

/// Print graph summary figures.
pub fn print_stats(
    stats: &GraphStats,
    skipped_lines: usize,
    mode: OutputMode,
) -> io::Result<()> {
    match mode {
        OutputMode::Json => print_json(&StatsReport {
            graph: stats,
            skipped_lines,
        }),
        OutputMode::Text => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            write_stats_text(&mut handle, stats, skipped_lines, &OutputConfig::from_env())
        }
    }
}

fn write_stats_text<W: Write>(
    w: &mut W,
    stats: &GraphStats,
    skipped_lines: usize,
    config: &OutputConfig,
) -> io::Result<()> {
    let rows = [
        ("Players", stats.players),
        ("Teammate pairs", stats.edges),
        ("Components", stats.components),
        ("Team seasons", stats.groups),
        ("Skipped lines", skipped_lines),
        ("Skipped records", stats.skipped_records),
        ("Max teammates", stats.max_degree),
    ];
    for (label, value) in rows {
        // Pad before coloring; escape codes would otherwise eat the width.
        writeln!(w, "{} {value}", dimmed(&format!("{label:<16}"), config))?;
    }
    Ok(())
}
