//! Command execution logic.

use anyhow::{Context, Result};
use serde::Serialize;

use super::args::{BetweenArgs, ExportArgs, NumberArgs, PathArgs, TeammatesArgs};
use crate::config::Settings;
use crate::domain::{Player, PlayerId};
use crate::graph::PlayerGraph;
use crate::loader::LoadWarning;
use crate::output::{self, OutputMode};

/// Pick the root player: `--from`, else the configured default.
fn resolve_root(from: Option<&str>, settings: &Settings) -> Result<PlayerId> {
    from.map(PlayerId::from)
        .or_else(|| settings.default_player.clone())
        .context("no starting player; pass --from or set `default-player` in the config file")
}

/// Execute the path command
pub fn execute_path(
    graph: &PlayerGraph,
    settings: &Settings,
    args: &PathArgs,
    mode: OutputMode,
) -> Result<()> {
    let root = resolve_root(args.from.as_deref(), settings)?;
    let target = PlayerId::from(args.to.as_str());

    let path = graph.rooted(&root)?.find_path(&target)?;
    output::print_path(graph, &root, &target, None, &path, mode)?;
    Ok(())
}

/// Execute the between command
pub fn execute_between(
    graph: &PlayerGraph,
    settings: &Settings,
    args: &BetweenArgs,
    mode: OutputMode,
) -> Result<()> {
    let root = resolve_root(args.from.as_deref(), settings)?;
    let target = PlayerId::from(args.to.as_str());
    let via = PlayerId::from(args.via.as_str());

    let path = graph.rooted(&root)?.is_between(&target, &via)?;
    output::print_path(graph, &root, &target, Some(&via), &path, mode)?;
    Ok(())
}

/// Execute the number command
pub fn execute_number(graph: &PlayerGraph, args: &NumberArgs, mode: OutputMode) -> Result<()> {
    let ids = graph.players_with_number(args.number);
    output::print_players(graph, &ids, mode)?;
    Ok(())
}

/// Execute the teammates command
pub fn execute_teammates(
    graph: &PlayerGraph,
    args: &TeammatesArgs,
    mode: OutputMode,
) -> Result<()> {
    let ids = graph.teammates(&PlayerId::from(args.player.as_str()))?;
    output::print_players(graph, &ids, mode)?;
    Ok(())
}

/// Execute the connected command
pub fn execute_connected(graph: &PlayerGraph, mode: OutputMode) -> Result<()> {
    output::print_connectivity(graph.is_fully_connected(), graph.component_count(), mode)?;
    Ok(())
}

/// Execute the stats command
pub fn execute_stats(
    graph: &PlayerGraph,
    warnings: &[LoadWarning],
    mode: OutputMode,
) -> Result<()> {
    let skipped_lines = warnings
        .iter()
        .filter(|w| matches!(w, LoadWarning::Line(_)))
        .count();
    output::print_stats(&graph.stats(), skipped_lines, mode)?;
    Ok(())
}

/// One line of `export` output.
#[derive(Debug, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ExportRecord<'a> {
    /// A player
    Node(&'a Player),
    /// A teammate pair
    Edge {
        /// Lower ID of the pair
        source: &'a PlayerId,
        /// Higher ID of the pair
        target: &'a PlayerId,
    },
}

/// Nodes first, then edges, both in ID order.
pub fn export_records<'a>(
    graph: &'a PlayerGraph,
    edges: &'a [(PlayerId, PlayerId)],
) -> impl Iterator<Item = ExportRecord<'a>> {
    graph
        .players()
        .map(ExportRecord::Node)
        .chain(edges.iter().map(|(source, target)| ExportRecord::Edge { source, target }))
}

/// Execute the export command
pub async fn execute_export(graph: &PlayerGraph, args: &ExportArgs) -> Result<()> {
    let edges = graph.edges();
    let records = export_records(graph, &edges);

    match &args.output {
        Some(path) => {
            roster_jsonl::write_jsonl_atomic(path, records)
                .await
                .with_context(|| format!("failed to write {}", path.display()))?;
            tracing::info!(
                path = %path.display(),
                nodes = graph.node_count(),
                edges = edges.len(),
                "Exported graph"
            );
        }
        None => {
            let mut writer = roster_jsonl::JsonlWriter::new(tokio::io::stdout());
            writer.write_all(records).await?;
            writer.flush().await?;
        }
    }
    Ok(())
}
