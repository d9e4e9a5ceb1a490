//! Loading a roster file into a [`PlayerGraph`].
//!
//! Rows are read with resilient JSONL loading: unparsable lines and rows
//! missing required fields are skipped, logged, and returned as
//! [`LoadWarning`]s. Only I/O failures abort a load.

use crate::domain::RosterRecord;
use crate::error::{MalformedRecord, Result};
use crate::graph::{GraphStats, PlayerGraph};
use crate::roster::RosterIndex;
use roster_jsonl::{read_jsonl_resilient, Warning as JsonlWarning};
use std::fmt;
use std::path::Path;

/// Non-fatal problems found while loading a roster file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadWarning {
    /// A line could not be parsed into a roster row.
    Line(JsonlWarning),

    /// A parsed row lacked a required field.
    Record(MalformedRecord),
}

impl fmt::Display for LoadWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Line(w) => write!(f, "{w}"),
            Self::Record(r) => write!(f, "{r}"),
        }
    }
}

/// A loaded graph and everything that was skipped on the way.
#[derive(Debug)]
pub struct LoadedRoster {
    /// The built graph
    pub graph: PlayerGraph,
    /// Skipped lines and rows, lines first
    pub warnings: Vec<LoadWarning>,
    /// Summary of the built graph
    pub stats: GraphStats,
}

/// Read a JSONL roster file and build its graph.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or read.
pub async fn load_roster(path: &Path) -> Result<LoadedRoster> {
    let (records, line_warnings) = read_jsonl_resilient::<RosterRecord, _>(path).await?;
    tracing::debug!(path = %path.display(), rows = records.len(), "Read roster rows");

    let index = RosterIndex::build(records);
    let mut warnings: Vec<LoadWarning> = line_warnings.into_iter().map(LoadWarning::Line).collect();
    warnings.extend(index.skipped().iter().cloned().map(LoadWarning::Record));

    // Skipped rows were already logged by the index.
    for warning in warnings.iter().filter(|w| matches!(w, LoadWarning::Line(_))) {
        tracing::warn!(path = %path.display(), %warning, "Skipped roster line");
    }
    if !warnings.is_empty() {
        tracing::info!(
            path = %path.display(),
            skipped = warnings.len(),
            "Roster loaded with skipped entries"
        );
    }

    let graph = PlayerGraph::from_index(index);
    let stats = graph.stats();
    Ok(LoadedRoster {
        graph,
        warnings,
        stats,
    })
}
