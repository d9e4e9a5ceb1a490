//! Application context for CLI command execution.
//!
//! `App` resolves settings, loads the roster once, and owns the resulting
//! graph for the lifetime of the command.

use crate::config::Settings;
use crate::error::Result;
use crate::graph::PlayerGraph;
use crate::loader::{load_roster, LoadWarning};
use std::path::{Path, PathBuf};

/// Loaded graph plus the settings it was loaded with.
#[derive(Debug)]
pub struct App {
    settings: Settings,
    graph: PlayerGraph,
    warnings: Vec<LoadWarning>,
}

impl App {
    /// Resolve settings and load the roster they name.
    ///
    /// # Errors
    ///
    /// Returns an error if no roster is configured, the config file is
    /// invalid, or the roster file cannot be read.
    pub async fn load(
        roster: Option<PathBuf>,
        config_path: Option<&Path>,
        working_dir: &Path,
    ) -> Result<Self> {
        let settings = Settings::resolve(roster, config_path, working_dir).await?;
        let loaded = load_roster(&settings.roster).await?;

        Ok(Self {
            settings,
            graph: loaded.graph,
            warnings: loaded.warnings,
        })
    }

    /// The player graph.
    pub fn graph(&self) -> &PlayerGraph {
        &self.graph
    }

    /// Effective settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Entries skipped while loading.
    pub fn warnings(&self) -> &[LoadWarning] {
        &self.warnings
    }
}
