//! Configuration loading.
//!
//! An optional `teamgraph.yaml` names the roster file and a default root
//! player:
//!
//! ```yaml
//! roster: data/roster.jsonl
//! default-player: jordami01
//! ```
//!
//! Command-line flags take precedence over the file. A relative `roster`
//! path is resolved against the directory holding the config file.

use crate::domain::PlayerId;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs;

/// Name of the configuration file looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "teamgraph.yaml";

/// Contents of `teamgraph.yaml`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct TeamgraphConfig {
    /// Path to the roster JSONL file
    #[serde(default)]
    pub roster: Option<PathBuf>,

    /// Root player used when a command is not given `--from`
    #[serde(default)]
    pub default_player: Option<PlayerId>,
}

impl TeamgraphConfig {
    /// Load configuration from a file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid YAML.
    pub async fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).await?;
        let mut config: Self = serde_yaml::from_str(&content)
            .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))?;

        if let (Some(roster), Some(base)) = (&config.roster, path.parent()) {
            if roster.is_relative() {
                config.roster = Some(base.join(roster));
            }
        }
        Ok(config)
    }
}

/// Settings after merging flags with the config file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Roster file to load
    pub roster: PathBuf,
    /// Default root player, if configured
    pub default_player: Option<PlayerId>,
}

impl Settings {
    /// Merge command-line values with the config file.
    ///
    /// `config_path` must exist if given. Otherwise `teamgraph.yaml` in
    /// `working_dir` is used when present.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if no roster file is named anywhere, or if
    /// the config file cannot be loaded.
    pub async fn resolve(
        roster: Option<PathBuf>,
        config_path: Option<&Path>,
        working_dir: &Path,
    ) -> Result<Self> {
        let config = match config_path {
            Some(path) => TeamgraphConfig::load(path).await?,
            None => {
                let default_path = working_dir.join(CONFIG_FILE_NAME);
                if fs::try_exists(&default_path).await? {
                    tracing::debug!(path = %default_path.display(), "Using config file");
                    TeamgraphConfig::load(&default_path).await?
                } else {
                    TeamgraphConfig::default()
                }
            }
        };

        let roster = roster.or(config.roster).ok_or_else(|| {
            Error::Config(format!(
                "no roster file given; pass --roster or set `roster` in {CONFIG_FILE_NAME}"
            ))
        })?;

        Ok(Self {
            roster,
            default_player: config.default_player,
        })
    }
}
