//! Error types for teamgraph.
//!
//! Two kinds of failure are kept apart:
//!
//! - **`Error`**: returned to the caller. A query naming an unknown player
//!   fails with [`Error::NotFound`]; loading fails only on I/O or
//!   configuration problems.
//! - **`MalformedRecord`**: a roster row that cannot be used. These are
//!   collected while the roster index is built and never abort it.
//!
//! "No path" and "not fully connected" are ordinary query results, not
//! errors.

use crate::domain::PlayerId;
use std::fmt;
use thiserror::Error;

/// The error type for teamgraph operations.
#[derive(Debug, Error)]
pub enum Error {
    /// A query referenced a player that is not in the graph.
    #[error("Player not found: {0}")]
    NotFound(PlayerId),

    /// IO error occurred.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Reading or writing a JSONL file failed.
    #[error("Roster file error: {0}")]
    Jsonl(#[from] roster_jsonl::Error),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized Result type for teamgraph operations.
pub type Result<T> = std::result::Result<T, Error>;

/// A roster row that was skipped while building the index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MalformedRecord {
    /// 0-based position of the row in the input sequence
    pub position: usize,
    /// Which required field was unusable
    pub reason: MalformedReason,
}

impl fmt::Display for MalformedRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "record {}: {}", self.position, self.reason)
    }
}

impl std::error::Error for MalformedRecord {}

/// Why a roster row was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MalformedReason {
    /// `player_id` absent or blank
    MissingPlayerId,
    /// `team` absent or blank
    MissingTeam,
    /// `year` absent
    MissingYear,
}

impl fmt::Display for MalformedReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingPlayerId => write!(f, "missing player id"),
            Self::MissingTeam => write!(f, "missing team"),
            Self::MissingYear => write!(f, "missing year"),
        }
    }
}
