//! Teamgraph - teammate relationships across season rosters.
//!
//! Roster rows (player, team, year) are grouped by (team, year); everyone in
//! a group becomes adjacent in an undirected [`PlayerGraph`]. The graph then
//! answers shortest-path, between-ness, jersey-number and connectivity
//! queries.
//!
//! ```
//! use teamgraph::{PlayerGraph, PlayerId, RosterRecord};
//!
//! let graph = PlayerGraph::from_records(vec![
//!     RosterRecord::new("A", "TeamX", 2000),
//!     RosterRecord::new("B", "TeamX", 2000),
//!     RosterRecord::new("C", "TeamX", 2000),
//!     RosterRecord::new("C", "TeamY", 2001),
//!     RosterRecord::new("D", "TeamY", 2001),
//! ]);
//!
//! let a = graph.rooted(&PlayerId::from("A")).unwrap();
//! let path = a.find_path(&PlayerId::from("D")).unwrap();
//! assert_eq!(path, ["A", "C", "D"].map(PlayerId::from));
//! assert!(graph.is_fully_connected());
//! ```

#![forbid(unsafe_code)]

pub mod app;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod graph;
pub mod loader;
pub mod output;
pub mod roster;

pub use domain::{Player, PlayerId, RosterRecord, TeamYear};
pub use error::{Error, MalformedReason, MalformedRecord, Result};
pub use graph::{GraphStats, PlayerGraph, RootedGraph};
pub use loader::{load_roster, LoadWarning, LoadedRoster};
pub use roster::RosterIndex;
