//! Per-player view of a [`PlayerGraph`].

use super::PlayerGraph;
use crate::domain::PlayerId;
use crate::error::Result;

/// A [`PlayerGraph`] seen from one root player.
///
/// Path queries take the root as their starting point. The view borrows the
/// graph, so any number of views over different roots can coexist without
/// rebuilding or copying it.
#[derive(Debug, Clone)]
pub struct RootedGraph<'g> {
    graph: &'g PlayerGraph,
    root: PlayerId,
}

impl<'g> RootedGraph<'g> {
    pub(super) fn new(graph: &'g PlayerGraph, root: PlayerId) -> Self {
        Self { graph, root }
    }

    /// The bound root player.
    #[must_use]
    pub fn root(&self) -> &PlayerId {
        &self.root
    }

    /// The underlying graph.
    #[must_use]
    pub fn graph(&self) -> &'g PlayerGraph {
        self.graph
    }

    /// Shortest path from the root to `target`, root first.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::NotFound`] if `target` is not in the graph.
    pub fn find_path(&self, target: &PlayerId) -> Result<Vec<PlayerId>> {
        self.graph.shortest_path(&self.root, target)
    }

    /// Shortest path from the root to `target` through `intermediate`, or an
    /// empty vector if no shortest path passes through it.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::NotFound`] if either player is not in the
    /// graph.
    pub fn is_between(&self, target: &PlayerId, intermediate: &PlayerId) -> Result<Vec<PlayerId>> {
        self.graph.path_through(&self.root, target, intermediate)
    }

    /// Players wearing `number`, ordered by ID.
    #[must_use]
    pub fn player_with_num(&self, number: i64) -> Vec<PlayerId> {
        self.graph.players_with_number(number)
    }

    /// Whether the whole graph is a single component.
    #[must_use]
    pub fn is_fully_connected(&self) -> bool {
        self.graph.is_fully_connected()
    }
}
