//! The teammate graph and its queries.
//!
//! Two players are adjacent iff they appear together in at least one
//! (team, year) group. The graph is built once and never mutated, so a
//! `PlayerGraph` can be shared read-only between threads (e.g. behind an
//! `Arc`) without locking.
//!
//! # Representation
//!
//! - `petgraph::graph::UnGraph<PlayerId, ()>` holds nodes and edges.
//! - `HashMap<PlayerId, NodeIndex>` resolves IDs to nodes.
//! - `BTreeMap<PlayerId, Player>` holds display attributes.
//!
//! Nodes are inserted in ascending ID order, so `NodeIndex` order matches
//! `PlayerId` order. Traversals depend on this for stable tie-breaking.

mod rooted;
mod search;

pub use rooted::RootedGraph;

use crate::domain::{Player, PlayerId, RosterRecord};
use crate::error::{Error, Result};
use crate::roster::RosterIndex;
use petgraph::algo;
use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::visit::{Bfs, EdgeRef};
use search::BfsTree;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet, HashMap};

/// Undirected teammate graph over all loaded players.
#[derive(Debug, Clone)]
pub struct PlayerGraph {
    graph: UnGraph<PlayerId, ()>,
    node_map: HashMap<PlayerId, NodeIndex>,
    players: BTreeMap<PlayerId, Player>,
    group_count: usize,
    skipped_records: usize,
}

/// Summary figures for a built graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GraphStats {
    /// Number of players (nodes)
    pub players: usize,
    /// Number of teammate pairs (edges)
    pub edges: usize,
    /// Number of connected components
    pub components: usize,
    /// Number of (team, year) groups in the source roster
    pub groups: usize,
    /// Rows rejected while indexing
    pub skipped_records: usize,
    /// Largest number of distinct teammates any player has
    pub max_degree: usize,
}

impl PlayerGraph {
    /// Build the graph from roster rows.
    ///
    /// Malformed rows are skipped; see [`RosterIndex::build`].
    pub fn from_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = RosterRecord>,
    {
        Self::from_index(RosterIndex::build(records))
    }

    /// Build the graph from a roster index, consuming it.
    ///
    /// Each group contributes a clique over its members. Edges shared by
    /// several groups are added once; a group of one adds only its node.
    #[must_use]
    pub fn from_index(index: RosterIndex) -> Self {
        let (groups, players, skipped) = index.into_parts();
        let group_count = groups.len();

        let mut graph = UnGraph::with_capacity(players.len(), 0);
        let mut node_map = HashMap::with_capacity(players.len());
        for id in players.keys() {
            let node = graph.add_node(id.clone());
            node_map.insert(id.clone(), node);
        }

        let mut pairs = BTreeSet::new();
        for members in groups.values() {
            let nodes: Vec<NodeIndex> = members.iter().map(|id| node_map[id]).collect();
            for (i, &a) in nodes.iter().enumerate() {
                for &b in &nodes[i + 1..] {
                    pairs.insert((a.min(b), a.max(b)));
                }
            }
        }
        graph.reserve_edges(pairs.len());
        for (a, b) in pairs {
            graph.add_edge(a, b, ());
        }

        tracing::info!(
            players = graph.node_count(),
            edges = graph.edge_count(),
            groups = group_count,
            skipped = skipped.len(),
            "Built player graph"
        );

        Self {
            graph,
            node_map,
            players,
            group_count,
            skipped_records: skipped.len(),
        }
    }

    fn node(&self, id: &PlayerId) -> Result<NodeIndex> {
        self.node_map
            .get(id)
            .copied()
            .ok_or_else(|| Error::NotFound(id.clone()))
    }

    fn ids(&self, nodes: impl IntoIterator<Item = NodeIndex>) -> Vec<PlayerId> {
        nodes.into_iter().map(|n| self.graph[n].clone()).collect()
    }

    /// Bind a root player, giving the per-player query view.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if `root` is not in the graph.
    pub fn rooted(&self, root: &PlayerId) -> Result<RootedGraph<'_>> {
        self.node(root)?;
        Ok(RootedGraph::new(self, root.clone()))
    }

    /// Shortest path from `from` to `to`, both endpoints included.
    ///
    /// Returns `[from]` when the endpoints are equal and an empty vector when
    /// they are in different components. Among equally short paths the one
    /// found first when neighbours are visited in ascending ID order wins.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if either player is not in the graph.
    pub fn shortest_path(&self, from: &PlayerId, to: &PlayerId) -> Result<Vec<PlayerId>> {
        let source = self.node(from)?;
        let target = self.node(to)?;

        let tree = BfsTree::run(&self.graph, source, Some(target));
        Ok(tree
            .path_to(target)
            .map(|path| self.ids(path))
            .unwrap_or_default())
    }

    /// Shortest path from `from` to `to` that passes through `via`.
    ///
    /// Only paths of minimal length count: the result is non-empty iff
    /// `d(from, via) + d(via, to) == d(from, to)`. A longer detour through
    /// `via` yields an empty vector.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if any of the three players is missing.
    pub fn path_through(
        &self,
        from: &PlayerId,
        to: &PlayerId,
        via: &PlayerId,
    ) -> Result<Vec<PlayerId>> {
        let source = self.node(from)?;
        let target = self.node(to)?;
        let middle = self.node(via)?;

        let from_source = BfsTree::run(&self.graph, source, None);
        let (Some(total), Some(first_leg)) =
            (from_source.distance(target), from_source.distance(middle))
        else {
            return Ok(Vec::new());
        };

        let from_middle = BfsTree::run(&self.graph, middle, Some(target));
        let Some(second_leg) = from_middle.distance(target) else {
            return Ok(Vec::new());
        };
        if first_leg + second_leg != total {
            return Ok(Vec::new());
        }

        let (Some(head), Some(tail)) = (from_source.path_to(middle), from_middle.path_to(target))
        else {
            return Ok(Vec::new());
        };
        Ok(self.ids(head.into_iter().chain(tail.into_iter().skip(1))))
    }

    /// Number of edges on a shortest path, or `None` if unreachable.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if either player is not in the graph.
    pub fn distance(&self, from: &PlayerId, to: &PlayerId) -> Result<Option<usize>> {
        let source = self.node(from)?;
        let target = self.node(to)?;
        Ok(BfsTree::run(&self.graph, source, Some(target)).distance(target))
    }

    /// Players whose jersey number equals `number`, ordered by ID.
    #[must_use]
    pub fn players_with_number(&self, number: i64) -> Vec<PlayerId> {
        self.players
            .values()
            .filter(|p| p.number == Some(number))
            .map(|p| p.id.clone())
            .collect()
    }

    /// Whether every player can reach every other.
    ///
    /// An empty graph and a single player both count as connected.
    #[must_use]
    pub fn is_fully_connected(&self) -> bool {
        let Some(start) = self.graph.node_indices().next() else {
            return true;
        };

        let mut bfs = Bfs::new(&self.graph, start);
        let mut visited = 0;
        while bfs.next(&self.graph).is_some() {
            visited += 1;
        }
        visited == self.graph.node_count()
    }

    /// Number of connected components.
    #[must_use]
    pub fn component_count(&self) -> usize {
        algo::connected_components(&self.graph)
    }

    /// Direct teammates of a player, ordered by ID.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if the player is not in the graph.
    pub fn teammates(&self, id: &PlayerId) -> Result<Vec<PlayerId>> {
        let node = self.node(id)?;
        let mut neighbours: Vec<NodeIndex> = self.graph.neighbors(node).collect();
        neighbours.sort_unstable();
        Ok(self.ids(neighbours))
    }

    /// Whether the player is in the graph.
    #[must_use]
    pub fn contains(&self, id: &PlayerId) -> bool {
        self.node_map.contains_key(id)
    }

    /// Display attributes of a player.
    #[must_use]
    pub fn player(&self, id: &PlayerId) -> Option<&Player> {
        self.players.get(id)
    }

    /// All players, ordered by ID.
    pub fn players(&self) -> impl Iterator<Item = &Player> {
        self.players.values()
    }

    /// All player IDs, ascending.
    pub fn node_ids(&self) -> impl Iterator<Item = &PlayerId> {
        self.players.keys()
    }

    /// All edges as `(a, b)` pairs with `a < b`, sorted.
    #[must_use]
    pub fn edges(&self) -> Vec<(PlayerId, PlayerId)> {
        let mut edges: Vec<(NodeIndex, NodeIndex)> = self
            .graph
            .edge_references()
            .map(|e| (e.source().min(e.target()), e.source().max(e.target())))
            .collect();
        edges.sort_unstable();
        edges
            .into_iter()
            .map(|(a, b)| (self.graph[a].clone(), self.graph[b].clone()))
            .collect()
    }

    /// Number of players.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of teammate pairs.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Summary figures.
    #[must_use]
    pub fn stats(&self) -> GraphStats {
        let max_degree = self
            .graph
            .node_indices()
            .map(|n| self.graph.neighbors(n).count())
            .max()
            .unwrap_or(0);

        GraphStats {
            players: self.node_count(),
            edges: self.edge_count(),
            components: self.component_count(),
            groups: self.group_count,
            skipped_records: self.skipped_records,
            max_degree,
        }
    }
}
