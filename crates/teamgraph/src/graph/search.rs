//! Breadth-first search with deterministic neighbour order.
//!
//! Node indices are assigned in ascending [`PlayerId`] order when the graph
//! is built, so visiting neighbours in ascending index order is the same as
//! visiting them by ID.
//!
//! [`PlayerId`]: crate::domain::PlayerId

use petgraph::graph::{NodeIndex, UnGraph};
use std::collections::VecDeque;

/// Distances and BFS-tree parents from one source node.
///
/// A node's parent is the neighbour that discovered it first, which makes
/// the reconstructed path the lexicographically earliest among equal-length
/// alternatives at each step.
pub(super) struct BfsTree {
    source: NodeIndex,
    dist: Vec<Option<usize>>,
    parent: Vec<Option<NodeIndex>>,
}

impl BfsTree {
    /// Run BFS from `source`. Stops early once `stop_at` has been reached.
    pub(super) fn run<N, E>(
        graph: &UnGraph<N, E>,
        source: NodeIndex,
        stop_at: Option<NodeIndex>,
    ) -> Self {
        let n = graph.node_count();
        let mut tree = Self {
            source,
            dist: vec![None; n],
            parent: vec![None; n],
        };
        tree.dist[source.index()] = Some(0);

        if stop_at == Some(source) {
            return tree;
        }

        let mut queue = VecDeque::from([source]);
        let mut neighbours = Vec::new();

        while let Some(current) = queue.pop_front() {
            let next_dist = tree.dist[current.index()].map_or(0, |d| d + 1);

            neighbours.clear();
            neighbours.extend(graph.neighbors(current));
            neighbours.sort_unstable();

            for &next in &neighbours {
                if tree.dist[next.index()].is_some() {
                    continue;
                }
                tree.dist[next.index()] = Some(next_dist);
                tree.parent[next.index()] = Some(current);
                if stop_at == Some(next) {
                    return tree;
                }
                queue.push_back(next);
            }
        }

        tree
    }

    /// Edge count from the source, or `None` if unreachable.
    pub(super) fn distance(&self, node: NodeIndex) -> Option<usize> {
        self.dist[node.index()]
    }

    /// Path from the source to `node`, source first. `None` if unreachable.
    pub(super) fn path_to(&self, node: NodeIndex) -> Option<Vec<NodeIndex>> {
        let len = self.distance(node)?;
        let mut path = Vec::with_capacity(len + 1);
        let mut current = node;
        path.push(current);
        while current != self.source {
            current = self.parent[current.index()]?;
            path.push(current);
        }
        path.reverse();
        Some(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 0 - 1 - 3
    ///  \     /
    ///   2 --/      4 (isolated)
    fn diamond() -> UnGraph<(), ()> {
        let mut graph = UnGraph::new_undirected();
        let n: Vec<_> = (0..5).map(|_| graph.add_node(())).collect();
        graph.extend_with_edges([(n[0], n[1]), (n[0], n[2]), (n[1], n[3]), (n[2], n[3])]);
        graph
    }

    #[test]
    fn distances_from_source() {
        let graph = diamond();
        let tree = BfsTree::run(&graph, NodeIndex::new(0), None);

        assert_eq!(tree.distance(NodeIndex::new(0)), Some(0));
        assert_eq!(tree.distance(NodeIndex::new(3)), Some(2));
        assert_eq!(tree.distance(NodeIndex::new(4)), None);
    }

    #[test]
    fn ties_resolve_to_lowest_index() {
        let graph = diamond();
        let tree = BfsTree::run(&graph, NodeIndex::new(0), None);

        let path = tree.path_to(NodeIndex::new(3)).unwrap();
        assert_eq!(path, vec![NodeIndex::new(0), NodeIndex::new(1), NodeIndex::new(3)]);
    }

    #[test]
    fn early_stop_still_yields_path() {
        let graph = diamond();
        let tree = BfsTree::run(&graph, NodeIndex::new(3), Some(NodeIndex::new(0)));

        assert_eq!(tree.distance(NodeIndex::new(0)), Some(2));
        assert_eq!(tree.path_to(NodeIndex::new(0)).unwrap().len(), 3);
    }

    #[test]
    fn unreachable_has_no_path() {
        let graph = diamond();
        let tree = BfsTree::run(&graph, NodeIndex::new(0), None);
        assert!(tree.path_to(NodeIndex::new(4)).is_none());
    }
}
