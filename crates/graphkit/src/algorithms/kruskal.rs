//! Minimum spanning forest via Kruskal's algorithm.
//!
//! Edges are sorted by `(weight, u, v)` and accepted greedily whenever their
//! endpoints still lie in different sets of a [`UnionFind`]. On a
//! disconnected graph every edge is examined and the result is a forest.

use tracing::{debug, trace};

use super::union_find::UnionFind;
use super::SpanningForest;
use crate::models::EdgeList;

/// Kruskal's minimum spanning forest.
///
/// Equal weights are ordered by their endpoints as written in the input,
/// which fixes the order of the accepted edges.
///
/// Time: O(E log E)
pub fn kruskal(mut list: EdgeList) -> SpanningForest {
    let n = list.num_vertices;
    list.edges.sort_by_key(|e| (e.weight, e.u, e.v));

    let mut sets = UnionFind::new(n);
    let mut forest = SpanningForest::default();
    let target = n.saturating_sub(1);

    for edge in &list.edges {
        if forest.len() == target {
            break;
        }

        if !sets.connected(edge.u, edge.v) {
            sets.union(edge.u, edge.v);
            forest.accept(*edge);
            trace!(u = edge.u.0, v = edge.v.0, weight = edge.weight, "accepted edge");
        }
    }

    debug!(
        vertices = n,
        edges = forest.len(),
        cost = forest.total_cost,
        spanning = forest.is_spanning_tree(n),
        "kruskal finished"
    );
    forest
}
