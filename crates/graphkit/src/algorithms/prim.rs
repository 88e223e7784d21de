//! Minimum spanning tree via Prim's algorithm.
//!
//! Grows a single tree from a start vertex, always admitting the cheapest
//! edge that leaves it. Candidates sit in a min-heap of `(weight, vertex)`
//! with lazy deletion, like Dijkstra's.
//!
//! Only the start vertex's component is covered. Unlike Kruskal, the search
//! does not restart from vertices it never reached, so on a disconnected
//! graph the cost covers the start component alone.
//!
//! Every admitted edge counts towards the cost and the edge list, including
//! edges of weight zero or below.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use tracing::debug;

use super::SpanningForest;
use crate::models::{CsrGraph, VertexId, WeightedEdge};
use crate::{GraphError, Result};

/// Prim's minimum spanning tree from `start`.
///
/// Time: O(E log E)
///
/// # Errors
///
/// [`GraphError::InvalidVertex`] if `start` is outside `[1, V]`.
pub fn prim(graph: &CsrGraph, start: VertexId) -> Result<SpanningForest> {
    let n = graph.num_vertices;
    if !graph.contains(start) {
        return Err(GraphError::InvalidVertex {
            vertex: start.0,
            num_vertices: n,
        });
    }

    let mut in_tree = vec![false; n + 1];
    // None until some tree vertex offers an edge
    let mut min_weight: Vec<Option<i64>> = vec![None; n + 1];
    let mut parent: Vec<Option<VertexId>> = vec![None; n + 1];

    let mut forest = SpanningForest::default();
    let target = n - 1;

    min_weight[start.index()] = Some(0);
    let mut heap = BinaryHeap::new();
    heap.push(Reverse((0i64, start.0)));

    while forest.len() < target {
        let Some(Reverse((weight, u))) = heap.pop() else {
            break;
        };
        let u = VertexId(u);
        if in_tree[u.index()] {
            continue;
        }
        in_tree[u.index()] = true;

        // The seed has no parent and contributes no edge
        if let Some(p) = parent[u.index()] {
            forest.accept(WeightedEdge { u, v: p, weight });
        }

        for (v, w) in graph.weighted_neighbors(u) {
            let slot = v.index();
            if !in_tree[slot] && min_weight[slot].map_or(true, |best| w < best) {
                min_weight[slot] = Some(w);
                parent[slot] = Some(u);
                heap.push(Reverse((w, v.0)));
            }
        }
    }

    debug!(
        start = start.0,
        edges = forest.len(),
        cost = forest.total_cost,
        spanning = forest.is_spanning_tree(n),
        "prim finished"
    );
    Ok(forest)
}
