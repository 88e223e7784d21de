//! Dijkstra's single-source shortest paths.
//!
//! Binary heap of `(distance, vertex)` with lazy deletion: a vertex may sit
//! in the heap several times and superseded entries are skipped when popped.
//! Requires non-negative weights; negative weights are not detected.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use tracing::debug;

use crate::models::{CsrGraph, Distance, VertexId};
use crate::{GraphError, Result};

/// Distances from one source to every vertex.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPaths {
    source: VertexId,
    /// Indexed by vertex; slot 0 unused.
    distances: Vec<Distance>,
}

impl ShortestPaths {
    /// Source vertex.
    pub fn source(&self) -> VertexId {
        self.source
    }

    /// Number of vertices.
    pub fn num_vertices(&self) -> usize {
        self.distances.len() - 1
    }

    /// Distance to `vertex`, or `None` if it is not in the graph.
    pub fn distance(&self, vertex: VertexId) -> Option<Distance> {
        if vertex.is_within(self.num_vertices()) {
            Some(self.distances[vertex.index()])
        } else {
            None
        }
    }

    /// `(vertex, distance)` for vertices `1..=V` in order.
    pub fn iter(&self) -> impl Iterator<Item = (VertexId, Distance)> + '_ {
        self.distances
            .iter()
            .enumerate()
            .skip(1)
            .map(|(v, &d)| (VertexId(v as u32), d))
    }
}

/// Shortest distances from `source` over a weighted graph.
///
/// Time: O((V + E) log E)
///
/// # Errors
///
/// [`GraphError::InvalidVertex`] if `source` is outside `[1, V]`.
pub fn dijkstra(graph: &CsrGraph, source: VertexId) -> Result<ShortestPaths> {
    let n = graph.num_vertices;
    if !graph.contains(source) {
        return Err(GraphError::InvalidVertex {
            vertex: source.0,
            num_vertices: n,
        });
    }

    // Larger than any simple path, so it never collides with a real distance
    let infinite = graph.weight_bound();
    let mut dist = vec![infinite; n + 1];
    dist[source.index()] = 0;

    let mut heap = BinaryHeap::new();
    heap.push(Reverse((0i64, source.0)));

    let mut stale = 0usize;
    let mut relaxed = 0usize;

    while let Some(Reverse((d, u))) = heap.pop() {
        let u = VertexId(u);
        if d > dist[u.index()] {
            stale += 1;
            continue;
        }

        for (v, w) in graph.weighted_neighbors(u) {
            let candidate = d.saturating_add(w);
            if candidate < dist[v.index()] {
                dist[v.index()] = candidate;
                heap.push(Reverse((candidate, v.0)));
                relaxed += 1;
            }
        }
    }

    let distances: Vec<Distance> = dist
        .into_iter()
        .map(|d| {
            if d >= infinite {
                Distance::UNREACHABLE
            } else {
                Distance(d)
            }
        })
        .collect();

    debug!(
        source = source.0,
        relaxed,
        stale,
        reachable = distances.iter().skip(1).filter(|d| d.is_reachable()).count(),
        "dijkstra finished"
    );

    Ok(ShortestPaths { source, distances })
}
