//! Graph algorithms.
//!
//! - [`dijkstra`]: single-source shortest paths
//! - [`kosaraju`]: strongly connected components
//! - [`kruskal`]: minimum spanning forest from sorted edges
//! - [`prim`]: minimum spanning tree grown from a start vertex
//! - [`union_find`]: disjoint-set forest used by Kruskal

pub mod dijkstra;
pub mod kosaraju;
pub mod kruskal;
pub mod prim;
pub mod union_find;

pub use dijkstra::{dijkstra, ShortestPaths};
pub use kosaraju::{kosaraju, StronglyConnectedComponents};
pub use kruskal::kruskal;
pub use prim::prim;
pub use union_find::UnionFind;

use crate::models::{VertexId, WeightedEdge};

/// Result of a minimum spanning tree/forest construction.
///
/// Edges are stored smaller endpoint first, in the order they were
/// accepted.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SpanningForest {
    /// Sum of accepted edge weights.
    pub total_cost: i64,
    /// Accepted edges as `(min, max)` endpoint pairs.
    pub edges: Vec<(VertexId, VertexId)>,
}

impl SpanningForest {
    /// Accept `edge` into the forest.
    pub(crate) fn accept(&mut self, edge: WeightedEdge) {
        self.total_cost += edge.weight;
        self.edges.push(edge.ordered());
    }

    /// Number of accepted edges.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Check if no edge was accepted.
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// True when the edges connect all `num_vertices` vertices.
    pub fn is_spanning_tree(&self, num_vertices: usize) -> bool {
        self.edges.len() == num_vertices.saturating_sub(1)
    }
}
