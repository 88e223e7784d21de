//! Compressed Sparse Row (CSR) adjacency for 1-based graphs.
//!
//! CSR keeps every outgoing arc of every vertex in one contiguous array:
//! - `row_ptr[v]..row_ptr[v + 1]` = slice of `col_idx` holding v's neighbours
//! - `weights` (optional) runs parallel to `col_idx`
//!
//! Rows are indexed directly by vertex number, so row 0 exists but is always
//! empty. Within a row, neighbours keep the order their arcs were added in,
//! which is the order of the records in the input file.

use super::node::VertexId;

/// Weighted edge as read from an input record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeightedEdge {
    /// First endpoint.
    pub u: VertexId,
    /// Second endpoint.
    pub v: VertexId,
    /// Edge weight.
    pub weight: i64,
}

impl WeightedEdge {
    /// Create a new edge.
    pub fn new(u: u32, v: u32, weight: i64) -> Self {
        Self {
            u: VertexId(u),
            v: VertexId(v),
            weight,
        }
    }

    /// Endpoints with the smaller vertex first.
    pub fn ordered(&self) -> (VertexId, VertexId) {
        if self.u <= self.v {
            (self.u, self.v)
        } else {
            (self.v, self.u)
        }
    }
}

/// Flat edge list, the input shape for Kruskal.
#[derive(Debug, Clone, Default)]
pub struct EdgeList {
    /// Number of vertices (V).
    pub num_vertices: usize,
    /// Edges in input order.
    pub edges: Vec<WeightedEdge>,
}

impl EdgeList {
    /// Create an edge list over `num_vertices` vertices.
    pub fn new(num_vertices: usize, edges: Vec<WeightedEdge>) -> Self {
        Self {
            num_vertices,
            edges,
        }
    }

    /// Number of edges.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Check if there are no edges.
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

/// CSR adjacency structure.
#[derive(Debug, Clone)]
pub struct CsrGraph {
    /// Number of vertices (V). Valid vertices are `1..=num_vertices`.
    pub num_vertices: usize,
    /// Row pointers (length = num_vertices + 2).
    pub row_ptr: Vec<u64>,
    /// Arc heads (length = number of arcs).
    pub col_idx: Vec<u32>,
    /// Optional arc weights.
    pub weights: Option<Vec<i64>>,
}

impl CsrGraph {
    /// Create a graph with no arcs.
    pub fn empty(num_vertices: usize) -> Self {
        Self {
            num_vertices,
            row_ptr: vec![0; num_vertices + 2],
            col_idx: Vec::new(),
            weights: None,
        }
    }

    /// Create a directed, unweighted graph from arcs.
    ///
    /// # Example
    ///
    /// ```
    /// use graphkit::CsrGraph;
    ///
    /// // 1 -> 2 -> 3
    /// let g = CsrGraph::from_arcs(3, &[(1, 2), (2, 3)]);
    /// assert_eq!(g.num_arcs(), 2);
    /// ```
    pub fn from_arcs(num_vertices: usize, arcs: &[(u32, u32)]) -> Self {
        CsrGraphBuilder::new(num_vertices).with_arcs(arcs).build()
    }

    /// Create a directed, weighted graph from arcs.
    pub fn from_weighted_arcs(num_vertices: usize, arcs: &[(u32, u32, i64)]) -> Self {
        CsrGraphBuilder::new(num_vertices)
            .with_weighted_arcs(arcs)
            .build()
    }

    /// Create an undirected, weighted graph: every edge becomes two arcs.
    pub fn from_undirected_edges(num_vertices: usize, edges: &[(u32, u32, i64)]) -> Self {
        let mut builder = CsrGraphBuilder::new(num_vertices);
        for &(u, v, w) in edges {
            builder.add_undirected_edge(u, v, w);
        }
        builder.build()
    }

    /// Number of arcs.
    pub fn num_arcs(&self) -> usize {
        self.col_idx.len()
    }

    /// Check if the graph has no arcs.
    pub fn is_empty(&self) -> bool {
        self.col_idx.is_empty()
    }

    /// Iterate over all valid vertices, `1..=V`.
    pub fn vertices(&self) -> impl Iterator<Item = VertexId> {
        (1..=self.num_vertices as u32).map(VertexId)
    }

    /// Check that a vertex lies in `[1, V]`.
    pub fn contains(&self, vertex: VertexId) -> bool {
        vertex.is_within(self.num_vertices)
    }

    fn row(&self, vertex: VertexId) -> Option<(usize, usize)> {
        if !self.contains(vertex) {
            return None;
        }
        let i = vertex.index();
        Some((self.row_ptr[i] as usize, self.row_ptr[i + 1] as usize))
    }

    /// Neighbours of a vertex in insertion order.
    pub fn neighbors(&self, vertex: VertexId) -> &[u32] {
        match self.row(vertex) {
            Some((start, end)) => &self.col_idx[start..end],
            None => &[],
        }
    }

    /// Neighbours with weights, in insertion order. Unweighted graphs
    /// report weight 1.
    pub fn weighted_neighbors(&self, vertex: VertexId) -> impl Iterator<Item = (VertexId, i64)> + '_ {
        let (start, end) = self.row(vertex).unwrap_or((0, 0));
        let weights = self.weights.as_deref().map(|w| &w[start..end]);
        self.col_idx[start..end]
            .iter()
            .enumerate()
            .map(move |(i, &col)| (VertexId(col), weights.map_or(1, |w| w[i])))
    }

    /// Check if an arc exists from `src` to `dst`.
    pub fn has_arc(&self, src: VertexId, dst: VertexId) -> bool {
        self.neighbors(src).contains(&dst.0)
    }

    /// A value strictly larger than the weight of any simple path:
    /// `1 + Σ|w|` over all arcs, saturating.
    pub fn weight_bound(&self) -> i64 {
        self.weights
            .as_deref()
            .unwrap_or(&[])
            .iter()
            .fold(1i64, |acc, w| acc.saturating_add(w.saturating_abs()))
            .max(self.num_arcs() as i64 + 1)
    }
}

/// Directed graph together with its transpose, as Kosaraju consumes it.
#[derive(Debug, Clone)]
pub struct DirectedGraph {
    /// Arcs as read.
    pub forward: CsrGraph,
    /// Arcs reversed.
    pub transpose: CsrGraph,
}

impl DirectedGraph {
    /// Build from forward arcs; the transpose is derived.
    pub fn from_arcs(num_vertices: usize, arcs: &[(u32, u32)]) -> Self {
        let mut forward = CsrGraphBuilder::new(num_vertices);
        let mut transpose = CsrGraphBuilder::new(num_vertices);
        for &(u, v) in arcs {
            forward.add_arc(u, v);
            transpose.add_arc(v, u);
        }
        Self {
            forward: forward.build(),
            transpose: transpose.build(),
        }
    }

    /// Number of vertices.
    pub fn num_vertices(&self) -> usize {
        self.forward.num_vertices
    }
}

/// Builder for CSR graphs.
#[derive(Debug, Default)]
pub struct CsrGraphBuilder {
    num_vertices: usize,
    arcs: Vec<(u32, u32, Option<i64>)>,
}

impl CsrGraphBuilder {
    /// Create new builder over `num_vertices` vertices.
    pub fn new(num_vertices: usize) -> Self {
        Self {
            num_vertices,
            arcs: Vec::new(),
        }
    }

    /// Create a builder with room for `capacity` arcs.
    pub fn with_capacity(num_vertices: usize, capacity: usize) -> Self {
        Self {
            num_vertices,
            arcs: Vec::with_capacity(capacity),
        }
    }

    /// Add arcs from slice.
    pub fn with_arcs(mut self, arcs: &[(u32, u32)]) -> Self {
        for &(src, dst) in arcs {
            self.arcs.push((src, dst, None));
        }
        self
    }

    /// Add weighted arcs from slice.
    pub fn with_weighted_arcs(mut self, arcs: &[(u32, u32, i64)]) -> Self {
        for &(src, dst, w) in arcs {
            self.arcs.push((src, dst, Some(w)));
        }
        self
    }

    /// Add a single arc.
    pub fn add_arc(&mut self, src: u32, dst: u32) {
        self.arcs.push((src, dst, None));
    }

    /// Add a weighted arc.
    pub fn add_weighted_arc(&mut self, src: u32, dst: u32, weight: i64) {
        self.arcs.push((src, dst, Some(weight)));
    }

    /// Add an undirected edge as `u -> v` followed by `v -> u`.
    pub fn add_undirected_edge(&mut self, u: u32, v: u32, weight: i64) {
        self.add_weighted_arc(u, v, weight);
        self.add_weighted_arc(v, u, weight);
    }

    /// Build the CSR graph.
    ///
    /// Arcs whose endpoints fall outside `[1, V]` are dropped; the loaders
    /// reject such input before it reaches the builder.
    pub fn build(mut self) -> CsrGraph {
        let n = self.num_vertices;
        self.arcs.retain(|&(src, dst, _)| {
            VertexId(src).is_within(n) && VertexId(dst).is_within(n)
        });

        // Stable: arcs of one row keep insertion order
        self.arcs.sort_by_key(|a| a.0);

        let has_weights = self.arcs.iter().any(|a| a.2.is_some());

        let mut row_ptr = vec![0u64; n + 2];
        for &(src, _, _) in &self.arcs {
            row_ptr[src as usize + 1] += 1;
        }
        for i in 1..n + 2 {
            row_ptr[i] += row_ptr[i - 1];
        }

        let col_idx: Vec<u32> = self.arcs.iter().map(|a| a.1).collect();
        let weights = if has_weights {
            Some(self.arcs.iter().map(|a| a.2.unwrap_or(1)).collect())
        } else {
            None
        };

        CsrGraph {
            num_vertices: n,
            row_ptr,
            col_idx,
            weights,
        }
    }
}
