//! Classical graph algorithms over 1-based text-file graphs.
//!
//! This crate provides the engines behind the `dijkstra`, `kosaraju`,
//! `kruskal` and `prim` command-line tools:
//!
//! - **Loader**: parses `V M` + edge-record files into CSR graphs or edge lists
//! - **Dijkstra**: single-source shortest paths with a lazy-deletion heap
//! - **Kosaraju**: strongly connected components via two iterative DFS passes
//! - **Kruskal**: minimum spanning forest via sorted edges and union-find
//! - **Prim**: minimum spanning tree grown from a start vertex
//!
//! # Example
//!
//! ```
//! use graphkit::{dijkstra, loader, VertexId};
//!
//! let graph = loader::read_undirected("3 2\n1 2 1\n2 3 1".as_bytes()).unwrap();
//! let paths = dijkstra(&graph, VertexId(1)).unwrap();
//!
//! let rendered: Vec<String> = paths
//!     .iter()
//!     .map(|(v, d)| format!("{}:{}", v, d))
//!     .collect();
//! assert_eq!(rendered.join(" "), "1:0 2:1 3:2");
//! ```

use std::path::PathBuf;

pub mod algorithms;
pub mod loader;
pub mod models;

// Re-export main types
pub use algorithms::dijkstra::{dijkstra, ShortestPaths};
pub use algorithms::kosaraju::{kosaraju, StronglyConnectedComponents};
pub use algorithms::kruskal::kruskal;
pub use algorithms::prim::prim;
pub use algorithms::union_find::UnionFind;
pub use algorithms::SpanningForest;
pub use models::csr::{CsrGraph, CsrGraphBuilder, DirectedGraph, EdgeList, WeightedEdge};
pub use models::node::{Distance, VertexId};

/// Graph loading and algorithm error types.
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    /// Input file could not be opened.
    #[error("Cannot open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Read failure on an already open source.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The `V M` header is missing.
    #[error("Failed to read vertex and edge counts")]
    MissingHeader,

    /// Fewer edge records than the header declared.
    #[error("Failed to read edge {index} of {declared}")]
    TruncatedEdge { index: usize, declared: usize },

    /// A token that does not parse as the expected number.
    #[error("Invalid {expected}: {token:?}")]
    InvalidToken {
        token: String,
        expected: &'static str,
    },

    /// An edge endpoint outside `[1, V]`.
    #[error("Vertex {vertex} in edge {record} is outside [1, {num_vertices}]")]
    VertexOutOfRange {
        vertex: i64,
        record: usize,
        num_vertices: usize,
    },

    /// A start vertex outside `[1, V]`.
    #[error("Invalid vertex: {vertex} (graph has {num_vertices} vertices)")]
    InvalidVertex { vertex: u32, num_vertices: usize },
}

/// Result type for graph operations.
pub type Result<T> = std::result::Result<T, GraphError>;
