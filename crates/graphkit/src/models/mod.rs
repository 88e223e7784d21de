//! Graph data models.
//!
//! - [`CsrGraph`]: Compressed Sparse Row adjacency, 1-based vertices
//! - [`DirectedGraph`]: forward graph paired with its transpose
//! - [`EdgeList`]: flat weighted edge list
//! - [`VertexId`], [`Distance`]: vertex and distance newtypes

pub mod csr;
pub mod node;

pub use csr::{CsrGraph, CsrGraphBuilder, DirectedGraph, EdgeList, WeightedEdge};
pub use node::{Distance, VertexId};
