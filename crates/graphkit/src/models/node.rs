//! Vertex and distance types.
//!
//! - [`VertexId`]: 1-based vertex identifier
//! - [`Distance`]: shortest-path distance, with -1 marking unreachable

use std::fmt;

/// Vertex identifier.
///
/// Vertices are numbered from 1 to V as in the input files. Index 0 is
/// never a valid vertex; CSR rows reserve it so vertices index directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
#[repr(transparent)]
pub struct VertexId(pub u32);

impl VertexId {
    /// Create a new vertex ID.
    pub const fn new(id: u32) -> Self {
        VertexId(id)
    }

    /// Get the inner value.
    pub const fn get(&self) -> u32 {
        self.0
    }

    /// Row/slot index for per-vertex arrays sized `V + 1`.
    pub const fn index(&self) -> usize {
        self.0 as usize
    }

    /// Check that the vertex lies in `[1, num_vertices]`.
    pub const fn is_within(&self, num_vertices: usize) -> bool {
        self.0 >= 1 && (self.0 as usize) <= num_vertices
    }
}

impl From<u32> for VertexId {
    fn from(id: u32) -> Self {
        VertexId(id)
    }
}

impl From<VertexId> for usize {
    fn from(id: VertexId) -> Self {
        id.0 as usize
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Final shortest-path distance.
///
/// Engines work with an input-derived sentinel internally and only expose
/// finished values: either a real path weight or [`Distance::UNREACHABLE`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
#[repr(transparent)]
pub struct Distance(pub i64);

impl Distance {
    /// No path from the source.
    pub const UNREACHABLE: Distance = Distance(-1);

    /// Distance of the source to itself.
    pub const ZERO: Distance = Distance(0);

    /// Create a new distance.
    pub const fn new(d: i64) -> Self {
        Distance(d)
    }

    /// Check if the vertex is reachable.
    pub const fn is_reachable(&self) -> bool {
        self.0 != -1
    }

    /// Get the inner value.
    pub const fn get(&self) -> i64 {
        self.0
    }
}

impl From<i64> for Distance {
    fn from(d: i64) -> Self {
        Distance(d)
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
