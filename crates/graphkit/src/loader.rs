//! Text graph loader.
//!
//! Every input starts with two integers `V M` (vertex and edge counts)
//! followed by `M` edge records. Tokens are whitespace separated and line
//! breaks carry no meaning. Three record shapes are supported:
//!
//! - [`read_undirected`]: `u v w`, inserted in both directions
//! - [`read_directed`]: `u v`, a directed arc plus its reversed twin
//! - [`read_edge_list`]: `u v w`, collected flat for sorting
//!
//! Any malformed or short input fails the whole load; no partial graph is
//! returned.

use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::str::SplitWhitespace;

use tracing::debug;

use crate::models::{CsrGraph, CsrGraphBuilder, DirectedGraph, EdgeList, VertexId, WeightedEdge};
use crate::{GraphError, Result};

/// Upper bound on up-front edge allocation; the header is untrusted.
const MAX_PREALLOCATED_EDGES: usize = 1 << 16;

/// Parsed `V M` header.
#[derive(Debug, Clone, Copy)]
struct Header {
    num_vertices: usize,
    num_edges: usize,
}

impl Header {
    fn capacity(&self) -> usize {
        self.num_edges.min(MAX_PREALLOCATED_EDGES)
    }
}

/// Whitespace token cursor over a fully read input.
struct Tokens<'a> {
    inner: SplitWhitespace<'a>,
    num_vertices: usize,
    num_edges: usize,
}

impl<'a> Tokens<'a> {
    fn new(input: &'a str) -> Result<Self> {
        let mut inner = input.split_whitespace();
        let v = inner.next().ok_or(GraphError::MissingHeader)?;
        let m = inner.next().ok_or(GraphError::MissingHeader)?;

        let num_vertices = parse_count(v, "vertex count")?;
        let num_edges = parse_count(m, "edge count")?;
        if num_vertices > u32::MAX as usize {
            return Err(GraphError::InvalidToken {
                token: v.to_string(),
                expected: "vertex count",
            });
        }

        Ok(Self {
            inner,
            num_vertices,
            num_edges,
        })
    }

    fn header(&self) -> Header {
        Header {
            num_vertices: self.num_vertices,
            num_edges: self.num_edges,
        }
    }

    /// Next `n` raw tokens of record `index`.
    fn record<const N: usize>(&mut self, index: usize) -> Result<[&'a str; N]> {
        let mut out: [&'a str; N] = [""; N];
        for slot in out.iter_mut() {
            *slot = self.inner.next().ok_or(GraphError::TruncatedEdge {
                index,
                declared: self.num_edges,
            })?;
        }
        Ok(out)
    }

    fn vertex(&self, token: &str, record: usize) -> Result<u32> {
        let vertex: i64 = token.parse().map_err(|_| GraphError::InvalidToken {
            token: token.to_string(),
            expected: "vertex",
        })?;
        if vertex < 1 || vertex as u64 > self.num_vertices as u64 {
            return Err(GraphError::VertexOutOfRange {
                vertex,
                record,
                num_vertices: self.num_vertices,
            });
        }
        Ok(vertex as u32)
    }

    fn weighted_record(&mut self, index: usize) -> Result<(u32, u32, i64)> {
        let [u, v, w] = self.record::<3>(index)?;
        let weight = parse_weight(w)?;
        Ok((self.vertex(u, index)?, self.vertex(v, index)?, weight))
    }

    fn arc_record(&mut self, index: usize) -> Result<(u32, u32)> {
        let [u, v] = self.record::<2>(index)?;
        Ok((self.vertex(u, index)?, self.vertex(v, index)?))
    }
}

fn parse_count(token: &str, expected: &'static str) -> Result<usize> {
    token.parse().map_err(|_| GraphError::InvalidToken {
        token: token.to_string(),
        expected,
    })
}

/// Weights are 32-bit in the input and widened so sums cannot overflow.
fn parse_weight(token: &str) -> Result<i64> {
    token
        .parse::<i32>()
        .map(i64::from)
        .map_err(|_| GraphError::InvalidToken {
            token: token.to_string(),
            expected: "weight",
        })
}

fn read_all<R: Read>(mut reader: R) -> Result<String> {
    let mut input = String::new();
    reader.read_to_string(&mut input)?;
    Ok(input)
}

/// Open an input file, keeping the path in the error.
pub fn open_input(path: impl AsRef<Path>) -> Result<File> {
    let path = path.as_ref();
    File::open(path).map_err(|source| GraphError::Open {
        path: path.to_path_buf(),
        source,
    })
}

/// Read a weighted, undirected graph (`u v w` records).
///
/// Each record is stored as `u -> v` followed by `v -> u`, both with
/// weight `w`.
pub fn read_undirected<R: Read>(reader: R) -> Result<CsrGraph> {
    let input = read_all(reader)?;
    let mut tokens = Tokens::new(&input)?;
    let header = tokens.header();

    let mut builder = CsrGraphBuilder::with_capacity(header.num_vertices, 2 * header.capacity());
    for index in 1..=header.num_edges {
        let (u, v, w) = tokens.weighted_record(index)?;
        builder.add_undirected_edge(u, v, w);
    }

    let graph = builder.build();
    debug!(
        vertices = header.num_vertices,
        edges = header.num_edges,
        arcs = graph.num_arcs(),
        "loaded undirected graph"
    );
    Ok(graph)
}

/// Read an unweighted, directed graph (`u v` records) together with its
/// transpose. Both are built in the same pass over the records.
pub fn read_directed<R: Read>(reader: R) -> Result<DirectedGraph> {
    let input = read_all(reader)?;
    let mut tokens = Tokens::new(&input)?;
    let header = tokens.header();

    let mut forward = CsrGraphBuilder::with_capacity(header.num_vertices, header.capacity());
    let mut transpose = CsrGraphBuilder::with_capacity(header.num_vertices, header.capacity());
    for index in 1..=header.num_edges {
        let (u, v) = tokens.arc_record(index)?;
        forward.add_arc(u, v);
        transpose.add_arc(v, u);
    }

    let graph = DirectedGraph {
        forward: forward.build(),
        transpose: transpose.build(),
    };
    debug!(
        vertices = header.num_vertices,
        arcs = header.num_edges,
        "loaded directed graph"
    );
    Ok(graph)
}

/// Read a flat weighted edge list (`u v w` records).
pub fn read_edge_list<R: Read>(reader: R) -> Result<EdgeList> {
    let input = read_all(reader)?;
    let mut tokens = Tokens::new(&input)?;
    let header = tokens.header();

    let mut edges = Vec::with_capacity(header.capacity());
    for index in 1..=header.num_edges {
        let (u, v, w) = tokens.weighted_record(index)?;
        edges.push(WeightedEdge {
            u: VertexId(u),
            v: VertexId(v),
            weight: w,
        });
    }

    debug!(
        vertices = header.num_vertices,
        edges = edges.len(),
        "loaded edge list"
    );
    Ok(EdgeList::new(header.num_vertices, edges))
}
