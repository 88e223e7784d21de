//! Strongly Connected Components via Kosaraju's algorithm.
//!
//! A strongly connected component is a maximal set of vertices where every
//! vertex can reach every other. Two passes:
//!
//! 1. DFS over the graph from every unvisited vertex `1..=V`, recording
//!    vertices in post-order (finish order)
//! 2. DFS over the transpose, starting from vertices in reverse finish
//!    order; each search from an unvisited vertex collects one component
//!
//! Both searches run on an explicit `(vertex, next neighbour)` stack and
//! visit vertices in exactly the order a recursive DFS would.

use tracing::debug;

use crate::models::{CsrGraph, DirectedGraph, VertexId};

/// Components in discovery order.
///
/// Each component lists its vertices in the order the second pass reached
/// them. Components come out in topological order of the condensation:
/// arcs between components only point from earlier to later ones.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StronglyConnectedComponents {
    components: Vec<Vec<VertexId>>,
}

impl StronglyConnectedComponents {
    /// Number of components.
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Check if there are no components (empty graph).
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Components as slices.
    pub fn iter(&self) -> impl Iterator<Item = &[VertexId]> {
        self.components.iter().map(Vec::as_slice)
    }

    /// Consume into the component list.
    pub fn into_inner(self) -> Vec<Vec<VertexId>> {
        self.components
    }

    /// Component index for every vertex, indexed by vertex (slot 0 unused).
    pub fn assignment(&self, num_vertices: usize) -> Vec<Option<usize>> {
        let mut ids = vec![None; num_vertices + 1];
        for (id, members) in self.components.iter().enumerate() {
            for v in members {
                ids[v.index()] = Some(id);
            }
        }
        ids
    }
}

/// Kosaraju's SCC algorithm.
///
/// Time: O(V + E)
pub fn kosaraju(graph: &DirectedGraph) -> StronglyConnectedComponents {
    let n = graph.num_vertices();

    // Pass 1: finish order on the forward graph
    let mut visited = vec![false; n + 1];
    let mut finish_order = Vec::with_capacity(n);
    for start in graph.forward.vertices() {
        if !visited[start.index()] {
            depth_first(&graph.forward, start, &mut visited, |_| {}, |v| {
                finish_order.push(v)
            });
        }
    }

    // Pass 2: transpose, latest finisher first
    visited.fill(false);
    let mut components = Vec::new();
    for &leader in finish_order.iter().rev() {
        if !visited[leader.index()] {
            let mut component = Vec::new();
            depth_first(&graph.transpose, leader, &mut visited, |v| component.push(v), |_| {});
            components.push(component);
        }
    }

    debug!(vertices = n, components = components.len(), "kosaraju finished");
    StronglyConnectedComponents { components }
}

/// Iterative DFS from `start`, calling `on_enter` when a vertex is first
/// reached and `on_exit` once all of its descendants are done.
fn depth_first(
    graph: &CsrGraph,
    start: VertexId,
    visited: &mut [bool],
    mut on_enter: impl FnMut(VertexId),
    mut on_exit: impl FnMut(VertexId),
) {
    visited[start.index()] = true;
    on_enter(start);
    let mut stack: Vec<(VertexId, usize)> = vec![(start, 0)];

    while let Some(frame) = stack.last_mut() {
        let (v, next) = *frame;
        let neighbors = graph.neighbors(v);

        if next < neighbors.len() {
            frame.1 += 1;
            let w = VertexId(neighbors[next]);
            if !visited[w.index()] {
                visited[w.index()] = true;
                on_enter(w);
                stack.push((w, 0));
            }
        } else {
            stack.pop();
            on_exit(v);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(scc: &StronglyConnectedComponents) -> Vec<Vec<u32>> {
        scc.iter()
            .map(|c| c.iter().map(|v| v.get()).collect())
            .collect()
    }

    fn sorted(scc: &StronglyConnectedComponents) -> Vec<Vec<u32>> {
        let mut out: Vec<Vec<u32>> = ids(scc)
            .into_iter()
            .map(|mut c| {
                c.sort();
                c
            })
            .collect();
        out.sort();
        out
    }

    #[test]
    fn test_single_vertex() {
        let g = DirectedGraph::from_arcs(1, &[]);
        assert_eq!(ids(&kosaraju(&g)), vec![vec![1]]);
    }

    #[test]
    fn test_line_graph_order() {
        // 1 -> 2 -> 3: no cycles, upstream components first
        let g = DirectedGraph::from_arcs(3, &[(1, 2), (2, 3)]);
        assert_eq!(ids(&kosaraju(&g)), vec![vec![1], vec![2], vec![3]]);
    }

    #[test]
    fn test_cycle() {
        let g = DirectedGraph::from_arcs(3, &[(1, 2), (2, 3), (3, 1)]);
        let scc = kosaraju(&g);
        assert_eq!(scc.len(), 1);
        // Leader first, then transpose DFS order: 1 <- 3 <- 2
        assert_eq!(ids(&scc), vec![vec![1, 3, 2]]);
    }

    #[test]
    fn test_two_cycles_joined() {
        // 1 <-> 2, 3 <-> 4, with 2 -> 3
        let g = DirectedGraph::from_arcs(4, &[(1, 2), (2, 1), (2, 3), (3, 4), (4, 3)]);
        let scc = kosaraju(&g);
        assert_eq!(sorted(&scc), vec![vec![1, 2], vec![3, 4]]);
        // Source component is discovered first
        assert!(scc.iter().next().unwrap().contains(&VertexId(1)));
    }

    #[test]
    fn test_mixed_graph() {
        let arcs = [
            (1, 2),
            (2, 3),
            (3, 1), // Cycle 1-2-3
            (3, 4),
            (4, 5),
            (5, 4), // Cycle 4-5
            (6, 7),
            (7, 6), // Cycle 6-7
        ];
        let g = DirectedGraph::from_arcs(7, &arcs);
        assert_eq!(
            sorted(&kosaraju(&g)),
            vec![vec![1, 2, 3], vec![4, 5], vec![6, 7]]
        );
    }

    #[test]
    fn test_disconnected_vertices() {
        let g = DirectedGraph::from_arcs(3, &[]);
        let scc = kosaraju(&g);
        assert_eq!(scc.len(), 3);
        assert_eq!(sorted(&scc), vec![vec![1], vec![2], vec![3]]);
    }

    #[test]
    fn test_assignment_partitions_vertices() {
        let g = DirectedGraph::from_arcs(5, &[(1, 2), (2, 1), (3, 4)]);
        let scc = kosaraju(&g);
        let assignment = scc.assignment(5);

        assert_eq!(assignment[0], None);
        assert!(assignment[1..].iter().all(Option::is_some));
        assert_eq!(assignment[1], assignment[2]);
        assert_ne!(assignment[3], assignment[4]);
    }

    #[test]
    fn test_deep_chain_does_not_overflow() {
        let n = 200_000u32;
        let arcs: Vec<_> = (1..n).map(|i| (i, i + 1)).collect();
        let g = DirectedGraph::from_arcs(n as usize, &arcs);
        assert_eq!(kosaraju(&g).len(), n as usize);
    }

    #[test]
    fn test_empty_graph() {
        let g = DirectedGraph::from_arcs(0, &[]);
        assert!(kosaraju(&g).is_empty());
    }
}
