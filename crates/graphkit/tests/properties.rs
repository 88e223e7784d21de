//! Property tests for the graph engines on random small graphs.

use std::collections::VecDeque;

use graphkit::{
    dijkstra, kosaraju, kruskal, prim, CsrGraph, DirectedGraph, EdgeList, UnionFind, VertexId,
    WeightedEdge,
};
use proptest::collection::vec as prop_vec;
use proptest::prelude::*;

/// Vertex count plus weighted edges over `1..=n`.
fn weighted_graph() -> impl Strategy<Value = (usize, Vec<(u32, u32, i64)>)> {
    (1usize..12).prop_flat_map(|n| {
        let vertex = 1..=n as u32;
        (
            Just(n),
            prop_vec((vertex.clone(), vertex, 0i64..50), 0..30),
        )
    })
}

/// Connected weighted graph: a random spanning path plus random extras.
fn connected_graph() -> impl Strategy<Value = (usize, Vec<(u32, u32, i64)>)> {
    (1usize..12).prop_flat_map(|n| {
        let vertex = 1..=n as u32;
        (
            Just(n),
            prop_vec(-20i64..50, n - 1),
            prop_vec((vertex.clone(), vertex, -20i64..50), 0..25),
        )
            .prop_map(|(n, path_weights, extra)| {
                let mut edges: Vec<_> = path_weights
                    .into_iter()
                    .enumerate()
                    .map(|(i, w)| (i as u32 + 1, i as u32 + 2, w))
                    .collect();
                edges.extend(extra);
                (n, edges)
            })
    })
}

/// Vertex count plus directed arcs over `1..=n`.
fn directed_graph() -> impl Strategy<Value = (usize, Vec<(u32, u32)>)> {
    (1usize..12).prop_flat_map(|n| {
        let vertex = 1..=n as u32;
        (Just(n), prop_vec((vertex.clone(), vertex), 0..30))
    })
}

/// Bellman-Ford style relaxation to a fixed point.
fn brute_force_distances(n: usize, edges: &[(u32, u32, i64)], source: u32) -> Vec<i64> {
    let mut dist: Vec<Option<i64>> = vec![None; n + 1];
    dist[source as usize] = Some(0);
    for _ in 0..n {
        for &(u, v, w) in edges {
            for (a, b) in [(u, v), (v, u)] {
                if let Some(da) = dist[a as usize] {
                    let candidate = da + w;
                    if dist[b as usize].map_or(true, |db| candidate < db) {
                        dist[b as usize] = Some(candidate);
                    }
                }
            }
        }
    }
    dist[1..].iter().map(|d| d.unwrap_or(-1)).collect()
}

fn reachable(n: usize, arcs: &[(u32, u32)], from: u32) -> Vec<bool> {
    let mut adj = vec![Vec::new(); n + 1];
    for &(u, v) in arcs {
        adj[u as usize].push(v);
    }
    let mut seen = vec![false; n + 1];
    let mut queue = VecDeque::from([from]);
    seen[from as usize] = true;
    while let Some(u) = queue.pop_front() {
        for &v in &adj[u as usize] {
            if !seen[v as usize] {
                seen[v as usize] = true;
                queue.push_back(v);
            }
        }
    }
    seen
}

fn edge_list(n: usize, edges: &[(u32, u32, i64)]) -> EdgeList {
    EdgeList::new(
        n,
        edges
            .iter()
            .map(|&(u, v, w)| WeightedEdge::new(u, v, w))
            .collect(),
    )
}

proptest! {
    #[test]
    fn prop_dijkstra_matches_brute_force((n, edges) in weighted_graph(), source_seed in 0usize..64) {
        let source = (source_seed % n) as u32 + 1;
        let graph = CsrGraph::from_undirected_edges(n, &edges);
        let paths = dijkstra(&graph, VertexId(source)).unwrap();

        prop_assert_eq!(paths.distance(VertexId(source)).unwrap().get(), 0);
        let actual: Vec<i64> = paths.iter().map(|(_, d)| d.get()).collect();
        prop_assert_eq!(actual, brute_force_distances(n, &edges, source));
    }

    #[test]
    fn prop_scc_partitions_into_mutually_reachable_sets((n, arcs) in directed_graph()) {
        let graph = DirectedGraph::from_arcs(n, &arcs);
        let scc = kosaraju(&graph);
        let assignment = scc.assignment(n);

        let total: usize = scc.iter().map(|c| c.len()).sum();
        prop_assert_eq!(total, n);
        prop_assert!(assignment[1..].iter().all(Option::is_some));

        let reach: Vec<Vec<bool>> = (0..=n as u32)
            .map(|v| if v == 0 { Vec::new() } else { reachable(n, &arcs, v) })
            .collect();
        for u in 1..=n {
            for v in 1..=n {
                let mutual = reach[u][v] && reach[v][u];
                prop_assert_eq!(assignment[u] == assignment[v], mutual, "vertices {} and {}", u, v);
            }
        }

        // Arcs between components only point forward in discovery order
        for &(u, v) in &arcs {
            prop_assert!(assignment[u as usize] <= assignment[v as usize]);
        }
    }

    #[test]
    fn prop_kruskal_and_prim_agree_on_connected_graphs(
        (n, edges) in connected_graph(),
        start_seed in 0usize..64,
    ) {
        let start = (start_seed % n) as u32 + 1;
        let by_kruskal = kruskal(edge_list(n, &edges));
        let by_prim = prim(&CsrGraph::from_undirected_edges(n, &edges), VertexId(start)).unwrap();

        prop_assert_eq!(by_kruskal.total_cost, by_prim.total_cost);
        prop_assert!(by_kruskal.is_spanning_tree(n));
        prop_assert!(by_prim.is_spanning_tree(n));

        for forest in [&by_kruskal, &by_prim] {
            let mut sets = UnionFind::new(n);
            for &(a, b) in &forest.edges {
                prop_assert!(a < b);
                prop_assert!(sets.union(a, b), "cycle through {}-{}", a, b);
            }
        }
    }

    #[test]
    fn prop_kruskal_forest_covers_every_component((n, edges) in weighted_graph()) {
        let forest = kruskal(edge_list(n, &edges));

        let mut components = UnionFind::new(n);
        for &(u, v, _) in &edges {
            components.union(VertexId(u), VertexId(v));
        }
        prop_assert_eq!(forest.len(), n - components.num_sets());
    }

    #[test]
    fn prop_engines_are_deterministic((n, edges) in weighted_graph()) {
        let graph = CsrGraph::from_undirected_edges(n, &edges);
        prop_assert_eq!(
            dijkstra(&graph, VertexId(1)).unwrap(),
            dijkstra(&graph, VertexId(1)).unwrap()
        );
        prop_assert_eq!(
            prim(&graph, VertexId(1)).unwrap(),
            prim(&graph, VertexId(1)).unwrap()
        );
        prop_assert_eq!(kruskal(edge_list(n, &edges)), kruskal(edge_list(n, &edges)));

        let arcs: Vec<(u32, u32)> = edges.iter().map(|&(u, v, _)| (u, v)).collect();
        let directed = DirectedGraph::from_arcs(n, &arcs);
        prop_assert_eq!(kosaraju(&directed), kosaraju(&directed));
    }
}
