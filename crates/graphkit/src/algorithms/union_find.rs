//! Union-Find (Disjoint Set) data structure.
//!
//! Tracks a partition of the vertices `1..=V`:
//! - `find(x)`: representative of x's set, compressing the path on the way
//! - `union(x, y)`: merge the sets holding x and y
//!
//! Union attaches the second root directly under the first. There is no
//! rank or size balancing, so long chains can form before compression
//! flattens them; results are unaffected.

use crate::models::VertexId;

/// Disjoint-set forest over 1-based vertices.
#[derive(Debug, Clone)]
pub struct UnionFind {
    /// Parent pointers (parent[i] = parent of vertex i, or i if root).
    /// Slot 0 is unused.
    parent: Vec<u32>,
    /// Number of disjoint sets among `1..=V`.
    num_sets: usize,
}

impl UnionFind {
    /// Create `num_vertices` singleton sets.
    pub fn new(num_vertices: usize) -> Self {
        Self {
            parent: (0..=num_vertices as u32).collect(),
            num_sets: num_vertices,
        }
    }

    /// Number of vertices.
    pub fn len(&self) -> usize {
        self.parent.len() - 1
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of disjoint sets.
    pub fn num_sets(&self) -> usize {
        self.num_sets
    }

    /// Find the representative of x's set with path compression.
    pub fn find(&mut self, x: VertexId) -> VertexId {
        let mut root = x.0;
        while self.parent[root as usize] != root {
            root = self.parent[root as usize];
        }

        // Point every vertex on the path straight at the root
        let mut node = x.0;
        while self.parent[node as usize] != root {
            let next = self.parent[node as usize];
            self.parent[node as usize] = root;
            node = next;
        }

        VertexId(root)
    }

    /// Merge the sets containing x and y; y's root goes under x's root.
    ///
    /// Returns true if a merge occurred.
    pub fn union(&mut self, x: VertexId, y: VertexId) -> bool {
        let root_x = self.find(x);
        let root_y = self.find(y);

        if root_x == root_y {
            return false;
        }

        self.parent[root_y.index()] = root_x.0;
        self.num_sets -= 1;
        true
    }

    /// Check if two vertices are in the same set.
    pub fn connected(&mut self, x: VertexId, y: VertexId) -> bool {
        self.find(x) == self.find(y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_singleton_sets() {
        let mut uf = UnionFind::new(5);
        assert_eq!(uf.num_sets(), 5);
        assert_eq!(uf.len(), 5);

        for i in 1..=5 {
            assert_eq!(uf.find(VertexId(i)), VertexId(i));
        }
    }

    #[test]
    fn test_union_basic() {
        let mut uf = UnionFind::new(5);

        assert!(uf.union(VertexId(1), VertexId(2)));
        assert_eq!(uf.num_sets(), 4);
        assert!(uf.connected(VertexId(1), VertexId(2)));

        assert!(uf.union(VertexId(3), VertexId(4)));
        assert_eq!(uf.num_sets(), 3);

        assert!(uf.union(VertexId(1), VertexId(3)));
        assert_eq!(uf.num_sets(), 2);
        assert!(uf.connected(VertexId(2), VertexId(4)));
        assert!(!uf.connected(VertexId(2), VertexId(5)));
    }

    #[test]
    fn test_union_attaches_second_root_under_first() {
        let mut uf = UnionFind::new(3);
        uf.union(VertexId(2), VertexId(3));
        assert_eq!(uf.find(VertexId(3)), VertexId(2));

        uf.union(VertexId(1), VertexId(3));
        assert_eq!(uf.find(VertexId(2)), VertexId(1));
    }

    #[test]
    fn test_union_same_set() {
        let mut uf = UnionFind::new(3);

        uf.union(VertexId(1), VertexId(2));
        uf.union(VertexId(2), VertexId(3));

        // Would close a cycle
        assert!(!uf.union(VertexId(1), VertexId(3)));
        assert_eq!(uf.num_sets(), 1);
    }

    #[test]
    fn test_path_compression() {
        let mut uf = UnionFind::new(10);

        // Chain 1 -> 2 -> ... -> 10 with no balancing
        for i in 1..10 {
            uf.union(VertexId(i + 1), VertexId(i));
        }
        assert_eq!(uf.parent[1], 2);

        let root = uf.find(VertexId(1));
        assert_eq!(root, VertexId(10));
        for i in 1..=10 {
            assert_eq!(uf.parent[i], 10);
        }
    }

    #[test]
    fn test_empty_union_find() {
        let uf = UnionFind::new(0);
        assert!(uf.is_empty());
        assert_eq!(uf.num_sets(), 0);
    }
}
