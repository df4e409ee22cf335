//! src/graph.rs
//!
//! An immutable, vertex-weighted, undirected graph stored as a row-major
//! adjacency matrix (one `BitVec` per vertex). This is the only data
//! structure the CC2FS search engine needs from the graph: weight lookup
//! and first/second neighborhoods. Construction happens once; nothing in
//! `search` ever mutates a `Graph` afterwards.

use bitvec::prelude::*;

/// An undirected, vertex-weighted graph with dense 0-based vertex indices.
#[derive(Clone, Debug)]
pub struct Graph {
    /// `adjacency[u]` has bit `v` set iff there is an edge (u, v), u != v.
    adjacency: Vec<BitVec>,
    /// `weight[v]` is the positive weight of vertex v.
    weight: Vec<u64>,
}

impl Graph {
    /*────────── Constructors ──────────*/

    /// Creates a graph on `n` isolated vertices, all with weight 1.
    pub fn with_vertices(n: usize) -> Self {
        let mut adjacency = Vec::with_capacity(n);
        for _ in 0..n {
            adjacency.push(bitvec![0; n]);
        }
        Self {
            adjacency,
            weight: vec![1; n],
        }
    }

    /// Builds a graph from `n` vertices, a positive weight per vertex, and
    /// an edge list of unordered pairs `(u, v)` with `u != v`. Duplicate
    /// edges are idempotent. This is the `build_graph` operation of the
    /// external interface (§6).
    pub fn build(n: usize, weights: &[u64], edges: &[(usize, usize)]) -> Self {
        assert_eq!(weights.len(), n, "weights must have exactly n entries");
        let mut g = Self::with_vertices(n);
        g.weight.copy_from_slice(weights);
        for &(u, v) in edges {
            g.add_edge(u, v);
        }
        g
    }

    /*────────── Getters ──────────*/

    /// Number of vertices.
    #[inline]
    pub fn n(&self) -> usize {
        self.adjacency.len()
    }

    /// Weight of vertex `v`. Always >= 1 for a well-formed graph.
    #[inline]
    pub fn weight(&self, v: usize) -> u64 {
        self.weight[v]
    }

    /// Degree (neighbor count) of vertex `v`.
    #[inline]
    pub fn degree(&self, v: usize) -> usize {
        self.adjacency[v].count_ones()
    }

    /// The raw adjacency row for `v`, i.e. its first neighborhood N1(v) as
    /// a bitset (never includes `v` itself).
    #[inline]
    pub fn neighbors(&self, v: usize) -> &BitSlice {
        &self.adjacency[v]
    }

    /// N1(A) = union of N1(v) for v in the set `a` (given as a bitset over
    /// vertices). Does not add the members of `a` itself; a member of `a`
    /// can still appear in the result if it is a neighbor of another
    /// member of `a`.
    pub fn n1_of_set(&self, a: &BitSlice) -> BitVec {
        let mut out = bitvec![0; self.n()];
        for v in a.iter_ones() {
            for u in self.adjacency[v].iter_ones() {
                out.set(u, true);
            }
        }
        out
    }

    /// N2(v): every vertex reachable from `v` within two hops, excluding
    /// `v` itself.
    pub fn n2(&self, v: usize) -> BitVec {
        let mut out = bitvec![0; self.n()];
        for u1 in self.adjacency[v].iter_ones() {
            out.set(u1, true);
            for u2 in self.adjacency[u1].iter_ones() {
                out.set(u2, true);
            }
        }
        out.set(v, false);
        out
    }

    /*────────── Mutators (construction only) ──────────*/

    /// Adds an undirected edge between `u` and `v`.
    #[inline]
    fn add_edge(&mut self, u: usize, v: usize) {
        assert!(u < self.n() && v < self.n() && u != v, "vertex index out of range or self-loop");
        self.adjacency[u].set(v, true);
        self.adjacency[v].set(u, true);
    }
}
