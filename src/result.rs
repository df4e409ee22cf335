//! src/result.rs
//!
//! The result sink (§2, component 6): the best cover `S*` found and its
//! total weight, exposed once the search returns. Kept as its own small
//! type (rather than a bare tuple) so the shell can format it without
//! reaching into the controller's internals.

use bitvec::vec::BitVec;

/// The outcome of a `run_search` call: the best dominating set found and
/// its total weight.
#[derive(Clone, Debug)]
pub struct SolveResult {
    vertices: BitVec,
    weight: u64,
}

impl SolveResult {
    pub(crate) fn new(vertices: BitVec, weight: u64) -> Self {
        Self { vertices, weight }
    }

    /// Number of vertices in S*.
    pub fn len(&self) -> usize {
        self.vertices.count_ones()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Total weight of S*.
    pub fn weight(&self) -> u64 {
        self.weight
    }

    /// Vertex indices in S*, in increasing order.
    pub fn vertices(&self) -> impl Iterator<Item = usize> + '_ {
        self.vertices.iter_ones()
    }

    pub fn contains(&self, v: usize) -> bool {
        self.vertices[v]
    }
}
