//! src/cover.rs
//!
//! The coverage tracker: owns the current cover `S` and the derived
//! `covered_vertices` set, plus the per-vertex `age` used only for
//! tie-breaking (§3, §4.2). Grounded on the teacher's `Solution` (a bitset
//! plus incrementally-tracked size/edge_count owned by the search), but
//! the mutation rule differs: `remove_from_s` recomputes coverage from
//! scratch rather than decrementing a counter, because a vertex dropped
//! from `S` may still be covered by another member of `S` (§4.2).

use crate::graph::Graph;
use bitvec::prelude::*;

#[derive(Clone, Debug)]
pub struct Cover<'g> {
    graph: &'g Graph,
    s: BitVec,
    covered: BitVec,
    age: Vec<usize>,
}

impl<'g> Cover<'g> {
    pub fn new(graph: &'g Graph) -> Self {
        Self {
            graph,
            s: bitvec![0; graph.n()],
            covered: bitvec![0; graph.n()],
            age: vec![0; graph.n()],
        }
    }

    #[inline]
    pub fn s(&self) -> &BitSlice {
        &self.s
    }

    #[inline]
    pub fn covered(&self) -> &BitSlice {
        &self.covered
    }

    #[inline]
    pub fn age(&self, v: usize) -> usize {
        self.age[v]
    }

    #[inline]
    pub fn contains(&self, v: usize) -> bool {
        self.s[v]
    }

    #[inline]
    pub fn uncovered_count(&self) -> usize {
        self.graph.n() - self.covered.count_ones()
    }

    /// Total weight of the current `S`.
    pub fn weight(&self) -> u64 {
        self.s.iter_ones().map(|v| self.graph.weight(v)).sum()
    }

    /// Inserts `v` into `S`. O(deg(v)): adds `v` and its neighbors to
    /// `covered_vertices` without touching anything else.
    pub fn add_to_s(&mut self, v: usize) {
        self.s.set(v, true);
        self.age[v] = 0;
        self.covered.set(v, true);
        for u in self.graph.neighbors(v).iter_ones() {
            self.covered.set(u, true);
        }
    }

    /// Removes `v` from `S`. Recomputes `covered_vertices` from scratch as
    /// `S ∪ N1(S)`, since other members of `S` may still cover `v`'s
    /// former neighbors (and `v` itself).
    pub fn remove_from_s(&mut self, v: usize) {
        self.s.set(v, false);
        self.age[v] = 0;
        let mut covered = self.graph.n1_of_set(&self.s);
        for u in self.s.iter_ones() {
            covered.set(u, true);
        }
        self.covered = covered;
    }

    /// Increments `age` for every vertex; called once per outer iteration.
    pub fn increase_age(&mut self) {
        for a in self.age.iter_mut() {
            *a += 1;
        }
    }
}
