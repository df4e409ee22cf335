//! src/conf_change.rs
//!
//! Configuration-change bookkeeping (§4.5). `ConfChange` gates which
//! vertices are eligible for (re)insertion into `S`. Structured as its own
//! small bitset-owning type, the way the teacher's `DualTabu` (src/tabu.rs)
//! owns its own short-term memory separately from the solution — here the
//! memory is a single set rather than a pair of expiry vectors, since the
//! CC2 rule has no tenure/duration concept, only set membership.

use crate::graph::Graph;
use bitvec::prelude::*;

#[derive(Clone, Debug)]
pub struct ConfChange {
    set: BitVec,
}

impl ConfChange {
    /// RULE1: every vertex starts eligible, except isolated vertices
    /// (degree 0), which must remain in `S` forever and are never
    /// candidates for (re)insertion.
    pub fn initial(graph: &Graph) -> Self {
        let mut set = bitvec![1; graph.n()];
        for v in 0..graph.n() {
            if graph.degree(v) == 0 {
                set.set(v, false);
            }
        }
        Self { set }
    }

    #[inline]
    pub fn contains(&self, v: usize) -> bool {
        self.set[v]
    }

    #[inline]
    pub fn set_bits(&self) -> &BitSlice {
        &self.set
    }

    /// RULE2: on removing `v` from `S`, every vertex in N2(v) becomes
    /// eligible again, and `v` itself is frozen (removed from the set)
    /// until some neighbor's neighborhood changes again.
    pub fn apply_rule2(&mut self, graph: &Graph, v: usize) {
        for u in graph.n2(v).iter_ones() {
            self.set.set(u, true);
        }
        self.set.set(v, false);
    }

    /// RULE3: on inserting `v` into `S`, every vertex in N2(v) becomes
    /// eligible. Unlike RULE2, `v` itself is *not* removed here — the
    /// asymmetry between RULE2 and RULE3 is intentional (§9, open
    /// question 4) and must not be "fixed".
    pub fn apply_rule3(&mut self, graph: &Graph, v: usize) {
        for u in graph.n2(v).iter_ones() {
            self.set.set(u, true);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn isolated_vertices_excluded_after_initialization() {
        let g = Graph::build(3, &[1, 1, 1], &[(0, 1)]);
        let cc = ConfChange::initial(&g);
        assert!(cc.contains(0));
        assert!(cc.contains(1));
        assert!(!cc.contains(2)); // isolated
    }

    #[test]
    fn rule2_freezes_v_and_frees_its_two_hop_neighborhood() {
        let g = Graph::build(4, &[1, 1, 1, 1], &[(0, 1), (1, 2), (2, 3)]);
        let mut cc = ConfChange::initial(&g);
        cc.apply_rule2(&g, 1);
        assert!(!cc.contains(1));
        assert!(cc.contains(0));
        assert!(cc.contains(2));
        assert!(cc.contains(3));
    }

    #[test]
    fn rule3_does_not_remove_v_itself() {
        let g = Graph::build(2, &[1, 1], &[(0, 1)]);
        let mut cc = ConfChange::initial(&g);
        cc.apply_rule3(&g, 0);
        assert!(cc.contains(0));
    }
}
