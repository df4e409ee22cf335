//! src/construct.rs
//!
//! `init_greedy` (§4.6, step 1): builds an initial feasible cover by
//! repeatedly adding the vertex that would newly cover the most
//! currently-uncovered neighbors, until every vertex is covered. Grounded
//! on the teacher's `greedy_random_k` (same shape: score every remaining
//! candidate, take the best, shrink the candidate pool by exactly the
//! chosen vertex) but deterministic rather than randomized — the spec
//! calls for a stable, lowest-index tie-break (§4.6 step 1), not a random
//! choice among ties.

use crate::cover::Cover;
use crate::graph::Graph;
use bitvec::prelude::*;

/// Greedily builds a feasible dominating set into `cover`, which must
/// start empty. Ties are broken by lowest vertex index (the first
/// candidate encountered, scanned in increasing index order, wins unless
/// strictly beaten) — see §9 open question 2 for why the candidate pool
/// shrinks by exactly the chosen vertex each round regardless of whether
/// it was already a member.
pub fn init_greedy(graph: &Graph, cover: &mut Cover) {
    let n = graph.n();
    let mut candidates = bitvec![1; n];

    while cover.uncovered_count() != 0 {
        let mut best_v: Option<usize> = None;
        let mut best_count: usize = 0;

        for v in candidates.iter_ones() {
            let count = graph
                .neighbors(v)
                .iter_ones()
                .filter(|&u| !cover.covered()[u])
                .count();
            if best_v.is_none() || count > best_count {
                best_v = Some(v);
                best_count = count;
            }
        }

        match best_v {
            Some(v) => {
                cover.add_to_s(v);
                candidates.set(v, false);
            }
            None => break,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn covers_a_path_graph() {
        let g = Graph::build(3, &[1, 1, 1], &[(0, 1), (1, 2)]);
        let mut cover = Cover::new(&g);
        init_greedy(&g, &mut cover);
        assert_eq!(cover.uncovered_count(), 0);
    }

    #[test]
    fn covers_isolated_vertices_by_including_them() {
        let g = Graph::build(2, &[3, 7], &[]);
        let mut cover = Cover::new(&g);
        init_greedy(&g, &mut cover);
        assert!(cover.contains(0));
        assert!(cover.contains(1));
    }

    #[test]
    fn star_graph_prefers_the_high_degree_center() {
        // center 0 connected to leaves 1..=4
        let g = Graph::build(5, &[1, 1, 1, 1, 1], &[(0, 1), (0, 2), (0, 3), (0, 4)]);
        let mut cover = Cover::new(&g);
        init_greedy(&g, &mut cover);
        assert!(cover.contains(0));
        assert_eq!(cover.uncovered_count(), 0);
    }
}
