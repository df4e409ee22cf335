//! src/search.rs
//!
//! The CC2FS search controller (§4.6): the main loop that alternates
//! between a feasible-case branch (record the improvement, then remove one
//! vertex to force re-exploration) and an infeasible-case branch (remove
//! one vertex outside the forbid list, then greedily reinsert under the
//! configuration-change rule). Grounded on the teacher's `restart.rs`
//! outer loop (construct → local-search → diversify, repeated until a
//! stopping condition), but the alternation structure and stopping
//! condition differ completely: CC2FS has no restarts, no perturbation,
//! and is gated purely by a wall-clock deadline rather than a stagnation
//! counter.

use crate::clock::Deadline;
use crate::conf_change::ConfChange;
use crate::cover::Cover;
use crate::freq::{self, new_freq};
use crate::graph::Graph;
use crate::result::SolveResult;
use crate::scoring;
use bitvec::prelude::*;

struct Search<'g> {
    graph: &'g Graph,
    cover: Cover<'g>,
    conf_change: ConfChange,
    forbid_list: BitVec,
    freq: Vec<usize>,
    s_star: BitVec,
    s_star_weight: Option<u64>,
}

impl<'g> Search<'g> {
    fn new(graph: &'g Graph) -> Self {
        let mut cover = Cover::new(graph);
        crate::construct::init_greedy(graph, &mut cover);
        let s_star = cover.s().to_bitvec();
        let conf_change = ConfChange::initial(graph);

        Self {
            graph,
            cover,
            conf_change,
            forbid_list: bitvec![0; graph.n()],
            freq: new_freq(graph.n()),
            s_star,
            s_star_weight: None,
        }
    }

    fn score(&self) -> Vec<f64> {
        scoring::update_score_f(self.graph, &self.cover, &self.freq)
    }

    /// Runs one outer iteration of the main loop (§4.6). Returns after
    /// either branch completes; callers re-check the deadline between
    /// calls, matching the reference's `while now() < deadline` structure.
    fn step(&mut self) {
        if self.cover.uncovered_count() == 0 {
            let w = self.cover.weight();
            if self.s_star_weight.map_or(true, |best| w < best) {
                self.s_star = self.cover.s().to_bitvec();
                self.s_star_weight = Some(w);
                tracing::debug!(weight = w, "improved S*");
            }
            let score = self.score();
            if let Some(v) = scoring::pick_highest_score_in_s(&self.cover, &score, None) {
                self.cover.remove_from_s(v);
                self.conf_change.apply_rule2(self.graph, v);
            }
            return;
        }

        let score = self.score();
        if let Some(v) =
            scoring::pick_highest_score_in_s(&self.cover, &score, Some(self.forbid_list.as_bitslice()))
        {
            self.cover.remove_from_s(v);
            self.conf_change.apply_rule2(self.graph, v);
        }
        self.forbid_list.fill(false);

        while self.cover.uncovered_count() > 0 {
            let score = self.score();
            let Some(v) = scoring::pick_insertion_candidate(&self.cover, &self.conf_change, &score) else {
                break;
            };
            self.cover.add_to_s(v);
            self.conf_change.apply_rule3(self.graph, v);
            self.forbid_list.set(v, true);
            freq::update_freq(&mut self.freq, self.cover.covered());
        }
        self.cover.increase_age();
    }

    fn into_result(self) -> SolveResult {
        let weight = self.s_star_weight.unwrap_or_else(|| {
            self.s_star
                .iter_ones()
                .map(|v| self.graph.weight(v))
                .sum()
        });
        SolveResult::new(self.s_star, weight)
    }
}

/// Runs the CC2FS search until `deadline` passes, returning the best cover
/// found. Handles the §7 edge cases: an empty graph (n == 0) returns
/// immediately without entering the loop, and a deadline already in the
/// past still runs `init_greedy` to completion (so a feasible cover is
/// always returned) before skipping the loop body entirely.
pub fn run_search(graph: &Graph, deadline: Deadline) -> SolveResult {
    if graph.n() == 0 {
        return SolveResult::new(BitVec::new(), 0);
    }

    let mut search = Search::new(graph);
    while !deadline.has_passed() {
        search.step();
    }
    search.into_result()
}
