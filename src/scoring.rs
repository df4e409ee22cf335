//! src/scoring.rs
//!
//! The per-vertex `score_f` used to choose which vertex to remove from or
//! insert into `S` (§4.3), and the two selection procedures built on top
//! of it (§4.4). Scoring is recomputed from scratch before each selection,
//! exactly as the reference `update_score_f` does; there is no incremental
//! maintenance of `score_f` across iterations.

use crate::conf_change::ConfChange;
use crate::cover::Cover;
use crate::graph::Graph;
use bitvec::prelude::*;

/// Recomputes `score_f` for every vertex from the current cover and
/// frequency memory.
///
/// - For v in S: `score_f[v] = -sum(freq[u] for u in c2(v)) / weight(v)`,
///   where c2(v) = (N1(v) ∪ {v}) \ N1(S \ {v}) is what would become
///   uncovered if v left S.
/// - For v not in S: `score_f[v] = sum(freq[u] for u in c1(v)) / weight(v)`,
///   where c1(v) = (N1(v) ∪ {v}) \ N1(S) is what v would newly cover.
pub fn update_score_f(graph: &Graph, cover: &Cover, freq: &[usize]) -> Vec<f64> {
    let n = graph.n();
    let mut score = vec![0.0f64; n];
    let n1_of_s = graph.n1_of_set(cover.s());

    for v in 0..n {
        if cover.contains(v) {
            let mut s_minus_v = cover.s().to_bitvec();
            s_minus_v.set(v, false);
            let n1_of_s_minus_v = graph.n1_of_set(&s_minus_v);

            let mut c2 = bitvec![0; n];
            c2.set(v, true);
            for u in graph.neighbors(v).iter_ones() {
                c2.set(u, true);
            }
            for u in n1_of_s_minus_v.iter_ones() {
                c2.set(u, false);
            }

            let sum_freq: usize = c2.iter_ones().map(|u| freq[u]).sum();
            score[v] = -(sum_freq as f64) / (graph.weight(v) as f64);
        } else {
            let mut c1 = bitvec![0; n];
            c1.set(v, true);
            for u in graph.neighbors(v).iter_ones() {
                c1.set(u, true);
            }
            for u in n1_of_s.iter_ones() {
                c1.set(u, false);
            }

            let sum_freq: usize = c1.iter_ones().map(|u| freq[u]).sum();
            score[v] = (sum_freq as f64) / (graph.weight(v) as f64);
        }
    }

    score
}

/// Scans `candidates` for the vertex of maximal `score`, breaking ties by
/// lowest age. Replaces the running best only on strict improvement, so
/// among equal (score, would-be-replaced) the first candidate encountered
/// wins — candidates are always enumerated in increasing vertex-index
/// order, making the result deterministic.
fn select_best(candidates: impl Iterator<Item = usize>, score: &[f64], cover: &Cover) -> Option<usize> {
    let mut best: Option<usize> = None;
    for v in candidates {
        best = match best {
            None => Some(v),
            Some(b) => {
                if score[v] > score[b] || (score[v] == score[b] && cover.age(v) < cover.age(b)) {
                    Some(v)
                } else {
                    Some(b)
                }
            }
        };
    }
    best
}

/// `pick_highest_score_in_S`: candidates are `S`, optionally minus
/// `forbid_list`.
pub fn pick_highest_score_in_s(cover: &Cover, score: &[f64], forbid: Option<&BitSlice>) -> Option<usize> {
    let candidates = cover
        .s()
        .iter_ones()
        .filter(|&v| forbid.map_or(true, |f| !f[v]));
    select_best(candidates, score, cover)
}

/// `pick_insertion_candidate`: candidates are `conf_change \ S`.
pub fn pick_insertion_candidate(cover: &Cover, conf_change: &ConfChange, score: &[f64]) -> Option<usize> {
    let candidates = conf_change
        .set_bits()
        .iter_ones()
        .filter(|&v| !cover.contains(v));
    select_best(candidates, score, cover)
}
