// src/freq.rs
//! Frequency-based scoring memory (the "FS" in CC2FS, §4.3, §4.6).
//!
//! Every vertex has a counter `freq[v]`, initialized to 1, that is
//! incremented once per insertion pass for each vertex still uncovered
//! after that pass. Persistently-uncovered vertices accumulate weight in
//! `score_f`, biasing the search toward covering them (analogous to
//! clause-weighting in SAT local search).

use bitvec::slice::BitSlice;

/// Initial per-vertex frequency: 1, never 0 (§3 invariants: freq[v] >= 1).
pub fn new_freq(n: usize) -> Vec<usize> {
    vec![1; n]
}

/// Increments `freq[v]` for every vertex not present in `covered`.
pub fn update_freq(freq: &mut [usize], covered: &BitSlice) {
    for v in 0..freq.len() {
        if !covered[v] {
            freq[v] += 1;
        }
    }
}
