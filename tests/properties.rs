//! Property-based tests over randomly generated graphs, using proptest.
//! Grounded on the `graph_strategy` combinator pattern from the
//! `CodingThrust-problem-reductions` pack repo's `tests/property_tests.rs`.

use mwds_cc2fs::clock::Deadline;
use mwds_cc2fs::cover::Cover;
use mwds_cc2fs::freq;
use mwds_cc2fs::{run_search, Graph};
use proptest::prelude::*;
use std::collections::HashSet;
use std::time::Duration;

/// Generates a random simple undirected graph with between 1 and
/// `max_vertices` vertices, each weight in `1..=50`.
fn graph_strategy(max_vertices: usize) -> impl Strategy<Value = (usize, Vec<u64>, Vec<(usize, usize)>)> {
    (1..=max_vertices).prop_flat_map(|n| {
        let weights = prop::collection::vec(1u64..=50, n);
        let edge_strategy = (0..n, 0..n).prop_filter_map("drop self-loops", |(u, v)| {
            if u == v {
                None
            } else if u < v {
                Some((u, v))
            } else {
                Some((v, u))
            }
        });
        let edges = prop::collection::vec(edge_strategy, 0..n * 2).prop_map(|edges| {
            let unique: HashSet<_> = edges.into_iter().collect();
            unique.into_iter().collect::<Vec<_>>()
        });
        (weights, edges).prop_map(move |(weights, edges)| (n, weights, edges))
    })
}

fn dominates(graph: &Graph, members: &[bool]) -> bool {
    (0..graph.n()).all(|v| {
        members[v] || graph.neighbors(v).iter_ones().any(|u| members[u])
    })
}

/// A graph plus a short sequence of vertex indices to toggle in and out of
/// `S`, standing in for the coverage churn across several outer iterations.
fn graph_with_toggle_sequence(
    max_vertices: usize,
) -> impl Strategy<Value = (usize, Vec<u64>, Vec<(usize, usize)>, Vec<usize>)> {
    graph_strategy(max_vertices).prop_flat_map(|(n, weights, edges)| {
        prop::collection::vec(0..n, 0..20)
            .prop_map(move |toggles| (n, weights.clone(), edges.clone(), toggles))
    })
}

/// A graph with at least 2 vertices, a vertex `v` to toggle, a distinct
/// untouched vertex `u`, and two iteration counts straddling the toggle.
fn age_scenario_strategy(
    max_vertices: usize,
) -> impl Strategy<Value = (usize, Vec<u64>, Vec<(usize, usize)>, usize, usize, usize, usize)> {
    graph_strategy(max_vertices)
        .prop_filter("need at least 2 vertices", |(n, _, _)| *n >= 2)
        .prop_flat_map(|(n, weights, edges)| {
            (0..n, 1usize..5, 1usize..5).prop_map(move |(v, k, j)| {
                let u = (v + 1) % n;
                (n, weights.clone(), edges.clone(), v, u, k, j)
            })
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// The returned solution always dominates every vertex.
    #[test]
    fn result_is_always_a_dominating_set((n, weights, edges) in graph_strategy(10)) {
        let graph = Graph::build(n, &weights, &edges);
        let result = run_search(&graph, Deadline::after(Duration::from_millis(30)));
        let mut members = vec![false; n];
        for v in result.vertices() {
            members[v] = true;
        }
        prop_assert!(dominates(&graph, &members));
    }

    /// The reported weight is the exact sum of the member weights.
    #[test]
    fn reported_weight_matches_member_sum((n, weights, edges) in graph_strategy(10)) {
        let graph = Graph::build(n, &weights, &edges);
        let result = run_search(&graph, Deadline::after(Duration::from_millis(30)));
        let sum: u64 = result.vertices().map(|v| graph.weight(v)).sum();
        prop_assert_eq!(sum, result.weight());
    }

    /// Every isolated vertex (no edges) appears in the reported solution,
    /// since nothing else could ever dominate it.
    #[test]
    fn isolated_vertices_are_always_in_the_result((n, weights, edges) in graph_strategy(10)) {
        let graph = Graph::build(n, &weights, &edges);
        let result = run_search(&graph, Deadline::after(Duration::from_millis(30)));
        for v in 0..n {
            if graph.degree(v) == 0 {
                prop_assert!(result.contains(v));
            }
        }
    }

    /// `freq[v]` never decreases across successive `update_freq` calls, no
    /// matter how `S` (and therefore coverage) churns in between.
    #[test]
    fn freq_never_decreases_across_update_freq_calls(
        (n, weights, edges, toggles) in graph_with_toggle_sequence(8)
    ) {
        let graph = Graph::build(n, &weights, &edges);
        let mut cover = Cover::new(&graph);
        let mut f = freq::new_freq(n);
        let mut prev = f.clone();

        for v in toggles {
            if cover.contains(v) {
                cover.remove_from_s(v);
            } else {
                cover.add_to_s(v);
            }
            freq::update_freq(&mut f, cover.covered());
            for i in 0..n {
                prop_assert!(f[i] >= prev[i]);
            }
            prev = f.clone();
        }
    }

    /// `age[v]` resets to 0 the instant `v` is toggled (inserted or
    /// removed), and otherwise increments by exactly one per
    /// `increase_age()` call — the untouched vertex `u` tracks the total
    /// call count across both toggle phases.
    #[test]
    fn age_resets_on_toggle_and_increments_once_per_iteration_otherwise(
        (n, weights, edges, v, u, k, j) in age_scenario_strategy(8)
    ) {
        let graph = Graph::build(n, &weights, &edges);
        let mut cover = Cover::new(&graph);

        cover.add_to_s(v);
        prop_assert_eq!(cover.age(v), 0);
        for _ in 0..k {
            cover.increase_age();
        }
        prop_assert_eq!(cover.age(v), k);
        prop_assert_eq!(cover.age(u), k);

        cover.remove_from_s(v);
        prop_assert_eq!(cover.age(v), 0);
        for _ in 0..j {
            cover.increase_age();
        }
        prop_assert_eq!(cover.age(v), j);
        prop_assert_eq!(cover.age(u), k + j);
    }
}
