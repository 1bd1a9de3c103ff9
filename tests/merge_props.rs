//! Merge planner: optimality against brute force and step bookkeeping

use proptest::prelude::*;
use sylvan::{min_merge_cost, MergeStep};
use test_case::test_case;

mod common;
use common::brute_force_cost;

#[test]
fn test_cable_lengths() {
    let plan = min_merge_cost([8u64, 4, 6, 12, 10]);
    assert_eq!(plan.steps[0], MergeStep { a: 4, b: 6, combined: 10 });
    assert_eq!(plan.total_cost, 90);
    assert_eq!(plan.total_cost, brute_force_cost(&[8, 4, 6, 12, 10]));
}

#[test_case(&[], 0 ; "empty")]
#[test_case(&[5], 0 ; "single")]
#[test_case(&[1, 2], 3 ; "pair")]
#[test_case(&[1, 2, 3], 9 ; "triple")]
#[test_case(&[5, 5, 5, 5], 40 ; "all equal")]
fn test_known_costs(weights: &[u64], expected: u64) {
    assert_eq!(min_merge_cost(weights.iter().copied()).total_cost, expected);
}

proptest! {
    #[test]
    fn greedy_matches_brute_force(weights in proptest::collection::vec(0u64..50, 0..=6)) {
        let plan = min_merge_cost(weights.iter().copied());
        prop_assert_eq!(plan.total_cost, brute_force_cost(&weights));
    }

    #[test]
    fn step_log_is_consistent(weights in proptest::collection::vec(0u64..1000, 0..40)) {
        let plan = min_merge_cost(weights.iter().copied());
        let expected_steps = weights.len().saturating_sub(1);
        prop_assert_eq!(plan.steps.len(), expected_steps);

        let mut total = 0;
        for step in &plan.steps {
            prop_assert!(step.a <= step.b);
            prop_assert_eq!(step.a + step.b, step.combined);
            total += step.combined;
        }
        prop_assert_eq!(plan.total_cost, total);

        if weights.len() >= 2 {
            prop_assert_eq!(plan.final_weight(), Some(weights.iter().sum::<u64>()));
        } else {
            prop_assert_eq!(plan.final_weight(), None);
        }
    }

    #[test]
    fn input_order_is_irrelevant(mut weights in proptest::collection::vec(0u64..100, 0..20)) {
        let forward = min_merge_cost(weights.iter().copied());
        weights.reverse();
        let backward = min_merge_cost(weights.iter().copied());
        prop_assert_eq!(forward.total_cost, backward.total_cost);
    }
}
