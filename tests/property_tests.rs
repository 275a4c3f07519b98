//! Property tests for the Manhattan metric and the permutation operators.

use flyfood::genetic::Genetic;
use flyfood::grid::{distance, Coordinate};
use proptest::prelude::*;

/// Two random permutations of `0..n` plus two cut points.
fn parents_and_cuts() -> impl Strategy<Value = (Vec<usize>, Vec<usize>, usize, usize)> {
    (1usize..40).prop_flat_map(|n| {
        let base: Vec<usize> = (0..n).collect();
        (
            Just(base.clone()).prop_shuffle(),
            Just(base).prop_shuffle(),
            0..n,
            0..n,
        )
    })
}

fn is_permutation(tour: &[usize], n: usize) -> bool {
    let mut sorted = tour.to_vec();
    sorted.sort_unstable();
    sorted == (0..n).collect::<Vec<_>>()
}

proptest! {
    #[test]
    fn distance_is_symmetric_and_non_negative(
        r1 in 0usize..10_000, c1 in 0usize..10_000,
        r2 in 0usize..10_000, c2 in 0usize..10_000
    ) {
        let a = Coordinate::new(r1, c1);
        let b = Coordinate::new(r2, c2);

        prop_assert_eq!(distance(a, b), distance(b, a));
        prop_assert_eq!(distance(a, a), 0);
        let expected = (r1 as i64 - r2 as i64).abs() + (c1 as i64 - c2 as i64).abs();
        prop_assert_eq!(distance(a, b) as i64, expected);
    }

    #[test]
    fn distance_obeys_triangle_inequality(
        r1 in 0usize..500, c1 in 0usize..500,
        r2 in 0usize..500, c2 in 0usize..500,
        r3 in 0usize..500, c3 in 0usize..500
    ) {
        let a = Coordinate::new(r1, c1);
        let b = Coordinate::new(r2, c2);
        let c = Coordinate::new(r3, c3);

        prop_assert!(distance(a, c) <= distance(a, b) + distance(b, c));
    }

    #[test]
    fn order_crossover_yields_permutation((p1, p2, x, y) in parents_and_cuts()) {
        let (start, end) = (x.min(y), x.max(y));
        let child = Genetic::order_crossover(&p1, &p2, start, end);

        prop_assert!(is_permutation(&child, p1.len()));
        prop_assert_eq!(&child[start..=end], &p1[start..=end]);
    }

    #[test]
    fn order_crossover_keeps_parent2_order((p1, p2, x, y) in parents_and_cuts()) {
        let (start, end) = (x.min(y), x.max(y));
        let child = Genetic::order_crossover(&p1, &p2, start, end);

        let outside: Vec<usize> = child[..start]
            .iter()
            .chain(child[end + 1..].iter())
            .copied()
            .collect();
        let expected: Vec<usize> = p2
            .iter()
            .copied()
            .filter(|label| !p1[start..=end].contains(label))
            .collect();
        prop_assert_eq!(outside, expected);
    }

    #[test]
    fn pmx_crossover_yields_permutation((p1, p2, x, y) in parents_and_cuts()) {
        let (start, end) = (x.min(y), x.max(y));
        let child = Genetic::pmx_crossover(&p1, &p2, start, end);

        prop_assert!(is_permutation(&child, p1.len()));
        prop_assert_eq!(&child[start..=end], &p1[start..=end]);

        // Labels from parent2 that never conflict keep their position
        for i in (0..start).chain(end + 1..p1.len()) {
            if !p1[start..=end].contains(&p2[i]) {
                prop_assert_eq!(child[i], p2[i]);
            }
        }
    }
}
