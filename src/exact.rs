//! Exhaustive search over every visiting order.

use crate::config::SolverKind;
use crate::problem::Problem;
use crate::solution::Solution;
use log::debug;
use std::time::Instant;

/// Enumerates all `n!` tours and keeps the cheapest.
///
/// Permutations of delivery indices are visited in lexicographic order,
/// starting from the delivery order of the problem. Among tours of equal cost
/// the first one visited wins, so the result is deterministic for a given
/// problem.
pub struct ExactSolver;

impl ExactSolver {
    /// Solve the problem to optimality.
    pub fn solve(&self, problem: &Problem) -> Solution {
        let start_time = Instant::now();
        let (tour, cost) = Self::best_tour(problem);

        Solution::new(problem.labels_of(&tour), cost, SolverKind::Exact)
            .with_run_time(start_time.elapsed())
    }

    /// Cheapest index tour and its cost.
    pub fn best_tour(problem: &Problem) -> (Vec<usize>, u64) {
        let n = problem.delivery_count();
        if n == 0 {
            return (Vec::new(), 0);
        }

        let mut tour: Vec<usize> = (0..n).collect();
        let mut best_tour = tour.clone();
        let mut best_cost = problem.tour_cost(&tour);
        let mut evaluated: u64 = 1;

        while next_permutation(&mut tour) {
            evaluated += 1;
            let cost = problem.tour_cost(&tour);
            if cost < best_cost {
                best_cost = cost;
                best_tour.copy_from_slice(&tour);
            }
        }

        debug!(
            "Exact search evaluated {} tours over {} deliveries, best cost {}",
            evaluated, n, best_cost
        );

        (best_tour, best_cost)
    }
}

/// Rearrange `perm` into its lexicographic successor in place.
///
/// Returns `false`, leaving `perm` untouched, when it is already the last
/// permutation.
pub fn next_permutation(perm: &mut [usize]) -> bool {
    if perm.len() < 2 {
        return false;
    }

    // Longest non-increasing suffix starts at i
    let mut i = perm.len() - 1;
    while i > 0 && perm[i - 1] >= perm[i] {
        i -= 1;
    }
    if i == 0 {
        return false;
    }

    let mut j = perm.len() - 1;
    while perm[j] <= perm[i - 1] {
        j -= 1;
    }

    perm.swap(i - 1, j);
    perm[i..].reverse();

    true
}
