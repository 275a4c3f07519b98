//! Nearest-neighbor constructive heuristic.
//!
//! Starting from the start cell, always travel to the closest delivery not
//! yet visited. O(n²); no optimality guarantee, useful as a fast baseline.

use crate::config::SolverKind;
use crate::problem::Problem;
use crate::solution::Solution;
use std::time::Instant;

/// Greedy visiting order as delivery indices.
///
/// Ties go to the delivery that comes first in the problem's order.
pub fn nearest_neighbor_tour(problem: &Problem) -> Vec<usize> {
    let n = problem.delivery_count();
    let mut visited = vec![false; n];
    let mut tour = Vec::with_capacity(n);
    let mut current: Option<usize> = None;

    while tour.len() < n {
        let mut best: Option<(usize, u64)> = None;
        for i in (0..n).filter(|&i| !visited[i]) {
            let d = match current {
                Some(from) => problem.get_distance(from, i),
                None => problem.distance_from_start(i),
            };
            if best.map_or(true, |(_, best_d)| d < best_d) {
                best = Some((i, d));
            }
        }

        match best {
            Some((next, _)) => {
                visited[next] = true;
                tour.push(next);
                current = Some(next);
            }
            None => break,
        }
    }

    tour
}

/// Build a route with the nearest-neighbor heuristic.
pub fn nearest_neighbor(problem: &Problem) -> Solution {
    let start_time = Instant::now();
    let tour = nearest_neighbor_tour(problem);
    let cost = problem.tour_cost(&tour);

    Solution::new(problem.labels_of(&tour), cost, SolverKind::NearestNeighbor)
        .with_run_time(start_time.elapsed())
}
