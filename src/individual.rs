//! Individual representation for the genetic algorithm population.

use crate::problem::Problem;
use std::cmp::Ordering;

/// An individual in the genetic algorithm population.
#[derive(Debug, Clone)]
pub struct Individual {
    /// Visiting order as indices into the problem's deliveries
    pub tour: Vec<usize>,
    /// Closed tour cost, start to start
    pub cost: u64,
}

impl Individual {
    /// Create a new individual and evaluate its cost.
    pub fn new(tour: Vec<usize>, problem: &Problem) -> Self {
        let cost = problem.tour_cost(&tour);
        Individual { tour, cost }
    }

    /// Fitness is the negated cost, so higher is better.
    pub fn fitness(&self) -> i64 {
        -(self.cost as i64)
    }

    /// Check if this individual is a clone of another.
    pub fn is_clone_of(&self, other: &Individual) -> bool {
        self.tour == other.tour
    }

    /// Check that the tour is a permutation of `0..n`.
    pub fn is_valid_permutation(&self, n: usize) -> bool {
        if self.tour.len() != n {
            return false;
        }

        let mut seen = vec![false; n];
        for &delivery in &self.tour {
            if delivery >= n || seen[delivery] {
                return false;
            }
            seen[delivery] = true;
        }

        true
    }
}

impl PartialEq for Individual {
    fn eq(&self, other: &Self) -> bool {
        self.cost == other.cost
    }
}

impl Eq for Individual {}

impl PartialOrd for Individual {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Individual {
    fn cmp(&self, other: &Self) -> Ordering {
        // Compared by fitness: the cheaper tour is the greater individual
        self.fitness().cmp(&other.fitness())
    }
}
