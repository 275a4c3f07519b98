//! Solver output: a route snapshot with its cost.

use crate::config::SolverKind;
use crate::grid::START_LABEL;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Represents a complete answer to a routing request.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct Solution {
    /// Delivery labels in visiting order; the start is implicit at both ends
    pub route: Vec<String>,
    /// Total Manhattan length of the closed tour
    pub cost: u64,
    /// Best cost per generation, empty unless the genetic path ran
    pub convergence: Vec<u64>,
    /// The solver that produced this route
    pub strategy: SolverKind,
    /// Wall-clock time spent solving
    pub run_time: Duration,
}

impl Solution {
    /// Create a solution without convergence data.
    pub fn new(route: Vec<String>, cost: u64, strategy: SolverKind) -> Self {
        Solution {
            route,
            cost,
            convergence: Vec::new(),
            strategy,
            run_time: Duration::from_secs(0),
        }
    }

    /// The empty route, cost 0.
    pub fn empty(strategy: SolverKind) -> Self {
        Solution::new(Vec::new(), 0, strategy)
    }

    /// Attach a per-generation best-cost series.
    pub fn with_convergence(mut self, convergence: Vec<u64>) -> Self {
        self.convergence = convergence;
        self
    }

    /// Record the time spent solving.
    pub fn with_run_time(mut self, run_time: Duration) -> Self {
        self.run_time = run_time;
        self
    }

    /// Check if the route visits nothing.
    pub fn is_empty(&self) -> bool {
        self.route.is_empty()
    }

    /// The route as space-separated labels.
    pub fn route_string(&self) -> String {
        self.route.join(" ")
    }

    /// The closed tour, start included at both ends: `R A B R`.
    pub fn tour_string(&self) -> String {
        std::iter::once(START_LABEL)
            .chain(self.route.iter().map(String::as_str))
            .chain(std::iter::once(START_LABEL))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Debug for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Solution:")?;
        writeln!(f, "  Strategy: {}", self.strategy)?;
        writeln!(f, "  Cost: {}", self.cost)?;
        writeln!(f, "  Route: {}", self.tour_string())?;
        writeln!(f, "  Generations: {}", self.convergence.len())?;
        writeln!(f, "  Run time: {:?}", self.run_time)
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (cost {})", self.route_string(), self.cost)
    }
}
