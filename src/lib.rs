//! # FlyFood
//!
//! Fixed-start delivery routing on a grid under the Manhattan metric.
//!
//! Given a start cell `R` and a set of labelled delivery cells, find the
//! visiting order that minimises the length of the closed tour
//! `R -> p1 -> ... -> pn -> R`. Small instances are solved exactly by
//! enumerating every permutation; larger ones by a generational genetic
//! algorithm with tournament selection, OX or PMX crossover, swap mutation
//! and elitism.
//!
//! ```no_run
//! use flyfood::{grid::Grid, RouteSolver};
//!
//! let grid: Grid = "2 2\nR A\n0 B\n".parse()?;
//! let solution = RouteSolver::default().solve_grid(&grid)?;
//! assert_eq!(solution.cost, 4);
//! # Ok::<(), flyfood::error::FlyError>(())
//! ```

pub mod algorithm;
pub mod config;
pub mod error;
pub mod exact;
pub mod genetic;
pub mod grid;
pub mod individual;
pub mod nearest_neighbor;
pub mod population;
pub mod problem;
pub mod solution;
pub mod utils;

use crate::algorithm::GeneticAlgorithm;
use crate::config::{SolverConfig, SolverKind};
use crate::error::Result;
use crate::exact::ExactSolver;
use crate::grid::Grid;
use crate::problem::Problem;
use crate::solution::Solution;

use log::info;

pub use crate::error::FlyError;

/// Picks a solver for each request and runs it.
#[derive(Debug, Clone, Default)]
pub struct RouteSolver {
    pub config: SolverConfig,
}

impl RouteSolver {
    /// Create a solver with the given configuration.
    pub fn new(config: SolverConfig) -> Self {
        RouteSolver { config }
    }

    /// The concrete strategy used for `n` deliveries.
    ///
    /// Under `Auto`, exhaustive search handles up to `max_exact_deliveries`
    /// points. Fewer than two points always go to exhaustive search, which
    /// answers them trivially.
    pub fn choose_strategy(&self, n: usize) -> SolverKind {
        match self.config.strategy.forced() {
            Some(kind) => kind,
            None if n <= self.config.max_exact_deliveries || n < 2 => SolverKind::Exact,
            None => SolverKind::Genetic,
        }
    }

    /// Solve a problem with the selected strategy.
    pub fn solve(&self, problem: &Problem) -> Result<Solution> {
        let n = problem.delivery_count();
        let strategy = self.choose_strategy(n);
        info!("Solving {} deliveries with {} strategy", n, strategy);

        let solution = match strategy {
            SolverKind::Exact => ExactSolver.solve(problem),
            SolverKind::Genetic => {
                GeneticAlgorithm::new(problem, self.config.genetic.clone())?.run()
            }
            SolverKind::NearestNeighbor => nearest_neighbor::nearest_neighbor(problem),
        };

        Ok(solution)
    }

    /// Extract the problem from a grid and solve it.
    pub fn solve_grid(&self, grid: &Grid) -> Result<Solution> {
        let problem = Problem::from_grid(grid)?;
        self.solve(&problem)
    }
}

/// Solve a grid with the default configuration.
pub fn solve(grid: &Grid) -> Result<Solution> {
    RouteSolver::default().solve_grid(grid)
}
