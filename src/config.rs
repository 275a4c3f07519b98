//! Configuration parameters for the route solvers.

use crate::error::{FlyError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

/// Permutation crossover operator used by the genetic algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CrossoverMethod {
    /// Order crossover (OX)
    Order,
    /// Partially-mapped crossover (PMX)
    Pmx,
}

impl fmt::Display for CrossoverMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CrossoverMethod::Order => write!(f, "order"),
            CrossoverMethod::Pmx => write!(f, "pmx"),
        }
    }
}

impl FromStr for CrossoverMethod {
    type Err = FlyError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "order" | "ox" => Ok(CrossoverMethod::Order),
            "pmx" => Ok(CrossoverMethod::Pmx),
            other => Err(FlyError::Config(format!(
                "unknown crossover method '{}'",
                other
            ))),
        }
    }
}

/// Which solver a request is routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Exact search for small instances, genetic search otherwise.
    Auto,
    Exact,
    Genetic,
    NearestNeighbor,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Strategy::Auto => "auto",
            Strategy::Exact => "exact",
            Strategy::Genetic => "genetic",
            Strategy::NearestNeighbor => "nearest_neighbor",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for Strategy {
    type Err = FlyError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "auto" => Ok(Strategy::Auto),
            "exact" | "brute-force" => Ok(Strategy::Exact),
            "genetic" | "ga" => Ok(Strategy::Genetic),
            "nearest" | "nearest-neighbor" | "nearest_neighbor" => Ok(Strategy::NearestNeighbor),
            other => Err(FlyError::Config(format!("unknown strategy '{}'", other))),
        }
    }
}

impl Strategy {
    /// The solver this strategy forces, or `None` for `Auto`.
    pub fn forced(self) -> Option<SolverKind> {
        match self {
            Strategy::Auto => None,
            Strategy::Exact => Some(SolverKind::Exact),
            Strategy::Genetic => Some(SolverKind::Genetic),
            Strategy::NearestNeighbor => Some(SolverKind::NearestNeighbor),
        }
    }
}

/// A concrete solver, as chosen for a request and recorded on its solution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SolverKind {
    Exact,
    Genetic,
    NearestNeighbor,
}

impl fmt::Display for SolverKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SolverKind::Exact => "exact",
            SolverKind::Genetic => "genetic",
            SolverKind::NearestNeighbor => "nearest_neighbor",
        };
        write!(f, "{}", name)
    }
}

/// Configuration settings for the genetic algorithm.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GaConfig {
    /// Number of routes per generation
    pub pop_size: usize,
    /// Number of generations to run
    pub num_generations: usize,
    /// Carry the best route of each generation into the next one unchanged
    pub elitism: bool,
    /// Probability that a child receives one swap mutation
    pub mutation_rate: f64,
    /// Crossover operator
    pub crossover_method: CrossoverMethod,
    /// Seed for the per-run random generator; entropy when absent
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        GaConfig {
            pop_size: 150,
            num_generations: 1000,
            elitism: true,
            mutation_rate: 0.2,
            crossover_method: CrossoverMethod::Order,
            seed: None,
        }
    }
}

impl GaConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        GaConfig::default()
    }

    /// Set the population size.
    pub fn with_pop_size(mut self, size: usize) -> Self {
        self.pop_size = size;
        self
    }

    /// Set the number of generations.
    pub fn with_num_generations(mut self, generations: usize) -> Self {
        self.num_generations = generations;
        self
    }

    /// Enable or disable elitism.
    pub fn with_elitism(mut self, elitism: bool) -> Self {
        self.elitism = elitism;
        self
    }

    /// Set the mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate;
        self
    }

    /// Set the crossover operator.
    pub fn with_crossover_method(mut self, method: CrossoverMethod) -> Self {
        self.crossover_method = method;
        self
    }

    /// Fix the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check the parameters before any generation runs.
    pub fn validate(&self) -> Result<()> {
        if self.pop_size < 2 {
            return Err(FlyError::Config(format!(
                "pop_size must be at least 2, got {}",
                self.pop_size
            )));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(FlyError::Config(format!(
                "mutation_rate must lie in [0, 1], got {}",
                self.mutation_rate
            )));
        }
        Ok(())
    }
}

/// Configuration of the solver selector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// Largest delivery count still solved by exhaustive search
    pub max_exact_deliveries: usize,
    /// Forced solver, or `Auto` for the size-based policy
    pub strategy: Strategy,
    /// Settings for the genetic path
    pub genetic: GaConfig,
}

impl Default for SolverConfig {
    fn default() -> Self {
        SolverConfig {
            max_exact_deliveries: 9,
            strategy: Strategy::Auto,
            genetic: GaConfig::default(),
        }
    }
}

impl SolverConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        SolverConfig::default()
    }

    /// Load a configuration from a JSON file. Missing fields keep their defaults.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        let config: SolverConfig = serde_json::from_str(&text)?;
        Ok(config)
    }

    /// Set the exact-search threshold.
    pub fn with_max_exact_deliveries(mut self, n: usize) -> Self {
        self.max_exact_deliveries = n;
        self
    }

    /// Force a strategy.
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Set the genetic configuration.
    pub fn with_genetic(mut self, genetic: GaConfig) -> Self {
        self.genetic = genetic;
        self
    }
}
