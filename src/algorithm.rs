//! The generational genetic algorithm.

use crate::config::{GaConfig, SolverKind};
use crate::error::{FlyError, Result};
use crate::genetic::Genetic;
use crate::individual::Individual;
use crate::population::Population;
use crate::problem::Problem;
use crate::solution::Solution;
use crate::utils::SearchStatistics;
use log::{debug, info, trace};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::time::{Duration, Instant};

/// Generations between progress lines at debug level.
const PROGRESS_INTERVAL: usize = 100;

/// Evolves a population of tours for a fixed number of generations.
///
/// Each generation: record the best cost, optionally carry the best tour
/// over, fill a mating pool by binary tournaments, then breed children from
/// random pool members with crossover and swap mutation until the next
/// population is full. There is no early exit.
pub struct GeneticAlgorithm<'a> {
    pub problem: &'a Problem,
    pub config: GaConfig,
    pub population: Population,
    /// Best cost of each generation, in order
    pub convergence: Vec<u64>,
    pub generation: usize,
    pub run_time: Duration,
    pub genetic: Genetic,
    rng: ChaCha8Rng,
}

impl<'a> GeneticAlgorithm<'a> {
    /// Create a genetic search over `problem`, validating the configuration.
    pub fn new(problem: &'a Problem, config: GaConfig) -> Result<Self> {
        config.validate()?;

        let n = problem.delivery_count();
        if n == 1 {
            return Err(FlyError::TooFewDeliveries { found: n });
        }

        let rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };

        Ok(GeneticAlgorithm {
            problem,
            population: Population::new(config.pop_size),
            convergence: Vec::with_capacity(config.num_generations),
            config,
            generation: 0,
            run_time: Duration::from_secs(0),
            genetic: Genetic,
            rng,
        })
    }

    /// Initialize the population with random tours.
    pub fn initialize(&mut self) {
        self.population = Population::initialize(self.problem, self.config.pop_size, &mut self.rng);
        self.convergence.clear();
        self.generation = 0;
    }

    /// Run one generation, replacing the population. Returns the best cost of
    /// the population that was bred from.
    ///
    /// An empty population is initialized first. `None` means there was still
    /// nothing to breed from (a `pop_size` of zero) and nothing was recorded.
    pub fn step(&mut self) -> Option<u64> {
        if self.population.is_empty() {
            self.initialize();
        }

        let best_cost = self.population.best_cost()?;
        self.convergence.push(best_cost);

        let mut next = Population::new(self.config.pop_size);

        if self.config.elitism {
            if let Some(elite) = self.population.best() {
                next.insert_individual(elite.clone());
            }
        }

        let pool = self.population.select(&mut self.rng);

        while next.get_pop_size() < self.config.pop_size {
            let (parent1, parent2) = Population::select_parents(&pool, &mut self.rng);

            let mut child = self.genetic.crossover(
                self.config.crossover_method,
                &parent1.tour,
                &parent2.tour,
                &mut self.rng,
            );
            self.genetic
                .mutate(&mut child, self.config.mutation_rate, &mut self.rng);

            next.insert_individual(Individual::new(child, self.problem));
        }

        self.population = next;
        self.generation += 1;

        trace!("Generation {}: best cost {}", self.generation, best_cost);
        if self.generation % PROGRESS_INTERVAL == 0 {
            debug!(
                "Generation {}/{}: best cost {}, average {:.1}, distinct tours {}",
                self.generation,
                self.config.num_generations,
                best_cost,
                self.population.average_cost(),
                self.population.distinct_tours()
            );
        }

        Some(best_cost)
    }

    /// Run the full generation budget and return the best tour of the final
    /// population together with the convergence series.
    pub fn run(&mut self) -> Solution {
        let start_time = Instant::now();

        if self.problem.delivery_count() == 0 {
            self.run_time = start_time.elapsed();
            return Solution::empty(SolverKind::Genetic).with_run_time(self.run_time);
        }

        info!(
            "Genetic search: {} deliveries, population {}, {} generations, {} crossover, elitism {}",
            self.problem.delivery_count(),
            self.config.pop_size,
            self.config.num_generations,
            self.config.crossover_method,
            self.config.elitism
        );

        self.initialize();

        while self.generation < self.config.num_generations {
            if self.step().is_none() {
                break;
            }
        }

        self.run_time = start_time.elapsed();

        let (tour, cost) = match self.population.best() {
            Some(best) => (best.tour.clone(), best.cost),
            None => (Vec::new(), 0),
        };

        info!(
            "Genetic search finished after {} generations: cost {}",
            self.generation, cost
        );

        Solution::new(self.problem.labels_of(&tour), cost, SolverKind::Genetic)
            .with_convergence(self.convergence.clone())
            .with_run_time(self.run_time)
    }

    /// Summarise the run so far.
    pub fn statistics(&self) -> SearchStatistics {
        SearchStatistics {
            generations: self.generation,
            runtime: self.run_time,
            initial_best_cost: self.convergence.first().copied(),
            best_cost: self.population.best_cost(),
            average_cost: self.population.average_cost(),
            distinct_tours: self.population.distinct_tours(),
            population_size: self.population.get_pop_size(),
        }
    }
}
