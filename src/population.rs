//! Population management for the genetic algorithm.

use crate::individual::Individual;
use crate::problem::Problem;
use itertools::Itertools;
use rand::{seq::SliceRandom, Rng};

/// One generation of candidate routes.
#[derive(Debug, Clone, Default)]
pub struct Population {
    pub individuals: Vec<Individual>,
}

impl Population {
    /// Create an empty population with room for `capacity` individuals.
    pub fn new(capacity: usize) -> Self {
        Population {
            individuals: Vec::with_capacity(capacity),
        }
    }

    /// Initialize the population with uniformly random permutations.
    pub fn initialize<R: Rng + ?Sized>(problem: &Problem, pop_size: usize, rng: &mut R) -> Self {
        let mut population = Population::new(pop_size);

        for _ in 0..pop_size {
            let mut tour: Vec<usize> = (0..problem.delivery_count()).collect();
            tour.shuffle(rng);
            population.insert_individual(Individual::new(tour, problem));
        }

        population
    }

    /// Insert a new individual.
    pub fn insert_individual(&mut self, individual: Individual) {
        self.individuals.push(individual);
    }

    /// Get the population size.
    pub fn get_pop_size(&self) -> usize {
        self.individuals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.individuals.is_empty()
    }

    /// Individual with the highest fitness. Ties resolve to any of the maxima.
    pub fn best(&self) -> Option<&Individual> {
        self.individuals.iter().max_by_key(|individual| individual.fitness())
    }

    /// Cost of the best individual.
    pub fn best_cost(&self) -> Option<u64> {
        self.best().map(|individual| individual.cost)
    }

    /// Mean tour cost over the population.
    pub fn average_cost(&self) -> f64 {
        if self.individuals.is_empty() {
            return 0.0;
        }

        let total: u64 = self.individuals.iter().map(|i| i.cost).sum();
        total as f64 / self.individuals.len() as f64
    }

    /// Number of distinct tours in the population.
    pub fn distinct_tours(&self) -> usize {
        self.individuals.iter().map(|i| &i.tour).unique().count()
    }

    /// Perform binary tournament selection.
    ///
    /// Both contestants are drawn with replacement; the fitter one wins.
    /// The population must not be empty.
    pub fn binary_tournament_selection<R: Rng + ?Sized>(&self, rng: &mut R) -> &Individual {
        let idx1 = rng.gen_range(0..self.individuals.len());
        let idx2 = rng.gen_range(0..self.individuals.len());

        if self.individuals[idx1].fitness() >= self.individuals[idx2].fitness() {
            &self.individuals[idx1]
        } else {
            &self.individuals[idx2]
        }
    }

    /// Run one tournament per slot to build the mating pool.
    pub fn select<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<&Individual> {
        (0..self.individuals.len())
            .map(|_| self.binary_tournament_selection(rng))
            .collect()
    }

    /// Select two parents from a mating pool, uniformly with replacement.
    /// The pool must not be empty.
    pub fn select_parents<'a, R: Rng + ?Sized>(
        pool: &[&'a Individual],
        rng: &mut R,
    ) -> (&'a Individual, &'a Individual) {
        let parent1 = pool[rng.gen_range(0..pool.len())];
        let parent2 = pool[rng.gen_range(0..pool.len())];

        (parent1, parent2)
    }
}
