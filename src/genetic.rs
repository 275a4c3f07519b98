//! Genetic operators: permutation crossovers and swap mutation.
//!
//! Tours handed to these operators are permutations of `0..len`.

use crate::config::CrossoverMethod;
use rand::Rng;

/// Implements the genetic operators (crossover, mutation) for route search.
pub struct Genetic;

impl Genetic {
    /// Recombine two parents with the given operator and random cut points.
    pub fn crossover<R: Rng + ?Sized>(
        &self,
        method: CrossoverMethod,
        parent1: &[usize],
        parent2: &[usize],
        rng: &mut R,
    ) -> Vec<usize> {
        if parent1.is_empty() || parent2.is_empty() {
            return Vec::new();
        }

        let (start, end) = Self::random_cuts(parent1.len(), rng);

        match method {
            CrossoverMethod::Order => Self::order_crossover(parent1, parent2, start, end),
            CrossoverMethod::Pmx => Self::pmx_crossover(parent1, parent2, start, end),
        }
    }

    /// Pick two cut points `start <= end` in `0..size`.
    pub fn random_cuts<R: Rng + ?Sized>(size: usize, rng: &mut R) -> (usize, usize) {
        let cut1 = rng.gen_range(0..size);
        let cut2 = rng.gen_range(0..size);

        if cut1 <= cut2 {
            (cut1, cut2)
        } else {
            (cut2, cut1)
        }
    }

    /// Order crossover (OX) with fixed cut points.
    ///
    /// `parent1[start..=end]` is kept in place; the free positions are filled
    /// left to right with the remaining labels in `parent2` order.
    pub fn order_crossover(
        parent1: &[usize],
        parent2: &[usize],
        start: usize,
        end: usize,
    ) -> Vec<usize> {
        let tour_size = parent1.len();

        let mut in_segment = vec![false; tour_size];
        for &label in &parent1[start..=end] {
            in_segment[label] = true;
        }

        let mut remaining = parent2.iter().copied().filter(|&label| !in_segment[label]);

        let mut offspring = Vec::with_capacity(tour_size);
        offspring.extend(remaining.by_ref().take(start));
        offspring.extend_from_slice(&parent1[start..=end]);
        offspring.extend(remaining);

        offspring
    }

    /// Partially-mapped crossover (PMX) with fixed cut points.
    ///
    /// `parent1[start..=end]` is kept in place. Outside the window each
    /// position takes `parent2`'s label, following the `parent1 -> parent2`
    /// mapping of the window until the label is not already in the child.
    pub fn pmx_crossover(
        parent1: &[usize],
        parent2: &[usize],
        start: usize,
        end: usize,
    ) -> Vec<usize> {
        let tour_size = parent1.len();

        let mut mapping: Vec<Option<usize>> = vec![None; tour_size];
        for i in start..=end {
            mapping[parent1[i]] = Some(parent2[i]);
        }

        (0..tour_size)
            .map(|i| {
                if (start..=end).contains(&i) {
                    return parent1[i];
                }

                // A label has a mapping exactly when it sits in the copied window.
                let mut candidate = parent2[i];
                while let Some(next) = mapping[candidate] {
                    candidate = next;
                }
                candidate
            })
            .collect()
    }

    /// Swap two distinct positions with probability `mutation_rate`.
    ///
    /// Returns whether a swap happened.
    pub fn mutate<R: Rng + ?Sized>(
        &self,
        tour: &mut [usize],
        mutation_rate: f64,
        rng: &mut R,
    ) -> bool {
        if tour.len() < 2 || rng.gen::<f64>() >= mutation_rate {
            return false;
        }

        let positions = rand::seq::index::sample(rng, tour.len(), 2);
        tour.swap(positions.index(0), positions.index(1));

        true
    }
}
