//! Benchmarks for the FlyFood solvers.

#[cfg(feature = "bench")]
extern crate criterion;

#[cfg(feature = "bench")]
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use flyfood::algorithm::GeneticAlgorithm;
use flyfood::config::{CrossoverMethod, GaConfig};
use flyfood::exact::ExactSolver;
use flyfood::grid::Grid;
use flyfood::problem::Problem;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Create a benchmark problem with `size` deliveries on a square grid.
fn create_benchmark_problem(size: usize) -> Problem {
    let side = ((size + 1) as f64).sqrt().ceil() as usize * 2;
    let mut rng = ChaCha8Rng::seed_from_u64(size as u64);
    let grid = Grid::random(side, side, size, &mut rng).unwrap();
    Problem::from_grid(&grid).unwrap()
}

#[cfg(feature = "bench")]
fn benchmark_exact(c: &mut Criterion) {
    let mut group = c.benchmark_group("exact");

    for size in [6, 7, 8].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            let problem = create_benchmark_problem(size);
            b.iter(|| ExactSolver::best_tour(&problem));
        });
    }

    group.finish();
}

#[cfg(feature = "bench")]
fn benchmark_genetic(c: &mut Criterion) {
    let mut group = c.benchmark_group("genetic");

    for size in [20, 50, 100].iter() {
        for method in [CrossoverMethod::Order, CrossoverMethod::Pmx] {
            let id = BenchmarkId::new(method.to_string(), size);
            group.bench_with_input(id, size, |b, &size| {
                let problem = create_benchmark_problem(size);
                let config = GaConfig::new()
                    .with_pop_size(100)
                    .with_num_generations(100)
                    .with_crossover_method(method)
                    .with_seed(1);

                b.iter(|| {
                    let mut algorithm = GeneticAlgorithm::new(&problem, config.clone()).unwrap();
                    algorithm.run()
                });
            });
        }
    }

    group.finish();
}

#[cfg(feature = "bench")]
criterion_group!(benches, benchmark_exact, benchmark_genetic);

#[cfg(feature = "bench")]
criterion_main!(benches);
