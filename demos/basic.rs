//! Basic example of using the FlyFood library.

use flyfood::config::{CrossoverMethod, GaConfig, SolverConfig};
use flyfood::grid::Grid;
use flyfood::problem::Problem;
use flyfood::utils::{format_duration, print_route_visualization, save_solution};
use flyfood::RouteSolver;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::env;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load a grid from the command line or generate one
    let args: Vec<String> = env::args().collect();
    let grid = if args.len() > 1 {
        println!("Loading grid from: {}", args[1]);
        Grid::from_file(&args[1])?
    } else {
        println!("Generating a random 12x12 grid with 15 deliveries");
        let mut rng = ChaCha8Rng::seed_from_u64(2024);
        Grid::random(12, 12, 15, &mut rng)?
    };

    let problem = Problem::from_grid(&grid)?;
    println!("Loaded problem with {} deliveries", problem.delivery_count());

    // Configure solver
    let config = SolverConfig::new().with_max_exact_deliveries(9).with_genetic(
        GaConfig::new()
            .with_pop_size(150)
            .with_num_generations(1000)
            .with_elitism(true)
            .with_mutation_rate(0.2)
            .with_crossover_method(CrossoverMethod::Order)
            .with_seed(7),
    );
    let solver = RouteSolver::new(config);

    let solution = solver.solve(&problem)?;

    // Print results
    println!("Search completed in {}", format_duration(solution.run_time));
    println!("Strategy: {}", solution.strategy);
    println!("Best route: {}", solution.route_string());
    println!("Total distance: {}", solution.cost);

    // Save solution
    let output_path = "flyfood_route.txt";
    println!("Saving solution to: {}", output_path);
    save_solution(&solution, &problem, output_path)?;

    // Visualize solution
    print_route_visualization(&grid, &solution);

    Ok(())
}
