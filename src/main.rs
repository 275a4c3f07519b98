//! Command-line front end: solve a grid from a file or stdin, or generate one.

use clap::{Args, Parser, Subcommand};
use flyfood::algorithm::GeneticAlgorithm;
use flyfood::config::{CrossoverMethod, SolverConfig, SolverKind, Strategy};
use flyfood::error::Result;
use flyfood::grid::Grid;
use flyfood::problem::Problem;
use flyfood::utils::{format_duration, print_route_visualization, save_solution};
use flyfood::RouteSolver;
use log::{error, info};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Find the shortest delivery route for a grid
    Solve(SolveArgs),
    /// Print a random grid in the text format
    Generate {
        rows: usize,
        cols: usize,
        /// Number of delivery points
        points: usize,
        #[arg(long)]
        seed: Option<u64>,
    },
}

#[derive(Args, Debug)]
struct SolveArgs {
    /// Grid file; reads stdin when absent
    file: Option<PathBuf>,

    /// Base configuration as JSON; flags override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// auto, exact, genetic or nearest
    #[arg(long)]
    strategy: Option<Strategy>,

    /// Largest delivery count solved exactly under `auto`
    #[arg(long)]
    threshold: Option<usize>,

    #[arg(long)]
    pop_size: Option<usize>,

    #[arg(long)]
    generations: Option<usize>,

    #[arg(long)]
    mutation_rate: Option<f64>,

    /// order or pmx
    #[arg(long)]
    crossover: Option<CrossoverMethod>,

    /// Disable elitism
    #[arg(long)]
    no_elitism: bool,

    #[arg(long)]
    seed: Option<u64>,

    /// Print the solution as JSON
    #[arg(long)]
    json: bool,

    /// Draw the route on the grid
    #[arg(long)]
    show: bool,

    /// Print search statistics for genetic runs
    #[arg(long)]
    stats: bool,

    /// Write a route report to this file
    #[arg(long)]
    output: Option<PathBuf>,
}

impl SolveArgs {
    fn solver_config(&self) -> Result<SolverConfig> {
        let mut config = match &self.config {
            Some(path) => SolverConfig::from_file(path)?,
            None => SolverConfig::default(),
        };

        if let Some(strategy) = self.strategy {
            config.strategy = strategy;
        }
        if let Some(threshold) = self.threshold {
            config.max_exact_deliveries = threshold;
        }
        if let Some(pop_size) = self.pop_size {
            config.genetic.pop_size = pop_size;
        }
        if let Some(generations) = self.generations {
            config.genetic.num_generations = generations;
        }
        if let Some(rate) = self.mutation_rate {
            config.genetic.mutation_rate = rate;
        }
        if let Some(method) = self.crossover {
            config.genetic.crossover_method = method;
        }
        if self.no_elitism {
            config.genetic.elitism = false;
        }
        if let Some(seed) = self.seed {
            config.genetic.seed = Some(seed);
        }

        Ok(config)
    }

    fn read_grid(&self) -> Result<Grid> {
        match &self.file {
            Some(path) => Grid::from_file(path),
            None => {
                let mut text = String::new();
                io::stdin().read_to_string(&mut text)?;
                Grid::parse(&text)
            }
        }
    }
}

fn solve(args: &SolveArgs) -> Result<()> {
    let grid = args.read_grid()?;
    let problem = Problem::from_grid(&grid)?;
    let solver = RouteSolver::new(args.solver_config()?);

    let strategy = solver.choose_strategy(problem.delivery_count());
    let solution = if strategy == SolverKind::Genetic && args.stats {
        let mut algorithm = GeneticAlgorithm::new(&problem, solver.config.genetic.clone())?;
        let solution = algorithm.run();
        eprintln!("{}", algorithm.statistics().format());
        solution
    } else {
        solver.solve(&problem)?
    };

    info!(
        "Solved in {} with {} strategy",
        format_duration(solution.run_time),
        solution.strategy
    );

    if args.json {
        println!("{}", serde_json::to_string_pretty(&solution)?);
    } else {
        println!("Best route: {}", solution.route_string());
        println!("Total distance: {}", solution.cost);
    }

    if args.show {
        print_route_visualization(&grid, &solution);
    }

    if let Some(path) = &args.output {
        save_solution(&solution, &problem, path)?;
        info!("Report written to {}", path.display());
    }

    Ok(())
}

fn generate(rows: usize, cols: usize, points: usize, seed: Option<u64>) -> Result<()> {
    let mut rng = match seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };
    let grid = Grid::random(rows, cols, points, &mut rng)?;
    print!("{}", grid.to_text());
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let result = match &cli.command {
        Command::Solve(args) => solve(args),
        Command::Generate {
            rows,
            cols,
            points,
            seed,
        } => generate(*rows, *cols, *points, *seed),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
