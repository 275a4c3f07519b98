//! Utility functions for reporting routes and search runs.

use std::collections::HashMap;
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;
use std::time::Duration;

use itertools::Itertools;

use crate::grid::{Coordinate, Grid, EMPTY_LABEL, START_LABEL};
use crate::problem::Problem;
use crate::solution::Solution;

/// Format a duration as hours, minutes, and seconds.
pub fn format_duration(duration: Duration) -> String {
    let total_seconds = duration.as_secs();
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;
    let millis = duration.subsec_millis();

    format!("{}h {:02}m {:02}.{:03}s", hours, minutes, seconds, millis)
}

/// Save a solution report to a file.
///
/// Fails with `InvalidInput` if the route names a label the problem does not
/// have.
pub fn save_solution<P: AsRef<Path>>(
    solution: &Solution,
    problem: &Problem,
    path: P,
) -> io::Result<()> {
    let stops = solution
        .route
        .iter()
        .map(|label| {
            problem
                .deliveries()
                .iter()
                .find(|d| &d.label == label)
                .ok_or_else(|| {
                    io::Error::new(
                        io::ErrorKind::InvalidInput,
                        format!("route visits '{}', which is not a delivery of this problem", label),
                    )
                })
        })
        .collect::<io::Result<Vec<_>>>()?;

    let mut file = File::create(path)?;

    writeln!(file, "FlyFood route ({} deliveries)", problem.delivery_count())?;
    writeln!(file, "Strategy: {}", solution.strategy)?;
    writeln!(file, "Total Distance: {}", solution.cost)?;
    writeln!(file, "Run Time: {}", format_duration(solution.run_time))?;
    writeln!(file)?;

    let start = problem.start();
    write!(file, "{} {}", START_LABEL, start)?;
    let mut previous = start;
    for delivery in stops {
        write!(
            file,
            " -[{}]-> {} {}",
            previous.distance(&delivery.location),
            delivery.label,
            delivery.location
        )?;
        previous = delivery.location;
    }
    writeln!(file, " -[{}]-> {}", previous.distance(&start), START_LABEL)?;

    if !solution.convergence.is_empty() {
        writeln!(file)?;
        writeln!(file, "Generation,BestCost")?;
        for (generation, cost) in solution.convergence.iter().enumerate() {
            writeln!(file, "{},{}", generation, cost)?;
        }
    }

    Ok(())
}

/// Summary of a genetic search run.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchStatistics {
    pub generations: usize,
    pub runtime: Duration,
    pub initial_best_cost: Option<u64>,
    pub best_cost: Option<u64>,
    pub average_cost: f64,
    pub distinct_tours: usize,
    pub population_size: usize,
}

impl SearchStatistics {
    /// Format the statistics as a string.
    pub fn format(&self) -> String {
        let show = |cost: Option<u64>| cost.map_or_else(|| "-".to_string(), |c| c.to_string());

        format!(
            "Search Statistics:
- Generations: {}
- Runtime: {}
- Initial Best Cost: {}
- Final Best Cost: {}
- Final Average Cost: {:.2}
- Distinct Tours: {} / {}",
            self.generations,
            format_duration(self.runtime),
            show(self.initial_best_cost),
            show(self.best_cost),
            self.average_cost,
            self.distinct_tours,
            self.population_size
        )
    }
}

/// Render the grid with each delivery replaced by its position in the route.
///
/// The start shows as `R`, empty cells as `.`, deliveries missing from the
/// route keep their label.
pub fn render_route(grid: &Grid, solution: &Solution) -> String {
    let order: HashMap<&str, usize> = solution
        .route
        .iter()
        .enumerate()
        .map(|(i, label)| (label.as_str(), i + 1))
        .collect();

    let cells: Vec<Vec<String>> = (0..grid.rows)
        .map(|row| {
            (0..grid.cols)
                .map(|col| {
                    match grid.get(Coordinate::new(row, col)) {
                        Some(START_LABEL) => START_LABEL.to_string(),
                        Some(label) => match order.get(label) {
                            Some(step) => step.to_string(),
                            None if label == EMPTY_LABEL => ".".to_string(),
                            None => label.to_string(),
                        },
                        None => ".".to_string(),
                    }
                })
                .collect()
        })
        .collect();

    let width = cells
        .iter()
        .flatten()
        .map(String::len)
        .max()
        .unwrap_or(1);

    let mut text = String::new();
    for row in &cells {
        let line = row
            .iter()
            .map(|c| format!("{:>width$}", c, width = width))
            .join(" ");
        text.push_str(&line);
        text.push('\n');
    }
    text
}

/// Print route visualization to console.
pub fn print_route_visualization(grid: &Grid, solution: &Solution) {
    println!("Route Visualization");
    println!("Total Distance: {}", solution.cost);
    println!("Stops: {}", solution.route.len());
    println!();
    print!("{}", render_route(grid, solution));
    println!();
    println!("Legend:");
    println!("R - Start");
    println!("n - n-th delivery on the route");
    println!(". - Empty cell");
}
