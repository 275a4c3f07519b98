//! Unit tests for the reporting helpers.

use flyfood::config::SolverKind;
use flyfood::exact::ExactSolver;
use flyfood::grid::Grid;
use flyfood::problem::Problem;
use flyfood::solution::Solution;
use flyfood::utils::{format_duration, render_route, save_solution};
use std::fs;
use std::io;
use std::time::Duration;

/// Creates the 2x2 grid with `R` at (0, 0), `A` at (0, 1) and `B` at (1, 1).
fn create_test_grid() -> Grid {
    Grid::parse("2 2\nR A\n0 B\n").unwrap()
}

fn temp_path(name: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!("flyfood_{}_{}.txt", name, std::process::id()))
}

#[test]
fn test_format_duration() {
    assert_eq!(format_duration(Duration::from_millis(3_723_045)), "1h 02m 03.045s");
    assert_eq!(format_duration(Duration::from_secs(0)), "0h 00m 00.000s");
}

#[test]
fn test_save_solution_writes_legs() {
    let problem = Problem::from_grid(&create_test_grid()).unwrap();
    let solution = ExactSolver.solve(&problem).with_convergence(vec![6, 4]);
    let path = temp_path("report");

    save_solution(&solution, &problem, &path).unwrap();
    let report = fs::read_to_string(&path).unwrap();
    fs::remove_file(&path).unwrap();

    assert!(report.contains("Total Distance: 4"));
    assert!(report.contains("R (0, 0) -[1]-> A (0, 1) -[1]-> B (1, 1) -[2]-> R"));
    assert!(report.contains("Generation,BestCost\n0,6\n1,4\n"));
}

#[test]
fn test_save_solution_rejects_unknown_label() {
    let problem = Problem::from_grid(&create_test_grid()).unwrap();
    let solution = Solution::new(
        vec!["A".to_string(), "ZZ".to_string()],
        4,
        SolverKind::Exact,
    );
    let path = temp_path("unknown_label");

    let err = save_solution(&solution, &problem, &path).unwrap_err();

    assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
    assert!(err.to_string().contains("ZZ"));
    // Nothing is written for a route that does not match the problem
    assert!(!path.exists());
}

#[test]
fn test_render_route() {
    let grid = create_test_grid();
    let problem = Problem::from_grid(&grid).unwrap();
    let solution = ExactSolver.solve(&problem);

    assert_eq!(render_route(&grid, &solution), "R 1\n. 2\n");
}
