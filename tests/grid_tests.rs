//! Unit tests for grid parsing, generation and the Manhattan metric.

use flyfood::error::FlyError;
use flyfood::grid::{distance, generate_labels, Coordinate, Grid, START_LABEL};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::collections::HashSet;

#[test]
fn test_distance_examples() {
    let a = Coordinate::new(0, 0);
    let b = Coordinate::new(3, 4);
    let c = Coordinate::new(5, 1);

    assert_eq!(distance(a, b), 7);
    assert_eq!(distance(b, c), 5);
    assert_eq!(distance(c, b), 5);
    assert_eq!(distance(c, c), 0);
    assert_eq!(a.distance(&c), 6);
}

#[test]
fn test_parse_grid() {
    let grid = Grid::parse("3 4\n0 0 0 D\n0 A 0 0\nR 0 C B\n").unwrap();

    assert_eq!(grid.rows, 3);
    assert_eq!(grid.cols, 4);
    assert_eq!(grid.get(Coordinate::new(2, 0)), Some("R"));
    assert_eq!(grid.get(Coordinate::new(0, 3)), Some("D"));
    assert_eq!(grid.get(Coordinate::new(3, 0)), None);

    // Occupied cells come out row-major
    let occupied: Vec<&str> = grid.occupied_cells().map(|(_, label)| label).collect();
    assert_eq!(occupied, vec!["D", "A", "R", "C", "B"]);
}

#[test]
fn test_parse_skips_blank_lines() {
    let grid: Grid = "\n2 2\n\nR A\n  \n0 B\n\n".parse().unwrap();
    assert_eq!(grid.rows, 2);
    assert_eq!(grid.get(Coordinate::new(1, 1)), Some("B"));
}

#[test]
fn test_parse_rejects_malformed_input() {
    // Missing header
    assert!(matches!(Grid::parse(""), Err(FlyError::Parse(_))));
    // Header without column count
    assert!(matches!(Grid::parse("2\nR A\n0 B"), Err(FlyError::Parse(_))));
    // Non-numeric dimension
    assert!(matches!(Grid::parse("x 2\nR A\n0 B"), Err(FlyError::Parse(_))));
    // Too few rows
    assert!(matches!(Grid::parse("3 2\nR A\n0 B"), Err(FlyError::Parse(_))));
    // Ragged row
    assert!(matches!(Grid::parse("2 2\nR A 0\n0 B"), Err(FlyError::Parse(_))));
    // Extra trailing row
    assert!(matches!(
        Grid::parse("1 2\nR A\n0 B"),
        Err(FlyError::Parse(_))
    ));
}

#[test]
fn test_new_rejects_ragged_rows() {
    let cells = vec![
        vec!["R".to_string(), "A".to_string()],
        vec!["0".to_string()],
    ];
    assert!(matches!(Grid::new(cells), Err(FlyError::Parse(_))));
}

#[test]
fn test_to_text_parses_back() {
    let text = "2 3\nR 0 A\nB 0 C\n";
    let grid = Grid::parse(text).unwrap();

    assert_eq!(grid.to_text(), text);
    assert_eq!(Grid::parse(&grid.to_text()).unwrap(), grid);
}

#[test]
fn test_from_file() {
    let path = std::env::temp_dir().join(format!("flyfood_grid_{}.txt", std::process::id()));
    std::fs::write(&path, "2 2\nR A\n0 B\n").unwrap();

    let grid = Grid::from_file(&path).unwrap();
    assert_eq!(grid.get(Coordinate::new(0, 1)), Some("A"));

    std::fs::remove_file(&path).unwrap();

    // Missing file surfaces as an I/O error
    assert!(matches!(Grid::from_file(&path), Err(FlyError::Io(_))));
}

#[test]
fn test_generate_labels() {
    let labels = generate_labels(30);

    assert_eq!(labels.len(), 30);
    assert_eq!(labels[0], "A");
    assert_eq!(labels[16], "Q");
    // The start label is skipped
    assert_eq!(labels[17], "S");
    assert!(!labels.iter().any(|l| l == START_LABEL));
    assert_eq!(labels[24], "Z");
    assert_eq!(labels[25], "AA");
    assert_eq!(labels[26], "AB");

    let unique: HashSet<&String> = labels.iter().collect();
    assert_eq!(unique.len(), labels.len());

    // Three-letter labels appear after ZZ
    let many = generate_labels(702);
    assert_eq!(many[700], "ZZ");
    assert_eq!(many[701], "AAA");
}

#[test]
fn test_random_grid() {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let grid = Grid::random(6, 5, 12, &mut rng).unwrap();

    assert_eq!(grid.rows, 6);
    assert_eq!(grid.cols, 5);

    let occupied: Vec<&str> = grid.occupied_cells().map(|(_, label)| label).collect();
    assert_eq!(occupied.len(), 13);
    assert_eq!(occupied.iter().filter(|&&l| l == START_LABEL).count(), 1);

    let labels: HashSet<&str> = occupied.into_iter().filter(|&l| l != START_LABEL).collect();
    let expected = generate_labels(12);
    assert_eq!(labels.len(), 12);
    for label in &expected {
        assert!(labels.contains(label.as_str()), "label {} missing", label);
    }
}

#[test]
fn test_random_grid_is_seeded() {
    let a = Grid::random(8, 8, 20, &mut ChaCha8Rng::seed_from_u64(7)).unwrap();
    let b = Grid::random(8, 8, 20, &mut ChaCha8Rng::seed_from_u64(7)).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_random_grid_full_and_too_small() {
    let mut rng = ChaCha8Rng::seed_from_u64(1);

    // Exactly enough room: every cell is used
    let grid = Grid::random(2, 2, 3, &mut rng).unwrap();
    assert_eq!(grid.occupied_cells().count(), 4);

    let result = Grid::random(2, 2, 4, &mut rng);
    assert!(matches!(
        result,
        Err(FlyError::GridTooSmall {
            rows: 2,
            cols: 2,
            requested: 4
        })
    ));
}

#[test]
fn test_random_grid_with_overflowing_size() {
    let mut rng = ChaCha8Rng::seed_from_u64(1);

    // rows * cols does not fit in usize
    let result = Grid::random(usize::MAX, 2, 1, &mut rng);
    assert!(matches!(
        result,
        Err(FlyError::GridTooSmall {
            rows: usize::MAX,
            cols: 2,
            requested: 1
        })
    ));
}
