//! Grid representation: cells, coordinates and the Manhattan metric.

use crate::error::{FlyError, Result};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

/// Label of the start/end cell.
pub const START_LABEL: &str = "R";
/// Label of an empty cell.
pub const EMPTY_LABEL: &str = "0";

/// A cell position on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coordinate {
    pub row: usize,
    pub col: usize,
}

impl Coordinate {
    pub fn new(row: usize, col: usize) -> Self {
        Coordinate { row, col }
    }

    /// Manhattan distance to another coordinate.
    pub fn distance(&self, other: &Coordinate) -> u64 {
        distance(*self, *other)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Manhattan distance `|Δrow| + |Δcol|` between two cells.
pub fn distance(a: Coordinate, b: Coordinate) -> u64 {
    let d_row = if a.row >= b.row {
        a.row - b.row
    } else {
        b.row - a.row
    };
    let d_col = if a.col >= b.col {
        a.col - b.col
    } else {
        b.col - a.col
    };

    (d_row + d_col) as u64
}

/// Generate `n` delivery labels in spreadsheet order: `A..Z, AA, AB, ...`.
///
/// The start label is never produced.
pub fn generate_labels(n: usize) -> Vec<String> {
    (0..)
        .map(spreadsheet_label)
        .filter(|label| label != START_LABEL)
        .take(n)
        .collect()
}

fn spreadsheet_label(index: usize) -> String {
    let mut letters = Vec::new();
    let mut rest = index;

    loop {
        letters.push((b'A' + (rest % 26) as u8) as char);
        if rest < 26 {
            break;
        }
        rest = rest / 26 - 1;
    }

    letters.iter().rev().collect()
}

/// A `rows x cols` matrix of cell labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    pub rows: usize,
    pub cols: usize,
    cells: Vec<Vec<String>>,
}

impl Grid {
    /// Build a grid from rows of labels. Every row must have the same length.
    pub fn new(cells: Vec<Vec<String>>) -> Result<Self> {
        let rows = cells.len();
        let cols = cells.first().map_or(0, Vec::len);

        if let Some((i, row)) = cells.iter().enumerate().find(|(_, r)| r.len() != cols) {
            return Err(FlyError::Parse(format!(
                "row {} has {} cells, expected {}",
                i,
                row.len(),
                cols
            )));
        }

        Ok(Grid { rows, cols, cells })
    }

    /// Parse the text format: a `rows cols` header followed by `rows` lines of
    /// whitespace-separated labels. Blank lines are ignored.
    pub fn parse(text: &str) -> Result<Self> {
        let mut lines = text.lines().map(str::trim).filter(|l| !l.is_empty());

        let header = lines
            .next()
            .ok_or_else(|| FlyError::Parse("missing dimensions line".to_string()))?;
        let dims: Vec<&str> = header.split_whitespace().collect();
        if dims.len() != 2 {
            return Err(FlyError::Parse(format!(
                "expected '<rows> <cols>', got '{}'",
                header
            )));
        }
        let rows = parse_dimension(dims[0])?;
        let cols = parse_dimension(dims[1])?;

        let mut cells = Vec::with_capacity(rows);
        for i in 0..rows {
            let line = lines.next().ok_or_else(|| {
                FlyError::Parse(format!("expected {} rows, found {}", rows, i))
            })?;
            let row: Vec<String> = line.split_whitespace().map(str::to_string).collect();
            if row.len() != cols {
                return Err(FlyError::Parse(format!(
                    "row {} has {} cells, expected {}",
                    i,
                    row.len(),
                    cols
                )));
            }
            cells.push(row);
        }

        if let Some(extra) = lines.next() {
            return Err(FlyError::Parse(format!(
                "unexpected trailing line '{}'",
                extra
            )));
        }

        Ok(Grid { rows, cols, cells })
    }

    /// Load a grid from a file in the text format.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Grid::parse(&text)
    }

    /// Generate a random grid with a start cell and `points` labelled deliveries.
    pub fn random<R: Rng + ?Sized>(
        rows: usize,
        cols: usize,
        points: usize,
        rng: &mut R,
    ) -> Result<Self> {
        let capacity = match rows.checked_mul(cols) {
            Some(capacity) if points < capacity => capacity,
            _ => {
                return Err(FlyError::GridTooSmall {
                    rows,
                    cols,
                    requested: points,
                })
            }
        };

        let mut cells = vec![vec![EMPTY_LABEL.to_string(); cols]; rows];
        let positions = rand::seq::index::sample(rng, capacity, points + 1);
        let labels = std::iter::once(START_LABEL.to_string()).chain(generate_labels(points));

        for (position, label) in positions.iter().zip(labels) {
            cells[position / cols][position % cols] = label;
        }

        Ok(Grid { rows, cols, cells })
    }

    /// Label stored at a coordinate, if it lies inside the grid.
    pub fn get(&self, at: Coordinate) -> Option<&str> {
        self.cells
            .get(at.row)
            .and_then(|row| row.get(at.col))
            .map(String::as_str)
    }

    /// Non-empty cells in row-major order.
    pub fn occupied_cells(&self) -> impl Iterator<Item = (Coordinate, &str)> + '_ {
        self.cells.iter().enumerate().flat_map(|(i, row)| {
            row.iter()
                .enumerate()
                .filter(|(_, label)| label.as_str() != EMPTY_LABEL)
                .map(move |(j, label)| (Coordinate::new(i, j), label.as_str()))
        })
    }

    /// Render back to the text format accepted by [`Grid::parse`].
    pub fn to_text(&self) -> String {
        let mut text = format!("{} {}\n", self.rows, self.cols);
        for row in &self.cells {
            text.push_str(&row.join(" "));
            text.push('\n');
        }
        text
    }
}

impl FromStr for Grid {
    type Err = FlyError;

    fn from_str(s: &str) -> Result<Self> {
        Grid::parse(s)
    }
}

fn parse_dimension(raw: &str) -> Result<usize> {
    raw.parse::<usize>()
        .map_err(|_| FlyError::Parse(format!("invalid dimension '{}'", raw)))
}
