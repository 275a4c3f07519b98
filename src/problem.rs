//! Problem definition: the start cell and the delivery set.

use crate::error::{FlyError, Result};
use crate::grid::{distance, Coordinate, Grid, START_LABEL};
use std::collections::HashMap;

/// A named delivery cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delivery {
    pub label: String,
    pub location: Coordinate,
}

/// A fixed-start routing instance.
///
/// Deliveries are index-stable: solvers work on `usize` indices into
/// [`Problem::deliveries`] and only translate back to labels on output.
/// Index `0` of the distance matrix is the start, delivery `i` lives at `i + 1`.
///
/// Only [`Problem::new`] and [`Problem::from_grid`] build one, and it is
/// read-only afterwards, so the matrix always matches the delivery set.
///
/// ```compile_fail
/// use flyfood::{grid::Coordinate, problem::Problem};
///
/// let mut problem = Problem::new(Coordinate::new(0, 0), Vec::new()).unwrap();
/// problem.deliveries.clear();
/// ```
///
/// ```compile_fail
/// let problem: flyfood::problem::Problem =
///     serde_json::from_str(r#"{"deliveries": [], "distance_matrix": [[0]]}"#).unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct Problem {
    start: Coordinate,
    deliveries: Vec<Delivery>,
    distance_matrix: Vec<Vec<u64>>,
}

impl Problem {
    /// Create a problem, rejecting duplicate labels and a delivery named `R`.
    pub fn new(start: Coordinate, deliveries: Vec<Delivery>) -> Result<Self> {
        let mut seen: HashMap<&str, Coordinate> = HashMap::with_capacity(deliveries.len());

        for delivery in &deliveries {
            if delivery.label == START_LABEL {
                return Err(FlyError::DuplicateStart {
                    first: start,
                    second: delivery.location,
                });
            }
            if let Some(first) = seen.insert(delivery.label.as_str(), delivery.location) {
                return Err(FlyError::DuplicateLabel {
                    label: delivery.label.clone(),
                    first,
                    second: delivery.location,
                });
            }
        }

        let distance_matrix = Self::compute_distance_matrix(start, &deliveries);

        Ok(Problem {
            start,
            deliveries,
            distance_matrix,
        })
    }

    /// Extract the start and delivery set from a grid, scanning row-major.
    pub fn from_grid(grid: &Grid) -> Result<Self> {
        let mut start: Option<Coordinate> = None;
        let mut deliveries = Vec::new();

        for (location, label) in grid.occupied_cells() {
            if label == START_LABEL {
                if let Some(first) = start {
                    return Err(FlyError::DuplicateStart {
                        first,
                        second: location,
                    });
                }
                start = Some(location);
            } else {
                deliveries.push(Delivery {
                    label: label.to_string(),
                    location,
                });
            }
        }

        let start = start.ok_or(FlyError::MissingStart)?;
        Problem::new(start, deliveries)
    }

    /// Generate the full distance matrix, start first.
    fn compute_distance_matrix(start: Coordinate, deliveries: &[Delivery]) -> Vec<Vec<u64>> {
        let points: Vec<Coordinate> = std::iter::once(start)
            .chain(deliveries.iter().map(|d| d.location))
            .collect();
        let n = points.len();
        let mut matrix = vec![vec![0; n]; n];

        for i in 0..n {
            for j in (i + 1)..n {
                let d = distance(points[i], points[j]);
                matrix[i][j] = d;
                matrix[j][i] = d;
            }
        }

        matrix
    }

    /// The start and end cell of every tour.
    pub fn start(&self) -> Coordinate {
        self.start
    }

    /// Deliveries in index order.
    pub fn deliveries(&self) -> &[Delivery] {
        &self.deliveries
    }

    /// Number of delivery points.
    pub fn delivery_count(&self) -> usize {
        self.deliveries.len()
    }

    /// Distance between two deliveries.
    pub fn get_distance(&self, from: usize, to: usize) -> u64 {
        self.distance_matrix[from + 1][to + 1]
    }

    /// Distance between the start and a delivery.
    pub fn distance_from_start(&self, delivery: usize) -> u64 {
        self.distance_matrix[0][delivery + 1]
    }

    /// Cost of the closed tour `start -> tour[0] -> ... -> tour[n-1] -> start`.
    pub fn tour_cost(&self, tour: &[usize]) -> u64 {
        let (first, last) = match (tour.first(), tour.last()) {
            (Some(&first), Some(&last)) => (first, last),
            _ => return 0,
        };

        let inner: u64 = tour
            .windows(2)
            .map(|pair| self.get_distance(pair[0], pair[1]))
            .sum();

        self.distance_from_start(first) + inner + self.distance_from_start(last)
    }

    /// Translate an index tour into delivery labels.
    pub fn labels_of(&self, tour: &[usize]) -> Vec<String> {
        tour.iter()
            .map(|&i| self.deliveries[i].label.clone())
            .collect()
    }

    /// Translate labels back into an index tour.
    ///
    /// Returns `None` if any label is not a delivery of this problem.
    pub fn indices_of<S: AsRef<str>>(&self, route: &[S]) -> Option<Vec<usize>> {
        route
            .iter()
            .map(|label| {
                self.deliveries
                    .iter()
                    .position(|d| d.label == label.as_ref())
            })
            .collect()
    }

    /// Cost of a route given as labels, or `None` if it names an unknown label.
    pub fn route_cost<S: AsRef<str>>(&self, route: &[S]) -> Option<u64> {
        self.indices_of(route).map(|tour| self.tour_cost(&tour))
    }
}
