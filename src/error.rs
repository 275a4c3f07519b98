//! Error types for the FlyFood routing engine.

use crate::grid::Coordinate;
use thiserror::Error;

/// Result type alias for FlyFood operations.
pub type Result<T> = std::result::Result<T, FlyError>;

/// Every way a solve request can be rejected.
///
/// All of these are precondition failures detected before any search runs.
#[derive(Debug, Error)]
pub enum FlyError {
    /// The grid has no start cell.
    #[error("start cell 'R' not found in grid")]
    MissingStart,

    /// The grid holds more than one start cell.
    #[error("start cell 'R' appears more than once (at {first} and {second})")]
    DuplicateStart { first: Coordinate, second: Coordinate },

    /// A delivery label occurs in more than one cell.
    #[error("delivery label '{label}' appears more than once (at {first} and {second})")]
    DuplicateLabel {
        label: String,
        first: Coordinate,
        second: Coordinate,
    },

    /// Grid text that does not follow the `rows cols` + rows format.
    #[error("malformed grid: {0}")]
    Parse(String),

    /// Rejected solver or genetic configuration.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// The genetic path needs at least two labels to recombine.
    #[error("genetic search needs at least 2 delivery points, found {found}")]
    TooFewDeliveries { found: usize },

    /// A random grid was requested with more points than free cells.
    #[error("a {rows}x{cols} grid cannot hold a start cell and {requested} delivery points")]
    GridTooSmall {
        rows: usize,
        cols: usize,
        requested: usize,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
