use std::fmt;

use crate::geometry::Cell;

/// Errors raised before a traversal starts
/// A missing path is not an error, see `SearchOutcome::path`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    OutOfBounds { cell: Cell, height: usize, width: usize }, // Endpoint outside the grid
    Blocked { cell: Cell }, // Endpoint sits on an obstacle
    InvalidMotion(u8), // Only 4 or 8 directions exist
    EmptyGrid, // Grid has no rows or no columns
    RaggedRows { row: usize, expected: usize, found: usize }, // Rows of unequal length
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds { cell, height, width } => {
                write!(f, "cell {cell} is outside the {height}x{width} grid")
            }
            Self::Blocked { cell } => write!(f, "cell {cell} is an obstacle"),
            Self::InvalidMotion(n) => {
                write!(f, "unsupported motion model: {n} directions (expected 4 or 8)")
            }
            Self::EmptyGrid => write!(f, "grid must have at least one row and one column"),
            Self::RaggedRows { row, expected, found } => {
                write!(f, "row {row} has {found} columns, expected {expected}")
            }
        }
    }
}

impl std::error::Error for SearchError {}
