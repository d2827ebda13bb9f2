use std::fmt;
use num_traits::{Num, Signed, Float};


/// Manhattan distance
pub fn manhattan_distance<T>(x1: T, y1: T, x2: T, y2: T) -> T
where
    T: Num + Copy + Signed,
    {
    (x1 - x2).abs() + (y1 - y2).abs()
}

/// Euclidean distance
pub fn euclidean<T>(x1: T, y1: T, x2: T, y2: T) -> T
where
    T: Float,
    {
    (x1 - x2).hypot(y1 - y2)
}


/// Grid cell addressed by (row, column)
/// Signed so that neighbour offsets can step outside the grid before the bounds check
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub row: i32,
    pub col: i32,
}

impl Cell {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Cell reached by applying a (d_row, d_col) step
    pub const fn offset(self, step: Step) -> Self {
        Self {
            row: self.row + step.d_row,
            col: self.col + step.d_col,
        }
    }

    /// Manhattan distance to another cell
    pub fn manhattan(&self, other: &Cell) -> f64 {
        manhattan_distance(self.row, self.col, other.row, other.col) as f64
    }

    /// Straight-line distance to another cell
    pub fn euclidean(&self, other: &Cell) -> f64 {
        euclidean(self.row as f64, self.col as f64, other.row as f64, other.col as f64)
    }
}

impl From<(i32, i32)> for Cell {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}


/// Single move on the grid
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Step {
    pub d_row: i32,
    pub d_col: i32,
}

impl Step {
    pub const fn new(d_row: i32, d_col: i32) -> Self {
        Self { d_row, d_col }
    }

    /// Both components non-zero
    pub const fn is_diagonal(&self) -> bool {
        self.d_row != 0 && self.d_col != 0
    }

    /// Euclidean length of the step, 1 orthogonal and sqrt(2) diagonal
    pub fn length(&self) -> f64 {
        euclidean(0.0, 0.0, self.d_row as f64, self.d_col as f64)
    }
}
