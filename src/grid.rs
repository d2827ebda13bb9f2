use crate::errors::SearchError;
use crate::geometry::Cell;


/// Rectangular occupancy grid
/// 0 is free space, anything else is an obstacle. Stored row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<u8>,
    height: usize,
    width: usize,
}

impl Grid {

    /// Create an obstacle-free grid
    pub fn new(height: usize, width: usize) -> Result<Self, SearchError> {
        if height == 0 || width == 0 {
            return Err(SearchError::EmptyGrid);
        }
        Ok(Self {
            cells: vec![0; height * width],
            height,
            width,
        })
    }

    /// Build a grid from an occupancy matrix, every row must have the same length
    pub fn from_rows<R>(rows: &[R]) -> Result<Self, SearchError>
    where
        R: AsRef<[u8]>,
    {
        let width = rows.first().map(|r| r.as_ref().len()).unwrap_or(0);
        if width == 0 {
            return Err(SearchError::EmptyGrid);
        }

        let mut cells = Vec::with_capacity(rows.len() * width);
        for (row, values) in rows.iter().enumerate() {
            let values = values.as_ref();
            if values.len() != width {
                return Err(SearchError::RaggedRows { row, expected: width, found: values.len() });
            }
            cells.extend_from_slice(values);
        }

        Ok(Self { cells, height: rows.len(), width })
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Flat index of a cell, None when outside the grid
    fn index(&self, cell: Cell) -> Option<usize> {
        if cell.row < 0 || cell.col < 0 {
            return None;
        }
        let (row, col) = (cell.row as usize, cell.col as usize);
        if row >= self.height || col >= self.width {
            return None;
        }
        Some(row * self.width + col)
    }

    pub fn in_bounds(&self, cell: Cell) -> bool {
        self.index(cell).is_some()
    }

    /// In bounds and not an obstacle
    pub fn is_free(&self, cell: Cell) -> bool {
        self.index(cell).is_some_and(|i| self.cells[i] == 0)
    }

    /// Mark a cell as an obstacle (or clear it)
    pub fn set_obstacle(&mut self, cell: Cell, blocked: bool) -> Result<(), SearchError> {
        let i = self.index(cell).ok_or(SearchError::OutOfBounds {
            cell,
            height: self.height,
            width: self.width,
        })?;
        self.cells[i] = u8::from(blocked);
        Ok(())
    }

    /// Surround the grid with a one cell thick wall
    pub fn with_border_walls(mut self) -> Self {
        let (h, w) = (self.height, self.width);
        for col in 0..w {
            self.cells[col] = 1;
            self.cells[(h - 1) * w + col] = 1;
        }
        for row in 0..h {
            self.cells[row * w] = 1;
            self.cells[row * w + w - 1] = 1;
        }
        self
    }

    /// All free cells in row-major order
    pub fn free_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().enumerate().filter(|(_, v)| **v == 0).map(|(i, _)| {
            Cell::new((i / self.width) as i32, (i % self.width) as i32)
        })
    }

    /// Check that a cell can be used as a search endpoint
    pub fn check_endpoint(&self, cell: Cell) -> Result<(), SearchError> {
        match self.index(cell) {
            None => Err(SearchError::OutOfBounds { cell, height: self.height, width: self.width }),
            Some(i) if self.cells[i] != 0 => Err(SearchError::Blocked { cell }),
            Some(_) => Ok(()),
        }
    }
}
