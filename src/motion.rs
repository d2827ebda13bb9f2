use crate::errors::SearchError;
use crate::geometry::{Cell, Step};
use crate::grid::Grid;

/// N, E, S, W
const ORTHOGONAL: [Step; 4] = [
    Step::new(-1, 0),
    Step::new(0, 1),
    Step::new(1, 0),
    Step::new(0, -1),
];

/// N, NE, E, SE, S, SW, W, NW
const OMNIDIRECTIONAL: [Step; 8] = [
    Step::new(-1, 0),
    Step::new(-1, 1),
    Step::new(0, 1),
    Step::new(1, 1),
    Step::new(1, 0),
    Step::new(1, -1),
    Step::new(0, -1),
    Step::new(-1, -1),
];


/// Ordered set of moves shared by every search
/// The order of the steps decides neighbour expansion order, and so every tie-break.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MotionModel {
    Orthogonal,
    Omnidirectional,
}

impl MotionModel {

    /// Select a model by its number of directions, 4 or 8
    pub fn from_directions(directions: u8) -> Result<Self, SearchError> {
        match directions {
            4 => Ok(Self::Orthogonal),
            8 => Ok(Self::Omnidirectional),
            n => Err(SearchError::InvalidMotion(n)),
        }
    }

    pub fn directions(&self) -> u8 {
        self.steps().len() as u8
    }

    pub fn steps(&self) -> &'static [Step] {
        match self {
            Self::Orthogonal => &ORTHOGONAL,
            Self::Omnidirectional => &OMNIDIRECTIONAL,
        }
    }

    /// True when any step moves along both axes at once
    pub fn is_diagonal(&self) -> bool {
        self.steps().iter().any(Step::is_diagonal)
    }

    /// Free, in-bounds neighbours of a cell with the cost of reaching each, in step order
    pub fn neighbours<'a>(self, grid: &'a Grid, cell: Cell) -> impl Iterator<Item = (Cell, f64)> + 'a {
        self.steps().iter().filter_map(move |step| {
            let next = cell.offset(*step);
            grid.is_free(next).then(|| (next, step.length()))
        })
    }

    /// The step joining two cells, None when they are not adjacent under this model
    pub fn step_between(&self, from: Cell, to: Cell) -> Option<Step> {
        let step = Step::new(to.row - from.row, to.col - from.col);
        self.steps().iter().copied().find(|s| *s == step)
    }

    pub fn step_cost(&self, step: Step) -> f64 {
        step.length()
    }

    /// Admissible estimate of the remaining cost
    /// Euclidean once diagonals are allowed (Manhattan would overestimate), Manhattan otherwise.
    pub fn heuristic(&self, from: &Cell, to: &Cell) -> f64 {
        if self.is_diagonal() {
            from.euclidean(to)
        } else {
            from.manhattan(to)
        }
    }

    /// Total movement cost of a path, None if two consecutive cells are not one step apart
    pub fn path_cost(&self, path: &[Cell]) -> Option<f64> {
        path.windows(2).try_fold(0.0, |acc, pair| {
            self.step_between(pair[0], pair[1]).map(|step| acc + self.step_cost(step))
        })
    }

    /// A path is valid when non-empty, entirely on free cells, and moves one step at a time
    pub fn is_valid_path(&self, grid: &Grid, path: &[Cell]) -> bool {
        !path.is_empty()
            && path.iter().all(|c| grid.is_free(*c))
            && self.path_cost(path).is_some()
    }
}

impl TryFrom<u8> for MotionModel {
    type Error = SearchError;

    fn try_from(directions: u8) -> Result<Self, Self::Error> {
        Self::from_directions(directions)
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::SQRT_2;

    #[test]
    fn test_from_directions() {
        assert_eq!(MotionModel::from_directions(4), Ok(MotionModel::Orthogonal));
        assert_eq!(MotionModel::try_from(8), Ok(MotionModel::Omnidirectional));
        assert_eq!(MotionModel::from_directions(6), Err(SearchError::InvalidMotion(6)));
        assert_eq!(MotionModel::Omnidirectional.directions(), 8);
        assert!(!MotionModel::Orthogonal.is_diagonal());
        assert!(MotionModel::Omnidirectional.is_diagonal());
    }

    #[test]
    fn test_neighbours_follow_step_order() {
        let mut grid = Grid::new(3, 3).unwrap();
        grid.set_obstacle(Cell::new(0, 1), true).unwrap();
        let centre = Cell::new(1, 1);

        let orth: Vec<Cell> = MotionModel::Orthogonal.neighbours(&grid, centre).map(|(c, _)| c).collect();
        assert_eq!(orth, vec![Cell::new(1, 2), Cell::new(2, 1), Cell::new(1, 0)]);

        let all: Vec<(Cell, f64)> = MotionModel::Omnidirectional.neighbours(&grid, centre).collect();
        assert_eq!(all.len(), 7);
        assert_eq!(all[0].0, Cell::new(0, 2));
        assert!((all[0].1 - SQRT_2).abs() < 1e-12);
        assert_eq!(all[1], (Cell::new(1, 2), 1.0));
    }

    #[test]
    fn test_corner_neighbours_stay_in_bounds() {
        let grid = Grid::new(2, 2).unwrap();
        let n: Vec<Cell> = MotionModel::Omnidirectional.neighbours(&grid, Cell::new(0, 0)).map(|(c, _)| c).collect();
        assert_eq!(n, vec![Cell::new(0, 1), Cell::new(1, 1), Cell::new(1, 0)]);
    }

    #[test]
    fn test_heuristic_matches_motion() {
        let a = Cell::new(0, 0);
        let b = Cell::new(3, 4);
        assert_eq!(MotionModel::Orthogonal.heuristic(&a, &b), 7.0);
        assert!((MotionModel::Omnidirectional.heuristic(&a, &b) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_path_cost() {
        let path = [Cell::new(0, 0), Cell::new(1, 1), Cell::new(1, 2)];
        let cost = MotionModel::Omnidirectional.path_cost(&path).unwrap();
        assert!((cost - (SQRT_2 + 1.0)).abs() < 1e-12);

        // diagonal move is illegal with 4 directions
        assert_eq!(MotionModel::Orthogonal.path_cost(&path), None);
        assert_eq!(MotionModel::Orthogonal.path_cost(&[Cell::new(2, 2)]), Some(0.0));
    }

    #[test]
    fn test_is_valid_path() {
        let mut grid = Grid::new(2, 3).unwrap();
        grid.set_obstacle(Cell::new(0, 1), true).unwrap();
        let motion = MotionModel::Orthogonal;

        assert!(motion.is_valid_path(&grid, &[Cell::new(0, 0), Cell::new(1, 0), Cell::new(1, 1)]));
        assert!(!motion.is_valid_path(&grid, &[Cell::new(0, 0), Cell::new(0, 1)]));
        assert!(!motion.is_valid_path(&grid, &[Cell::new(0, 0), Cell::new(0, 2)]));
        assert!(!motion.is_valid_path(&grid, &[]));
    }
}
