//! Uninformed and informed search on 2D occupancy grids.
//!
//! Four strategies, breadth-first, depth-first, uniform-cost and A*, each in
//! two disciplines:
//!
//! - **Graph** search finalizes every cell at most once and is complete and,
//!   for UCS/A*, cost-optimal.
//! - **Tree** search has no closed set and re-expands cells reached along
//!   different branches, bounded by a local [`CycleGuard`] and an optional
//!   depth cap.
//!
//! Every traversal returns the path (if any) together with the set of
//! expanded cells and the chronological expansion order, for replay and
//! comparison.
//!
//! ```
//! use gridsearch::{Cell, Grid, MotionModel, Searcher};
//!
//! let grid = Grid::from_rows(&[
//!     [0u8, 1, 0],
//!     [0, 1, 0],
//!     [0, 0, 0],
//! ]).unwrap();
//!
//! let outcome = Searcher::a_star_graph(MotionModel::Orthogonal)
//!     .traverse(&grid, Cell::new(0, 0), Cell::new(0, 2))
//!     .unwrap();
//!
//! assert_eq!(outcome.path_len(), 7);
//! ```

mod collections;
mod config;
mod errors;
mod geometry;
mod grid;
mod motion;
mod search;

pub use collections::FxIndexSet;
pub use config::SearchConfig;
pub use errors::SearchError;
pub use geometry::{euclidean, manhattan_distance, Cell, Step};
pub use grid::Grid;
pub use motion::MotionModel;
pub use search::{
    traverse, Algorithm, CycleGuard, Discipline, SearchOutcome, Searcher, Strategy,
    DEFAULT_TREE_DEPTH,
};
