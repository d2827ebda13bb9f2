mod frontier;
mod graph;
mod shortest_path;
mod tree;

use std::fmt;

use log::debug;

use crate::collections::FxIndexSet;
use crate::errors::SearchError;
use crate::geometry::Cell;
use crate::grid::Grid;
use crate::motion::MotionModel;
use frontier::{Fifo, Frontier, Lifo, Priority};

/// Depth cap applied to depth-first tree search unless overridden
pub const DEFAULT_TREE_DEPTH: usize = 15;


/// Frontier ordering
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Strategy {
    BreadthFirst, // FIFO
    DepthFirst, // LIFO
    UniformCost, // lowest accumulated cost first
    AStar, // lowest cost + heuristic first
}

impl Strategy {

    /// Cost of one move as seen by the strategy
    /// BFS and DFS count hops, UCS and A* pay the Euclidean step length
    fn weight(self, step_length: f64) -> f64 {
        match self {
            Self::BreadthFirst | Self::DepthFirst => 1.0,
            Self::UniformCost | Self::AStar => step_length,
        }
    }

    /// Guard used by tree search when none is configured
    pub fn default_cycle_guard(self) -> CycleGuard {
        match self {
            Self::BreadthFirst => CycleGuard::ShallowestDepth,
            Self::DepthFirst => CycleGuard::Ancestors,
            Self::UniformCost | Self::AStar => CycleGuard::CheapestCost,
        }
    }
}


/// Graph search finalizes each cell once, tree search may expand a cell on several branches
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Discipline {
    Graph,
    Tree,
}


/// Local anti-cycling rule for tree search
/// Graph search always relies on its closed set instead.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CycleGuard {
    Ancestors, // skip cells already on the current branch
    ShallowestDepth, // skip cells not reached at a strictly smaller depth than before
    CheapestCost, // skip cells not reached at a strictly smaller cost than before
}


/// The eight strategy/discipline pairs
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    BfsGraph,
    BfsTree,
    DfsGraph,
    DfsTree,
    AStarGraph,
    AStarTree,
    UcsGraph,
    UcsTree,
}

impl Algorithm {
    pub const ALL: [Algorithm; 8] = [
        Algorithm::BfsGraph,
        Algorithm::BfsTree,
        Algorithm::DfsGraph,
        Algorithm::DfsTree,
        Algorithm::AStarGraph,
        Algorithm::AStarTree,
        Algorithm::UcsGraph,
        Algorithm::UcsTree,
    ];

    pub fn new(strategy: Strategy, discipline: Discipline) -> Self {
        match (strategy, discipline) {
            (Strategy::BreadthFirst, Discipline::Graph) => Self::BfsGraph,
            (Strategy::BreadthFirst, Discipline::Tree) => Self::BfsTree,
            (Strategy::DepthFirst, Discipline::Graph) => Self::DfsGraph,
            (Strategy::DepthFirst, Discipline::Tree) => Self::DfsTree,
            (Strategy::AStar, Discipline::Graph) => Self::AStarGraph,
            (Strategy::AStar, Discipline::Tree) => Self::AStarTree,
            (Strategy::UniformCost, Discipline::Graph) => Self::UcsGraph,
            (Strategy::UniformCost, Discipline::Tree) => Self::UcsTree,
        }
    }

    pub fn strategy(&self) -> Strategy {
        match self {
            Self::BfsGraph | Self::BfsTree => Strategy::BreadthFirst,
            Self::DfsGraph | Self::DfsTree => Strategy::DepthFirst,
            Self::AStarGraph | Self::AStarTree => Strategy::AStar,
            Self::UcsGraph | Self::UcsTree => Strategy::UniformCost,
        }
    }

    pub fn discipline(&self) -> Discipline {
        match self {
            Self::BfsGraph | Self::DfsGraph | Self::AStarGraph | Self::UcsGraph => Discipline::Graph,
            Self::BfsTree | Self::DfsTree | Self::AStarTree | Self::UcsTree => Discipline::Tree,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::BfsGraph => "BFS Graph",
            Self::BfsTree => "BFS Tree",
            Self::DfsGraph => "DFS Graph",
            Self::DfsTree => "DFS Tree",
            Self::AStarGraph => "A* Graph",
            Self::AStarTree => "A* Tree",
            Self::UcsGraph => "UCS Graph",
            Self::UcsTree => "UCS Tree",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}


/// Result of one traversal
/// A missing path means the frontier ran dry; the expansion record is still filled in.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SearchOutcome {
    pub path: Option<Vec<Cell>>,
    pub expanded: FxIndexSet<Cell>, // cells expanded at least once, in first-expansion order
    pub expansion_order: Vec<Cell>, // every expansion, repeats included for tree search
    pub peak_frontier: usize, // largest frontier size seen during the run
}

impl SearchOutcome {

    /// start == goal: the path is the start itself and nothing was expanded
    fn trivial(start: Cell) -> Self {
        Self {
            path: Some(vec![start]),
            ..Self::default()
        }
    }

    pub fn is_found(&self) -> bool {
        self.path.is_some()
    }

    /// Number of cells on the path, 0 when no path was found
    pub fn path_len(&self) -> usize {
        self.path.as_ref().map_or(0, Vec::len)
    }

    /// Total expansions, the usual work/memory proxy when comparing algorithms
    pub fn nodes_expanded(&self) -> usize {
        self.expansion_order.len()
    }

    pub fn unique_expanded(&self) -> usize {
        self.expanded.len()
    }

    /// Movement cost of the path under a motion model
    pub fn path_cost(&self, motion: &MotionModel) -> Option<f64> {
        self.path.as_deref().and_then(|p| motion.path_cost(p))
    }
}


/// Everything a traversal reads, borrowed for one call
pub(crate) struct Context<'a> {
    pub grid: &'a Grid,
    pub motion: MotionModel,
    pub strategy: Strategy,
    pub start: Cell,
    pub goal: Cell,
}

impl Context<'_> {

    /// Accumulated cost after moving from `cost` by one step
    fn step(&self, cost: f64, step_length: f64) -> f64 {
        cost + self.strategy.weight(step_length)
    }

    /// Frontier key, only meaningful for the priority frontier
    fn priority(&self, cost: f64, cell: &Cell) -> f64 {
        match self.strategy {
            Strategy::AStar => cost + self.motion.heuristic(cell, &self.goal),
            _ => cost,
        }
    }
}


/// Configured traversal: one algorithm over one motion model
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Searcher {
    algorithm: Algorithm,
    motion: MotionModel,
    max_depth: Option<usize>,
    cycle_guard: CycleGuard,
}

impl Searcher {

    /// Create a searcher with the default guard and depth cap for the algorithm
    pub fn new(algorithm: Algorithm, motion: MotionModel) -> Self {
        let max_depth = match algorithm {
            Algorithm::DfsTree => Some(DEFAULT_TREE_DEPTH),
            _ => None,
        };
        Self {
            algorithm,
            motion,
            max_depth,
            cycle_guard: algorithm.strategy().default_cycle_guard(),
        }
    }

    pub fn bfs_graph(motion: MotionModel) -> Self { Self::new(Algorithm::BfsGraph, motion) }
    pub fn bfs_tree(motion: MotionModel) -> Self { Self::new(Algorithm::BfsTree, motion) }
    pub fn dfs_graph(motion: MotionModel) -> Self { Self::new(Algorithm::DfsGraph, motion) }
    pub fn dfs_tree(motion: MotionModel) -> Self { Self::new(Algorithm::DfsTree, motion) }
    pub fn a_star_graph(motion: MotionModel) -> Self { Self::new(Algorithm::AStarGraph, motion) }
    pub fn a_star_tree(motion: MotionModel) -> Self { Self::new(Algorithm::AStarTree, motion) }
    pub fn ucs_graph(motion: MotionModel) -> Self { Self::new(Algorithm::UcsGraph, motion) }
    pub fn ucs_tree(motion: MotionModel) -> Self { Self::new(Algorithm::UcsTree, motion) }

    /// Cap the depth of tree search, None removes the cap
    /// Entries at the cap are still expanded but produce no children. Ignored by graph search.
    pub fn with_max_depth(mut self, max_depth: Option<usize>) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Replace the tree search anti-cycling rule. Ignored by graph search.
    pub fn with_cycle_guard(mut self, guard: CycleGuard) -> Self {
        self.cycle_guard = guard;
        self
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn motion(&self) -> MotionModel {
        self.motion
    }

    pub fn max_depth(&self) -> Option<usize> {
        self.max_depth
    }

    pub fn cycle_guard(&self) -> CycleGuard {
        self.cycle_guard
    }

    /// Search from start to goal
    /// Fails only on invalid endpoints; an unreachable goal gives an outcome without a path.
    pub fn traverse(&self, grid: &Grid, start: Cell, goal: Cell) -> Result<SearchOutcome, SearchError> {
        grid.check_endpoint(start)?;
        grid.check_endpoint(goal)?;

        if start == goal {
            debug!("{}: start {start} is the goal", self.algorithm);
            return Ok(SearchOutcome::trivial(start));
        }

        debug!("{}: searching {start} -> {goal} on a {}x{} grid", self.algorithm, grid.height(), grid.width());

        let ctx = Context {
            grid,
            motion: self.motion,
            strategy: self.algorithm.strategy(),
            start,
            goal,
        };

        let outcome = match ctx.strategy {
            Strategy::BreadthFirst => self.run(Fifo::default(), &ctx),
            Strategy::DepthFirst => self.run(Lifo::default(), &ctx),
            Strategy::UniformCost | Strategy::AStar => self.run(Priority::default(), &ctx),
        };

        debug!(
            "{}: {} after {} expansions ({} unique, peak frontier {})",
            self.algorithm,
            match &outcome.path {
                Some(p) => format!("path of {} cells", p.len()),
                None => "no path".to_string(),
            },
            outcome.nodes_expanded(),
            outcome.unique_expanded(),
            outcome.peak_frontier,
        );

        Ok(outcome)
    }

    fn run<F: Frontier>(&self, frontier: F, ctx: &Context) -> SearchOutcome {
        match self.algorithm.discipline() {
            Discipline::Graph => graph::search(frontier, ctx),
            Discipline::Tree => tree::search(frontier, ctx, self.cycle_guard, self.max_depth),
        }
    }
}


/// One-shot traversal with the algorithm's default settings
pub fn traverse(algorithm: Algorithm, motion: MotionModel, grid: &Grid, start: Cell, goal: Cell) -> Result<SearchOutcome, SearchError> {
    Searcher::new(algorithm, motion).traverse(grid, start, goal)
}
