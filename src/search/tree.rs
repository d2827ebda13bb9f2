use crate::collections::{FxHashMap, FxIndexSet};
use crate::geometry::Cell;
use super::frontier::{Entry, Frontier};
use super::shortest_path::NO_PARENT;
use super::{Context, CycleGuard, SearchOutcome};


/// Node of the explicit search tree
/// Every frontier entry owns one node, so the same cell can appear on many branches.
#[derive(Debug)]
struct Node {
    cell: Cell,
    parent: usize,
    depth: usize,
}


/// Branches of the search tree, stored as parent links into one arena
#[derive(Default)]
struct SearchTree {
    nodes: Vec<Node>,
}

impl SearchTree {
    fn add(&mut self, cell: Cell, parent: usize, depth: usize) -> usize {
        self.nodes.push(Node { cell, parent, depth });
        self.nodes.len() - 1
    }

    fn depth(&self, index: usize) -> usize {
        self.nodes[index].depth
    }

    /// Cells from the root down to `index`
    fn ancestors(&self, index: usize) -> impl Iterator<Item = Cell> + '_ {
        std::iter::successors(self.nodes.get(index), |node| self.nodes.get(node.parent)).map(|node| node.cell)
    }

    /// The branch's own path-so-far, start first
    fn branch(&self, index: usize) -> Vec<Cell> {
        let mut path: Vec<Cell> = self.ancestors(index).collect();
        path.reverse();
        path
    }
}


/// Tree search: no closed set, cycles are cut by a local guard
///
/// Every popped entry is expanded, even if its cell was expanded before on
/// another branch. Entries at `max_depth` are expanded but not extended.
/// The returned path is the goal entry's own branch.
pub(crate) fn search<F: Frontier>(mut frontier: F, ctx: &Context, guard: CycleGuard, max_depth: Option<usize>) -> SearchOutcome {

    let mut tree = SearchTree::default();

    // Best depth / cost seen per cell, only the map matching the guard is used
    let mut best_depth: FxHashMap<Cell, usize> = FxHashMap::default();
    let mut best_cost: FxHashMap<Cell, f64> = FxHashMap::default();
    best_depth.insert(ctx.start, 0);
    best_cost.insert(ctx.start, 0.0);

    let mut expanded = FxIndexSet::default();
    let mut expansion_order = Vec::new();
    let mut peak_frontier = 1;

    let root = tree.add(ctx.start, NO_PARENT, 0);
    frontier.push(Entry {
        cell: ctx.start,
        cost: 0.0,
        priority: ctx.priority(0.0, &ctx.start),
        link: root,
    });

    while let Some(Entry { cell, cost, link, .. }) = frontier.pop() {

        expanded.insert(cell);
        expansion_order.push(cell);

        if cell == ctx.goal {
            return SearchOutcome {
                path: Some(tree.branch(link)),
                expanded,
                expansion_order,
                peak_frontier,
            };
        }

        let depth = tree.depth(link);
        if max_depth.is_some_and(|max| depth >= max) {
            continue;
        }

        for (neighbour, step_length) in ctx.motion.neighbours(ctx.grid, cell) {
            let next_depth = depth + 1;
            let new_cost = ctx.step(cost, step_length);

            let admit = match guard {
                CycleGuard::Ancestors => !tree.ancestors(link).any(|c| c == neighbour),
                CycleGuard::ShallowestDepth => match best_depth.get(&neighbour) {
                    Some(&known) if next_depth >= known => false,
                    _ => {
                        best_depth.insert(neighbour, next_depth);
                        true
                    }
                },
                CycleGuard::CheapestCost => match best_cost.get(&neighbour) {
                    Some(&known) if new_cost >= known => false,
                    _ => {
                        best_cost.insert(neighbour, new_cost);
                        true
                    }
                },
            };
            if !admit {
                continue;
            }

            let node = tree.add(neighbour, link, next_depth);
            frontier.push(Entry {
                cell: neighbour,
                cost: new_cost,
                priority: ctx.priority(new_cost, &neighbour),
                link: node,
            });
        }

        peak_frontier = peak_frontier.max(frontier.len());
    }

    SearchOutcome {
        path: None,
        expanded,
        expansion_order,
        peak_frontier,
    }
}



#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Grid;
    use crate::motion::MotionModel;
    use crate::search::{Algorithm, Searcher};

    fn cells(pairs: &[(i32, i32)]) -> Vec<Cell> {
        pairs.iter().map(|&p| Cell::from(p)).collect()
    }

    #[test]
    fn test_branch_walks_to_root() {
        let mut tree = SearchTree::default();
        let a = tree.add(Cell::new(0, 0), NO_PARENT, 0);
        let b = tree.add(Cell::new(0, 1), a, 1);
        let _ = tree.add(Cell::new(1, 0), a, 1);
        let d = tree.add(Cell::new(1, 1), b, 2);

        assert_eq!(tree.branch(d), cells(&[(0, 0), (0, 1), (1, 1)]));
        assert_eq!(tree.depth(d), 2);
        assert!(tree.ancestors(d).any(|c| c == Cell::new(0, 1)));
        assert!(!tree.ancestors(d).any(|c| c == Cell::new(1, 0)));
    }

    #[test]
    fn test_ucs_tree_goes_around_pillar() {
        // two equal-cost routes around the blocked centre
        let grid = Grid::from_rows(&[
            [0u8, 0, 0],
            [0, 1, 0],
            [0, 0, 0],
        ]).unwrap();
        let searcher = Searcher::ucs_tree(MotionModel::Orthogonal);
        let outcome = searcher.traverse(&grid, Cell::new(0, 0), Cell::new(2, 2)).unwrap();

        assert_eq!(outcome.path_len(), 5);
        assert_eq!(outcome.path_cost(&MotionModel::Orthogonal), Some(4.0));
        assert!(outcome.expansion_order.len() >= outcome.expanded.len());
    }

    #[test]
    fn test_dfs_tree_respects_depth_cap() {
        let grid = Grid::new(1, 6).unwrap();
        let capped = Searcher::dfs_tree(MotionModel::Orthogonal).with_max_depth(Some(3));
        let outcome = capped.traverse(&grid, Cell::new(0, 0), Cell::new(0, 5)).unwrap();

        // the goal is 5 moves away, beyond the cap
        assert_eq!(outcome.path, None);
        assert_eq!(outcome.expansion_order, cells(&[(0, 0), (0, 1), (0, 2), (0, 3)]));

        let deep = Searcher::dfs_tree(MotionModel::Orthogonal).with_max_depth(Some(5));
        let outcome = deep.traverse(&grid, Cell::new(0, 0), Cell::new(0, 5)).unwrap();
        assert_eq!(outcome.path_len(), 6);
    }

    #[test]
    fn test_dfs_tree_revisits_across_branches() {
        // 2x2 ring, goal unreachable: every simple path from the start is explored
        let grid = Grid::from_rows(&[
            [0u8, 0, 1],
            [0, 0, 1],
            [1, 1, 0],
        ]).unwrap();
        let outcome = Searcher::dfs_tree(MotionModel::Orthogonal)
            .traverse(&grid, Cell::new(0, 0), Cell::new(2, 2))
            .unwrap();

        assert_eq!(outcome.path, None);
        assert_eq!(outcome.unique_expanded(), 4);
        // two directions around the ring, each visiting 3 further cells, plus the start
        assert_eq!(outcome.nodes_expanded(), 7);
    }

    #[test]
    fn test_bfs_tree_depth_guard() {
        let grid = Grid::new(3, 3).unwrap();
        let outcome = Searcher::bfs_tree(MotionModel::Orthogonal)
            .traverse(&grid, Cell::new(0, 0), Cell::new(2, 2))
            .unwrap();

        assert_eq!(outcome.path, Some(cells(&[(0, 0), (0, 1), (0, 2), (1, 2), (2, 2)])));
        assert_eq!(outcome.expansion_order.len(), outcome.expanded.len());

        // the cap stops BFS before it reaches depth 4
        let capped = Searcher::bfs_tree(MotionModel::Orthogonal).with_max_depth(Some(2));
        let outcome = capped.traverse(&grid, Cell::new(0, 0), Cell::new(2, 2)).unwrap();
        assert_eq!(outcome.path, None);
        assert_eq!(outcome.unique_expanded(), 6);
    }

    #[test]
    fn test_guard_override_changes_exploration() {
        let grid = Grid::from_rows(&[
            [0u8, 0, 1],
            [0, 0, 1],
            [1, 1, 0],
        ]).unwrap();
        let by_depth = Searcher::new(Algorithm::DfsTree, MotionModel::Orthogonal)
            .with_cycle_guard(CycleGuard::ShallowestDepth)
            .traverse(&grid, Cell::new(0, 0), Cell::new(2, 2))
            .unwrap();

        // each cell is entered once at its shallowest depth
        assert_eq!(by_depth.nodes_expanded(), 4);
        assert_eq!(by_depth.unique_expanded(), 4);
    }
}
