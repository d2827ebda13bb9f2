use log::trace;

use crate::collections::{FxHashMap, FxIndexMap, FxIndexSet};
use crate::geometry::Cell;
use super::frontier::{Entry, Frontier};
use super::shortest_path::{shortest_path, NO_PARENT};
use super::{Context, SearchOutcome, Strategy};


/// Graph search: every cell is finalized at most once
///
/// The closed map doubles as the predecessor map: each finalized cell stores
/// (parent_index, cost) where parent_index is the index of its parent in the
/// same map, NO_PARENT for the start.
///
/// Neighbour admission depends on the strategy:
/// - BFS, UCS, A*: only when strictly cheaper than the best cost recorded so far.
///   With a FIFO frontier the first discovery is never beaten, so this is
///   "mark seen on enqueue".
/// - DFS: whenever the neighbour is not closed yet, duplicates on the stack are
///   skipped when popped.
pub(crate) fn search<F: Frontier>(mut frontier: F, ctx: &Context) -> SearchOutcome {

    // Finalized cells - cost is known, no longer need to visit
    let mut closed: FxIndexMap<Cell, (usize, f64)> = FxIndexMap::default();

    // Best known cost for every discovered cell
    let mut best: FxHashMap<Cell, f64> = FxHashMap::default();
    best.insert(ctx.start, 0.0);

    let mut expansion_order = Vec::new();
    let mut peak_frontier = 1;

    frontier.push(Entry {
        cell: ctx.start,
        cost: 0.0,
        priority: ctx.priority(0.0, &ctx.start),
        link: NO_PARENT,
    });

    let mut goal_index = None;

    while let Some(Entry { cell, cost, link, .. }) = frontier.pop() {

        // Already finalized through a better or earlier entry
        if closed.contains_key(&cell) {
            trace!("skipping stale entry for {cell}");
            continue;
        }

        let index = closed.insert_full(cell, (link, cost)).0;
        expansion_order.push(cell);

        // Done the instant the goal leaves the frontier
        if cell == ctx.goal {
            goal_index = Some(index);
            break;
        }

        for (neighbour, step_length) in ctx.motion.neighbours(ctx.grid, cell) {
            if closed.contains_key(&neighbour) {
                continue;
            }

            let new_cost = ctx.step(cost, step_length);

            if ctx.strategy != Strategy::DepthFirst {
                match best.get(&neighbour) {
                    Some(&known) if new_cost >= known => continue,
                    _ => {
                        best.insert(neighbour, new_cost);
                    }
                }
            }

            frontier.push(Entry {
                cell: neighbour,
                cost: new_cost,
                priority: ctx.priority(new_cost, &neighbour),
                link: index,
            });
        }

        peak_frontier = peak_frontier.max(frontier.len());
    }

    let path = goal_index.map(|i| shortest_path(&closed, i));
    let expanded: FxIndexSet<Cell> = closed.keys().copied().collect();

    SearchOutcome {
        path,
        expanded,
        expansion_order,
        peak_frontier,
    }
}
