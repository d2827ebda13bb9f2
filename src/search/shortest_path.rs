use crate::collections::FxIndexMap;

/// Parent sentinel for the root of a predecessor chain
pub(crate) const NO_PARENT: usize = usize::MAX;


/// Construct the path from the start node to the node at `goal_index`
/// node_map: finalized nodes with (parent_index, cost), the start node has parent NO_PARENT
/// Returns the ordered path as a vector of nodes from start to goal
pub(crate) fn shortest_path<N, C>(node_map: &FxIndexMap<N, (usize, C)>, goal_index: usize) -> Vec<N>
where
    N: Clone,
{
    let mut path = Vec::new();
    let mut current_index = goal_index;

    // Trace back from goal to start
    while let Some((node, &(parent_index, _))) = node_map.get_index(current_index) {
        path.push(node.clone());
        current_index = parent_index;
    }

    // The path is in reverse order, so reverse it
    path.reverse();
    path
}
