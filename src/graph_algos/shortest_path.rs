use crate::errors::RouteError;
use super::GraphNodeMap;

/// Construct the shortest path from the goal node to the start node
/// Returns the ordered path as a vector of nodes from start to goal
/// node_map: GraphNodeMap<N, C> - map of nodes with their parent index and cost
/// goal_index: usize - index of the goal node in the node_map
pub(crate) fn shortest_path<N, C>(node_map: &GraphNodeMap<N, C>, goal_index: usize) -> Result<Vec<N>, RouteError>
where
    N: Clone,
{

    let mut path = Vec::new();
    let mut current_index = goal_index;

    // Trace back from goal to start
    while current_index != usize::MAX {
        match node_map.get_index(current_index) {
            Some((node, &(parent_index, _))) => {
                path.push(node.clone());
                current_index = parent_index;
            }
            None => return Err(RouteError::NoPathFound),
        }
        // a parent chain longer than the map means it loops
        if path.len() > node_map.len() {
            return Err(RouteError::NoPathFound);
        }
    }

    if path.is_empty() {
        return Err(RouteError::NoPathFound);
    }

    path.reverse();
    Ok(path)
}
