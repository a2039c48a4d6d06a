pub mod dijkstra;
pub mod connectivity;
pub mod threshold;
pub mod simple_paths;
mod shortest_path;

use shortest_path::shortest_path;

pub use dijkstra::shortest_route;
pub use connectivity::{components, is_connected};
pub use threshold::nodes_below_threshold;
pub use simple_paths::simple_paths;

use crate::collections::FxIndexMap;

/// Type alias for the node map used in path planning algorithms
/// N: Node - space on a graph
/// C: Cost of reaching the node from the start
/// The tuple contains (parent_index, cost) where:
/// - parent_index is the index of the parent node in the map
/// - cost is the total cost to reach this node from the start
pub type GraphNodeMap<N, C> = FxIndexMap<N, (usize, C)>;


/// A path through the graph and its total distance
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Route<C> {
    pub path: Vec<String>,
    pub distance: C,
}
