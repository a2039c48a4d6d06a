use crate::graph::WeightedGraph;

use std::fmt::Debug;
use tracing::debug;


/// Nodes whose every edge weighs strictly less than threshold
/// Nodes come back in graph order. A node with no edges qualifies vacuously.
/// Runs in O(V + E)
pub fn nodes_below_threshold<C>(graph: &WeightedGraph<C>, threshold: C) -> Vec<String>
where
    C: Copy + PartialOrd + Debug,
{
    let nodes: Vec<String> = graph
        .nodes()
        .filter(|node| graph.neighbors(node).all(|(_, weight)| weight < threshold))
        .map(str::to_string)
        .collect();

    debug!(?threshold, matched = nodes.len(), "threshold filter");
    nodes
}
