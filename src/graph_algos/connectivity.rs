use crate::collections::FxIndexSet;
use crate::errors::RouteError;
use crate::graph::WeightedGraph;

use std::collections::VecDeque;
use std::fmt::Debug;
use tracing::debug;


/// Check every node is reachable from every other node
/// Breadth first search from the first node, connected if it reaches them all
/// Runs in O(V + E)
pub fn is_connected<C>(graph: &WeightedGraph<C>) -> Result<bool, RouteError>
where
    C: Copy + PartialEq + Debug,
{
    let start = graph.nodes().next().ok_or(RouteError::EmptyGraph)?;
    let reached = reachable(graph, start);

    debug!(reached = reached.len(), nodes = graph.node_count(), "connectivity check");
    Ok(reached.len() == graph.node_count())
}

/// Connected components, each listed in discovery order
/// Components are ordered by their first node in the graph
pub fn components<C>(graph: &WeightedGraph<C>) -> Vec<Vec<String>>
where
    C: Copy + PartialEq + Debug,
{
    let mut seen: FxIndexSet<&str> = FxIndexSet::default();
    let mut components: Vec<Vec<String>> = Vec::new();

    for node in graph.nodes() {
        if seen.contains(node) {
            continue;
        }
        let component = reachable(graph, node);
        seen.extend(component.iter().copied());
        components.push(component.into_iter().map(str::to_string).collect());
    }

    components
}


/// Nodes reachable from start (start included) in BFS order
fn reachable<'a, C>(graph: &'a WeightedGraph<C>, start: &'a str) -> FxIndexSet<&'a str>
where
    C: Copy + PartialEq + Debug,
{
    let mut visited: FxIndexSet<&str> = FxIndexSet::default();
    let mut queue: VecDeque<&str> = VecDeque::new();

    visited.insert(start);
    queue.push_back(start);

    while let Some(node) = queue.pop_front() {
        for (neighbor, _) in graph.neighbors(node) {
            if visited.insert(neighbor) {
                queue.push_back(neighbor);
            }
        }
    }

    visited
}
