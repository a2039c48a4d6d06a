use crate::collections::FxIndexSet;
use crate::errors::RouteError;
use crate::graph::WeightedGraph;

use std::fmt::Debug;
use tracing::debug;


/// Search state for one branch of the depth first search
/// Each branch owns its path, which doubles as its visited set
struct Frame<'a> {
    node: &'a str,
    path: FxIndexSet<&'a str>,
}


/// Every simple path (no repeated node) from `from` to `to`
/// Paths come back in depth first order, neighbors explored in graph order.
/// Returns an empty list when the nodes are not connected.
/// Runs in O(V!) in the worst case, the number of simple paths grows exponentially
pub fn simple_paths<C>(graph: &WeightedGraph<C>, from: &str, to: &str) -> Result<Vec<Vec<String>>, RouteError>
where
    C: Copy + PartialEq + Debug,
{
    graph.require(from)?;
    graph.require(to)?;

    let mut paths: Vec<Vec<String>> = Vec::new();

    let mut stack: Vec<Frame<'_>> = vec![Frame {
        node: from,
        path: FxIndexSet::from_iter([from]),
    }];

    while let Some(Frame { node, path }) = stack.pop() {

        // target reached - record and stop extending this branch
        if node == to {
            paths.push(path.iter().map(|n| n.to_string()).collect());
            continue;
        }

        // pushed in reverse so the first neighbor is explored first
        let branches: Vec<&str> = graph
            .neighbors(node)
            .map(|(neighbor, _)| neighbor)
            .filter(|neighbor| !path.contains(neighbor))
            .collect();

        for neighbor in branches.into_iter().rev() {
            let mut next = path.clone();
            next.insert(neighbor);
            stack.push(Frame {
                node: neighbor,
                path: next,
            });
        }
    }

    debug!(from, to, found = paths.len(), "simple path enumeration");
    Ok(paths)
}
