pub mod towns;

use crate::collections::FxIndexMap;
use crate::errors::RouteError;

use std::fmt::Debug;
use num_traits::Zero;
use tracing::warn;

pub use towns::towns;


/// Adjacency table used to seed a graph
/// Each entry lists a node followed by (neighbor, weight) pairs
pub type AdjacencyTable<'a, C> = [(&'a str, &'a [(&'a str, C)])];


/// Undirected weighted graph keyed by node name
/// Nodes and neighbors iterate in insertion order
#[derive(Clone, Debug, Default)]
pub struct WeightedGraph<C> {
    adjacency: FxIndexMap<String, FxIndexMap<String, C>>,
}

impl<C> WeightedGraph<C>
where
    C: Copy + PartialEq + Debug,
{

    pub fn new() -> Self {
        Self {
            adjacency: FxIndexMap::default(),
        }
    }

    /// Build a graph from an adjacency table
    /// An edge listed from both ends is stored once, the later weight wins
    pub fn from_table(table: &AdjacencyTable<'_, C>) -> Self {
        let mut graph = Self::new();
        for (node, connections) in table {
            for (neighbor, weight) in connections.iter() {
                graph.add_edge(node, neighbor, *weight);
            }
        }
        graph
    }

    /// Add a node without edges, no-op if it already exists
    pub fn add_node(&mut self, node: &str) {
        if !self.adjacency.contains_key(node) {
            self.adjacency.insert(node.to_string(), FxIndexMap::default());
        }
    }

    /// Add (or overwrite) the undirected edge a <-> b
    pub fn add_edge(&mut self, a: &str, b: &str, weight: C) {
        self.add_node(a);
        self.add_node(b);

        if let Some(previous) = self.weight(a, b) {
            if previous != weight {
                warn!(from = a, to = b, ?previous, ?weight, "edge listed twice with different weights");
            }
        }

        if let Some(edges) = self.adjacency.get_mut(a) {
            edges.insert(b.to_string(), weight);
        }
        if let Some(edges) = self.adjacency.get_mut(b) {
            edges.insert(a.to_string(), weight);
        }
    }

    /// Remove the edge a <-> b, returns its weight if it existed
    /// Uses shift_remove so remaining neighbors keep their order
    pub fn remove_edge(&mut self, a: &str, b: &str) -> Option<C> {
        let weight = self.adjacency.get_mut(a)?.shift_remove(b)?;
        if let Some(edges) = self.adjacency.get_mut(b) {
            edges.shift_remove(a);
        }
        Some(weight)
    }

    /// Drop every edge touching node, the node itself stays in the graph
    pub fn isolate(&mut self, node: &str) -> Result<(), RouteError> {
        let neighbors: Vec<String> = self
            .adjacency
            .get(node)
            .ok_or_else(|| RouteError::NodeNotFound(node.to_string()))?
            .keys()
            .cloned()
            .collect();

        for neighbor in neighbors {
            self.remove_edge(node, &neighbor);
        }
        Ok(())
    }

    pub fn contains(&self, node: &str) -> bool {
        self.adjacency.contains_key(node)
    }

    /// Ok if node exists, NodeNotFound otherwise
    pub fn require(&self, node: &str) -> Result<(), RouteError> {
        if self.contains(node) {
            Ok(())
        } else {
            Err(RouteError::NodeNotFound(node.to_string()))
        }
    }

    pub fn nodes(&self) -> impl Iterator<Item = &str> {
        self.adjacency.keys().map(String::as_str)
    }

    /// Neighbors of node with the edge weight, empty for unknown nodes
    pub fn neighbors<'a>(&'a self, node: &str) -> impl Iterator<Item = (&'a str, C)> + use<'a, C> {
        self.adjacency
            .get(node)
            .into_iter()
            .flat_map(|edges| edges.iter().map(|(n, w)| (n.as_str(), *w)))
    }

    pub fn weight(&self, a: &str, b: &str) -> Option<C> {
        self.adjacency.get(a)?.get(b).copied()
    }

    pub fn degree(&self, node: &str) -> usize {
        self.adjacency.get(node).map_or(0, |edges| edges.len())
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        let ends: usize = self.adjacency.values().map(|edges| edges.len()).sum();
        let self_loops = self
            .adjacency
            .iter()
            .filter(|(node, edges)| edges.contains_key(node.as_str()))
            .count();
        // a self loop is stored once, every other edge from both ends
        (ends - self_loops) / 2 + self_loops
    }

    /// Total weight of a walk, None if a hop is not an edge
    pub fn path_weight<S: AsRef<str>>(&self, path: &[S]) -> Option<C>
    where
        C: Zero,
    {
        path.windows(2).try_fold(C::zero(), |total, hop| {
            self.weight(hop[0].as_ref(), hop[1].as_ref()).map(|w| total + w)
        })
    }
}
