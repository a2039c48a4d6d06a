//! Route analyses over a small weighted graph of towns.
//!
//! The town table is built into an undirected [`graph::WeightedGraph`] and
//! queried four ways: shortest route, towns whose roads all stay under a
//! distance, connectivity, and every cycle-free route between two towns.
//!
//! ```
//! use town_routes::graph::towns;
//! use town_routes::graph_algos::{shortest_route, simple_paths};
//!
//! let graph = towns();
//! let route = shortest_route(&graph, "Madrid", "Getafe").unwrap();
//! assert_eq!(route.distance, 16);
//!
//! let paths = simple_paths(&graph, "Madrid", "Getafe").unwrap();
//! assert_eq!(paths.len(), 2);
//! ```

mod collections;
pub mod config;
pub mod errors;
pub mod graph;
pub mod graph_algos;
pub mod instrument;
pub mod report;

pub use errors::RouteError;
