use thiserror::Error;


#[derive(Debug, Error)]
pub enum RouteError {
    #[error("node not found: {0}")]
    NodeNotFound(String), // Node is not part of the graph

    #[error("no path found")]
    NoPathFound, // Unable to reach the goal from the start node

    #[error("graph has no nodes")]
    EmptyGraph, // Connectivity is undefined for an empty graph

    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),
}
