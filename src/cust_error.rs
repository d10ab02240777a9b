//! This module contains all custom errors used in this library.

use thiserror::Error;

/// Violations of the graph contract, raised when a graph or a vertex subset is built or checked.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum GraphError {
    #[error("Graph: vertex {vertex} does not exist in a graph with {num_nodes} vertices")]
    InvalidVertex { vertex: usize, num_nodes: usize },
    #[error("Graph: vertex {0} occurs more than once")]
    DuplicateVertex(usize),
    #[error("Graph: vertex {vertex} has negative weight {weight}")]
    NegativeWeight { vertex: usize, weight: i64 },
    #[error("Graph: self loop at vertex {0}")]
    SelfLoop(usize),
}

#[derive(Error, Debug)]
pub enum ImportError {
    #[error("Import: IoError")]
    IoError(#[from] std::io::Error),
    #[error("Import: Input is malformed.")]
    InputMalformedError,
    #[error("Import: Integer is malformed.")]
    BadIntError(#[from] std::num::ParseIntError),
    #[error("Import: {0}")]
    Graph(#[from] GraphError),
}

#[derive(Error, Debug)]
pub enum ProcessingError {
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
    #[error("InvalidSolution: {0}")]
    InvalidSolution(String),
    /// The exhaustive search was refused because `2^num_nodes` configurations exceed the cutoff.
    #[error("Graph too large: {num_nodes} vertices, at most {max_nodes} allowed")]
    TooLarge { num_nodes: usize, max_nodes: usize },
    #[error(transparent)]
    Graph(#[from] GraphError),
}
