pub mod graph;
pub mod cust_error;
pub mod domination;
pub mod solution;
pub mod exhaustive;
pub mod heuristics;
pub mod generation;
