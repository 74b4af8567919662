//! Extrinsic Paths - indexed min-priority queues and shortest-path solvers
//!
//! This library provides an extrinsic minimum-priority queue abstraction, where
//! priorities are supplied by the caller alongside each item, with two
//! interchangeable backends:
//! - [`UnsortedArrayMinPQ`]: linear scans, used as a reference oracle
//! - [`OptimizedHeapMinPQ`]: binary heap plus an item-to-slot index, O(log n) updates
//!
//! On top of it sit shortest-path solvers over weighted directed graphs. The
//! [`ToposortDAGSolver`] relaxes edges in topological order and needs no queue
//! at all; the [`DijkstraSolver`] is driven by any [`ExtrinsicMinPQ`] backend.

pub mod algorithm;
pub mod data_structures;
pub mod graph;

pub use algorithm::{
    dijkstra::{DijkstraSolver, QueueBackend},
    toposort_dag::ToposortDAGSolver,
    ShortestPathSolver,
};
pub use data_structures::{ExtrinsicMinPQ, OptimizedHeapMinPQ, PriorityNode, UnsortedArrayMinPQ};
/// Re-export main types for convenient use
pub use graph::{DirectedGraph, Edge, Graph, MutableGraph};

/// Error types for the library
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Priority queue already contains {0}")]
    DuplicateItem(String),

    #[error("Priority queue is empty")]
    EmptyQueue,

    #[error("Priority queue does not contain {0}")]
    ItemNotFound(String),

    #[error("Cycle detected through vertex {0}")]
    CycleDetected(String),

    #[error("Negative edge weight: {0}")]
    NegativeWeight(f64),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
