use std::fmt::Debug;
use std::hash::Hash;
use num_traits::Float;

use crate::graph::Edge;

/// Trait representing a weighted directed graph
pub trait Graph<V, W>: Debug
where
    V: Eq + Hash + Clone + Debug,
    W: Float + Debug,
{
    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns an iterator over all vertices
    fn vertices(&self) -> Box<dyn Iterator<Item = &V> + '_>;

    /// Returns an iterator over the outgoing edges from a vertex
    ///
    /// Unknown vertices have no outgoing edges. The order is stable between calls.
    fn neighbors(&self, vertex: &V) -> Box<dyn Iterator<Item = &Edge<V, W>> + '_>;

    /// Returns true if the vertex exists in the graph
    fn has_vertex(&self, vertex: &V) -> bool;
}

/// Trait for mutable graph operations
pub trait MutableGraph<V, W>: Graph<V, W>
where
    V: Eq + Hash + Clone + Debug,
    W: Float + Debug,
{
    /// Adds a vertex, returning false if it was already present
    fn add_vertex(&mut self, vertex: V) -> bool;

    /// Adds a directed edge, adding missing endpoints first
    fn add_edge(&mut self, from: V, to: V, weight: W);

    /// Removes every edge `from -> to`, returning true if any existed
    fn remove_edge(&mut self, from: &V, to: &V) -> bool;
}
