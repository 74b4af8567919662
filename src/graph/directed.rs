use crate::graph::traits::{Graph, MutableGraph};
use crate::graph::Edge;
use num_traits::Float;
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

/// A directed graph implementation using adjacency lists
///
/// Vertices are iterated in insertion order and each adjacency list keeps its
/// edges in insertion order. Parallel edges are allowed.
#[derive(Debug, Clone)]
pub struct DirectedGraph<V, W>
where
    V: Eq + Hash,
{
    /// Vertices in insertion order
    vertices: Vec<V>,

    /// Outgoing edges for each vertex
    outgoing_edges: HashMap<V, Vec<Edge<V, W>>>,
}

impl<V, W> DirectedGraph<V, W>
where
    V: Eq + Hash + Clone + Debug,
    W: Float + Debug,
{
    /// Creates a new empty directed graph
    pub fn new() -> Self {
        DirectedGraph {
            vertices: Vec::new(),
            outgoing_edges: HashMap::new(),
        }
    }

    /// Creates a new empty directed graph with room for `vertices` vertices
    pub fn with_capacity(vertices: usize) -> Self {
        DirectedGraph {
            vertices: Vec::with_capacity(vertices),
            outgoing_edges: HashMap::with_capacity(vertices),
        }
    }

    /// Builds a graph from `(from, to, weight)` triples
    pub fn from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = (V, V, W)>,
    {
        let mut graph = DirectedGraph::new();
        for (from, to, weight) in edges {
            graph.add_edge(from, to, weight);
        }
        graph
    }

    /// Validate that the graph doesn't have negative weights
    pub fn validate_non_negative(&self) -> bool {
        self.outgoing_edges
            .values()
            .flatten()
            .all(|edge| edge.weight() >= W::zero())
    }
}

impl<V, W> Default for DirectedGraph<V, W>
where
    V: Eq + Hash + Clone + Debug,
    W: Float + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<V, W> Graph<V, W> for DirectedGraph<V, W>
where
    V: Eq + Hash + Clone + Debug,
    W: Float + Debug,
{
    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    fn edge_count(&self) -> usize {
        self.outgoing_edges.values().map(|edges| edges.len()).sum()
    }

    fn vertices(&self) -> Box<dyn Iterator<Item = &V> + '_> {
        Box::new(self.vertices.iter())
    }

    fn neighbors(&self, vertex: &V) -> Box<dyn Iterator<Item = &Edge<V, W>> + '_> {
        if let Some(edges) = self.outgoing_edges.get(vertex) {
            Box::new(edges.iter())
        } else {
            Box::new(std::iter::empty())
        }
    }

    fn has_vertex(&self, vertex: &V) -> bool {
        self.outgoing_edges.contains_key(vertex)
    }
}

impl<V, W> MutableGraph<V, W> for DirectedGraph<V, W>
where
    V: Eq + Hash + Clone + Debug,
    W: Float + Debug,
{
    fn add_vertex(&mut self, vertex: V) -> bool {
        if self.has_vertex(&vertex) {
            return false;
        }
        self.outgoing_edges.insert(vertex.clone(), Vec::new());
        self.vertices.push(vertex);
        true
    }

    fn add_edge(&mut self, from: V, to: V, weight: W) {
        self.add_vertex(from.clone());
        self.add_vertex(to.clone());

        self.outgoing_edges
            .entry(from.clone())
            .or_default()
            .push(Edge::new(from, to, weight));
    }

    fn remove_edge(&mut self, from: &V, to: &V) -> bool {
        match self.outgoing_edges.get_mut(from) {
            Some(outgoing) => {
                let len_before = outgoing.len();
                outgoing.retain(|edge| edge.to() != to);
                len_before > outgoing.len()
            }
            None => false,
        }
    }
}
