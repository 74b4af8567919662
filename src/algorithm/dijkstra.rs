use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;
use log::{debug, trace, warn};
use num_traits::Float;

use crate::algorithm::ShortestPathSolver;
use crate::data_structures::{ExtrinsicMinPQ, OptimizedHeapMinPQ, UnsortedArrayMinPQ};
use crate::graph::{Edge, Graph};
use crate::{Error, Result};

/// Priority queue backend used to drive a [`DijkstraSolver`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QueueBackend {
    /// Linear scans, O(V) per extraction
    UnsortedArray,
    /// Indexed binary heap, O(log V) per extraction and decrease-key
    #[default]
    OptimizedHeap,
}

/// Classic Dijkstra's algorithm over an [`ExtrinsicMinPQ`]
///
/// Vertices are settled in order of distance, and a shorter path to a queued
/// vertex lowers its priority in place. All reachable edge weights must be
/// non-negative; a negative one aborts construction with [`Error::NegativeWeight`].
#[derive(Debug, Clone)]
pub struct DijkstraSolver<V, W = f64>
where
    V: Eq + Hash,
{
    start: V,
    edge_to: HashMap<V, Edge<V, W>>,
    dist_to: HashMap<V, W>,
}

impl<V, W> DijkstraSolver<V, W>
where
    V: Eq + Hash + Clone + Debug,
    W: Float + Debug,
{
    /// Runs Dijkstra's algorithm on `graph` from `start` with the default backend
    pub fn new<G: Graph<V, W>>(graph: &G, start: V) -> Result<Self> {
        Self::with_backend(graph, start, QueueBackend::default())
    }

    /// Runs Dijkstra's algorithm with the selected queue backend
    pub fn with_backend<G: Graph<V, W>>(graph: &G, start: V, backend: QueueBackend) -> Result<Self> {
        let capacity = graph.vertex_count();
        match backend {
            QueueBackend::UnsortedArray => {
                Self::with_queue(graph, start, UnsortedArrayMinPQ::with_capacity(capacity))
            }
            QueueBackend::OptimizedHeap => {
                Self::with_queue(graph, start, OptimizedHeapMinPQ::with_capacity(capacity))
            }
        }
    }

    /// Runs Dijkstra's algorithm using `queue` as the frontier
    ///
    /// The queue is expected to be empty.
    pub fn with_queue<G, Q>(graph: &G, start: V, mut queue: Q) -> Result<Self>
    where
        G: Graph<V, W>,
        Q: ExtrinsicMinPQ<V, W>,
    {
        let mut edge_to: HashMap<V, Edge<V, W>> = HashMap::new();
        let mut dist_to: HashMap<V, W> = HashMap::new();

        dist_to.insert(start.clone(), W::zero());
        queue.add(start.clone(), W::zero())?;

        let mut settled = 0usize;
        while !queue.is_empty() {
            let from = queue.remove_min()?;
            let distance = match dist_to.get(&from) {
                Some(&distance) => distance,
                None => continue,
            };
            settled += 1;

            for edge in graph.neighbors(&from) {
                let weight = edge.weight();
                if weight < W::zero() {
                    warn!("Negative edge {:?} -> {:?} reached from {:?}", from, edge.to(), start);
                    return Err(Error::NegativeWeight(weight.to_f64().unwrap_or(f64::NAN)));
                }

                let to = edge.to();
                let new_distance = distance + weight;
                let current = dist_to.get(to).copied().unwrap_or_else(W::infinity);

                if new_distance < current {
                    trace!("Relax {:?} -> {:?}: {:?} < {:?}", from, to, new_distance, current);
                    dist_to.insert(to.clone(), new_distance);
                    edge_to.insert(to.clone(), edge.clone());

                    if queue.contains(to) {
                        queue.change_priority(to, new_distance)?;
                    } else {
                        queue.add(to.clone(), new_distance)?;
                    }
                }
            }
        }
        debug!("Dijkstra from {:?}: settled {} vertices", start, settled);

        Ok(DijkstraSolver {
            start,
            edge_to,
            dist_to,
        })
    }
}

impl<V, W> ShortestPathSolver<V, W> for DijkstraSolver<V, W>
where
    V: Eq + Hash + Clone + Debug,
    W: Float + Debug,
{
    fn start(&self) -> &V {
        &self.start
    }

    fn edge_to(&self, vertex: &V) -> Option<&Edge<V, W>> {
        self.edge_to.get(vertex)
    }

    fn distance_to(&self, vertex: &V) -> Option<W> {
        self.dist_to.get(vertex).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::DirectedGraph;

    #[test]
    fn test_cycles_are_fine() {
        let graph = DirectedGraph::from_edges([
            (0, 1, 1.0),
            (1, 2, 1.0),
            (2, 0, 1.0),
            (1, 0, 0.0),
            (2, 3, 5.0),
        ]);
        let solver = DijkstraSolver::new(&graph, 0).unwrap();
        assert_eq!(solver.distance_to(&3), Some(7.0));
        assert_eq!(solver.solution(&3), vec![0, 1, 2, 3]);
        assert_eq!(solver.solution(&0), vec![0]);
    }

    #[test]
    fn test_decrease_key_path() {
        // 2 is queued at 10 first, then lowered to 3 through 1
        let graph = DirectedGraph::from_edges([(0, 2, 10.0), (0, 1, 1.0), (1, 2, 2.0), (2, 3, 1.0)]);
        for backend in [QueueBackend::UnsortedArray, QueueBackend::OptimizedHeap] {
            let solver = DijkstraSolver::with_backend(&graph, 0, backend).unwrap();
            assert_eq!(solver.distance_to(&2), Some(3.0));
            assert_eq!(solver.solution(&3), vec![0, 1, 2, 3]);
        }
    }

    #[test]
    fn test_negative_weight_is_rejected() {
        let graph = DirectedGraph::from_edges([("a", "b", 1.0), ("b", "c", -2.0)]);
        assert_eq!(
            DijkstraSolver::new(&graph, "a").unwrap_err(),
            Error::NegativeWeight(-2.0)
        );
        // Unreachable negative edges are never looked at
        assert!(DijkstraSolver::new(&graph, "c").is_ok());
    }

    #[test]
    fn test_f32_weights() {
        let graph: DirectedGraph<char, f32> = DirectedGraph::from_edges([('x', 'y', 0.5), ('y', 'z', 0.25)]);
        let solver = DijkstraSolver::new(&graph, 'x').unwrap();
        assert_eq!(solver.distance_to(&'z'), Some(0.75f32));
    }
}
