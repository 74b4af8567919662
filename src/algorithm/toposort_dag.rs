use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;
use log::{debug, trace, warn};
use num_traits::Float;

use crate::algorithm::ShortestPathSolver;
use crate::graph::{Edge, Graph};
use crate::{Error, Result};

/// DFS state of a vertex
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    /// On the current DFS path, not all neighbors explored yet
    InProgress,
    /// Fully explored and recorded in the postorder
    Done,
}

/// Shortest paths on a directed acyclic graph by relaxing edges in topological order
///
/// A depth-first postorder from the start, reversed, gives a topological order of
/// every vertex reachable from it. A single forward sweep in that order relaxes
/// each vertex only after all of its predecessors are final, so no priority
/// queue is needed and any real edge weight is allowed. Runs in O(V + E).
///
/// Construction fails with [`Error::CycleDetected`] if a cycle is reachable from
/// the start.
#[derive(Debug, Clone)]
pub struct ToposortDAGSolver<V, W = f64>
where
    V: Eq + Hash,
{
    start: V,
    edge_to: HashMap<V, Edge<V, W>>,
    dist_to: HashMap<V, W>,
}

impl<V, W> ToposortDAGSolver<V, W>
where
    V: Eq + Hash + Clone + Debug,
    W: Float + Debug,
{
    /// Runs the toposort shortest-path algorithm on `graph` from `start`
    pub fn new<G: Graph<V, W>>(graph: &G, start: V) -> Result<Self> {
        let order = reverse_postorder(graph, &start)?;
        debug!(
            "Toposort from {:?}: {} reachable vertices",
            start,
            order.len()
        );

        let mut edge_to: HashMap<V, Edge<V, W>> = HashMap::new();
        let mut dist_to: HashMap<V, W> = HashMap::with_capacity(order.len());
        dist_to.insert(start.clone(), W::zero());

        let mut relaxations = 0usize;
        for from in &order {
            let distance = match dist_to.get(from) {
                Some(&distance) => distance,
                None => continue,
            };

            for edge in graph.neighbors(from) {
                let to = edge.to();
                let new_distance = distance + edge.weight();
                let current = dist_to.get(to).copied().unwrap_or_else(W::infinity);

                if new_distance < current {
                    trace!("Relax {:?} -> {:?}: {:?} < {:?}", from, to, new_distance, current);
                    dist_to.insert(to.clone(), new_distance);
                    edge_to.insert(to.clone(), edge.clone());
                    relaxations += 1;
                }
            }
        }
        debug!("Toposort from {:?}: {} relaxations", start, relaxations);

        Ok(ToposortDAGSolver {
            start,
            edge_to,
            dist_to,
        })
    }
}

impl<V, W> ShortestPathSolver<V, W> for ToposortDAGSolver<V, W>
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

/// Vertices reachable from `start` in reverse DFS postorder, beginning with `start`
///
/// Uses an explicit stack of neighbor iterators instead of recursion. A vertex is
/// emitted once all of its neighbors are done; meeting a vertex that is still in
/// progress means the graph has a cycle.
fn reverse_postorder<'g, V, W, G>(graph: &'g G, start: &V) -> Result<Vec<V>>
where
    V: Eq + Hash + Clone + Debug + 'g,
    W: Float + Debug + 'g,
    G: Graph<V, W>,
{
    let mut marks: HashMap<V, Mark> = HashMap::new();
    let mut postorder = Vec::new();
    let mut stack: Vec<(V, Box<dyn Iterator<Item = &'g Edge<V, W>> + 'g>)> = Vec::new();

    marks.insert(start.clone(), Mark::InProgress);
    stack.push((start.clone(), graph.neighbors(start)));

    while let Some((_, edges)) = stack.last_mut() {
        match edges.next() {
            Some(edge) => {
                let to = edge.to();
                match marks.get(to) {
                    Some(Mark::InProgress) => {
                        warn!("Cycle through {:?} reachable from {:?}", to, start);
                        return Err(Error::CycleDetected(format!("{:?}", to)));
                    }
                    Some(Mark::Done) => {}
                    None => {
                        marks.insert(to.clone(), Mark::InProgress);
                        stack.push((to.clone(), graph.neighbors(to)));
                    }
                }
            }
            None => {
                if let Some((vertex, _)) = stack.pop() {
                    marks.insert(vertex.clone(), Mark::Done);
                    postorder.push(vertex);
                }
            }
        }
    }

    postorder.reverse();
    Ok(postorder)
}
