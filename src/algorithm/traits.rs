use std::fmt::Debug;
use std::hash::Hash;
use num_traits::Float;

use crate::graph::Edge;

/// Trait for single-source shortest path solvers
///
/// A solver does all of its work when it is constructed from a graph and a start
/// vertex. Afterwards it only answers queries, and repeated queries return equal
/// results.
pub trait ShortestPathSolver<V, W>
where
    V: Eq + Hash + Clone + Debug,
    W: Float + Debug,
{
    /// The start vertex this solver was built from
    fn start(&self) -> &V;

    /// The last edge on the shortest known path to `vertex`
    ///
    /// `None` for the start vertex and for unreachable vertices.
    fn edge_to(&self, vertex: &V) -> Option<&Edge<V, W>>;

    /// The shortest distance from the start to `vertex`, if reachable
    fn distance_to(&self, vertex: &V) -> Option<W>;

    /// Returns true if `vertex` is reachable from the start
    fn has_path_to(&self, vertex: &V) -> bool {
        self.distance_to(vertex).is_some()
    }

    /// Get the shortest path from the start to `goal` as a sequence of vertices
    ///
    /// The path includes both endpoints. When `goal` is unreachable there is no
    /// edge to follow back and the result is just `[goal]`; use
    /// [`has_path_to`](Self::has_path_to) to tell that apart from a real path.
    fn solution(&self, goal: &V) -> Vec<V> {
        let mut path = vec![goal.clone()];
        let mut current = goal;

        while let Some(edge) = self.edge_to(current) {
            current = edge.from();
            path.push(current.clone());
        }

        path.reverse();
        path
    }
}
