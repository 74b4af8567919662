use crate::graph::{DirectedGraph, MutableGraph};
use rand::prelude::*;
use std::ops::Range;

/// Generates a random directed acyclic graph on vertices `0..n`
///
/// Each pair `i < j` gets an edge `i -> j` with probability `edge_probability`,
/// weighted uniformly from `weight_range`. Edges only point to higher ids, so
/// the graph is acyclic and `0..n` is a topological order.
pub fn generate_random_dag<R: Rng + ?Sized>(
    n: usize,
    edge_probability: f64,
    weight_range: Range<f64>,
    rng: &mut R,
) -> DirectedGraph<usize, f64> {
    assert!(
        (0.0..=1.0).contains(&edge_probability),
        "edge_probability must be within [0, 1]"
    );

    let mut graph = DirectedGraph::with_capacity(n);
    for v in 0..n {
        graph.add_vertex(v);
    }

    for i in 0..n {
        for j in (i + 1)..n {
            if rng.gen_bool(edge_probability) {
                let weight = rng.gen_range(weight_range.clone());
                graph.add_edge(i, j, weight);
            }
        }
    }

    graph
}

/// Generates a `width` x `height` grid where every cell points right and down
/// with unit weight. Vertex ids are `y * width + x`.
pub fn generate_grid_dag(width: usize, height: usize) -> DirectedGraph<usize, f64> {
    let mut graph = DirectedGraph::with_capacity(width * height);

    for y in 0..height {
        for x in 0..width {
            let vertex = y * width + x;
            graph.add_vertex(vertex);

            if x + 1 < width {
                graph.add_edge(vertex, vertex + 1, 1.0);
            }
            if y + 1 < height {
                graph.add_edge(vertex, vertex + width, 1.0);
            }
        }
    }

    graph
}
