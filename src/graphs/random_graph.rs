use rand::Rng;

use super::{vec_vec_graph::VecVecGraph, TaillessEdge};

/// Generates a complete directed graph on `number_of_vertices` vertices.
///
/// Every ordered pair `(tail, head)` with `tail != head` gets its own edge
/// with a weight drawn uniformly from `[0, 1)`, so `tail -> head` and
/// `head -> tail` are independent. Weights are drawn with `tail` as the outer
/// and `head` as the inner loop, a seeded `rng` therefore always yields the
/// same graph.
pub fn random_complete_graph<R: Rng + ?Sized>(
    number_of_vertices: u32,
    rng: &mut R,
) -> VecVecGraph {
    let mut graph = VecVecGraph::with_vertices(number_of_vertices);

    for tail in 0..number_of_vertices {
        for head in (0..number_of_vertices).filter(|&head| head != tail) {
            let weight = rng.gen_range(0.0..1.0);
            graph.push_sorted_edge(tail, TaillessEdge { head, weight });
        }
    }

    graph
}

/// Number of edges of a complete directed graph without self loops.
pub fn complete_graph_edges(number_of_vertices: u32) -> u32 {
    number_of_vertices * number_of_vertices.saturating_sub(1)
}
