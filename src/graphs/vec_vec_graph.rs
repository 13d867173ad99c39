use std::fmt;

use super::{Distance, Edge, Graph, TaillessEdge, Vertex, WeightedEdge};

/// Adjacency list graph. The out edges of every vertex are kept sorted by
/// head so single edges can be found by binary search.
#[derive(Clone, Default)]
pub struct VecVecGraph {
    edges: Vec<Vec<TaillessEdge>>,
}

impl VecVecGraph {
    /// Creates a graph with `number_of_vertices` vertices and no edges.
    pub fn with_vertices(number_of_vertices: u32) -> VecVecGraph {
        VecVecGraph {
            edges: vec![Vec::new(); number_of_vertices as usize],
        }
    }

    /// Builds a graph from an edge list. Parallel edges collapse to the
    /// cheapest one.
    pub fn from_edges(edges: &[WeightedEdge]) -> VecVecGraph {
        let mut graph = VecVecGraph::default();

        edges.iter().for_each(|edge| {
            let current_weight = graph
                .get_weight(&edge.remove_weight())
                .unwrap_or(Distance::INFINITY);
            if edge.weight < current_weight {
                graph.set_weight(&edge.remove_weight(), Some(edge.weight));
            }
        });

        graph
    }

    /// Connects, updates or (for `None`) disconnects `edge`. The vertex set
    /// grows to cover both endpoints.
    pub fn set_weight(&mut self, edge: &Edge, weight: Option<Distance>) {
        // Ensure the edge endpoints are within the bounds of self.edges.
        let max_edge_endpoint = std::cmp::max(edge.tail, edge.head) as usize;
        if max_edge_endpoint >= self.edges.len() {
            self.edges.resize(max_edge_endpoint + 1, Vec::new());
        }

        // Get a mutable reference to the vector of edges sharing the same tail.
        let edges_sharing_tail = &mut self.edges[edge.tail as usize];

        // Find the index of the edge in edges_sharing_tail with the same head.
        let edge_index = edges_sharing_tail.binary_search_by_key(&edge.head, |other| other.head);

        match (weight, edge_index) {
            // If a weight is provided, connect or update the edge.
            (Some(weight), Ok(index)) => edges_sharing_tail[index].weight = weight,
            (Some(weight), Err(index)) => edges_sharing_tail.insert(
                index,
                TaillessEdge {
                    head: edge.head,
                    weight,
                },
            ),
            // Without a weight, disconnect the edge if present.
            (None, Ok(index)) => {
                edges_sharing_tail.remove(index);
            }
            (None, Err(_)) => {}
        }
    }

    /// Appends an edge whose head is larger than every head already stored
    /// for `tail`. Used by generators that emit heads in ascending order.
    pub(crate) fn push_sorted_edge(&mut self, tail: Vertex, edge: TaillessEdge) {
        let edges_sharing_tail = &mut self.edges[tail as usize];
        debug_assert!(edges_sharing_tail
            .last()
            .map_or(true, |last| last.head < edge.head));
        edges_sharing_tail.push(edge);
    }
}

impl Graph for VecVecGraph {
    fn number_of_vertices(&self) -> u32 {
        self.edges.len() as u32
    }

    fn edges(&self, tail: Vertex) -> Box<dyn ExactSizeIterator<Item = WeightedEdge> + '_> {
        // Tail has to be carried along, the stored edges don't know it.
        struct EdgeIterator<'a> {
            edge_iter: std::slice::Iter<'a, TaillessEdge>,
            tail: Vertex,
        }

        impl<'a> Iterator for EdgeIterator<'a> {
            type Item = WeightedEdge;

            fn next(&mut self) -> Option<Self::Item> {
                self.edge_iter
                    .next()
                    .map(|tailless_edge| tailless_edge.set_tail(self.tail))
            }

            fn size_hint(&self) -> (usize, Option<usize>) {
                self.edge_iter.size_hint()
            }
        }

        impl<'a> ExactSizeIterator for EdgeIterator<'a> {
            fn len(&self) -> usize {
                self.edge_iter.len()
            }
        }

        Box::new(EdgeIterator {
            edge_iter: self.edges[tail as usize].iter(),
            tail,
        })
    }

    fn get_weight(&self, edge: &Edge) -> Option<Distance> {
        // Retrieve the vector of edges sharing the same tail, if it exists.
        let edges_sharing_tail = self.edges.get(edge.tail as usize)?;

        // Perform a binary search to find the index of the edge with the same head.
        let edge_index = edges_sharing_tail
            .binary_search_by_key(&edge.head, |tailless_edge| tailless_edge.head)
            .ok()?;

        // Return the weight of the found edge.
        Some(edges_sharing_tail[edge_index].weight)
    }
}

impl fmt::Display for VecVecGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (tail, edges_sharing_tail) in self.edges.iter().enumerate() {
            write!(f, "Vertex {}:", tail)?;
            for edge in edges_sharing_tail {
                write!(f, " ({}, {:.2})", edge.head, edge.weight)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
