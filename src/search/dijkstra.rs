use crate::graphs::{Distance, Graph, Vertex, INFINITY};

use super::collections::{
    indexed_priority_queue::IndexedPriorityQueue,
    vertex_distance_queue::{VertexDistanceQueue, VertexDistanceQueueBinaryHeap},
};

#[derive(Clone, Debug, PartialEq)]
pub struct DijkstraResult {
    /// Shortest distance from the source for every vertex, `INFINITY` for
    /// unreachable ones.
    pub distances: Vec<Distance>,
    /// Number of strict distance improvements made during the search.
    pub decrease_key_count: u64,
}

/// Single source Dijkstra with a real decrease key.
///
/// The queue starts out with every vertex, the source at `0` and all others at
/// `INFINITY`. Edge weights must be non-negative.
pub fn dijkstra_eager(graph: &dyn Graph, source: Vertex) -> DijkstraResult {
    let number_of_vertices = graph.number_of_vertices();
    assert!(
        source < number_of_vertices,
        "source {} out of range for {} vertices",
        source,
        number_of_vertices
    );

    let mut distances = vec![INFINITY; number_of_vertices as usize];
    distances[source as usize] = 0.0;

    let mut queue = IndexedPriorityQueue::with_capacity(number_of_vertices as usize);
    for vertex in 0..number_of_vertices {
        queue
            .insert(vertex, distances[vertex as usize])
            .expect("every vertex is inserted exactly once");
    }

    while let Ok((tail, distance_tail)) = queue.delete_min() {
        // Everything left in the queue is unreachable.
        if distance_tail == INFINITY {
            break;
        }

        for edge in graph.edges(tail) {
            let alternative_distance_head = distance_tail + edge.weight;
            if alternative_distance_head < distances[edge.head as usize] {
                distances[edge.head as usize] = alternative_distance_head;
                // A settled head can't improve with non-negative weights, so
                // the head is still queued with a larger priority.
                queue
                    .decrease_key(edge.head, alternative_distance_head)
                    .expect("improved vertex is queued with a larger priority");
            }
        }
    }

    DijkstraResult {
        distances,
        decrease_key_count: queue.decrease_key_count(),
    }
}

/// Single source Dijkstra on a binary heap without decrease key.
///
/// Every improvement pushes a fresh entry instead. Only a strict improvement
/// pushes, so each vertex has exactly one entry carrying its final distance;
/// all others are larger, stale and skipped on pop. Every vertex is therefore
/// expanded once. The returned count is the number of decrease key
/// operations the pushes stand in for.
pub fn dijkstra_lazy(graph: &dyn Graph, source: Vertex) -> DijkstraResult {
    let number_of_vertices = graph.number_of_vertices();
    assert!(
        source < number_of_vertices,
        "source {} out of range for {} vertices",
        source,
        number_of_vertices
    );

    let mut distances = vec![INFINITY; number_of_vertices as usize];
    let mut queue = VertexDistanceQueueBinaryHeap::new();
    let mut decrease_key_count = 0;

    distances[source as usize] = 0.0;
    queue.insert(source, 0.0);

    while let Some((tail, distance_tail)) = queue.pop() {
        if distance_tail > distances[tail as usize] {
            continue;
        }

        for edge in graph.edges(tail) {
            let alternative_distance_head = distance_tail + edge.weight;
            if alternative_distance_head < distances[edge.head as usize] {
                distances[edge.head as usize] = alternative_distance_head;
                decrease_key_count += 1;
                queue.insert(edge.head, alternative_distance_head);
            }
        }
    }

    DijkstraResult {
        distances,
        decrease_key_count,
    }
}
