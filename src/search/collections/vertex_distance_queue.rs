use std::{cmp::Ordering, collections::BinaryHeap};

use crate::graphs::{Distance, Vertex};

/// A priority queue that manages vertices and their distances, for graph
/// algorithms that repeatedly need the vertex with the smallest distance.
///
/// Implementations might or might not use a decrease key operation. Without
/// one, a vertex can be inserted several times and `pop` may return entries
/// whose distance is outdated.
pub trait VertexDistanceQueue {
    /// Inserts a vertex with its associated distance into the priority queue.
    fn insert(&mut self, vertex: Vertex, distance: Distance);

    /// Removes and returns the vertex with the smallest distance together
    /// with the distance it was inserted with, or none if the queue is empty.
    fn pop(&mut self) -> Option<(Vertex, Distance)>;

    fn is_empty(&self) -> bool;
}

#[derive(Copy, Clone, Debug)]
pub struct QueueElement {
    pub distance: Distance,
    pub vertex: Vertex,
}

// `BinaryHeap` is a max-heap, the ordering on distances is flipped so the
// smallest distance comes out first. Ties are broken by vertex to keep `Ord`
// and `PartialEq` consistent.
impl Ord for QueueElement {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .distance
            .total_cmp(&self.distance)
            .then_with(|| other.vertex.cmp(&self.vertex))
    }
}

impl PartialOrd for QueueElement {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for QueueElement {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for QueueElement {}

/// Priority queue without decrease key, backed by a binary heap.
#[derive(Clone, Default)]
pub struct VertexDistanceQueueBinaryHeap {
    heap: BinaryHeap<QueueElement>,
}

impl VertexDistanceQueueBinaryHeap {
    pub fn new() -> Self {
        VertexDistanceQueueBinaryHeap {
            heap: BinaryHeap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }
}

impl VertexDistanceQueue for VertexDistanceQueueBinaryHeap {
    fn insert(&mut self, vertex: Vertex, distance: Distance) {
        self.heap.push(QueueElement { distance, vertex });
    }

    fn pop(&mut self) -> Option<(Vertex, Distance)> {
        let QueueElement { distance, vertex } = self.heap.pop()?;

        Some((vertex, distance))
    }

    fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pops_smallest_distance_first() {
        let mut queue = VertexDistanceQueueBinaryHeap::new();
        queue.insert(0, 0.75);
        queue.insert(1, 0.25);
        queue.insert(2, 0.5);
        queue.insert(1, 0.1);

        assert_eq!(queue.len(), 4);
        assert_eq!(queue.pop(), Some((1, 0.1)));
        assert_eq!(queue.pop(), Some((1, 0.25)));
        assert_eq!(queue.pop(), Some((2, 0.5)));
        assert_eq!(queue.pop(), Some((0, 0.75)));
        assert_eq!(queue.pop(), None);
        assert!(queue.is_empty());
    }

    #[test]
    fn ties_broken_by_smaller_vertex() {
        let mut queue = VertexDistanceQueueBinaryHeap::new();
        queue.insert(3, 1.0);
        queue.insert(1, 1.0);
        queue.insert(2, 1.0);

        assert_eq!(queue.pop(), Some((1, 1.0)));
        assert_eq!(queue.pop(), Some((2, 1.0)));
        assert_eq!(queue.pop(), Some((3, 1.0)));
    }
}
