use thiserror::Error;

use crate::graphs::Vertex;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum QueueError {
    #[error("priority queue is empty")]
    Empty,
    #[error("vertex {0} is not in the priority queue")]
    NotFound(Vertex),
    #[error("vertex {0} is already in the priority queue")]
    AlreadyPresent(Vertex),
    #[error("new priority of vertex {0} is not smaller than its current priority")]
    InvalidDecrease(Vertex),
}

const NOT_IN_QUEUE: usize = usize::MAX;

/// Binary min-heap over `(vertex, priority)` pairs that supports
/// decrease-key by vertex.
///
/// Vertices are dense integers, `positions[vertex]` holds the heap slot of
/// `vertex` or `NOT_IN_QUEUE`. Every swap updates both arrays together.
#[derive(Clone, Debug)]
pub struct IndexedPriorityQueue<P> {
    heap: Vec<(Vertex, P)>,
    positions: Vec<usize>,
    decrease_key_count: u64,
}

impl<P: PartialOrd + Copy> Default for IndexedPriorityQueue<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: PartialOrd + Copy> IndexedPriorityQueue<P> {
    pub fn new() -> Self {
        IndexedPriorityQueue {
            heap: Vec::new(),
            positions: Vec::new(),
            decrease_key_count: 0,
        }
    }

    /// Reserves room for the vertices `0..number_of_vertices`.
    pub fn with_capacity(number_of_vertices: usize) -> Self {
        IndexedPriorityQueue {
            heap: Vec::with_capacity(number_of_vertices),
            positions: vec![NOT_IN_QUEUE; number_of_vertices],
            decrease_key_count: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn contains(&self, vertex: Vertex) -> bool {
        self.position(vertex).is_some()
    }

    /// Current priority of `vertex`, if it is in the queue.
    pub fn priority(&self, vertex: Vertex) -> Option<P> {
        self.position(vertex).map(|index| self.heap[index].1)
    }

    pub fn peek(&self) -> Option<(Vertex, P)> {
        self.heap.first().copied()
    }

    pub fn insert(&mut self, vertex: Vertex, priority: P) -> Result<(), QueueError> {
        if self.contains(vertex) {
            return Err(QueueError::AlreadyPresent(vertex));
        }
        if vertex as usize >= self.positions.len() {
            self.positions.resize(vertex as usize + 1, NOT_IN_QUEUE);
        }

        let index = self.heap.len();
        self.heap.push((vertex, priority));
        self.positions[vertex as usize] = index;
        self.sift_up(index);

        Ok(())
    }

    /// Removes and returns the entry with the smallest priority.
    pub fn delete_min(&mut self) -> Result<(Vertex, P), QueueError> {
        if self.heap.is_empty() {
            return Err(QueueError::Empty);
        }

        let min = self.heap.swap_remove(0);
        self.positions[min.0 as usize] = NOT_IN_QUEUE;

        if let Some(&(moved, _)) = self.heap.first() {
            self.positions[moved as usize] = 0;
            self.sift_down(0);
        }

        Ok(min)
    }

    /// Lowers the priority of `vertex` to `new_priority`.
    ///
    /// Fails unless `vertex` is queued and `new_priority` is strictly smaller
    /// than its current priority. Successful calls are counted.
    pub fn decrease_key(&mut self, vertex: Vertex, new_priority: P) -> Result<(), QueueError> {
        let index = self.position(vertex).ok_or(QueueError::NotFound(vertex))?;

        if !(new_priority < self.heap[index].1) {
            return Err(QueueError::InvalidDecrease(vertex));
        }

        self.heap[index].1 = new_priority;
        self.sift_up(index);
        self.decrease_key_count += 1;

        Ok(())
    }

    /// Number of successful `decrease_key` calls since creation or the last
    /// reset.
    pub fn decrease_key_count(&self) -> u64 {
        self.decrease_key_count
    }

    pub fn reset_decrease_key_count(&mut self) {
        self.decrease_key_count = 0;
    }

    /// Removes every entry. The decrease-key counter is kept.
    pub fn clear(&mut self) {
        for &(vertex, _) in &self.heap {
            self.positions[vertex as usize] = NOT_IN_QUEUE;
        }
        self.heap.clear();
    }

    /// Checks the heap order and that every position entry points at the
    /// slot holding its vertex.
    pub fn is_valid(&self) -> bool {
        let heap_order = (1..self.heap.len())
            .all(|index| !(self.heap[index].1 < self.heap[parent_index(index)].1));

        let positions_match = self
            .heap
            .iter()
            .enumerate()
            .all(|(index, &(vertex, _))| self.positions[vertex as usize] == index);

        let queued = self
            .positions
            .iter()
            .filter(|&&position| position != NOT_IN_QUEUE)
            .count();

        heap_order && positions_match && queued == self.heap.len()
    }

    fn position(&self, vertex: Vertex) -> Option<usize> {
        match self.positions.get(vertex as usize) {
            Some(&index) if index != NOT_IN_QUEUE => Some(index),
            _ => None,
        }
    }

    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = parent_index(index);
            if !(self.heap[index].1 < self.heap[parent].1) {
                break;
            }
            self.swap(index, parent);
            index = parent;
        }
    }

    fn sift_down(&mut self, mut index: usize) {
        loop {
            let left = 2 * index + 1;
            let right = left + 1;
            let mut smallest = index;

            if left < self.heap.len() && self.heap[left].1 < self.heap[smallest].1 {
                smallest = left;
            }
            if right < self.heap.len() && self.heap[right].1 < self.heap[smallest].1 {
                smallest = right;
            }
            if smallest == index {
                break;
            }

            self.swap(index, smallest);
            index = smallest;
        }
    }

    fn swap(&mut self, first: usize, second: usize) {
        self.heap.swap(first, second);
        self.positions[self.heap[first].0 as usize] = first;
        self.positions[self.heap[second].0 as usize] = second;
    }
}

fn parent_index(index: usize) -> usize {
    (index - 1) / 2
}
