use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::{Error, Result};

/// A min-priority queue: `pop` always yields the item of lowest priority.
///
/// Items of equal priority come out in the order they were pushed.
///
/// # Examples
///
/// ```
/// use huffman_compressor::{Error, MinQueue};
///
/// let mut queue = MinQueue::new();
/// queue.push(3, "c");
/// queue.push(1, "a");
/// queue.push(1, "b");
///
/// assert_eq!(queue.pop(), Ok((1, "a")));
/// assert_eq!(queue.pop(), Ok((1, "b")));
/// assert_eq!(queue.pop(), Ok((3, "c")));
/// assert_eq!(queue.pop(), Err(Error::EmptyQueue));
/// ```
#[derive(Debug, Clone)]
pub struct MinQueue<T> {
    heap: BinaryHeap<Entry<T>>,
    pushed: u64,
}

#[derive(Debug, Clone)]
struct Entry<T> {
    priority: usize,
    sequence: u64,
    item: T,
}

impl<T> Ord for Entry<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap is a max-heap, so the comparison is flipped.
        (other.priority, other.sequence).cmp(&(self.priority, self.sequence))
    }
}

impl<T> PartialOrd for Entry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> PartialEq for Entry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T> Eq for Entry<T> {}

impl<T> MinQueue<T> {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        MinQueue {
            heap: BinaryHeap::with_capacity(capacity),
            pushed: 0,
        }
    }

    pub fn push(&mut self, priority: usize, item: T) {
        self.heap.push(Entry {
            priority,
            sequence: self.pushed,
            item,
        });
        self.pushed += 1;
    }

    /// Removes the item of lowest priority along with that priority.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyQueue`] when there is nothing left to pop.
    pub fn pop(&mut self) -> Result<(usize, T)> {
        self.heap
            .pop()
            .map(|e| (e.priority, e.item))
            .ok_or(Error::EmptyQueue)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

impl<T> Default for MinQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}
