//! Min-cost priority queue with FIFO tie-breaking.
//!
//! `BinaryHeap` is a max-heap, and `f64` is not `Ord`; entries therefore
//! implement `Ord` by hand with `total_cmp` and reversed order.  Equal costs
//! pop in push order, which makes every search deterministic.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

struct Entry<T> {
    cost: f64,
    seq:  u64,
    item: T,
}

impl<T> PartialEq for Entry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T> Eq for Entry<T> {}

impl<T> PartialOrd for Entry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Entry<T> {
    // Reversed: the smallest (cost, seq) is the heap maximum.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

pub struct Frontier<T> {
    heap:     BinaryHeap<Entry<T>>,
    next_seq: u64,
}

impl<T> Frontier<T> {
    pub fn new() -> Self {
        Self { heap: BinaryHeap::new(), next_seq: 0 }
    }

    pub fn push(&mut self, cost: f64, item: T) {
        self.heap.push(Entry { cost, seq: self.next_seq, item });
        self.next_seq += 1;
    }

    /// Remove the cheapest entry; the earliest pushed wins among equals.
    pub fn pop(&mut self) -> Option<(f64, T)> {
        self.heap.pop().map(|e| (e.cost, e.item))
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

impl<T> Default for Frontier<T> {
    fn default() -> Self {
        Self::new()
    }
}
