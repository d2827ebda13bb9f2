use std::{
    collections::{BinaryHeap, VecDeque},
    cmp::Ordering,
};

use crate::geometry::Cell;


/// Frontier entry
/// `link` points at the parent's index in the closed map (graph search)
/// or at the entry's own node in the search tree (tree search)
#[derive(Clone, Copy, Debug)]
pub(crate) struct Entry {
    pub cell: Cell,
    pub cost: f64, // accumulated cost, or depth for the unweighted strategies
    pub priority: f64, // ordering key for the priority frontier
    pub link: usize,
}


/// Ordering of discovered-but-not-expanded cells
pub(crate) trait Frontier {
    fn push(&mut self, entry: Entry);
    fn pop(&mut self) -> Option<Entry>;
    fn len(&self) -> usize;
}


/// First in, first out - breadth-first
#[derive(Default)]
pub(crate) struct Fifo(VecDeque<Entry>);

impl Frontier for Fifo {
    fn push(&mut self, entry: Entry) {
        self.0.push_back(entry);
    }

    fn pop(&mut self) -> Option<Entry> {
        self.0.pop_front()
    }

    fn len(&self) -> usize {
        self.0.len()
    }
}


/// Last in, first out - depth-first
#[derive(Default)]
pub(crate) struct Lifo(Vec<Entry>);

impl Frontier for Lifo {
    fn push(&mut self, entry: Entry) {
        self.0.push(entry);
    }

    fn pop(&mut self) -> Option<Entry> {
        self.0.pop()
    }

    fn len(&self) -> usize {
        self.0.len()
    }
}


/// Min-priority queue on top of the max-heap BinaryHeap
/// Stale entries are left in place and skipped by the caller (lazy deletion)
#[derive(Default)]
pub(crate) struct Priority {
    heap: BinaryHeap<Ranked>,
    pushed: u64,
}

impl Frontier for Priority {
    fn push(&mut self, entry: Entry) {
        self.heap.push(Ranked { entry, seq: self.pushed });
        self.pushed += 1;
    }

    fn pop(&mut self) -> Option<Entry> {
        self.heap.pop().map(|r| r.entry)
    }

    fn len(&self) -> usize {
        self.heap.len()
    }
}


/// Heap wrapper
/// Ascending by priority, then accumulated cost, then cell, then insertion order
#[derive(Debug)]
struct Ranked {
    entry: Entry,
    seq: u64,
}

impl Ord for Ranked {
    fn cmp(&self, other: &Self) -> Ordering {
        // reversed so the smallest key sits on top of the heap
        other.entry.priority.total_cmp(&self.entry.priority)
            .then_with(|| other.entry.cost.total_cmp(&self.entry.cost))
            .then_with(|| other.entry.cell.cmp(&self.entry.cell))
            .then_with(|| other.seq.cmp(&self.seq))
    }
}
impl PartialOrd for Ranked {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl PartialEq for Ranked {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}
impl Eq for Ranked {}



#[cfg(test)]
mod tests {
    use super::*;

    fn entry(row: i32, col: i32, cost: f64, priority: f64) -> Entry {
        Entry { cell: Cell::new(row, col), cost, priority, link: usize::MAX }
    }

    fn drain<F: Frontier>(mut frontier: F) -> Vec<Cell> {
        let mut cells = Vec::new();
        while let Some(e) = frontier.pop() {
            cells.push(e.cell);
        }
        cells
    }

    #[test]
    fn test_fifo_and_lifo_order() {
        let mut fifo = Fifo::default();
        let mut lifo = Lifo::default();
        for i in 0..3 {
            fifo.push(entry(i, 0, 0.0, 0.0));
            lifo.push(entry(i, 0, 0.0, 0.0));
        }
        assert_eq!(fifo.len(), 3);
        assert_eq!(drain(fifo), vec![Cell::new(0, 0), Cell::new(1, 0), Cell::new(2, 0)]);
        assert_eq!(drain(lifo), vec![Cell::new(2, 0), Cell::new(1, 0), Cell::new(0, 0)]);
    }

    #[test]
    fn test_priority_pops_smallest_first() {
        let mut queue = Priority::default();
        queue.push(entry(0, 0, 0.0, 5.0));
        queue.push(entry(1, 0, 0.0, 1.5));
        queue.push(entry(2, 0, 0.0, 3.0));
        assert_eq!(drain(queue), vec![Cell::new(1, 0), Cell::new(2, 0), Cell::new(0, 0)]);
    }

    #[test]
    fn test_priority_tie_breaks() {
        let mut queue = Priority::default();
        // equal priority: lower accumulated cost first, then row-major cell order
        queue.push(entry(3, 3, 2.0, 4.0));
        queue.push(entry(2, 2, 1.0, 4.0));
        queue.push(entry(0, 5, 1.0, 4.0));
        queue.push(entry(0, 4, 1.0, 4.0));
        assert_eq!(drain(queue), vec![Cell::new(0, 4), Cell::new(0, 5), Cell::new(2, 2), Cell::new(3, 3)]);
    }

    #[test]
    fn test_priority_identical_keys_keep_insertion_order() {
        let mut queue = Priority::default();
        let mut first = entry(1, 1, 1.0, 1.0);
        first.link = 7;
        let mut second = entry(1, 1, 1.0, 1.0);
        second.link = 9;
        queue.push(first);
        queue.push(second);
        assert_eq!(queue.pop().map(|e| e.link), Some(7));
        assert_eq!(queue.pop().map(|e| e.link), Some(9));
        assert!(queue.pop().is_none());
    }
}
