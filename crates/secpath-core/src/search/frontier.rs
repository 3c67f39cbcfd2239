use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, VecDeque};

use crate::search::labels::{Distance, Rank, UNREACHED};
use crate::search::stats::EngineCounters;

/// A queued candidate value for one label of one node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrontierEntry {
    pub distance: Distance,
    pub slot: usize,
    pub rank: Rank,
}

impl FrontierEntry {
    pub fn new(distance: Distance, slot: usize, rank: Rank) -> Self {
        Self {
            distance,
            slot,
            rank,
        }
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.distance
            .cmp(&other.distance)
            .then_with(|| self.rank.cmp(&other.rank))
            .then_with(|| self.slot.cmp(&other.slot))
    }
}

/// Work list of pending label assertions
pub trait Frontier {
    /// Whether pops come out in non-decreasing distance order
    const ORDERED: bool;

    /// Schedule an entry. Returns false if no new entry was queued.
    fn push(&mut self, entry: FrontierEntry) -> bool;

    fn pop(&mut self) -> Option<FrontierEntry>;

    /// Engine-specific operation counters
    fn counters(&self) -> EngineCounters;
}

/// Min-heap frontier for the priority-ordered engine
#[derive(Debug, Default)]
pub struct HeapFrontier {
    heap: BinaryHeap<Reverse<FrontierEntry>>,
    operations: u64,
}

impl HeapFrontier {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Frontier for HeapFrontier {
    const ORDERED: bool = true;

    fn push(&mut self, entry: FrontierEntry) -> bool {
        self.heap.push(Reverse(entry));
        self.operations += 1;
        true
    }

    fn pop(&mut self) -> Option<FrontierEntry> {
        let Reverse(entry) = self.heap.pop()?;
        self.operations += 1;
        Some(entry)
    }

    fn counters(&self) -> EngineCounters {
        EngineCounters::Dijkstra {
            heap_operations: self.operations,
        }
    }
}

/// FIFO frontier with an in-flight guard per (node, rank).
///
/// At most one entry per (node, rank) is pending. Pushing while one is
/// pending refreshes the pending entry's distance in place, so the entry
/// that is eventually popped carries the latest scheduled value.
#[derive(Debug)]
pub struct QueueFrontier {
    queue: VecDeque<(usize, Rank)>,
    pending: Vec<[Distance; 2]>,
    enqueues: u64,
    dequeues: u64,
    suppressed: u64,
}

impl QueueFrontier {
    pub fn new(node_count: usize) -> Self {
        Self {
            queue: VecDeque::new(),
            pending: vec![[UNREACHED; 2]; node_count],
            enqueues: 0,
            dequeues: 0,
            suppressed: 0,
        }
    }

    /// Whether an entry for this (node, rank) is waiting in the queue
    pub fn in_flight(&self, slot: usize, rank: Rank) -> bool {
        self.pending[slot][rank.index()] != UNREACHED
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

impl Frontier for QueueFrontier {
    const ORDERED: bool = false;

    fn push(&mut self, entry: FrontierEntry) -> bool {
        let guard = &mut self.pending[entry.slot][entry.rank.index()];
        if *guard != UNREACHED {
            *guard = (*guard).min(entry.distance);
            self.suppressed += 1;
            return false;
        }
        *guard = entry.distance;
        self.queue.push_back((entry.slot, entry.rank));
        self.enqueues += 1;
        true
    }

    fn pop(&mut self) -> Option<FrontierEntry> {
        let (slot, rank) = self.queue.pop_front()?;
        let guard = &mut self.pending[slot][rank.index()];
        let distance = std::mem::replace(guard, UNREACHED);
        self.dequeues += 1;
        Some(FrontierEntry::new(distance, slot, rank))
    }

    fn counters(&self) -> EngineCounters {
        EngineCounters::Spfa {
            enqueue_operations: self.enqueues,
            dequeue_operations: self.dequeues,
            suppressed_enqueues: self.suppressed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_ordering() {
        let a = FrontierEntry::new(1, 5, Rank::Secondary);
        let b = FrontierEntry::new(2, 0, Rank::Primary);
        let c = FrontierEntry::new(1, 5, Rank::Primary);

        assert_eq!(a.cmp(&b), Ordering::Less);
        assert_eq!(c.cmp(&a), Ordering::Less);
        assert_eq!(a, a);
        assert_ne!(a, c);
    }

    #[test]
    fn test_heap_pops_smallest_first() {
        let mut heap = HeapFrontier::new();
        heap.push(FrontierEntry::new(5, 0, Rank::Primary));
        heap.push(FrontierEntry::new(1, 1, Rank::Secondary));
        heap.push(FrontierEntry::new(3, 2, Rank::Primary));

        let order: Vec<Distance> = std::iter::from_fn(|| heap.pop())
            .map(|e| e.distance)
            .collect();
        assert_eq!(order, vec![1, 3, 5]);
        assert_eq!(
            heap.counters(),
            EngineCounters::Dijkstra { heap_operations: 6 }
        );
    }

    #[test]
    fn test_queue_guard_refreshes_pending_entry() {
        let mut queue = QueueFrontier::new(2);
        assert!(queue.push(FrontierEntry::new(9, 1, Rank::Primary)));
        assert!(queue.in_flight(1, Rank::Primary));
        assert!(!queue.in_flight(1, Rank::Secondary));

        assert!(!queue.push(FrontierEntry::new(4, 1, Rank::Primary)));
        assert_eq!(queue.len(), 1);

        let entry = queue.pop().unwrap();
        assert_eq!(entry, FrontierEntry::new(4, 1, Rank::Primary));
        assert!(!queue.in_flight(1, Rank::Primary));
        assert!(queue.is_empty());

        assert_eq!(
            queue.counters(),
            EngineCounters::Spfa {
                enqueue_operations: 1,
                dequeue_operations: 1,
                suppressed_enqueues: 1,
            }
        );
    }

    #[test]
    fn test_queue_is_fifo_across_ranks() {
        let mut queue = QueueFrontier::new(2);
        queue.push(FrontierEntry::new(3, 0, Rank::Secondary));
        queue.push(FrontierEntry::new(1, 1, Rank::Primary));
        queue.push(FrontierEntry::new(2, 0, Rank::Primary));

        let order: Vec<(usize, Rank)> = std::iter::from_fn(|| queue.pop())
            .map(|e| (e.slot, e.rank))
            .collect();
        assert_eq!(
            order,
            vec![(0, Rank::Secondary), (1, Rank::Primary), (0, Rank::Primary)]
        );
    }
}
