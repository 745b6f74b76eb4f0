//! The priority frontier used by A*.

use std::collections::BinaryHeap;

#[derive(Debug, Clone)]
struct FrontierEntry<T> {
    f: u32,
    seq: u64,
    g: u32,
    state: T,
}

// Equality and ordering deliberately ignore the state: the heap orders on
// (f, seq) only, and seq is unique within one frontier.
impl<T> PartialEq for FrontierEntry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.f == other.f && self.seq == other.seq
    }
}

impl<T> Eq for FrontierEntry<T> {}

impl<T> Ord for FrontierEntry<T> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // BinaryHeap is a max-heap; reverse both keys so the entry with the
        // lowest f (and, on ties, the earliest discovery) pops first.
        other
            .f
            .cmp(&self.f)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl<T> PartialOrd for FrontierEntry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// A best-first frontier ordered by f-cost.
///
/// Ties are broken by discovery order: every push is stamped with a
/// monotonically increasing sequence number, and of two entries with equal f
/// the earlier-pushed one pops first. This keeps the returned path identical
/// across runs.
///
/// The same state may be pushed more than once with different costs; stale
/// entries are never removed here. Each entry carries the g-cost it was
/// pushed with so the caller can recognize and skip entries that a cheaper
/// rediscovery has superseded.
#[derive(Debug)]
pub struct Frontier<T> {
    heap: BinaryHeap<FrontierEntry<T>>,
    next_seq: u64,
}

impl<T> Frontier<T> {
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_seq: 0,
        }
    }

    pub fn push(&mut self, f: u32, g: u32, state: T) {
        self.heap.push(FrontierEntry {
            f,
            seq: self.next_seq,
            g,
            state,
        });
        self.next_seq += 1;
    }

    /// Pops the entry with the lowest f-cost, returning the g-cost it was
    /// pushed with alongside the state.
    pub fn pop(&mut self) -> Option<(u32, T)> {
        self.heap.pop().map(|entry| (entry.g, entry.state))
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
