//! Min-priority queue with insertion-order tie-breaking

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

/// Entry ordered by `key`, then by insertion sequence
#[derive(Debug, Clone)]
pub struct HeapEntry<K, V> {
    pub key: K,
    seq: u64,
    pub value: V,
}

impl<K: Ord, V> PartialEq for HeapEntry<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key && self.seq == other.seq
    }
}

impl<K: Ord, V> Eq for HeapEntry<K, V> {}

impl<K: Ord, V> PartialOrd for HeapEntry<K, V> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K: Ord, V> Ord for HeapEntry<K, V> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key
            .cmp(&other.key)
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

/// Min-queue over `BinaryHeap`: `pop` returns the smallest key, and among
/// equal keys the value pushed first.
///
/// There is no decrease-key; callers push a vertex again with its new key
/// and skip stale entries when they surface.
#[derive(Debug, Clone)]
pub struct MinQueue<K, V> {
    heap: BinaryHeap<Reverse<HeapEntry<K, V>>>,
    next_seq: u64,
}

impl<K: Ord, V> Default for MinQueue<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord, V> MinQueue<K, V> {
    pub fn new() -> Self {
        MinQueue {
            heap: BinaryHeap::new(),
            next_seq: 0,
        }
    }

    pub fn push(&mut self, key: K, value: V) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Reverse(HeapEntry { key, seq, value }));
    }

    pub fn pop(&mut self) -> Option<(K, V)> {
        self.heap
            .pop()
            .map(|Reverse(entry)| (entry.key, entry.value))
    }

    pub fn peek_key(&self) -> Option<&K> {
        self.heap.peek().map(|Reverse(entry)| &entry.key)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}
