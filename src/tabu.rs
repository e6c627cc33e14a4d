//! Short-term memory of recently visited solutions.

use crate::solution::Signature;
use std::collections::hash_map::Entry;
use std::collections::{HashMap, VecDeque};

/// Bounded FIFO of solution signatures.
///
/// Insertion order is kept in a queue while a companion count map answers
/// membership in O(1). The same signature may be recorded more than once;
/// it then stays tabu until every copy has been evicted.
#[derive(Debug, Clone)]
pub struct TabuMemory {
    capacity: usize,
    queue: VecDeque<Signature>,
    counts: HashMap<Signature, usize>,
}

impl TabuMemory {
    /// Create an empty memory holding at most `capacity` signatures.
    pub fn new(capacity: usize) -> Self {
        TabuMemory {
            capacity,
            queue: VecDeque::with_capacity(capacity.saturating_add(1)),
            counts: HashMap::with_capacity(capacity),
        }
    }

    /// Check whether `signature` was recorded and not yet evicted.
    pub fn contains(&self, signature: &Signature) -> bool {
        self.counts.contains_key(signature)
    }

    /// Append `signature`, evicting the oldest entry if the memory overflows.
    pub fn record(&mut self, signature: Signature) {
        *self.counts.entry(signature.clone()).or_insert(0) += 1;
        self.queue.push_back(signature);

        if self.queue.len() > self.capacity {
            if let Some(oldest) = self.queue.pop_front() {
                self.forget(oldest);
            }
        }
    }

    fn forget(&mut self, signature: Signature) {
        if let Entry::Occupied(mut entry) = self.counts.entry(signature) {
            *entry.get_mut() -= 1;
            if *entry.get() == 0 {
                entry.remove();
            }
        }
    }

    /// Number of recorded entries, duplicates included.
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Check if nothing is recorded.
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Maximum number of entries.
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
