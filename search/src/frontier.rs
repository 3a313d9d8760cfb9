//! Best-first frontier with duplicate detection.
//!
//! The visited set is a `BTreeSet` of fingerprint hex digests, so equal
//! states are recognised by content, never by reference.

use std::cmp::Reverse;
use std::collections::{BTreeSet, BinaryHeap};

use crate::node::{FrontierKey, SearchNode};

/// A frontier entry wrapping a node with its ordering key.
///
/// `BinaryHeap` is a max-heap, so `Reverse<FrontierKey>` gives min-heap
/// behaviour (lowest `f_cost` first).
#[derive(Debug)]
struct FrontierEntry<S> {
    key: Reverse<FrontierKey>,
    node: SearchNode<S>,
}

impl<S> PartialEq for FrontierEntry<S> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl<S> Eq for FrontierEntry<S> {}

impl<S> PartialOrd for FrontierEntry<S> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<S> Ord for FrontierEntry<S> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.key.cmp(&other.key)
    }
}

/// Best-first frontier manager.
///
/// Maintains:
/// - A `BinaryHeap` for O(log n) pop of the best node
/// - A visited set of state fingerprints (first seen wins)
pub struct BestFirstFrontier<S> {
    heap: BinaryHeap<FrontierEntry<S>>,
    visited: BTreeSet<String>,
    high_water: u64,
}

impl<S> BestFirstFrontier<S> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            visited: BTreeSet::new(),
            high_water: 0,
        }
    }

    /// Push a node and mark its fingerprint as visited.
    ///
    /// Returns `false` (and drops the node) if the fingerprint was already
    /// visited.
    pub fn push(&mut self, node: SearchNode<S>) -> bool {
        let fp = node.state_fingerprint.hex_digest().to_string();
        if !self.visited.insert(fp) {
            return false;
        }
        self.heap.push(FrontierEntry {
            key: Reverse(FrontierKey::from(&node)),
            node,
        });
        self.high_water = self.high_water.max(self.heap.len() as u64);
        true
    }

    /// Pop the best (lowest `f_cost`) node.
    #[must_use]
    pub fn pop(&mut self) -> Option<SearchNode<S>> {
        self.heap.pop().map(|e| e.node)
    }

    #[must_use]
    pub fn is_visited(&self, fingerprint_hex: &str) -> bool {
        self.visited.contains(fingerprint_hex)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// High-water mark of frontier size.
    #[must_use]
    pub fn high_water(&self) -> u64 {
        self.high_water
    }

    /// Prune the frontier to at most `max_size` entries, keeping the best.
    ///
    /// Pruned fingerprints stay visited. Returns the pruned node ids.
    pub fn prune_to(&mut self, max_size: usize) -> Vec<u64> {
        if self.heap.len() <= max_size {
            return Vec::new();
        }
        let mut entries: Vec<FrontierEntry<S>> = self.heap.drain().collect();
        entries.sort_by(|a, b| a.key.0.cmp(&b.key.0));
        let pruned = entries
            .split_off(max_size)
            .into_iter()
            .map(|e| e.node.node_id)
            .collect();
        self.heap = entries.into_iter().collect();
        pruned
    }
}

impl<S> Default for BestFirstFrontier<S> {
    fn default() -> Self {
        Self::new()
    }
}
