//! Core search node type and frontier ordering key.

use gripper_kernel::proof::hash::ContentHash;

/// Domain prefix for search node fingerprints.
pub const DOMAIN_SEARCH_NODE: &[u8] = b"GRIPPER::SEARCH_NODE::V1\0";

/// An immutable search node.
///
/// Ordering for frontier extraction uses `(f_cost, depth, creation_order)`
/// where `f_cost = g_cost + h_cost`. Lower is better; ties broken by
/// shallower depth, then older creation order.
#[derive(Debug, Clone)]
pub struct SearchNode<S> {
    /// Monotonic node identifier; equals the node's index in
    /// [`crate::SearchResult::nodes`].
    pub node_id: u64,
    /// Parent node ID (`None` for root).
    pub parent_id: Option<u64>,
    /// Full state at this node, owned by the node.
    pub state: S,
    /// Canonical hash of the state's identity bytes.
    pub state_fingerprint: ContentHash,
    /// Tree depth (root = 0).
    pub depth: u32,
    /// Cumulative path cost (+1 per transition).
    pub g_cost: i64,
    /// Heuristic estimate supplied by the world.
    pub h_cost: i64,
    /// Global counter for deterministic tie-breaking.
    pub creation_order: u64,
}

impl<S> SearchNode<S> {
    /// Compute `f_cost = g_cost + h_cost` (the frontier ordering key).
    #[must_use]
    pub fn f_cost(&self) -> i64 {
        self.g_cost.saturating_add(self.h_cost)
    }
}

/// The frontier ordering key: `(f_cost, depth, creation_order)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct FrontierKey {
    pub f_cost: i64,
    pub depth: u32,
    pub creation_order: u64,
}

impl<S> From<&SearchNode<S>> for FrontierKey {
    fn from(node: &SearchNode<S>) -> Self {
        Self {
            f_cost: node.f_cost(),
            depth: node.depth,
            creation_order: node.creation_order,
        }
    }
}
