//! Search world contract trait.

/// Trait for worlds that support search.
///
/// # Contract
///
/// - `successors` must be deterministic: same state → same successors in
///   the same order.
/// - `identity_bytes` must be injective over states the world considers
///   distinct; the visited set is keyed by its hash.
/// - Every transition costs 1.
pub trait SearchWorld {
    /// The state type searched over. Each node owns its own copy.
    type State: Clone;

    /// Short identifier used in logs.
    fn world_id(&self) -> &str;

    /// Canonical bytes identifying `state` for duplicate detection.
    fn identity_bytes(&self, state: &Self::State) -> Vec<u8>;

    /// States reachable from `state` by one transition.
    fn successors(&self, state: &Self::State) -> Vec<Self::State>;

    /// Test whether `state` satisfies the world's goal.
    fn is_goal(&self, state: &Self::State) -> bool;

    /// Estimated remaining cost from `state`. Defaults to 0 (uniform cost).
    fn heuristic(&self, _state: &Self::State) -> i64 {
        0
    }
}
