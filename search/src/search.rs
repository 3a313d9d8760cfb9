//! Search entry point and expansion loop.

use gripper_kernel::proof::hash::canonical_hash;
use tracing::{debug, trace};

use crate::contract::SearchWorld;
use crate::error::SearchError;
use crate::frontier::BestFirstFrontier;
use crate::node::{SearchNode, DOMAIN_SEARCH_NODE};
use crate::policy::SearchPolicy;
use crate::stats::{SearchStats, TerminationReason};

/// Result of a search execution.
///
/// Always carries the node table and statistics, however the search ended.
/// Check [`SearchResult::is_goal_reached`] or `stats.termination_reason`.
#[derive(Debug)]
pub struct SearchResult<S> {
    /// The goal node (if found).
    pub goal_node: Option<SearchNode<S>>,
    /// All nodes created during search, indexed by `node_id`.
    pub nodes: Vec<SearchNode<S>>,
    /// Counters and termination reason.
    pub stats: SearchStats,
}

impl<S: Clone> SearchResult<S> {
    /// Returns `true` if the search terminated because a goal was reached.
    #[must_use]
    pub fn is_goal_reached(&self) -> bool {
        matches!(
            self.stats.termination_reason,
            TerminationReason::GoalReached { .. }
        )
    }

    /// States from the root to the goal node, inclusive.
    #[must_use]
    pub fn goal_path(&self) -> Option<Vec<S>> {
        let goal = self.goal_node.as_ref()?;
        reconstruct_path(&self.nodes, goal.node_id)
            .into_iter()
            .map(|id| find_node(&self.nodes, id).map(|n| n.state.clone()))
            .collect()
    }
}

fn find_node<S>(nodes: &[SearchNode<S>], id: u64) -> Option<&SearchNode<S>> {
    usize::try_from(id)
        .ok()
        .and_then(|idx| nodes.get(idx))
        .filter(|n| n.node_id == id)
        .or_else(|| nodes.iter().find(|n| n.node_id == id))
}

/// Run best-first search from the root state.
///
/// Nodes are goal-tested when popped, so a root that already satisfies the
/// goal terminates with zero expansions. Budget exhaustion and frontier
/// exhaustion are normal terminations reported in the stats.
///
/// # Errors
///
/// Returns [`SearchError::InvalidPolicy`] only for pre-flight policy
/// validation failures.
pub fn search<W: SearchWorld + ?Sized>(
    root_state: W::State,
    world: &W,
    policy: &SearchPolicy,
) -> Result<SearchResult<W::State>, SearchError> {
    policy.validate()?;

    let mut frontier = BestFirstFrontier::new();
    let mut all_nodes: Vec<SearchNode<W::State>> = Vec::new();
    let mut next_node_id: u64 = 0;
    let mut expansion_count: u64 = 0;
    let mut total_candidates_generated: u64 = 0;
    let mut total_duplicates_suppressed: u64 = 0;
    let mut total_depth_skipped: u64 = 0;
    let mut total_dead_ends: u64 = 0;
    let mut total_pruned: u64 = 0;

    let root_fp = canonical_hash(DOMAIN_SEARCH_NODE, &world.identity_bytes(&root_state));
    let root_fp_hex = root_fp.hex_digest().to_string();
    let root_node = SearchNode {
        node_id: next_node_id,
        parent_id: None,
        h_cost: world.heuristic(&root_state),
        state: root_state,
        state_fingerprint: root_fp,
        depth: 0,
        g_cost: 0,
        creation_order: next_node_id,
    };
    next_node_id += 1;
    all_nodes.push(root_node.clone());
    frontier.push(root_node);

    let termination_reason = loop {
        let Some(current) = frontier.pop() else {
            break TerminationReason::FrontierExhausted;
        };

        if world.is_goal(&current.state) {
            break TerminationReason::GoalReached {
                node_id: current.node_id,
            };
        }

        if expansion_count >= policy.max_expansions {
            break TerminationReason::ExpansionBudgetExceeded;
        }
        expansion_count += 1;

        trace!(
            world = world.world_id(),
            node = current.node_id,
            depth = current.depth,
            f_cost = current.f_cost(),
            frontier = frontier.len(),
            "expanding node"
        );

        let children = world.successors(&current.state);
        total_candidates_generated += children.len() as u64;

        let mut children_created = 0u64;
        for child_state in children {
            if current.depth + 1 > policy.max_depth {
                total_depth_skipped += 1;
                continue;
            }

            let child_fp = canonical_hash(DOMAIN_SEARCH_NODE, &world.identity_bytes(&child_state));
            if frontier.is_visited(child_fp.hex_digest()) {
                total_duplicates_suppressed += 1;
                continue;
            }

            let child = SearchNode {
                node_id: next_node_id,
                parent_id: Some(current.node_id),
                h_cost: world.heuristic(&child_state),
                state: child_state,
                state_fingerprint: child_fp,
                depth: current.depth + 1,
                g_cost: current.g_cost + 1,
                creation_order: next_node_id,
            };
            next_node_id += 1;
            all_nodes.push(child.clone());
            frontier.push(child);
            children_created += 1;
        }

        if children_created == 0 {
            total_dead_ends += 1;
        }

        if frontier.len() as u64 > policy.max_frontier_size {
            #[allow(clippy::cast_possible_truncation)]
            let pruned = frontier.prune_to(policy.max_frontier_size as usize);
            total_pruned += pruned.len() as u64;
        }
    };

    debug!(
        world = world.world_id(),
        reason = %termination_reason,
        expansions = expansion_count,
        nodes = all_nodes.len(),
        "search finished"
    );

    let goal_node = match termination_reason {
        TerminationReason::GoalReached { node_id } => find_node(&all_nodes, node_id).cloned(),
        _ => None,
    };

    let stats = SearchStats {
        world_id: world.world_id().to_string(),
        root_state_fingerprint: root_fp_hex,
        total_expansions: expansion_count,
        total_candidates_generated,
        total_duplicates_suppressed,
        total_depth_skipped,
        total_dead_ends,
        total_pruned,
        frontier_high_water: frontier.high_water(),
        termination_reason,
    };

    Ok(SearchResult {
        goal_node,
        nodes: all_nodes,
        stats,
    })
}

/// Reconstruct the node ids on the path from root to `goal_node_id`.
#[must_use]
pub fn reconstruct_path<S>(nodes: &[SearchNode<S>], goal_node_id: u64) -> Vec<u64> {
    let mut path = Vec::new();
    let mut current_id = Some(goal_node_id);

    while let Some(id) = current_id {
        path.push(id);
        current_id = find_node(nodes, id).and_then(|n| n.parent_id);
    }

    path.reverse();
    path
}
