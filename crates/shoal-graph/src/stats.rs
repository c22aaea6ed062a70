//! Instance statistics.
//!
//! Projects an instance onto a petgraph `UnGraph` and summarises its
//! structure: user and friendship counts, self-loops, isolated users and
//! connected components.

use crate::Instance;
use petgraph::graph::{NodeIndex, UnGraph};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ============================================================================
// Types
// ============================================================================

/// Structural statistics about an instance.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstanceStats {
    /// Number of registered users.
    pub users: usize,
    /// Number of friendships (unordered pairs, self-loops included).
    pub friendships: usize,
    /// Number of users friended to themselves.
    pub self_loops: usize,
    /// Users with no friend other than, possibly, themselves.
    pub isolated_users: usize,
    /// Number of connected components.
    pub components: usize,
}

// ============================================================================
// Functions
// ============================================================================

/// Project an instance onto an undirected petgraph graph.
///
/// Nodes carry usernames and are added in sorted order; each friendship
/// becomes exactly one edge.
pub fn to_ungraph(instance: &Instance) -> UnGraph<String, ()> {
    let mut names: Vec<&str> = instance.users().map(|u| u.username()).collect();
    names.sort_unstable();

    let mut graph = UnGraph::with_capacity(names.len(), instance.friendship_count());
    let mut indices: HashMap<&str, NodeIndex> = HashMap::with_capacity(names.len());
    for name in &names {
        indices.insert(*name, graph.add_node((*name).to_string()));
    }

    for name in &names {
        let Some(user) = instance.get(name) else {
            continue;
        };
        for friend in user.friends().filter(|f| f >= name) {
            if let (Some(&a), Some(&b)) = (indices.get(name), indices.get(friend)) {
                graph.add_edge(a, b, ());
            }
        }
    }

    graph
}

/// Compute statistics for an instance.
pub fn compute_stats(instance: &Instance) -> InstanceStats {
    let graph = to_ungraph(instance);

    let self_loops = instance
        .users()
        .filter(|u| u.is_friend(u.username()))
        .count();
    let isolated_users = instance
        .users()
        .filter(|u| u.friends().all(|f| f == u.username()))
        .count();

    let stats = InstanceStats {
        users: graph.node_count(),
        friendships: graph.edge_count(),
        self_loops,
        isolated_users,
        components: petgraph::algo::connected_components(&graph),
    };
    log::debug!("Computed stats for instance {}: {:?}", instance.id(), stats);
    stats
}

// ============================================================================
// Tests
// ============================================================================
