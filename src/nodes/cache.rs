//! Signal cache for one evaluation run
//!
//! Holds the current output state of every node while the engine sweeps the
//! circuit. Switches are seeded from their stored position (or an override)
//! and every other node starts from its kind's default state.

use super::node::{Node, NodeId};
use super::state::NodeState;
use std::collections::HashMap;

/// Statistics about cache writes during a run
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CacheStatistics {
    /// Writes that changed a node's state
    pub updates: usize,
}

/// Map from node id to its current output state
#[derive(Debug, Default, Clone)]
pub struct SignalCache {
    states: HashMap<NodeId, NodeState>,
    stats: CacheStatistics,
}

impl SignalCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed from a node array; `overrides` replaces switch positions by id
    pub fn seeded(nodes: &[Node], overrides: Option<&HashMap<NodeId, bool>>) -> Self {
        let mut cache = Self::new();
        for node in nodes {
            let state = if node.kind.is_switch() {
                let on = overrides
                    .and_then(|o| o.get(&node.id).copied())
                    .unwrap_or_else(|| node.switch_state());
                NodeState::Switch { state: on }
            } else {
                NodeState::default_for(&node.kind)
            };
            cache.states.insert(node.id.clone(), state);
        }
        cache
    }

    /// Store a node's state, returning whether it changed
    pub fn insert(&mut self, node_id: &str, state: NodeState) -> bool {
        let changed = match self.states.get_mut(node_id) {
            Some(existing) if *existing == state => false,
            Some(existing) => {
                *existing = state;
                true
            }
            None => {
                self.states.insert(node_id.to_string(), state);
                true
            }
        };
        if changed {
            self.stats.updates += 1;
        }
        changed
    }

    pub fn get(&self, node_id: &str) -> Option<&NodeState> {
        self.states.get(node_id)
    }

    /// Raw map for port lookups
    pub fn states(&self) -> &HashMap<NodeId, NodeState> {
        &self.states
    }

    pub fn get_statistics(&self) -> &CacheStatistics {
        &self.stats
    }
}
