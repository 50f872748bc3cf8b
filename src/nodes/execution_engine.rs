//! Circuit evaluation engine
//!
//! A bounded relaxation evaluator:
//! - seed the signal cache from switch positions and per-kind defaults
//! - sweep every non-switch node in node order, recomputing it from the cache
//! - stop when a sweep changes nothing, or at the sweep cap
//!
//! Updates are visible to later nodes within the same sweep, so acyclic
//! circuits listed in dependency order settle in one or two sweeps while
//! feedback loops (latches) settle when a stable point exists.

use crate::constants::engine::MAX_SWEEPS;
use crate::nodes::cache::SignalCache;
use crate::nodes::graph::{InputIndex, PortInputs};
use crate::nodes::node::{Edge, Node, NodeId, NodeKind};
use crate::nodes::state::NodeState;
use crate::nodes::{arithmetic, binary, data, logic, output};
use chrono::NaiveTime;
use log::{debug, warn};
use serde::Serialize;
use std::collections::{HashMap, HashSet};

/// Runtime configuration for the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Upper bound on full sweeps before giving up on a fixed point
    pub max_sweeps: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_sweeps: MAX_SWEEPS,
        }
    }
}

/// Statistics about one evaluation run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExecutionStats {
    /// Sweeps performed, including the final quiet one
    pub sweeps: usize,
    /// Whether the last sweep changed nothing
    pub converged: bool,
    /// Node evaluations across all sweeps
    pub evaluated_nodes: usize,
    /// Edges naming a node that is not in the circuit
    pub dangling_edges: usize,
    /// Edges dropped for targeting an undeclared port
    pub ignored_edges: usize,
    /// Cache writes that changed a node's state
    pub state_changes: usize,
}

/// Result of a run: the settled signal cache and its statistics
#[derive(Debug, Clone)]
pub struct Evaluation {
    pub cache: SignalCache,
    pub stats: ExecutionStats,
}

/// Relaxation evaluator for circuits
#[derive(Debug, Clone, Default)]
pub struct CircuitEngine {
    config: EngineConfig,
}

impl CircuitEngine {
    /// Create a new engine
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Evaluate and return a new node array; switches pass through unchanged
    pub fn evaluate(&self, nodes: &[Node], edges: &[Edge], now: NaiveTime) -> (Vec<Node>, ExecutionStats) {
        let Evaluation { cache, stats } = self.run(nodes, edges, now, None);

        let evaluated = nodes
            .iter()
            .map(|node| {
                let mut node = node.clone();
                if !node.kind.is_switch() {
                    node.data = cache
                        .get(&node.id)
                        .cloned()
                        .unwrap_or_else(|| NodeState::default_for(&node.kind));
                }
                node
            })
            .collect();

        (evaluated, stats)
    }

    /// Run the relaxation loop. `overrides` replaces switch positions by id
    /// without touching the nodes themselves.
    pub fn run(
        &self,
        nodes: &[Node],
        edges: &[Edge],
        now: NaiveTime,
        overrides: Option<&HashMap<NodeId, bool>>,
    ) -> Evaluation {
        let index = InputIndex::new(edges);
        let mut cache = SignalCache::seeded(nodes, overrides);
        let mut stats = ExecutionStats {
            dangling_edges: count_dangling(nodes, edges),
            ..ExecutionStats::default()
        };

        let targets: Vec<_> = nodes
            .iter()
            .filter(|node| !node.kind.is_switch())
            .map(|node| (node, node.ports()))
            .collect();

        let max_sweeps = self.config.max_sweeps.max(1);
        while stats.sweeps < max_sweeps {
            stats.sweeps += 1;
            let mut changed = false;

            for (node, ports) in &targets {
                let inputs = PortInputs::collect(ports, index.get(&node.id), cache.states());
                if stats.sweeps == 1 {
                    stats.ignored_edges += inputs.ignored;
                }
                let state = dispatch_node_execution(node, &inputs, now);
                changed |= cache.insert(&node.id, state);
                stats.evaluated_nodes += 1;
            }

            if !changed {
                stats.converged = true;
                break;
            }
        }

        stats.state_changes = cache.get_statistics().updates;
        if stats.converged {
            debug!(
                "Circuit settled after {} sweeps ({} nodes, {} edges)",
                stats.sweeps,
                nodes.len(),
                edges.len()
            );
        } else {
            warn!(
                "Circuit did not settle within {} sweeps; keeping last computed values",
                stats.sweeps
            );
        }

        Evaluation { cache, stats }
    }
}

/// Compute a node's state from its resolved inputs
pub fn dispatch_node_execution(node: &Node, inputs: &PortInputs, now: NaiveTime) -> NodeState {
    match &node.kind {
        // Never recomputed
        NodeKind::Switch => NodeState::Switch {
            state: node.switch_state(),
        },

        // Primitive gates
        NodeKind::And => logic::AndLogic::default().process(inputs),
        NodeKind::Nand => logic::AndLogic::nand().process(inputs),
        NodeKind::Or => logic::OrLogic::default().process(inputs),
        NodeKind::Nor => logic::OrLogic::nor().process(inputs),
        NodeKind::Xor => logic::OrLogic::xor().process(inputs),
        NodeKind::Not => logic::NotLogic.process(inputs),

        // Arithmetic
        NodeKind::HalfAdder => arithmetic::process_half_adder(inputs),
        NodeKind::FullAdder => arithmetic::process_full_adder(inputs),

        // Binary components
        NodeKind::BinaryComparator { bits } => binary::process_comparator(*bits, inputs),
        NodeKind::BinaryEncoder { input_size } => binary::process_encoder(*input_size, inputs),
        NodeKind::BinaryDecoder { input_bits } => binary::process_decoder(*input_bits, inputs),
        NodeKind::Multiplexer { select_bits } => binary::process_multiplexer(*select_bits, inputs),

        // Sources and outputs
        NodeKind::BinaryClock => data::process_clock(now),
        NodeKind::Led => output::LedLogic.process(inputs),
        NodeKind::BinaryDisplay { bits } => output::process_display(*bits, inputs),
        NodeKind::MultiLed { led_count } => output::process_multi_led(*led_count, inputs),
    }
}

fn count_dangling(nodes: &[Node], edges: &[Edge]) -> usize {
    let ids: HashSet<&str> = nodes.iter().map(|n| n.id.as_str()).collect();
    edges
        .iter()
        .filter(|e| !ids.contains(e.source.as_str()) || !ids.contains(e.target.as_str()))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn noon() -> NaiveTime {
        NaiveTime::from_hms_opt(12, 0, 0).unwrap()
    }

    fn switch(id: &str, on: bool) -> Node {
        let mut node = Node::with_id(id, NodeKind::Switch, id.to_uppercase());
        node.data = NodeState::Switch { state: on };
        node
    }

    fn state_of<'a>(nodes: &'a [Node], id: &str) -> &'a NodeState {
        &nodes.iter().find(|n| n.id == id).unwrap().data
    }

    #[test]
    fn test_gate_chain() {
        let nodes = vec![
            switch("a", true),
            switch("b", false),
            Node::with_id("x", NodeKind::Xor, "X"),
            Node::with_id("n", NodeKind::Not, "N"),
            Node::with_id("led", NodeKind::Led, "Out"),
        ];
        let edges = vec![
            Edge::feeding("a", "x", "in1"),
            Edge::feeding("b", "x", "in2"),
            Edge::feeding("x", "n", "in"),
            Edge::between("n", "led"),
        ];
        let (result, stats) = CircuitEngine::default().evaluate(&nodes, &edges, noon());
        assert!(stats.converged);
        assert_eq!(stats.sweeps, 2);
        // Only the XOR leaves its default; NOT and the LED stay low
        assert_eq!(stats.state_changes, 1);
        assert_eq!(state_of(&result, "x"), &NodeState::Signal { state: true });
        assert_eq!(state_of(&result, "led"), &NodeState::Signal { state: false });
    }

    #[test]
    fn test_reverse_order_still_settles() {
        let nodes = vec![
            Node::with_id("led", NodeKind::Led, "Out"),
            Node::with_id("n2", NodeKind::Not, "N2"),
            Node::with_id("n1", NodeKind::Not, "N1"),
            switch("a", true),
        ];
        let edges = vec![
            Edge::between("a", "n1"),
            Edge::between("n1", "n2"),
            Edge::between("n2", "led"),
        ];
        let (result, stats) = CircuitEngine::default().evaluate(&nodes, &edges, noon());
        assert!(stats.converged);
        assert!(stats.sweeps > 1);
        assert!(result[0].data.primary());
    }

    #[test]
    fn test_switches_are_never_written() {
        let nodes = vec![switch("a", true), Node::with_id("n", NodeKind::Not, "N")];
        let edges = vec![Edge::between("n", "a"), Edge::between("a", "n")];
        let (result, _) = CircuitEngine::default().evaluate(&nodes, &edges, noon());
        assert_eq!(result[0], nodes[0]);
    }

    #[test]
    fn test_empty_gates() {
        let nodes = vec![
            Node::with_id("and", NodeKind::And, ""),
            Node::with_id("nand", NodeKind::Nand, ""),
            Node::with_id("or", NodeKind::Or, ""),
            Node::with_id("nor", NodeKind::Nor, ""),
            Node::with_id("not", NodeKind::Not, ""),
            Node::with_id("xor", NodeKind::Xor, ""),
        ];
        let (result, _) = CircuitEngine::default().evaluate(&nodes, &[], noon());
        let outputs: Vec<bool> = result.iter().map(|n| n.data.primary()).collect();
        assert_eq!(outputs, vec![false, true, false, true, true, false]);
    }

    #[test]
    fn test_oscillator_hits_sweep_cap() {
        let nodes = vec![Node::with_id("n", NodeKind::Not, "N")];
        let edges = vec![Edge::between("n", "n")];
        let engine = CircuitEngine::new(EngineConfig { max_sweeps: 7 });
        let (_, stats) = engine.evaluate(&nodes, &edges, noon());
        assert!(!stats.converged);
        assert_eq!(stats.sweeps, 7);
        assert_eq!(stats.evaluated_nodes, 7);
    }

    #[test]
    fn test_feedback_through_intermediate_gate_terminates() {
        // G = OR(a, H), H = NOT(G): oscillates while a is low
        let nodes = vec![
            switch("a", false),
            Node::with_id("g", NodeKind::Or, "G"),
            Node::with_id("h", NodeKind::Not, "H"),
        ];
        let edges = vec![
            Edge::feeding("a", "g", "in1"),
            Edge::feeding("h", "g", "in2"),
            Edge::feeding("g", "h", "in"),
        ];
        let (_, stats) = CircuitEngine::default().evaluate(&nodes, &edges, noon());
        assert_eq!(stats.sweeps, MAX_SWEEPS);
        assert!(!stats.converged);
    }

    #[test]
    fn test_sr_latch_settles() {
        let nodes = vec![
            switch("s", false),
            switch("r", false),
            Node::with_id("nor1", NodeKind::Nor, "NOR1"),
            Node::with_id("nor2", NodeKind::Nor, "NOR2"),
        ];
        let edges = vec![
            Edge::feeding("s", "nor1", "in1"),
            Edge::feeding("r", "nor2", "in1"),
            Edge::feeding("nor2", "nor1", "in2"),
            Edge::feeding("nor1", "nor2", "in2"),
        ];
        let (result, stats) = CircuitEngine::default().evaluate(&nodes, &edges, noon());
        assert!(stats.converged);
        let q = state_of(&result, "nor1").primary();
        let q_bar = state_of(&result, "nor2").primary();
        assert_ne!(q, q_bar);
    }

    #[test]
    fn test_dangling_edges_read_false() {
        let nodes = vec![Node::with_id("m", NodeKind::multiplexer(1), "M")];
        let edges = vec![
            Edge::feeding("ghost", "m", "enable"),
            Edge::between("m", "nowhere"),
        ];
        let (result, stats) = CircuitEngine::default().evaluate(&nodes, &edges, noon());
        assert_eq!(stats.dangling_edges, 2);
        match &result[0].data {
            NodeState::Multiplexer { enable, .. } => assert!(!enable),
            other => panic!("Expected multiplexer state, got {:?}", other),
        }
    }

    #[test]
    fn test_undeclared_port_is_ignored() {
        let nodes = vec![
            switch("a", true),
            Node::with_id("ha", NodeKind::HalfAdder, "HA"),
        ];
        let edges = vec![Edge::feeding("a", "ha", "cin")];
        let (result, stats) = CircuitEngine::default().evaluate(&nodes, &edges, noon());
        assert_eq!(stats.ignored_edges, 1);
        assert_eq!(result[1].data, NodeState::Adder { sum: false, carry: false });
    }

    #[test]
    fn test_source_handle_selects_output() {
        let nodes = vec![
            switch("a", true),
            switch("b", true),
            Node::with_id("ha", NodeKind::HalfAdder, "HA"),
            Node::with_id("sum", NodeKind::Led, "Sum"),
            Node::with_id("carry", NodeKind::Led, "Carry"),
        ];
        let edges = vec![
            Edge::feeding("a", "ha", "a"),
            Edge::feeding("b", "ha", "b"),
            Edge::new("ha", Some("sum"), "sum", None),
            Edge::new("ha", Some("carry"), "carry", None),
        ];
        let (result, _) = CircuitEngine::default().evaluate(&nodes, &edges, noon());
        assert!(!state_of(&result, "sum").primary());
        assert!(state_of(&result, "carry").primary());
    }

    #[test]
    fn test_overrides_do_not_touch_nodes() {
        let nodes = vec![switch("a", false), Node::with_id("l", NodeKind::Led, "L")];
        let edges = vec![Edge::between("a", "l")];
        let overrides: HashMap<NodeId, bool> = [("a".to_string(), true)].into_iter().collect();
        let run = CircuitEngine::default().run(&nodes, &edges, noon(), Some(&overrides));
        assert_eq!(run.cache.get("l"), Some(&NodeState::Signal { state: true }));
        assert!(!nodes[0].switch_state());
    }

    #[test]
    fn test_clock_uses_injected_time() {
        let nodes = vec![
            Node::with_id("clk", NodeKind::BinaryClock, "CLK"),
            Node::with_id("led", NodeKind::Led, "Tick"),
        ];
        let edges = vec![Edge::new("clk", Some("second5"), "led", None)];
        let odd = NaiveTime::from_hms_opt(10, 30, 7).unwrap();
        let (result, _) = CircuitEngine::default().evaluate(&nodes, &edges, odd);
        assert!(result[1].data.primary());
        let even = NaiveTime::from_hms_opt(10, 30, 8).unwrap();
        let (result, _) = CircuitEngine::default().evaluate(&nodes, &edges, even);
        assert!(!result[1].data.primary());
    }
}
