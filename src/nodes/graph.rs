//! Circuit graph data structures and input lookup

use super::node::{Edge, Node, NodeId, NodeKind};
use super::port::{PortSet, PortType};
use super::state::NodeState;
use crate::error::{CircuitError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Edges whose target is `node_id`, in edge order
pub fn input_edges<'a>(edges: &'a [Edge], node_id: &str) -> Vec<&'a Edge> {
    edges.iter().filter(|e| e.target == node_id).collect()
}

/// Cached output of the edge's source at its source handle.
///
/// Reads false when the source node, its state, or the named port is absent.
pub fn source_value(edge: &Edge, states: &HashMap<NodeId, NodeState>) -> bool {
    states
        .get(&edge.source)
        .and_then(|state| state.output(edge.source_handle.as_deref()))
        .unwrap_or(false)
}

/// Incoming edges grouped by target, built once per evaluation
#[derive(Debug, Default)]
pub struct InputIndex<'a> {
    by_target: HashMap<&'a str, Vec<&'a Edge>>,
}

impl<'a> InputIndex<'a> {
    pub fn new(edges: &'a [Edge]) -> Self {
        let mut by_target: HashMap<&'a str, Vec<&'a Edge>> = HashMap::new();
        for edge in edges {
            by_target.entry(edge.target.as_str()).or_default().push(edge);
        }
        Self { by_target }
    }

    pub fn get(&self, node_id: &str) -> &[&'a Edge] {
        self.by_target.get(node_id).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// Input edges of one node bound to its declared ports
#[derive(Debug, Clone, Default)]
pub struct PortBindings<'e> {
    /// Every accepted edge in edge order
    pub ordered: Vec<&'e Edge>,
    /// Edge per port name; later edges override earlier ones
    pub named: HashMap<String, &'e Edge>,
    /// Edges dropped for naming no declared input
    pub ignored: usize,
}

impl<'e> PortBindings<'e> {
    /// Bind `edges` (all targeting one node) to the ports in `ports`
    pub fn bind(ports: &PortSet, edges: &[&'e Edge]) -> Self {
        let mut bindings = Self::default();

        for &edge in edges {
            let handle = edge.target_handle.as_deref();
            if !ports.accepts_input(handle) {
                bindings.ignored += 1;
                continue;
            }
            if ports.variadic {
                bindings.ordered.push(edge);
                continue;
            }

            let slot = match handle {
                Some(name) => Some(name.to_string()),
                // Unported edges take the next free declared input
                None => ports
                    .inputs
                    .iter()
                    .find(|p| !bindings.named.contains_key(&p.name))
                    .map(|p| p.name.clone()),
            };
            match slot {
                Some(name) => {
                    bindings.ordered.push(edge);
                    bindings.named.insert(name, edge);
                }
                None => bindings.ignored += 1,
            }
        }
        bindings
    }

    pub fn get(&self, name: &str) -> Option<&'e Edge> {
        self.named.get(name).copied()
    }
}

/// Input values of one node, resolved against its declared ports
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PortInputs {
    /// Every accepted value in edge order
    values: Vec<bool>,
    /// Values by port name
    named: HashMap<String, bool>,
    /// Edges dropped for naming no declared input
    pub ignored: usize,
}

impl PortInputs {
    /// Resolve `edges` (all targeting one node) into port values
    pub fn collect(ports: &PortSet, edges: &[&Edge], states: &HashMap<NodeId, NodeState>) -> Self {
        let bindings = PortBindings::bind(ports, edges);
        Self {
            values: bindings.ordered.iter().map(|e| source_value(e, states)).collect(),
            named: bindings
                .named
                .iter()
                .map(|(name, e)| (name.clone(), source_value(e, states)))
                .collect(),
            ignored: bindings.ignored,
        }
    }

    /// Build directly from named values
    pub fn from_named<'s>(pairs: impl IntoIterator<Item = (&'s str, bool)>) -> Self {
        let mut inputs = Self::default();
        for (name, value) in pairs {
            inputs.values.push(value);
            inputs.named.insert(name.to_string(), value);
        }
        inputs
    }

    /// Build directly from positional values, as a variadic gate sees them
    pub fn from_values(values: impl IntoIterator<Item = bool>) -> Self {
        Self {
            values: values.into_iter().collect(),
            ..Self::default()
        }
    }

    pub fn values(&self) -> &[bool] {
        &self.values
    }

    /// Value on a named port; unconnected reads false
    pub fn get(&self, name: &str) -> bool {
        self.get_or(name, false)
    }

    /// Value on a named port, or `default` when nothing is connected to it
    pub fn get_or(&self, name: &str, default: bool) -> bool {
        self.named.get(name).copied().unwrap_or(default)
    }

    /// `prefix0..prefix(n-1)`, unconnected bits read false
    pub fn bits(&self, prefix: &str, n: usize) -> Vec<bool> {
        (0..n).map(|i| self.get(&format!("{}{}", prefix, i))).collect()
    }

}

/// Editable circuit: the node and edge arrays evaluated together
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Circuit {
    pub nodes: Vec<Node>,
    #[serde(default)]
    pub edges: Vec<Edge>,
}

impl Circuit {
    /// Creates a new empty circuit
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a node and returns its id
    pub fn add_node(&mut self, node: Node) -> NodeId {
        let id = node.id.clone();
        self.nodes.push(node);
        id
    }

    /// Shorthand for adding a freshly created node of `kind`
    pub fn add(&mut self, kind: NodeKind, label: &str) -> NodeId {
        self.add_node(Node::new(kind, label))
    }

    /// Removes a node and every edge touching it
    pub fn remove_node(&mut self, node_id: &str) -> Option<Node> {
        let index = self.nodes.iter().position(|n| n.id == node_id)?;
        self.edges
            .retain(|e| e.source != node_id && e.target != node_id);
        Some(self.nodes.remove(index))
    }

    /// Connects an output port to an input port after validating both ends.
    ///
    /// Feedback wiring (including a node feeding itself) is allowed.
    pub fn connect(
        &mut self,
        source: &str,
        source_handle: Option<&str>,
        target: &str,
        target_handle: Option<&str>,
    ) -> Result<String> {
        let source_node = self
            .node(source)
            .ok_or_else(|| CircuitError::UnknownNode(source.to_string()))?;
        let source_ports = source_node.ports();
        if !source_ports.has_output(source_handle) {
            return Err(unknown_port(source_node, PortType::Output, source_handle));
        }

        let target_node = self
            .node(target)
            .ok_or_else(|| CircuitError::UnknownNode(target.to_string()))?;
        if !target_node.ports().accepts_input(target_handle) {
            return Err(unknown_port(target_node, PortType::Input, target_handle));
        }

        let edge = Edge::new(source, source_handle, target, target_handle);
        let id = edge.id.clone();
        self.edges.push(edge);
        Ok(id)
    }

    /// Connects two nodes through their primary output and an unnamed input
    pub fn wire(&mut self, source: &str, target: &str) -> Result<String> {
        self.connect(source, None, target, None)
    }

    /// Removes an edge by id
    pub fn remove_edge(&mut self, edge_id: &str) -> Option<Edge> {
        let index = self.edges.iter().position(|e| e.id == edge_id)?;
        Some(self.edges.remove(index))
    }

    pub fn node(&self, node_id: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == node_id)
    }

    pub fn node_mut(&mut self, node_id: &str) -> Option<&mut Node> {
        self.nodes.iter_mut().find(|n| n.id == node_id)
    }

    /// First node with the given label
    pub fn find_by_label(&self, label: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.label == label)
    }

    /// Sets a switch position
    pub fn set_switch(&mut self, node_id: &str, on: bool) -> Result<()> {
        match self.node_mut(node_id) {
            Some(node) if node.kind.is_switch() => {
                node.data = NodeState::Switch { state: on };
                Ok(())
            }
            _ => Err(CircuitError::UnknownNode(node_id.to_string())),
        }
    }

    /// Switch nodes in node order
    pub fn switches(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter().filter(|n| n.kind.is_switch())
    }

    /// Edges whose source or target is not a node of this circuit
    pub fn dangling_edges(&self) -> Vec<&Edge> {
        self.edges
            .iter()
            .filter(|e| self.node(&e.source).is_none() || self.node(&e.target).is_none())
            .collect()
    }
}

fn unknown_port(node: &Node, direction: PortType, handle: Option<&str>) -> CircuitError {
    CircuitError::UnknownPort {
        node: node.id.clone(),
        kind: node.kind.type_name(),
        direction: direction.name(),
        port: handle.unwrap_or("<unnamed>").to_string(),
    }
}
