//! Boolean expression synthesis
//!
//! Walks the graph backward from every observable output and renders the
//! signal that reaches it as an expression over switch labels. Sub-expressions
//! are memoized per `(node, output)` across the whole call; a per-output
//! visiting set cuts feedback loops short with a `[id]` placeholder.

use super::observables;
use super::simplify::simplify_expression;
use crate::constants::clock::FIELD_BITS;
use crate::constants::glyph::{AND, FALSE, NOT, OR, TRUE, UNKNOWN, XOR};
use crate::nodes::graph::{InputIndex, PortBindings};
use crate::nodes::node::{Edge, Node, NodeKind};
use crate::nodes::port::{bus_width, encoder_output_bits, encoder_width, indexed, select_width};
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap, HashSet};

/// Expression for one observable output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputExpression {
    pub label: String,
    pub expression: String,
}

/// Generates expressions for every observable output of a circuit
///
/// Switches expand to their labels and any other node without input edges
/// to `0`. Binary clocks are the exception: having no inputs, each clock
/// output is its own variable `label.port`, e.g. `Clock.second5`.
#[derive(Debug, Clone, Copy)]
pub struct ExpressionGenerator {
    simplify: bool,
}

impl Default for ExpressionGenerator {
    fn default() -> Self {
        Self { simplify: true }
    }
}

impl ExpressionGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Generator that skips the identity simplifier
    pub fn raw() -> Self {
        Self { simplify: false }
    }

    /// Keyed by LED or component id, `{id}_sum` / `{id}_carry` for adders
    pub fn generate(&self, nodes: &[Node], edges: &[Edge]) -> BTreeMap<String, OutputExpression> {
        let mut synthesis = Synthesis::new(nodes, edges);
        let mut expressions = BTreeMap::new();

        for node in observables(nodes) {
            let label = node.display_label();
            if node.kind.is_adder() {
                for (output, suffix) in [("sum", "Sum"), ("carry", "Carry")] {
                    let expression = synthesis.expand_output(&node.id, output);
                    expressions.insert(
                        format!("{}_{}", node.id, output),
                        self.finish(format!("{}_{}", label, suffix), expression),
                    );
                }
            } else {
                let expression = synthesis.expand_output(&node.id, "out");
                expressions.insert(node.id.clone(), self.finish(label.to_string(), expression));
            }
        }

        debug!(
            "Generated {} expressions ({} memoized signals)",
            expressions.len(),
            synthesis.memo.len()
        );
        expressions
    }

    fn finish(&self, label: String, expression: String) -> OutputExpression {
        let expression = if expression.is_empty() {
            UNKNOWN.to_string()
        } else if self.simplify {
            simplify_expression(&expression)
        } else {
            expression
        };
        OutputExpression { label, expression }
    }
}

type SignalKey = (String, String);

/// State of one generation call
struct Synthesis<'a> {
    nodes: HashMap<&'a str, &'a Node>,
    inputs: InputIndex<'a>,
    memo: HashMap<SignalKey, String>,
    visiting: HashSet<SignalKey>,
}

impl<'a> Synthesis<'a> {
    fn new(nodes: &'a [Node], edges: &'a [Edge]) -> Self {
        Self {
            nodes: nodes.iter().map(|n| (n.id.as_str(), n)).collect(),
            inputs: InputIndex::new(edges),
            memo: HashMap::new(),
            visiting: HashSet::new(),
        }
    }

    /// Expand a top-level output with a fresh visiting set
    fn expand_output(&mut self, node_id: &str, output: &str) -> String {
        self.visiting.clear();
        self.expand(node_id, output)
    }

    fn expand(&mut self, node_id: &str, output: &str) -> String {
        let key = (node_id.to_string(), output.to_string());
        if let Some(expression) = self.memo.get(&key) {
            return expression.clone();
        }
        let node = match self.nodes.get(node_id).copied() {
            Some(node) => node,
            None => return UNKNOWN.to_string(),
        };
        if !self.visiting.insert(key.clone()) {
            return placeholder(node_id, output);
        }

        let expression = self.build(node, output);

        self.visiting.remove(&key);
        self.memo.insert(key, expression.clone());
        expression
    }

    /// Expression of whatever drives `edge`
    fn source(&mut self, edge: &Edge) -> String {
        let node = match self.nodes.get(edge.source.as_str()).copied() {
            Some(node) => node,
            None => return UNKNOWN.to_string(),
        };
        match output_name(&node.kind, edge.source_handle.as_deref()) {
            Some(output) => self.expand(&node.id, &output),
            None => FALSE.to_string(),
        }
    }

    /// Expression on a named input; unconnected reads `0`
    fn port(&mut self, bindings: &PortBindings<'a>, name: &str) -> String {
        match bindings.get(name) {
            Some(edge) => self.source(edge),
            None => FALSE.to_string(),
        }
    }

    fn ports(&mut self, bindings: &PortBindings<'a>, prefix: &str, n: usize) -> Vec<String> {
        (0..n)
            .map(|i| self.port(bindings, &format!("{}{}", prefix, i)))
            .collect()
    }

    fn build(&mut self, node: &'a Node, output: &str) -> String {
        match &node.kind {
            NodeKind::Switch => return node.display_label().to_string(),
            NodeKind::BinaryClock => return format!("{}.{}", node.display_label(), output),
            _ => {}
        }

        let ports = node.ports();
        let bindings = PortBindings::bind(&ports, self.inputs.get(&node.id));
        if bindings.ordered.is_empty() {
            return FALSE.to_string();
        }

        match &node.kind {
            NodeKind::Led | NodeKind::Or => join(&self.operands(&bindings), OR),
            NodeKind::And => join(&self.operands(&bindings), AND),
            NodeKind::Xor => join(&self.operands(&bindings), XOR),
            NodeKind::Nand => negate(&join(&self.operands(&bindings), AND)),
            NodeKind::Nor => negate(&join(&self.operands(&bindings), OR)),
            NodeKind::Not => negate(&self.port(&bindings, "in")),
            NodeKind::HalfAdder => {
                let a = self.port(&bindings, "a");
                let b = self.port(&bindings, "b");
                match output {
                    "sum" => join(&[a, b], XOR),
                    _ => join(&[a, b], AND),
                }
            }
            NodeKind::FullAdder => {
                let a = self.port(&bindings, "a");
                let b = self.port(&bindings, "b");
                let cin = self.port(&bindings, "cin");
                match output {
                    "sum" => join(&[a, b, cin], XOR),
                    _ => {
                        let generate = join(&[a.clone(), b.clone()], AND);
                        let propagate = join(&[cin, join(&[a, b], XOR)], AND);
                        join(&[generate, propagate], OR)
                    }
                }
            }
            NodeKind::BinaryDisplay { .. } => self.port(&bindings, "bit0"),
            NodeKind::MultiLed { led_count } => {
                let connected: Vec<&Edge> = (0..bus_width(*led_count))
                    .filter_map(|i| bindings.get(&format!("led{}", i)))
                    .collect();
                let leds: Vec<String> = connected.into_iter().map(|edge| self.source(edge)).collect();
                join(&leds, OR)
            }
            NodeKind::BinaryComparator { bits } => self.comparator(&bindings, *bits, output),
            NodeKind::BinaryEncoder { input_size } => self.encoder(&bindings, *input_size, output),
            NodeKind::BinaryDecoder { input_bits } => self.decoder(&bindings, *input_bits, output),
            NodeKind::Multiplexer { select_bits } => self.multiplexer(&bindings, *select_bits),
            NodeKind::Switch | NodeKind::BinaryClock => FALSE.to_string(),
        }
    }

    fn operands(&mut self, bindings: &PortBindings<'a>) -> Vec<String> {
        bindings.ordered.iter().map(|edge| self.source(edge)).collect()
    }

    fn comparator(&mut self, bindings: &PortBindings<'a>, bits: usize, output: &str) -> String {
        let width = bus_width(bits);
        let a = self.ports(bindings, "a", width);
        let b = self.ports(bindings, "b", width);
        let same: Vec<String> = a.iter().zip(&b).map(|(x, y)| xnor(x, y)).collect();

        // Bit 0 is the most significant; the first differing bit decides
        let decided_by = |wins: &[String], loses: &[String]| {
            any((0..width).map(|i| {
                let mut terms = vec![wins[i].clone(), not(&loses[i])];
                terms.extend(same[..i].iter().cloned());
                all(terms)
            }))
        };

        match output {
            "greater" => decided_by(a.as_slice(), b.as_slice()),
            "less" => decided_by(b.as_slice(), a.as_slice()),
            _ => all(same.clone()),
        }
    }

    fn encoder(&mut self, bindings: &PortBindings<'a>, input_size: usize, output: &str) -> String {
        let size = encoder_width(input_size);
        let inputs = self.ports(bindings, "in", size);

        if output == "valid" {
            return any(inputs);
        }
        let output_bits = encoder_output_bits(size);
        let bit = match indexed(output, "out") {
            Some(k) if k < output_bits => output_bits - 1 - k,
            _ => return FALSE.to_string(),
        };

        // Highest active input wins
        let selected = |i: usize| {
            let mut terms = vec![inputs[i].clone()];
            terms.extend(inputs[i + 1..].iter().map(|x| not(x)));
            all(terms)
        };
        any((0..size).filter(|i| (i >> bit) & 1 == 1).map(selected))
    }

    fn decoder(&mut self, bindings: &PortBindings<'a>, input_bits: usize, output: &str) -> String {
        let bits = select_width(input_bits);
        let value = match indexed(output, "out") {
            Some(value) if value < 1 << bits => value,
            _ => return FALSE.to_string(),
        };
        let inputs = self.ports(bindings, "in", bits);
        let enable = self.enable(bindings);

        let mut terms = vec![enable];
        terms.extend(minterm(&inputs, value));
        all(terms)
    }

    fn multiplexer(&mut self, bindings: &PortBindings<'a>, select_bits: usize) -> String {
        let bits = select_width(select_bits);
        let data = self.ports(bindings, "data", 1 << bits);
        let select = self.ports(bindings, "select", bits);
        let enable = self.enable(bindings);

        let routed = any(data.iter().enumerate().map(|(m, d)| {
            let mut terms = vec![d.clone()];
            terms.extend(minterm(&select, m));
            all(terms)
        }));
        all(vec![enable, routed])
    }

    /// Unconnected enable is active
    fn enable(&mut self, bindings: &PortBindings<'a>) -> String {
        match bindings.get("enable") {
            Some(edge) => self.source(edge),
            None => TRUE.to_string(),
        }
    }
}

/// Canonical output read through a source handle, `None` when the kind has no
/// such output
fn output_name(kind: &NodeKind, handle: Option<&str>) -> Option<String> {
    let handle = match handle {
        None | Some("out") => {
            let primary = match kind {
                NodeKind::HalfAdder | NodeKind::FullAdder => "sum".to_string(),
                NodeKind::BinaryComparator { .. } => "equal".to_string(),
                NodeKind::BinaryEncoder { .. } => "valid".to_string(),
                NodeKind::BinaryDecoder { .. } => "out0".to_string(),
                NodeKind::Multiplexer { .. } => "output".to_string(),
                NodeKind::BinaryClock => format!("second{}", FIELD_BITS - 1),
                _ => "out".to_string(),
            };
            return Some(primary);
        }
        Some(handle) => handle,
    };

    let name = match kind {
        NodeKind::HalfAdder | NodeKind::FullAdder => match handle {
            "sum" => "sum",
            "carry" | "cout" | "carryOut" => "carry",
            _ => return None,
        },
        NodeKind::BinaryComparator { .. } => match handle {
            "equal" | "greater" | "less" => handle,
            _ => return None,
        },
        NodeKind::BinaryEncoder { input_size } => match indexed(handle, "out") {
            Some(k) if k < encoder_output_bits(encoder_width(*input_size)) => handle,
            _ if handle == "valid" => handle,
            _ => return None,
        },
        NodeKind::BinaryDecoder { input_bits } => match indexed(handle, "out") {
            Some(k) if k < 1 << select_width(*input_bits) => handle,
            _ => return None,
        },
        NodeKind::Multiplexer { .. } if handle == "output" => handle,
        NodeKind::BinaryClock => {
            let in_field = ["hour", "minute", "second"]
                .iter()
                .any(|prefix| matches!(indexed(handle, prefix), Some(i) if i < FIELD_BITS));
            if !in_field {
                return None;
            }
            handle
        }
        _ => return None,
    };
    Some(name.to_string())
}

fn placeholder(node_id: &str, output: &str) -> String {
    if output == "out" {
        format!("[{}]", node_id)
    } else {
        format!("[{}_{}]", node_id, output)
    }
}

/// Gate form: a single operand stands alone, two or more are parenthesised
fn join(operands: &[String], op: &str) -> String {
    match operands {
        [] => FALSE.to_string(),
        [single] => single.clone(),
        _ => format!("({})", operands.join(op)),
    }
}

fn negate(expression: &str) -> String {
    if expression.starts_with('(') || expression.starts_with(NOT) || !expression.contains(' ') {
        format!("{}{}", NOT, expression)
    } else {
        format!("{}({})", NOT, expression)
    }
}

// Composite components are expanded with constants folded so that unconnected
// pins drop out instead of flooding the expression with `0` terms.

fn not(expression: &str) -> String {
    match expression {
        FALSE => TRUE.to_string(),
        TRUE => FALSE.to_string(),
        _ => negate(expression),
    }
}

fn xnor(x: &str, y: &str) -> String {
    match (x, y) {
        (FALSE, other) | (other, FALSE) => not(other),
        (TRUE, other) | (other, TRUE) => other.to_string(),
        _ => negate(&join(&[x.to_string(), y.to_string()], XOR)),
    }
}

fn all(terms: impl IntoIterator<Item = String>) -> String {
    let mut kept = Vec::new();
    for term in terms {
        match term.as_str() {
            FALSE => return FALSE.to_string(),
            TRUE => {}
            _ => kept.push(term),
        }
    }
    if kept.is_empty() {
        TRUE.to_string()
    } else {
        join(&kept, AND)
    }
}

fn any(terms: impl IntoIterator<Item = String>) -> String {
    let mut kept = Vec::new();
    for term in terms {
        match term.as_str() {
            TRUE => return TRUE.to_string(),
            FALSE => {}
            _ => kept.push(term),
        }
    }
    join(&kept, OR)
}

/// Literals selecting `value` on an MSB-first bus
fn minterm(bus: &[String], value: usize) -> Vec<String> {
    let width = bus.len();
    bus.iter()
        .enumerate()
        .map(|(j, x)| {
            if (value >> (width - 1 - j)) & 1 == 1 {
                x.clone()
            } else {
                not(x)
            }
        })
        .collect()
}
