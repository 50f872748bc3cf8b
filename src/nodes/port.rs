//! Port naming and per-kind port sets

use super::node::NodeKind;
use crate::constants::{clock, limits};
use serde::{Deserialize, Serialize};

/// Index of a port within its direction
pub type PortId = usize;

/// Type of port (input or output)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PortType {
    Input,
    Output,
}

impl PortType {
    pub fn name(&self) -> &'static str {
        match self {
            PortType::Input => "input",
            PortType::Output => "output",
        }
    }
}

/// A named connection point on a node
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Port {
    pub id: PortId,
    pub name: String,
    pub port_type: PortType,
}

impl Port {
    /// Creates a new port
    pub fn new(id: PortId, name: impl Into<String>, port_type: PortType) -> Self {
        Self {
            id,
            name: name.into(),
            port_type,
        }
    }
}

/// The declared input and output ports of one node kind at its configured width
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortSet {
    pub inputs: Vec<Port>,
    pub outputs: Vec<Port>,
    /// Gates and LEDs read every incoming edge rather than one value per port
    pub variadic: bool,
}

impl PortSet {
    fn build(inputs: Vec<String>, outputs: Vec<String>, variadic: bool) -> Self {
        Self {
            inputs: inputs
                .into_iter()
                .enumerate()
                .map(|(i, name)| Port::new(i, name, PortType::Input))
                .collect(),
            outputs: outputs
                .into_iter()
                .enumerate()
                .map(|(i, name)| Port::new(i, name, PortType::Output))
                .collect(),
            variadic,
        }
    }

    /// Port set for a node kind
    pub fn for_kind(kind: &NodeKind) -> Self {
        let named = |names: &[&str]| names.iter().map(|s| s.to_string()).collect::<Vec<_>>();
        match kind {
            NodeKind::Switch => Self::build(vec![], named(&["out"]), false),
            NodeKind::Led => Self::build(named(&["in"]), vec![], true),
            NodeKind::And | NodeKind::Or | NodeKind::Nand | NodeKind::Nor | NodeKind::Xor => {
                Self::build(named(&["in1", "in2"]), named(&["out"]), true)
            }
            NodeKind::Not => Self::build(named(&["in"]), named(&["out"]), false),
            NodeKind::HalfAdder => Self::build(named(&["a", "b"]), named(&["sum", "carry"]), false),
            NodeKind::FullAdder => {
                Self::build(named(&["a", "b", "cin"]), named(&["sum", "cout"]), false)
            }
            NodeKind::BinaryDisplay { bits } => {
                Self::build(indexed_names("bit", bus_width(*bits)), named(&["out"]), false)
            }
            NodeKind::MultiLed { led_count } => {
                Self::build(indexed_names("led", bus_width(*led_count)), named(&["out"]), false)
            }
            NodeKind::BinaryComparator { bits } => {
                let width = bus_width(*bits);
                let mut inputs = indexed_names("a", width);
                inputs.extend(indexed_names("b", width));
                Self::build(inputs, named(&["equal", "greater", "less"]), false)
            }
            NodeKind::BinaryEncoder { input_size } => {
                let size = encoder_width(*input_size);
                let mut outputs = indexed_names("out", encoder_output_bits(size));
                outputs.push("valid".to_string());
                Self::build(indexed_names("in", size), outputs, false)
            }
            NodeKind::BinaryDecoder { input_bits } => {
                let bits = select_width(*input_bits);
                let mut inputs = indexed_names("in", bits);
                inputs.push("enable".to_string());
                Self::build(inputs, indexed_names("out", 1 << bits), false)
            }
            NodeKind::Multiplexer { select_bits } => {
                let bits = select_width(*select_bits);
                let mut inputs = indexed_names("data", 1 << bits);
                inputs.extend(indexed_names("select", bits));
                inputs.push("enable".to_string());
                Self::build(inputs, named(&["output"]), false)
            }
            NodeKind::BinaryClock => {
                let mut outputs = indexed_names("hour", clock::FIELD_BITS);
                outputs.extend(indexed_names("minute", clock::FIELD_BITS));
                outputs.extend(indexed_names("second", clock::FIELD_BITS));
                Self::build(vec![], outputs, false)
            }
        }
    }

    /// Whether an edge arriving on `handle` feeds a recognized input
    pub fn accepts_input(&self, handle: Option<&str>) -> bool {
        if self.variadic {
            return match handle {
                None => true,
                Some("in") => true,
                Some(name) => indexed(name, "in").is_some(),
            };
        }
        match handle {
            // Unported edges are placed positionally
            None => !self.inputs.is_empty(),
            Some(name) => self.inputs.iter().any(|p| p.name == name),
        }
    }

    /// Whether the kind exposes an output named `handle` (None = primary output)
    pub fn has_output(&self, handle: Option<&str>) -> bool {
        match handle {
            None => !self.outputs.is_empty(),
            Some("out") => !self.outputs.is_empty(),
            Some("carry") | Some("carryOut") => {
                self.outputs.iter().any(|p| p.name == "carry" || p.name == "cout")
            }
            Some(name) => self.outputs.iter().any(|p| p.name == name),
        }
    }

    pub fn input_names(&self) -> Vec<&str> {
        self.inputs.iter().map(|p| p.name.as_str()).collect()
    }

    pub fn output_names(&self) -> Vec<&str> {
        self.outputs.iter().map(|p| p.name.as_str()).collect()
    }
}

/// Parses `prefix<digits>` into its index
pub fn indexed(name: &str, prefix: &str) -> Option<usize> {
    let digits = name.strip_prefix(prefix)?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

/// `prefix0..prefix(n-1)`
pub fn indexed_names(prefix: &str, n: usize) -> Vec<String> {
    (0..n).map(|i| format!("{}{}", prefix, i)).collect()
}

/// Clamp a display, LED bar or comparator width
pub fn bus_width(n: usize) -> usize {
    n.clamp(1, limits::MAX_BUS_WIDTH)
}

/// Clamp a decoder input or multiplexer select width
pub fn select_width(n: usize) -> usize {
    n.clamp(1, limits::MAX_SELECT_BITS)
}

/// Clamp an encoder input count
pub fn encoder_width(n: usize) -> usize {
    n.clamp(1, limits::MAX_ENCODER_INPUTS)
}

/// Output bit count of an encoder with `size` inputs: ceil(log2 size)
pub fn encoder_output_bits(size: usize) -> usize {
    if size <= 1 {
        0
    } else {
        (usize::BITS - (size - 1).leading_zeros()) as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indexed_parsing() {
        assert_eq!(indexed("in3", "in"), Some(3));
        assert_eq!(indexed("bit12", "bit"), Some(12));
        assert_eq!(indexed("in", "in"), None);
        assert_eq!(indexed("input", "in"), None);
        assert_eq!(indexed("out1", "in"), None);
    }

    #[test]
    fn test_encoder_output_bits() {
        assert_eq!(encoder_output_bits(1), 0);
        assert_eq!(encoder_output_bits(2), 1);
        assert_eq!(encoder_output_bits(4), 2);
        assert_eq!(encoder_output_bits(5), 3);
        assert_eq!(encoder_output_bits(8), 3);
        assert_eq!(encoder_output_bits(9), 4);
    }

    #[test]
    fn test_gate_ports_are_variadic() {
        let ports = PortSet::for_kind(&NodeKind::And);
        assert!(ports.variadic);
        assert!(ports.accepts_input(None));
        assert!(ports.accepts_input(Some("in1")));
        assert!(ports.accepts_input(Some("in7")));
        assert!(!ports.accepts_input(Some("a")));
    }

    #[test]
    fn test_multiplexer_ports() {
        let ports = PortSet::for_kind(&NodeKind::Multiplexer { select_bits: 2 });
        assert_eq!(
            ports.input_names(),
            vec!["data0", "data1", "data2", "data3", "select0", "select1", "enable"]
        );
        assert_eq!(ports.output_names(), vec!["output"]);
        assert!(ports.inputs.iter().all(|p| p.port_type == PortType::Input));
        assert!(ports.has_output(Some("out")));
        assert!(!ports.accepts_input(Some("data4")));
    }

    #[test]
    fn test_widths_are_clamped() {
        let ports = PortSet::for_kind(&NodeKind::BinaryDecoder { input_bits: 40 });
        assert_eq!(ports.outputs.len(), 1 << limits::MAX_SELECT_BITS);
        let ports = PortSet::for_kind(&NodeKind::BinaryDisplay { bits: 0 });
        assert_eq!(ports.input_names(), vec!["bit0"]);
    }

    #[test]
    fn test_encoder_ports() {
        let ports = PortSet::for_kind(&NodeKind::BinaryEncoder { input_size: 8 });
        assert_eq!(ports.inputs.len(), 8);
        assert_eq!(ports.output_names(), vec!["out0", "out1", "out2", "valid"]);
    }
}
