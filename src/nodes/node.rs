//! Node and edge definitions

use super::factory;
use super::port::{bus_width, encoder_width, select_width, PortSet};
use super::state::NodeState;
use crate::constants::widths;
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

/// Unique identifier for a node
pub type NodeId = String;

/// The kind of a node, with its width parameters
///
/// Serialized under the `type` tag using the editor's names.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum NodeKind {
    #[serde(rename = "switch")]
    Switch,
    #[serde(rename = "led")]
    Led,
    #[serde(rename = "andGate")]
    And,
    #[serde(rename = "orGate")]
    Or,
    #[serde(rename = "notGate")]
    Not,
    #[serde(rename = "nandGate")]
    Nand,
    #[serde(rename = "norGate")]
    Nor,
    #[serde(rename = "xorGate")]
    Xor,
    #[serde(rename = "halfAdder")]
    HalfAdder,
    #[serde(rename = "fullAdder")]
    FullAdder,
    #[serde(rename = "binaryDisplay")]
    BinaryDisplay {
        #[serde(default = "default_display_bits", deserialize_with = "de_bus_width")]
        bits: usize,
    },
    #[serde(rename = "binaryClock")]
    BinaryClock,
    #[serde(rename = "multiLED")]
    MultiLed {
        #[serde(
            rename = "ledCount",
            default = "default_led_count",
            deserialize_with = "de_bus_width"
        )]
        led_count: usize,
    },
    #[serde(rename = "binaryComparator")]
    BinaryComparator {
        #[serde(default = "default_comparator_bits", deserialize_with = "de_bus_width")]
        bits: usize,
    },
    #[serde(rename = "binaryEncoder")]
    BinaryEncoder {
        #[serde(
            rename = "inputSize",
            default = "default_encoder_inputs",
            deserialize_with = "de_encoder_width"
        )]
        input_size: usize,
    },
    #[serde(rename = "binaryDecoder")]
    BinaryDecoder {
        #[serde(
            rename = "inputBits",
            default = "default_decoder_bits",
            deserialize_with = "de_select_width"
        )]
        input_bits: usize,
    },
    #[serde(rename = "multiplexer")]
    Multiplexer {
        #[serde(
            rename = "selectBits",
            default = "default_select_bits",
            deserialize_with = "de_select_width"
        )]
        select_bits: usize,
    },
}

fn default_display_bits() -> usize {
    widths::DISPLAY_BITS
}
fn default_led_count() -> usize {
    widths::MULTI_LED_COUNT
}
fn default_comparator_bits() -> usize {
    widths::COMPARATOR_BITS
}
fn default_encoder_inputs() -> usize {
    widths::ENCODER_INPUTS
}
fn default_decoder_bits() -> usize {
    widths::DECODER_INPUT_BITS
}
fn default_select_bits() -> usize {
    widths::MUX_SELECT_BITS
}

fn de_bus_width<'de, D: Deserializer<'de>>(d: D) -> Result<usize, D::Error> {
    Ok(bus_width(usize::deserialize(d)?))
}
fn de_select_width<'de, D: Deserializer<'de>>(d: D) -> Result<usize, D::Error> {
    Ok(select_width(usize::deserialize(d)?))
}
fn de_encoder_width<'de, D: Deserializer<'de>>(d: D) -> Result<usize, D::Error> {
    Ok(encoder_width(usize::deserialize(d)?))
}

impl NodeKind {
    pub fn display(bits: usize) -> Self {
        NodeKind::BinaryDisplay { bits: bus_width(bits) }
    }

    pub fn multi_led(led_count: usize) -> Self {
        NodeKind::MultiLed { led_count: bus_width(led_count) }
    }

    pub fn comparator(bits: usize) -> Self {
        NodeKind::BinaryComparator { bits: bus_width(bits) }
    }

    pub fn encoder(input_size: usize) -> Self {
        NodeKind::BinaryEncoder { input_size: encoder_width(input_size) }
    }

    pub fn decoder(input_bits: usize) -> Self {
        NodeKind::BinaryDecoder { input_bits: select_width(input_bits) }
    }

    pub fn multiplexer(select_bits: usize) -> Self {
        NodeKind::Multiplexer { select_bits: select_width(select_bits) }
    }

    /// The serialized `type` name
    pub fn type_name(&self) -> &'static str {
        match self {
            NodeKind::Switch => "switch",
            NodeKind::Led => "led",
            NodeKind::And => "andGate",
            NodeKind::Or => "orGate",
            NodeKind::Not => "notGate",
            NodeKind::Nand => "nandGate",
            NodeKind::Nor => "norGate",
            NodeKind::Xor => "xorGate",
            NodeKind::HalfAdder => "halfAdder",
            NodeKind::FullAdder => "fullAdder",
            NodeKind::BinaryDisplay { .. } => "binaryDisplay",
            NodeKind::BinaryClock => "binaryClock",
            NodeKind::MultiLed { .. } => "multiLED",
            NodeKind::BinaryComparator { .. } => "binaryComparator",
            NodeKind::BinaryEncoder { .. } => "binaryEncoder",
            NodeKind::BinaryDecoder { .. } => "binaryDecoder",
            NodeKind::Multiplexer { .. } => "multiplexer",
        }
    }

    /// Human-readable name from the node catalogue
    pub fn display_name(&self) -> &'static str {
        factory::metadata_for(self).display_name
    }

    /// Declared ports at this kind's width
    pub fn ports(&self) -> PortSet {
        PortSet::for_kind(self)
    }

    pub fn is_switch(&self) -> bool {
        matches!(self, NodeKind::Switch)
    }

    pub fn is_adder(&self) -> bool {
        matches!(self, NodeKind::HalfAdder | NodeKind::FullAdder)
    }

    /// Whether the kind is a truth-table observable
    pub fn is_observable(&self) -> bool {
        matches!(
            self,
            NodeKind::Led
                | NodeKind::HalfAdder
                | NodeKind::FullAdder
                | NodeKind::BinaryDisplay { .. }
                | NodeKind::MultiLed { .. }
        )
    }
}

/// A circuit node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "NodeRecord")]
pub struct Node {
    pub id: NodeId,
    #[serde(flatten)]
    pub kind: NodeKind,
    #[serde(default)]
    pub label: String,
    pub data: NodeState,
}

impl Node {
    /// Creates a node with a fresh id and the kind's default state
    pub fn new(kind: NodeKind, label: impl Into<String>) -> Self {
        let id = format!("{}-{}", kind.type_name(), Uuid::new_v4());
        Self::with_id(id, kind, label)
    }

    /// Creates a node with a caller-chosen id
    pub fn with_id(id: impl Into<NodeId>, kind: NodeKind, label: impl Into<String>) -> Self {
        let data = NodeState::default_for(&kind);
        Self {
            id: id.into(),
            kind,
            label: label.into(),
            data,
        }
    }

    /// Creates a switch in the given position
    pub fn switch(label: impl Into<String>, on: bool) -> Self {
        let mut node = Self::new(NodeKind::Switch, label);
        node.data = NodeState::Switch { state: on };
        node
    }

    /// The switch position, or false for any other kind
    pub fn switch_state(&self) -> bool {
        match (&self.kind, &self.data) {
            (NodeKind::Switch, NodeState::Switch { state }) => *state,
            _ => false,
        }
    }

    /// The label, falling back to the kind's display name
    pub fn display_label(&self) -> &str {
        if self.label.is_empty() {
            self.kind.display_name()
        } else {
            &self.label
        }
    }

    pub fn ports(&self) -> PortSet {
        self.kind.ports()
    }
}

/// Loose on-disk form of a node; `data` that does not fit the kind is reset.
///
/// Width parameters are read from the top level or, as the editor stores
/// them, from inside `data`.
#[derive(Deserialize)]
struct NodeRecord {
    #[serde(default)]
    id: NodeId,
    #[serde(rename = "type")]
    node_type: String,
    #[serde(default)]
    label: Option<String>,
    #[serde(default)]
    data: serde_json::Value,
    #[serde(flatten)]
    rest: serde_json::Map<String, serde_json::Value>,
}

impl TryFrom<NodeRecord> for Node {
    type Error = serde_json::Error;

    fn try_from(record: NodeRecord) -> Result<Self, Self::Error> {
        let mut fields = record.data.as_object().cloned().unwrap_or_default();
        fields.extend(record.rest);
        fields.insert("type".to_string(), serde_json::Value::String(record.node_type));
        let kind: NodeKind = serde_json::from_value(serde_json::Value::Object(fields))?;

        let label = record
            .label
            .or_else(|| record.data.get("label").and_then(|l| l.as_str()).map(String::from))
            .unwrap_or_default();

        let data = serde_json::from_value::<NodeState>(record.data.clone())
            .ok()
            .filter(|state| state.matches(&kind))
            .unwrap_or_else(|| match kind {
                NodeKind::Switch => NodeState::Switch {
                    state: record.data.get("state").and_then(|s| s.as_bool()).unwrap_or(false),
                },
                _ => NodeState::default_for(&kind),
            });

        let id = if record.id.is_empty() {
            format!("{}-{}", kind.type_name(), Uuid::new_v4())
        } else {
            record.id
        };

        Ok(Self { id, kind, label, data })
    }
}

/// A directed signal from one node's output port to another node's input port
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Edge {
    #[serde(default)]
    pub id: String,
    pub source: NodeId,
    pub target: NodeId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_handle: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_handle: Option<String>,
}

impl Edge {
    /// Creates an edge between two named ports
    pub fn new(
        source: impl Into<NodeId>,
        source_handle: Option<&str>,
        target: impl Into<NodeId>,
        target_handle: Option<&str>,
    ) -> Self {
        Self {
            id: format!("edge-{}", Uuid::new_v4()),
            source: source.into(),
            target: target.into(),
            source_handle: source_handle.map(String::from),
            target_handle: target_handle.map(String::from),
        }
    }

    /// Creates an edge with no port names on either end
    pub fn between(source: impl Into<NodeId>, target: impl Into<NodeId>) -> Self {
        Self::new(source, None, target, None)
    }

    /// Creates an edge from a primary output to a named input
    pub fn feeding(source: impl Into<NodeId>, target: impl Into<NodeId>, target_handle: &str) -> Self {
        Self::new(source, None, target, Some(target_handle))
    }
}
