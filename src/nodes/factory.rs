//! Node catalogue: per-kind metadata and node creation

use super::node::{Node, NodeKind};
use super::port::PortSet;
use crate::nodes::{arithmetic, binary, data, logic, output};
use serde_json::{json, Value};

/// Hierarchical category system for organizing nodes
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NodeCategory {
    path: Vec<String>,
}

impl NodeCategory {
    /// Create a new category from path components
    pub fn new(path: &[&str]) -> Self {
        Self {
            path: path.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Get display string for listings
    pub fn display_string(&self) -> String {
        self.path.join(" > ")
    }

    pub fn gates() -> Self {
        Self::new(&["Logic", "Gates"])
    }
    pub fn arithmetic() -> Self {
        Self::new(&["Logic", "Arithmetic"])
    }
    pub fn binary() -> Self {
        Self::new(&["Logic", "Binary"])
    }
    pub fn input() -> Self {
        Self::new(&["Input"])
    }
    pub fn output() -> Self {
        Self::new(&["Output"])
    }
}

/// Descriptive metadata for one node kind
#[derive(Debug, Clone)]
pub struct NodeMetadata {
    pub node_type: &'static str,
    pub display_name: &'static str,
    pub description: &'static str,
    pub category: NodeCategory,
    pub symbol: &'static str,
    pub tags: Vec<&'static str>,
}

impl NodeMetadata {
    pub fn new(
        node_type: &'static str,
        display_name: &'static str,
        category: NodeCategory,
        description: &'static str,
    ) -> Self {
        Self {
            node_type,
            display_name,
            description,
            category,
            symbol: "",
            tags: vec![],
        }
    }

    pub fn with_symbol(mut self, symbol: &'static str) -> Self {
        self.symbol = symbol;
        self
    }

    pub fn with_tags(mut self, tags: Vec<&'static str>) -> Self {
        self.tags = tags;
        self
    }
}

/// Node factory trait: metadata plus creation at the default width
pub trait NodeFactory {
    fn metadata() -> NodeMetadata
    where
        Self: Sized;

    /// Kind produced by `create`
    fn default_kind() -> NodeKind
    where
        Self: Sized;

    /// Create a node with a fresh id
    fn create(label: &str) -> Node
    where
        Self: Sized,
    {
        Node::new(Self::default_kind(), label)
    }
}

/// Metadata for any node kind
pub fn metadata_for(kind: &NodeKind) -> NodeMetadata {
    match kind {
        NodeKind::Switch => data::SwitchNodeFactory::metadata(),
        NodeKind::Led => output::LedNodeFactory::metadata(),
        NodeKind::And => logic::AndNodeFactory::metadata(),
        NodeKind::Nand => logic::NandNodeFactory::metadata(),
        NodeKind::Or => logic::OrNodeFactory::metadata(),
        NodeKind::Nor => logic::NorNodeFactory::metadata(),
        NodeKind::Xor => logic::XorNodeFactory::metadata(),
        NodeKind::Not => logic::NotNodeFactory::metadata(),
        NodeKind::HalfAdder => arithmetic::HalfAdderNodeFactory::metadata(),
        NodeKind::FullAdder => arithmetic::FullAdderNodeFactory::metadata(),
        NodeKind::BinaryDisplay { .. } => output::DisplayNodeFactory::metadata(),
        NodeKind::MultiLed { .. } => output::MultiLedNodeFactory::metadata(),
        NodeKind::BinaryClock => data::ClockNodeFactory::metadata(),
        NodeKind::BinaryComparator { .. } => binary::ComparatorNodeFactory::metadata(),
        NodeKind::BinaryEncoder { .. } => binary::EncoderNodeFactory::metadata(),
        NodeKind::BinaryDecoder { .. } => binary::DecoderNodeFactory::metadata(),
        NodeKind::Multiplexer { .. } => binary::MultiplexerNodeFactory::metadata(),
    }
}

/// One catalogue row: metadata, the default kind and its ports
pub struct CatalogueEntry {
    pub metadata: NodeMetadata,
    pub kind: NodeKind,
    pub ports: PortSet,
}

impl CatalogueEntry {
    /// JSON row for catalogue listings
    pub fn summary(&self) -> Value {
        json!({
            "type": self.metadata.node_type,
            "name": self.metadata.display_name,
            "symbol": self.metadata.symbol,
            "category": self.metadata.category.display_string(),
            "description": self.metadata.description,
            "tags": self.metadata.tags,
            "inputs": self.ports.input_names(),
            "outputs": self.ports.output_names(),
        })
    }
}

fn entry<F: NodeFactory>() -> CatalogueEntry {
    let kind = F::default_kind();
    CatalogueEntry {
        metadata: F::metadata(),
        ports: kind.ports(),
        kind,
    }
}

/// Every node kind at its default width, in menu order
pub fn catalogue() -> Vec<CatalogueEntry> {
    vec![
        entry::<data::SwitchNodeFactory>(),
        entry::<data::ClockNodeFactory>(),
        entry::<logic::AndNodeFactory>(),
        entry::<logic::OrNodeFactory>(),
        entry::<logic::NotNodeFactory>(),
        entry::<logic::NandNodeFactory>(),
        entry::<logic::NorNodeFactory>(),
        entry::<logic::XorNodeFactory>(),
        entry::<arithmetic::HalfAdderNodeFactory>(),
        entry::<arithmetic::FullAdderNodeFactory>(),
        entry::<binary::ComparatorNodeFactory>(),
        entry::<binary::EncoderNodeFactory>(),
        entry::<binary::DecoderNodeFactory>(),
        entry::<binary::MultiplexerNodeFactory>(),
        entry::<output::LedNodeFactory>(),
        entry::<output::DisplayNodeFactory>(),
        entry::<output::MultiLedNodeFactory>(),
    ]
}
