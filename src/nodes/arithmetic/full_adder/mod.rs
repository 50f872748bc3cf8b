//! Full adder node implementation

pub mod functions;

use crate::nodes::{NodeCategory, NodeFactory, NodeKind, NodeMetadata};

#[derive(Default)]
pub struct FullAdderNodeFactory;

impl NodeFactory for FullAdderNodeFactory {
    fn metadata() -> NodeMetadata {
        NodeMetadata::new(
            "fullAdder",
            "Full Adder",
            NodeCategory::arithmetic(),
            "Adds two bits and a carry-in into a sum and a carry-out",
        )
        .with_symbol("FA")
        .with_tags(vec!["arithmetic", "adder", "sum", "carry", "ripple"])
    }

    fn default_kind() -> NodeKind {
        NodeKind::FullAdder
    }
}
