//! Half adder node implementation

pub mod functions;

use crate::nodes::{NodeCategory, NodeFactory, NodeKind, NodeMetadata};

#[derive(Default)]
pub struct HalfAdderNodeFactory;

impl NodeFactory for HalfAdderNodeFactory {
    fn metadata() -> NodeMetadata {
        NodeMetadata::new(
            "halfAdder",
            "Half Adder",
            NodeCategory::arithmetic(),
            "Adds two bits into a sum and a carry",
        )
        .with_symbol("HA")
        .with_tags(vec!["arithmetic", "adder", "sum", "carry"])
    }

    fn default_kind() -> NodeKind {
        NodeKind::HalfAdder
    }
}
