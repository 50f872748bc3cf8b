//! Switch node implementation
//!
//! A switch has no inputs and is never written by evaluation; its position is
//! the only user-controlled state in a circuit.

use crate::nodes::{NodeCategory, NodeFactory, NodeKind, NodeMetadata};

#[derive(Default)]
pub struct SwitchNodeFactory;

impl NodeFactory for SwitchNodeFactory {
    fn metadata() -> NodeMetadata {
        NodeMetadata::new(
            "switch",
            "Switch",
            NodeCategory::input(),
            "User-controlled input bit",
        )
        .with_symbol("⏻")
        .with_tags(vec!["input", "switch", "toggle"])
    }

    fn default_kind() -> NodeKind {
        NodeKind::Switch
    }
}
