//! NOT node implementation

pub mod logic;

pub use logic::NotLogic;

use crate::nodes::{NodeCategory, NodeFactory, NodeKind, NodeMetadata};

/// NOT logic node that performs boolean inversion
#[derive(Default)]
pub struct NotNodeFactory;

impl NodeFactory for NotNodeFactory {
    fn metadata() -> NodeMetadata {
        NodeMetadata::new(
            "notGate",
            "NOT",
            NodeCategory::gates(),
            "Inverts its single input",
        )
        .with_symbol("¬")
        .with_tags(vec!["logic", "boolean", "not", "invert", "gate"])
    }

    fn default_kind() -> NodeKind {
        NodeKind::Not
    }
}
