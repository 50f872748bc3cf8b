//! AND / NAND node implementation
//!
//! - mod.rs: node metadata and factory implementation
//! - logic.rs: core computation logic

pub mod logic;

pub use logic::AndLogic;

use crate::nodes::{NodeCategory, NodeFactory, NodeKind, NodeMetadata};

/// AND gate over any number of inputs
#[derive(Default)]
pub struct AndNodeFactory;

impl NodeFactory for AndNodeFactory {
    fn metadata() -> NodeMetadata {
        NodeMetadata::new(
            "andGate",
            "AND",
            NodeCategory::gates(),
            "True when every connected input is true",
        )
        .with_symbol("•")
        .with_tags(vec!["logic", "boolean", "and", "gate"])
    }

    fn default_kind() -> NodeKind {
        NodeKind::And
    }
}

/// NAND gate over any number of inputs
#[derive(Default)]
pub struct NandNodeFactory;

impl NodeFactory for NandNodeFactory {
    fn metadata() -> NodeMetadata {
        NodeMetadata::new(
            "nandGate",
            "NAND",
            NodeCategory::gates(),
            "False only when every connected input is true",
        )
        .with_symbol("¬•")
        .with_tags(vec!["logic", "boolean", "nand", "gate", "universal"])
    }

    fn default_kind() -> NodeKind {
        NodeKind::Nand
    }
}
