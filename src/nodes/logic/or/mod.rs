//! OR / NOR / XOR node implementation
//!
//! - mod.rs: node metadata and factory implementation
//! - logic.rs: core computation logic

pub mod logic;

pub use logic::OrLogic;

use crate::nodes::{NodeCategory, NodeFactory, NodeKind, NodeMetadata};

/// OR gate over any number of inputs
#[derive(Default)]
pub struct OrNodeFactory;

impl NodeFactory for OrNodeFactory {
    fn metadata() -> NodeMetadata {
        NodeMetadata::new(
            "orGate",
            "OR",
            NodeCategory::gates(),
            "True when any connected input is true",
        )
        .with_symbol("+")
        .with_tags(vec!["logic", "boolean", "or", "gate"])
    }

    fn default_kind() -> NodeKind {
        NodeKind::Or
    }
}

#[derive(Default)]
pub struct NorNodeFactory;

impl NodeFactory for NorNodeFactory {
    fn metadata() -> NodeMetadata {
        NodeMetadata::new(
            "norGate",
            "NOR",
            NodeCategory::gates(),
            "True only when no connected input is true",
        )
        .with_symbol("¬+")
        .with_tags(vec!["logic", "boolean", "nor", "gate", "universal", "latch"])
    }

    fn default_kind() -> NodeKind {
        NodeKind::Nor
    }
}

/// XOR gate; with more than two inputs it reports odd parity
#[derive(Default)]
pub struct XorNodeFactory;

impl NodeFactory for XorNodeFactory {
    fn metadata() -> NodeMetadata {
        NodeMetadata::new(
            "xorGate",
            "XOR",
            NodeCategory::gates(),
            "True when an odd number of connected inputs are true",
        )
        .with_symbol("⊕")
        .with_tags(vec!["logic", "boolean", "xor", "parity", "gate"])
    }

    fn default_kind() -> NodeKind {
        NodeKind::Xor
    }
}
