//! Binary clock node implementation
//!
//! The clock's outputs depend on the evaluation time, which callers inject so
//! that evaluation stays deterministic.

pub mod functions;

use crate::nodes::{NodeCategory, NodeFactory, NodeKind, NodeMetadata};

#[derive(Default)]
pub struct ClockNodeFactory;

impl NodeFactory for ClockNodeFactory {
    fn metadata() -> NodeMetadata {
        NodeMetadata::new(
            "binaryClock",
            "Binary Clock",
            NodeCategory::input(),
            "Current time as binary hours, minutes and seconds",
        )
        .with_symbol("⏱")
        .with_tags(vec!["input", "clock", "time", "binary"])
    }

    fn default_kind() -> NodeKind {
        NodeKind::BinaryClock
    }
}
