//! Binary comparator node implementation

pub mod functions;

use crate::constants::widths;
use crate::nodes::{NodeCategory, NodeFactory, NodeKind, NodeMetadata};

#[derive(Default)]
pub struct ComparatorNodeFactory;

impl NodeFactory for ComparatorNodeFactory {
    fn metadata() -> NodeMetadata {
        NodeMetadata::new(
            "binaryComparator",
            "Comparator",
            NodeCategory::binary(),
            "Compares two unsigned numbers: A = B, A > B, A < B",
        )
        .with_symbol("A?B")
        .with_tags(vec!["binary", "compare", "magnitude"])
    }

    fn default_kind() -> NodeKind {
        NodeKind::comparator(widths::COMPARATOR_BITS)
    }
}
