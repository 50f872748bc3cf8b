//! Multiplexer node implementation

pub mod functions;

use crate::constants::widths;
use crate::nodes::{NodeCategory, NodeFactory, NodeKind, NodeMetadata};

#[derive(Default)]
pub struct MultiplexerNodeFactory;

impl NodeFactory for MultiplexerNodeFactory {
    fn metadata() -> NodeMetadata {
        NodeMetadata::new(
            "multiplexer",
            "Multiplexer",
            NodeCategory::binary(),
            "Selects one data input by the binary select lines",
        )
        .with_symbol("MUX")
        .with_tags(vec!["binary", "multiplexer", "selector"])
    }

    fn default_kind() -> NodeKind {
        NodeKind::multiplexer(widths::MUX_SELECT_BITS)
    }
}
