//! Binary display node implementation

pub mod functions;

use crate::constants::widths;
use crate::nodes::{NodeCategory, NodeFactory, NodeKind, NodeMetadata};

#[derive(Default)]
pub struct DisplayNodeFactory;

impl NodeFactory for DisplayNodeFactory {
    fn metadata() -> NodeMetadata {
        NodeMetadata::new(
            "binaryDisplay",
            "Binary Display",
            NodeCategory::output(),
            "Shows its input bits as a decimal and hexadecimal number",
        )
        .with_symbol("0x")
        .with_tags(vec!["output", "display", "binary", "hex"])
    }

    fn default_kind() -> NodeKind {
        NodeKind::display(widths::DISPLAY_BITS)
    }
}
