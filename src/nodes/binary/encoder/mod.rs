//! Priority encoder node implementation

pub mod functions;

use crate::constants::widths;
use crate::nodes::{NodeCategory, NodeFactory, NodeKind, NodeMetadata};

#[derive(Default)]
pub struct EncoderNodeFactory;

impl NodeFactory for EncoderNodeFactory {
    fn metadata() -> NodeMetadata {
        NodeMetadata::new(
            "binaryEncoder",
            "Encoder",
            NodeCategory::binary(),
            "Priority encoder: binary index of the highest active input",
        )
        .with_symbol("ENC")
        .with_tags(vec!["binary", "encoder", "priority"])
    }

    fn default_kind() -> NodeKind {
        NodeKind::encoder(widths::ENCODER_INPUTS)
    }
}
