//! Binary decoder node implementation

pub mod functions;

use crate::constants::widths;
use crate::nodes::{NodeCategory, NodeFactory, NodeKind, NodeMetadata};

#[derive(Default)]
pub struct DecoderNodeFactory;

impl NodeFactory for DecoderNodeFactory {
    fn metadata() -> NodeMetadata {
        NodeMetadata::new(
            "binaryDecoder",
            "Decoder",
            NodeCategory::binary(),
            "Drives the output selected by the binary input high",
        )
        .with_symbol("DEC")
        .with_tags(vec!["binary", "decoder", "one-hot", "demultiplexer"])
    }

    fn default_kind() -> NodeKind {
        NodeKind::decoder(widths::DECODER_INPUT_BITS)
    }
}
