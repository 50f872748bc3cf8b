//! Multi-LED bar node implementation

pub mod functions;

use crate::constants::widths;
use crate::nodes::{NodeCategory, NodeFactory, NodeKind, NodeMetadata};

#[derive(Default)]
pub struct MultiLedNodeFactory;

impl NodeFactory for MultiLedNodeFactory {
    fn metadata() -> NodeMetadata {
        NodeMetadata::new(
            "multiLED",
            "Multi LED",
            NodeCategory::output(),
            "A row of LEDs with an active count and bit pattern",
        )
        .with_symbol("●●●")
        .with_tags(vec!["output", "led", "bar", "pattern"])
    }

    fn default_kind() -> NodeKind {
        NodeKind::multi_led(widths::MULTI_LED_COUNT)
    }
}
