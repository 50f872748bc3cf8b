//! LED node implementation

pub mod logic;

pub use logic::LedLogic;

use crate::nodes::{NodeCategory, NodeFactory, NodeKind, NodeMetadata};

#[derive(Default)]
pub struct LedNodeFactory;

impl NodeFactory for LedNodeFactory {
    fn metadata() -> NodeMetadata {
        NodeMetadata::new(
            "led",
            "LED",
            NodeCategory::output(),
            "Shows the signal that feeds it",
        )
        .with_symbol("●")
        .with_tags(vec!["output", "led", "indicator"])
    }

    fn default_kind() -> NodeKind {
        NodeKind::Led
    }
}
