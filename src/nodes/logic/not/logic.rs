//! NOT node functional operations

use crate::nodes::graph::PortInputs;
use crate::nodes::state::NodeState;

/// Core NOT functionality
#[derive(Debug, Clone, Default)]
pub struct NotLogic;

impl NotLogic {
    /// Negates `in`; a floating input reads false, so the output is true
    pub fn process(&self, inputs: &PortInputs) -> NodeState {
        NodeState::Signal { state: !inputs.get("in") }
    }
}
