//! OR node functional operations - disjunction, NOR and parity

use crate::nodes::graph::PortInputs;
use crate::nodes::state::NodeState;

/// Core OR data and functionality
#[derive(Debug, Clone, Default)]
pub struct OrLogic {
    /// Whether to invert the result (NOR)
    pub invert_result: bool,
    /// Whether to use exclusive OR (odd parity)
    pub exclusive: bool,
}

impl OrLogic {
    pub fn nor() -> Self {
        Self {
            invert_result: true,
            exclusive: false,
        }
    }

    pub fn xor() -> Self {
        Self {
            invert_result: false,
            exclusive: true,
        }
    }

    /// Process input data and perform OR operation
    pub fn process(&self, inputs: &PortInputs) -> NodeState {
        NodeState::Signal {
            state: self.evaluate(inputs.values()),
        }
    }

    pub fn evaluate(&self, values: &[bool]) -> bool {
        let result = if self.exclusive {
            values.iter().filter(|&&v| v).count() % 2 == 1
        } else {
            values.iter().any(|&v| v)
        };
        if self.invert_result {
            !result
        } else {
            result
        }
    }
}
