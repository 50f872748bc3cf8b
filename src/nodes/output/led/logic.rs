//! LED functional operations

use crate::nodes::graph::PortInputs;
use crate::nodes::state::NodeState;

/// Lit when any connected input is high; a single input passes straight through
#[derive(Debug, Clone, Default)]
pub struct LedLogic;

impl LedLogic {
    pub fn process(&self, inputs: &PortInputs) -> NodeState {
        NodeState::Signal {
            state: inputs.values().iter().any(|&v| v),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_led() {
        assert!(!LedLogic.process(&PortInputs::default()).primary());
        assert!(LedLogic.process(&PortInputs::from_values([true])).primary());
        assert!(!LedLogic.process(&PortInputs::from_values([false])).primary());
        assert!(LedLogic.process(&PortInputs::from_values([false, true])).primary());
    }
}
