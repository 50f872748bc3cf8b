//! AND node functional operations - conjunction over every connected input

use crate::nodes::graph::PortInputs;
use crate::nodes::state::NodeState;

/// Core AND data and functionality
#[derive(Debug, Clone, Default)]
pub struct AndLogic {
    /// Whether to invert the result (NAND)
    pub invert_result: bool,
}

impl AndLogic {
    pub fn nand() -> Self {
        Self { invert_result: true }
    }

    /// Conjunction of all inputs; with no inputs AND reads false and NAND true
    pub fn process(&self, inputs: &PortInputs) -> NodeState {
        NodeState::Signal {
            state: self.evaluate(inputs.values()),
        }
    }

    pub fn evaluate(&self, values: &[bool]) -> bool {
        let result = !values.is_empty() && values.iter().all(|&v| v);
        if self.invert_result {
            !result
        } else {
            result
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outputs(logic: &AndLogic) -> Vec<bool> {
        [[false, false], [false, true], [true, false], [true, true]]
            .iter()
            .map(|row| logic.evaluate(row))
            .collect()
    }

    #[test]
    fn test_and_truth_table() {
        assert_eq!(outputs(&AndLogic::default()), vec![false, false, false, true]);
    }

    #[test]
    fn test_nand_truth_table() {
        assert_eq!(outputs(&AndLogic::nand()), vec![true, true, true, false]);
    }

    #[test]
    fn test_empty_inputs() {
        let none = PortInputs::default();
        assert_eq!(AndLogic::default().process(&none), NodeState::Signal { state: false });
        assert_eq!(AndLogic::nand().process(&none), NodeState::Signal { state: true });
    }

    #[test]
    fn test_variadic_inputs() {
        let and = AndLogic::default();
        assert!(and.evaluate(&[true, true, true]));
        assert!(!and.evaluate(&[true, false, true]));
        assert!(and.evaluate(&[true]));
    }
}
