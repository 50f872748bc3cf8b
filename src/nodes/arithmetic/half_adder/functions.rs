//! Core computation logic for the half adder

use crate::nodes::graph::PortInputs;
use crate::nodes::state::NodeState;

/// sum = a ⊕ b, carry = a ∧ b
pub fn process_half_adder(inputs: &PortInputs) -> NodeState {
    let (sum, carry) = half_add(inputs.get("a"), inputs.get("b"));
    NodeState::Adder { sum, carry }
}

pub fn half_add(a: bool, b: bool) -> (bool, bool) {
    (a ^ b, a && b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_half_adder_table() {
        let expected = [
            ((false, false), (false, false)),
            ((false, true), (true, false)),
            ((true, false), (true, false)),
            ((true, true), (false, true)),
        ];
        for ((a, b), (sum, carry)) in expected {
            let state = process_half_adder(&PortInputs::from_named([("a", a), ("b", b)]));
            assert_eq!(state, NodeState::Adder { sum, carry }, "a={} b={}", a, b);
        }
    }

    #[test]
    fn test_unconnected_inputs_read_false() {
        let state = process_half_adder(&PortInputs::from_named([("a", true)]));
        assert_eq!(state, NodeState::Adder { sum: true, carry: false });
    }
}
