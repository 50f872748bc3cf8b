//! Core computation logic for the full adder

use crate::nodes::graph::PortInputs;
use crate::nodes::state::NodeState;

/// sum = a ⊕ b ⊕ cin, carry = (a ∧ b) ∨ (cin ∧ (a ⊕ b))
pub fn process_full_adder(inputs: &PortInputs) -> NodeState {
    let (sum, carry) = full_add(inputs.get("a"), inputs.get("b"), inputs.get("cin"));
    NodeState::Adder { sum, carry }
}

pub fn full_add(a: bool, b: bool, cin: bool) -> (bool, bool) {
    let half = a ^ b;
    (half ^ cin, (a && b) || (cin && half))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_adder_matches_arithmetic() {
        for bits in 0..8u8 {
            let a = bits & 0b100 != 0;
            let b = bits & 0b010 != 0;
            let cin = bits & 0b001 != 0;
            let total = a as u8 + b as u8 + cin as u8;

            let state = process_full_adder(&PortInputs::from_named([("a", a), ("b", b), ("cin", cin)]));
            assert_eq!(
                state,
                NodeState::Adder {
                    sum: total & 1 == 1,
                    carry: total >= 2
                },
                "a={} b={} cin={}",
                a,
                b,
                cin
            );
        }
    }

    #[test]
    fn test_all_ones() {
        assert_eq!(full_add(true, true, true), (true, true));
    }
}
