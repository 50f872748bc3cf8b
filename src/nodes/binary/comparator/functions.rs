//! Core computation logic for the magnitude comparator

use crate::nodes::binary::decode_msb;
use crate::nodes::graph::PortInputs;
use crate::nodes::port::bus_width;
use crate::nodes::state::NodeState;

/// Compares the unsigned values on `a0..` and `b0..`
pub fn process_comparator(bits: usize, inputs: &PortInputs) -> NodeState {
    let width = bus_width(bits);
    let input_a = decode_msb(&inputs.bits("a", width));
    let input_b = decode_msb(&inputs.bits("b", width));

    NodeState::Comparator {
        input_a,
        input_b,
        equal: input_a == input_b,
        greater: input_a > input_b,
        less: input_a < input_b,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn compare(a: [bool; 4], b: [bool; 4]) -> NodeState {
        let names = ["a0", "a1", "a2", "a3", "b0", "b1", "b2", "b3"];
        let values = a.iter().chain(b.iter()).copied();
        process_comparator(4, &PortInputs::from_named(names.iter().copied().zip(values)))
    }

    #[test]
    fn test_greater() {
        // A = 1010 (10), B = 0111 (7)
        let state = compare([true, false, true, false], [false, true, true, true]);
        assert_eq!(
            state,
            NodeState::Comparator {
                input_a: 10,
                input_b: 7,
                equal: false,
                greater: true,
                less: false,
            }
        );
    }

    #[test]
    fn test_less_and_equal() {
        let state = compare([false, false, false, true], [false, false, true, false]);
        assert_eq!(state.output(Some("less")), Some(true));
        let state = compare([true; 4], [true; 4]);
        assert_eq!(state.output(Some("equal")), Some(true));
        assert!(state.primary());
    }

    #[test]
    fn test_floating_inputs_compare_equal() {
        let state = process_comparator(4, &PortInputs::default());
        assert_eq!(state.output(Some("equal")), Some(true));
        assert_eq!(state.output(Some("greater")), Some(false));
    }
}
