//! Core computation logic for the priority encoder

use crate::nodes::binary::encode_msb;
use crate::nodes::graph::PortInputs;
use crate::nodes::port::{encoder_output_bits, encoder_width};
use crate::nodes::state::NodeState;

/// Encodes the highest-indexed active input; outputs stay low when nothing is active
pub fn process_encoder(input_size: usize, inputs: &PortInputs) -> NodeState {
    let size = encoder_width(input_size);
    let values = inputs.bits("in", size);
    let output_bits = encoder_output_bits(size);

    let active = values.iter().rposition(|&v| v);
    let valid = active.is_some();
    let encoded_value = active.unwrap_or(0);
    let outputs = if valid {
        encode_msb(encoded_value as u64, output_bits)
    } else {
        vec![false; output_bits]
    };

    NodeState::Encoder {
        inputs: values,
        outputs,
        encoded_value,
        valid,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_highest_index_wins() {
        let state = process_encoder(8, &PortInputs::from_named([("in5", true), ("in2", true)]));
        match state {
            NodeState::Encoder {
                outputs,
                encoded_value,
                valid,
                ..
            } => {
                assert_eq!(encoded_value, 5);
                assert!(valid);
                assert_eq!(outputs, vec![true, false, true]);
            }
            other => panic!("Expected encoder state, got {:?}", other),
        }
    }

    #[test]
    fn test_no_active_input() {
        let state = process_encoder(8, &PortInputs::default());
        assert_eq!(state.output(Some("valid")), Some(false));
        assert_eq!(state.output(Some("out0")), Some(false));
        assert_eq!(state.output(Some("out2")), Some(false));
        assert!(!state.primary());
    }

    #[test]
    fn test_input_zero_is_valid() {
        let state = process_encoder(4, &PortInputs::from_named([("in0", true)]));
        assert_eq!(state.output(Some("valid")), Some(true));
        assert_eq!(state.output(Some("out0")), Some(false));
        assert_eq!(state.output(Some("out1")), Some(false));
    }
}
