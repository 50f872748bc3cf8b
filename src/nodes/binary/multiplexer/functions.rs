//! Core computation logic for the multiplexer

use crate::nodes::binary::decode_msb;
use crate::nodes::graph::PortInputs;
use crate::nodes::port::select_width;
use crate::nodes::state::NodeState;

/// Routes `data[select]` to the output; `select0` is the most significant select bit
pub fn process_multiplexer(select_bits: usize, inputs: &PortInputs) -> NodeState {
    let bits = select_width(select_bits);
    let data = inputs.bits("data", 1 << bits);
    let select = inputs.bits("select", bits);
    let enable = inputs.get_or("enable", true);
    let select_value = decode_msb(&select) as usize;

    let output = enable && data.get(select_value).copied().unwrap_or(false);

    NodeState::Multiplexer {
        inputs: data,
        select,
        select_value,
        enable,
        output,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_two_routes_data2() {
        let inputs = PortInputs::from_named([
            ("data2", true),
            ("select0", true),
            ("select1", false),
            ("enable", true),
        ]);
        let state = process_multiplexer(2, &inputs);
        assert_eq!(state.output(Some("output")), Some(true));
        match state {
            NodeState::Multiplexer { select_value, .. } => assert_eq!(select_value, 2),
            other => panic!("Expected multiplexer state, got {:?}", other),
        }
    }

    #[test]
    fn test_disabled_output_is_low() {
        let inputs = PortInputs::from_named([
            ("data2", true),
            ("select0", true),
            ("enable", false),
        ]);
        assert!(!process_multiplexer(2, &inputs).primary());
    }

    #[test]
    fn test_other_data_lines_do_not_leak() {
        let inputs = PortInputs::from_named([("data0", false), ("data1", true), ("data3", true)]);
        // select floats to 00
        assert!(!process_multiplexer(2, &inputs).primary());
    }
}
