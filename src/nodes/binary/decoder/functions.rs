//! Core computation logic for the binary decoder

use crate::nodes::binary::decode_msb;
use crate::nodes::graph::PortInputs;
use crate::nodes::port::select_width;
use crate::nodes::state::NodeState;

/// One-hot decode of `in0..`; all outputs low unless enabled.
/// An unconnected `enable` reads true.
pub fn process_decoder(input_bits: usize, inputs: &PortInputs) -> NodeState {
    let bits = select_width(input_bits);
    let values = inputs.bits("in", bits);
    let enable = inputs.get_or("enable", true);
    let value = decode_msb(&values) as usize;

    let outputs = (0..1usize << bits).map(|i| enable && i == value).collect();

    NodeState::Decoder {
        inputs: values,
        enable,
        value,
        outputs,
    }
}
