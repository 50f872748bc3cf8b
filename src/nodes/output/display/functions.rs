//! Core computation logic for the binary display

use crate::nodes::binary::decode_msb;
use crate::nodes::graph::PortInputs;
use crate::nodes::port::bus_width;
use crate::nodes::state::NodeState;

/// Reads `bit0..` MSB-first and renders the value in decimal and hex
pub fn process_display(bits: usize, inputs: &PortInputs) -> NodeState {
    let values = inputs.bits("bit", bus_width(bits));
    let decimal = decode_msb(&values);

    NodeState::Display {
        values,
        decimal,
        hex: format!("{:X}", decimal),
    }
}
