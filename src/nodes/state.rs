//! Per-kind node output state
//!
//! Every node other than a switch carries engine-owned state: it is
//! recomputed from the node's inputs on each evaluation and never read back
//! as a source of truth.

use super::node::NodeKind;
use super::port::{bus_width, encoder_output_bits, encoder_width, indexed, select_width};
use crate::constants::clock;
use serde::{Deserialize, Serialize};

/// Output state of a node, tagged by the shape of its kind
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum NodeState {
    /// User-controlled input; the only externally mutable state
    Switch { state: bool },
    /// Single-bit output of a gate or LED
    Signal { state: bool },
    Adder { sum: bool, carry: bool },
    Display {
        values: Vec<bool>,
        decimal: u64,
        hex: String,
    },
    MultiLed {
        values: Vec<bool>,
        active_count: usize,
        pattern: String,
    },
    Comparator {
        input_a: u64,
        input_b: u64,
        equal: bool,
        greater: bool,
        less: bool,
    },
    Encoder {
        inputs: Vec<bool>,
        outputs: Vec<bool>,
        encoded_value: usize,
        valid: bool,
    },
    Decoder {
        inputs: Vec<bool>,
        enable: bool,
        value: usize,
        outputs: Vec<bool>,
    },
    Multiplexer {
        inputs: Vec<bool>,
        select: Vec<bool>,
        select_value: usize,
        enable: bool,
        output: bool,
    },
    Clock {
        hours: Vec<bool>,
        minutes: Vec<bool>,
        seconds: Vec<bool>,
    },
}

impl NodeState {
    /// State of a node that has seen no inputs yet
    pub fn default_for(kind: &NodeKind) -> Self {
        match kind {
            NodeKind::Switch => NodeState::Switch { state: false },
            NodeKind::Led
            | NodeKind::And
            | NodeKind::Or
            | NodeKind::Not
            | NodeKind::Nand
            | NodeKind::Nor
            | NodeKind::Xor => NodeState::Signal { state: false },
            NodeKind::HalfAdder | NodeKind::FullAdder => NodeState::Adder {
                sum: false,
                carry: false,
            },
            NodeKind::BinaryDisplay { bits } => NodeState::Display {
                values: vec![false; bus_width(*bits)],
                decimal: 0,
                hex: "0".to_string(),
            },
            NodeKind::MultiLed { led_count } => {
                let count = bus_width(*led_count);
                NodeState::MultiLed {
                    values: vec![false; count],
                    active_count: 0,
                    pattern: "0".repeat(count),
                }
            }
            NodeKind::BinaryComparator { .. } => NodeState::Comparator {
                input_a: 0,
                input_b: 0,
                equal: true,
                greater: false,
                less: false,
            },
            NodeKind::BinaryEncoder { input_size } => {
                let size = encoder_width(*input_size);
                NodeState::Encoder {
                    inputs: vec![false; size],
                    outputs: vec![false; encoder_output_bits(size)],
                    encoded_value: 0,
                    valid: false,
                }
            }
            NodeKind::BinaryDecoder { input_bits } => {
                let bits = select_width(*input_bits);
                NodeState::Decoder {
                    inputs: vec![false; bits],
                    enable: true,
                    value: 0,
                    outputs: vec![false; 1 << bits],
                }
            }
            NodeKind::Multiplexer { select_bits } => {
                let bits = select_width(*select_bits);
                NodeState::Multiplexer {
                    inputs: vec![false; 1 << bits],
                    select: vec![false; bits],
                    select_value: 0,
                    enable: true,
                    output: false,
                }
            }
            NodeKind::BinaryClock => NodeState::Clock {
                hours: vec![false; clock::FIELD_BITS],
                minutes: vec![false; clock::FIELD_BITS],
                seconds: vec![false; clock::FIELD_BITS],
            },
        }
    }

    /// Whether this state has the shape a node of `kind` produces
    pub fn matches(&self, kind: &NodeKind) -> bool {
        matches!(
            (self, kind),
            (NodeState::Switch { .. }, NodeKind::Switch)
                | (
                    NodeState::Signal { .. },
                    NodeKind::Led
                        | NodeKind::And
                        | NodeKind::Or
                        | NodeKind::Not
                        | NodeKind::Nand
                        | NodeKind::Nor
                        | NodeKind::Xor
                )
                | (NodeState::Adder { .. }, NodeKind::HalfAdder | NodeKind::FullAdder)
                | (NodeState::Display { .. }, NodeKind::BinaryDisplay { .. })
                | (NodeState::MultiLed { .. }, NodeKind::MultiLed { .. })
                | (NodeState::Comparator { .. }, NodeKind::BinaryComparator { .. })
                | (NodeState::Encoder { .. }, NodeKind::BinaryEncoder { .. })
                | (NodeState::Decoder { .. }, NodeKind::BinaryDecoder { .. })
                | (NodeState::Multiplexer { .. }, NodeKind::Multiplexer { .. })
                | (NodeState::Clock { .. }, NodeKind::BinaryClock)
        )
    }

    /// The scalar output used when an edge names no port
    pub fn primary(&self) -> bool {
        match self {
            NodeState::Switch { state } | NodeState::Signal { state } => *state,
            NodeState::Adder { sum, .. } => *sum,
            NodeState::Display { values, .. } => values.first().copied().unwrap_or(false),
            NodeState::MultiLed { values, .. } => values.iter().any(|&v| v),
            NodeState::Comparator { equal, .. } => *equal,
            NodeState::Encoder { valid, .. } => *valid,
            NodeState::Decoder { outputs, .. } => outputs.first().copied().unwrap_or(false),
            NodeState::Multiplexer { output, .. } => *output,
            NodeState::Clock { seconds, .. } => seconds.last().copied().unwrap_or(false),
        }
    }

    /// Value on a named output port; `None` or `out` selects the primary output.
    /// Returns `None` when the port does not exist on this state.
    pub fn output(&self, port: Option<&str>) -> Option<bool> {
        let port = match port {
            None | Some("out") => return Some(self.primary()),
            Some(port) => port,
        };
        let bit = |values: &[bool], prefix: &str| {
            indexed(port, prefix).and_then(|i| values.get(i).copied())
        };
        match self {
            NodeState::Switch { .. } | NodeState::Signal { .. } => None,
            NodeState::Adder { sum, carry } => match port {
                "sum" => Some(*sum),
                "carry" | "cout" | "carryOut" => Some(*carry),
                _ => None,
            },
            NodeState::Display { .. } | NodeState::MultiLed { .. } => None,
            NodeState::Comparator {
                equal,
                greater,
                less,
                ..
            } => match port {
                "equal" => Some(*equal),
                "greater" => Some(*greater),
                "less" => Some(*less),
                _ => None,
            },
            NodeState::Encoder { outputs, valid, .. } => match port {
                "valid" => Some(*valid),
                _ => bit(outputs, "out"),
            },
            NodeState::Decoder { outputs, .. } => bit(outputs, "out"),
            NodeState::Multiplexer { output, .. } => match port {
                "output" => Some(*output),
                _ => None,
            },
            NodeState::Clock {
                hours,
                minutes,
                seconds,
            } => bit(hours, "hour")
                .or_else(|| bit(minutes, "minute"))
                .or_else(|| bit(seconds, "second")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_kind() {
        let kinds = [
            NodeKind::Switch,
            NodeKind::Led,
            NodeKind::Xor,
            NodeKind::FullAdder,
            NodeKind::display(4),
            NodeKind::multi_led(6),
            NodeKind::comparator(4),
            NodeKind::encoder(8),
            NodeKind::decoder(3),
            NodeKind::multiplexer(2),
            NodeKind::BinaryClock,
        ];
        for kind in &kinds {
            assert!(NodeState::default_for(kind).matches(kind), "{:?}", kind);
        }
        assert!(!NodeState::Signal { state: true }.matches(&NodeKind::Switch));
    }

    #[test]
    fn test_adder_outputs() {
        let state = NodeState::Adder { sum: false, carry: true };
        assert_eq!(state.output(Some("sum")), Some(false));
        assert_eq!(state.output(Some("carry")), Some(true));
        assert_eq!(state.output(Some("cout")), Some(true));
        assert_eq!(state.output(Some("carryOut")), Some(true));
        assert_eq!(state.output(None), Some(false));
        assert_eq!(state.output(Some("equal")), None);
    }

    #[test]
    fn test_indexed_outputs() {
        let state = NodeState::Decoder {
            inputs: vec![true, true],
            enable: true,
            value: 3,
            outputs: vec![false, false, false, true],
        };
        assert_eq!(state.output(Some("out3")), Some(true));
        assert_eq!(state.output(Some("out0")), Some(false));
        assert_eq!(state.output(Some("out4")), None);
        assert!(!state.primary());
    }

    #[test]
    fn test_clock_primary_is_seconds_lsb() {
        let state = NodeState::Clock {
            hours: vec![false; 6],
            minutes: vec![false; 6],
            seconds: vec![false, false, false, false, false, true],
        };
        assert!(state.primary());
        assert_eq!(state.output(Some("second5")), Some(true));
        assert_eq!(state.output(Some("hour0")), Some(false));
        assert_eq!(state.output(Some("minute6")), None);
    }

    #[test]
    fn test_state_json_uses_kind_tag() {
        let state = NodeState::MultiLed {
            values: vec![true, false],
            active_count: 1,
            pattern: "10".to_string(),
        };
        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(json["kind"], "multiLed");
        assert_eq!(json["activeCount"], 1);
    }
}
