//! Core computation logic for the LED bar

use crate::nodes::graph::PortInputs;
use crate::nodes::port::bus_width;
use crate::nodes::state::NodeState;

pub fn process_multi_led(led_count: usize, inputs: &PortInputs) -> NodeState {
    let values = inputs.bits("led", bus_width(led_count));
    let active_count = values.iter().filter(|&&v| v).count();
    let pattern = values.iter().map(|&v| if v { '1' } else { '0' }).collect();

    NodeState::MultiLed {
        values,
        active_count,
        pattern,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_and_count() {
        let state = process_multi_led(6, &PortInputs::from_named([("led1", true), ("led4", true)]));
        assert_eq!(
            state,
            NodeState::MultiLed {
                values: vec![false, true, false, false, true, false],
                active_count: 2,
                pattern: "010010".to_string(),
            }
        );
        assert!(state.primary());
    }

    #[test]
    fn test_all_dark() {
        let state = process_multi_led(3, &PortInputs::default());
        assert!(!state.primary());
    }
}
