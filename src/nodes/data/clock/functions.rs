//! Core computation logic for the binary clock

use crate::constants::clock::FIELD_BITS;
use crate::nodes::binary::encode_msb;
use crate::nodes::state::NodeState;
use chrono::{NaiveTime, Timelike};

/// Hours, minutes and seconds of `now` as 6-bit MSB-first vectors
pub fn process_clock(now: NaiveTime) -> NodeState {
    NodeState::Clock {
        hours: encode_msb(now.hour() as u64, FIELD_BITS),
        minutes: encode_msb(now.minute() as u64, FIELD_BITS),
        seconds: encode_msb(now.second() as u64, FIELD_BITS),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_bits() {
        let now = NaiveTime::from_hms_opt(13, 5, 59).unwrap();
        assert_eq!(
            process_clock(now),
            NodeState::Clock {
                hours: vec![false, false, true, true, false, true],
                minutes: vec![false, false, false, true, false, true],
                seconds: vec![true, true, true, false, true, true],
            }
        );
    }

    #[test]
    fn test_primary_tracks_seconds_lsb() {
        let even = NaiveTime::from_hms_opt(0, 0, 10).unwrap();
        let odd = NaiveTime::from_hms_opt(0, 0, 11).unwrap();
        assert!(!process_clock(even).primary());
        assert!(process_clock(odd).primary());
    }
}
