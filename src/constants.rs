//! Crate-wide constants and default values
//!
//! Centralized location for widths, limits and glyphs used across the engine

/// Evaluation engine constants
pub mod engine {
    /// Sweep cap for the relaxation evaluator
    pub const MAX_SWEEPS: usize = 20;
}

/// Default bit widths applied when a node omits its width parameter
pub mod widths {
    pub const DISPLAY_BITS: usize = 4;
    pub const MULTI_LED_COUNT: usize = 6;
    pub const COMPARATOR_BITS: usize = 4;
    pub const ENCODER_INPUTS: usize = 8;
    pub const DECODER_INPUT_BITS: usize = 3;
    pub const MUX_SELECT_BITS: usize = 2;
}

/// Upper bounds on configurable widths
pub mod limits {
    /// Widest display, LED bar or comparator operand
    pub const MAX_BUS_WIDTH: usize = 32;

    /// Decoder inputs and multiplexer selects expand to 2^n ports
    pub const MAX_SELECT_BITS: usize = 8;

    /// Encoder input count
    pub const MAX_ENCODER_INPUTS: usize = 256;

    /// Truth tables above this many switches are not generated
    pub const MAX_TRUTH_TABLE_INPUTS: usize = 16;
}

/// Clock output width
pub mod clock {
    pub const FIELD_BITS: usize = 6;
}

/// Operator glyphs used by the expression synthesizer
pub mod glyph {
    pub const AND: &str = " • ";
    pub const OR: &str = " + ";
    pub const XOR: &str = " ⊕ ";
    pub const NOT: &str = "¬";
    pub const FALSE: &str = "0";
    pub const TRUE: &str = "1";
    pub const UNKNOWN: &str = "?";
}
