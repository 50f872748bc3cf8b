//! Composite binary components: comparator, encoder, decoder, multiplexer
//!
//! Multi-bit ports are MSB-first: index 0 carries the highest weight.

pub mod comparator;
pub mod decoder;
pub mod encoder;
pub mod multiplexer;

pub use comparator::functions::process_comparator;
pub use comparator::ComparatorNodeFactory;
pub use decoder::functions::process_decoder;
pub use decoder::DecoderNodeFactory;
pub use encoder::functions::process_encoder;
pub use encoder::EncoderNodeFactory;
pub use multiplexer::functions::process_multiplexer;
pub use multiplexer::MultiplexerNodeFactory;

/// Unsigned value of an MSB-first bit vector
pub fn decode_msb(bits: &[bool]) -> u64 {
    bits.iter().fold(0u64, |acc, &bit| (acc << 1) | bit as u64)
}

/// `width` MSB-first bits of `value`
pub fn encode_msb(value: u64, width: usize) -> Vec<bool> {
    (0..width)
        .map(|i| {
            let shift = width - 1 - i;
            shift < 64 && (value >> shift) & 1 == 1
        })
        .collect()
}
