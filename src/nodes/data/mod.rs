//! Signal sources: switches and the binary clock

pub mod clock;
pub mod switch;

pub use clock::functions::process_clock;
pub use clock::ClockNodeFactory;
pub use switch::SwitchNodeFactory;
