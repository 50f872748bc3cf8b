//! Adder nodes

pub mod full_adder;
pub mod half_adder;

pub use full_adder::functions::{full_add, process_full_adder};
pub use full_adder::FullAdderNodeFactory;
pub use half_adder::functions::{half_add, process_half_adder};
pub use half_adder::HalfAdderNodeFactory;
