//! Primitive gate nodes

pub mod and;    // AND / NAND
pub mod or;     // OR / NOR / XOR
pub mod not;    // NOT

// Export all node factories
pub use and::{AndLogic, AndNodeFactory, NandNodeFactory};
pub use not::{NotLogic, NotNodeFactory};
pub use or::{NorNodeFactory, OrLogic, OrNodeFactory, XorNodeFactory};
