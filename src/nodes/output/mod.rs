//! Output nodes for observing circuit state

pub mod display;
pub mod led;
pub mod multi_led;

pub use display::functions::process_display;
pub use display::DisplayNodeFactory;
pub use led::{LedLogic, LedNodeFactory};
pub use multi_led::functions::process_multi_led;
pub use multi_led::MultiLedNodeFactory;
