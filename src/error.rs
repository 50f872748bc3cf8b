//! Error types for the fallible edges of the crate
//!
//! The evaluation entry points never fail; these errors come from loading
//! snapshots, editing circuits and parsing command line input.

use thiserror::Error;

/// Errors raised while loading or editing a circuit
#[derive(Error, Debug)]
pub enum CircuitError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid circuit JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unknown node: {0}")]
    UnknownNode(String),

    #[error("node {node} ({kind}) has no {direction} port named '{port}'")]
    UnknownPort {
        node: String,
        kind: &'static str,
        direction: &'static str,
        port: String,
    },

    #[error("invalid time '{0}', expected HH:MM:SS")]
    InvalidTime(String),

    #[error("unknown preset '{0}'")]
    UnknownPreset(String),
}

/// Result type for circuit operations
pub type Result<T> = std::result::Result<T, CircuitError>;
