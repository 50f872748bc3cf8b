//! Circuit snapshot files
//!
//! Saved snapshots carry a small versioned envelope; loading also accepts the
//! bare `{ nodes, edges }` object the editor exports.

use crate::error::Result;
use crate::nodes::graph::Circuit;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const SNAPSHOT_VERSION: &str = "1.0";

/// Saved snapshot file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub version: String,
    pub metadata: SnapshotMetadata,
    pub circuit: Circuit,
}

/// Metadata for snapshot files
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnapshotMetadata {
    pub created: String, // RFC 3339
    pub creator: String,
    #[serde(default)]
    pub description: String,
}

impl Snapshot {
    pub fn new(circuit: Circuit, description: impl Into<String>) -> Self {
        Self {
            version: SNAPSHOT_VERSION.to_string(),
            metadata: SnapshotMetadata {
                created: chrono::Utc::now().to_rfc3339(),
                creator: format!("gatekit {}", env!("CARGO_PKG_VERSION")),
                description: description.into(),
            },
            circuit,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum SnapshotFile {
    Envelope(Snapshot),
    Bare(Circuit),
}

/// Parse a snapshot from JSON text
pub fn circuit_from_str(json: &str) -> Result<Circuit> {
    let circuit = match serde_json::from_str(json)? {
        SnapshotFile::Envelope(snapshot) => snapshot.circuit,
        SnapshotFile::Bare(circuit) => circuit,
    };
    Ok(circuit)
}

/// Load a circuit from a snapshot file
pub fn load_circuit(path: &Path) -> Result<Circuit> {
    let content = std::fs::read_to_string(path)?;
    circuit_from_str(&content)
}

/// Save a circuit as a snapshot file
pub fn save_circuit(path: &Path, circuit: &Circuit, description: &str) -> Result<()> {
    let snapshot = Snapshot::new(circuit.clone(), description);
    std::fs::write(path, serde_json::to_string_pretty(&snapshot)?)?;
    Ok(())
}
