//! Node system - circuit data structures, node semantics and the evaluation engine

// Core node system modules
pub mod cache;
pub mod execution_engine;
pub mod factory;
pub mod graph;
pub mod node;
pub mod port;
pub mod state;

// Node implementations by family
pub mod arithmetic;
pub mod binary;
pub mod data;
pub mod logic;
pub mod output;

// Re-export core types
pub use graph::{input_edges, source_value, Circuit, InputIndex, PortBindings, PortInputs};
pub use node::{Edge, Node, NodeId, NodeKind};
pub use port::{Port, PortId, PortSet, PortType};
pub use state::NodeState;

// Re-export factory types
pub use factory::{catalogue, metadata_for, CatalogueEntry, NodeCategory, NodeFactory, NodeMetadata};

// Re-export execution engine types
pub use cache::SignalCache;
pub use execution_engine::{CircuitEngine, EngineConfig, Evaluation, ExecutionStats};
