//! Gatekit core library
//!
//! Steady-state evaluation of digital-logic circuits built from switches,
//! gates, adders and binary components, plus exhaustive truth tables and
//! boolean expression synthesis over the same `(nodes, edges)` snapshot.

pub mod analysis;
pub mod constants;
pub mod error;
pub mod nodes;
pub mod presets;
pub mod snapshot;

use chrono::{Local, NaiveTime};
use std::collections::BTreeMap;

// Re-export commonly used types
pub use analysis::{has_cycles, simplify_expression, ExpressionGenerator, OutputExpression, TruthTable, TruthTableGenerator};
pub use error::{CircuitError, Result};
pub use nodes::{Circuit, CircuitEngine, Edge, EngineConfig, ExecutionStats, Node, NodeId, NodeKind, NodeState};

/// Evaluate with the clock reading the local wall time, sampled once
pub fn evaluate(nodes: &[Node], edges: &[Edge]) -> Vec<Node> {
    evaluate_at(nodes, edges, Local::now().time())
}

/// Evaluate against an explicit time of day
pub fn evaluate_at(nodes: &[Node], edges: &[Edge], now: NaiveTime) -> Vec<Node> {
    CircuitEngine::default().evaluate(nodes, edges, now).0
}

pub fn generate_truth_table(nodes: &[Node], edges: &[Edge]) -> TruthTable {
    generate_truth_table_at(nodes, edges, Local::now().time())
}

pub fn generate_truth_table_at(nodes: &[Node], edges: &[Edge], now: NaiveTime) -> TruthTable {
    TruthTableGenerator::default().generate(nodes, edges, now)
}

/// Simplified expressions keyed by LED id, `{id}_sum` / `{id}_carry` for adders
/// and the component id for displays and LED bars
pub fn generate_expression(nodes: &[Node], edges: &[Edge]) -> BTreeMap<String, OutputExpression> {
    ExpressionGenerator::new().generate(nodes, edges)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn noon() -> NaiveTime {
        NaiveTime::from_hms_opt(12, 0, 0).unwrap()
    }

    #[test]
    fn test_public_entry_points_on_half_adder() {
        let circuit = presets::preset("half-adder").unwrap();
        let (nodes, edges) = (&circuit.nodes, &circuit.edges);

        let evaluated = evaluate_at(nodes, edges, noon());
        assert_eq!(evaluated.len(), nodes.len());

        let table = generate_truth_table_at(nodes, edges, noon());
        assert_eq!(table.headers, vec!["Input A", "Input B", "Sum", "Carry"]);
        assert_eq!(table.rows.len(), 4);

        let expressions = generate_expression(nodes, edges);
        let sum = circuit.find_by_label("Sum").unwrap();
        assert_eq!(expressions[&sum.id].expression, "(Input A ⊕ Input B)");

        assert!(!has_cycles(nodes, edges));
    }

    #[test]
    fn test_wall_clock_variants_match_on_clockless_circuits() {
        let mut circuit = presets::preset("multiplexer").unwrap();
        let d0 = circuit.find_by_label("D0").unwrap().id.clone();
        circuit.set_switch(&d0, true).unwrap();

        assert_eq!(
            evaluate(&circuit.nodes, &circuit.edges),
            evaluate_at(&circuit.nodes, &circuit.edges, noon())
        );
        assert_eq!(
            generate_truth_table(&circuit.nodes, &circuit.edges),
            generate_truth_table_at(&circuit.nodes, &circuit.edges, noon())
        );
    }
}
