//! Exhaustive truth tables over a circuit's switches
//!
//! Every input combination is evaluated by an independent engine run with the
//! switch positions overridden, so the live circuit is never mutated.

use super::observables;
use crate::constants::limits::MAX_TRUTH_TABLE_INPUTS;
use crate::nodes::execution_engine::CircuitEngine;
use crate::nodes::node::{Edge, Node, NodeId};
use crate::nodes::state::NodeState;
use chrono::NaiveTime;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// A truth table: switch columns, then one column per observable output
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TruthTable {
    pub headers: Vec<String>,
    /// Cells are "0" or "1"
    pub rows: Vec<Vec<String>>,
    /// Row matching the live switch positions
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_row: Option<usize>,
}

impl TruthTable {
    pub fn is_empty(&self) -> bool {
        self.headers.is_empty() && self.rows.is_empty()
    }
}

/// Builds truth tables by enumerating switch combinations
#[derive(Debug, Clone, Default)]
pub struct TruthTableGenerator {
    engine: CircuitEngine,
}

impl TruthTableGenerator {
    pub fn new(engine: CircuitEngine) -> Self {
        Self { engine }
    }

    /// Generate the table; empty when the circuit has no switches or no observables
    pub fn generate(&self, nodes: &[Node], edges: &[Edge], now: NaiveTime) -> TruthTable {
        let switches: Vec<&Node> = nodes.iter().filter(|n| n.kind.is_switch()).collect();
        let observables = observables(nodes);

        if switches.is_empty() || observables.is_empty() {
            return TruthTable::default();
        }
        if switches.len() > MAX_TRUTH_TABLE_INPUTS {
            warn!(
                "Truth table skipped: {} switches exceeds the limit of {}",
                switches.len(),
                MAX_TRUTH_TABLE_INPUTS
            );
            return TruthTable::default();
        }

        let mut headers: Vec<String> = switches.iter().map(|s| s.display_label().to_string()).collect();
        for node in &observables {
            let label = node.display_label();
            if node.kind.is_adder() {
                headers.push(format!("{}_Sum", label));
                headers.push(format!("{}_Carry", label));
            } else {
                headers.push(label.to_string());
            }
        }

        let count = 1usize << switches.len();
        let row = |combination: usize| self.row(nodes, edges, now, &switches, &observables, combination);

        #[cfg(feature = "parallel")]
        let rows: Vec<Vec<String>> = (0..count).into_par_iter().map(row).collect();
        #[cfg(not(feature = "parallel"))]
        let rows: Vec<Vec<String>> = (0..count).map(row).collect();

        let current_row = Some(combination_index(switches.iter().map(|s| s.switch_state())));
        debug!("Generated truth table: {} columns, {} rows", headers.len(), rows.len());

        TruthTable {
            headers,
            rows,
            current_row,
        }
    }

    fn row(
        &self,
        nodes: &[Node],
        edges: &[Edge],
        now: NaiveTime,
        switches: &[&Node],
        observables: &[&Node],
        combination: usize,
    ) -> Vec<String> {
        let assignment = assignment(switches.len(), combination);
        let overrides: HashMap<NodeId, bool> = switches
            .iter()
            .zip(&assignment)
            .map(|(s, &on)| (s.id.clone(), on))
            .collect();

        let run = self.engine.run(nodes, edges, now, Some(&overrides));

        let mut cells: Vec<String> = assignment.iter().map(|&bit| cell(bit)).collect();
        for node in observables {
            let state = run.cache.get(&node.id);
            match state {
                Some(NodeState::Adder { sum, carry }) => {
                    cells.push(cell(*sum));
                    cells.push(cell(*carry));
                }
                Some(state) => cells.push(cell(state.primary())),
                None if node.kind.is_adder() => {
                    cells.push(cell(false));
                    cells.push(cell(false));
                }
                None => cells.push(cell(false)),
            }
        }
        cells
    }
}

/// Switch values for combination `index`; switch 0 is the most significant bit
pub fn assignment(switch_count: usize, index: usize) -> Vec<bool> {
    (0..switch_count)
        .map(|j| (index >> (switch_count - 1 - j)) & 1 == 1)
        .collect()
}

/// Inverse of [`assignment`]
pub fn combination_index(values: impl IntoIterator<Item = bool>) -> usize {
    values.into_iter().fold(0, |acc, v| (acc << 1) | v as usize)
}

fn cell(value: bool) -> String {
    if value { "1" } else { "0" }.to_string()
}
