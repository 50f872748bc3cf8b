//! Read-only analyses over a circuit snapshot: truth tables, boolean
//! expressions and the advisory cycle check

pub mod cycles;
pub mod expression;
pub mod simplify;
pub mod truth_table;

pub use cycles::has_cycles;
pub use expression::{ExpressionGenerator, OutputExpression};
pub use simplify::simplify_expression;
pub use truth_table::{TruthTable, TruthTableGenerator};

use crate::nodes::node::{Node, NodeKind};

/// Observable outputs: LEDs first, then adders, displays and LED bars, each
/// group in node order
pub fn observables(nodes: &[Node]) -> Vec<&Node> {
    let leds = nodes.iter().filter(|n| n.kind == NodeKind::Led);
    let components = nodes
        .iter()
        .filter(|n| n.kind.is_observable() && n.kind != NodeKind::Led);
    leds.chain(components).collect()
}
