//! Advisory cycle detection over the wiring graph

use crate::nodes::node::{Edge, Node};
use std::collections::{HashMap, HashSet};

/// True when the edges contain a directed cycle, self loops included.
///
/// Pure reachability: ports and node kinds are ignored, and edges touching
/// unknown nodes are skipped. Evaluation never consults this.
pub fn has_cycles(nodes: &[Node], edges: &[Edge]) -> bool {
    let known: HashSet<&str> = nodes.iter().map(|n| n.id.as_str()).collect();
    let mut successors: HashMap<&str, Vec<&str>> = HashMap::new();
    for edge in edges {
        let (source, target) = (edge.source.as_str(), edge.target.as_str());
        if known.contains(source) && known.contains(target) {
            successors.entry(source).or_default().push(target);
        }
    }

    let mut done: HashSet<&str> = HashSet::new();
    let mut on_path: HashSet<&str> = HashSet::new();

    for root in nodes.iter().map(|n| n.id.as_str()) {
        if !done.insert(root) {
            continue;
        }
        // (node, index of the next successor to visit)
        let mut stack: Vec<(&str, usize)> = vec![(root, 0)];
        on_path.insert(root);

        while let Some((node, next)) = stack.last_mut() {
            let node = *node;
            let children = successors.get(node).map(Vec::as_slice).unwrap_or(&[]);
            match children.get(*next) {
                Some(&child) => {
                    *next += 1;
                    if on_path.contains(child) {
                        return true;
                    }
                    if done.insert(child) {
                        on_path.insert(child);
                        stack.push((child, 0));
                    }
                }
                None => {
                    on_path.remove(node);
                    stack.pop();
                }
            }
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nodes::node::NodeKind;

    fn nodes(ids: &[&str]) -> Vec<Node> {
        ids.iter().map(|id| Node::with_id(*id, NodeKind::Or, *id)).collect()
    }

    #[test]
    fn test_acyclic_chain() {
        let n = nodes(&["a", "b", "c"]);
        let edges = vec![Edge::between("a", "b"), Edge::between("b", "c"), Edge::between("a", "c")];
        assert!(!has_cycles(&n, &edges));
    }

    #[test]
    fn test_self_loop() {
        let n = nodes(&["a"]);
        assert!(has_cycles(&n, &[Edge::between("a", "a")]));
    }

    #[test]
    fn test_cross_coupled_pair() {
        let n = nodes(&["s", "n1", "n2"]);
        let edges = vec![
            Edge::between("s", "n1"),
            Edge::between("n1", "n2"),
            Edge::between("n2", "n1"),
        ];
        assert!(has_cycles(&n, &edges));
    }

    #[test]
    fn test_diamond_is_not_a_cycle() {
        let n = nodes(&["a", "b", "c", "d"]);
        let edges = vec![
            Edge::between("a", "b"),
            Edge::between("a", "c"),
            Edge::between("b", "d"),
            Edge::between("c", "d"),
        ];
        assert!(!has_cycles(&n, &edges));
    }

    #[test]
    fn test_cycle_reached_late() {
        let n = nodes(&["x", "a", "b", "c"]);
        let edges = vec![
            Edge::between("a", "b"),
            Edge::between("b", "c"),
            Edge::between("c", "a"),
        ];
        assert!(has_cycles(&n, &edges));
    }

    #[test]
    fn test_dangling_edges_ignored() {
        let n = nodes(&["a"]);
        let edges = vec![Edge::between("a", "ghost"), Edge::between("ghost", "a")];
        assert!(!has_cycles(&n, &edges));
        assert!(!has_cycles(&[], &[]));
    }
}
