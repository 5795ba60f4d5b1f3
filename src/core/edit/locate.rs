//! Lokalisierung einer Selektion im Baum.
//!
//! Selektierte Nodes bilden im Editor stets einen zusammenhaengenden Lauf von
//! Geschwistern in genau einer Sequenz (Top-Level, Gruppen-Kinder oder ein
//! Choice-Zweig). Die Helfer hier finden diese Sequenz und bauen den Baum
//! entlang des Pfads neu auf.

use indexmap::IndexSet;

use crate::core::{Node, NodeKind};

/// Wendet `rewrite` auf die erste Geschwister-Sequenz an, fuer die es
/// `Some` liefert, und baut den Baum entlang des Pfads neu auf.
///
/// Liefert `None`, wenn `rewrite` nirgends angewendet wurde. Eingaben werden
/// nie mutiert, das Ergebnis ist immer eine frische Sequenz.
pub(crate) fn rewrite_siblings(
    nodes: &[Node],
    rewrite: &mut dyn FnMut(&[Node]) -> Option<Vec<Node>>,
) -> Option<Vec<Node>> {
    if let Some(next) = rewrite(nodes) {
        return Some(next);
    }

    for (index, node) in nodes.iter().enumerate() {
        match &node.kind {
            NodeKind::Group {
                kind,
                name,
                children,
            } => {
                if let Some(next_children) = rewrite_siblings(children, rewrite) {
                    let mut next = nodes.to_vec();
                    next[index].kind = NodeKind::Group {
                        kind: *kind,
                        name: name.clone(),
                        children: next_children,
                    };
                    return Some(next);
                }
            }
            NodeKind::Choice { branches } => {
                for (branch_index, branch) in branches.iter().enumerate() {
                    if let Some(next_branch) = rewrite_siblings(branch, rewrite) {
                        let mut next_branches = branches.clone();
                        next_branches[branch_index] = next_branch;
                        let mut next = nodes.to_vec();
                        next[index].kind = NodeKind::Choice {
                            branches: next_branches,
                        };
                        return Some(next);
                    }
                }
            }
            NodeKind::Character { .. } | NodeKind::Empty => {}
        }
    }

    None
}

/// Findet den zusammenhaengenden Lauf selektierter Nodes in einer Sequenz.
///
/// Liefert `(start, end_exklusiv)` des Laufs oder `None`, wenn kein Node der
/// Sequenz selektiert ist.
pub(crate) fn selected_run(nodes: &[Node], selected: &IndexSet<&str>) -> Option<(usize, usize)> {
    let start = nodes
        .iter()
        .position(|node| selected.contains(node.id.as_str()))?;
    let mut end = start + 1;
    while end < nodes.len() && selected.contains(nodes[end].id.as_str()) {
        end += 1;
    }
    Some((start, end))
}

/// Baut die Id-Menge einer Selektion auf.
pub(crate) fn id_set(selected_ids: &[String]) -> IndexSet<&str> {
    selected_ids.iter().map(String::as_str).collect()
}
