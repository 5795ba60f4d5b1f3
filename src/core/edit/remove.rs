//! Primitive: Selektierte Nodes entfernen.

use indexmap::IndexSet;

use super::locate::id_set;
use crate::core::{Node, NodeKind};

/// Entfernt alle selektierten Nodes aus dem Baum (rekursiv ueber Gruppen
/// und Choice-Zweige). Leere Selektion liefert die Eingabe unveraendert.
pub fn remove(nodes: &[Node], selected_ids: &[String]) -> Vec<Node> {
    let selected = id_set(selected_ids);
    if selected.is_empty() {
        return nodes.to_vec();
    }
    retain_unselected(nodes, &selected)
}

fn retain_unselected(nodes: &[Node], selected: &IndexSet<&str>) -> Vec<Node> {
    nodes
        .iter()
        .filter(|node| !selected.contains(node.id.as_str()))
        .map(|node| {
            let mut next = node.clone();
            match &node.kind {
                NodeKind::Group {
                    kind,
                    name,
                    children,
                } => {
                    next.kind = NodeKind::Group {
                        kind: *kind,
                        name: name.clone(),
                        children: retain_unselected(children, selected),
                    };
                }
                NodeKind::Choice { branches } => {
                    next.kind = NodeKind::Choice {
                        branches: branches
                            .iter()
                            .map(|branch| retain_unselected(branch, selected))
                            .collect(),
                    };
                }
                NodeKind::Character { .. } | NodeKind::Empty => {}
            }
            next
        })
        .collect()
}
