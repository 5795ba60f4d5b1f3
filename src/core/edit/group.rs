//! Primitive: Selektion gruppieren oder Gruppierung aufloesen.

use serde::{Deserialize, Serialize};

use super::locate::{id_set, rewrite_siblings, selected_run};
use crate::core::{GroupKind, Node, NodeKind};

/// Gewuenschte Gruppierungs-Aenderung.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GroupChange {
    /// Selektion in eine Gruppe der angegebenen Art falten
    Wrap(GroupKind),
    /// Eine selektierte Gruppe aufloesen (Kinder an Ort und Stelle einsetzen)
    NonGroup,
}

/// Ergebnis von [`group`]: neuer Baum plus neue Selektion.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupResult {
    /// Neue Node-Sequenz
    pub nodes: Vec<Node>,
    /// Neue Selektion (die Gruppe bzw. die ausgepackten Kinder)
    pub selected_ids: Vec<String>,
}

/// Faltet den selektierten Geschwister-Lauf in eine Gruppe und selektiert
/// diese, bzw. loest bei [`GroupChange::NonGroup`] eine selektierte Gruppe
/// auf und selektiert deren Kinder.
///
/// Leere oder nicht auffindbare Selektion liefert Baum und Selektion
/// unveraendert zurueck.
pub fn group(
    nodes: &[Node],
    selected_ids: &[String],
    change: GroupChange,
    name: &str,
) -> GroupResult {
    let identity = || GroupResult {
        nodes: nodes.to_vec(),
        selected_ids: selected_ids.to_vec(),
    };

    let selected = id_set(selected_ids);
    if selected.is_empty() {
        return identity();
    }

    let mut next_selected: Vec<String> = Vec::new();
    let rewritten = rewrite_siblings(nodes, &mut |siblings| {
        let (start, end) = selected_run(siblings, &selected)?;
        let mut next = siblings.to_vec();
        match &change {
            GroupChange::Wrap(kind) => {
                let run: Vec<Node> = next.drain(start..end).collect();
                let group_node = Node::group(*kind, name, run);
                next_selected = vec![group_node.id.clone()];
                next.insert(start, group_node);
            }
            GroupChange::NonGroup => {
                // Aufloesen gilt nur fuer eine einzelne selektierte Gruppe.
                if end - start != 1 {
                    return None;
                }
                let NodeKind::Group { children, .. } = &next[start].kind else {
                    return None;
                };
                let children = children.clone();
                next_selected = children.iter().map(|child| child.id.clone()).collect();
                next.splice(start..start + 1, children);
            }
        }
        Some(next)
    });

    match rewritten {
        Some(next_nodes) => GroupResult {
            nodes: next_nodes,
            selected_ids: next_selected,
        },
        None => identity(),
    }
}
