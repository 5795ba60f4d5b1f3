//! Primitive: Wert eines Character-Blatts aendern.

use crate::core::{Node, NodeKind};

/// Ersetzt den Wert des Nodes mit der angegebenen ID.
///
/// Trifft die ID ein Character-Blatt, wird dessen Wert ersetzt; trifft sie
/// einen Platzhalter ([`NodeKind::Empty`]), wird er zum Character-Blatt.
/// `None` oder eine unbekannte ID liefert die Eingabe unveraendert.
pub fn set_character(nodes: &[Node], id: Option<&str>, value: &str) -> Vec<Node> {
    let Some(id) = id else {
        return nodes.to_vec();
    };
    let mut next = nodes.to_vec();
    if apply(&mut next, id, value) {
        next
    } else {
        nodes.to_vec()
    }
}

fn apply(nodes: &mut [Node], id: &str, value: &str) -> bool {
    for node in nodes.iter_mut() {
        if node.id == id {
            match &mut node.kind {
                NodeKind::Character { value: current } => {
                    *current = value.to_string();
                    return true;
                }
                NodeKind::Empty => {
                    node.kind = NodeKind::Character {
                        value: value.to_string(),
                    };
                    return true;
                }
                // Gruppen/Choices tragen keinen Zeichenwert
                NodeKind::Group { .. } | NodeKind::Choice { .. } => return false,
            }
        }
        match &mut node.kind {
            NodeKind::Group { children, .. } => {
                if apply(children, id, value) {
                    return true;
                }
            }
            NodeKind::Choice { branches } => {
                for branch in branches.iter_mut() {
                    if apply(branch, id, value) {
                        return true;
                    }
                }
            }
            NodeKind::Character { .. } | NodeKind::Empty => {}
        }
    }
    false
}
