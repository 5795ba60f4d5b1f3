//! Primitive: Platzhalter-Node relativ zur Selektion einfuegen.

use serde::{Deserialize, Serialize};

use super::locate::{id_set, rewrite_siblings, selected_run};
use crate::core::Node;

/// Richtung eines Inserts relativ zur Selektion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InsertDirection {
    /// Vor dem ersten selektierten Node
    Prev,
    /// Nach dem letzten selektierten Node
    Next,
    /// Selektion in eine Alternation mit neuem, leerem Zweig heben
    Branch,
}

/// Fuegt einen frischen [`Node::empty`] relativ zur Selektion ein.
///
/// Leere oder nicht auffindbare Selektion liefert die Eingabe unveraendert
/// (als frische Sequenz) zurueck.
pub fn insert(nodes: &[Node], selected_ids: &[String], direction: InsertDirection) -> Vec<Node> {
    let selected = id_set(selected_ids);
    if selected.is_empty() {
        return nodes.to_vec();
    }

    rewrite_siblings(nodes, &mut |siblings| {
        let (start, end) = selected_run(siblings, &selected)?;
        let mut next = siblings.to_vec();
        match direction {
            InsertDirection::Prev => next.insert(start, Node::empty()),
            InsertDirection::Next => next.insert(end, Node::empty()),
            InsertDirection::Branch => {
                let run: Vec<Node> = next.drain(start..end).collect();
                next.insert(start, Node::choice(vec![run, vec![Node::empty()]]));
            }
        }
        Some(next)
    })
    .unwrap_or_else(|| nodes.to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::NodeKind;

    fn ab() -> Vec<Node> {
        vec![
            Node::character("a").with_id("A"),
            Node::character("b").with_id("B"),
        ]
    }

    #[test]
    fn insert_prev_places_empty_before_selection() {
        let next = insert(&ab(), &["B".into()], InsertDirection::Prev);
        assert_eq!(next.len(), 3);
        assert_eq!(next[0].id, "A");
        assert_eq!(next[1].kind, NodeKind::Empty);
        assert_eq!(next[2].id, "B");
    }

    #[test]
    fn insert_next_places_empty_after_selection() {
        let next = insert(&ab(), &["A".into()], InsertDirection::Next);
        assert_eq!(next.len(), 3);
        assert_eq!(next[0].id, "A");
        assert_eq!(next[1].kind, NodeKind::Empty);
    }

    #[test]
    fn insert_branch_wraps_run_in_choice() {
        let next = insert(&ab(), &["A".into(), "B".into()], InsertDirection::Branch);
        assert_eq!(next.len(), 1);
        match &next[0].kind {
            NodeKind::Choice { branches } => {
                assert_eq!(branches.len(), 2);
                assert_eq!(branches[0].len(), 2);
                assert_eq!(branches[0][0].id, "A");
                assert_eq!(branches[1].len(), 1);
                assert_eq!(branches[1][0].kind, NodeKind::Empty);
            }
            other => panic!("Unerwarteter Node-Kind: {other:?}"),
        }
    }

    #[test]
    fn insert_with_empty_selection_is_identity() {
        let nodes = ab();
        let next = insert(&nodes, &[], InsertDirection::Next);
        assert_eq!(next, nodes);
    }

    #[test]
    fn insert_with_unknown_selection_is_identity() {
        let nodes = ab();
        let next = insert(&nodes, &["X".into()], InsertDirection::Prev);
        assert_eq!(next, nodes);
    }
}
