//! Primitive: Wiederholungs-Modifikator der Selektion setzen oder entfernen.

use super::locate::{id_set, rewrite_siblings, selected_run};
use crate::core::{GroupKind, Node, Quantifier};

/// Ergebnis von [`set_quantifier`]: neuer Baum plus neue Selektion.
#[derive(Debug, Clone, PartialEq)]
pub struct QuantifierResult {
    /// Neue Node-Sequenz
    pub nodes: Vec<Node>,
    /// Neue Selektion
    pub selected_ids: Vec<String>,
}

/// Setzt (oder entfernt, bei `None`) den Quantifier der Selektion.
///
/// Ein einzelner selektierter Node erhaelt den Quantifier direkt, die
/// Selektion bleibt bestehen. Mehrere selektierte Geschwister werden in eine
/// nicht-einfangende Gruppe gefaltet, die den Quantifier traegt und neu
/// selektiert wird. Leere oder nicht auffindbare Selektion liefert Baum und
/// Selektion unveraendert.
pub fn set_quantifier(
    nodes: &[Node],
    selected_ids: &[String],
    value: Option<Quantifier>,
) -> QuantifierResult {
    let identity = || QuantifierResult {
        nodes: nodes.to_vec(),
        selected_ids: selected_ids.to_vec(),
    };

    let selected = id_set(selected_ids);
    if selected.is_empty() {
        return identity();
    }

    let mut next_selected: Vec<String> = selected_ids.to_vec();
    let rewritten = rewrite_siblings(nodes, &mut |siblings| {
        let (start, end) = selected_run(siblings, &selected)?;
        let mut next = siblings.to_vec();
        if end - start == 1 {
            next[start].quantifier = value.clone();
        } else {
            // Mehrfach-Selektion: ohne Quantifier gibt es nichts zu falten.
            let quantifier = value.clone()?;
            let run: Vec<Node> = next.drain(start..end).collect();
            let wrapper = Node::group(GroupKind::NonCapturing, "", run).with_quantifier(quantifier);
            next_selected = vec![wrapper.id.clone()];
            next.insert(start, wrapper);
        }
        Some(next)
    });

    match rewritten {
        Some(next_nodes) => QuantifierResult {
            nodes: next_nodes,
            selected_ids: next_selected,
        },
        None => identity(),
    }
}
