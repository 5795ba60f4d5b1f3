//! Serialisierung des Node-Baums zurueck in einen Pattern-String.

use crate::core::{GroupKind, Node, NodeKind, Quantifier};

/// Rendert eine Node-Sequenz als Pattern-String.
pub fn to_pattern(nodes: &[Node]) -> String {
    nodes.iter().map(render_node).collect()
}

fn render_node(node: &Node) -> String {
    let body = match &node.kind {
        NodeKind::Character { value } => {
            // Mehrstellige Literale brauchen unter einem Quantifier eine Gruppe.
            if node.quantifier.is_some() && value.chars().count() > 1 {
                format!("(?:{value})")
            } else {
                value.clone()
            }
        }
        NodeKind::Group {
            kind,
            name,
            children,
        } => {
            let inner = to_pattern(children);
            match kind {
                GroupKind::Capturing => format!("({inner})"),
                GroupKind::NonCapturing => format!("(?:{inner})"),
                GroupKind::Named if name.is_empty() => format!("({inner})"),
                GroupKind::Named => format!("(?<{name}>{inner})"),
            }
        }
        NodeKind::Choice { branches } => {
            let inner: Vec<String> = branches.iter().map(|branch| to_pattern(branch)).collect();
            format!("(?:{})", inner.join("|"))
        }
        NodeKind::Empty => String::new(),
    };

    match &node.quantifier {
        Some(quantifier) => format!("{body}{}", suffix(quantifier)),
        None => body,
    }
}

fn suffix(quantifier: &Quantifier) -> String {
    let base = match (quantifier.min, quantifier.max) {
        (0, None) => "*".to_string(),
        (1, None) => "+".to_string(),
        (0, Some(1)) => "?".to_string(),
        (min, None) => format!("{{{min},}}"),
        (min, Some(max)) if min == max => format!("{{{min}}}"),
        (min, Some(max)) => format!("{{{min},{max}}}"),
    };
    if quantifier.greedy {
        base
    } else {
        format!("{base}?")
    }
}
