//! Core-Domaenentypen: Node-Baum, Editier-Primitiven, Pattern-Ausgabe.

pub mod edit;
pub mod node;
pub mod pattern;

pub use edit::{
    group, insert, remove, set_character, set_quantifier, GroupChange, GroupResult,
    InsertDirection, QuantifierResult,
};
pub use node::{fresh_id, GroupKind, Node, NodeKind, Quantifier};
pub use pattern::to_pattern;
