//! Regex-Diagramm-Editor Library.
//! Zustands-Engine als Library exportiert fuer Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod shared;

pub use app::{
    EditHistory, EditorCommand, EditorController, EditorIntent, EditorState, GuideConfig,
    SelectPayload,
};
pub use core::{
    to_pattern, GroupChange, GroupKind, InsertDirection, Node, NodeKind, Quantifier,
};
pub use shared::EditorOptions;
