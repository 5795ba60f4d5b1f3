//! Application-Layer: Controller, State, Events und Handler.

pub mod command_log;
pub mod controller;
pub mod events;
pub mod handlers;
pub mod history;
mod intent_mapping;
/// Editor-Zustand
///
/// Dieses Modul verwaltet den Zustand des Editors (Baum, Selektion, UI).
pub mod state;

pub use crate::core::{GroupChange, InsertDirection, Node, Quantifier};
pub use command_log::CommandLog;
pub use controller::EditorController;
pub use events::{EditorCommand, EditorIntent, SelectPayload};
pub use history::{EditHistory, Snapshot};
pub use state::{EditorState, GuideConfig};
