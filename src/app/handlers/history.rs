//! Handler fuer Undo/Redo-Operationen.

use std::sync::Arc;

use crate::app::EditorState;

/// Fuehrt einen Undo-Schritt aus, falls vorhanden.
///
/// Stellt ausschliesslich den Baum wieder her; Selektion und UI-Zustand
/// bleiben unangetastet.
pub fn undo(state: &mut EditorState) {
    let current = Arc::clone(&state.nodes);
    if let Some(prev) = state.history.pop_undo_with_current(current) {
        state.nodes = prev;
        log::info!("Undo ausgefuehrt");
    } else {
        log::debug!("Undo: nichts zu tun");
    }
}

/// Fuehrt einen Redo-Schritt aus, falls vorhanden.
pub fn redo(state: &mut EditorState) {
    let current = Arc::clone(&state.nodes);
    if let Some(next) = state.history.pop_redo_with_current(current) {
        state.nodes = next;
        log::info!("Redo ausgefuehrt");
    } else {
        log::debug!("Redo: nichts zu tun");
    }
}
