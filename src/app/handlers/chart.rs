//! Handler fuer Chart-Laden und externen Baum-Ersatz.

use std::sync::Arc;

use crate::app::EditorState;
use crate::core::Node;

/// Laedt ein Chart: ersetzt ID, Baum und Selektion.
///
/// Kein Edit — Undo- und Redo-Stack bleiben unberuehrt.
pub fn set_active_chart(
    state: &mut EditorState,
    id: String,
    nodes: Vec<Node>,
    selected_ids: Vec<String>,
) {
    log::info!("Chart geladen: {:?} ({} Top-Level-Nodes)", id, nodes.len());
    state.active_chart_id = id;
    state.nodes = Arc::new(nodes);
    state.selected_ids = selected_ids;
}

/// Ersetzt den Baum durch eine extern berechnete Sequenz (Commit-Edit).
/// Selektion bleibt unveraendert.
pub fn set_nodes(state: &mut EditorState, nodes: Vec<Node>) {
    state.commit_edit(nodes);
    log::info!("Baum ersetzt ({} Top-Level-Nodes)", state.nodes.len());
}
