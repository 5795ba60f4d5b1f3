//! Handler fuer Panel-Zustand.

use crate::app::EditorState;

/// Klappt das Editor-Panel ein bzw. aus. Keine History-Interaktion.
pub fn set_editor_collapsed(state: &mut EditorState, collapsed: bool) {
    state.editor_collapsed = collapsed;
    log::debug!("Editor-Panel eingeklappt: {}", collapsed);
}
