//! Handler fuer das Selektions-Toggle-Protokoll.

use crate::app::{EditorState, SelectPayload};

/// Setzt die Selektion gemaess Payload.
///
/// Eine einzelne ID, die exakt der aktuellen Ein-Element-Selektion
/// entspricht, deselektiert alles. Jede andere Payload ersetzt die
/// Selektion vollstaendig (Einzel-ID wird zur Ein-Element-Sequenz).
pub fn select(state: &mut EditorState, payload: SelectPayload) {
    let next_selected = match payload {
        SelectPayload::One(id) => {
            if state.selected_ids.len() == 1 && state.selected_ids[0] == id {
                log::debug!("Selektion aufgehoben: {:?}", id);
                Vec::new()
            } else {
                vec![id]
            }
        }
        SelectPayload::Many(ids) => ids,
    };
    state.selected_ids = next_selected;
}
