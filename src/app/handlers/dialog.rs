//! Handler fuer den Guide-Dialog.

use crate::app::state::GuideConfig;
use crate::app::EditorState;

/// Ersetzt den Guide-Dialog-Zustand komplett. Keine History-Interaktion.
pub fn update_guide_config(state: &mut EditorState, config: GuideConfig) {
    log::debug!(
        "Guide-Dialog: sichtbar={} Titel={:?}",
        config.visible,
        config.title
    );
    state.guide = config;
}
