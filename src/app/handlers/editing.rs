//! Handler fuer Baum-Edits: Insert, Remove, Gruppierung, Zeichen, Quantifier.
//!
//! Jeder Handler delegiert an die pure Editier-Primitive in `core::edit` und
//! committed das Ergebnis. Auch Identitaets-Edits (Primitive fand nichts)
//! werden committed — das Verhalten ist ein No-op plus History-Eintrag.

use crate::app::EditorState;
use crate::core::{edit, GroupChange, InsertDirection, Quantifier};

/// Fuegt einen Platzhalter relativ zur Selektion ein.
pub fn insert(state: &mut EditorState, direction: InsertDirection) {
    let next = edit::insert(&state.nodes, &state.selected_ids, direction);
    state.commit_edit(next);
    log::info!("Insert ({:?})", direction);
}

/// Entfernt die selektierten Nodes und leert die Selektion.
pub fn remove_selected(state: &mut EditorState) {
    let count = state.selected_ids.len();
    let next = edit::remove(&state.nodes, &state.selected_ids);
    state.commit_edit(next);
    state.selected_ids.clear();
    log::info!("{} selektierte(r) Node(s) entfernt", count);
}

/// Aendert die Gruppierung der Selektion; die Primitive liefert Baum und
/// Folge-Selektion.
pub fn update_group(state: &mut EditorState, change: GroupChange, name: &str) {
    let result = edit::group(&state.nodes, &state.selected_ids, change, name);
    state.commit_edit(result.nodes);
    state.selected_ids = result.selected_ids;
    log::info!("Gruppierung geaendert");
}

/// Aendert den Wert des ersten selektierten Character-Blatts.
///
/// Leere Selektion degradiert in der Primitive zum Identitaets-Edit.
pub fn update_character(state: &mut EditorState, value: &str) {
    let first = state.selected_ids.first().map(String::as_str);
    if first.is_none() {
        log::debug!("UpdateCharacter ohne Selektion");
    }
    let next = edit::set_character(&state.nodes, first, value);
    state.commit_edit(next);
}

/// Setzt oder entfernt den Quantifier der Selektion.
pub fn update_quantifier(state: &mut EditorState, value: Option<Quantifier>) {
    let result = edit::set_quantifier(&state.nodes, &state.selected_ids, value);
    state.commit_edit(result.nodes);
    state.selected_ids = result.selected_ids;
    log::info!("Quantifier aktualisiert");
}
