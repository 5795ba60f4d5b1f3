//! Editor-Controller fuer zentrale Event-Verarbeitung.

use super::{EditorCommand, EditorIntent, EditorState};

/// Orchestriert UI-Intents und Commands auf dem EditorState.
#[derive(Default)]
pub struct EditorController;

impl EditorController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent ueber Intent->Command Mapping.
    pub fn handle_intent(
        &mut self,
        state: &mut EditorState,
        intent: EditorIntent,
    ) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(
        &self,
        state: &EditorState,
        intent: EditorIntent,
    ) -> Vec<EditorCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Fuehrt mutierende Commands auf dem EditorState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut EditorState,
        command: EditorCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Chart ===
            EditorCommand::SetActiveChart {
                id,
                nodes,
                selected_ids,
            } => handlers::chart::set_active_chart(state, id, nodes, selected_ids),
            EditorCommand::SetNodes { nodes } => handlers::chart::set_nodes(state, nodes),

            // === Editing ===
            EditorCommand::Insert { direction } => handlers::editing::insert(state, direction),
            EditorCommand::Remove => handlers::editing::remove_selected(state),
            EditorCommand::UpdateGroup { change, name } => {
                handlers::editing::update_group(state, change, &name)
            }
            EditorCommand::UpdateCharacter { value } => {
                handlers::editing::update_character(state, &value)
            }
            EditorCommand::UpdateQuantifier { value } => {
                handlers::editing::update_quantifier(state, value)
            }

            // === Selektion ===
            EditorCommand::SelectNodes { selected } => handlers::selection::select(state, selected),

            // === History ===
            EditorCommand::Undo => handlers::history::undo(state),
            EditorCommand::Redo => handlers::history::redo(state),

            // === Panel & Dialoge ===
            EditorCommand::SetEditorCollapsed { collapsed } => {
                handlers::view::set_editor_collapsed(state, collapsed)
            }
            EditorCommand::UpdateGuideConfig { config } => {
                handlers::dialog::update_guide_config(state, config)
            }
        }

        Ok(())
    }
}
