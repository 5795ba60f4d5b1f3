//! Mapping von UI-Intents auf mutierende App-Commands.

use super::state::GuideConfig;
use super::{EditorCommand, EditorIntent, EditorState};

/// Uebersetzt einen `EditorIntent` in eine Sequenz ausfuehrbarer
/// `EditorCommand`s.
pub fn map_intent_to_commands(state: &EditorState, intent: EditorIntent) -> Vec<EditorCommand> {
    match intent {
        EditorIntent::ChartOpened {
            id,
            nodes,
            selected_ids,
        } => vec![EditorCommand::SetActiveChart {
            id,
            nodes,
            selected_ids,
        }],
        EditorIntent::InsertRequested { direction } => {
            vec![EditorCommand::Insert { direction }]
        }
        EditorIntent::RemoveSelectedRequested => vec![EditorCommand::Remove],
        EditorIntent::GroupChangeRequested { change, name } => {
            vec![EditorCommand::UpdateGroup { change, name }]
        }
        EditorIntent::PatternReparsed { nodes } => vec![EditorCommand::SetNodes { nodes }],
        EditorIntent::UndoRequested => vec![EditorCommand::Undo],
        EditorIntent::RedoRequested => vec![EditorCommand::Redo],
        EditorIntent::NodeClicked { selected } => vec![EditorCommand::SelectNodes { selected }],
        EditorIntent::CharacterEdited { value } => vec![EditorCommand::UpdateCharacter { value }],
        EditorIntent::EditorPanelToggled => vec![EditorCommand::SetEditorCollapsed {
            collapsed: !state.editor_collapsed,
        }],
        EditorIntent::GuideOpened { title, content } => vec![EditorCommand::UpdateGuideConfig {
            config: GuideConfig::shown(title, content),
        }],
        EditorIntent::GuideDismissed => vec![EditorCommand::UpdateGuideConfig {
            config: GuideConfig::hidden(),
        }],
        EditorIntent::QuantifierChanged { value } => {
            vec![EditorCommand::UpdateQuantifier { value }]
        }
    }
}
