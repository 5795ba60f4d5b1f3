//! Application State — zentrale Datenhaltung des Editors.

use std::sync::Arc;

use super::GuideConfig;
use crate::app::history::EditHistory;
use crate::app::CommandLog;
use crate::core::Node;
use crate::shared::EditorOptions;

/// Hauptzustand des Editors.
///
/// Wird ausschliesslich ueber den [`crate::app::EditorController`] mutiert;
/// jede mutierende Operation hinterlegt vorher einen Wert-Snapshot des Baums
/// in der History. Aufrufer duerfen beliebig viele Klone frueherer Zustaende
/// halten, da Snapshots nie in-place veraendert werden.
#[derive(Debug, Clone)]
pub struct EditorState {
    /// ID des aktuell geladenen Charts (leer = keins)
    pub active_chart_id: String,
    /// Aktueller Baum: Top-Level-Geschwister in Reihenfolge
    pub nodes: Arc<Vec<Node>>,
    /// IDs der selektierten Nodes in Selektions-Reihenfolge
    pub selected_ids: Vec<String>,
    /// Ob das Editor-Panel eingeklappt ist
    pub editor_collapsed: bool,
    /// Zustand des Guide-Dialogs
    pub guide: GuideConfig,
    /// Undo/Redo-History (Snapshot-basiert)
    pub history: EditHistory,
    /// Verlauf ausgefuehrter Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen
    pub options: EditorOptions,
}

impl EditorState {
    /// Erstellt den leeren Startzustand.
    pub fn new() -> Self {
        Self {
            active_chart_id: String::new(),
            nodes: Arc::new(Vec::new()),
            selected_ids: Vec::new(),
            editor_collapsed: false,
            guide: GuideConfig::hidden(),
            history: EditHistory::new(),
            command_log: CommandLog::new(),
            options: EditorOptions::default(),
        }
    }

    /// Erstellt den Startzustand aus geladenen Optionen.
    pub fn with_options(options: EditorOptions) -> Self {
        let guide = if options.show_guide_on_start {
            GuideConfig::shown(options.guide_title.clone(), String::new())
        } else {
            GuideConfig::hidden()
        };
        Self {
            editor_collapsed: options.start_collapsed,
            guide,
            options,
            ..Self::new()
        }
    }

    /// Gibt die Anzahl der Top-Level-Nodes zurueck (fuer UI-Anzeige).
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Gibt zurueck, ob ein Undo-Schritt verfuegbar ist.
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Gibt zurueck, ob ein Redo-Schritt verfuegbar ist.
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Commit eines Edits: hinterlegt den Vor-Mutations-Baum in der History
    /// und setzt den neuen Baum. Einziger Pfad, ueber den der Undo-Stack
    /// waechst.
    pub fn commit_edit(&mut self, next_nodes: Vec<Node>) {
        self.history.record_snapshot(Arc::clone(&self.nodes));
        self.nodes = Arc::new(next_nodes);
    }
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new()
    }
}
