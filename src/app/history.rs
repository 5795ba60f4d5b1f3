//! Undo/Redo-History ueber vollstaendige Baum-Snapshots.

use std::sync::Arc;

use crate::core::Node;

/// Snapshot des Node-Baums zu einem Zeitpunkt.
///
/// Arc-Clone (Copy-on-Write): Das Erstellen eines Snapshots ist O(1), da die
/// Editier-Primitiven ohnehin frische Sequenzen liefern und alte Sequenzen
/// nie in-place mutiert werden. Jeder Stack-Eintrag ist damit ein Wert, den
/// Aufrufer gefahrlos weiterhalten koennen.
pub type Snapshot = Arc<Vec<Node>>;

/// Linearer Undo/Redo-Manager mit Snapshotting.
///
/// Ohne Tiefen-Limit und ohne Zusammenfassen aufeinanderfolgender Edits.
/// Ein frischer Edit laesst den Redo-Stack unveraendert; ein Redo-Eintrag
/// bleibt also auch nach neuen Edits anwendbar (siehe expliziten Test im
/// Controller-Flow).
#[derive(Debug, Clone, Default)]
pub struct EditHistory {
    undo_stack: Vec<Snapshot>,
    redo_stack: Vec<Snapshot>,
}

impl EditHistory {
    /// Erstellt einen leeren History-Manager.
    pub fn new() -> Self {
        Self::default()
    }

    /// Zeichnet den Vor-Mutations-Snapshot eines Edits auf.
    pub fn record_snapshot(&mut self, snap: Snapshot) {
        self.undo_stack.push(snap);
    }

    /// Prueft ob Undo moeglich ist.
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Prueft ob Redo moeglich ist.
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Anzahl der Undo-Eintraege.
    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }

    /// Anzahl der Redo-Eintraege.
    pub fn redo_depth(&self) -> usize {
        self.redo_stack.len()
    }

    /// Pop Undo-Stack und lege `current` auf den Redo-Stack; liefert den
    /// anzuwendenden Snapshot. Leerer Undo-Stack: `None`, `current` verfaellt.
    pub fn pop_undo_with_current(&mut self, current: Snapshot) -> Option<Snapshot> {
        if let Some(prev) = self.undo_stack.pop() {
            self.redo_stack.push(current);
            Some(prev)
        } else {
            None
        }
    }

    /// Pop Redo-Stack und lege `current` auf den Undo-Stack; liefert den
    /// anzuwendenden Snapshot.
    pub fn pop_redo_with_current(&mut self, current: Snapshot) -> Option<Snapshot> {
        if let Some(next) = self.redo_stack.pop() {
            self.undo_stack.push(current);
            Some(next)
        } else {
            None
        }
    }
}
