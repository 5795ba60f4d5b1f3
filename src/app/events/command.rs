//! Commands sind mutierende Schritte, die zentral ausgefuehrt werden.

use crate::app::state::GuideConfig;
use crate::core::{GroupChange, InsertDirection, Node, Quantifier};

/// Payload von [`EditorCommand::SelectNodes`]: eine einzelne ID oder eine
/// Sequenz von IDs. Nur die Einzel-Form nimmt am Toggle-Protokoll teil.
#[derive(Debug, Clone, PartialEq)]
pub enum SelectPayload {
    /// Einzelne Node-ID
    One(String),
    /// Sequenz von Node-IDs in gewuenschter Selektions-Reihenfolge
    Many(Vec<String>),
}

impl From<&str> for SelectPayload {
    fn from(id: &str) -> Self {
        Self::One(id.to_string())
    }
}

impl From<Vec<String>> for SelectPayload {
    fn from(ids: Vec<String>) -> Self {
        Self::Many(ids)
    }
}

/// Die zwoelf Zustandsuebergaenge des Editors (geschlossene Menge,
/// exhaustiv gematcht — es gibt keinen "unbekannte Aktion"-Arm).
#[derive(Debug, Clone)]
pub enum EditorCommand {
    /// Chart laden: ersetzt ID, Baum und Selektion; History bleibt unberuehrt
    SetActiveChart {
        /// Chart-ID
        id: String,
        /// Neuer Baum
        nodes: Vec<Node>,
        /// Neue Selektion
        selected_ids: Vec<String>,
    },
    /// Platzhalter relativ zur Selektion einfuegen
    Insert {
        /// Einfuege-Richtung
        direction: InsertDirection,
    },
    /// Selektierte Nodes entfernen (leert anschliessend die Selektion)
    Remove,
    /// Selektion gruppieren bzw. Gruppierung aufloesen
    UpdateGroup {
        /// Gewuenschte Aenderung
        change: GroupChange,
        /// Gruppenname (fuer benannte Gruppen)
        name: String,
    },
    /// Baum durch extern berechnete Sequenz ersetzen (z.B. nach Re-Parse)
    SetNodes {
        /// Neuer Baum
        nodes: Vec<Node>,
    },
    /// Letzten Edit rueckgaengig machen
    Undo,
    /// Rueckgaengig gemachten Edit wiederherstellen
    Redo,
    /// Selektion setzen bzw. togglen
    SelectNodes {
        /// Neue Selektion
        selected: SelectPayload,
    },
    /// Wert des ersten selektierten Character-Blatts aendern
    UpdateCharacter {
        /// Neues Pattern-Fragment
        value: String,
    },
    /// Editor-Panel ein-/ausklappen
    SetEditorCollapsed {
        /// Neuer Zustand
        collapsed: bool,
    },
    /// Guide-Dialog-Zustand ersetzen
    UpdateGuideConfig {
        /// Neuer Dialog-Zustand
        config: GuideConfig,
    },
    /// Quantifier der Selektion setzen oder entfernen
    UpdateQuantifier {
        /// Neuer Quantifier (None = entfernen)
        value: Option<Quantifier>,
    },
}
