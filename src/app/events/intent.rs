//! App-Intent Events.
//! Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.

use super::command::SelectPayload;
use crate::core::{GroupChange, InsertDirection, Node, Quantifier};

/// Eingaben der UI-Schicht, vom Intent-Mapping in Commands uebersetzt.
#[derive(Debug, Clone)]
pub enum EditorIntent {
    /// Chart wurde geoeffnet (geladen/gewechselt)
    ChartOpened {
        /// Chart-ID
        id: String,
        /// Baum des Charts
        nodes: Vec<Node>,
        /// Initiale Selektion
        selected_ids: Vec<String>,
    },
    /// Platzhalter relativ zur Selektion einfuegen
    InsertRequested {
        /// Einfuege-Richtung
        direction: InsertDirection,
    },
    /// Selektierte Nodes loeschen
    RemoveSelectedRequested,
    /// Gruppierung der Selektion aendern
    GroupChangeRequested {
        /// Gewuenschte Aenderung
        change: GroupChange,
        /// Gruppenname
        name: String,
    },
    /// Pattern-Text wurde neu geparst: Baum komplett ersetzen
    PatternReparsed {
        /// Neuer Baum
        nodes: Vec<Node>,
    },
    /// Undo: Letzte Aktion rueckgaengig machen
    UndoRequested,
    /// Redo: Rueckgaengig gemachte Aktion wiederherstellen
    RedoRequested,
    /// Node(s) im Diagramm angeklickt
    NodeClicked {
        /// Angeklickte Selektion
        selected: SelectPayload,
    },
    /// Zeichenwert im Eigenschaften-Panel editiert
    CharacterEdited {
        /// Neues Pattern-Fragment
        value: String,
    },
    /// Editor-Panel ein-/ausklappen (Toggle auf aktuellem Zustand)
    EditorPanelToggled,
    /// Guide-Dialog oeffnen
    GuideOpened {
        /// Titel
        title: String,
        /// Inhalt
        content: String,
    },
    /// Guide-Dialog schliessen
    GuideDismissed,
    /// Quantifier im Eigenschaften-Panel gewaehlt
    QuantifierChanged {
        /// Neuer Quantifier (None = entfernen)
        value: Option<Quantifier>,
    },
}
