//! Core-Datenmodell des Diagramm-Baums.
//!
//! Ein Chart besteht aus einer geordneten Sequenz von Geschwister-Nodes.
//! Node-IDs sind opake Strings und innerhalb einer Sequenz eindeutig.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Erzeugt eine frische, eindeutige Node-ID.
pub fn fresh_id() -> String {
    Uuid::new_v4().to_string()
}

/// Art einer Gruppe im Diagramm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GroupKind {
    /// Einfangende Gruppe `( … )`
    Capturing,
    /// Nicht-einfangende Gruppe `(?: … )`
    NonCapturing,
    /// Benannte Gruppe `(?<name> … )`
    Named,
}

/// Wiederholungs-Modifikator eines Nodes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quantifier {
    /// Minimale Anzahl Wiederholungen
    pub min: u32,
    /// Maximale Anzahl Wiederholungen (None = unbegrenzt)
    pub max: Option<u32>,
    /// Greedy (true) oder lazy (false)
    pub greedy: bool,
}

impl Quantifier {
    /// `*` — null oder mehr.
    pub fn zero_or_more() -> Self {
        Self {
            min: 0,
            max: None,
            greedy: true,
        }
    }

    /// `+` — eins oder mehr.
    pub fn one_or_more() -> Self {
        Self {
            min: 1,
            max: None,
            greedy: true,
        }
    }

    /// `?` — null oder eins.
    pub fn optional() -> Self {
        Self {
            min: 0,
            max: Some(1),
            greedy: true,
        }
    }

    /// `{n,m}` — Bereich (m = None: `{n,}`).
    pub fn between(min: u32, max: Option<u32>) -> Self {
        Self {
            min,
            max,
            greedy: true,
        }
    }

    /// Macht den Quantifier lazy (`*?`, `+?`, …).
    pub fn lazy(mut self) -> Self {
        self.greedy = false;
        self
    }
}

/// Inhalt eines Nodes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum NodeKind {
    /// Blatt: Literal oder Zeichenklasse
    Character {
        /// Pattern-Fragment, z.B. `"a"` oder `"[0-9]"`
        value: String,
    },
    /// Gruppe mit Kind-Sequenz
    Group {
        /// Gruppenart
        kind: GroupKind,
        /// Name (nur fuer `GroupKind::Named` relevant)
        name: String,
        /// Kind-Nodes in Reihenfolge
        children: Vec<Node>,
    },
    /// Alternation mit mehreren Zweigen
    Choice {
        /// Zweige in Reihenfolge, jeder eine eigene Geschwister-Sequenz
        branches: Vec<Vec<Node>>,
    },
    /// Platzhalter ohne Inhalt (Ergebnis von Insert)
    Empty,
}

/// Ein Element des Diagramm-Baums.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Opake, eindeutige ID
    pub id: String,
    /// Inhalt
    pub kind: NodeKind,
    /// Optionaler Wiederholungs-Modifikator
    pub quantifier: Option<Quantifier>,
}

impl Node {
    /// Erstellt ein Character-Blatt mit frischer ID.
    pub fn character(value: impl Into<String>) -> Self {
        Self {
            id: fresh_id(),
            kind: NodeKind::Character {
                value: value.into(),
            },
            quantifier: None,
        }
    }

    /// Erstellt einen leeren Platzhalter-Node mit frischer ID.
    pub fn empty() -> Self {
        Self {
            id: fresh_id(),
            kind: NodeKind::Empty,
            quantifier: None,
        }
    }

    /// Erstellt eine Gruppe mit frischer ID.
    pub fn group(kind: GroupKind, name: impl Into<String>, children: Vec<Node>) -> Self {
        Self {
            id: fresh_id(),
            kind: NodeKind::Group {
                kind,
                name: name.into(),
                children,
            },
            quantifier: None,
        }
    }

    /// Erstellt eine Alternation mit frischer ID.
    pub fn choice(branches: Vec<Vec<Node>>) -> Self {
        Self {
            id: fresh_id(),
            kind: NodeKind::Choice { branches },
            quantifier: None,
        }
    }

    /// Ersetzt die ID (Builder, v.a. fuer Tests und deterministische Fixtures).
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Setzt den Quantifier (Builder).
    pub fn with_quantifier(mut self, quantifier: Quantifier) -> Self {
        self.quantifier = Some(quantifier);
        self
    }
}
