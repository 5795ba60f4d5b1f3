//! Dialog-Zustaende der Anwendung.

use serde::{Deserialize, Serialize};

/// Zustand des modalen Guide-Dialogs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GuideConfig {
    /// Ob der Dialog sichtbar ist
    pub visible: bool,
    /// Titel des Dialogs
    pub title: String,
    /// Inhalt (Text oder Markup)
    pub content: String,
}

impl GuideConfig {
    /// Erstellt einen sichtbaren Guide mit Titel und Inhalt.
    pub fn shown(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            visible: true,
            title: title.into(),
            content: content.into(),
        }
    }

    /// Erstellt einen geschlossenen, leeren Guide-Zustand.
    pub fn hidden() -> Self {
        Self::default()
    }
}
