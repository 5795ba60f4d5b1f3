//! Zentrale Konfiguration des Regex-Diagramm-Editors.
//!
//! `EditorOptions` enthaelt die zur Laufzeit aenderbaren Startwerte und wird
//! als TOML-Datei neben der Binary gespeichert.

use serde::{Deserialize, Serialize};

/// Zur Laufzeit aenderbare Editor-Optionen.
/// Wird als `regex_diagram_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorOptions {
    /// Editor-Panel beim Start eingeklappt
    pub start_collapsed: bool,
    /// Guide-Dialog beim Start anzeigen
    pub show_guide_on_start: bool,
    /// Titel des Start-Guides
    pub guide_title: String,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            start_collapsed: false,
            show_guide_on_start: false,
            guide_title: "Erste Schritte".to_string(),
        }
    }
}

impl EditorOptions {
    /// Laedt Optionen aus einer TOML-Datei; fehlende oder fehlerhafte Datei
    /// faellt auf Standardwerte zurueck.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("regex_diagram_editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("regex_diagram_editor.toml")
    }
}
