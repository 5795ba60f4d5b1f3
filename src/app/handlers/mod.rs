//! Feature-Handler fuer EditorCommand-Verarbeitung.
//!
//! Jeder Handler gruppiert die Command-Ausfuehrung eines Feature-Bereichs.
//! Der Controller dispatcht an die passende Handler-Funktion.

pub mod chart;
pub mod dialog;
pub mod editing;
pub mod history;
pub mod selection;
pub mod view;
