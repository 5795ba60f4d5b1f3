//! Geteilte Typen fuer layer-uebergreifende Vertraege.

pub mod options;

pub use options::EditorOptions;
