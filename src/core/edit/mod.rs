//! Baum-Editier-Primitiven.
//!
//! Fuenf pure, totale Funktionen ueber `(nodes, selected_ids)`: Eingaben
//! werden nie mutiert, Ergebnisse sind frisch konstruierte Sequenzen.
//! "Nicht gefunden" und leere Selektion degradieren zur unveraenderten
//! Eingabe, niemals zu einem Fehler.

mod character;
mod group;
mod insert;
mod locate;
mod quantifier;
mod remove;

pub use character::set_character;
pub use group::{group, GroupChange, GroupResult};
pub use insert::{insert, InsertDirection};
pub use quantifier::{set_quantifier, QuantifierResult};
pub use remove::remove;
