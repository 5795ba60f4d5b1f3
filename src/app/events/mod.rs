//! EditorIntent- und EditorCommand-Enums fuer den Intent/Command-Datenfluss.

mod command;
mod intent;

pub use command::{EditorCommand, SelectPayload};
pub use intent::EditorIntent;
