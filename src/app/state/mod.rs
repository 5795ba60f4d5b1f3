//! Application State und Sub-Zustaende.

mod dialogs;
mod editor_state;

pub use dialogs::GuideConfig;
pub use editor_state::EditorState;
