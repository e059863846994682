mod key_hints;
mod session_header;
mod spinner;
mod step_panel;
pub mod theme;

pub use key_hints::{render_key_hints, KeyHint, KeyHintBarStyle};
pub use session_header::SessionHeader;
pub use spinner::Spinner;
pub use step_panel::StepPanel;
