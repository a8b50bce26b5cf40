//! Terminal primitives re-exported through the `ui` facade.
//!
//! The implementation lives in `crate::tui`; this shim keeps callers on a
//! stable `ui::terminal` namespace while internal layout evolves.

pub use crate::tui::settings;
pub use crate::tui::{
    command_for_key, compose_frame, Frame, InputEvent, InputMode, InputReader, Renderer,
    TerminalGuard,
};
