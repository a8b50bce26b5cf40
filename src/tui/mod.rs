//! Terminal user-interface building blocks.
//!
//! Layout and styling live in the renderer, key handling in `input`, and
//! shared text and glyph helpers alongside them, so the page model in
//! `crate::site` never touches the terminal directly.

pub mod input;
pub mod progress;
pub mod renderer;
pub mod settings;
pub mod text;

pub use input::{command_for_key, InputEvent, InputMode, InputReader, TerminalGuard};
pub use renderer::{compose_frame, Frame, Line, Renderer, Span};
