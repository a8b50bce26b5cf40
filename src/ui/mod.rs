//! Unified terminal-facing UI facade.
//!
//! Groups the theme system and terminal input/output helpers under one
//! namespace so the binary can depend on `ui` instead of importing many
//! disparate modules.

pub mod terminal;
pub mod theme;
