//! Binary-local application orchestration helpers.
//!
//! The main binary keeps wiring logic in `main.rs`, while this module hosts
//! the page event loop and subcommand helpers to keep the entrypoint small.

pub(crate) mod commands;
pub(crate) mod event_loop;
pub(crate) mod startup;
