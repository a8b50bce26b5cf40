//! Page behavior around the typewriter: navigation, reveal animations,
//! counters, project filter, contact form and toasts.
//!
//! Every component is plain state advanced by explicit instants, so the
//! whole page can be driven from tests without a terminal or a runtime.

pub mod animate;
pub mod contact;
pub mod debounce;
pub mod nav;
pub mod notify;
pub mod page;
pub mod projects;
pub mod reveal;
pub mod splash;

pub use page::{Command, Effect, Page, PageLayout, SECTION_IDS};
