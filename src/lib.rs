//! folio — a terminal portfolio page built around a typewriter engine.
//!
//! The crate renders a personal portfolio in the terminal: a hero line whose
//! tagline is typed and deleted in a loop, plus the page behaviors around it
//! (navigation, theme toggle, reveal animations, counters, skill bars, a
//! filterable project grid, a contact form and toast notifications).
//!
//! # Quick start
//!
//! ```no_run
//! use folio::typewriter::{spawn, Typewriter, TypewriterTiming};
//! use std::time::Duration;
//!
//! # async fn example() {
//! let engine = Typewriter::new(["Web Developer", "Problem Solver"], TypewriterTiming::default())
//!     .unwrap();
//! let handle = spawn(engine, |text: &str| println!("{text}"), Duration::ZERO);
//! tokio::time::sleep(Duration::from_secs(3)).await;
//! handle.stop_and_join().await.unwrap();
//! # }
//! ```

pub mod build_info;
pub mod config;
pub mod error;
pub mod site;
#[cfg(test)]
pub mod testsupport;
pub mod tui;
pub mod typewriter;
pub mod ui;
