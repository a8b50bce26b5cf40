//! Typewriter engine: types and deletes a rotating list of phrases.
//!
//! The engine is split in two layers. [`Typewriter`] owns the state record and
//! exposes a pure [`Typewriter::step`] that advances exactly one character and
//! reports the text to display plus the delay before the next step. The
//! [`driver`] module schedules those steps on tokio timers and pushes each
//! text into a [`TextSink`], which is the only presentation touchpoint.

use std::time::Duration;

use crate::error::TypewriterError;

pub mod driver;

pub use driver::{spawn, ChannelSink, TextSink, TypewriterHandle};

/// Delay between typed characters.
pub const DEFAULT_TYPE_SPEED: Duration = Duration::from_millis(100);
/// Delay between deleted characters.
pub const DEFAULT_DELETE_SPEED: Duration = Duration::from_millis(50);
/// Hold time once a phrase is fully displayed.
pub const DEFAULT_PAUSE_DURATION: Duration = Duration::from_millis(2000);
/// Gap between clearing one phrase and typing the next.
pub const DEFAULT_TRANSITION_DELAY: Duration = Duration::from_millis(500);

/// Step delays for the typing effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypewriterTiming {
    pub type_speed: Duration,
    pub delete_speed: Duration,
    pub pause_duration: Duration,
    pub transition_delay: Duration,
}

impl Default for TypewriterTiming {
    fn default() -> Self {
        Self {
            type_speed: DEFAULT_TYPE_SPEED,
            delete_speed: DEFAULT_DELETE_SPEED,
            pause_duration: DEFAULT_PAUSE_DURATION,
            transition_delay: DEFAULT_TRANSITION_DELAY,
        }
    }
}

impl TypewriterTiming {
    fn validate(&self) -> Result<(), TypewriterError> {
        let fields = [
            ("type_speed", self.type_speed),
            ("delete_speed", self.delete_speed),
            ("pause_duration", self.pause_duration),
            ("transition_delay", self.transition_delay),
        ];
        for (name, value) in fields {
            if value.is_zero() {
                return Err(TypewriterError::ZeroDuration(name));
            }
        }
        Ok(())
    }
}

/// Mutable cursor of the typing effect.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TypewriterState {
    /// Index into the phrase rotation.
    pub phrase_index: usize,
    /// Number of characters of the current phrase on display.
    pub char_index: usize,
    /// Whether the displayed text is shrinking.
    pub deleting: bool,
}

/// Edge crossed by a step, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Boundary {
    /// Mid-phrase step.
    None,
    /// The whole phrase is now shown; deletion starts after the pause.
    FullyTyped,
    /// The phrase is fully erased; the rotation moved to the next phrase.
    Cleared,
}

/// Result of one engine step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    /// Text to put on display.
    pub text: String,
    /// Delay before the next step should run.
    pub delay: Duration,
    pub boundary: Boundary,
}

/// Typing/deleting state machine over a fixed phrase rotation.
#[derive(Debug, Clone)]
pub struct Typewriter {
    phrases: Vec<String>,
    /// Character counts per phrase, cached so steps never rescan.
    lengths: Vec<usize>,
    timing: TypewriterTiming,
    state: TypewriterState,
}

impl Typewriter {
    /// Build an engine, rejecting an empty rotation, empty phrases, and zero delays.
    pub fn new<I, S>(phrases: I, timing: TypewriterTiming) -> Result<Self, TypewriterError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let phrases: Vec<String> = phrases.into_iter().map(Into::into).collect();
        if phrases.is_empty() {
            return Err(TypewriterError::NoPhrases);
        }
        if let Some(index) = phrases.iter().position(String::is_empty) {
            return Err(TypewriterError::EmptyPhrase { index });
        }
        timing.validate()?;
        let lengths = phrases.iter().map(|p| p.chars().count()).collect();
        Ok(Self {
            phrases,
            lengths,
            timing,
            state: TypewriterState::default(),
        })
    }

    pub fn phrases(&self) -> &[String] {
        &self.phrases
    }

    pub fn timing(&self) -> TypewriterTiming {
        self.timing
    }

    pub fn state(&self) -> TypewriterState {
        self.state
    }

    /// Text currently on display: the first `char_index` chars of the current phrase.
    pub fn displayed(&self) -> &str {
        prefix_chars(&self.phrases[self.state.phrase_index], self.state.char_index)
    }

    /// True when the engine is back at its initial state.
    pub fn is_at_start(&self) -> bool {
        self.state == TypewriterState::default()
    }

    /// Advance the displayed text by one character and compute the next delay.
    ///
    /// Boundary checks run strictly after the index update, so the step that
    /// types the last character is also the one that flips into deleting mode.
    pub fn step(&mut self) -> Step {
        let len = self.lengths[self.state.phrase_index];

        if self.state.deleting {
            debug_assert!(self.state.char_index > 0);
            self.state.char_index = self.state.char_index.saturating_sub(1);
        } else {
            debug_assert!(self.state.char_index < len);
            self.state.char_index = (self.state.char_index + 1).min(len);
        }
        let text = self.displayed().to_string();

        let mut delay = if self.state.deleting {
            self.timing.delete_speed
        } else {
            self.timing.type_speed
        };
        let mut boundary = Boundary::None;

        if !self.state.deleting && self.state.char_index == len {
            self.state.deleting = true;
            delay = self.timing.pause_duration;
            boundary = Boundary::FullyTyped;
        } else if self.state.deleting && self.state.char_index == 0 {
            self.state.deleting = false;
            self.state.phrase_index = (self.state.phrase_index + 1) % self.phrases.len();
            delay = self.timing.transition_delay;
            boundary = Boundary::Cleared;
        }

        Step {
            text,
            delay,
            boundary,
        }
    }

    /// Number of steps needed to type and delete every phrase once.
    pub fn cycle_len(&self) -> usize {
        self.lengths.iter().map(|len| len * 2).sum()
    }
}

/// Slice the first `count` characters of `text` on a char boundary.
fn prefix_chars(text: &str, count: usize) -> &str {
    match text.char_indices().nth(count) {
        Some((byte_idx, _)) => &text[..byte_idx],
        None => text,
    }
}
