//! Counter and skill-bar animations.

use std::time::{Duration, Instant};

/// Interval between counter increments.
pub const COUNTER_STEP: Duration = Duration::from_millis(20);
/// Number of increments a counter takes to reach its target.
pub const COUNTER_STEPS: u32 = 100;

/// Count-up from zero to `target` in fixed increments.
#[derive(Debug, Clone, PartialEq)]
pub struct CounterAnimation {
    target: u64,
    increment: f64,
    current: f64,
    shown: u64,
    done: bool,
    next_at: Option<Instant>,
}

impl CounterAnimation {
    pub fn new(target: u64) -> Self {
        Self {
            target,
            increment: target as f64 / f64::from(COUNTER_STEPS),
            current: 0.0,
            shown: 0,
            done: false,
            next_at: None,
        }
    }

    pub fn target(&self) -> u64 {
        self.target
    }

    /// Value on display.
    pub fn shown(&self) -> u64 {
        self.shown
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    pub fn is_running(&self) -> bool {
        self.next_at.is_some() && !self.done
    }

    /// Begin counting; the first increment happens immediately.
    pub fn start(&mut self, now: Instant) {
        if self.next_at.is_none() {
            self.next_at = Some(now);
            self.advance(now);
        }
    }

    /// Run every increment that is due by `now`.
    pub fn advance(&mut self, now: Instant) {
        while let Some(at) = self.next_at {
            if self.done || at > now {
                break;
            }
            self.step();
            self.next_at = Some(at + COUNTER_STEP);
        }
    }

    fn step(&mut self) {
        if self.current < self.target as f64 {
            self.current += self.increment;
            // Float accumulation can land a hair above the target.
            self.shown = (self.current.ceil() as u64).min(self.target);
        } else {
            self.shown = self.target;
            self.done = true;
        }
    }
}

/// Skill progress bar; width stays zero until filled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillBar {
    pub name: String,
    pub category: String,
    pub percent: u8,
    pub width: u8,
}

impl SkillBar {
    pub fn new(name: impl Into<String>, category: impl Into<String>, percent: u8) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            percent: percent.min(100),
            width: 0,
        }
    }

    pub fn fill(&mut self) {
        self.width = self.percent;
    }

    /// Number of filled cells in a bar `cells` wide.
    pub fn filled_cells(&self, cells: usize) -> usize {
        cells * usize::from(self.width) / 100
    }
}
