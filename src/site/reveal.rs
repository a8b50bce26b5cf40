//! Scroll-triggered reveal of page blocks and the entrance stagger.

use std::collections::HashSet;
use std::time::{Duration, Instant};

/// Minimum visible fraction of a block before it is revealed.
pub const REVEAL_THRESHOLD: f64 = 0.1;
/// Rows trimmed from the bottom of the viewport when testing intersection.
pub const REVEAL_BOTTOM_MARGIN: usize = 2;
/// Delay between the first skills reveal and the skill-bar fill.
pub const SKILL_BAR_DELAY: Duration = Duration::from_millis(500);

/// Rendered extent of an observable block, tagged with its section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealBlock {
    pub id: String,
    pub section: String,
    pub top: usize,
    pub height: usize,
}

/// Visible window of the page in rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub top: usize,
    pub height: usize,
}

impl Viewport {
    /// Fraction of `block` inside the viewport after the bottom margin is applied.
    pub fn visible_fraction(&self, block: &RevealBlock) -> f64 {
        if block.height == 0 {
            return 0.0;
        }
        let bottom = self.top + self.height.saturating_sub(REVEAL_BOTTOM_MARGIN);
        let start = block.top.max(self.top);
        let end = (block.top + block.height).min(bottom);
        if end <= start {
            return 0.0;
        }
        (end - start) as f64 / block.height as f64
    }

    pub fn intersects(&self, block: &RevealBlock) -> bool {
        let fraction = self.visible_fraction(block);
        fraction > 0.0 && fraction >= REVEAL_THRESHOLD
    }
}

/// One-shot animations started by a reveal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealTrigger {
    /// Start the about-section counters now.
    Counters,
    /// Fill the skill bars at the given instant.
    SkillBars { at: Instant },
}

#[derive(Debug, Clone, Default)]
pub struct RevealTracker {
    revealed: HashSet<String>,
    stats_animated: bool,
    skills_animated: bool,
}

impl RevealTracker {
    pub fn is_revealed(&self, id: &str) -> bool {
        self.revealed.contains(id)
    }

    pub fn stats_animated(&self) -> bool {
        self.stats_animated
    }

    pub fn skills_animated(&self) -> bool {
        self.skills_animated
    }

    /// Mark intersecting blocks visible and collect the once-per-session triggers.
    ///
    /// Visibility is sticky: scrolling a block back out never hides it.
    pub fn observe(
        &mut self,
        blocks: &[RevealBlock],
        viewport: Viewport,
        now: Instant,
    ) -> Vec<RevealTrigger> {
        let mut triggers = Vec::new();
        for block in blocks.iter().filter(|block| viewport.intersects(block)) {
            self.revealed.insert(block.id.clone());
            if block.section == "about" && !self.stats_animated {
                self.stats_animated = true;
                tracing::debug!(block = %block.id, "counters triggered");
                triggers.push(RevealTrigger::Counters);
            }
            if block.section == "skills" && !self.skills_animated {
                self.skills_animated = true;
                triggers.push(RevealTrigger::SkillBars {
                    at: now + SKILL_BAR_DELAY,
                });
            }
        }
        triggers
    }
}

/// Page-load fade-in of section children, one `delay` apart.
#[derive(Debug, Clone, Copy)]
pub struct EntranceStagger {
    started: Instant,
    delay: Duration,
}

impl EntranceStagger {
    pub fn new(started: Instant, delay: Duration) -> Self {
        Self { started, delay }
    }

    /// Instant at which child `index` (page order) starts fading in.
    pub fn entry_time(&self, index: usize) -> Instant {
        let factor = u32::try_from(index).unwrap_or(u32::MAX);
        self.started + self.delay.saturating_mul(factor)
    }

    pub fn has_entered(&self, index: usize, now: Instant) -> bool {
        now >= self.entry_time(index)
    }
}
