//! Configuration data model.
//!
//! Struct/enum definitions plus default values. Source discovery and env
//! overrides live in sibling modules so precedence stays centralized.

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::time::Duration;

use crate::typewriter::TypewriterTiming;

use super::defaults::{
    default_phrases, default_projects, default_skills, default_stats, default_timeline,
    DEFAULT_ABOUT, DEFAULT_ACTIVE_PROBE_OFFSET, DEFAULT_ANIMATION_DELAY_MS,
    DEFAULT_BACK_TO_TOP_THRESHOLD, DEFAULT_DELETE_SPEED_MS, DEFAULT_EMAIL, DEFAULT_HEADER_OFFSET,
    DEFAULT_LOADING_MS, DEFAULT_LOCATION, DEFAULT_NAME, DEFAULT_PAUSE_MS,
    DEFAULT_SCROLL_DEBOUNCE_MS, DEFAULT_SCROLL_THRESHOLD, DEFAULT_SUBMIT_DELAY_MS,
    DEFAULT_TAGLINE, DEFAULT_TOAST_MS, DEFAULT_TRANSITION_MS, DEFAULT_TYPE_SPEED_MS,
};

/// Top-level runtime configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub site: SiteConfig,
    pub typewriter: TypewriterConfig,
    pub timing: TimingConfig,
    pub layout: LayoutConfig,
    pub display: DisplayConfig,
    pub stats: Vec<StatEntry>,
    pub timeline: Vec<TimelineEntry>,
    pub skills: Vec<SkillEntry>,
    pub projects: Vec<ProjectEntry>,
    /// Per-theme color overrides keyed by token name (`[themes.dark]`).
    pub themes: BTreeMap<String, BTreeMap<String, String>>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            site: SiteConfig::default(),
            typewriter: TypewriterConfig::default(),
            timing: TimingConfig::default(),
            layout: LayoutConfig::default(),
            display: DisplayConfig::default(),
            stats: default_stats(),
            timeline: default_timeline(),
            skills: default_skills(),
            projects: default_projects(),
            themes: BTreeMap::new(),
        }
    }
}

/// Identity and free-form copy shown on the page.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub name: String,
    pub tagline: String,
    pub about: String,
    pub email: String,
    pub location: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            tagline: DEFAULT_TAGLINE.to_string(),
            about: DEFAULT_ABOUT.to_string(),
            email: DEFAULT_EMAIL.to_string(),
            location: DEFAULT_LOCATION.to_string(),
        }
    }
}

/// Typewriter rotation and step delays (milliseconds).
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TypewriterConfig {
    pub phrases: Vec<String>,
    pub type_speed_ms: u64,
    pub delete_speed_ms: u64,
    pub pause_ms: u64,
    pub transition_ms: u64,
}

impl Default for TypewriterConfig {
    fn default() -> Self {
        Self {
            phrases: default_phrases(),
            type_speed_ms: DEFAULT_TYPE_SPEED_MS,
            delete_speed_ms: DEFAULT_DELETE_SPEED_MS,
            pause_ms: DEFAULT_PAUSE_MS,
            transition_ms: DEFAULT_TRANSITION_MS,
        }
    }
}

impl TypewriterConfig {
    /// Step delays as durations; zero values are rejected by the engine.
    pub fn timing(&self) -> TypewriterTiming {
        TypewriterTiming {
            type_speed: Duration::from_millis(self.type_speed_ms),
            delete_speed: Duration::from_millis(self.delete_speed_ms),
            pause_duration: Duration::from_millis(self.pause_ms),
            transition_delay: Duration::from_millis(self.transition_ms),
        }
    }
}

/// Glue timers (milliseconds).
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    /// Splash visibility before it fades out.
    pub loading_ms: u64,
    /// Stagger between entrance animations of consecutive blocks.
    pub animation_delay_ms: u64,
    /// Simulated contact-form round trip.
    pub submit_delay_ms: u64,
    /// Toast lifetime before auto-dismiss.
    pub toast_ms: u64,
    pub scroll_debounce_ms: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            loading_ms: DEFAULT_LOADING_MS,
            animation_delay_ms: DEFAULT_ANIMATION_DELAY_MS,
            submit_delay_ms: DEFAULT_SUBMIT_DELAY_MS,
            toast_ms: DEFAULT_TOAST_MS,
            scroll_debounce_ms: DEFAULT_SCROLL_DEBOUNCE_MS,
        }
    }
}

impl TimingConfig {
    pub fn loading(&self) -> Duration {
        Duration::from_millis(self.loading_ms)
    }

    pub fn animation_delay(&self) -> Duration {
        Duration::from_millis(self.animation_delay_ms)
    }

    pub fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.submit_delay_ms)
    }

    pub fn toast(&self) -> Duration {
        Duration::from_millis(self.toast_ms)
    }

    pub fn scroll_debounce(&self) -> Duration {
        Duration::from_millis(self.scroll_debounce_ms)
    }
}

/// Scroll thresholds, in terminal rows.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LayoutConfig {
    pub scroll_threshold: usize,
    pub back_to_top_threshold: usize,
    pub active_probe_offset: usize,
    pub header_offset: usize,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            scroll_threshold: DEFAULT_SCROLL_THRESHOLD,
            back_to_top_threshold: DEFAULT_BACK_TO_TOP_THRESHOLD,
            active_probe_offset: DEFAULT_ACTIVE_PROBE_OFFSET,
            header_offset: DEFAULT_HEADER_OFFSET,
        }
    }
}

/// Display / rendering preferences.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub color: bool,
    /// Persisted theme preference: `dark` or `light`.
    pub theme: String,
    /// Show the loading splash before the page.
    pub splash: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            color: true,
            theme: "dark".to_string(),
            splash: true,
        }
    }
}

/// Animated counter in the about section.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct StatEntry {
    pub label: String,
    pub target: u64,
}

/// Experience/education timeline item.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct TimelineEntry {
    pub title: String,
    pub period: String,
    #[serde(default)]
    pub detail: String,
}

/// Skill with a progress bar.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct SkillEntry {
    pub name: String,
    #[serde(default)]
    pub category: String,
    pub percent: u8,
}

/// Project card shown in the filterable grid.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ProjectEntry {
    pub title: String,
    pub category: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tech: Vec<String>,
}

/// Diagnostics captured while resolving runtime configuration.
#[derive(Debug, Clone, Default)]
pub struct ConfigDiagnostics {
    /// Non-fatal problems (ignored values, unknown theme names).
    pub warnings: Vec<String>,
}

/// Configuration payload plus load-time diagnostics.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: Config,
    pub diagnostics: ConfigDiagnostics,
    /// File the config was read from, when one was found.
    pub source_path: Option<PathBuf>,
}

/// Result of `folio init`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigInitResult {
    Created {
        path: PathBuf,
    },
    AlreadyInitialized {
        path: PathBuf,
    },
    Overwritten {
        path: PathBuf,
        backup_path: PathBuf,
    },
}
