//! Default configuration constants and page content.
//!
//! The built-in content doubles as the fallback page when no config file is
//! found, so `folio` renders something sensible on first launch.

use super::{ProjectEntry, SkillEntry, StatEntry, TimelineEntry};

/// Embedded default `folio.toml` template written by `folio init`.
pub(super) const DEFAULT_FOLIO_CONFIG_TEMPLATE: &str = include_str!("../templates/folio.toml");

/// Config directory / file names under the config root.
pub(super) const CONFIG_DIR_NAME: &str = "folio";
pub(super) const CONFIG_FILE_NAME: &str = "folio.toml";

pub(super) const DEFAULT_TYPE_SPEED_MS: u64 = 100;
pub(super) const DEFAULT_DELETE_SPEED_MS: u64 = 50;
pub(super) const DEFAULT_PAUSE_MS: u64 = 2000;
pub(super) const DEFAULT_TRANSITION_MS: u64 = 500;

pub(super) const DEFAULT_LOADING_MS: u64 = 2000;
pub(super) const DEFAULT_ANIMATION_DELAY_MS: u64 = 100;
pub(super) const DEFAULT_SUBMIT_DELAY_MS: u64 = 2000;
pub(super) const DEFAULT_TOAST_MS: u64 = 5000;
pub(super) const DEFAULT_SCROLL_DEBOUNCE_MS: u64 = 10;

/// Rows scrolled before the navbar switches to its compact style.
pub(super) const DEFAULT_SCROLL_THRESHOLD: usize = 2;
/// Rows scrolled before the back-to-top marker appears.
pub(super) const DEFAULT_BACK_TO_TOP_THRESHOLD: usize = 6;
/// Rows added to the scroll offset when probing the active section.
pub(super) const DEFAULT_ACTIVE_PROBE_OFFSET: usize = 2;
/// Rows left above a section heading after a nav jump.
pub(super) const DEFAULT_HEADER_OFFSET: usize = 2;

pub(super) const DEFAULT_NAME: &str = "Priyanshu";
pub(super) const DEFAULT_TAGLINE: &str = "Building things for the web, one keystroke at a time.";
pub(super) const DEFAULT_ABOUT: &str = "Computer science student who enjoys turning ideas into \
fast, accessible interfaces. Currently exploring systems programming and developer tooling.";
pub(super) const DEFAULT_EMAIL: &str = "hello@example.com";
pub(super) const DEFAULT_LOCATION: &str = "India";

pub(super) fn default_phrases() -> Vec<String> {
    [
        "Computer Science Student",
        "Web Developer",
        "Frontend Developer",
        "Problem Solver",
        "Tech Enthusiast",
    ]
    .into_iter()
    .map(str::to_string)
    .collect()
}

pub(super) fn default_stats() -> Vec<StatEntry> {
    vec![
        stat("Projects", 15),
        stat("Technologies", 12),
        stat("Commits this year", 480),
    ]
}

pub(super) fn default_timeline() -> Vec<TimelineEntry> {
    vec![
        TimelineEntry {
            title: "B.Tech, Computer Science".to_string(),
            period: "2022 - present".to_string(),
            detail: "Data structures, operating systems, networks.".to_string(),
        },
        TimelineEntry {
            title: "Frontend intern".to_string(),
            period: "Summer 2024".to_string(),
            detail: "Shipped dashboard widgets and cut bundle size by a third.".to_string(),
        },
    ]
}

pub(super) fn default_skills() -> Vec<SkillEntry> {
    vec![
        skill("HTML & CSS", "frontend", 90),
        skill("JavaScript", "frontend", 85),
        skill("React", "frontend", 75),
        skill("Rust", "systems", 60),
        skill("Git", "tools", 80),
    ]
}

pub(super) fn default_projects() -> Vec<ProjectEntry> {
    vec![
        project(
            "Weather Dashboard",
            "web",
            "Forecast viewer with location search and charts.",
            &["JavaScript", "CSS"],
        ),
        project(
            "Task Board",
            "web",
            "Kanban board with drag and drop and offline storage.",
            &["React"],
        ),
        project(
            "Path Visualizer",
            "algorithms",
            "Step-through visualization of BFS, DFS and A*.",
            &["TypeScript"],
        ),
        project(
            "dotfiles",
            "tools",
            "Shell and editor setup shared across machines.",
            &["Shell"],
        ),
    ]
}

fn stat(label: &str, target: u64) -> StatEntry {
    StatEntry {
        label: label.to_string(),
        target,
    }
}

fn skill(name: &str, category: &str, percent: u8) -> SkillEntry {
    SkillEntry {
        name: name.to_string(),
        category: category.to_string(),
        percent,
    }
}

fn project(title: &str, category: &str, description: &str, tech: &[&str]) -> ProjectEntry {
    ProjectEntry {
        title: title.to_string(),
        category: category.to_string(),
        description: description.to_string(),
        tech: tech.iter().map(|t| t.to_string()).collect(),
    }
}
