//! The page model: every piece of glue state, driven by commands and ticks.
//!
//! `Page` never touches the terminal or the filesystem. Input arrives as
//! [`Command`]s, time as `tick(now)`, geometry as [`PageLayout`] from the
//! renderer, and side effects leave as [`Effect`]s for the event loop.

use std::time::{Duration, Instant};

use crate::config::{Config, LayoutConfig, SiteConfig, TimelineEntry, TimingConfig};
use crate::ui::theme::ThemeMode;

use super::animate::{CounterAnimation, SkillBar};
use super::contact::{ContactForm, SubmitOutcome, SUCCESS_MESSAGE};
use super::debounce::Debouncer;
use super::nav::{NavKey, NavState, SectionSpan};
use super::notify::{NotificationCenter, Severity};
use super::projects::{Filter, ProjectGrid};
use super::reveal::{EntranceStagger, RevealBlock, RevealTracker, RevealTrigger, Viewport};
use super::splash::{Splash, SplashPhase};

/// Section ids in page order; digit keys `1`..`6` jump to them.
pub const SECTION_IDS: [&str; 6] = ["home", "about", "experience", "skills", "projects", "contact"];

pub fn section_title(id: &str) -> &str {
    match id {
        "home" => "Home",
        "about" => "About",
        "experience" => "Experience",
        "skills" => "Skills",
        "projects" => "Projects",
        "contact" => "Contact",
        other => other,
    }
}

/// Geometry of the last rendered frame, in rows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageLayout {
    pub sections: Vec<SectionSpan>,
    pub blocks: Vec<RevealBlock>,
    pub total_rows: usize,
    pub viewport_rows: usize,
}

impl PageLayout {
    fn max_scroll(&self) -> usize {
        self.total_rows.saturating_sub(self.viewport_rows)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    ScrollBy(isize),
    PageDown,
    PageUp,
    BackToTop,
    /// Follow the nav link at this index of [`SECTION_IDS`].
    JumpTo(usize),
    ToggleMenu,
    /// Move keyboard focus onto or off the menu toggle.
    FocusMenuToggle,
    Escape,
    Enter,
    Space,
    ToggleTheme,
    CycleFilter,
    SetFilter(Filter),
    OpenContact,
    FormChar(char),
    FormBackspace,
    FormNextField,
    FormPrevField,
    SubmitForm,
    CloseToast,
    Quit,
}

/// Work the page hands back to the event loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    PersistTheme(ThemeMode),
    Quit,
}

#[derive(Debug, Clone)]
pub struct Stat {
    pub label: String,
    pub counter: CounterAnimation,
}

pub struct Page {
    pub site: SiteConfig,
    pub timeline: Vec<TimelineEntry>,
    layout_config: LayoutConfig,
    timing: TimingConfig,
    pub nav: NavState,
    pub theme: ThemeMode,
    pub reveal: RevealTracker,
    pub stagger: EntranceStagger,
    pub stats: Vec<Stat>,
    pub skills: Vec<SkillBar>,
    skill_fill_at: Option<Instant>,
    pub projects: ProjectGrid,
    pub contact: ContactForm,
    contact_open: bool,
    pub toasts: NotificationCenter,
    scroll_debounce: Debouncer,
    pub splash: Splash,
    typed: String,
    layout: PageLayout,
}

impl Page {
    pub fn new(config: &Config, theme: ThemeMode, splash_enabled: bool, now: Instant) -> Self {
        let splash = Splash::new(now, config.timing.loading(), splash_enabled);
        // Entrance animations begin once the splash is gone.
        let stagger_start = if splash_enabled {
            now + config.timing.loading()
        } else {
            now
        };
        Self {
            site: config.site.clone(),
            timeline: config.timeline.clone(),
            layout_config: config.layout,
            timing: config.timing.clone(),
            nav: NavState::default(),
            theme,
            reveal: RevealTracker::default(),
            stagger: EntranceStagger::new(stagger_start, config.timing.animation_delay()),
            stats: config
                .stats
                .iter()
                .map(|stat| Stat {
                    label: stat.label.clone(),
                    counter: CounterAnimation::new(stat.target),
                })
                .collect(),
            skills: config
                .skills
                .iter()
                .map(|skill| SkillBar::new(&skill.name, &skill.category, skill.percent))
                .collect(),
            skill_fill_at: None,
            projects: ProjectGrid::new(&config.projects),
            contact: ContactForm::default(),
            contact_open: false,
            toasts: NotificationCenter::new(config.timing.toast()),
            scroll_debounce: Debouncer::new(config.timing.scroll_debounce()),
            splash,
            typed: String::new(),
            layout: PageLayout::default(),
        }
    }

    /// Text currently shown by the typewriter.
    pub fn typed_text(&self) -> &str {
        &self.typed
    }

    pub fn set_typed_text(&mut self, text: impl Into<String>) {
        self.typed = text.into();
    }

    pub fn contact_open(&self) -> bool {
        self.contact_open
    }

    pub fn layout(&self) -> &PageLayout {
        &self.layout
    }

    pub fn splash_phase(&self, now: Instant) -> SplashPhase {
        self.splash.phase(now)
    }

    /// Show a toast, replacing whatever is on screen.
    pub fn notify(&mut self, message: impl Into<String>, severity: Severity, now: Instant) {
        self.toasts.show(message, severity, now);
    }

    /// Accept geometry from the renderer and re-run the reveal observer.
    pub fn set_layout(&mut self, layout: PageLayout, now: Instant) {
        let first = self.layout.sections.is_empty();
        self.layout = layout;
        let max = self.layout.max_scroll();
        if self.nav.scroll_y > max {
            self.nav.scroll_to(max, &self.layout_config);
            self.scroll_debounce.call(now);
        }
        if first {
            self.nav
                .refresh_scroll_dependents(&self.layout.sections, &self.layout_config);
        }
        self.observe(now);
    }

    pub fn handle(&mut self, command: Command, now: Instant) -> Vec<Effect> {
        match command {
            Command::ScrollBy(delta) => self.scroll_by(delta, now),
            Command::PageDown => {
                let rows = self.page_rows();
                self.scroll_by(rows, now);
            }
            Command::PageUp => {
                let rows = self.page_rows();
                self.scroll_by(-rows, now);
            }
            Command::BackToTop => {
                self.nav.back_to_top(&self.layout_config);
                self.after_scroll(now);
            }
            Command::JumpTo(index) => {
                let id = SECTION_IDS.get(index).copied().unwrap_or_default();
                self.nav
                    .follow_link(id, &self.layout.sections, &self.layout_config);
                self.clamp_scroll();
                self.after_scroll(now);
            }
            Command::ToggleMenu => self.nav.toggle_menu(),
            Command::FocusMenuToggle => {
                self.nav.hamburger_focused = !self.nav.hamburger_focused;
            }
            Command::Escape => {
                if !self.nav.handle_key(NavKey::Escape) && self.contact_open {
                    self.contact_open = false;
                }
            }
            Command::Enter => {
                if !self.nav.handle_key(NavKey::Enter) && self.contact_open {
                    self.submit_form(now);
                }
            }
            Command::Space => {
                self.nav.handle_key(NavKey::Space);
            }
            Command::ToggleTheme => {
                self.theme = self.theme.toggled();
                tracing::info!(theme = self.theme.as_str(), "theme toggled");
                return vec![Effect::PersistTheme(self.theme)];
            }
            Command::CycleFilter => self.projects.cycle(now),
            Command::SetFilter(filter) => self.projects.apply(filter, now),
            Command::OpenContact => {
                self.contact_open = true;
                self.nav.close_menu();
                self.nav.hamburger_focused = false;
                self.nav.follow_link("contact", &self.layout.sections, &self.layout_config);
                self.clamp_scroll();
                self.after_scroll(now);
            }
            Command::FormChar(ch) => self.contact.insert_char(ch),
            Command::FormBackspace => self.contact.backspace(),
            Command::FormNextField => self.contact.focus_next(),
            Command::FormPrevField => self.contact.focus_prev(),
            Command::SubmitForm => self.submit_form(now),
            Command::CloseToast => self.toasts.close(now),
            Command::Quit => return vec![Effect::Quit],
        }
        Vec::new()
    }

    /// Advance every time-based animation to `now`.
    pub fn tick(&mut self, now: Instant) {
        for stat in &mut self.stats {
            stat.counter.advance(now);
        }
        if let Some(at) = self.skill_fill_at {
            if at <= now {
                self.skill_fill_at = None;
                for bar in &mut self.skills {
                    bar.fill();
                }
            }
        }
        self.projects.tick(now);
        if self.contact.tick(now) {
            self.notify(SUCCESS_MESSAGE, Severity::Success, now);
        }
        self.toasts.tick(now);
        if self.scroll_debounce.poll(now) {
            self.nav
                .refresh_scroll_dependents(&self.layout.sections, &self.layout_config);
        }
    }

    fn submit_form(&mut self, now: Instant) {
        match self.contact.submit(now, self.timing.submit_delay()) {
            SubmitOutcome::Rejected(err) => self.notify(err.to_string(), Severity::Error, now),
            SubmitOutcome::Sending | SubmitOutcome::Ignored => {}
        }
    }

    fn page_rows(&self) -> isize {
        let rows = self.layout.viewport_rows.saturating_sub(2).max(1);
        isize::try_from(rows).unwrap_or(isize::MAX)
    }

    fn scroll_by(&mut self, delta: isize, now: Instant) {
        let target = self
            .nav
            .scroll_y
            .saturating_add_signed(delta)
            .min(self.layout.max_scroll());
        self.nav.scroll_to(target, &self.layout_config);
        self.after_scroll(now);
    }

    fn clamp_scroll(&mut self) {
        let max = self.layout.max_scroll();
        if self.nav.scroll_y > max {
            self.nav.scroll_to(max, &self.layout_config);
        }
    }

    fn after_scroll(&mut self, now: Instant) {
        self.scroll_debounce.call(now);
        self.observe(now);
    }

    fn observe(&mut self, now: Instant) {
        if self.layout.viewport_rows == 0 {
            return;
        }
        let viewport = Viewport {
            top: self.nav.scroll_y,
            height: self.layout.viewport_rows,
        };
        for trigger in self.reveal.observe(&self.layout.blocks, viewport, now) {
            match trigger {
                RevealTrigger::Counters => {
                    for stat in &mut self.stats {
                        stat.counter.start(now);
                    }
                }
                RevealTrigger::SkillBars { at } => self.skill_fill_at = Some(at),
            }
        }
    }

    /// Delay before the typewriter starts, measured from launch.
    pub fn typewriter_start_delay(&self) -> Duration {
        self.splash.typewriter_start_delay()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::site::contact::SENDING_LABEL;
    use crate::site::reveal::SKILL_BAR_DELAY;

    fn span(id: &str, top: usize, height: usize) -> SectionSpan {
        SectionSpan {
            id: id.to_string(),
            top,
            height,
        }
    }

    fn block(id: &str, section: &str, top: usize, height: usize) -> RevealBlock {
        RevealBlock {
            id: id.to_string(),
            section: section.to_string(),
            top,
            height,
        }
    }

    fn layout() -> PageLayout {
        PageLayout {
            sections: vec![
                span("home", 0, 20),
                span("about", 20, 20),
                span("experience", 40, 10),
                span("skills", 50, 20),
                span("projects", 70, 20),
                span("contact", 90, 20),
            ],
            blocks: vec![
                block("hero", "home", 2, 6),
                block("about-content", "about", 22, 6),
                block("skills-frontend", "skills", 52, 6),
            ],
            total_rows: 110,
            viewport_rows: 20,
        }
    }

    fn page(now: Instant) -> Page {
        let mut page = Page::new(&Config::default(), ThemeMode::Dark, false, now);
        page.set_layout(layout(), now);
        page
    }

    #[test]
    fn scrolling_is_clamped_to_the_page() {
        let now = Instant::now();
        let mut page = page(now);
        page.handle(Command::ScrollBy(-5), now);
        assert_eq!(page.nav.scroll_y, 0);
        page.handle(Command::ScrollBy(1000), now);
        assert_eq!(page.nav.scroll_y, 90);
    }

    #[test]
    fn active_section_updates_after_debounce() {
        let now = Instant::now();
        let mut page = page(now);
        assert_eq!(page.nav.active_section.as_deref(), Some("home"));
        page.handle(Command::JumpTo(3), now);
        assert_eq!(page.nav.scroll_y, 48);
        assert!(page.nav.scrolled);
        assert_eq!(page.nav.active_section.as_deref(), Some("home"));
        page.tick(now + Duration::from_millis(10));
        assert_eq!(page.nav.active_section.as_deref(), Some("skills"));
        assert!(page.nav.back_to_top_visible);
    }

    #[test]
    fn out_of_range_jump_only_closes_menu() {
        let now = Instant::now();
        let mut page = page(now);
        page.handle(Command::ToggleMenu, now);
        page.handle(Command::JumpTo(9), now);
        assert_eq!(page.nav.scroll_y, 0);
        assert!(!page.nav.menu_open);
    }

    #[test]
    fn reaching_about_starts_counters_once() {
        let now = Instant::now();
        let mut page = page(now);
        assert!(!page.reveal.stats_animated());
        page.handle(Command::JumpTo(1), now);
        assert!(page.reveal.stats_animated());
        assert!(page.stats.iter().all(|s| s.counter.is_running()));
        page.handle(Command::BackToTop, now);
        page.handle(Command::JumpTo(1), now);
        page.tick(now + Duration::from_secs(5));
        for stat in &page.stats {
            assert_eq!(stat.counter.shown(), stat.counter.target());
        }
    }

    #[test]
    fn skill_bars_fill_after_delay() {
        let now = Instant::now();
        let mut page = page(now);
        assert!(page.skills.iter().all(|bar| bar.width == 0));
        page.handle(Command::JumpTo(3), now);
        page.tick(now + SKILL_BAR_DELAY - Duration::from_millis(1));
        assert!(page.skills.iter().all(|bar| bar.width == 0));
        page.tick(now + SKILL_BAR_DELAY);
        assert!(page.skills.iter().all(|bar| bar.width == bar.percent));
    }

    #[test]
    fn theme_toggle_requests_persistence() {
        let now = Instant::now();
        let mut page = page(now);
        let effects = page.handle(Command::ToggleTheme, now);
        assert_eq!(effects, vec![Effect::PersistTheme(ThemeMode::Light)]);
        assert_eq!(page.theme, ThemeMode::Light);
    }

    #[test]
    fn invalid_form_shows_error_toast() {
        let now = Instant::now();
        let mut page = page(now);
        page.handle(Command::OpenContact, now);
        assert!(page.contact_open());
        page.handle(Command::Enter, now);
        let toast = page.toasts.current().expect("toast");
        assert_eq!(toast.severity, Severity::Error);
        assert_eq!(toast.message, "Please fill in all required fields");
    }

    #[test]
    fn valid_form_sends_then_resets_with_success_toast() {
        let now = Instant::now();
        let mut page = page(now);
        page.handle(Command::OpenContact, now);
        page.contact = ContactForm {
            full_name: "Ada".into(),
            email: "ada@example.com".into(),
            subject: "Hi".into(),
            message: "Hello".into(),
            ..ContactForm::default()
        };
        page.handle(Command::SubmitForm, now);
        assert_eq!(page.contact.button_label(), SENDING_LABEL);
        assert!(page.toasts.current().is_none());

        page.tick(now + Duration::from_millis(2000));
        assert_eq!(page.contact, ContactForm::default());
        let toast = page.toasts.current().expect("toast");
        assert_eq!(toast.message, SUCCESS_MESSAGE);
        assert_eq!(toast.severity, Severity::Success);
    }

    #[test]
    fn escape_closes_menu_before_form() {
        let now = Instant::now();
        let mut page = page(now);
        page.handle(Command::OpenContact, now);
        page.handle(Command::ToggleMenu, now);
        page.handle(Command::Escape, now);
        assert!(!page.nav.menu_open);
        assert!(page.contact_open());
        page.handle(Command::Escape, now);
        assert!(!page.contact_open());
    }

    #[test]
    fn enter_toggles_menu_when_toggle_focused() {
        let now = Instant::now();
        let mut page = page(now);
        page.handle(Command::FocusMenuToggle, now);
        page.handle(Command::Enter, now);
        assert!(page.nav.menu_open);
        page.handle(Command::Space, now);
        assert!(!page.nav.menu_open);
    }

    #[test]
    fn quit_is_an_effect() {
        let now = Instant::now();
        let mut page = page(now);
        assert_eq!(page.handle(Command::Quit, now), vec![Effect::Quit]);
    }

    #[test]
    fn shrinking_layout_pulls_scroll_back() {
        let now = Instant::now();
        let mut page = page(now);
        page.handle(Command::ScrollBy(90), now);
        let shorter = PageLayout {
            total_rows: 50,
            ..layout()
        };
        page.set_layout(shorter, now);
        assert_eq!(page.nav.scroll_y, 30);
    }
}
