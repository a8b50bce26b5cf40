//! End-to-end page flows: key presses in, frames and effects out.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use folio::config::Config;
use folio::site::contact::{SENDING_LABEL, SUCCESS_MESSAGE};
use folio::site::notify::Severity;
use folio::site::projects::Filter;
use folio::site::{Effect, Page};
use folio::ui::terminal::{command_for_key, compose_frame, InputMode};
use folio::ui::theme::ThemeMode;
use std::time::{Duration, Instant};

const COLS: usize = 100;
const ROWS: usize = 30;

struct Harness {
    page: Page,
    now: Instant,
}

impl Harness {
    /// Page without a splash, entrance animations already played.
    fn new() -> Self {
        let start = Instant::now();
        let mut harness = Self {
            page: Page::new(&Config::default(), ThemeMode::Dark, false, start),
            now: start + Duration::from_secs(30),
        };
        harness.redraw();
        harness
    }

    fn redraw(&mut self) -> Vec<String> {
        let frame = compose_frame(&self.page, self.now, COLS, ROWS);
        let text = frame.rows.iter().map(|row| row.text()).collect();
        self.page.set_layout(frame.layout, self.now);
        text
    }

    fn press(&mut self, code: KeyCode) -> Vec<Effect> {
        let mode = if self.page.contact_open() {
            InputMode::Form
        } else {
            InputMode::Browse
        };
        let key = KeyEvent::new(code, KeyModifiers::NONE);
        let effects = match command_for_key(key, mode) {
            Some(command) => self.page.handle(command, self.now),
            None => Vec::new(),
        };
        self.redraw();
        effects
    }

    fn type_text(&mut self, text: &str) {
        for ch in text.chars() {
            self.press(KeyCode::Char(ch));
        }
    }

    fn advance(&mut self, by: Duration) -> Vec<String> {
        self.now += by;
        self.page.tick(self.now);
        self.redraw()
    }
}

#[test]
fn number_keys_jump_and_highlight_sections() {
    let mut h = Harness::new();
    assert_eq!(h.page.nav.active_section.as_deref(), Some("home"));

    h.press(KeyCode::Char('4'));
    h.advance(Duration::from_millis(20));
    assert_eq!(h.page.nav.active_section.as_deref(), Some("skills"));
    assert!(h.page.nav.scrolled);

    h.press(KeyCode::Char('g'));
    h.advance(Duration::from_millis(20));
    assert_eq!(h.page.nav.scroll_y, 0);
    assert_eq!(h.page.nav.active_section.as_deref(), Some("home"));
    assert!(!h.page.nav.back_to_top_visible);
}

#[test]
fn revealing_about_runs_counters_to_their_targets() {
    let mut h = Harness::new();
    h.press(KeyCode::Char('2'));
    assert!(h.page.reveal.stats_animated());
    h.advance(Duration::from_secs(3));
    for stat in &h.page.stats {
        assert!(stat.counter.is_done(), "{} still counting", stat.label);
        assert_eq!(stat.counter.shown(), stat.counter.target());
    }
}

#[test]
fn skill_bars_fill_half_a_second_after_reveal() {
    let mut h = Harness::new();
    h.press(KeyCode::Char('4'));
    assert!(h.page.reveal.skills_animated());
    assert!(h.page.skills.iter().all(|bar| bar.width == 0));
    h.advance(Duration::from_millis(499));
    assert!(h.page.skills.iter().all(|bar| bar.width == 0));
    h.advance(Duration::from_millis(1));
    assert!(h.page.skills.iter().all(|bar| bar.width == bar.percent));
}

#[test]
fn menu_closes_on_escape_and_after_a_jump() {
    let mut h = Harness::new();
    h.press(KeyCode::Char('m'));
    assert!(h.page.nav.menu_open);
    h.press(KeyCode::Esc);
    assert!(!h.page.nav.menu_open);

    h.press(KeyCode::Char('m'));
    h.press(KeyCode::Char('3'));
    assert!(!h.page.nav.menu_open);
}

#[test]
fn filter_key_cycles_categories_with_fades() {
    let mut h = Harness::new();
    h.press(KeyCode::Char('f'));
    assert_eq!(h.page.projects.active(), &Filter::Category("web".to_string()));

    // Non-matching cards stay laid out until their fade-out completes.
    assert_eq!(h.page.projects.visible_cards().count(), 4);
    h.advance(Duration::from_millis(300));
    let titles: Vec<&str> = h
        .page
        .projects
        .visible_cards()
        .map(|card| card.title.as_str())
        .collect();
    assert_eq!(titles, vec!["Weather Dashboard", "Task Board"]);

    h.press(KeyCode::Char('f'));
    h.press(KeyCode::Char('f'));
    h.press(KeyCode::Char('f'));
    assert_eq!(h.page.projects.active(), &Filter::All);
    h.advance(Duration::from_millis(100));
    assert!(h
        .page
        .projects
        .cards()
        .iter()
        .all(|card| card.visibility.is_opaque()));
}

#[test]
fn theme_key_requests_persistence() {
    let mut h = Harness::new();
    assert_eq!(
        h.press(KeyCode::Char('t')),
        vec![Effect::PersistTheme(ThemeMode::Light)]
    );
    assert_eq!(h.page.theme, ThemeMode::Light);
    assert_eq!(
        h.press(KeyCode::Char('t')),
        vec![Effect::PersistTheme(ThemeMode::Dark)]
    );
}

#[test]
fn quit_key_is_an_effect() {
    let mut h = Harness::new();
    assert_eq!(h.press(KeyCode::Char('q')), vec![Effect::Quit]);
}

#[test]
fn empty_contact_form_is_rejected_with_a_toast() {
    let mut h = Harness::new();
    h.press(KeyCode::Char('c'));
    assert!(h.page.contact_open());
    h.press(KeyCode::Enter);

    let toast = h.page.toasts.current().expect("toast");
    assert_eq!(toast.severity, Severity::Error);
    assert_eq!(toast.message, "Please fill in all required fields");
    assert!(!h.page.contact.is_sending());
}

#[test]
fn contact_form_sends_then_resets() {
    let mut h = Harness::new();
    h.press(KeyCode::Char('c'));
    h.type_text("Ada Lovelace");
    h.press(KeyCode::Tab);
    h.type_text("ada@example.com");
    h.press(KeyCode::Tab);
    h.press(KeyCode::Tab);
    h.type_text("Hello");
    h.press(KeyCode::Tab);
    h.type_text("Let's build something.");
    h.press(KeyCode::Enter);

    assert!(h.page.contact.is_sending());
    assert_eq!(h.page.contact.button_label(), SENDING_LABEL);
    let rows = h.redraw();
    assert!(rows.iter().any(|row| row.contains(SENDING_LABEL)));

    // Typing is locked while the message is in flight.
    h.type_text("zzz");
    assert!(h.page.contact.message.ends_with("something."));

    h.advance(Duration::from_millis(2000));
    assert!(!h.page.contact.is_sending());
    assert!(h.page.contact.full_name.is_empty());
    let toast = h.page.toasts.current().expect("toast");
    assert_eq!(toast.severity, Severity::Success);
    assert_eq!(toast.message, SUCCESS_MESSAGE);

    // Auto-dismiss after the toast lifetime plus the exit animation.
    h.advance(Duration::from_millis(5300));
    assert!(h.page.toasts.current().is_none());
}

#[test]
fn bad_email_is_reported_after_required_fields() {
    let mut h = Harness::new();
    h.press(KeyCode::Char('c'));
    h.type_text("Ada");
    h.press(KeyCode::Tab);
    h.type_text("not-an-email");
    h.press(KeyCode::Tab);
    h.press(KeyCode::Tab);
    h.type_text("Hi");
    h.press(KeyCode::Tab);
    h.type_text("Body");
    h.press(KeyCode::Enter);

    let toast = h.page.toasts.current().expect("toast");
    assert_eq!(toast.message, "Please enter a valid email address");
}

#[test]
fn close_key_dismisses_toast_after_exit_animation() {
    let mut h = Harness::new();
    h.page.notify("hello", Severity::Info, h.now);
    h.press(KeyCode::Char('x'));
    assert!(h.page.toasts.current().is_some_and(|t| t.is_leaving()));
    h.advance(Duration::from_millis(300));
    assert!(h.page.toasts.current().is_none());
}
