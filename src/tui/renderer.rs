//! Page renderer: composes the page model into styled rows and draws them.
//!
//! Composition is pure ([`compose_frame`]) and returns the rendered rows plus
//! the [`PageLayout`] the page needs for scrolling and reveal. Drawing is a
//! thin crossterm pass over those rows.

use crate::build_info;
use crate::site::contact::Field;
use crate::site::nav::SectionSpan;
use crate::site::notify::Severity;
use crate::site::page::{section_title, Page, PageLayout, SECTION_IDS};
use crate::site::reveal::RevealBlock;
use crate::site::splash::SplashPhase;
use crate::tui::progress::progress_line;
use crate::tui::settings;
use crate::tui::text::{
    center_offset, clip_to_width, truncate_single_line, visible_width, wrap_paragraphs,
};
use crate::ui::theme::{Theme, ThemeToken};
use crossterm::cursor::MoveTo;
use crossterm::style::{Print, PrintStyledContent, Stylize};
use crossterm::terminal::{Clear, ClearType};
use crossterm::QueueableCommand;
use std::io::{self, Write};
use std::time::Instant;

/// Run of text drawn with one semantic color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub token: ThemeToken,
    pub bold: bool,
}

impl Span {
    pub fn new(text: impl Into<String>, token: ThemeToken) -> Self {
        Self {
            text: text.into(),
            token,
            bold: false,
        }
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }
}

/// One terminal row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Line {
    pub spans: Vec<Span>,
}

impl Line {
    pub fn blank() -> Self {
        Self::default()
    }

    pub fn plain(text: impl Into<String>, token: ThemeToken) -> Self {
        Self {
            spans: vec![Span::new(text, token)],
        }
    }

    pub fn with(mut self, span: Span) -> Self {
        self.spans.push(span);
        self
    }

    /// Unstyled row text.
    pub fn text(&self) -> String {
        self.spans.iter().map(|span| span.text.as_str()).collect()
    }

    pub fn width(&self) -> usize {
        self.spans.iter().map(|span| visible_width(&span.text)).sum()
    }

    fn indent(mut self, cols: usize) -> Self {
        if cols > 0 && !self.spans.is_empty() {
            self.spans
                .insert(0, Span::new(" ".repeat(cols), ThemeToken::Text));
        }
        self
    }

    /// Same text, every span in the muted color.
    fn muted(mut self) -> Self {
        for span in &mut self.spans {
            span.token = ThemeToken::Muted;
            span.bold = false;
        }
        self
    }

    fn clip(mut self, width: usize) -> Self {
        let mut left = width;
        self.spans.retain_mut(|span| {
            if left == 0 {
                return false;
            }
            let span_width = visible_width(&span.text);
            if span_width > left {
                span.text = clip_to_width(&span.text, left);
                left = 0;
            } else {
                left -= span_width;
            }
            true
        });
        self
    }

    /// Draw `overlay` flush right over this row.
    fn overlay_right(self, overlay: Line, cols: usize) -> Self {
        let overlay_width = overlay.width().min(cols);
        let keep = cols - overlay_width;
        let mut base = self.clip(keep);
        let pad = keep - base.width();
        if pad > 0 {
            base.spans.push(Span::new(" ".repeat(pad), ThemeToken::Text));
        }
        base.spans.extend(overlay.clip(overlay_width).spans);
        base
    }
}

/// Rows for one screen plus the geometry they were laid out with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub rows: Vec<Line>,
    pub layout: PageLayout,
}

/// Scrollable page body, built top to bottom.
struct Document<'a> {
    page: &'a Page,
    now: Instant,
    width: usize,
    lines: Vec<Line>,
    sections: Vec<SectionSpan>,
    blocks: Vec<RevealBlock>,
    /// Page-order index of the next staggered child.
    child: usize,
}

impl<'a> Document<'a> {
    fn new(page: &'a Page, now: Instant, width: usize) -> Self {
        Self {
            page,
            now,
            width,
            lines: Vec::new(),
            sections: Vec::new(),
            blocks: Vec::new(),
            child: 0,
        }
    }

    fn section(&mut self, id: &str, heading: bool, body: impl FnOnce(&mut Self)) {
        let top = self.lines.len();
        self.lines.push(Line::blank());
        if heading {
            let title = section_title(id).to_uppercase();
            self.child(vec![
                Line::blank().with(Span::new(title, ThemeToken::Heading).bold()),
                Line::plain(
                    settings::GLYPH_RULE.to_string().repeat(4),
                    ThemeToken::Accent,
                ),
                Line::blank(),
            ]);
        }
        body(self);
        self.lines.push(Line::blank());
        self.sections.push(SectionSpan {
            id: id.to_string(),
            top,
            height: self.lines.len() - top,
        });
    }

    fn next_child_entered(&mut self) -> bool {
        let entered = self.page.stagger.has_entered(self.child, self.now);
        self.child += 1;
        entered
    }

    /// Section child that fades in with the entrance stagger.
    fn child(&mut self, lines: Vec<Line>) {
        let entered = self.next_child_entered();
        self.push_lines(lines, entered);
    }

    /// Section child that also waits for the reveal observer.
    fn observed(&mut self, id: String, section: &str, lines: Vec<Line>, opaque: bool) {
        let entered = self.next_child_entered();
        let visible = entered && self.page.reveal.is_revealed(&id);
        self.blocks.push(RevealBlock {
            id,
            section: section.to_string(),
            top: self.lines.len(),
            height: lines.len(),
        });
        if visible && !opaque {
            let lines = lines.into_iter().map(Line::muted).collect();
            self.push_lines(lines, true);
        } else {
            self.push_lines(lines, visible);
        }
    }

    /// Hidden content still takes its rows so the layout does not jump.
    fn push_lines(&mut self, lines: Vec<Line>, visible: bool) {
        for line in lines {
            let line = if visible { line } else { Line::blank() };
            self.lines.push(line.clip(self.width));
        }
    }

    fn wrapped(&self, text: &str, token: ThemeToken, indent: usize) -> Vec<Line> {
        wrap_paragraphs(text, self.width.saturating_sub(indent).max(1))
            .into_iter()
            .map(|row| Line::plain(row, token).indent(indent))
            .collect()
    }

    fn build(mut self) -> (Vec<Line>, Vec<SectionSpan>, Vec<RevealBlock>) {
        self.section("home", false, Self::home);
        self.section("about", true, Self::about);
        self.section("experience", true, Self::experience);
        self.section("skills", true, Self::skills);
        self.section("projects", true, Self::projects);
        self.section("contact", true, Self::contact);
        let footer = build_info::footer_metadata_line();
        let offset = center_offset(&footer, self.width);
        self.lines
            .push(Line::plain(footer, ThemeToken::Muted).indent(offset));
        (self.lines, self.sections, self.blocks)
    }

    fn home(&mut self) {
        let page = self.page;
        let site = &page.site;
        let mut hero = vec![
            Line::blank(),
            Line::plain("Hi, I'm ", ThemeToken::Text)
                .with(Span::new(site.name.clone(), ThemeToken::Heading).bold()),
            Line::plain(page.typed_text().to_string(), ThemeToken::Typewriter)
                .with(Span::new(settings::GLYPH_CURSOR, ThemeToken::Cursor)),
            Line::blank(),
        ];
        hero.extend(self.wrapped(&site.tagline, ThemeToken::Text, 0));
        hero.push(Line::blank());
        hero.push(Line::plain(
            format!("{}  ·  {}", site.location, site.email),
            ThemeToken::Muted,
        ));
        self.child(hero);
    }

    fn about(&mut self) {
        let page = self.page;
        let mut lines = self.wrapped(&page.site.about, ThemeToken::Text, 0);
        lines.push(Line::blank());

        let mut row = Line::blank();
        for (idx, stat) in page.stats.iter().enumerate() {
            if idx > 0 {
                row = row.with(Span::new("    ", ThemeToken::Text));
            }
            row = row
                .with(Span::new(stat.counter.shown().to_string(), ThemeToken::StatValue).bold())
                .with(Span::new(format!(" {}", stat.label), ThemeToken::StatLabel));
        }
        if row.width() <= self.width {
            lines.push(row);
        } else {
            for stat in &page.stats {
                lines.push(
                    Line::plain(stat.counter.shown().to_string(), ThemeToken::StatValue)
                        .with(Span::new(format!(" {}", stat.label), ThemeToken::StatLabel)),
                );
            }
        }
        self.observed("about-content".to_string(), "about", lines, true);
    }

    fn experience(&mut self) {
        let page = self.page;
        for (idx, item) in page.timeline.iter().enumerate() {
            let mut lines = vec![Line::plain(
                format!("{} ", settings::GLYPH_TIMELINE),
                ThemeToken::Accent,
            )
            .with(Span::new(item.title.clone(), ThemeToken::CardTitle).bold())
            .with(Span::new(
                format!("  {}", item.period),
                ThemeToken::TimelinePeriod,
            ))];
            if !item.detail.is_empty() {
                lines.extend(self.wrapped(&item.detail, ThemeToken::Text, 2));
            }
            lines.push(Line::blank());
            self.observed(format!("timeline-{idx}"), "experience", lines, true);
        }
    }

    fn skills(&mut self) {
        let page = self.page;
        let mut categories: Vec<&str> = Vec::new();
        for bar in &page.skills {
            if !categories.contains(&bar.category.as_str()) {
                categories.push(&bar.category);
            }
        }
        for category in categories {
            let bars: Vec<_> = page
                .skills
                .iter()
                .filter(|bar| bar.category == category)
                .collect();
            let name_width = bars
                .iter()
                .map(|bar| visible_width(&bar.name))
                .max()
                .unwrap_or(0)
                .min(self.width / 3);
            let label = if category.is_empty() { "general" } else { category };
            let mut lines = vec![Line::plain(label.to_string(), ThemeToken::CardCategory)];
            for bar in bars {
                let cells = settings::SKILL_BAR_CELLS
                    .min(self.width.saturating_sub(name_width + 10))
                    .max(4);
                let filled = bar.filled_cells(cells);
                lines.push(
                    Line::plain(
                        format!(
                            "{}{:<name_width$} ",
                            settings::INDENT_1,
                            truncate_single_line(&bar.name, name_width)
                        ),
                        ThemeToken::Text,
                    )
                    .with(Span::new(
                        settings::GLYPH_BAR_FILL.to_string().repeat(filled),
                        ThemeToken::SkillFill,
                    ))
                    .with(Span::new(
                        settings::GLYPH_BAR_TRACK.to_string().repeat(cells - filled),
                        ThemeToken::SkillTrack,
                    ))
                    .with(Span::new(format!(" {:>3}%", bar.percent), ThemeToken::Muted)),
                );
            }
            lines.push(Line::blank());
            self.observed(format!("skills-{label}"), "skills", lines, true);
        }
    }

    fn projects(&mut self) {
        let page = self.page;
        let grid = &page.projects;
        let mut bar = Line::blank();
        for filter in grid.filters() {
            let name = filter.to_string();
            bar = if filter == grid.active() {
                bar.with(Span::new(format!("[{name}]"), ThemeToken::FilterActive).bold())
            } else {
                bar.with(Span::new(format!(" {name} "), ThemeToken::FilterInactive))
            }
            .with(Span::new(" ", ThemeToken::Text));
        }
        self.child(vec![bar, Line::blank()]);

        for (idx, card) in grid.cards().iter().enumerate() {
            if !card.visibility.is_laid_out() {
                continue;
            }
            let mut lines = vec![Line::plain(card.title.clone(), ThemeToken::CardTitle)
                .with(Span::new(
                    format!("  {}", card.category),
                    ThemeToken::CardCategory,
                ))];
            if !card.description.is_empty() {
                lines.extend(self.wrapped(&card.description, ThemeToken::Text, 2));
            }
            if !card.tech.is_empty() {
                let tags: Vec<String> = card.tech.iter().map(|tag| format!("#{tag}")).collect();
                lines.push(Line::plain(tags.join(" "), ThemeToken::CardTag).indent(2));
            }
            lines.push(Line::blank());
            let opaque = card.visibility.is_opaque();
            self.observed(format!("project-{idx}"), "projects", lines, opaque);
        }
    }

    fn contact(&mut self) {
        let page = self.page;
        let site = &page.site;
        let card = vec![
            Line::plain("Email     ", ThemeToken::FormLabel)
                .with(Span::new(site.email.clone(), ThemeToken::Text)),
            Line::plain("Location  ", ThemeToken::FormLabel)
                .with(Span::new(site.location.clone(), ThemeToken::Text)),
            Line::blank(),
        ];
        self.observed("contact-card".to_string(), "contact", card, true);

        if !page.contact_open() {
            self.child(vec![Line::plain(
                settings::HINT_CONTACT_CLOSED,
                ThemeToken::Muted,
            )]);
            return;
        }

        let form = &page.contact;
        let label_width = Field::ALL
            .iter()
            .map(|field| visible_width(field.label()))
            .max()
            .unwrap_or(0)
            + 2;
        let value_width = self.width.saturating_sub(label_width + 3).max(1);
        let mut lines = Vec::new();
        for field in Field::ALL {
            let focused = form.focused == field;
            let marker = if focused { "› " } else { "  " };
            let label_token = if focused {
                ThemeToken::FormFocus
            } else {
                ThemeToken::FormLabel
            };
            let value = form.value(field);
            // Keep the tail visible so the insertion point stays on screen.
            let shown: String = {
                let width = visible_width(value);
                value.chars().skip(width.saturating_sub(value_width)).collect()
            };
            let mut line = Line::plain(marker, label_token)
                .with(Span::new(
                    format!("{:<label_width$}", field.label()),
                    label_token,
                ))
                .with(Span::new(shown, ThemeToken::FormInput));
            if focused {
                line = line.with(Span::new(settings::GLYPH_CURSOR, ThemeToken::Cursor));
            }
            lines.push(line);
        }
        lines.push(Line::blank());
        let button_token = if form.is_sending() {
            ThemeToken::ButtonBusy
        } else {
            ThemeToken::ButtonIdle
        };
        lines.push(Line::blank().with(
            Span::new(format!("[ {} ]", form.button_label()), button_token).bold(),
        ));
        self.child(lines);
    }
}

/// Lay out the whole page and cut the visible screen out of it.
pub fn compose_frame(page: &Page, now: Instant, cols: usize, rows: usize) -> Frame {
    let content_width = cols
        .saturating_sub(4)
        .clamp(settings::CONTENT_MIN_COLUMNS, settings::CONTENT_MAX_COLUMNS);
    let margin = cols.saturating_sub(content_width) / 2;
    let (lines, sections, blocks) = Document::new(page, now, content_width).build();
    let viewport_rows = rows.saturating_sub(settings::HEADER_ROWS + settings::FOOTER_ROWS);
    let layout = PageLayout {
        sections,
        blocks,
        total_rows: lines.len(),
        viewport_rows,
    };

    let phase = page.splash_phase(now);
    if phase != SplashPhase::Hidden {
        return Frame {
            rows: splash_rows(page, now, phase, cols, rows),
            layout,
        };
    }

    let mut screen = Vec::with_capacity(rows);
    screen.push(navbar(page, cols));
    let (rule_glyph, rule_token) = if page.nav.scrolled {
        (settings::GLYPH_RULE_SCROLLED, ThemeToken::NavScrolled)
    } else {
        (settings::GLYPH_RULE, ThemeToken::Muted)
    };
    screen.push(Line::plain(
        rule_glyph.to_string().repeat(cols),
        rule_token,
    ));

    let scroll = page.nav.scroll_y.min(lines.len());
    let mut body: Vec<Line> = lines
        .iter()
        .skip(scroll)
        .take(viewport_rows)
        .cloned()
        .map(|line| line.indent(margin).clip(cols))
        .collect();
    body.resize(viewport_rows, Line::blank());

    if page.nav.menu_open {
        for (idx, id) in SECTION_IDS.iter().enumerate() {
            let Some(row) = body.get_mut(idx) else {
                break;
            };
            let active = page.nav.active_section.as_deref() == Some(*id);
            let token = if active {
                ThemeToken::NavLinkActive
            } else {
                ThemeToken::NavLink
            };
            let entry = Line::plain(format!(" {} {:<12}", idx + 1, section_title(id)), token);
            *row = std::mem::take(row).overlay_right(entry, cols);
        }
    }

    if let Some(toast) = page.toasts.current() {
        if let Some(row) = body.last_mut() {
            let token = match toast.severity {
                Severity::Success => ThemeToken::ToastSuccess,
                Severity::Error => ThemeToken::ToastError,
                Severity::Info => ThemeToken::ToastInfo,
            };
            let max = settings::TOAST_MAX_COLUMNS.min(cols.saturating_sub(8));
            let mut overlay = Line::plain(format!(" {} ", toast.severity.glyph()), token)
                .with(Span::new(
                    truncate_single_line(&toast.message, max),
                    ThemeToken::ToastText,
                ))
                .with(Span::new(
                    format!(" {} ", settings::GLYPH_TOAST_CLOSE),
                    ThemeToken::Muted,
                ));
            if toast.is_leaving() {
                overlay = overlay.muted();
            }
            *row = std::mem::take(row).overlay_right(overlay, cols);
        }
    }
    screen.extend(body);

    let hint = if page.contact_open() {
        settings::HINT_FORM
    } else {
        settings::HINT_BROWSE
    };
    let mut footer = Line::plain(truncate_single_line(hint, cols), ThemeToken::Muted);
    if page.nav.back_to_top_visible {
        footer = footer.overlay_right(
            Line::plain(format!(" {}", settings::GLYPH_BACK_TO_TOP), ThemeToken::BackToTop),
            cols,
        );
    }
    screen.push(footer);
    screen.truncate(rows);

    Frame {
        rows: screen,
        layout,
    }
}

fn navbar(page: &Page, cols: usize) -> Line {
    let mut line = Line::plain(" ", ThemeToken::Text)
        .with(Span::new(page.site.name.clone(), ThemeToken::NavBrand).bold());
    if cols >= settings::NAV_COMPACT_COLUMNS {
        line = line.with(Span::new("   ", ThemeToken::Text));
        for (idx, id) in SECTION_IDS.iter().enumerate() {
            let active = page.nav.active_section.as_deref() == Some(*id);
            let span = Span::new(
                format!("{} {}  ", idx + 1, section_title(id)),
                if active {
                    ThemeToken::NavLinkActive
                } else {
                    ThemeToken::NavLink
                },
            );
            line = line.with(if active { span.bold() } else { span });
        }
    }

    let menu_glyph = if page.nav.menu_open {
        settings::GLYPH_MENU_OPEN
    } else {
        settings::GLYPH_MENU
    };
    let menu = Span::new(
        format!("[{menu_glyph}]"),
        if page.nav.hamburger_focused {
            ThemeToken::NavLinkActive
        } else {
            ThemeToken::NavLink
        },
    );
    let controls = Line::plain(format!("{} ", page.theme.toggle_glyph()), ThemeToken::Accent)
        .with(if page.nav.hamburger_focused {
            menu.bold()
        } else {
            menu
        })
        .with(Span::new(" ", ThemeToken::Text));
    line.overlay_right(controls, cols)
}

fn splash_rows(
    page: &Page,
    now: Instant,
    phase: SplashPhase,
    cols: usize,
    rows: usize,
) -> Vec<Line> {
    let text = progress_line(
        &format!("loading {}", page.site.name),
        page.splash.elapsed(now),
    );
    let offset = center_offset(&text, cols);
    // Frames are ASCII, so the `[x]` prefix is always three bytes.
    let (frame, label) = text.split_at(3.min(text.len()));
    let mut line = Line::plain(frame, ThemeToken::SplashFrame)
        .with(Span::new(label, ThemeToken::SplashLabel))
        .indent(offset);
    if phase == SplashPhase::Fading {
        line = line.muted();
    }
    let mut screen = vec![Line::blank(); rows];
    if let Some(row) = screen.get_mut(rows / 2) {
        *row = line.clip(cols);
    }
    screen
}

/// Draws composed frames to a terminal.
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    /// Whether ANSI color/style output is enabled.
    color: bool,
}

impl Renderer {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    /// Repaint every row of `frame` from the top-left corner.
    pub fn draw<W: Write>(&self, out: &mut W, frame: &Frame, theme: &Theme) -> io::Result<()> {
        for (idx, row) in frame.rows.iter().enumerate() {
            let y = u16::try_from(idx).unwrap_or(u16::MAX);
            out.queue(MoveTo(0, y))?;
            for span in &row.spans {
                if self.color {
                    let styled = span.text.as_str().with(theme.color(span.token));
                    if span.bold {
                        out.queue(PrintStyledContent(styled.bold()))?;
                    } else {
                        out.queue(PrintStyledContent(styled))?;
                    }
                } else {
                    out.queue(Print(span.text.as_str()))?;
                }
            }
            out.queue(Clear(ClearType::UntilNewLine))?;
        }
        out.flush()
    }
}
