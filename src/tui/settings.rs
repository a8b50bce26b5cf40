//! Centralized, hardcoded UI settings for the terminal page.
//!
//! This is the single place to tweak glyphs, margins, key hints and the
//! frame cadence.

// ---------------------------------------------------------------------------
// Layout
// ---------------------------------------------------------------------------

pub const INDENT_1: &str = "  ";
pub const INDENT_2: &str = "    ";
/// Widest content column; wider terminals get side margins.
pub const CONTENT_MAX_COLUMNS: usize = 96;
pub const CONTENT_MIN_COLUMNS: usize = 20;
/// Below this width nav links collapse behind the menu toggle.
pub const NAV_COMPACT_COLUMNS: usize = 72;
/// Rows above the scrolling page: navbar plus rule.
pub const HEADER_ROWS: usize = 2;
/// Rows below the scrolling page: status line.
pub const FOOTER_ROWS: usize = 1;
pub const SKILL_BAR_CELLS: usize = 24;
pub const TOAST_MAX_COLUMNS: usize = 56;

// ---------------------------------------------------------------------------
// Glyphs
// ---------------------------------------------------------------------------

pub const GLYPH_CURSOR: &str = "▌";
pub const GLYPH_MENU: &str = "≡";
pub const GLYPH_MENU_OPEN: &str = "×";
pub const GLYPH_TIMELINE: &str = "●";
pub const GLYPH_BAR_FILL: char = '█';
pub const GLYPH_BAR_TRACK: char = '░';
pub const GLYPH_RULE: char = '─';
pub const GLYPH_RULE_SCROLLED: char = '━';
pub const GLYPH_BACK_TO_TOP: &str = "↑ top (g)";
pub const GLYPH_TOAST_CLOSE: &str = "[x]";

// ---------------------------------------------------------------------------
// Spinner / frame cadence
// ---------------------------------------------------------------------------

pub const PROGRESS_FRAMES: [char; 4] = ['|', '/', '-', '\\'];
pub const PROGRESS_TICK_MS: u64 = 100;

/// Interval of the page tick that advances time-based animations.
pub const TICK_MS: u64 = 20;
/// Blocking input poll timeout; bounds shutdown latency of the reader.
pub const INPUT_POLL_MS: u64 = 80;

// ---------------------------------------------------------------------------
// Labels
// ---------------------------------------------------------------------------

pub const LABEL_WARNING: &str = "warning:";
pub const LABEL_ERROR: &str = "error:";
pub const HINT_BROWSE: &str =
    "j/k scroll  1-6 jump  m menu  t theme  f filter  c contact  x close toast  q quit";
pub const HINT_FORM: &str = "tab next field  enter send  esc close form";
pub const HINT_CONTACT_CLOSED: &str = "Press c to write a message.";
