//! Semantic terminal theme system.
//!
//! All page colors resolve through a [`Theme`] so toggling between dark and
//! light updates the whole page consistently. Individual tokens can be
//! overridden from `[themes.dark]` / `[themes.light]` config tables.

use crossterm::style::Color;
use std::collections::BTreeMap;

/// The two page themes. Dark is the default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl ThemeMode {
    /// Persisted string value.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    /// Parse a theme name, ignoring case and surrounding whitespace.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "dark" => Some(Self::Dark),
            "light" => Some(Self::Light),
            _ => None,
        }
    }

    /// Resolve a stored preference: only `light` selects light.
    pub fn from_saved(value: Option<&str>) -> Self {
        match value {
            Some("light") => Self::Light,
            _ => Self::Dark,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    /// Glyph on the toggle button: the sun switches to light, the moon back to dark.
    pub fn toggle_glyph(self) -> &'static str {
        match self {
            Self::Dark => "☀",
            Self::Light => "☾",
        }
    }
}

/// Semantic color token used by page rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ThemeToken {
    Text,
    Muted,
    Accent,
    Heading,
    NavBrand,
    NavLink,
    NavLinkActive,
    NavScrolled,
    Typewriter,
    Cursor,
    CardTitle,
    CardCategory,
    CardTag,
    FilterActive,
    FilterInactive,
    StatValue,
    StatLabel,
    SkillFill,
    SkillTrack,
    TimelinePeriod,
    FormLabel,
    FormFocus,
    FormInput,
    ButtonIdle,
    ButtonBusy,
    ToastSuccess,
    ToastError,
    ToastInfo,
    ToastText,
    BackToTop,
    SplashFrame,
    SplashLabel,
}

impl ThemeToken {
    /// Stable config key for this token (used by `[themes.<name>]` overrides).
    pub fn key(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Muted => "muted",
            Self::Accent => "accent",
            Self::Heading => "heading",
            Self::NavBrand => "nav_brand",
            Self::NavLink => "nav_link",
            Self::NavLinkActive => "nav_link_active",
            Self::NavScrolled => "nav_scrolled",
            Self::Typewriter => "typewriter",
            Self::Cursor => "cursor",
            Self::CardTitle => "card_title",
            Self::CardCategory => "card_category",
            Self::CardTag => "card_tag",
            Self::FilterActive => "filter_active",
            Self::FilterInactive => "filter_inactive",
            Self::StatValue => "stat_value",
            Self::StatLabel => "stat_label",
            Self::SkillFill => "skill_fill",
            Self::SkillTrack => "skill_track",
            Self::TimelinePeriod => "timeline_period",
            Self::FormLabel => "form_label",
            Self::FormFocus => "form_focus",
            Self::FormInput => "form_input",
            Self::ButtonIdle => "button_idle",
            Self::ButtonBusy => "button_busy",
            Self::ToastSuccess => "toast_success",
            Self::ToastError => "toast_error",
            Self::ToastInfo => "toast_info",
            Self::ToastText => "toast_text",
            Self::BackToTop => "back_to_top",
            Self::SplashFrame => "splash_frame",
            Self::SplashLabel => "splash_label",
        }
    }

    fn all() -> &'static [ThemeToken] {
        &[
            Self::Text,
            Self::Muted,
            Self::Accent,
            Self::Heading,
            Self::NavBrand,
            Self::NavLink,
            Self::NavLinkActive,
            Self::NavScrolled,
            Self::Typewriter,
            Self::Cursor,
            Self::CardTitle,
            Self::CardCategory,
            Self::CardTag,
            Self::FilterActive,
            Self::FilterInactive,
            Self::StatValue,
            Self::StatLabel,
            Self::SkillFill,
            Self::SkillTrack,
            Self::TimelinePeriod,
            Self::FormLabel,
            Self::FormFocus,
            Self::FormInput,
            Self::ButtonIdle,
            Self::ButtonBusy,
            Self::ToastSuccess,
            Self::ToastError,
            Self::ToastInfo,
            Self::ToastText,
            Self::BackToTop,
            Self::SplashFrame,
            Self::SplashLabel,
        ]
    }
}

/// Color table for one mode.
#[derive(Debug, Clone)]
pub struct Theme {
    pub mode: ThemeMode,
    colors: BTreeMap<ThemeToken, Color>,
}

impl Theme {
    /// Built-in palette for `mode`.
    pub fn builtin(mode: ThemeMode) -> Self {
        let colors = match mode {
            ThemeMode::Dark => dark_colors(),
            ThemeMode::Light => light_colors(),
        };
        Self { mode, colors }
    }

    pub fn color(&self, token: ThemeToken) -> Color {
        self.colors.get(&token).copied().unwrap_or(Color::Reset)
    }
}

/// Both palettes, with config overrides applied.
#[derive(Debug, Clone)]
pub struct ThemeSet {
    dark: Theme,
    light: Theme,
}

impl Default for ThemeSet {
    fn default() -> Self {
        Self {
            dark: Theme::builtin(ThemeMode::Dark),
            light: Theme::builtin(ThemeMode::Light),
        }
    }
}

impl ThemeSet {
    /// Build palettes from `[themes.<mode>]` overrides.
    ///
    /// Unknown tables, unknown token keys, and unparsable colors are skipped;
    /// each skip is reported in the returned warnings.
    pub fn from_overrides(
        overrides: &BTreeMap<String, BTreeMap<String, String>>,
    ) -> (Self, Vec<String>) {
        let mut set = Self::default();
        let mut warnings = Vec::new();
        for (name, values) in overrides {
            let Some(mode) = ThemeMode::parse(name) else {
                continue;
            };
            let theme = match mode {
                ThemeMode::Dark => &mut set.dark,
                ThemeMode::Light => &mut set.light,
            };
            for (key, value) in values {
                let Some(token) = token_from_key(key) else {
                    warnings.push(format!("[themes.{name}] unknown token `{key}`"));
                    continue;
                };
                match parse_color(value) {
                    Ok(color) => {
                        theme.colors.insert(token, color);
                    }
                    Err(err) => warnings.push(format!("[themes.{name}] {key}: {err}")),
                }
            }
        }
        (set, warnings)
    }

    pub fn get(&self, mode: ThemeMode) -> &Theme {
        match mode {
            ThemeMode::Dark => &self.dark,
            ThemeMode::Light => &self.light,
        }
    }
}

fn token_from_key(key: &str) -> Option<ThemeToken> {
    let normalized = key.trim().to_ascii_lowercase();
    ThemeToken::all()
        .iter()
        .copied()
        .find(|token| token.key() == normalized)
}

fn dark_colors() -> BTreeMap<ThemeToken, Color> {
    let text = rgb_color(0xe6, 0xe6, 0xf0);
    let muted = rgb_color(0x8a, 0x8f, 0xa8);
    let track = rgb_color(0x33, 0x36, 0x4a);
    let purple = rgb_color(0x8b, 0x5c, 0xf6);
    let cyan = rgb_color(0x22, 0xd3, 0xee);
    let green = rgb_color(0x4c, 0xaf, 0x50);
    let red = rgb_color(0xf4, 0x43, 0x36);
    let blue = rgb_color(0x21, 0x96, 0xf3);
    let amber = rgb_color(0xf5, 0x9e, 0x0b);

    let mut map = BTreeMap::new();
    map.insert(ThemeToken::Text, text);
    map.insert(ThemeToken::Muted, muted);
    map.insert(ThemeToken::Accent, purple);
    map.insert(ThemeToken::Heading, text);
    map.insert(ThemeToken::NavBrand, purple);
    map.insert(ThemeToken::NavLink, muted);
    map.insert(ThemeToken::NavLinkActive, cyan);
    map.insert(ThemeToken::NavScrolled, rgb_color(0x1a, 0x1b, 0x2e));
    map.insert(ThemeToken::Typewriter, cyan);
    map.insert(ThemeToken::Cursor, purple);
    map.insert(ThemeToken::CardTitle, text);
    map.insert(ThemeToken::CardCategory, amber);
    map.insert(ThemeToken::CardTag, muted);
    map.insert(ThemeToken::FilterActive, purple);
    map.insert(ThemeToken::FilterInactive, muted);
    map.insert(ThemeToken::StatValue, cyan);
    map.insert(ThemeToken::StatLabel, muted);
    map.insert(ThemeToken::SkillFill, purple);
    map.insert(ThemeToken::SkillTrack, track);
    map.insert(ThemeToken::TimelinePeriod, amber);
    map.insert(ThemeToken::FormLabel, muted);
    map.insert(ThemeToken::FormFocus, cyan);
    map.insert(ThemeToken::FormInput, text);
    map.insert(ThemeToken::ButtonIdle, purple);
    map.insert(ThemeToken::ButtonBusy, muted);
    map.insert(ThemeToken::ToastSuccess, green);
    map.insert(ThemeToken::ToastError, red);
    map.insert(ThemeToken::ToastInfo, blue);
    map.insert(ThemeToken::ToastText, Color::White);
    map.insert(ThemeToken::BackToTop, purple);
    map.insert(ThemeToken::SplashFrame, cyan);
    map.insert(ThemeToken::SplashLabel, muted);
    map
}

fn light_colors() -> BTreeMap<ThemeToken, Color> {
    let text = rgb_color(0x1f, 0x20, 0x33);
    let muted = rgb_color(0x5c, 0x60, 0x78);
    let track = rgb_color(0xd8, 0xda, 0xe6);
    let purple = rgb_color(0x6d, 0x28, 0xd9);
    let teal = rgb_color(0x0e, 0x74, 0x90);
    let green = rgb_color(0x4c, 0xaf, 0x50);
    let red = rgb_color(0xf4, 0x43, 0x36);
    let blue = rgb_color(0x21, 0x96, 0xf3);
    let amber = rgb_color(0xb4, 0x53, 0x09);

    let mut map = BTreeMap::new();
    map.insert(ThemeToken::Text, text);
    map.insert(ThemeToken::Muted, muted);
    map.insert(ThemeToken::Accent, purple);
    map.insert(ThemeToken::Heading, text);
    map.insert(ThemeToken::NavBrand, purple);
    map.insert(ThemeToken::NavLink, muted);
    map.insert(ThemeToken::NavLinkActive, teal);
    map.insert(ThemeToken::NavScrolled, rgb_color(0xee, 0xef, 0xf7));
    map.insert(ThemeToken::Typewriter, teal);
    map.insert(ThemeToken::Cursor, purple);
    map.insert(ThemeToken::CardTitle, text);
    map.insert(ThemeToken::CardCategory, amber);
    map.insert(ThemeToken::CardTag, muted);
    map.insert(ThemeToken::FilterActive, purple);
    map.insert(ThemeToken::FilterInactive, muted);
    map.insert(ThemeToken::StatValue, teal);
    map.insert(ThemeToken::StatLabel, muted);
    map.insert(ThemeToken::SkillFill, purple);
    map.insert(ThemeToken::SkillTrack, track);
    map.insert(ThemeToken::TimelinePeriod, amber);
    map.insert(ThemeToken::FormLabel, muted);
    map.insert(ThemeToken::FormFocus, teal);
    map.insert(ThemeToken::FormInput, text);
    map.insert(ThemeToken::ButtonIdle, purple);
    map.insert(ThemeToken::ButtonBusy, muted);
    map.insert(ThemeToken::ToastSuccess, green);
    map.insert(ThemeToken::ToastError, red);
    map.insert(ThemeToken::ToastInfo, blue);
    map.insert(ThemeToken::ToastText, Color::White);
    map.insert(ThemeToken::BackToTop, purple);
    map.insert(ThemeToken::SplashFrame, teal);
    map.insert(ThemeToken::SplashLabel, muted);
    map
}

fn parse_color(input: &str) -> Result<Color, String> {
    let normalized = input.trim().to_ascii_lowercase();
    if normalized.is_empty() {
        return Err("theme color value cannot be empty".to_string());
    }
    if let Some(hex) = normalized.strip_prefix('#') {
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(format!("invalid hex color `{input}` (expected #RRGGBB)"));
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16).map_err(|_| format!("invalid hex color `{input}`"))
        };
        return Ok(Color::Rgb {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        });
    }

    let color = match normalized.as_str() {
        "black" => Color::Black,
        "darkgrey" | "dark-gray" | "dark_grey" => Color::DarkGrey,
        "grey" | "gray" => Color::Grey,
        "white" => Color::White,
        "red" => Color::Red,
        "green" => Color::Green,
        "yellow" => Color::Yellow,
        "blue" => Color::Blue,
        "magenta" => Color::Magenta,
        "cyan" => Color::Cyan,
        _ => return Err(format!("unsupported color value `{input}`")),
    };
    Ok(color)
}

fn rgb_color(r: u8, g: u8, b: u8) -> Color {
    Color::Rgb { r, g, b }
}
