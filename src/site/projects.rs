//! Filterable project grid.

use std::fmt;
use std::time::{Duration, Instant};

use crate::config::ProjectEntry;

/// Delay before a shown card becomes opaque.
pub const FADE_IN_DELAY: Duration = Duration::from_millis(100);
/// Fade-out time before a hidden card leaves the layout.
pub const FADE_OUT_DELAY: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Filter {
    #[default]
    All,
    Category(String),
}

impl Filter {
    /// `all` maps to [`Filter::All`]; anything else is a category.
    pub fn parse(value: &str) -> Self {
        if value == "all" {
            Self::All
        } else {
            Self::Category(value.to_string())
        }
    }

    pub fn matches(&self, category: &str) -> bool {
        match self {
            Self::All => true,
            Self::Category(wanted) => wanted == category,
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("all"),
            Self::Category(category) => f.write_str(category),
        }
    }
}

/// Visibility phase of a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardVisibility {
    Shown,
    /// Laid out but still transparent until `at`.
    FadingIn { at: Instant },
    /// Transparent, still taking space until `at`.
    FadingOut { at: Instant },
    Hidden,
}

impl CardVisibility {
    /// Whether the card occupies rows in the grid.
    pub fn is_laid_out(&self) -> bool {
        !matches!(self, Self::Hidden)
    }

    /// Whether the card content is drawn at full strength.
    pub fn is_opaque(&self) -> bool {
        matches!(self, Self::Shown)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectCard {
    pub title: String,
    pub category: String,
    pub description: String,
    pub tech: Vec<String>,
    pub visibility: CardVisibility,
}

impl From<&ProjectEntry> for ProjectCard {
    fn from(entry: &ProjectEntry) -> Self {
        Self {
            title: entry.title.clone(),
            category: entry.category.clone(),
            description: entry.description.clone(),
            tech: entry.tech.clone(),
            visibility: CardVisibility::Shown,
        }
    }
}

impl ProjectCard {
    fn show(&mut self, now: Instant) {
        self.visibility = match self.visibility {
            CardVisibility::Shown => CardVisibility::Shown,
            CardVisibility::FadingIn { at } => CardVisibility::FadingIn { at },
            CardVisibility::FadingOut { .. } | CardVisibility::Hidden => {
                CardVisibility::FadingIn {
                    at: now + FADE_IN_DELAY,
                }
            }
        };
    }

    fn hide(&mut self, now: Instant) {
        self.visibility = match self.visibility {
            CardVisibility::Hidden => CardVisibility::Hidden,
            CardVisibility::FadingOut { at } => CardVisibility::FadingOut { at },
            CardVisibility::Shown | CardVisibility::FadingIn { .. } => CardVisibility::FadingOut {
                at: now + FADE_OUT_DELAY,
            },
        };
    }

    fn tick(&mut self, now: Instant) {
        self.visibility = match self.visibility {
            CardVisibility::FadingIn { at } if at <= now => CardVisibility::Shown,
            CardVisibility::FadingOut { at } if at <= now => CardVisibility::Hidden,
            other => other,
        };
    }
}

/// Filter buttons plus the cards they control.
#[derive(Debug, Clone)]
pub struct ProjectGrid {
    active: Filter,
    filters: Vec<Filter>,
    cards: Vec<ProjectCard>,
}

impl ProjectGrid {
    /// Build the grid with one filter per distinct category, in card order.
    pub fn new(entries: &[ProjectEntry]) -> Self {
        let cards: Vec<ProjectCard> = entries.iter().map(ProjectCard::from).collect();
        let mut filters = vec![Filter::All];
        for card in &cards {
            let filter = Filter::Category(card.category.clone());
            if !filters.contains(&filter) {
                filters.push(filter);
            }
        }
        Self {
            active: Filter::All,
            filters,
            cards,
        }
    }

    pub fn active(&self) -> &Filter {
        &self.active
    }

    pub fn filters(&self) -> &[Filter] {
        &self.filters
    }

    pub fn cards(&self) -> &[ProjectCard] {
        &self.cards
    }

    /// Make `filter` the single active filter and show or hide every card.
    pub fn apply(&mut self, filter: Filter, now: Instant) {
        for card in &mut self.cards {
            if filter.matches(&card.category) {
                card.show(now);
            } else {
                card.hide(now);
            }
        }
        tracing::debug!(filter = %filter, "project filter applied");
        self.active = filter;
    }

    /// Press the next filter button, wrapping after the last one.
    pub fn cycle(&mut self, now: Instant) {
        let position = self
            .filters
            .iter()
            .position(|filter| *filter == self.active)
            .unwrap_or(0);
        let next = self.filters[(position + 1) % self.filters.len()].clone();
        self.apply(next, now);
    }

    pub fn tick(&mut self, now: Instant) {
        for card in &mut self.cards {
            card.tick(now);
        }
    }

    pub fn visible_cards(&self) -> impl Iterator<Item = &ProjectCard> {
        self.cards
            .iter()
            .filter(|card| card.visibility.is_laid_out())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(title: &str, category: &str) -> ProjectEntry {
        ProjectEntry {
            title: title.to_string(),
            category: category.to_string(),
            description: String::new(),
            tech: Vec::new(),
        }
    }

    fn grid() -> ProjectGrid {
        ProjectGrid::new(&[
            entry("Weather", "web"),
            entry("Chess", "games"),
            entry("Blog", "web"),
        ])
    }

    #[test]
    fn filters_follow_first_seen_category_order() {
        let grid = grid();
        let names: Vec<String> = grid.filters().iter().map(ToString::to_string).collect();
        assert_eq!(names, vec!["all", "web", "games"]);
        assert_eq!(*grid.active(), Filter::All);
    }

    #[test]
    fn parse_distinguishes_all_from_categories() {
        assert_eq!(Filter::parse("all"), Filter::All);
        assert_eq!(Filter::parse("web"), Filter::Category("web".into()));
        assert!(Filter::All.matches("anything"));
        assert!(!Filter::parse("web").matches("games"));
    }

    #[test]
    fn non_matching_cards_fade_out_then_hide() {
        let now = Instant::now();
        let mut grid = grid();
        grid.apply(Filter::parse("web"), now);
        assert_eq!(
            grid.cards()[1].visibility,
            CardVisibility::FadingOut {
                at: now + FADE_OUT_DELAY
            }
        );
        assert_eq!(grid.visible_cards().count(), 3);

        grid.tick(now + FADE_OUT_DELAY);
        assert_eq!(grid.cards()[1].visibility, CardVisibility::Hidden);
        let titles: Vec<&str> = grid.visible_cards().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, vec!["Weather", "Blog"]);
    }

    #[test]
    fn hidden_cards_are_laid_out_before_they_fade_in() {
        let now = Instant::now();
        let mut grid = grid();
        grid.apply(Filter::parse("games"), now);
        grid.tick(now + FADE_OUT_DELAY);
        let later = now + Duration::from_secs(1);
        grid.apply(Filter::All, later);

        let weather = &grid.cards()[0];
        assert!(weather.visibility.is_laid_out());
        assert!(!weather.visibility.is_opaque());
        grid.tick(later + FADE_IN_DELAY);
        assert!(grid.cards().iter().all(|c| c.visibility.is_opaque()));
    }

    #[test]
    fn cycling_wraps_back_to_all() {
        let now = Instant::now();
        let mut grid = grid();
        grid.cycle(now);
        assert_eq!(*grid.active(), Filter::parse("web"));
        grid.cycle(now);
        assert_eq!(*grid.active(), Filter::parse("games"));
        grid.cycle(now);
        assert_eq!(*grid.active(), Filter::All);
    }

    #[test]
    fn shown_cards_stay_opaque_when_filter_still_matches() {
        let now = Instant::now();
        let mut grid = grid();
        grid.apply(Filter::parse("web"), now);
        assert_eq!(grid.cards()[0].visibility, CardVisibility::Shown);
    }

    #[test]
    fn empty_grid_still_cycles() {
        let now = Instant::now();
        let mut grid = ProjectGrid::new(&[]);
        grid.cycle(now);
        assert_eq!(*grid.active(), Filter::All);
        assert_eq!(grid.visible_cards().count(), 0);
    }
}
