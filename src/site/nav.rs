//! Navigation state: navbar style, mobile menu, section tracking, back-to-top.
//!
//! Scroll positions and section spans are measured in rendered rows.

use crate::config::LayoutConfig;

/// Rendered extent of one page section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionSpan {
    pub id: String,
    pub top: usize,
    pub height: usize,
}

impl SectionSpan {
    fn contains(&self, row: usize) -> bool {
        row >= self.top && row < self.top + self.height
    }
}

/// Keys the navigation layer reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    Escape,
    Enter,
    Space,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavState {
    pub scroll_y: usize,
    /// Compact navbar style once scrolled past the threshold.
    pub scrolled: bool,
    pub menu_open: bool,
    /// Keyboard focus sits on the menu toggle.
    pub hamburger_focused: bool,
    pub active_section: Option<String>,
    pub back_to_top_visible: bool,
}

impl NavState {
    /// Record a new scroll offset and update the navbar style immediately.
    ///
    /// Active-section and back-to-top state are refreshed separately through
    /// [`NavState::refresh_scroll_dependents`], which callers debounce.
    pub fn scroll_to(&mut self, scroll_y: usize, layout: &LayoutConfig) {
        self.scroll_y = scroll_y;
        self.scrolled = scroll_y > layout.scroll_threshold;
    }

    /// Recompute the active section and the back-to-top marker.
    pub fn refresh_scroll_dependents(&mut self, sections: &[SectionSpan], layout: &LayoutConfig) {
        self.back_to_top_visible = self.scroll_y > layout.back_to_top_threshold;
        let probe = self.scroll_y + layout.active_probe_offset;
        if let Some(section) = sections.iter().find(|section| section.contains(probe)) {
            self.active_section = Some(section.id.clone());
        }
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    /// Scroll offset that puts `id` just below the header, or `None` for an unknown id.
    pub fn jump_target(
        &self,
        id: &str,
        sections: &[SectionSpan],
        layout: &LayoutConfig,
    ) -> Option<usize> {
        sections
            .iter()
            .find(|section| section.id == id)
            .map(|section| section.top.saturating_sub(layout.header_offset))
    }

    /// Follow a nav link: scroll to the section (if known) and close the menu.
    pub fn follow_link(&mut self, id: &str, sections: &[SectionSpan], layout: &LayoutConfig) {
        if let Some(target) = self.jump_target(id, sections, layout) {
            self.scroll_to(target, layout);
        }
        self.close_menu();
    }

    pub fn back_to_top(&mut self, layout: &LayoutConfig) {
        self.scroll_to(0, layout);
    }

    /// Keyboard rules for the menu. Returns true when the key was consumed.
    pub fn handle_key(&mut self, key: NavKey) -> bool {
        match key {
            NavKey::Escape if self.menu_open => {
                self.close_menu();
                true
            }
            NavKey::Enter | NavKey::Space if self.hamburger_focused => {
                self.toggle_menu();
                true
            }
            _ => false,
        }
    }
}
