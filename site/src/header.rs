//! Navigation state machine behind the site header.
//!
//! The state is plain data; the browser layer applies it to the DOM after
//! every transition. Invariants held after every call:
//!
//! - at most one dropdown is open;
//! - the mobile menu and the mobile search bar are never open together.

use std::time::Duration;

use crate::config::SiteConfig;
use crate::nav::{self, ActiveNav, NavLink};
use crate::scroll::{HeaderScroll, ScrollTracker};

#[derive(Debug, Clone)]
pub struct HeaderState {
    current_page: String,
    dropdown_count: usize,
    active_dropdown: Option<usize>,
    mobile_menu_open: bool,
    mobile_search_open: bool,
    scroll: ScrollTracker,
    position: HeaderScroll,
    search_focus_delay: Duration,
}

/// What the caller has to do after toggling the search bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchToggle {
    pub open: bool,
    /// Set when the bar just opened; focus its input after this delay.
    pub focus_after: Option<Duration>,
}

impl HeaderState {
    pub fn new(path: &str, dropdown_count: usize, config: &SiteConfig) -> Self {
        Self {
            current_page: nav::current_page(path),
            dropdown_count,
            active_dropdown: None,
            mobile_menu_open: false,
            mobile_search_open: false,
            scroll: ScrollTracker::from_config(config),
            position: HeaderScroll::default(),
            search_focus_delay: config.search_focus_delay(),
        }
    }

    pub fn current_page(&self) -> &str {
        &self.current_page
    }

    pub fn active_dropdown(&self) -> Option<usize> {
        self.active_dropdown
    }

    pub fn is_dropdown_open(&self, idx: usize) -> bool {
        self.active_dropdown == Some(idx)
    }

    pub fn mobile_menu_open(&self) -> bool {
        self.mobile_menu_open
    }

    pub fn mobile_search_open(&self) -> bool {
        self.mobile_search_open
    }

    pub fn position(&self) -> HeaderScroll {
        self.position
    }

    /// One-time resolution of the active links for this page.
    pub fn resolve_nav(&self, links: &[NavLink]) -> ActiveNav {
        nav::resolve_active(links, &self.current_page)
    }

    pub fn toggle_mobile_menu(&mut self) -> bool {
        self.mobile_menu_open = !self.mobile_menu_open;
        self.mobile_search_open = false;
        self.mobile_menu_open
    }

    pub fn close_mobile_menu(&mut self) {
        self.mobile_menu_open = false;
    }

    pub fn toggle_mobile_search(&mut self) -> SearchToggle {
        self.mobile_search_open = !self.mobile_search_open;
        self.mobile_menu_open = false;
        SearchToggle {
            open: self.mobile_search_open,
            focus_after: self.mobile_search_open.then_some(self.search_focus_delay),
        }
    }

    pub fn close_mobile_search(&mut self) {
        self.mobile_search_open = false;
    }

    /// Opens `idx` (closing any other) or closes it if it is the open one.
    /// Unknown indices only close what is open.
    pub fn toggle_dropdown(&mut self, idx: usize) {
        let was_open = self.is_dropdown_open(idx);
        self.active_dropdown = None;
        if !was_open && idx < self.dropdown_count {
            self.active_dropdown = Some(idx);
        }
    }

    /// Record `idx` as already open, e.g. the current page's dropdown that
    /// is highlighted at mount. The next toggle on it closes it.
    pub fn mark_open(&mut self, idx: usize) {
        if idx < self.dropdown_count {
            self.active_dropdown = Some(idx);
        }
    }

    pub fn close_all_dropdowns(&mut self) {
        self.active_dropdown = None;
    }

    /// Document click; `inside_dropdown` is whether the target sits in any dropdown.
    pub fn document_click(&mut self, inside_dropdown: bool) {
        if !inside_dropdown {
            self.close_all_dropdowns();
        }
    }

    pub fn escape(&mut self) {
        self.close_mobile_menu();
        self.close_all_dropdowns();
        self.close_mobile_search();
    }

    /// A link inside the mobile menu was followed. Search is already closed
    /// whenever the menu is open, so it is left alone.
    pub fn nav_link_clicked(&mut self) {
        self.close_mobile_menu();
        self.close_all_dropdowns();
    }

    pub fn scroll_to(&mut self, offset: f64) -> HeaderScroll {
        self.position = self.scroll.update(offset);
        self.position
    }
}
