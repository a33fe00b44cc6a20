//! Current-page detection and active navigation resolution.

use std::collections::BTreeSet;

pub const HOME_PAGE: &str = "home";

/// Page identifier for a URL path: last segment, `.html` stripped,
/// empty or `index` mapped to [`HOME_PAGE`].
pub fn current_page(path: &str) -> String {
    let last = path.rsplit('/').next().unwrap_or("");
    let page = last.strip_suffix(".html").unwrap_or(last);
    match page {
        "" | "index" => HOME_PAGE.to_string(),
        other => other.to_string(),
    }
}

/// A navigation link as seen by the resolver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    /// Value of the link's `data-page`, if it declares one.
    pub page: Option<String>,
    /// Index of the dropdown the link sits in, if any.
    pub dropdown: Option<usize>,
}

impl NavLink {
    pub fn new(page: Option<&str>, dropdown: Option<usize>) -> Self {
        Self {
            page: page.map(str::to_string),
            dropdown,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActiveNav {
    /// One flag per input link, same order.
    pub links: Vec<bool>,
    pub dropdowns: BTreeSet<usize>,
}

impl ActiveNav {
    pub fn active_count(&self) -> usize {
        self.links.iter().filter(|a| **a).count()
    }
}

pub fn resolve_active(links: &[NavLink], current: &str) -> ActiveNav {
    let mut active = ActiveNav::default();
    for link in links {
        let is_active = link.page.as_deref() == Some(current);
        if is_active && let Some(idx) = link.dropdown {
            active.dropdowns.insert(idx);
        }
        active.links.push(is_active);
    }
    active
}
