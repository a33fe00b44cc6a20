//! Scroll-position reactions for the sticky header and the back-to-top control.

use crate::config::SiteConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HeaderScroll {
    /// Header carries the compact `scrolled` style.
    pub scrolled: bool,
    /// Header is translated out of view.
    pub hidden: bool,
}

/// Compares each offset with the one handled just before it.
///
/// No smoothing: a quick down/up/down sequence flips `hidden` each time.
#[derive(Debug, Clone)]
pub struct ScrollTracker {
    last_offset: f64,
    scrolled_offset: f64,
    hide_offset: f64,
}

impl ScrollTracker {
    pub fn new(scrolled_offset: u32, hide_offset: u32) -> Self {
        Self {
            last_offset: 0.0,
            scrolled_offset: f64::from(scrolled_offset),
            hide_offset: f64::from(hide_offset),
        }
    }

    pub fn from_config(config: &SiteConfig) -> Self {
        Self::new(config.scrolled_offset, config.hide_offset)
    }

    pub fn last_offset(&self) -> f64 {
        self.last_offset
    }

    pub fn update(&mut self, offset: f64) -> HeaderScroll {
        let state = HeaderScroll {
            scrolled: offset > self.scrolled_offset,
            hidden: offset > self.last_offset && offset > self.hide_offset,
        };
        self.last_offset = offset;
        state
    }
}

pub fn back_to_top_visible(offset: f64, threshold: u32) -> bool {
    offset > f64::from(threshold)
}
