//! Configuration types and loading for the site chrome.
//!
//! Every threshold and delay the controllers use lives here. Pages may
//! override any of them with an inline JSON block; absent fields keep
//! their defaults.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::Result;

/// Id of the optional `<script type="application/json">` block holding overrides.
pub const CONFIG_ELEMENT_ID: &str = "site-config";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct SiteConfig {
    pub header_fragment: String,
    pub footer_fragment: String,
    pub header_container: String,
    pub footer_container: String,
    /// Offset past which the header gets its `scrolled` style.
    pub scrolled_offset: u32,
    /// Offset past which scrolling down hides the header.
    pub hide_offset: u32,
    pub back_to_top_offset: u32,
    pub search_focus_delay_ms: u64,
    pub newsletter_delay_ms: u64,
    pub notice_visible_ms: u64,
    pub global_error_visible_ms: u64,
    pub notice_fade_ms: u64,
    pub overlay_fade_ms: u64,
    pub scroll_throttle_ms: u64,
    /// No ceiling when unset: a stalled fragment delays the rest of boot.
    pub fragment_timeout_ms: Option<u64>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            header_fragment: "components/header.html".into(),
            footer_fragment: "components/footer.html".into(),
            header_container: "header-container".into(),
            footer_container: "footer-container".into(),
            scrolled_offset: 100,
            hide_offset: 200,
            back_to_top_offset: 300,
            search_focus_delay_ms: 300,
            newsletter_delay_ms: 1500,
            notice_visible_ms: 5000,
            global_error_visible_ms: 10_000,
            notice_fade_ms: 300,
            overlay_fade_ms: 500,
            scroll_throttle_ms: 16,
            fragment_timeout_ms: None,
        }
    }
}

impl SiteConfig {
    pub fn search_focus_delay(&self) -> Duration {
        Duration::from_millis(self.search_focus_delay_ms)
    }

    pub fn newsletter_delay(&self) -> Duration {
        Duration::from_millis(self.newsletter_delay_ms)
    }

    pub fn notice_visible(&self) -> Duration {
        Duration::from_millis(self.notice_visible_ms)
    }

    pub fn global_error_visible(&self) -> Duration {
        Duration::from_millis(self.global_error_visible_ms)
    }

    pub fn notice_fade(&self) -> Duration {
        Duration::from_millis(self.notice_fade_ms)
    }

    pub fn overlay_fade(&self) -> Duration {
        Duration::from_millis(self.overlay_fade_ms)
    }

    pub fn scroll_throttle(&self) -> Duration {
        Duration::from_millis(self.scroll_throttle_ms)
    }

    pub fn fragment_timeout(&self) -> Option<Duration> {
        self.fragment_timeout_ms.map(Duration::from_millis)
    }
}

/// Parse an override block. `None` or blank text yields the defaults.
pub fn parse_config(raw: Option<&str>) -> Result<SiteConfig> {
    match raw.map(str::trim) {
        None | Some("") => Ok(SiteConfig::default()),
        Some(text) => Ok(serde_json::from_str(text)?),
    }
}

/// Like [`parse_config`], but a malformed block is logged and replaced by defaults.
pub fn load_config(raw: Option<&str>) -> SiteConfig {
    parse_config(raw).unwrap_or_else(|e| {
        warn!("{e}; falling back to default site configuration");
        SiteConfig::default()
    })
}
