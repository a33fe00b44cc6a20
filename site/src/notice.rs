//! Notification kinds and the fixed messages the site shows.

use std::fmt;

pub const FRAGMENTS_FAILED: &str = "Unable to load page components. Please refresh the page.";
pub const NEWSLETTER_INVALID: &str = "Please enter a valid email address.";
pub const NEWSLETTER_THANKS: &str = "Thank you for subscribing to our newsletter!";
pub const NEWSLETTER_FAILED: &str = "Subscription failed. Please try again later.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

impl NoticeKind {
    /// Modifier class used next to the base notification class.
    pub fn class(&self) -> &'static str {
        match self {
            NoticeKind::Success => "success",
            NoticeKind::Error => "error",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            NoticeKind::Success => "fa-check-circle",
            NoticeKind::Error => "fa-exclamation-circle",
        }
    }
}

impl fmt::Display for NoticeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.class())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }
}
