//! Error types shared by the core and the browser bindings.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, SiteError>;

#[derive(Debug, Error)]
pub enum SiteError {
    /// The request never produced a usable body (network failure, non-text response).
    #[error("failed to load {name} fragment: {reason}")]
    FragmentFetch { name: String, reason: String },

    #[error("failed to load {name} fragment: HTTP {status}")]
    FragmentStatus { name: String, status: u16 },

    #[error("{name} fragment did not arrive within {after_ms}ms")]
    FragmentTimeout { name: String, after_ms: u64 },

    #[error("invalid site configuration: {0}")]
    Config(#[from] serde_json::Error),

    #[error("dom: {0}")]
    Dom(String),

    #[error("subscription failed: {0}")]
    Subscribe(String),
}

impl SiteError {
    /// True for every variant produced while loading a header/footer fragment.
    pub fn is_fragment_failure(&self) -> bool {
        matches!(
            self,
            SiteError::FragmentFetch { .. }
                | SiteError::FragmentStatus { .. }
                | SiteError::FragmentTimeout { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fragment_errors_name_the_fragment() {
        let err = SiteError::FragmentStatus {
            name: "header".into(),
            status: 404,
        };
        assert_eq!(err.to_string(), "failed to load header fragment: HTTP 404");
        assert!(err.is_fragment_failure());
    }

    #[test]
    fn dom_errors_are_not_fragment_failures() {
        assert!(!SiteError::Dom("no body".into()).is_fragment_failure());
        assert!(!SiteError::Subscribe("offline".into()).is_fragment_failure());
    }
}
