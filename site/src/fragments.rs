//! Shared header/footer markup fetched at runtime and injected into
//! placeholder containers.

use std::future::Future;
use std::time::Duration;

use futures::future::{self, Either};
use futures::pin_mut;
use tracing::{debug, info, warn};

use crate::config::SiteConfig;
use crate::error::{Result, SiteError};
use crate::timer::Timer;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    pub name: String,
    /// Relative URL of the markup.
    pub path: String,
    /// Id of the element whose contents the markup replaces.
    pub container: String,
}

impl Fragment {
    pub fn new(name: &str, path: &str, container: &str) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            container: container.into(),
        }
    }
}

/// Header first, then footer.
pub fn page_fragments(config: &SiteConfig) -> Vec<Fragment> {
    vec![
        Fragment::new("header", &config.header_fragment, &config.header_container),
        Fragment::new("footer", &config.footer_fragment, &config.footer_container),
    ]
}

pub trait FragmentSource {
    /// Raw markup for `fragment`. Any non-success answer is an error.
    fn fetch(&self, fragment: &Fragment) -> impl Future<Output = Result<String>>;
}

pub trait FragmentTarget {
    /// Replace the container's contents. `Ok(false)` when the page has no such container.
    fn inject(&self, container: &str, html: &str) -> Result<bool>;
}

#[derive(Debug, Default)]
pub struct FragmentReport {
    pub injected: Vec<String>,
    /// Loaded, but the page had no placeholder for it.
    pub unplaced: Vec<String>,
    pub failures: Vec<SiteError>,
}

impl FragmentReport {
    pub fn all_loaded(&self) -> bool {
        self.failures.is_empty()
    }
}

async fn fetch_with_timeout<S, T>(
    source: &S,
    timer: &T,
    fragment: &Fragment,
    timeout: Option<Duration>,
) -> Result<String>
where
    S: FragmentSource,
    T: Timer,
{
    let Some(limit) = timeout else {
        return source.fetch(fragment).await;
    };
    let fetch = source.fetch(fragment);
    let expire = timer.sleep(limit);
    pin_mut!(fetch, expire);
    match future::select(fetch, expire).await {
        Either::Left((result, _)) => result,
        Either::Right(_) => Err(SiteError::FragmentTimeout {
            name: fragment.name.clone(),
            after_ms: limit.as_millis() as u64,
        }),
    }
}

/// Fetch and inject each fragment in order. A failing fragment is recorded
/// and the next one is still attempted.
pub async fn load_fragments<S, D, T>(
    source: &S,
    target: &D,
    timer: &T,
    fragments: &[Fragment],
    timeout: Option<Duration>,
) -> FragmentReport
where
    S: FragmentSource,
    D: FragmentTarget,
    T: Timer,
{
    let mut report = FragmentReport::default();
    for fragment in fragments {
        let html = match fetch_with_timeout(source, timer, fragment, timeout).await {
            Ok(html) => html,
            Err(e) => {
                warn!("{e}");
                report.failures.push(e);
                continue;
            }
        };
        match target.inject(&fragment.container, &html) {
            Ok(true) => {
                debug!(fragment = %fragment.name, bytes = html.len(), "fragment injected");
                report.injected.push(fragment.name.clone());
            }
            Ok(false) => {
                debug!(fragment = %fragment.name, container = %fragment.container, "no placeholder on this page");
                report.unplaced.push(fragment.name.clone());
            }
            Err(e) => {
                warn!(fragment = %fragment.name, "injecting fragment failed: {e}");
                report.failures.push(e);
            }
        }
    }
    if report.all_loaded() {
        info!("components loaded successfully");
    }
    report
}
