//! Fragment source over `window.fetch` and injection into placeholder elements.

use criyagen_site::{Fragment, FragmentSource, FragmentTarget, Result, SiteError};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, Response, Window};

use crate::dom::describe;

/// Plain GET, no cache headers, no retry.
pub struct HttpFragments {
    window: Window,
}

impl HttpFragments {
    pub fn new(window: Window) -> Self {
        Self { window }
    }
}

impl FragmentSource for HttpFragments {
    async fn fetch(&self, fragment: &Fragment) -> Result<String> {
        let failed = |reason: String| SiteError::FragmentFetch {
            name: fragment.name.clone(),
            reason,
        };

        let response = JsFuture::from(self.window.fetch_with_str(&fragment.path))
            .await
            .map_err(|e| failed(describe(&e)))?;
        let response: Response = response
            .dyn_into()
            .map_err(|_| failed("fetch did not resolve to a Response".into()))?;
        if !response.ok() {
            return Err(SiteError::FragmentStatus {
                name: fragment.name.clone(),
                status: response.status(),
            });
        }

        let body = response.text().map_err(|e| failed(describe(&e)))?;
        let text = JsFuture::from(body)
            .await
            .map_err(|e| failed(describe(&e)))?;
        text.as_string()
            .ok_or_else(|| failed("response body is not text".into()))
    }
}

pub struct DomContainers {
    document: Document,
}

impl DomContainers {
    pub fn new(document: Document) -> Self {
        Self { document }
    }
}

impl FragmentTarget for DomContainers {
    fn inject(&self, container: &str, html: &str) -> Result<bool> {
        match self.document.get_element_by_id(container) {
            Some(element) => {
                element.set_inner_html(html);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
