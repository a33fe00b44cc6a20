//! Composition root: owns the page handles and runs the boot sequence
//! against the live document.

use std::cell::RefCell;
use std::rc::Rc;

use criyagen_site::{
    BootHost, BootStep, CONFIG_ELEMENT_ID, FragmentReport, Result, SiteConfig, load_config,
    load_fragments, page_fragments,
};
use web_sys::{Document, Window};

use crate::dom;
use crate::fetch::{DomContainers, HttpFragments};
use crate::footer::FooterController;
use crate::header::HeaderController;
use crate::notify::{self, NoticeBoard};
use crate::page::{self, TooltipLayer};
use crate::timers::BrowserTimer;

pub struct App {
    window: Window,
    document: Document,
    config: SiteConfig,
    notices: Rc<NoticeBoard>,
    tooltips: Rc<TooltipLayer>,
    header: RefCell<Option<Rc<HeaderController>>>,
    footer: RefCell<Option<Rc<FooterController>>>,
}

impl App {
    pub fn new(window: Window, document: Document, config: SiteConfig) -> Self {
        Self {
            notices: NoticeBoard::new(document.clone(), &config),
            tooltips: TooltipLayer::new(document.clone()),
            window,
            document,
            config,
            header: RefCell::new(None),
            footer: RefCell::new(None),
        }
    }

    /// Build from the global window, reading overrides from `#site-config`.
    pub fn from_page() -> Result<Self> {
        let window = dom::window()?;
        let document = dom::document(&window)?;
        let raw = document
            .get_element_by_id(CONFIG_ELEMENT_ID)
            .and_then(|el| el.text_content());
        let config = load_config(raw.as_deref());
        Ok(Self::new(window, document, config))
    }

    pub fn notices(&self) -> &Rc<NoticeBoard> {
        &self.notices
    }

    pub fn header_mounted(&self) -> bool {
        self.header.borrow().is_some()
    }

    pub fn footer_mounted(&self) -> bool {
        self.footer.borrow().is_some()
    }
}

impl BootHost for App {
    async fn load_fragments(&self) -> FragmentReport {
        let source = HttpFragments::new(self.window.clone());
        let target = DomContainers::new(self.document.clone());
        load_fragments(
            &source,
            &target,
            &BrowserTimer,
            &page_fragments(&self.config),
            self.config.fragment_timeout(),
        )
        .await
    }

    fn show_global_error(&self, message: &str) -> Result<()> {
        notify::show_global_error(&self.document, message, &self.config)
    }

    fn run_step(&self, step: BootStep) -> Result<bool> {
        let (window, document, config) = (&self.window, &self.document, &self.config);
        match step {
            // Fragments are loaded by `load_fragments` before any step runs.
            BootStep::LoadFragments => Ok(true),
            BootStep::MountHeader => {
                let header = HeaderController::mount(window, document, config)?;
                let mounted = header.is_some();
                *self.header.borrow_mut() = header;
                Ok(mounted)
            }
            BootStep::MountFooter => {
                let footer =
                    FooterController::mount(window, document, config, Rc::clone(&self.notices))?;
                let mounted = footer.is_some();
                *self.footer.borrow_mut() = footer;
                Ok(mounted)
            }
            BootStep::Tooltips => page::init_tooltips(document, &self.tooltips),
            BootStep::Forms => page::init_forms(document),
            BootStep::SmoothScroll => page::init_smooth_scroll(document),
            BootStep::LazyImages => page::init_lazy_images(window, document),
            BootStep::RemoveOverlay => page::remove_loading_screen(document, config),
        }
    }
}
