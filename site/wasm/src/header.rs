//! Header controller: applies [`HeaderState`] transitions to the injected
//! header markup.

use std::cell::RefCell;
use std::rc::Rc;

use criyagen_site::{HeaderState, NavLink, Result, SiteConfig};
use tracing::{debug, info};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlElement, KeyboardEvent, Node, Window};

use crate::dom::{self, JsResultExt};
use crate::timers;

pub const HEADER_ROOT_ID: &str = "mainHeader";

pub struct HeaderController {
    header: Element,
    body: Option<HtmlElement>,
    nav_menu: Option<Element>,
    mobile_toggle: Option<Element>,
    search_bar: Option<Element>,
    dropdowns: Vec<Element>,
    state: RefCell<HeaderState>,
}

impl HeaderController {
    /// Attach to `#mainHeader`. `Ok(None)` when the page has no header.
    pub fn mount(
        window: &Window,
        document: &Document,
        config: &SiteConfig,
    ) -> Result<Option<Rc<Self>>> {
        let Some(header) = document.get_element_by_id(HEADER_ROOT_ID) else {
            debug!("no #{HEADER_ROOT_ID}, header controller not mounted");
            return Ok(None);
        };
        let path = window.location().pathname().dom("location.pathname")?;
        let dropdowns = dom::select_all(document, ".dropdown")?;

        let controller = Rc::new(Self {
            header,
            body: document.body(),
            nav_menu: document.get_element_by_id("navMenu"),
            mobile_toggle: document.get_element_by_id("mobileToggle"),
            search_bar: document.get_element_by_id("mobileSearchBar"),
            state: RefCell::new(HeaderState::new(&path, dropdowns.len(), config)),
            dropdowns,
        });
        controller.mark_active_nav(document)?;
        controller.bind(window, document, config)?;
        info!(page = %controller.state.borrow().current_page(), "header mounted");
        Ok(Some(controller))
    }

    fn dropdown_index(&self, element: &Element) -> Option<usize> {
        let container = element.closest(".dropdown").ok().flatten()?;
        let container: &Node = &container;
        self.dropdowns
            .iter()
            .position(|d| d.is_same_node(Some(container)))
    }

    fn mark_active_nav(&self, document: &Document) -> Result<()> {
        let elements = dom::select_all(document, ".nav-link")?;
        let links: Vec<NavLink> = elements
            .iter()
            .map(|link| {
                NavLink::new(
                    link.get_attribute("data-page").as_deref(),
                    self.dropdown_index(link),
                )
            })
            .collect();
        let active = self.state.borrow().resolve_nav(&links);

        for (link, on) in elements.iter().zip(&active.links) {
            dom::set_class(link, "active", *on)?;
        }
        for idx in &active.dropdowns {
            dom::set_class(&self.dropdowns[*idx], "active", true)?;
        }
        // The highlighted dropdown shares the open marker.
        if let Some(idx) = active.dropdowns.first() {
            self.state.borrow_mut().mark_open(*idx);
        }
        Ok(())
    }

    fn bind(self: &Rc<Self>, window: &Window, document: &Document, config: &SiteConfig) -> Result<()> {
        if let Some(toggle) = &self.mobile_toggle {
            let this = Rc::clone(self);
            dom::listen(toggle, "click", move |_| {
                this.state.borrow_mut().toggle_mobile_menu();
                this.sync_mobile();
            })?;
        }

        if let Some(button) = document.get_element_by_id("mobileSearchBtn") {
            let this = Rc::clone(self);
            dom::listen(&button, "click", move |_| this.toggle_search())?;
        }

        if let Some(button) = document.get_element_by_id("searchCloseBtn") {
            let this = Rc::clone(self);
            dom::listen(&button, "click", move |_| {
                this.state.borrow_mut().close_mobile_search();
                this.sync_mobile();
            })?;
        }

        for (idx, dropdown) in self.dropdowns.iter().enumerate() {
            let Some(toggle) = dom::select_in(dropdown, ".dropdown-toggle")? else {
                continue;
            };
            let this = Rc::clone(self);
            dom::listen(&toggle, "click", move |event: Event| {
                event.prevent_default();
                this.state.borrow_mut().toggle_dropdown(idx);
                this.sync_dropdowns();
            })?;
        }

        let this = Rc::clone(self);
        dom::listen(document, "click", move |event: Event| {
            let inside = event
                .target()
                .and_then(|t| t.dyn_into::<Element>().ok())
                .and_then(|el| el.closest(".dropdown").ok().flatten())
                .is_some();
            this.state.borrow_mut().document_click(inside);
            if !inside {
                this.sync_dropdowns();
            }
        })?;

        if let Some(menu) = &self.nav_menu {
            for link in dom::select_all_in(menu, ".nav-link")? {
                let this = Rc::clone(self);
                dom::listen(&link, "click", move |_| {
                    this.state.borrow_mut().nav_link_clicked();
                    this.sync_mobile();
                    this.sync_dropdowns();
                })?;
            }
        }

        let this = Rc::clone(self);
        dom::listen(document, "keydown", move |event: Event| {
            let is_escape = event
                .dyn_ref::<KeyboardEvent>()
                .is_some_and(|k| k.key() == "Escape");
            if is_escape {
                this.state.borrow_mut().escape();
                this.sync_mobile();
                this.sync_dropdowns();
            }
        })?;

        let this = Rc::clone(self);
        dom::on_scroll_throttled(window, config.scroll_throttle(), move |offset| {
            this.state.borrow_mut().scroll_to(offset);
            this.sync_position();
        })
    }

    fn toggle_search(&self) {
        let toggle = self.state.borrow_mut().toggle_mobile_search();
        self.sync_mobile();
        let (Some(delay), Some(bar)) = (toggle.focus_after, &self.search_bar) else {
            return;
        };
        let input = dom::select_in(bar, "input")
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<HtmlElement>().ok());
        if let Some(input) = input {
            timers::after(delay, move || {
                let _ = input.focus();
            });
        }
    }

    fn sync_mobile(&self) {
        let state = self.state.borrow();
        let menu = state.mobile_menu_open();
        let mut result = Ok(());
        if let Some(toggle) = &self.mobile_toggle {
            result = result.and(dom::set_class(toggle, "active", menu));
        }
        if let Some(nav) = &self.nav_menu {
            result = result.and(dom::set_class(nav, "active", menu));
        }
        if let Some(body) = &self.body {
            result = result.and(dom::set_class(body, "menu-open", menu));
        }
        if let Some(bar) = &self.search_bar {
            result = result.and(dom::set_class(bar, "active", state.mobile_search_open()));
        }
        if let Err(e) = result {
            debug!("header sync failed: {e}");
        }
    }

    fn sync_dropdowns(&self) {
        let state = self.state.borrow();
        for (idx, dropdown) in self.dropdowns.iter().enumerate() {
            if let Err(e) = dom::set_class(dropdown, "active", state.is_dropdown_open(idx)) {
                debug!("dropdown sync failed: {e}");
            }
        }
    }

    fn sync_position(&self) {
        let position = self.state.borrow().position();
        let transform = if position.hidden {
            "translateY(-100%)"
        } else {
            "translateY(0)"
        };
        let result = dom::set_class(&self.header, "scrolled", position.scrolled)
            .and_then(|_| dom::set_styles(&self.header, &[("transform", transform)]));
        if let Err(e) = result {
            debug!("header position sync failed: {e}");
        }
    }
}
