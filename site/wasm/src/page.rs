//! Page-wide features wired after the fragments are in place: tooltips,
//! form validation, smooth in-page scrolling, lazy images and the loading
//! overlay. Each returns `Ok(false)` when the page has nothing for it.

use std::cell::RefCell;
use std::rc::Rc;

use criyagen_site::features::{anchor_target, fade_transition, lazy_source, tooltip_position};
use criyagen_site::{FieldKind, Result, SiteConfig, Slot, validate_field};
use tracing::debug;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    Document, Element, Event, HtmlImageElement, HtmlInputElement, HtmlSelectElement,
    HtmlTextAreaElement, IntersectionObserver, IntersectionObserverEntry, MouseEvent,
    ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition, Window,
};

use crate::dom::{self, JsResultExt};
use crate::timers;

// ============================================================================
// Tooltips
// ============================================================================

pub struct TooltipLayer {
    document: Document,
    current: RefCell<Slot<Element>>,
}

impl TooltipLayer {
    pub fn new(document: Document) -> Rc<Self> {
        Rc::new(Self {
            document,
            current: RefCell::new(Slot::new()),
        })
    }

    pub fn show(&self, text: &str, client_x: f64, client_y: f64) -> Result<()> {
        self.hide();
        let tooltip = self.document.create_element("div").dom("div")?;
        tooltip.set_class_name("custom-tooltip");
        tooltip.set_text_content(Some(text));
        let (left, top) = tooltip_position(client_x, client_y);
        let (left, top) = (format!("{left}px"), format!("{top}px"));
        dom::set_styles(
            &tooltip,
            &[
                ("position", "fixed"),
                ("background", "rgba(0, 0, 0, 0.8)"),
                ("color", "white"),
                ("padding", "5px 10px"),
                ("border-radius", "4px"),
                ("font-size", "0.8rem"),
                ("z-index", "10000"),
                ("pointer-events", "none"),
                ("left", left.as_str()),
                ("top", top.as_str()),
            ],
        )?;
        dom::body(&self.document)?
            .append_child(&tooltip)
            .dom("append tooltip")?;
        self.current.borrow_mut().show(tooltip);
        Ok(())
    }

    pub fn hide(&self) {
        if let Some(tooltip) = self.current.borrow_mut().take() {
            tooltip.remove();
        }
    }
}

pub fn init_tooltips(document: &Document, layer: &Rc<TooltipLayer>) -> Result<bool> {
    let targets = dom::select_all(document, "[title]")?;
    for element in &targets {
        let layer_in = Rc::clone(layer);
        let source = element.clone();
        dom::listen(element, "mouseenter", move |event: Event| {
            let Some(text) = source.get_attribute("title").filter(|t| !t.is_empty()) else {
                return;
            };
            let (x, y) = event
                .dyn_ref::<MouseEvent>()
                .map(|m| (f64::from(m.client_x()), f64::from(m.client_y())))
                .unwrap_or_default();
            if let Err(e) = layer_in.show(&text, x, y) {
                debug!("tooltip not shown: {e}");
            }
        })?;
        let layer_out = Rc::clone(layer);
        dom::listen(element, "mouseleave", move |_| layer_out.hide())?;
    }
    Ok(!targets.is_empty())
}

// ============================================================================
// Forms
// ============================================================================

const REQUIRED_FIELDS: &str = "input[required], textarea[required], select[required]";

fn field_value(field: &Element) -> (FieldKind, String) {
    if let Some(input) = field.dyn_ref::<HtmlInputElement>() {
        return (FieldKind::from_input_type(&input.type_()), input.value());
    }
    if let Some(area) = field.dyn_ref::<HtmlTextAreaElement>() {
        return (FieldKind::Other, area.value());
    }
    if let Some(select) = field.dyn_ref::<HtmlSelectElement>() {
        return (FieldKind::Other, select.value());
    }
    (FieldKind::Other, String::new())
}

fn clear_field_error(field: &Element) -> Result<()> {
    if let Some(next) = field.next_element_sibling()
        && next.class_list().contains("error-message")
    {
        next.remove();
    }
    dom::set_class(field, "error", false)
}

fn show_field_error(document: &Document, field: &Element, message: &str) -> Result<()> {
    dom::set_class(field, "error", true)?;

    let error = document.create_element("div").dom("div")?;
    error.set_class_name("error-message");
    error.set_text_content(Some(message));
    dom::set_styles(
        &error,
        &[("color", "#f44336"), ("font-size", "0.85rem"), ("margin-top", "5px")],
    )?;
    field.after_with_node_1(&error).dom("insert field error")?;

    let owner = field.clone();
    dom::listen_once(field, "input", move |_| {
        let _ = dom::set_class(&owner, "error", false);
        if error.parent_node().is_some() {
            error.remove();
        }
    })
}

/// Validate every required field of `form` in document order, marking the
/// failures inline. Returns whether the form may submit.
pub fn validate_form(document: &Document, form: &Element) -> Result<bool> {
    let mut valid = true;
    for field in dom::select_all_in(form, REQUIRED_FIELDS)? {
        clear_field_error(&field)?;
        let (kind, value) = field_value(&field);
        if let Some(error) = validate_field(kind, &value) {
            show_field_error(document, &field, error.message())?;
            valid = false;
        }
    }
    Ok(valid)
}

pub fn init_forms(document: &Document) -> Result<bool> {
    let forms = dom::select_all(document, "form")?;
    for form in &forms {
        let doc = document.clone();
        let target = form.clone();
        dom::listen(form, "submit", move |event: Event| {
            match validate_form(&doc, &target) {
                Ok(true) => {}
                Ok(false) => event.prevent_default(),
                Err(e) => {
                    debug!("form validation aborted: {e}");
                    event.prevent_default();
                }
            }
        })?;
    }
    Ok(!forms.is_empty())
}

// ============================================================================
// Smooth scroll
// ============================================================================

pub fn scroll_into_view(element: &Element) {
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

pub fn init_smooth_scroll(document: &Document) -> Result<bool> {
    let anchors = dom::select_all(document, "a[href^=\"#\"]")?;
    for anchor in &anchors {
        let doc = document.clone();
        let link = anchor.clone();
        dom::listen(anchor, "click", move |event: Event| {
            let href = link.get_attribute("href").unwrap_or_default();
            let Some(id) = anchor_target(&href) else {
                return;
            };
            event.prevent_default();
            if let Some(target) = doc.get_element_by_id(id) {
                scroll_into_view(&target);
            }
        })?;
    }
    Ok(!anchors.is_empty())
}

// ============================================================================
// Lazy images
// ============================================================================

fn reveal(entry: &IntersectionObserverEntry, observer: &IntersectionObserver) {
    if !entry.is_intersecting() {
        return;
    }
    let target = entry.target();
    if let Some(img) = target.dyn_ref::<HtmlImageElement>() {
        let data_src = img.get_attribute("data-src");
        let current = img.src();
        img.set_src(lazy_source(data_src.as_deref(), &current));
        let _ = dom::set_class(img, "lazy", false);
    }
    observer.unobserve(&target);
}

pub fn init_lazy_images(window: &Window, document: &Document) -> Result<bool> {
    let images = dom::select_all(document, "img.lazy")?;
    if images.is_empty() {
        return Ok(false);
    }
    let supported = js_sys::Reflect::has(window, &JsValue::from_str("IntersectionObserver"))
        .unwrap_or(false);
    if !supported {
        debug!("IntersectionObserver unavailable, lazy images left as-is");
        return Ok(false);
    }

    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                if let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() {
                    reveal(&entry, &observer);
                }
            }
        },
    );
    let observer =
        IntersectionObserver::new(callback.as_ref().unchecked_ref()).dom("IntersectionObserver")?;
    callback.forget();
    for img in &images {
        observer.observe(img);
    }
    Ok(true)
}

// ============================================================================
// Loading overlay
// ============================================================================

pub fn remove_loading_screen(document: &Document, config: &SiteConfig) -> Result<bool> {
    let Some(overlay) = document.get_element_by_id("loadingScreen") else {
        return Ok(false);
    };
    let transition = fade_transition(config.overlay_fade());
    dom::set_styles(&overlay, &[("opacity", "0"), ("transition", transition.as_str())])?;
    timers::after(config.overlay_fade(), move || {
        if overlay.parent_node().is_some() {
            overlay.remove();
            debug!("loading overlay removed");
        }
    });
    Ok(true)
}
