//! Thin helpers over `web-sys`: error conversion, queries, listeners,
//! inline styles and the page clock.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use criyagen_site::{Result, SiteError, Throttle, ThrottleDecision};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{AddEventListenerOptions, Document, Element, Event, EventTarget, HtmlElement, Window};

use crate::timers;

/// Human-readable text for a thrown JS value.
pub fn describe(value: &JsValue) -> String {
    if let Some(text) = value.as_string() {
        return text;
    }
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    format!("{value:?}")
}

pub trait JsResultExt<T> {
    fn dom(self, context: &str) -> Result<T>;
}

impl<T> JsResultExt<T> for std::result::Result<T, JsValue> {
    fn dom(self, context: &str) -> Result<T> {
        self.map_err(|e| SiteError::Dom(format!("{context}: {}", describe(&e))))
    }
}

pub fn window() -> Result<Window> {
    web_sys::window().ok_or_else(|| SiteError::Dom("no global window".into()))
}

pub fn document(window: &Window) -> Result<Document> {
    window
        .document()
        .ok_or_else(|| SiteError::Dom("window has no document".into()))
}

pub fn body(document: &Document) -> Result<HtmlElement> {
    document
        .body()
        .ok_or_else(|| SiteError::Dom("document has no <body>".into()))
}

fn collect(list: web_sys::NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub fn select_all(document: &Document, selector: &str) -> Result<Vec<Element>> {
    Ok(collect(document.query_selector_all(selector).dom(selector)?))
}

pub fn select_all_in(root: &Element, selector: &str) -> Result<Vec<Element>> {
    Ok(collect(root.query_selector_all(selector).dom(selector)?))
}

pub fn select_in(root: &Element, selector: &str) -> Result<Option<Element>> {
    root.query_selector(selector).dom(selector)
}

pub fn set_class(element: &Element, class: &str, on: bool) -> Result<()> {
    element
        .class_list()
        .toggle_with_force(class, on)
        .map(|_| ())
        .dom(class)
}

pub fn set_styles(element: &Element, styles: &[(&str, &str)]) -> Result<()> {
    let Some(html) = element.dyn_ref::<HtmlElement>() else {
        return Ok(());
    };
    let style = html.style();
    for (name, value) in styles {
        style.set_property(name, value).dom(name)?;
    }
    Ok(())
}

/// A listener owned by the value it serves. Dropping it detaches the
/// handler and frees the closure; use it for elements that come and go.
pub struct Listener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    pub fn attach(
        target: &EventTarget,
        event: &'static str,
        handler: impl FnMut(Event) + 'static,
    ) -> Result<Self> {
        let callback = Closure::<dyn FnMut(Event)>::new(handler);
        target
            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            .dom(event)?;
        Ok(Self {
            target: target.clone(),
            event,
            callback,
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}

/// Attach `handler` for the lifetime of the page.
pub fn listen(
    target: &EventTarget,
    event: &str,
    handler: impl FnMut(Event) + 'static,
) -> Result<()> {
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .dom(event)?;
    // Listeners are never removed, so the closure must outlive this frame.
    closure.forget();
    Ok(())
}

/// Attach `handler` for the next `event` only; the browser drops it after that.
pub fn listen_once(
    target: &EventTarget,
    event: &str,
    handler: impl FnOnce(Event) + 'static,
) -> Result<()> {
    let options = AddEventListenerOptions::new();
    options.set_once(true);
    let callback = Closure::once_into_js(handler);
    target
        .add_event_listener_with_callback_and_add_event_listener_options(
            event,
            callback.unchecked_ref(),
            &options,
        )
        .dom(event)
}

/// Monotonic page clock.
pub fn now(window: &Window) -> Duration {
    let ms = window
        .performance()
        .map(|p| p.now())
        .unwrap_or_else(js_sys::Date::now);
    Duration::from_secs_f64(ms.max(0.0) / 1000.0)
}

pub fn scroll_offset(window: &Window) -> f64 {
    window.scroll_y().unwrap_or(0.0)
}

/// Window scroll listener behind a leading + trailing throttle. The handler
/// always receives the offset current at the moment it runs.
pub fn on_scroll_throttled(
    window: &Window,
    every: Duration,
    handler: impl Fn(f64) + 'static,
) -> Result<()> {
    let throttle = Rc::new(RefCell::new(Throttle::new(every)));
    let handler = Rc::new(handler);
    let win = window.clone();
    listen(window, "scroll", move |_| {
        let decision = throttle.borrow_mut().call(now(&win));
        match decision {
            ThrottleDecision::Run => handler(scroll_offset(&win)),
            ThrottleDecision::Schedule(delay) => {
                let throttle = throttle.clone();
                let handler = handler.clone();
                let win = win.clone();
                timers::after(delay, move || {
                    let due = throttle.borrow_mut().trailing_due(now(&win));
                    if due {
                        handler(scroll_offset(&win));
                    }
                });
            }
            ThrottleDecision::Coalesced => {}
        }
    })
}
