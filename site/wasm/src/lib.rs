//! Browser entry point for the Criyagen site chrome.
//!
//! On load this module fetches the shared header and footer fragments,
//! mounts their controllers once the markup is in place, wires the
//! page-wide features and removes the loading overlay. All behavior lives
//! in `criyagen-site`; this crate only talks to the DOM.
//!
//! The [`App`] is kept in a thread-local for the lifetime of the page.
//! Inline scripts reach it through the exported [`show_notification`].

mod app;
mod dom;
mod fetch;
mod footer;
mod header;
mod notify;
mod page;
mod timers;

use std::cell::RefCell;
use std::rc::Rc;

use criyagen_site::{Notice, StepOutcome, boot};
use tracing::{error, info, warn};
use wasm_bindgen::prelude::*;

pub use app::App;
pub use dom::JsResultExt;
pub use footer::FooterController;
pub use header::HeaderController;
pub use notify::{NoticeBoard, show_global_error};
pub use page::{
    TooltipLayer, init_lazy_images, init_smooth_scroll, remove_loading_screen, validate_form,
};

thread_local! {
    static APP: RefCell<Option<Rc<App>>> = const { RefCell::new(None) };
}

/// Initialize panic hook and logging, then boot the page.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();

    let app = match App::from_page() {
        Ok(app) => Rc::new(app),
        Err(e) => {
            error!("site chrome not started: {e}");
            return;
        }
    };
    APP.with(|slot| *slot.borrow_mut() = Some(Rc::clone(&app)));

    wasm_bindgen_futures::spawn_local(async move {
        let report = boot(app.as_ref()).await;
        let failed = report
            .steps
            .iter()
            .filter(|(_, outcome)| matches!(outcome, StepOutcome::Failed(_)))
            .count();
        info!(
            header = app.header_mounted(),
            footer = app.footer_mounted(),
            failed,
            "site chrome ready"
        );
    });
}

/// Show a footer notice from page script. Ignored before the app exists.
#[wasm_bindgen(js_name = showNotification)]
pub fn show_notification(message: &str, success: bool) {
    let notice = if success {
        Notice::success(message)
    } else {
        Notice::error(message)
    };
    APP.with(|slot| {
        let Some(app) = slot.borrow().clone() else {
            warn!("notification before site start: {message}");
            return;
        };
        if let Err(e) = app.notices().show(&notice) {
            warn!("could not show notification: {e}");
        }
    });
}
