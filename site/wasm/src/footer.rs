//! Footer controller: current year, back-to-top and the newsletter form.

use std::cell::RefCell;
use std::rc::Rc;

use criyagen_site::{
    Newsletter, NewsletterView, Notice, Result, SimulatedSubscription, SiteConfig,
    back_to_top_visible,
};
use tracing::{debug, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, Event, HtmlButtonElement, HtmlFormElement, HtmlInputElement, ScrollBehavior,
    ScrollToOptions, Window,
};

use crate::dom;
use crate::notify::NoticeBoard;
use crate::timers::BrowserTimer;

pub const FOOTER_ROOT: &str = "footer.footer";

const SPINNER: &str = r#"<i class="fas fa-spinner fa-spin"></i>"#;

/// The newsletter form as the signup flow sees it.
pub struct NewsletterForm {
    form: HtmlFormElement,
    email: Option<HtmlInputElement>,
    submit: Option<HtmlButtonElement>,
    saved_label: RefCell<Option<String>>,
    notices: Rc<NoticeBoard>,
}

impl NewsletterForm {
    pub fn new(form: HtmlFormElement, notices: Rc<NoticeBoard>) -> Result<Self> {
        let email = dom::select_in(&form, "input[type=\"email\"]")?
            .and_then(|el| el.dyn_into::<HtmlInputElement>().ok());
        let submit = dom::select_in(&form, ".btn-subscribe")?
            .and_then(|el| el.dyn_into::<HtmlButtonElement>().ok());
        Ok(Self {
            form,
            email,
            submit,
            saved_label: RefCell::new(None),
            notices,
        })
    }

    pub fn email_value(&self) -> String {
        self.email.as_ref().map(|e| e.value()).unwrap_or_default()
    }
}

impl NewsletterView for NewsletterForm {
    fn notify(&self, notice: Notice) {
        if let Err(e) = self.notices.show(&notice) {
            warn!("could not show notification: {e}");
        }
    }

    fn focus_email(&self) {
        if let Some(email) = &self.email {
            let _ = email.focus();
        }
    }

    fn set_busy(&self, busy: bool) {
        let Some(button) = &self.submit else {
            return;
        };
        if busy {
            *self.saved_label.borrow_mut() = Some(button.inner_html());
            button.set_inner_html(SPINNER);
        } else if let Some(label) = self.saved_label.take() {
            button.set_inner_html(&label);
        }
        button.set_disabled(busy);
    }

    fn reset_form(&self) {
        self.form.reset();
    }
}

pub struct FooterController {
    notices: Rc<NoticeBoard>,
}

impl FooterController {
    /// Attach to `footer.footer`. `Ok(None)` when the page has no footer.
    pub fn mount(
        window: &Window,
        document: &Document,
        config: &SiteConfig,
        notices: Rc<NoticeBoard>,
    ) -> Result<Option<Rc<Self>>> {
        if document.query_selector(FOOTER_ROOT).ok().flatten().is_none() {
            debug!("no {FOOTER_ROOT}, footer controller not mounted");
            return Ok(None);
        }
        let controller = Rc::new(Self { notices });
        stamp_current_year(document)?;
        bind_back_to_top(window, document, config)?;
        controller.bind_newsletter(document, config)?;
        info!("footer mounted");
        Ok(Some(controller))
    }

    fn bind_newsletter(&self, document: &Document, config: &SiteConfig) -> Result<()> {
        let Some(form) = document
            .get_element_by_id("footerNewsletter")
            .and_then(|el| el.dyn_into::<HtmlFormElement>().ok())
        else {
            return Ok(());
        };
        let view = Rc::new(NewsletterForm::new(form.clone(), Rc::clone(&self.notices))?);
        let newsletter = Rc::new(Newsletter::new(SimulatedSubscription::new(
            BrowserTimer,
            config.newsletter_delay(),
        )));

        dom::listen(&form, "submit", move |event: Event| {
            event.prevent_default();
            let view = Rc::clone(&view);
            let newsletter = Rc::clone(&newsletter);
            let email = view.email_value();
            wasm_bindgen_futures::spawn_local(async move {
                let outcome = newsletter.submit(view.as_ref(), &email).await;
                debug!(?outcome, "newsletter submit finished");
            });
        })
    }
}

/// Set once at mount; a page left open across New Year keeps the old year.
fn stamp_current_year(document: &Document) -> Result<()> {
    let year = js_sys::Date::new_0().get_full_year().to_string();
    for element in dom::select_all(document, ".current-year")? {
        element.set_text_content(Some(&year));
    }
    Ok(())
}

fn bind_back_to_top(window: &Window, document: &Document, config: &SiteConfig) -> Result<()> {
    let Some(button) = document.get_element_by_id("backToTop") else {
        return Ok(());
    };

    let threshold = config.back_to_top_offset;
    let target: Element = button.clone();
    dom::on_scroll_throttled(window, config.scroll_throttle(), move |offset| {
        if let Err(e) = dom::set_class(&target, "visible", back_to_top_visible(offset, threshold)) {
            debug!("back-to-top sync failed: {e}");
        }
    })?;

    let win = window.clone();
    dom::listen(&button, "click", move |_| {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        win.scroll_to_with_scroll_to_options(&options);
    })
}
