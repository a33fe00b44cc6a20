//! Floating notifications: the footer's one-at-a-time notice and the
//! page-wide load error.

use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::time::Duration;

use criyagen_site::features::exit_animation;
use criyagen_site::{Notice, Result, SiteConfig, SiteError, Slot, SlotId};
use web_sys::{Document, Element};

use crate::dom::{self, JsResultExt, Listener};
use crate::timers;

const NOTICE_CLASS: &str = "footer-notification";
const NOTICE_STYLE_ID: &str = "footer-notification-styles";

const NOTICE_CSS: &str = r#"
.footer-notification { position: fixed; bottom: 100px; right: 30px; z-index: 1000; animation: slideInUp 0.3s ease; }
.footer-notification.success { background: linear-gradient(135deg, #2e7d32, #4caf50); color: white; }
.footer-notification.error { background: linear-gradient(135deg, #f44336, #e53935); color: white; }
.notification-content { padding: 15px 20px; border-radius: 8px; display: flex; align-items: center; gap: 15px; box-shadow: 0 5px 20px rgba(0,0,0,0.3); }
.notification-close { background: none; border: none; color: white; font-size: 1.5rem; cursor: pointer; margin-left: 10px; }
@keyframes slideInUp { from { transform: translateY(100%); opacity: 0; } to { transform: translateY(0); opacity: 1; } }
@keyframes slideOutDown { from { transform: translateY(0); opacity: 1; } to { transform: translateY(100%); opacity: 0; } }
"#;

/// `<div class="{class}"><i class="fas {icon}"></i><span>{message}</span><button>&times;</button></div>`,
/// returning the wrapper and its close button. The message goes in as text.
fn build_card(
    document: &Document,
    class: &str,
    icon: &str,
    message: &str,
    close_class: &str,
) -> Result<(Element, Element)> {
    let content = document.create_element("div").dom("div")?;
    content.set_class_name(class);

    let glyph = document.create_element("i").dom("i")?;
    glyph.set_class_name(&format!("fas {icon}"));
    let text = document.create_element("span").dom("span")?;
    text.set_text_content(Some(message));
    let close = document.create_element("button").dom("button")?;
    close.set_class_name(close_class);
    close.set_inner_html("&times;");

    content.append_child(&glyph).dom("append icon")?;
    content.append_child(&text).dom("append message")?;
    content.append_child(&close).dom("append close")?;
    Ok((content, close))
}

/// A card on screen together with its close handler.
struct Card {
    element: Element,
    _close: Listener,
}

impl Card {
    /// Detach the element; the close handler goes with it.
    fn remove(self) {
        self.element.remove();
    }

    fn slide_out(self, keyframes: &str, fade: Duration) {
        let animation = exit_animation(keyframes, fade);
        let _ = dom::set_styles(&self.element, &[("animation", animation.as_str())]);
        timers::after(fade, move || self.remove());
    }
}

/// Footer notice surface. Showing a notice removes whatever is on screen.
pub struct NoticeBoard {
    document: Document,
    current: RefCell<Slot<Card>>,
    visible_for: Duration,
    fade: Duration,
}

impl NoticeBoard {
    pub fn new(document: Document, config: &SiteConfig) -> Rc<Self> {
        Rc::new(Self {
            document,
            current: RefCell::new(Slot::new()),
            visible_for: config.notice_visible(),
            fade: config.notice_fade(),
        })
    }

    fn ensure_styles(&self) -> Result<()> {
        if self.document.get_element_by_id(NOTICE_STYLE_ID).is_some() {
            return Ok(());
        }
        let Some(head) = self.document.head() else {
            return Ok(());
        };
        let style = self.document.create_element("style").dom("style")?;
        style.set_id(NOTICE_STYLE_ID);
        style.set_text_content(Some(NOTICE_CSS));
        head.append_child(&style).dom("append style")?;
        Ok(())
    }

    pub fn show(self: &Rc<Self>, notice: &Notice) -> Result<SlotId> {
        // Also sweeps a notice that is still fading out.
        for stale in dom::select_all(&self.document, &format!(".{NOTICE_CLASS}"))? {
            stale.remove();
        }
        self.ensure_styles()?;

        let wrapper = self.document.create_element("div").dom("div")?;
        wrapper.set_class_name(&format!("{NOTICE_CLASS} {}", notice.kind.class()));
        let (content, close) = build_card(
            &self.document,
            "notification-content",
            notice.kind.icon(),
            &notice.message,
            "notification-close",
        )?;
        wrapper.append_child(&content).dom("append notice")?;

        let (id, replaced) = self.current.borrow_mut().show_with(|id| {
            let board = Rc::downgrade(self);
            let close = Listener::attach(&close, "click", move |_| {
                if let Some(board) = board.upgrade() {
                    board.dismiss(id);
                }
            })?;
            Ok::<_, SiteError>(Card {
                element: wrapper.clone(),
                _close: close,
            })
        })?;
        if let Some(old) = replaced {
            old.remove();
        }
        dom::body(&self.document)?
            .append_child(&wrapper)
            .dom("append notice")?;

        let board: Weak<Self> = Rc::downgrade(self);
        timers::after(self.visible_for, move || {
            if let Some(board) = board.upgrade() {
                board.dismiss(id);
            }
        });
        Ok(id)
    }

    /// Fade out and remove the notice `id`, if it is still the one on screen.
    pub fn dismiss(&self, id: SlotId) {
        let card = self.current.borrow_mut().take_if_current(id);
        if let Some(card) = card {
            card.slide_out("slideOutDown", self.fade);
        }
    }

    pub fn is_showing(&self) -> bool {
        !self.current.borrow().is_empty()
    }
}

/// Dismissible page-wide error. Several may stack; each leaves on its own.
pub fn show_global_error(document: &Document, message: &str, config: &SiteConfig) -> Result<()> {
    let wrapper = document.create_element("div").dom("div")?;
    wrapper.set_class_name("global-error");
    let (content, close) = build_card(
        document,
        "error-content",
        "fa-exclamation-circle",
        message,
        "error-close",
    )?;
    wrapper.append_child(&content).dom("append error")?;
    dom::set_styles(
        &wrapper,
        &[
            ("position", "fixed"),
            ("top", "20px"),
            ("right", "20px"),
            ("z-index", "9999"),
            ("background", "linear-gradient(135deg, #f44336, #e53935)"),
            ("color", "white"),
            ("padding", "15px 20px"),
            ("border-radius", "8px"),
            ("box-shadow", "0 5px 20px rgba(0,0,0,0.2)"),
            ("animation", "slideInRight 0.3s ease"),
        ],
    )?;

    // The auto-dismiss timer holds the only strong handle; the close
    // button reaches the card weakly, so nothing outlives the timer.
    let fade = config.notice_fade();
    let card: Rc<RefCell<Option<Card>>> = Rc::new(RefCell::new(None));
    let weak = Rc::downgrade(&card);
    let close = Listener::attach(&close, "click", move |_| {
        if let Some(card) = weak.upgrade() {
            retire(&card, fade);
        }
    })?;
    *card.borrow_mut() = Some(Card {
        element: wrapper.clone(),
        _close: close,
    });
    dom::body(document)?
        .append_child(&wrapper)
        .dom("append error")?;

    timers::after(config.global_error_visible(), move || retire(&card, fade));
    Ok(())
}

fn retire(card: &RefCell<Option<Card>>, fade: Duration) {
    let taken = card.borrow_mut().take();
    if let Some(card) = taken {
        card.slide_out("slideOutRight", fade);
    }
}
