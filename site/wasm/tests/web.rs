//! Browser tests for the DOM side of the site chrome.
//!
//! Run with `wasm-pack test --headless --firefox site/wasm`.

use std::time::Duration;

use criyagen_site::{Notice, SiteConfig, current_page};
use criyagen_site_wasm::{
    FooterController, HeaderController, NoticeBoard, TooltipLayer, init_lazy_images,
    init_smooth_scroll, remove_loading_screen, validate_form,
};
use gloo_timers::future::sleep;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Document, Element, Event, EventInit, HtmlInputElement, Window};

const PIXEL: &str = "data:image/gif;base64,R0lGODlhAQABAIAAAAAAAP///yH5BAEAAAAALAAAAAABAAEAAAIBRAA7";
const OTHER_PIXEL: &str = "data:image/gif;base64,R0lGODlhAQABAAAAACwAAAAAAQABAAA=";

wasm_bindgen_test_configure!(run_in_browser);

fn window() -> Window {
    web_sys::window().unwrap()
}

fn document() -> Document {
    window().document().unwrap()
}

fn fast_config() -> SiteConfig {
    SiteConfig {
        notice_fade_ms: 10,
        overlay_fade_ms: 20,
        global_error_visible_ms: 5_000,
        ..SiteConfig::default()
    }
}

fn cancelable(kind: &str) -> Event {
    let init = EventInit::new();
    init.set_cancelable(true);
    Event::new_with_event_init_dict(kind, &init).unwrap()
}

fn mount_div(document: &Document, html: &str) -> Element {
    let div = document.create_element("div").unwrap();
    div.set_inner_html(html);
    document.body().unwrap().append_child(&div).unwrap();
    div
}

fn count(document: &Document, selector: &str) -> u32 {
    document.query_selector_all(selector).unwrap().length()
}

fn mount_form(document: &Document, html: &str) -> Element {
    let form = document.create_element("form").unwrap();
    form.set_inner_html(html);
    document.body().unwrap().append_child(&form).unwrap();
    form
}

#[wasm_bindgen_test]
fn second_tooltip_replaces_the_first() {
    let doc = document();
    let layer = TooltipLayer::new(doc.clone());
    layer.show("first", 10.0, 10.0).unwrap();
    layer.show("second", 40.0, 40.0).unwrap();

    assert_eq!(count(&doc, ".custom-tooltip"), 1);
    let tooltip = doc.query_selector(".custom-tooltip").unwrap().unwrap();
    assert_eq!(tooltip.text_content().as_deref(), Some("second"));

    layer.hide();
    assert_eq!(count(&doc, ".custom-tooltip"), 0);
}

#[wasm_bindgen_test]
fn one_notice_on_screen_at_a_time() {
    let doc = document();
    let board = NoticeBoard::new(doc.clone(), &SiteConfig::default());
    let first = board.show(&Notice::success("saved")).unwrap();
    board.show(&Notice::error("failed")).unwrap();

    assert_eq!(count(&doc, ".footer-notification"), 1);
    assert_eq!(count(&doc, ".footer-notification.error"), 1);
    assert_eq!(count(&doc, "#footer-notification-styles"), 1);

    // The first notice's timer firing late must not touch the second.
    board.dismiss(first);
    assert!(board.is_showing());
}

#[wasm_bindgen_test]
fn empty_required_field_gets_one_message_until_typed_into() {
    let doc = document();
    let form = mount_form(
        &doc,
        r#"<input id="req-name" type="text" required><input id="req-mail" type="email" required value="ok@example.com">"#,
    );

    assert!(!validate_form(&doc, &form).unwrap());
    assert_eq!(count(&doc, "#req-name + .error-message"), 1);
    assert_eq!(count(&doc, ".error-message"), 1);

    // Validating again does not stack a second message.
    assert!(!validate_form(&doc, &form).unwrap());
    assert_eq!(count(&doc, ".error-message"), 1);

    let name: HtmlInputElement = doc
        .get_element_by_id("req-name")
        .unwrap()
        .dyn_into()
        .unwrap();
    name.set_value("Ada");
    name.dispatch_event(&Event::new("input").unwrap()).unwrap();
    assert_eq!(count(&doc, ".error-message"), 0);
    assert!(!name.class_list().contains("error"));

    assert!(validate_form(&doc, &form).unwrap());
    form.remove();
}

#[wasm_bindgen_test]
fn typing_clears_only_that_fields_message() {
    let doc = document();
    let form = mount_form(
        &doc,
        r#"<input id="pair-first" type="text" required><textarea id="pair-second" required></textarea>"#,
    );

    assert!(!validate_form(&doc, &form).unwrap());
    assert_eq!(form.query_selector_all(".error-message").unwrap().length(), 2);

    let first: HtmlInputElement = doc
        .get_element_by_id("pair-first")
        .unwrap()
        .dyn_into()
        .unwrap();
    first.set_value("x");
    first.dispatch_event(&Event::new("input").unwrap()).unwrap();

    assert_eq!(form.query_selector_all(".error-message").unwrap().length(), 1);
    assert_eq!(count(&doc, "#pair-second + .error-message"), 1);
    let second = doc.get_element_by_id("pair-second").unwrap();
    assert!(second.class_list().contains("error"));
    form.remove();
}

#[wasm_bindgen_test]
fn malformed_email_is_reported_once() {
    let doc = document();
    let form = mount_form(&doc, r#"<input type="email" required value="not-an-email">"#);

    assert!(!validate_form(&doc, &form).unwrap());
    let message = form.query_selector(".error-message").unwrap().unwrap();
    assert_eq!(
        message.text_content().as_deref(),
        Some("Please enter a valid email address")
    );
    form.remove();
}

#[wasm_bindgen_test]
async fn closing_a_notice_removes_it_after_the_fade() {
    let doc = document();
    let board = NoticeBoard::new(doc.clone(), &fast_config());
    board.show(&Notice::success("saved")).unwrap();

    let close = doc.query_selector(".notification-close").unwrap().unwrap();
    close.dispatch_event(&Event::new("click").unwrap()).unwrap();
    assert!(!board.is_showing());
    assert_eq!(count(&doc, ".footer-notification"), 1);

    sleep(Duration::from_millis(60)).await;
    assert_eq!(count(&doc, ".footer-notification"), 0);
}

#[wasm_bindgen_test]
async fn global_error_close_button_and_timer_both_retire_it() {
    let doc = document();
    let config = fast_config();
    criyagen_site_wasm::show_global_error(&doc, "load failed", &config).unwrap();
    assert_eq!(count(&doc, ".global-error"), 1);

    let close = doc.query_selector(".global-error .error-close").unwrap().unwrap();
    close.dispatch_event(&Event::new("click").unwrap()).unwrap();
    sleep(Duration::from_millis(60)).await;
    assert_eq!(count(&doc, ".global-error"), 0);

    let quick = SiteConfig {
        global_error_visible_ms: 20,
        ..fast_config()
    };
    criyagen_site_wasm::show_global_error(&doc, "load failed", &quick).unwrap();
    sleep(Duration::from_millis(100)).await;
    assert_eq!(count(&doc, ".global-error"), 0);
}

#[wasm_bindgen_test]
async fn loading_overlay_is_detached_after_the_fade() {
    let doc = document();
    let config = fast_config();
    assert!(!remove_loading_screen(&doc, &config).unwrap());

    let overlay = mount_div(&doc, "");
    overlay.set_id("loadingScreen");
    assert!(remove_loading_screen(&doc, &config).unwrap());
    assert!(overlay.is_connected());
    let style = overlay.dyn_ref::<web_sys::HtmlElement>().unwrap().style();
    assert_eq!(style.get_property_value("opacity").unwrap(), "0");

    sleep(Duration::from_millis(80)).await;
    assert!(!overlay.is_connected());
}

#[wasm_bindgen_test]
fn in_page_links_scroll_but_bare_hash_is_left_alone() {
    let doc = document();
    let area = mount_div(
        &doc,
        r##"<a id="to-target" href="#scroll-target">go</a><a id="bare-hash" href="#">top</a><div id="scroll-target"></div>"##,
    );
    assert!(init_smooth_scroll(&doc).unwrap());

    let to_target = doc.get_element_by_id("to-target").unwrap();
    let not_cancelled = to_target.dispatch_event(&cancelable("click")).unwrap();
    assert!(!not_cancelled, "fragment link navigation should be prevented");

    let bare = doc.get_element_by_id("bare-hash").unwrap();
    assert!(bare.dispatch_event(&cancelable("click")).unwrap());
    area.remove();
}

#[wasm_bindgen_test]
async fn lazy_image_swaps_source_once() {
    let win = window();
    let doc = document();
    let body = doc.body().unwrap();
    let img = doc.create_element("img").unwrap();
    img.set_class_name("lazy");
    img.set_attribute("data-src", PIXEL).unwrap();
    img.set_attribute("style", "display:block;width:10px;height:10px").unwrap();
    body.insert_before(&img, body.first_child().as_ref()).unwrap();
    win.scroll_to_with_x_and_y(0.0, 0.0);

    assert!(init_lazy_images(&win, &doc).unwrap());
    sleep(Duration::from_millis(200)).await;
    assert_eq!(img.get_attribute("src").as_deref(), Some(PIXEL));
    assert!(!img.class_list().contains("lazy"));

    // Leaving and re-entering the viewport must not swap again.
    img.set_attribute("data-src", OTHER_PIXEL).unwrap();
    img.set_attribute("style", "display:none").unwrap();
    sleep(Duration::from_millis(100)).await;
    img.set_attribute("style", "display:block;width:10px;height:10px").unwrap();
    sleep(Duration::from_millis(200)).await;
    assert_eq!(img.get_attribute("src").as_deref(), Some(PIXEL));
    img.remove();
}

#[wasm_bindgen_test]
fn controllers_skip_pages_without_their_root() {
    let win = window();
    let doc = document();
    let config = SiteConfig::default();
    assert!(HeaderController::mount(&win, &doc, &config).unwrap().is_none());
    let notices = NoticeBoard::new(doc.clone(), &config);
    assert!(
        FooterController::mount(&win, &doc, &config, notices)
            .unwrap()
            .is_none()
    );
}

#[wasm_bindgen_test]
fn first_toggle_closes_the_current_pages_dropdown() {
    let win = window();
    let doc = document();
    let page = current_page(&win.location().pathname().unwrap());
    let header = mount_div(
        &doc,
        &format!(
            r##"<nav id="navMenu"><div class="dropdown" id="nav-dropdown"><a class="dropdown-toggle" href="#">Services</a><a class="nav-link" data-page="{page}" href="{page}.html">Here</a></div></nav>"##
        ),
    );
    header.set_id("mainHeader");

    let mounted = HeaderController::mount(&win, &doc, &SiteConfig::default()).unwrap();
    assert!(mounted.is_some());
    let dropdown = doc.get_element_by_id("nav-dropdown").unwrap();
    assert!(dropdown.class_list().contains("active"));

    let toggle = doc.query_selector("#nav-dropdown .dropdown-toggle").unwrap().unwrap();
    toggle.dispatch_event(&cancelable("click")).unwrap();
    assert!(!dropdown.class_list().contains("active"));
    toggle.dispatch_event(&cancelable("click")).unwrap();
    assert!(dropdown.class_list().contains("active"));
    header.remove();
}
