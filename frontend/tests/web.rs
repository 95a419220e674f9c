//! Browser tests for the DOM wiring. Run with `wasm-pack test --headless --firefox`.
#![cfg(target_arch = "wasm32")]

use std::cell::RefCell;
use std::rc::Rc;

use chrono::Datelike;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Document, Element, Event, EventInit, HtmlElement};

use quantbrief_frontend::dom::{self, Unobserve};
use quantbrief_frontend::page::{footer, lazy_images, navigation, preview, resources, reveal};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

fn mount(html: &str) -> Element {
    let host = document().create_element("div").unwrap();
    host.set_inner_html(html);
    document().body().unwrap().append_child(&host).unwrap();
    host
}

fn by_id(id: &str) -> Element {
    document().get_element_by_id(id).unwrap()
}

fn cancelable(kind: &str) -> Event {
    let init = EventInit::new();
    init.set_bubbles(true);
    init.set_cancelable(true);
    Event::new_with_event_init_dict(kind, &init).unwrap()
}

/// Remembers the ids of unobserved elements.
#[derive(Default)]
struct RecordingObserver {
    released: RefCell<Vec<String>>,
}

impl Unobserve for RecordingObserver {
    fn unobserve(&self, target: &Element) {
        self.released.borrow_mut().push(target.id());
    }
}

#[wasm_bindgen_test]
fn in_page_anchor_click_is_intercepted() {
    let host = mount(r##"<a id="jump-link" href="#jump-target">Go</a><div id="jump-target">here</div>"##);
    navigation::bind_smooth_scroll(&document()).unwrap();

    let click = cancelable("click");
    let not_cancelled = by_id("jump-link").dispatch_event(&click).unwrap();

    assert!(!not_cancelled);
    assert!(click.default_prevented());
    host.remove();
}

#[wasm_bindgen_test]
fn each_click_navigates_to_the_target_once() {
    let host = mount(r##"<a id="count-link" href="#count-target">Go</a><a id="count-dead" href="#count-missing">No</a><div id="count-target"></div>"##);
    let visited = Rc::new(RefCell::new(Vec::new()));
    let navigate = {
        let visited = Rc::clone(&visited);
        Rc::new(move |target: &Element| visited.borrow_mut().push(target.id()))
    };
    navigation::bind_anchor_navigation(&document(), navigate).unwrap();

    let link = by_id("count-link");
    link.dispatch_event(&cancelable("click")).unwrap();
    assert_eq!(*visited.borrow(), vec!["count-target".to_string()]);
    link.dispatch_event(&cancelable("click")).unwrap();
    assert_eq!(visited.borrow().len(), 2);

    by_id("count-dead").dispatch_event(&cancelable("click")).unwrap();
    assert_eq!(visited.borrow().len(), 2);
    host.remove();
}

#[wasm_bindgen_test]
fn anchor_without_target_is_a_quiet_no_op() {
    let host = mount(r##"<a id="dead-link" href="#nowhere-at-all">Go</a>"##);
    navigation::bind_smooth_scroll(&document()).unwrap();

    let click = cancelable("click");
    by_id("dead-link").dispatch_event(&click).unwrap();

    assert!(click.default_prevented());
    host.remove();
}

#[wasm_bindgen_test]
fn scroll_to_fragment_reports_matches() {
    let host = mount(r#"<section id="fragment-target"></section>"#);

    assert!(navigation::scroll_to_fragment(&document(), "#fragment-target"));
    assert!(!navigation::scroll_to_fragment(&document(), "#missing-fragment"));
    assert!(!navigation::scroll_to_fragment(&document(), "#"));
    host.remove();
}

#[wasm_bindgen_test]
fn mobile_menu_toggles_active_class() {
    let host = mount(
        r#"<button class="mobile-menu-toggle" id="menu-toggle"></button><ul class="nav-links" id="menu-links"></ul>"#,
    );
    navigation::bind_mobile_menu(&document()).unwrap();
    let toggle = by_id("menu-toggle");
    let links = by_id("menu-links");

    toggle.dispatch_event(&cancelable("click")).unwrap();
    assert!(links.class_list().contains("active"));
    toggle.dispatch_event(&cancelable("click")).unwrap();
    assert!(!links.class_list().contains("active"));
    host.remove();
}

#[wasm_bindgen_test]
fn deferred_image_loads_once_and_is_released() {
    let host = mount(r#"<img id="lazy-hero" data-src="/assets/hero.png">"#);
    let image = by_id("lazy-hero");
    let observer = RecordingObserver::default();

    assert!(lazy_images::load_deferred(&image, &observer).unwrap());
    assert_eq!(image.get_attribute("src").as_deref(), Some("/assets/hero.png"));
    assert!(!image.has_attribute("data-src"));

    // A late intersection callback must not load it again
    image.set_attribute("src", "/assets/swapped.png").unwrap();
    assert!(!lazy_images::load_deferred(&image, &observer).unwrap());
    assert_eq!(image.get_attribute("src").as_deref(), Some("/assets/swapped.png"));
    assert_eq!(*observer.released.borrow(), vec!["lazy-hero".to_string()]);
    host.remove();
}

#[wasm_bindgen_test]
fn lazy_image_observer_accepts_deferred_images() {
    let host = mount(r#"<img id="lazy-real" data-src="/assets/real.png">"#);
    let image = by_id("lazy-real");
    let observer = lazy_images::lazy_image_observer().unwrap();
    observer.observe(&image);

    assert!(lazy_images::load_deferred(&image, &observer).unwrap());
    assert!(!image.has_attribute("data-src"));
    host.remove();
}

#[wasm_bindgen_test]
fn cards_start_hidden() {
    let host = mount(r#"<div class="feature-card" id="reveal-card">Fast</div>"#);
    reveal::bind_reveal_on_scroll(&document()).unwrap();

    let card: HtmlElement = by_id("reveal-card").dyn_into().unwrap();
    let style = card.style();
    assert_eq!(style.get_property_value("opacity").unwrap(), "0");
    assert_eq!(style.get_property_value("transform").unwrap(), "translateY(30px)");
    host.remove();
}

#[wasm_bindgen_test]
fn revealed_card_is_shown_and_released() {
    let host = mount(r#"<div class="value-card" id="shown-card">Honest</div>"#);
    reveal::bind_reveal_on_scroll(&document()).unwrap();
    let card = by_id("shown-card");
    let observer = RecordingObserver::default();

    reveal::reveal_card(&card, &observer).unwrap();

    let style = dom::style_of(&card).unwrap();
    assert_eq!(style.get_property_value("opacity").unwrap(), "1");
    assert_eq!(style.get_property_value("transform").unwrap(), "translateY(0px)");
    assert_eq!(*observer.released.borrow(), vec!["shown-card".to_string()]);
    host.remove();
}

#[wasm_bindgen_test]
fn svg_cards_are_hidden_too() {
    let host = mount(r#"<svg class="team-member" id="svg-card" width="10" height="10"></svg>"#);
    reveal::bind_reveal_on_scroll(&document()).unwrap();

    let style = dom::style_of(&by_id("svg-card")).unwrap();
    assert_eq!(style.get_property_value("opacity").unwrap(), "0");
    host.remove();
}

#[wasm_bindgen_test]
fn footer_year_is_stamped_once() {
    let host = mount(r#"<div class="footer-bottom"><p id="footer-copy">© 2025 QuantBrief, since 2025</p></div>"#);
    let year = chrono::Local::now().year();

    footer::bind_footer_year(&document()).unwrap();
    footer::bind_footer_year(&document()).unwrap();

    let expected = if year == 2025 {
        "© 2025 QuantBrief, since 2025".to_string()
    } else {
        format!("© {} QuantBrief, since 2025", year)
    };
    assert_eq!(by_id("footer-copy").inner_html(), expected);
    host.remove();
}

#[wasm_bindgen_test]
fn preview_scales_on_hover() {
    let host = mount(r#"<div class="newsletter-mockup" id="preview-card"></div>"#);
    preview::bind_preview_hover(&document()).unwrap();
    let card: HtmlElement = by_id("preview-card").dyn_into().unwrap();

    card.dispatch_event(&Event::new("mouseenter").unwrap()).unwrap();
    assert_eq!(card.style().get_property_value("transform").unwrap(), "scale(1.02)");
    card.dispatch_event(&Event::new("mouseleave").unwrap()).unwrap();
    assert_eq!(card.style().get_property_value("transform").unwrap(), "scale(1)");
    host.remove();
}

#[wasm_bindgen_test]
fn resource_url_prefers_src_then_href() {
    let host = mount(
        r#"<img id="broken-img" src="https://cdn.example/missing.png"><link id="broken-css" rel="stylesheet" href="https://cdn.example/missing.css">"#,
    );

    assert_eq!(
        resources::resource_url(by_id("broken-img").as_ref()).as_deref(),
        Some("https://cdn.example/missing.png")
    );
    assert_eq!(
        resources::resource_url(by_id("broken-css").as_ref()).as_deref(),
        Some("https://cdn.example/missing.css")
    );
    host.remove();
}

#[wasm_bindgen_test]
fn failed_element_load_is_reported_with_its_url() {
    let host = mount(r#"<img id="failing-img" alt="">"#);
    let image = by_id("failing-img");
    image.set_attribute("src", "https://cdn.example/gone.png").unwrap();
    let window = web_sys::window().unwrap();
    let reported = Rc::new(RefCell::new(Vec::new()));
    {
        let reported = Rc::clone(&reported);
        resources::bind_resource_errors_with(&window, move |url| reported.borrow_mut().push(url))
            .unwrap();
    }

    // Resource errors don't bubble, only a capture listener sees them
    image.dispatch_event(&Event::new("error").unwrap()).unwrap();
    // Errors on non-element targets are not resource failures
    document().dispatch_event(&Event::new("error").unwrap()).unwrap();

    assert_eq!(
        *reported.borrow(),
        vec!["https://cdn.example/gone.png".to_string()]
    );
    host.remove();
}
