use std::rc::Rc;

use log::{debug, warn};
use wasm_bindgen::JsValue;
use web_sys::{Document, Element, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

use crate::config;
use crate::dom;

/// In-page anchors scroll smoothly to their target instead of jumping.
pub fn bind_smooth_scroll(document: &Document) -> Result<(), JsValue> {
    bind_anchor_navigation(document, Rc::new(scroll_to_start))
}

/// Intercepts in-page anchor clicks and hands the resolved target to `navigate`.
pub fn bind_anchor_navigation(
    document: &Document,
    navigate: Rc<dyn Fn(&Element)>,
) -> Result<(), JsValue> {
    let anchors = dom::query_all::<Element>(document, config::IN_PAGE_ANCHORS)?;
    debug!("smooth scroll on {} anchors", anchors.len());

    for anchor in anchors {
        let document = document.clone();
        let link = anchor.clone();
        let navigate = Rc::clone(&navigate);
        dom::listen(&anchor, "click", move |event| {
            event.prevent_default();
            let target = link
                .get_attribute("href")
                .and_then(|href| fragment_target(&document, &href));
            if let Some(target) = target {
                navigate(&target);
            }
        })?;
    }
    Ok(())
}

/// The element `href` selects, if any.
pub fn fragment_target(document: &Document, href: &str) -> Option<Element> {
    // A bare "#" isn't a valid selector and throws, treat it as no match
    match document.query_selector(href) {
        Ok(target) => target,
        Err(_) => {
            debug!("not a selector: {}", href);
            None
        }
    }
}

pub fn scroll_to_start(target: &Element) {
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    target.scroll_into_view_with_scroll_into_view_options(&options);
}

/// Scrolls the element `href` selects to the top of the viewport.
/// Returns false when nothing matches.
pub fn scroll_to_fragment(document: &Document, href: &str) -> bool {
    match fragment_target(document, href) {
        Some(target) => {
            scroll_to_start(&target);
            true
        }
        None => false,
    }
}

pub fn bind_mobile_menu(document: &Document) -> Result<(), JsValue> {
    let Some(toggle) = dom::query::<Element>(document, config::MOBILE_MENU_TOGGLE)? else {
        return Ok(());
    };
    let Some(nav_links) = dom::query::<Element>(document, config::NAV_LINKS)? else {
        debug!("menu toggle present without {}", config::NAV_LINKS);
        return Ok(());
    };

    dom::listen(&toggle, "click", move |_| {
        if let Err(e) = nav_links.class_list().toggle(config::MENU_OPEN_CLASS) {
            warn!("Failed to toggle menu: {:?}", e);
        }
    })
}
