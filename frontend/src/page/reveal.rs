use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{
    Document, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
};

use crate::config;
use crate::dom::{self, Unobserve};

/// Cards start hidden and fade in the first time they scroll into view.
pub fn bind_reveal_on_scroll(document: &Document) -> Result<(), JsValue> {
    // Element, not HtmlElement, so SVG cards are picked up too
    let cards = dom::query_all::<Element>(document, config::REVEAL_TARGETS)?;
    if cards.is_empty() {
        return Ok(());
    }

    let callback = Closure::wrap(Box::new(
        move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                if let Err(e) = reveal_card(&entry.target(), &observer) {
                    warn!("Failed to reveal card: {:?}", e);
                }
            }
        },
    ) as Box<dyn FnMut(Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(config::REVEAL_THRESHOLD));
    options.set_root_margin(config::REVEAL_ROOT_MARGIN);
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    callback.forget();

    for card in &cards {
        dom::apply_style(card, config::REVEAL_HIDDEN_STYLE)?;
        observer.observe(card);
    }
    debug!("watching {} cards for reveal", cards.len());
    Ok(())
}

/// Fades the card in and stops watching it. Shown cards stay shown.
pub fn reveal_card(card: &Element, observer: &impl Unobserve) -> Result<(), JsValue> {
    observer.unobserve(card);
    dom::apply_style(card, config::REVEAL_SHOWN_STYLE)
}
