use wasm_bindgen::JsValue;
use web_sys::{Document, Element, HtmlAnchorElement};

use crate::analytics::tracker::{
    cta_properties, navigation_properties, Properties, Tracker, CTA_CLICK, NAVIGATION_CLICK,
    NEWSLETTER_SIGNUP_ATTEMPT,
};
use crate::config;
use crate::dom;

pub fn bind_navigation_tracking(document: &Document, tracker: &Tracker) -> Result<(), JsValue> {
    for link in dom::query_all::<HtmlAnchorElement>(document, config::NAV_LINK_ANCHORS)? {
        let tracker = tracker.clone();
        let anchor = link.clone();
        dom::listen(&link, "click", move |_| {
            tracker.track(
                NAVIGATION_CLICK,
                navigation_properties(&dom::trimmed_text(&anchor), &anchor.href()),
            );
        })?;
    }
    Ok(())
}

pub fn bind_cta_tracking(document: &Document, tracker: &Tracker) -> Result<(), JsValue> {
    for button in dom::query_all::<Element>(document, config::CTA_BUTTONS)? {
        let tracker = tracker.clone();
        let element = button.clone();
        dom::listen(&button, "click", move |_| {
            let section_class = element
                .closest(config::CTA_SECTION)
                .ok()
                .flatten()
                .map(|section| section.class_name());
            tracker.track(
                CTA_CLICK,
                cta_properties(&dom::trimmed_text(&element), section_class.as_deref()),
            );
        })?;
    }
    Ok(())
}

/// Tracks every signup submit, valid or not. Runs alongside the form handler.
pub fn bind_signup_tracking(document: &Document, tracker: &Tracker) -> Result<(), JsValue> {
    let Some(form) = document.get_element_by_id(config::SUBSCRIBE_FORM_ID) else {
        return Ok(());
    };
    let tracker = tracker.clone();
    dom::listen(&form, "submit", move |_| {
        tracker.track(NEWSLETTER_SIGNUP_ATTEMPT, Properties::new());
    })
}
