use log::warn;
use wasm_bindgen::JsValue;
use web_sys::{Document, HtmlElement};

use crate::config;
use crate::dom;

/// Slight zoom on the newsletter preview while hovered.
pub fn bind_preview_hover(document: &Document) -> Result<(), JsValue> {
    let Some(preview) = dom::query::<HtmlElement>(document, config::NEWSLETTER_PREVIEW)? else {
        return Ok(());
    };

    for (event, transform) in [
        ("mouseenter", config::PREVIEW_HOVER_TRANSFORM),
        ("mouseleave", config::PREVIEW_REST_TRANSFORM),
    ] {
        let card = preview.clone();
        dom::listen(&preview, event, move |_| {
            if let Err(e) = card.style().set_property("transform", transform) {
                warn!("Failed to scale preview: {:?}", e);
            }
        })?;
    }
    Ok(())
}
