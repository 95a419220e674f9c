//! Thin helpers over web-sys for page-lifetime listeners and queries.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    CssStyleDeclaration, Document, Element, Event, EventTarget, HtmlElement, IntersectionObserver,
    SvgElement,
};

/// Adds a listener that lives as long as the page.
pub fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), JsValue>
where
    F: FnMut(Event) + 'static,
{
    let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
    callback.forget();
    Ok(())
}

/// Same as [`listen`] but in the capture phase, for events that don't bubble.
pub fn listen_capture<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), JsValue>
where
    F: FnMut(Event) + 'static,
{
    let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target.add_event_listener_with_callback_and_bool(
        event,
        callback.as_ref().unchecked_ref(),
        true,
    )?;
    callback.forget();
    Ok(())
}

/// Every match of `selector` that casts to `T`.
pub fn query_all<T: JsCast>(document: &Document, selector: &str) -> Result<Vec<T>, JsValue> {
    let nodes = document.query_selector_all(selector)?;
    Ok((0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .filter_map(|node| node.dyn_into::<T>().ok())
        .collect())
}

pub fn query<T: JsCast>(document: &Document, selector: &str) -> Result<Option<T>, JsValue> {
    Ok(document
        .query_selector(selector)?
        .and_then(|element| element.dyn_into::<T>().ok()))
}

/// Inline style of an HTML or SVG element.
pub fn style_of(element: &Element) -> Option<CssStyleDeclaration> {
    if let Some(html) = element.dyn_ref::<HtmlElement>() {
        return Some(html.style());
    }
    element.dyn_ref::<SvgElement>().map(|svg| svg.style())
}

pub fn apply_style(element: &Element, style: &[(&str, &str)]) -> Result<(), JsValue> {
    let Some(declaration) = style_of(element) else {
        return Ok(());
    };
    for (property, value) in style {
        declaration.set_property(property, value)?;
    }
    Ok(())
}

/// Lets observer callbacks be driven without a real viewport.
pub trait Unobserve {
    fn unobserve(&self, target: &Element);
}

impl Unobserve for IntersectionObserver {
    fn unobserve(&self, target: &Element) {
        IntersectionObserver::unobserve(self, target);
    }
}

/// Trimmed text content, empty when the node has none.
pub fn trimmed_text(element: &Element) -> String {
    element
        .text_content()
        .map(|text| text.trim().to_string())
        .unwrap_or_default()
}
