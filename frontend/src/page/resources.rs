use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Reflect;
use web_sys::{Element, Window};

use crate::dom;

/// Warns about images, scripts and stylesheets that failed to load.
///
/// Resource errors don't bubble, so this listens in the capture phase. Script
/// runtime errors (targeted at the window itself) are left alone.
pub fn bind_resource_errors(window: &Window) -> Result<(), JsValue> {
    bind_resource_errors_with(window, |url| {
        gloo_console::warn!("Resource loading error:", url);
    })
}

/// Calls `report` with the URL of every element that fails to load.
pub fn bind_resource_errors_with<F>(window: &Window, report: F) -> Result<(), JsValue>
where
    F: Fn(String) + 'static,
{
    dom::listen_capture(window, "error", move |event| {
        let Some(target) = event.target() else {
            return;
        };
        if target.dyn_ref::<Element>().is_none() {
            return;
        }
        report(resource_url(target.as_ref()).unwrap_or_else(|| "(unknown)".to_string()));
    })
}

/// The `src` of the failed element, or its `href` for stylesheets.
pub fn resource_url(target: &JsValue) -> Option<String> {
    ["src", "href"].into_iter().find_map(|key| {
        Reflect::get(target, &JsValue::from_str(key))
            .ok()
            .and_then(|value| value.as_string())
            .filter(|url| !url.is_empty())
    })
}
