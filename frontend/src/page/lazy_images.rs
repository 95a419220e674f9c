use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Document, Element, IntersectionObserver, IntersectionObserverEntry};

use crate::config;
use crate::dom::{self, Unobserve};

pub fn bind_lazy_images(document: &Document) -> Result<(), JsValue> {
    let images = dom::query_all::<Element>(document, config::LAZY_IMAGES)?;
    if images.is_empty() {
        return Ok(());
    }

    let observer = lazy_image_observer()?;
    for image in &images {
        observer.observe(image);
    }
    debug!("lazy loading {} images", images.len());
    Ok(())
}

/// Observer that loads each deferred image the first time it intersects.
pub fn lazy_image_observer() -> Result<IntersectionObserver, JsValue> {
    let callback = Closure::wrap(Box::new(
        move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                if let Err(e) = load_deferred(&entry.target(), &observer) {
                    warn!("Failed to load deferred image: {:?}", e);
                }
            }
        },
    ) as Box<dyn FnMut(Array, IntersectionObserver)>);

    let observer = IntersectionObserver::new(callback.as_ref().unchecked_ref())?;
    callback.forget();
    Ok(observer)
}

/// Moves `data-src` into `src` and stops observing the image.
///
/// Returns false if the image was already loaded. The observer is only
/// released on the call that actually swapped the source in.
pub fn load_deferred(image: &Element, observer: &impl Unobserve) -> Result<bool, JsValue> {
    let Some(src) = image.get_attribute(config::DEFERRED_SRC_ATTR) else {
        return Ok(false);
    };
    image.set_attribute("src", &src)?;
    image.remove_attribute(config::DEFERRED_SRC_ATTR)?;
    observer.unobserve(image);
    Ok(true)
}
