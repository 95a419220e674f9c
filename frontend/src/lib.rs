use log::{info, warn};
use wasm_bindgen::JsValue;

pub mod config;
pub mod dom;
pub mod error;
pub mod timers;
pub mod utils {
    pub mod debounce;
    pub mod throttle;
}
pub mod analytics {
    pub mod performance;
    pub mod tracker;
}
pub mod page {
    pub mod footer;
    pub mod lazy_images;
    pub mod navigation;
    pub mod preview;
    pub mod resources;
    pub mod reveal;
    pub mod subscribe;
    pub mod tracking;
}

use analytics::performance::bind_load_time_report;
use analytics::tracker::Tracker;
use error::InitError;
use page::{footer, lazy_images, navigation, preview, resources, reveal, subscribe, tracking};

/// Helpers other page code can share.
pub mod quant_brief {
    pub use crate::analytics::tracker::{track_event, Properties};
    pub use crate::utils::debounce::{debounce, Debounce};
    pub use crate::utils::throttle::{throttle, Throttle};
}

/// Attaches every page behavior. A behavior that fails to attach is logged
/// and skipped, the rest still run.
pub fn init() -> Result<(), InitError> {
    let window = web_sys::window().ok_or(InitError::NoWindow)?;
    let document = window.document().ok_or(InitError::NoDocument)?;
    let tracker = Tracker::console();

    // Form handler goes before signup tracking so its listener runs first
    let behaviors: [(&'static str, Result<(), JsValue>); 12] = [
        ("smooth scroll", navigation::bind_smooth_scroll(&document)),
        ("subscribe form", subscribe::bind_subscribe_form(&document, &window)),
        ("reveal on scroll", reveal::bind_reveal_on_scroll(&document)),
        ("mobile menu", navigation::bind_mobile_menu(&document)),
        ("preview hover", preview::bind_preview_hover(&document)),
        ("footer year", footer::bind_footer_year(&document)),
        ("lazy images", lazy_images::bind_lazy_images(&document)),
        ("load time report", bind_load_time_report(&window, &document)),
        ("resource errors", resources::bind_resource_errors(&window)),
        ("navigation tracking", tracking::bind_navigation_tracking(&document, &tracker)),
        ("cta tracking", tracking::bind_cta_tracking(&document, &tracker)),
        ("signup tracking", tracking::bind_signup_tracking(&document, &tracker)),
    ];

    let mut attached = 0;
    for (behavior, result) in behaviors {
        match result {
            Ok(()) => attached += 1,
            Err(err) => warn!("{}", InitError::dom(behavior, err)),
        }
    }
    info!("Attached {} page behaviors", attached);
    Ok(())
}

/// Runs [`init`] now, or on `DOMContentLoaded` if the document is still parsing.
pub fn run_when_ready() -> Result<(), InitError> {
    let window = web_sys::window().ok_or(InitError::NoWindow)?;
    let document = window.document().ok_or(InitError::NoDocument)?;

    if document.ready_state() != "loading" {
        return init();
    }

    dom::listen(&document, "DOMContentLoaded", |_| {
        if let Err(e) = init() {
            warn!("Page init failed: {}", e);
        }
    })
    .map_err(|e| InitError::dom("DOMContentLoaded listener", e))
}
