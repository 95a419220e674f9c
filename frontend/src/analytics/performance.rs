use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Window};

use crate::dom;

/// Milliseconds from navigation start to the end of the load event, or
/// `None` while the timing isn't filled in yet.
pub fn load_duration(navigation_start: f64, load_event_end: f64) -> Option<f64> {
    if navigation_start <= 0.0 || load_event_end <= 0.0 {
        return None;
    }
    let elapsed = load_event_end - navigation_start;
    (elapsed > 0.0).then_some(elapsed)
}

pub fn bind_load_time_report(window: &Window, document: &Document) -> Result<(), JsValue> {
    if window.performance().is_none() {
        log::debug!("performance API unavailable, skipping load time report");
        return Ok(());
    }

    // Already loaded, so the load event won't fire again.
    if document.ready_state() == "complete" {
        schedule_report();
        return Ok(());
    }

    dom::listen(window, "load", |_| schedule_report())
}

// loadEventEnd is still 0 inside the load listener, read it on the next tick.
fn schedule_report() {
    spawn_local(async {
        TimeoutFuture::new(0).await;
        report_load_time();
    });
}

fn report_load_time() {
    let Some(performance) = web_sys::window().and_then(|w| w.performance()) else {
        return;
    };
    let timing = performance.timing();
    match load_duration(timing.navigation_start(), timing.load_event_end()) {
        Some(ms) => {
            gloo_console::log!("Page load time:", format!("{}ms", ms));
            // Forward to an EventSink here once there is a real analytics backend.
        }
        None => log::debug!("load timing not available"),
    }
}
