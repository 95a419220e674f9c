use std::collections::BTreeMap;
use std::rc::Rc;

use serde::Serialize;
use serde_json::Value;
use wasm_bindgen::prelude::*;

use crate::config;

pub const NAVIGATION_CLICK: &str = "navigation_click";
pub const CTA_CLICK: &str = "cta_click";
pub const NEWSLETTER_SIGNUP_ATTEMPT: &str = "newsletter_signup_attempt";

pub type Properties = BTreeMap<String, String>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackedEvent {
    pub name: String,
    pub properties: Properties,
}

/// Where tracked events end up. Swap in a real analytics client here.
pub trait EventSink {
    fn record(&self, event: &TrackedEvent);
}

/// Logs every event to the browser console.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleSink;

impl EventSink for ConsoleSink {
    fn record(&self, event: &TrackedEvent) {
        // json_compatible so the map prints as a plain object, not a Map
        let serializer = serde_wasm_bindgen::Serializer::json_compatible();
        match event.properties.serialize(&serializer) {
            Ok(properties) => gloo_console::log!("Event tracked:", event.name.as_str(), properties),
            Err(e) => gloo_console::warn!("Failed to serialize event properties:", e.to_string()),
        }
    }
}

#[derive(Clone)]
pub struct Tracker {
    sink: Rc<dyn EventSink>,
}

impl Tracker {
    pub fn new(sink: Rc<dyn EventSink>) -> Self {
        Self { sink }
    }

    pub fn console() -> Self {
        Self::new(Rc::new(ConsoleSink))
    }

    pub fn track(&self, name: &str, properties: Properties) {
        log::debug!("tracking {} ({} properties)", name, properties.len());
        self.sink.record(&TrackedEvent {
            name: name.to_string(),
            properties,
        });
    }
}

impl Default for Tracker {
    fn default() -> Self {
        Self::console()
    }
}

/// Tracks an event on the console sink. `None` means no properties.
pub fn track_event(name: &str, properties: Option<Properties>) {
    Tracker::console().track(name, properties.unwrap_or_default());
}

/// `trackEvent(name, properties?)` for other scripts on the page.
#[wasm_bindgen(js_name = trackEvent)]
pub fn track_event_js(name: &str, properties: JsValue) {
    let properties = if properties.is_undefined() || properties.is_null() {
        Properties::new()
    } else {
        match serde_wasm_bindgen::from_value::<BTreeMap<String, Value>>(properties) {
            Ok(raw) => stringify_values(raw),
            Err(e) => {
                log::warn!("ignoring properties for {}: {}", name, e);
                Properties::new()
            }
        }
    };
    track_event(name, Some(properties));
}

fn stringify_values(raw: BTreeMap<String, Value>) -> Properties {
    raw.into_iter()
        .map(|(key, value)| {
            let value = match value {
                Value::String(s) => s,
                other => other.to_string(),
            };
            (key, value)
        })
        .collect()
}

pub fn navigation_properties(link_text: &str, url: &str) -> Properties {
    Properties::from([
        ("page".to_string(), link_text.trim().to_string()),
        ("url".to_string(), url.to_string()),
    ])
}

/// `section_class` is the class name of the closest enclosing `<section>`.
pub fn cta_properties(button_text: &str, section_class: Option<&str>) -> Properties {
    let location = section_class
        .filter(|class| !class.is_empty())
        .unwrap_or(config::UNKNOWN_LOCATION);
    Properties::from([
        ("text".to_string(), button_text.trim().to_string()),
        ("location".to_string(), location.to_string()),
    ])
}
