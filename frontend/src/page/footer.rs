use chrono::Datelike;
use wasm_bindgen::JsValue;
use web_sys::Document;

use crate::config;

/// Replaces the first placeholder year in `markup` with `year`.
/// `None` when there is nothing to change.
pub fn stamp_year(markup: &str, year: i32) -> Option<String> {
    let year = year.to_string();
    if year == config::FOOTER_PLACEHOLDER_YEAR || !markup.contains(config::FOOTER_PLACEHOLDER_YEAR) {
        return None;
    }
    Some(markup.replacen(config::FOOTER_PLACEHOLDER_YEAR, &year, 1))
}

pub fn bind_footer_year(document: &Document) -> Result<(), JsValue> {
    let Some(footer) = document.query_selector(config::FOOTER_YEAR)? else {
        return Ok(());
    };
    // Running init twice must not eat a second "2025" in the copy
    if footer.has_attribute(config::FOOTER_STAMPED_ATTR) {
        return Ok(());
    }

    let year = chrono::Local::now().year();
    if let Some(markup) = stamp_year(&footer.inner_html(), year) {
        footer.set_inner_html(&markup);
    }
    footer.set_attribute(config::FOOTER_STAMPED_ATTR, "")?;
    Ok(())
}
