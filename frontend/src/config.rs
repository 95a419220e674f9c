//! Selectors, copy and timings for the marketing page.

use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Chatty while developing locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

// Navigation
pub const IN_PAGE_ANCHORS: &str = "a[href^=\"#\"]";
pub const NAV_LINKS: &str = ".nav-links";
pub const NAV_LINK_ANCHORS: &str = ".nav-links a";
pub const MOBILE_MENU_TOGGLE: &str = ".mobile-menu-toggle";
pub const MENU_OPEN_CLASS: &str = "active";

// Newsletter form
pub const SUBSCRIBE_FORM_ID: &str = "subscribeForm";
pub const EMAIL_INPUT: &str = "input[type=\"email\"]";
pub const SUBMIT_BUTTON: &str = "button[type=\"submit\"]";
pub const SUBSCRIBING_LABEL: &str = "Subscribing...";
pub const SUBSCRIBED_MESSAGE: &str = "Thank you for subscribing! You'll be notified when we launch.";
pub const INVALID_EMAIL_MESSAGE: &str = "Please enter a valid email address.";
/// Stand-in for the real signup request.
pub const SUBSCRIBE_DELAY_MS: u32 = 1_000;

// Fade-in on scroll
pub const REVEAL_TARGETS: &str = ".feature-card, .value-card, .team-member, .newsletter-card";
pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";
pub const REVEAL_HIDDEN_STYLE: &[(&str, &str)] = &[
    ("opacity", "0"),
    ("transform", "translateY(30px)"),
    ("transition", "opacity 0.6s ease, transform 0.6s ease"),
];
pub const REVEAL_SHOWN_STYLE: &[(&str, &str)] = &[("opacity", "1"), ("transform", "translateY(0)")];

// Newsletter preview card
pub const NEWSLETTER_PREVIEW: &str = ".newsletter-mockup";
pub const PREVIEW_HOVER_TRANSFORM: &str = "scale(1.02)";
pub const PREVIEW_REST_TRANSFORM: &str = "scale(1)";

// Footer
pub const FOOTER_YEAR: &str = ".footer-bottom p";
pub const FOOTER_PLACEHOLDER_YEAR: &str = "2025";
pub const FOOTER_STAMPED_ATTR: &str = "data-year-stamped";

// Lazy images
pub const LAZY_IMAGES: &str = "img[data-src]";
pub const DEFERRED_SRC_ATTR: &str = "data-src";

// Analytics
pub const CTA_BUTTONS: &str = ".cta-button, .btn-primary";
pub const CTA_SECTION: &str = "section";
pub const UNKNOWN_LOCATION: &str = "unknown";
