//! Newsletter signup form. There's no backend yet, so a successful submit
//! waits a moment and then thanks the visitor.

use std::rc::Rc;

use log::{debug, info, warn};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlButtonElement, HtmlInputElement, Window};

use crate::config;
use crate::dom;
use crate::timers::{BrowserScheduler, Scheduler};

/// The bits of the form a submission reads and writes.
pub trait SubscribeView {
    fn email(&self) -> String;
    fn clear_email(&self);
    fn button_label(&self) -> String;
    fn set_button_label(&self, label: &str);
    fn set_button_disabled(&self, disabled: bool);
    /// Blocking message to the visitor.
    fn alert(&self, message: &str);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Accepted, confirmation follows after the delay.
    Pending,
    Rejected,
}

/// Only checks for an `@`. The real list provider does proper validation.
pub fn is_valid_email(email: &str) -> bool {
    !email.is_empty() && email.contains('@')
}

pub fn submit<V, S>(view: Rc<V>, scheduler: &S) -> SubmitOutcome
where
    V: SubscribeView + 'static,
    S: Scheduler,
{
    if !is_valid_email(&view.email()) {
        view.alert(config::INVALID_EMAIL_MESSAGE);
        return SubmitOutcome::Rejected;
    }

    let original_label = view.button_label();
    view.set_button_label(config::SUBSCRIBING_LABEL);
    view.set_button_disabled(true);
    info!("newsletter subscription accepted");

    scheduler.defer(
        config::SUBSCRIBE_DELAY_MS,
        Box::new(move || {
            view.alert(config::SUBSCRIBED_MESSAGE);
            view.clear_email();
            view.set_button_label(&original_label);
            view.set_button_disabled(false);
        }),
    );
    SubmitOutcome::Pending
}

pub struct DomSubscribeForm {
    window: Window,
    input: HtmlInputElement,
    button: HtmlButtonElement,
}

impl DomSubscribeForm {
    /// `None` if the form is missing its email input or submit button.
    pub fn find(form: &Element, window: &Window) -> Result<Option<Self>, JsValue> {
        let input = form
            .query_selector(config::EMAIL_INPUT)?
            .and_then(|e| e.dyn_into::<HtmlInputElement>().ok());
        let button = form
            .query_selector(config::SUBMIT_BUTTON)?
            .and_then(|e| e.dyn_into::<HtmlButtonElement>().ok());

        Ok(match (input, button) {
            (Some(input), Some(button)) => Some(Self {
                window: window.clone(),
                input,
                button,
            }),
            _ => None,
        })
    }
}

impl SubscribeView for DomSubscribeForm {
    fn email(&self) -> String {
        self.input.value()
    }

    fn clear_email(&self) {
        self.input.set_value("");
    }

    fn button_label(&self) -> String {
        self.button.text_content().unwrap_or_default()
    }

    fn set_button_label(&self, label: &str) {
        self.button.set_text_content(Some(label));
    }

    fn set_button_disabled(&self, disabled: bool) {
        self.button.set_disabled(disabled);
    }

    fn alert(&self, message: &str) {
        if let Err(e) = self.window.alert_with_message(message) {
            warn!("alert failed: {:?}", e);
        }
    }
}

pub fn bind_subscribe_form(document: &Document, window: &Window) -> Result<(), JsValue> {
    let Some(form) = document.get_element_by_id(config::SUBSCRIBE_FORM_ID) else {
        debug!("no #{} on this page", config::SUBSCRIBE_FORM_ID);
        return Ok(());
    };
    let Some(view) = DomSubscribeForm::find(&form, window)? else {
        warn!("#{} has no email input or submit button", config::SUBSCRIBE_FORM_ID);
        return Ok(());
    };

    let view = Rc::new(view);
    dom::listen(&form, "submit", move |event| {
        event.prevent_default();
        submit(Rc::clone(&view), &BrowserScheduler);
    })
}
