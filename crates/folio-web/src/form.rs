//! DOM binding for the contact form
//!
//! [`DomFormView`] resolves the form's elements once and implements
//! [`FormView`] on them. Every accessor is a silent no-op when its element is
//! missing from the page.

use std::rc::Rc;

use folio_core::{Field, FormConfig, FormController, FormView, SimulatedSubmitter};
use tracing::{debug, info, warn};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::spawn_local;
use web_sys::{
    Document, Element, HtmlButtonElement, HtmlElement, HtmlFormElement, HtmlInputElement,
    HtmlTextAreaElement, Window,
};

use crate::dom;
use crate::error::{Result, WebError};
use crate::timer::GlooSleeper;

pub const FORM_ID: &str = "contactForm";
pub const SUBMIT_ID: &str = "submitBtn";
pub const CHAR_COUNT_ID: &str = "charCount";
pub const SUCCESS_ID: &str = "successMessage";
pub const CONTAINER_SELECTOR: &str = ".contact-form";
pub const ERROR_SELECTOR: &str = ".form-error";
pub const INPUT_SELECTOR: &str = ".form-input, .form-textarea";
/// Class marking an input as invalid
pub const INVALID_CLASS: &str = "error";
/// Set on the form once its listeners are attached
pub const BOUND_ATTRIBUTE: &str = "data-folio-bound";

/// Contact form controller as wired into the page
pub type PageFormController =
    FormController<DomFormView, SimulatedSubmitter<GlooSleeper>, GlooSleeper>;

fn report(action: &'static str, result: std::result::Result<(), JsValue>) {
    if let Err(e) = result {
        warn!(action, error = ?e, "DOM update failed");
    }
}

/// Value of an `<input>` or `<textarea>`
fn control_value(element: &Element) -> Option<String> {
    element
        .dyn_ref::<HtmlInputElement>()
        .map(HtmlInputElement::value)
        .or_else(|| element.dyn_ref::<HtmlTextAreaElement>().map(HtmlTextAreaElement::value))
}

/// [`FormView`] over the live document
#[derive(Debug, Clone)]
pub struct DomFormView {
    document: Document,
    window: Option<Window>,
    form: Option<HtmlFormElement>,
    container: Option<HtmlElement>,
    submit: Option<HtmlButtonElement>,
    char_count: Option<Element>,
    success: Option<HtmlElement>,
}

impl DomFormView {
    /// Resolves the form's elements in `document`
    pub fn new(document: &Document) -> Self {
        let container = document
            .query_selector(CONTAINER_SELECTOR)
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<HtmlElement>().ok());

        Self {
            document: document.clone(),
            window: web_sys::window(),
            form: dom::element_by_id(document, FORM_ID),
            container,
            submit: dom::element_by_id(document, SUBMIT_ID),
            char_count: dom::element_by_id(document, CHAR_COUNT_ID),
            success: dom::element_by_id(document, SUCCESS_ID),
        }
    }

    fn input(&self, field: Field) -> Option<Element> {
        self.document.get_element_by_id(field.id())
    }

    fn query(&self, selector: &str) -> Vec<Element> {
        dom::query_all::<Element>(&self.document, selector).unwrap_or_default()
    }
}

impl FormView for DomFormView {
    fn field_value(&self, field: Field) -> String {
        self.input(field)
            .and_then(|el| control_value(&el))
            .unwrap_or_default()
    }

    fn set_char_count(&self, count: usize) {
        if let Some(counter) = &self.char_count {
            counter.set_text_content(Some(&count.to_string()));
        }
    }

    fn show_error(&self, field: Field, message: &str) {
        if let Some(error) = self.document.get_element_by_id(field.error_id()) {
            error.set_text_content(Some(message));
        }
        if let Some(input) = self.input(field) {
            report("mark invalid", input.class_list().add_1(INVALID_CLASS));
        }
    }

    fn clear_errors(&self) {
        for error in self.query(ERROR_SELECTOR) {
            error.set_text_content(Some(""));
        }
        for input in self.query(INPUT_SELECTOR) {
            report("clear invalid", input.class_list().remove_1(INVALID_CLASS));
        }
    }

    fn submit_content(&self) -> String {
        self.submit
            .as_ref()
            .map(|button| button.inner_html())
            .unwrap_or_default()
    }

    fn set_submit_content(&self, content: &str) {
        if let Some(button) = &self.submit {
            button.set_inner_html(content);
        }
    }

    fn set_submit_enabled(&self, enabled: bool) {
        if let Some(button) = &self.submit {
            button.set_disabled(!enabled);
        }
    }

    fn hide_form(&self) {
        if let Some(container) = &self.container {
            report("hide form", container.style().set_property("display", "none"));
        }
    }

    fn show_success_message(&self) {
        if let Some(success) = &self.success {
            report("show success", success.style().set_property("display", "block"));
        }
    }

    fn reset_form(&self) {
        if let Some(form) = &self.form {
            form.reset();
        }
    }

    fn notify_failure(&self, notice: &str) {
        if let Some(window) = &self.window {
            report("alert", window.alert_with_message(notice));
        }
    }
}

/// Wires the contact form's input and submit events
///
/// Returns `None` when the page has no contact form or the form was already
/// bound by an earlier call.
///
/// # Errors
///
/// Returns an error when the browser refuses an event listener
pub fn bind_contact_form(
    document: &Document,
    config: &FormConfig,
) -> Result<Option<Rc<PageFormController>>> {
    let Some(form) = dom::element_by_id::<HtmlFormElement>(document, FORM_ID) else {
        debug!("no contact form on this page");
        return Ok(None);
    };
    if form.has_attribute(BOUND_ATTRIBUTE) {
        debug!("contact form already bound");
        return Ok(None);
    }

    let controller = Rc::new(FormController::new(
        DomFormView::new(document),
        SimulatedSubmitter::new(GlooSleeper, config.submission_delay()),
        GlooSleeper,
        config.clone(),
    ));

    let message = dom::element_by_id::<HtmlTextAreaElement>(document, Field::Message.id());
    let has_counter = document.get_element_by_id(CHAR_COUNT_ID).is_some();
    if let (Some(message), true) = (message, has_counter) {
        let on_input = Rc::clone(&controller);
        let textarea = message.clone();
        dom::listen(&message, "input", move |_| {
            on_input.on_message_input(&textarea.value());
        })?;
    }

    let on_submit = Rc::clone(&controller);
    dom::listen(&form, "submit", move |event| {
        event.prevent_default();
        let controller = Rc::clone(&on_submit);
        spawn_local(async move {
            let outcome = controller.on_submit().await;
            debug!(?outcome, "contact form submit handled");
        });
    })?;
    form.set_attribute(BOUND_ATTRIBUTE, "")
        .map_err(|e| WebError::Dom(format!("{e:?}")))?;

    info!("contact form bound");
    Ok(Some(controller))
}
