//! Contact form controller
//!
//! Owns the form lifecycle: live character count, validation, the submit
//! round trip and the success swap. All DOM access goes through a
//! [`FormView`] injected at construction, so the controller runs unchanged
//! against the browser or an in-memory fake.
//!
//! # State machine
//!
//! ```text
//! Idle ─▶ Validating ─┬─▶ Invalid ──────────────┐
//!                     └─▶ Submitting ─┬─▶ Succeeded (terminal)
//!                                     └─▶ Failed ─┤
//!          ▲                                      │
//!          └──────────── next submit ◀────────────┘
//! ```

use std::cell::Cell;

use tracing::{debug, info, warn};

use crate::config::FormConfig;
use crate::error::SubmissionError;
use crate::submission::{ContactFields, Submitter};
use crate::timer::Sleeper;
use crate::validation::{Field, ValidationReport, text_length, validate};

/// Named accessors over the contact form's DOM
///
/// Implementations silently do nothing when an element is absent.
pub trait FormView {
    /// Raw value of `field`'s input; empty when absent
    fn field_value(&self, field: Field) -> String;

    /// Sets the visible character counter
    fn set_char_count(&self, count: usize);

    /// Shows `message` under `field` and marks its input invalid
    fn show_error(&self, field: Field, message: &str);

    /// Empties every error message and drops every invalid marker
    fn clear_errors(&self);

    /// Current content of the submit control
    fn submit_content(&self) -> String;

    fn set_submit_content(&self, content: &str);

    fn set_submit_enabled(&self, enabled: bool);

    fn hide_form(&self);

    fn show_success_message(&self);

    /// Resets every input to its initial value
    fn reset_form(&self);

    /// Tells the user a submission failed
    fn notify_failure(&self, notice: &str);
}

/// Where the form is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormState {
    #[default]
    Idle,
    Validating,
    /// Last submit failed validation
    Invalid,
    Submitting,
    /// Sent; the form is hidden for good
    Succeeded,
    /// Last submit failed in transit
    Failed,
}

/// What a call to [`FormController::submit`] did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation failed; errors are on screen
    Rejected(ValidationReport),
    /// Delivered, success shown and form reset
    Sent,
    /// Delivery failed; the generic notice was shown
    Failed(SubmissionError),
    /// Another submission is still pending
    Busy,
    /// The form was already sent
    Closed,
}

/// Drives the contact form through its lifecycle
pub struct FormController<V, S, T> {
    view: V,
    submitter: S,
    sleeper: T,
    config: FormConfig,
    state: Cell<FormState>,
}

impl<V, S, T> FormController<V, S, T>
where
    V: FormView,
    S: Submitter,
    T: Sleeper,
{
    pub fn new(view: V, submitter: S, sleeper: T, config: FormConfig) -> Self {
        Self {
            view,
            submitter,
            sleeper,
            config,
            state: Cell::new(FormState::Idle),
        }
    }

    #[must_use]
    pub fn state(&self) -> FormState {
        self.state.get()
    }

    #[must_use]
    pub const fn view(&self) -> &V {
        &self.view
    }

    /// Updates the counter to the length of `text`
    pub fn on_message_input(&self, text: &str) {
        self.view.set_char_count(text_length(text));
    }

    /// Reads the inputs from the view and submits them
    pub async fn on_submit(&self) -> SubmitOutcome {
        let fields = ContactFields::new(
            self.view.field_value(Field::Name),
            self.view.field_value(Field::Email),
            self.view.field_value(Field::Message),
        );
        self.submit(fields).await
    }

    /// Validates `fields` and, when they pass, sends them
    ///
    /// The submit control is disabled for the duration of the send and
    /// restored afterwards whatever the outcome. On success the form is
    /// swapped for the success message and reset after the configured delay.
    pub async fn submit(&self, fields: ContactFields) -> SubmitOutcome {
        match self.state.get() {
            FormState::Submitting => {
                debug!("submit ignored, a submission is pending");
                return SubmitOutcome::Busy;
            }
            FormState::Succeeded => {
                debug!("submit ignored, form already sent");
                return SubmitOutcome::Closed;
            }
            FormState::Idle | FormState::Validating | FormState::Invalid | FormState::Failed => {}
        }

        self.state.set(FormState::Validating);
        self.view.clear_errors();

        let report = validate(&fields);
        if !report.is_valid() {
            for error in report.errors() {
                self.view.show_error(error.field(), &error.to_string());
            }
            debug!(errors = report.len(), "contact form failed validation");
            self.state.set(FormState::Invalid);
            return SubmitOutcome::Rejected(report);
        }

        let submission = fields.to_submission();
        let original = self.view.submit_content();
        self.view.set_submit_enabled(false);
        self.view.set_submit_content(&self.config.loading_html);
        self.state.set(FormState::Submitting);

        let result = self.submitter.submit(&submission).await;
        match &result {
            Ok(()) => {
                self.view.hide_form();
                self.view.show_success_message();
                self.state.set(FormState::Succeeded);
                info!("contact form sent");
            }
            Err(error) => {
                warn!(%error, "contact form submission failed");
                self.view.notify_failure(&self.config.failure_notice);
                self.state.set(FormState::Failed);
            }
        }

        self.view.set_submit_enabled(true);
        self.view.set_submit_content(&original);

        match result {
            Ok(()) => {
                self.sleeper.sleep(self.config.reset_delay()).await;
                self.view.reset_form();
                self.view.set_char_count(0);
                SubmitOutcome::Sent
            }
            Err(error) => SubmitOutcome::Failed(error),
        }
    }
}
