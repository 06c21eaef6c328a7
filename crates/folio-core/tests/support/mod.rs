//! In-memory doubles for the page's DOM, timers and backend

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};
use std::rc::Rc;
use std::time::Duration;

use async_trait::async_trait;
use futures::channel::oneshot;
use folio_core::{
    ContactFields, ContactSubmission, Field, FormView, Revealable, Sleeper, SubmissionError,
    Submitter,
};

pub const ORIGINAL_BUTTON: &str = "Send Message";

/// Observable state of the fake contact form
#[derive(Debug)]
pub struct FakeDom {
    pub values: BTreeMap<Field, String>,
    pub char_count: usize,
    pub errors: BTreeMap<Field, String>,
    pub invalid: BTreeSet<Field>,
    pub submit_content: String,
    pub submit_enabled: bool,
    /// Every value passed to `set_submit_enabled`, in order
    pub enabled_history: Vec<bool>,
    pub form_visible: bool,
    pub success_visible: bool,
    pub notices: Vec<String>,
    pub resets: usize,
}

impl Default for FakeDom {
    fn default() -> Self {
        Self {
            values: BTreeMap::new(),
            char_count: 0,
            errors: BTreeMap::new(),
            invalid: BTreeSet::new(),
            submit_content: ORIGINAL_BUTTON.to_string(),
            submit_enabled: true,
            enabled_history: Vec::new(),
            form_visible: true,
            success_visible: false,
            notices: Vec::new(),
            resets: 0,
        }
    }
}

/// Shared handle over a [`FakeDom`]; clones see the same state
#[derive(Debug, Clone, Default)]
pub struct FakeFormView {
    dom: Rc<RefCell<FakeDom>>,
}

impl FakeFormView {
    pub fn with_fields(fields: &ContactFields) -> Self {
        let view = Self::default();
        for field in Field::ALL {
            view.type_into(field, fields.value(field));
        }
        view
    }

    pub fn type_into(&self, field: Field, text: &str) {
        self.dom.borrow_mut().values.insert(field, text.to_string());
    }

    pub fn dom(&self) -> std::cell::Ref<'_, FakeDom> {
        self.dom.borrow()
    }
}

impl FormView for FakeFormView {
    fn field_value(&self, field: Field) -> String {
        self.dom.borrow().values.get(&field).cloned().unwrap_or_default()
    }

    fn set_char_count(&self, count: usize) {
        self.dom.borrow_mut().char_count = count;
    }

    fn show_error(&self, field: Field, message: &str) {
        let mut dom = self.dom.borrow_mut();
        dom.errors.insert(field, message.to_string());
        dom.invalid.insert(field);
    }

    fn clear_errors(&self) {
        let mut dom = self.dom.borrow_mut();
        dom.errors.clear();
        dom.invalid.clear();
    }

    fn submit_content(&self) -> String {
        self.dom.borrow().submit_content.clone()
    }

    fn set_submit_content(&self, content: &str) {
        self.dom.borrow_mut().submit_content = content.to_string();
    }

    fn set_submit_enabled(&self, enabled: bool) {
        let mut dom = self.dom.borrow_mut();
        dom.submit_enabled = enabled;
        dom.enabled_history.push(enabled);
    }

    fn hide_form(&self) {
        self.dom.borrow_mut().form_visible = false;
    }

    fn show_success_message(&self) {
        self.dom.borrow_mut().success_visible = true;
    }

    fn reset_form(&self) {
        let mut dom = self.dom.borrow_mut();
        dom.values.clear();
        dom.resets = dom.resets.saturating_add(1);
    }

    fn notify_failure(&self, notice: &str) {
        self.dom.borrow_mut().notices.push(notice.to_string());
    }
}

/// Sleeper that returns at once and remembers what it was asked to wait
#[derive(Debug, Clone, Default)]
pub struct RecordingSleeper {
    waits: Rc<RefCell<Vec<Duration>>>,
}

impl RecordingSleeper {
    pub fn waits(&self) -> Vec<Duration> {
        self.waits.borrow().clone()
    }
}

#[async_trait(?Send)]
impl Sleeper for RecordingSleeper {
    async fn sleep(&self, duration: Duration) {
        self.waits.borrow_mut().push(duration);
    }
}

/// What the submit control looked like when the backend was called
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonSnapshot {
    pub enabled: bool,
    pub content: String,
}

/// Backend double returning a fixed result
///
/// Records every submission it receives and, when given a view, the state
/// of the submit control at call time.
#[derive(Debug, Clone)]
pub struct ScriptedSubmitter {
    result: Result<(), SubmissionError>,
    received: Rc<RefCell<Vec<ContactSubmission>>>,
    watched: Option<FakeFormView>,
    snapshots: Rc<RefCell<Vec<ButtonSnapshot>>>,
}

impl ScriptedSubmitter {
    pub fn succeeding() -> Self {
        Self::with_result(Ok(()))
    }

    pub fn failing(error: SubmissionError) -> Self {
        Self::with_result(Err(error))
    }

    fn with_result(result: Result<(), SubmissionError>) -> Self {
        Self {
            result,
            received: Rc::default(),
            watched: None,
            snapshots: Rc::default(),
        }
    }

    pub fn watching(mut self, view: &FakeFormView) -> Self {
        self.watched = Some(view.clone());
        self
    }

    pub fn received(&self) -> Vec<ContactSubmission> {
        self.received.borrow().clone()
    }

    pub fn snapshots(&self) -> Vec<ButtonSnapshot> {
        self.snapshots.borrow().clone()
    }
}

#[async_trait(?Send)]
impl Submitter for ScriptedSubmitter {
    async fn submit(&self, submission: &ContactSubmission) -> Result<(), SubmissionError> {
        self.received.borrow_mut().push(submission.clone());
        if let Some(view) = &self.watched {
            self.snapshots.borrow_mut().push(ButtonSnapshot {
                enabled: view.dom().submit_enabled,
                content: view.submit_content(),
            });
        }
        self.result.clone()
    }
}

/// Backend double that stays pending until its gate is opened
pub struct GatedSubmitter {
    gate: RefCell<Option<oneshot::Receiver<()>>>,
}

impl GatedSubmitter {
    pub fn new() -> (Self, oneshot::Sender<()>) {
        let (tx, rx) = oneshot::channel();
        (
            Self {
                gate: RefCell::new(Some(rx)),
            },
            tx,
        )
    }
}

#[async_trait(?Send)]
impl Submitter for GatedSubmitter {
    async fn submit(&self, _submission: &ContactSubmission) -> Result<(), SubmissionError> {
        let gate = self.gate.borrow_mut().take();
        match gate {
            Some(rx) => rx
                .await
                .map_err(|_| SubmissionError::Transport("gate dropped".to_string())),
            None => Ok(()),
        }
    }
}

/// Element double recording its inline style
#[derive(Debug, Clone, Default)]
pub struct FakeElement {
    styles: Rc<RefCell<BTreeMap<String, String>>>,
    writes: Rc<RefCell<usize>>,
}

impl FakeElement {
    pub fn style(&self, property: &str) -> Option<String> {
        self.styles.borrow().get(property).cloned()
    }

    pub fn writes(&self) -> usize {
        *self.writes.borrow()
    }
}

impl Revealable for FakeElement {
    fn set_style(&self, property: &str, value: &str) {
        self.styles
            .borrow_mut()
            .insert(property.to_string(), value.to_string());
        let mut writes = self.writes.borrow_mut();
        *writes = writes.saturating_add(1);
    }
}

pub fn valid_fields() -> ContactFields {
    ContactFields::new("Jo", "jo@x.co", "0123456789")
}
