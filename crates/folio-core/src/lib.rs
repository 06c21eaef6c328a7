//! Page logic for the folio portfolio site
//!
//! This crate holds everything the page does that can be expressed without a
//! browser: the contact form lifecycle, its field rules, the staggered reveal
//! animation and the page configuration. DOM access goes through the view
//! traits defined here; `folio-web` implements them on top of `web-sys`.
//!
//! ## Module Structure
//! - `config`: typed page configuration with defaults
//! - `error`: configuration and submission errors
//! - `validation`: contact field rules and error messages
//! - `submission`: submission payload and the backend seam
//! - `form`: the form controller state machine
//! - `reveal`: scroll-triggered reveal animator
//! - `timer`: sleep abstraction for the simulated delays

#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod form;
pub mod reveal;
pub mod submission;
pub mod timer;
pub mod validation;

pub use config::{FormConfig, PageConfig, RevealConfig};
pub use error::{ConfigError, SubmissionError};
pub use form::{FormController, FormState, FormView, SubmitOutcome};
pub use reveal::{RevealAnimator, RevealOutcome, Revealable, VisibilityEvent};
pub use submission::{ContactFields, ContactSubmission, SimulatedSubmitter, Submitter};
pub use timer::Sleeper;
pub use validation::{
    Field, FieldError, ValidationReport, is_js_whitespace, text_length, trim_js, validate,
    validate_email,
};
