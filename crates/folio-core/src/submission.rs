//! Contact submission payload and the backend seam
//!
//! [`Submitter`] is the one place a real backend call plugs in. The page
//! ships with [`SimulatedSubmitter`], which waits for a fixed latency and
//! always succeeds.

use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;
use tracing::info;

use crate::error::SubmissionError;
use crate::timer::Sleeper;
use crate::validation::{Field, trim_js};

/// Raw, untrimmed form values as read from the inputs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactFields {
    /// Creates a field set from raw input values
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    /// Raw value of `field`
    #[must_use]
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    /// Builds the trimmed submission
    #[must_use]
    pub fn to_submission(&self) -> ContactSubmission {
        ContactSubmission {
            name: trim_js(&self.name).to_string(),
            email: trim_js(&self.email).to_string(),
            message: trim_js(&self.message).to_string(),
        }
    }
}

/// A trimmed contact submission; immutable once built
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactSubmission {
    name: String,
    email: String,
    message: String,
}

impl ContactSubmission {
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// JSON body a backend would receive
    ///
    /// # Errors
    ///
    /// Returns `SubmissionError::Encoding` if serialization fails
    pub fn to_json(&self) -> Result<String, SubmissionError> {
        serde_json::to_string(self).map_err(|e| SubmissionError::Encoding(e.to_string()))
    }
}

/// Delivers a contact submission somewhere
#[async_trait(?Send)]
pub trait Submitter {
    /// Resolves `Ok` once the submission was accepted
    ///
    /// # Errors
    ///
    /// Any failure to deliver; callers do not distinguish between variants
    async fn submit(&self, submission: &ContactSubmission) -> Result<(), SubmissionError>;
}

/// Stand-in backend: waits for `latency`, logs the payload, succeeds
#[derive(Debug, Clone)]
pub struct SimulatedSubmitter<S> {
    sleeper: S,
    latency: Duration,
}

impl<S: Sleeper> SimulatedSubmitter<S> {
    pub fn new(sleeper: S, latency: Duration) -> Self {
        Self { sleeper, latency }
    }

    #[must_use]
    pub const fn latency(&self) -> Duration {
        self.latency
    }
}

#[async_trait(?Send)]
impl<S: Sleeper> Submitter for SimulatedSubmitter<S> {
    async fn submit(&self, submission: &ContactSubmission) -> Result<(), SubmissionError> {
        self.sleeper.sleep(self.latency).await;
        let payload = submission.to_json()?;
        info!(%payload, "contact form submitted");
        Ok(())
    }
}
