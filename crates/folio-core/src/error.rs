//! Error types for page logic
//!
//! Field validation failures are not errors in this sense: they are
//! displayed next to the form and live in [`crate::validation::FieldError`].

/// Errors raised while loading or checking a [`crate::PageConfig`]
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// The config document is not valid JSON for the schema
    #[error("invalid page config: {0}")]
    Parse(String),

    /// Intersection threshold outside `[0, 1]`
    #[error("reveal threshold must be within [0, 1], got {0}")]
    ThresholdOutOfRange(f64),

    /// No reveal selectors configured
    #[error("reveal selector list must not be empty")]
    NoSelectors,

    /// A reveal selector is empty or whitespace
    #[error("reveal selector at position {0} is blank")]
    BlankSelector(usize),

    /// Log level is not one of trace, debug, info, warn, error
    #[error("unknown log level: {0}")]
    UnknownLogLevel(String),
}

/// Errors a [`crate::Submitter`] may report
///
/// The form controller never shows these to the user; every variant
/// collapses into the same generic failure notice.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmissionError {
    /// The backend refused the submission
    #[error("submission rejected: {0}")]
    Rejected(String),

    /// The payload could not be encoded
    #[error("failed to encode submission: {0}")]
    Encoding(String),

    /// The request never completed
    #[error("submission transport failed: {0}")]
    Transport(String),
}
