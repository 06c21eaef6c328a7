//! Page configuration
//!
//! Every value has a default matching the shipped page, so an absent or
//! partial config document is fine. Loaded configs are always run through
//! [`PageConfig::validate`].

use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Submit button content while a submission is pending
pub const LOADING_HTML: &str = r#"<span style="animation: spin 1s linear infinite; display: inline-block;">⏳</span> Sending..."#;

/// Notice shown when a submission fails, whatever the cause
pub const FAILURE_NOTICE: &str = "Something went wrong. Please try again.";

/// Element categories that get the reveal animation
pub const REVEAL_SELECTORS: [&str; 4] =
    [".project-card", ".skill-card", ".tech-card", ".section-header"];

/// Top-level configuration for the page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub form: FormConfig,
    pub reveal: RevealConfig,
    /// One of trace, debug, info, warn, error
    pub log_level: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            form: FormConfig::default(),
            reveal: RevealConfig::default(),
            log_level: "info".to_string(),
        }
    }
}

impl PageConfig {
    /// Parses and validates a JSON config document
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` for malformed JSON, or whatever
    /// [`Self::validate`] rejects
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Checks value ranges that the type system does not cover
    ///
    /// # Errors
    ///
    /// Returns the first problem found
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.reveal.validate()?;
        self.level().map(|_| ())
    }

    /// Parsed `log_level`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::UnknownLogLevel` for anything `tracing` does not accept
    pub fn level(&self) -> Result<tracing::Level, ConfigError> {
        tracing::Level::from_str(self.log_level.trim())
            .map_err(|_| ConfigError::UnknownLogLevel(self.log_level.clone()))
    }
}

/// Contact form timings and copy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    /// Latency of the simulated submission
    pub submission_delay_ms: u64,
    /// Wait between the success swap and the form reset
    pub reset_delay_ms: u64,
    pub failure_notice: String,
    pub loading_html: String,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            submission_delay_ms: 1500,
            reset_delay_ms: 500,
            failure_notice: FAILURE_NOTICE.to_string(),
            loading_html: LOADING_HTML.to_string(),
        }
    }
}

impl FormConfig {
    #[must_use]
    pub const fn submission_delay(&self) -> Duration {
        Duration::from_millis(self.submission_delay_ms)
    }

    #[must_use]
    pub const fn reset_delay(&self) -> Duration {
        Duration::from_millis(self.reset_delay_ms)
    }
}

/// Reveal animation parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    /// Element categories to animate, matched in document order
    pub selectors: Vec<String>,
    /// Extra transition delay per element index
    pub stagger_ms: u64,
    pub duration_ms: u64,
    /// Initial downward offset
    pub offset_px: u32,
    /// Visible fraction that counts as "in view"
    pub threshold: f64,
    pub root_margin: String,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            selectors: REVEAL_SELECTORS.iter().map(ToString::to_string).collect(),
            stagger_ms: 100,
            duration_ms: 600,
            offset_px: 20,
            threshold: 0.1,
            root_margin: "0px 0px -50px 0px".to_string(),
        }
    }
}

impl RevealConfig {
    /// All selectors joined into one query, preserving document order
    #[must_use]
    pub fn selector(&self) -> String {
        self.selectors.join(", ")
    }

    /// # Errors
    ///
    /// Rejects an out-of-range threshold and empty selectors
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.threshold) {
            return Err(ConfigError::ThresholdOutOfRange(self.threshold));
        }
        if self.selectors.is_empty() {
            return Err(ConfigError::NoSelectors);
        }
        self.selectors
            .iter()
            .position(|s| s.trim().is_empty())
            .map_or(Ok(()), |i| Err(ConfigError::BlankSelector(i)))
    }
}
