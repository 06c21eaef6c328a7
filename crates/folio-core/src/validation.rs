//! Contact form field rules
//!
//! Every field is checked, even when an earlier one already failed. Within a
//! field the rules run in order and the first failure is the one reported.
//!
//! Lengths are counted in UTF-16 code units, the unit behind `String.length`
//! in the browser, so the limits agree with what the page itself reports.
//! Trimming and the email pattern use the browser's whitespace set for the
//! same reason.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::submission::ContactFields;

/// Minimum trimmed name length
pub const NAME_MIN_LEN: usize = 2;
/// Maximum trimmed name length
pub const NAME_MAX_LEN: usize = 100;
/// Maximum trimmed email length
pub const EMAIL_MAX_LEN: usize = 255;
/// Minimum trimmed message length
pub const MESSAGE_MIN_LEN: usize = 10;
/// Maximum trimmed message length
pub const MESSAGE_MAX_LEN: usize = 1000;

/// Characters the browser treats as whitespace in `trim()` and regex `\s`
const JS_WHITESPACE_CLASS: &str =
    r"\t\n\x0B\x0C\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}";

static EMAIL_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| {
    let part = format!("[^{JS_WHITESPACE_CLASS}@]+");
    Regex::new(&format!(r"^{part}@{part}\.{part}$")).ok()
});

/// Whether the browser counts `c` as whitespace
///
/// Differs from [`char::is_whitespace`]: U+FEFF is included, U+0085 and
/// other non-`Zs` controls are not.
#[must_use]
pub const fn is_js_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{0B}'
            | '\u{0C}'
            | '\r'
            | ' '
            | '\u{A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

/// `text` without leading and trailing browser whitespace
#[must_use]
pub fn trim_js(text: &str) -> &str {
    text.trim_matches(is_js_whitespace)
}

/// A validated contact form field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    /// All fields in form order
    pub const ALL: [Self; 3] = [Self::Name, Self::Email, Self::Message];

    /// DOM id of the input element
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Message => "message",
        }
    }

    /// DOM id of the element holding this field's error text
    #[must_use]
    pub const fn error_id(self) -> &'static str {
        match self {
            Self::Name => "nameError",
            Self::Email => "emailError",
            Self::Message => "messageError",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// A failed field rule; `Display` is the message shown next to the field
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("Name is required")]
    NameRequired,
    #[error("Name must be at least 2 characters")]
    NameTooShort,
    #[error("Name must be less than 100 characters")]
    NameTooLong,
    #[error("Email is required")]
    EmailRequired,
    #[error("Please enter a valid email address")]
    EmailInvalid,
    #[error("Email must be less than 255 characters")]
    EmailTooLong,
    #[error("Message is required")]
    MessageRequired,
    #[error("Message must be at least 10 characters")]
    MessageTooShort,
    #[error("Message must be less than 1000 characters")]
    MessageTooLong,
}

impl FieldError {
    /// The field this error belongs to
    #[must_use]
    pub const fn field(self) -> Field {
        match self {
            Self::NameRequired | Self::NameTooShort | Self::NameTooLong => Field::Name,
            Self::EmailRequired | Self::EmailInvalid | Self::EmailTooLong => Field::Email,
            Self::MessageRequired | Self::MessageTooShort | Self::MessageTooLong => {
                Field::Message
            }
        }
    }
}

/// Outcome of validating a whole form: at most one error per field
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    errors: Vec<FieldError>,
}

impl ValidationReport {
    /// True when no field failed
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Failed rules in form order
    #[must_use]
    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// Number of failing fields
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Same as [`Self::is_valid`]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// The error reported for `field`, if any
    #[must_use]
    pub fn error_for(&self, field: Field) -> Option<FieldError> {
        self.errors.iter().copied().find(|e| e.field() == field)
    }
}

/// Length of `text` as the browser counts it
#[must_use]
pub fn text_length(text: &str) -> usize {
    text.encode_utf16().count()
}

/// Checks `email` against the `local@domain.tld` shape
///
/// # Examples
///
/// ```
/// use folio_core::validate_email;
///
/// assert!(validate_email("a@b.co"));
/// assert!(!validate_email("a@b"));
/// assert!(!validate_email("a b@c.com"));
/// ```
#[must_use]
pub fn validate_email(email: &str) -> bool {
    EMAIL_PATTERN
        .as_ref()
        .is_some_and(|pattern| pattern.is_match(email))
}

fn check_name(name: &str) -> Result<(), FieldError> {
    let len = text_length(name);
    if name.is_empty() {
        Err(FieldError::NameRequired)
    } else if len < NAME_MIN_LEN {
        Err(FieldError::NameTooShort)
    } else if len > NAME_MAX_LEN {
        Err(FieldError::NameTooLong)
    } else {
        Ok(())
    }
}

fn check_email(email: &str) -> Result<(), FieldError> {
    if email.is_empty() {
        Err(FieldError::EmailRequired)
    } else if !validate_email(email) {
        Err(FieldError::EmailInvalid)
    } else if text_length(email) > EMAIL_MAX_LEN {
        Err(FieldError::EmailTooLong)
    } else {
        Ok(())
    }
}

fn check_message(message: &str) -> Result<(), FieldError> {
    let len = text_length(message);
    if message.is_empty() {
        Err(FieldError::MessageRequired)
    } else if len < MESSAGE_MIN_LEN {
        Err(FieldError::MessageTooShort)
    } else if len > MESSAGE_MAX_LEN {
        Err(FieldError::MessageTooLong)
    } else {
        Ok(())
    }
}

/// Validates the trimmed values of `fields`
///
/// All three fields are checked; the report carries the first failure of
/// each field that failed.
#[must_use]
pub fn validate(fields: &ContactFields) -> ValidationReport {
    let errors = [
        check_name(trim_js(&fields.name)),
        check_email(trim_js(&fields.email)),
        check_message(trim_js(&fields.message)),
    ]
    .into_iter()
    .filter_map(Result::err)
    .collect();

    ValidationReport { errors }
}
