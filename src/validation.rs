//! Client-side validation of contact form input
//!
//! Each field reports at most one message: the first rule it breaks, checked
//! in declaration order. "Required" means non-empty; surrounding whitespace
//! is not trimmed.
//!
//! Email and phone declare their pattern rule before the required rule, and
//! neither pattern accepts the empty string, so an empty email or phone is
//! reported with the pattern message. The generic e-mail shape rule skips
//! empty input.
//!
//! The full name field reports [`FULL_NAME_REQUIRED`], which reads the same
//! as the name field's message.
//!
//! The live phone filter ([`filter_phone_input`]) lets `+` through while the
//! submit-time phone rule accepts digits only, so a typed `+` is kept in the
//! input and then rejected on submit.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;
use std::fmt;

use crate::models::ContactRecord;

/// Generic e-mail shape: `local@label(.label)*`
static EMAIL_SHAPE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .expect("valid email shape regex")
});
/// Stricter `local@domain.tld` pattern
static EMAIL_FORMAT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("valid email regex")
});
static PHONE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]+$").expect("valid phone regex"));

pub const NAME_REQUIRED: &str = "Name is required";
pub const FULL_NAME_REQUIRED: &str = "Name is required";
pub const EMAIL_INVALID: &str = "Email is invalid";
pub const EMAIL_FORMAT: &str = "Email must be a valid format (example@example.com)";
pub const PHONE_NUMERIC: &str = "Phone must be numeric";

/// The four editable contact fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    FullName,
    Email,
    Phone,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::FullName, Field::Email, Field::Phone];

    /// Stable key of the field, as stored in the document
    pub fn key(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::FullName => "fullName",
            Field::Email => "email",
            Field::Phone => "phone",
        }
    }

    /// Placeholder shown in the empty input
    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::FullName => "Full Name",
            Field::Email => "Email",
            Field::Phone => "Phone",
        }
    }

    pub fn get<'a>(&self, record: &'a ContactRecord) -> &'a str {
        match self {
            Field::Name => &record.name,
            Field::FullName => &record.full_name,
            Field::Email => &record.email,
            Field::Phone => &record.phone,
        }
    }

    pub fn get_mut<'a>(&self, record: &'a mut ContactRecord) -> &'a mut String {
        match self {
            Field::Name => &mut record.name,
            Field::FullName => &mut record.full_name,
            Field::Email => &mut record.email,
            Field::Phone => &mut record.phone,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A broken rule, shown beneath its field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldError {
    pub field: Field,
    pub message: &'static str,
}

/// Current messages, keyed per field
pub type FieldErrors = BTreeMap<Field, FieldError>;

/// Check one field value against its rules
pub fn validate_field(field: Field, value: &str) -> Option<FieldError> {
    let message = match field {
        Field::Name if value.is_empty() => Some(NAME_REQUIRED),
        Field::FullName if value.is_empty() => Some(FULL_NAME_REQUIRED),
        Field::Email => {
            if !value.is_empty() && !EMAIL_SHAPE_RE.is_match(value) {
                Some(EMAIL_INVALID)
            } else if !EMAIL_FORMAT_RE.is_match(value) {
                Some(EMAIL_FORMAT)
            } else {
                None
            }
        }
        Field::Phone if !PHONE_RE.is_match(value) => Some(PHONE_NUMERIC),
        _ => None,
    };
    message.map(|message| FieldError { field, message })
}

/// Check a whole record; an empty map means the record may be written
pub fn validate(record: &ContactRecord) -> FieldErrors {
    Field::ALL
        .iter()
        .filter_map(|field| validate_field(*field, field.get(record)))
        .map(|error| (error.field, error))
        .collect()
}

/// Live phone input filter: keeps ASCII digits and `+`
pub fn filter_phone_input(input: &str) -> String {
    input
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect()
}
