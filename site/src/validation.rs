//! Required-field, email and phone validation for page forms.

use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));
static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[0-9\s\-()]+$").expect("valid phone regex"));

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

pub fn is_valid_phone(value: &str) -> bool {
    PHONE_RE.is_match(value)
}

/// Field kinds that get a format check on top of the required check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Email,
    Tel,
    Other,
}

impl FieldKind {
    /// Maps an `<input type>` value; textareas and selects are [`FieldKind::Other`].
    pub fn from_input_type(ty: &str) -> Self {
        match ty.to_ascii_lowercase().as_str() {
            "email" => FieldKind::Email,
            "tel" => FieldKind::Tel,
            _ => FieldKind::Other,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    Required,
    InvalidEmail,
    InvalidPhone,
}

impl FieldError {
    pub fn message(&self) -> &'static str {
        match self {
            FieldError::Required => "This field is required",
            FieldError::InvalidEmail => "Please enter a valid email address",
            FieldError::InvalidPhone => "Please enter a valid phone number",
        }
    }
}

/// Blank wins over a format error, so a field never carries two messages.
pub fn validate_field(kind: FieldKind, value: &str) -> Option<FieldError> {
    if value.trim().is_empty() {
        return Some(FieldError::Required);
    }
    match kind {
        FieldKind::Email if !is_valid_email(value) => Some(FieldError::InvalidEmail),
        FieldKind::Tel if !is_valid_phone(value) => Some(FieldError::InvalidPhone),
        _ => None,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormValidation {
    /// One entry per required field, in document order.
    pub fields: Vec<Option<FieldError>>,
}

impl FormValidation {
    pub fn is_valid(&self) -> bool {
        self.fields.iter().all(Option::is_none)
    }

    pub fn error_count(&self) -> usize {
        self.fields.iter().filter(|f| f.is_some()).count()
    }
}

pub fn validate_form<'a, I>(fields: I) -> FormValidation
where
    I: IntoIterator<Item = (FieldKind, &'a str)>,
{
    FormValidation {
        fields: fields
            .into_iter()
            .map(|(kind, value)| validate_field(kind, value))
            .collect(),
    }
}
