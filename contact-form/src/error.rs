//! Error types

use crate::field::FormatKind;

/// A field value that failed one of its rules.
///
/// These are expected, user-correctable outcomes. The rendered text is what
/// the form shows next to the field.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// A required field was blank after trimming.
    #[error("{label} is required")]
    MissingRequiredField { label: &'static str },

    /// The value has fewer characters than the field's minimum.
    #[error("{label} must be at least {min} characters")]
    TooShort { label: &'static str, min: usize },

    /// The value does not have the field's structural format.
    #[error("Please enter a valid {kind}")]
    InvalidFormat { kind: FormatKind },
}

/// Errors raised at the boundary where external input names a field.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    /// The identifier is not one of the five contact form fields.
    #[error("Unknown form field '{0}'")]
    UnknownField(String),
}
