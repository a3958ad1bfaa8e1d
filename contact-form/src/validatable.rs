//! Validatable trait for field state that can receive validation results.

use crate::field::FieldId;

/// Trait for fields that can be validated.
///
/// This trait provides a common interface for extracting values from fields
/// and setting/clearing validation errors.
pub trait Validatable {
    /// Extract the current value for validation.
    fn validation_value(&self) -> &str;

    /// Set a validation error on this field.
    fn set_error(&mut self, msg: impl Into<String>);

    /// Clear the validation error.
    ///
    /// Returns `true` if an error was actually removed.
    fn clear_error(&mut self) -> bool;

    /// Check if the field has a validation error.
    fn has_error(&self) -> bool;

    /// Get the current validation error message (if any).
    fn error(&self) -> Option<&str>;

    /// Get the field this state belongs to.
    fn field_id(&self) -> FieldId;
}
