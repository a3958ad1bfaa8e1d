use crate::field::FieldId;
use crate::validatable::Validatable;

/// Display state for one form field.
///
/// The "show error styling" signal is derived from the error slot, so the
/// two can never disagree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldState {
    /// Field this state belongs to
    id: FieldId,
    /// Current text value, as last supplied by the form
    value: String,
    /// Validation error message (if any)
    error: Option<String>,
}

impl FieldState {
    /// Create an empty field state
    pub fn new(id: FieldId) -> Self {
        Self {
            id,
            value: String::new(),
            error: None,
        }
    }

    /// Get the field identifier
    pub fn id(&self) -> FieldId {
        self.id
    }

    // -------------------------------------------------------------------------
    // Value
    // -------------------------------------------------------------------------

    /// Get the current value, trimmed
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Set the value. A displayed error stays until the next validation.
    pub fn set_value(&mut self, value: impl AsRef<str>) {
        self.value = value.as_ref().trim().to_string();
    }

    /// Clear the value
    pub fn clear(&mut self) {
        self.value.clear();
    }

    // -------------------------------------------------------------------------
    // Validation
    // -------------------------------------------------------------------------

    /// Check if the error styling should be shown.
    pub fn shows_error(&self) -> bool {
        self.error.is_some()
    }
}

impl Validatable for FieldState {
    fn validation_value(&self) -> &str {
        &self.value
    }

    fn set_error(&mut self, msg: impl Into<String>) {
        self.error = Some(msg.into());
    }

    fn clear_error(&mut self) -> bool {
        self.error.take().is_some()
    }

    fn has_error(&self) -> bool {
        self.error.is_some()
    }

    fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    fn field_id(&self) -> FieldId {
        self.id
    }
}
