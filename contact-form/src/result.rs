use std::collections::BTreeMap;

use crate::error::ValidationError;
use crate::field::FieldId;

/// Information about a single field that failed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Field that failed.
    pub field: FieldId,
    /// The rule that failed first.
    pub error: ValidationError,
}

impl FieldError {
    /// The message shown next to the field.
    pub fn message(&self) -> String {
        self.error.to_string()
    }
}

/// Result of validating the whole form.
///
/// Holds exactly one entry per known field; `None` means the field is valid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    entries: BTreeMap<FieldId, Option<FieldError>>,
}

impl ValidationResult {
    /// Build a result from per-field outcomes. Fields not listed count as valid.
    pub(crate) fn from_outcomes(
        outcomes: impl IntoIterator<Item = (FieldId, Option<ValidationError>)>,
    ) -> Self {
        let mut entries: BTreeMap<FieldId, Option<FieldError>> =
            FieldId::ALL.into_iter().map(|id| (id, None)).collect();
        for (field, error) in outcomes {
            entries.insert(field, error.map(|error| FieldError { field, error }));
        }
        Self { entries }
    }

    /// Check if all fields passed validation.
    pub fn is_valid(&self) -> bool {
        self.entries.values().all(Option::is_none)
    }

    /// Check if any field failed validation.
    pub fn is_invalid(&self) -> bool {
        !self.is_valid()
    }

    /// Get the error for one field (if any).
    pub fn error(&self, field: FieldId) -> Option<&FieldError> {
        self.entries.get(&field).and_then(Option::as_ref)
    }

    /// Get the message for one field (if any).
    pub fn message(&self, field: FieldId) -> Option<String> {
        self.error(field).map(FieldError::message)
    }

    /// Iterate over every entry, valid or not, in field order.
    pub fn entries(&self) -> impl Iterator<Item = (FieldId, Option<&FieldError>)> {
        self.entries.iter().map(|(id, e)| (*id, e.as_ref()))
    }

    /// Iterate over the failing fields in field order.
    pub fn errors(&self) -> impl Iterator<Item = &FieldError> {
        self.entries.values().filter_map(Option::as_ref)
    }

    /// Number of failing fields.
    pub fn error_count(&self) -> usize {
        self.errors().count()
    }

    /// Get the first validation error (if any).
    pub fn first_error(&self) -> Option<&FieldError> {
        self.errors().next()
    }

    /// Get the first invalid field (for focusing).
    pub fn first_invalid_field(&self) -> Option<FieldId> {
        self.first_error().map(|e| e.field)
    }
}
