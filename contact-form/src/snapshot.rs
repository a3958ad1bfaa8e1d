//! Point-in-time copy of the form's field values.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::field::FieldId;

/// Trimmed field values read at validation time.
///
/// Values are trimmed on the way in; fields never set read as `""`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "BTreeMap<FieldId, String>", into = "BTreeMap<FieldId, String>")]
pub struct FormSnapshot {
    values: BTreeMap<FieldId, String>,
}

impl FormSnapshot {
    /// Create an empty snapshot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter.
    pub fn with(mut self, field: FieldId, value: impl AsRef<str>) -> Self {
        self.set(field, value);
        self
    }

    /// Set a field's value, trimming surrounding whitespace.
    pub fn set(&mut self, field: FieldId, value: impl AsRef<str>) {
        self.values.insert(field, value.as_ref().trim().to_string());
    }

    /// Get a field's trimmed value.
    pub fn get(&self, field: FieldId) -> &str {
        self.values.get(&field).map(String::as_str).unwrap_or("")
    }
}

impl<S: AsRef<str>> FromIterator<(FieldId, S)> for FormSnapshot {
    fn from_iter<I: IntoIterator<Item = (FieldId, S)>>(iter: I) -> Self {
        let mut snapshot = Self::new();
        for (field, value) in iter {
            snapshot.set(field, value);
        }
        snapshot
    }
}

impl From<BTreeMap<FieldId, String>> for FormSnapshot {
    fn from(values: BTreeMap<FieldId, String>) -> Self {
        values.into_iter().collect()
    }
}

impl From<FormSnapshot> for BTreeMap<FieldId, String> {
    fn from(snapshot: FormSnapshot) -> Self {
        snapshot.values
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_values_are_trimmed() {
        let snapshot = FormSnapshot::new().with(FieldId::Name, "  Alice \n");
        assert_eq!(snapshot.get(FieldId::Name), "Alice");
    }

    #[test]
    fn test_unset_field_reads_empty() {
        assert_eq!(FormSnapshot::new().get(FieldId::Phone), "");
    }

    #[test]
    fn test_deserialize_trims() {
        let snapshot: FormSnapshot =
            serde_json::from_str(r#"{"name": " Al ", "subject": "Hi"}"#).unwrap();
        assert_eq!(snapshot.get(FieldId::Name), "Al");
        assert_eq!(snapshot.get(FieldId::Subject), "Hi");
        assert_eq!(snapshot.get(FieldId::Email), "");
    }
}
