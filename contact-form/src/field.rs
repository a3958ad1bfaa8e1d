//! Field identifiers and the static rule table for the contact form.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{FormError, ValidationError};

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Invalid email pattern"));

static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[1-9][0-9]{0,15}$").expect("Invalid phone pattern"));

/// Identifier of one of the five contact form fields.
///
/// Declaration order is the order fields are validated and reported in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldId {
    Name,
    Email,
    Phone,
    Subject,
    Message,
}

impl FieldId {
    /// Every known field, in declaration order.
    pub const ALL: [FieldId; 5] = [
        FieldId::Name,
        FieldId::Email,
        FieldId::Phone,
        FieldId::Subject,
        FieldId::Message,
    ];

    /// The identifier as used by the form markup.
    pub fn as_str(self) -> &'static str {
        match self {
            FieldId::Name => "name",
            FieldId::Email => "email",
            FieldId::Phone => "phone",
            FieldId::Subject => "subject",
            FieldId::Message => "message",
        }
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldId {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| FormError::UnknownField(s.to_string()))
    }
}

/// Structural format a non-empty value must match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormatKind {
    /// One `@`, then a `.` somewhere in the domain part. Not RFC validation.
    Email,
    /// Optional `+`, a non-zero digit, then up to 15 more digits.
    /// Spaces, hyphens and parentheses are ignored.
    Phone,
}

impl FormatKind {
    /// Check whether `value` (already trimmed) has this format.
    pub fn matches(self, value: &str) -> bool {
        match self {
            FormatKind::Email => EMAIL_RE.is_match(value),
            FormatKind::Phone => {
                let digits: String = value
                    .chars()
                    .filter(|c| !(c.is_whitespace() || matches!(c, '-' | '(' | ')')))
                    .collect();
                PHONE_RE.is_match(&digits)
            }
        }
    }
}

impl fmt::Display for FormatKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatKind::Email => f.write_str("email address"),
            FormatKind::Phone => f.write_str("phone number"),
        }
    }
}

/// Static description of one field's validation requirements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub id: FieldId,
    /// Human label used in error messages.
    pub label: &'static str,
    pub required: bool,
    /// Minimum length in UTF-16 code units, checked after `required`.
    pub min_length: Option<usize>,
    /// Format checked last, only for non-empty values.
    pub format: Option<FormatKind>,
}

/// The contact form's rule table, one entry per [`FieldId`] in declaration order.
pub static FIELD_SPECS: [FieldSpec; 5] = [
    FieldSpec {
        id: FieldId::Name,
        label: "Name",
        required: true,
        min_length: Some(2),
        format: None,
    },
    FieldSpec {
        id: FieldId::Email,
        label: "Email",
        required: true,
        min_length: None,
        format: Some(FormatKind::Email),
    },
    FieldSpec {
        id: FieldId::Phone,
        label: "Phone",
        required: false,
        min_length: None,
        format: Some(FormatKind::Phone),
    },
    FieldSpec {
        id: FieldId::Subject,
        label: "Subject",
        required: true,
        min_length: None,
        format: None,
    },
    FieldSpec {
        id: FieldId::Message,
        label: "Message",
        required: true,
        min_length: Some(10),
        format: None,
    },
];

impl FieldSpec {
    /// Look up the spec for a field.
    pub fn of(id: FieldId) -> &'static FieldSpec {
        // FIELD_SPECS is laid out in FieldId declaration order.
        &FIELD_SPECS[id as usize]
    }

    /// Run this field's rule chain against a trimmed value.
    ///
    /// Returns the first failing rule; later rules are not evaluated.
    /// Length is measured in UTF-16 code units, as a browser text field
    /// reports it, so a character outside the BMP counts twice.
    pub fn check(&self, value: &str) -> Result<(), ValidationError> {
        if value.is_empty() {
            if self.required {
                return Err(ValidationError::MissingRequiredField { label: self.label });
            }
            // Optional and blank: nothing else applies.
            return Ok(());
        }

        if let Some(min) = self.min_length
            && value.encode_utf16().count() < min
        {
            return Err(ValidationError::TooShort {
                label: self.label,
                min,
            });
        }

        if let Some(kind) = self.format
            && !kind.matches(value)
        {
            return Err(ValidationError::InvalidFormat { kind });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_matches_declaration_order() {
        for id in FieldId::ALL {
            assert_eq!(FieldSpec::of(id).id, id);
        }
    }

    #[test]
    fn test_parse_field_id() {
        assert_eq!("email".parse::<FieldId>().unwrap(), FieldId::Email);
        assert!(matches!(
            "zip".parse::<FieldId>(),
            Err(FormError::UnknownField(id)) if id == "zip"
        ));
    }

    #[test]
    fn test_email_format() {
        assert!(FormatKind::Email.matches("bob@example.com"));
        assert!(FormatKind::Email.matches("a.b@c.d"));
        assert!(!FormatKind::Email.matches("bob@example"));
        assert!(!FormatKind::Email.matches("bob@"));
        assert!(!FormatKind::Email.matches("bob.com"));
        assert!(!FormatKind::Email.matches("bob smith@example.com"));
        assert!(!FormatKind::Email.matches("bob@@example.com"));
    }

    #[test]
    fn test_phone_format() {
        assert!(FormatKind::Phone.matches("555-123-4567"));
        assert!(FormatKind::Phone.matches("(555) 123 4567"));
        assert!(FormatKind::Phone.matches("+44 20 7946 0958"));
        assert!(FormatKind::Phone.matches("7"));
        assert!(!FormatKind::Phone.matches("0123"));
        assert!(!FormatKind::Phone.matches("abc"));
        assert!(!FormatKind::Phone.matches("++15551234"));
        // 17 digits is one too many.
        assert!(!FormatKind::Phone.matches("12345678901234567"));
        assert!(FormatKind::Phone.matches("1234567890123456"));
    }

    #[test]
    fn test_phone_rejects_non_ascii_digits() {
        assert!(!FormatKind::Phone.matches("١٢٣"));
    }

    #[test]
    fn test_rule_chain_stops_at_first_failure() {
        let name = FieldSpec::of(FieldId::Name);
        assert!(matches!(
            name.check(""),
            Err(ValidationError::MissingRequiredField { label: "Name" })
        ));
        assert!(matches!(
            name.check("A"),
            Err(ValidationError::TooShort { min: 2, .. })
        ));
        assert!(name.check("Al").is_ok());
    }

    #[test]
    fn test_optional_field_skips_format_when_blank() {
        assert!(FieldSpec::of(FieldId::Phone).check("").is_ok());
    }

    #[test]
    fn test_min_length_counts_utf16_units() {
        let name = FieldSpec::of(FieldId::Name);
        // Two units, four bytes.
        assert!(name.check("Éé").is_ok());
        // One character, two units.
        assert!(name.check("😀").is_ok());

        let message = FieldSpec::of(FieldId::Message);
        assert!(message.check("😀😀😀😀😀").is_ok());
        assert!(matches!(
            message.check("😀😀😀😀a"),
            Err(ValidationError::TooShort { min: 10, .. })
        ));
    }
}
