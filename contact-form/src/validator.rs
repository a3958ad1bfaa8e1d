//! The contact form validator.

use std::collections::BTreeMap;

use log::{debug, info};
use tokio::time::Instant;

use crate::banner::SuccessBanner;
use crate::config::FormConfig;
use crate::error::ValidationError;
use crate::event::FormEvent;
use crate::field::{FIELD_SPECS, FieldId, FieldSpec};
use crate::result::ValidationResult;
use crate::snapshot::FormSnapshot;
use crate::state::FieldState;
use crate::validatable::Validatable;

/// Owns the contact form's field states and success banner.
///
/// All display changes go through [`validate_field`](Self::validate_field),
/// [`submit`](Self::submit) and [`tick`](Self::tick); each change is queued as
/// a [`FormEvent`] for the renderer to pick up with
/// [`take_events`](Self::take_events).
///
/// # Example
///
/// ```
/// use contact_form::{FieldId, FormSnapshot, FormValidator};
///
/// let mut form = FormValidator::new();
/// let snapshot = FormSnapshot::new()
///     .with(FieldId::Name, "Alice")
///     .with(FieldId::Email, "alice@example.com")
///     .with(FieldId::Subject, "Hello")
///     .with(FieldId::Message, "Just saying hello!");
///
/// let result = form.submit(snapshot);
/// assert!(result.is_valid());
/// assert!(form.is_banner_visible());
/// ```
#[derive(Debug)]
pub struct FormValidator {
    fields: BTreeMap<FieldId, FieldState>,
    banner: SuccessBanner,
    events: Vec<FormEvent>,
}

impl FormValidator {
    /// Create a validator with the default configuration.
    pub fn new() -> Self {
        Self::with_config(FormConfig::default())
    }

    /// Create a validator with the given configuration.
    pub fn with_config(config: FormConfig) -> Self {
        Self {
            fields: FieldId::ALL
                .into_iter()
                .map(|id| (id, FieldState::new(id)))
                .collect(),
            banner: SuccessBanner::new(config.banner_duration, config.banner_timer),
            events: Vec::new(),
        }
    }

    // -------------------------------------------------------------------------
    // Pure validation
    // -------------------------------------------------------------------------

    /// Validate every field of a snapshot. No display state is touched.
    pub fn validate_all(snapshot: &FormSnapshot) -> ValidationResult {
        ValidationResult::from_outcomes(
            FIELD_SPECS
                .iter()
                .map(|spec| (spec.id, spec.check(snapshot.get(spec.id)).err())),
        )
    }

    /// Validate a single value against one field's rules.
    ///
    /// The value is trimmed first, as the form would.
    pub fn validate_value(field: FieldId, value: &str) -> Option<ValidationError> {
        FieldSpec::of(field).check(value.trim()).err()
    }

    // -------------------------------------------------------------------------
    // Event handlers
    // -------------------------------------------------------------------------

    /// Blur handler: validate one field and update only its display.
    ///
    /// The field's previous error is cleared before evaluating, so a stale
    /// message never survives. Returns the new error message, if any.
    pub fn validate_field(&mut self, field: FieldId, value: &str) -> Option<String> {
        self.set_value(field, value);

        let state = self.field_state_mut(field);
        let previous = state.error().map(str::to_string);
        state.clear_error();

        let outcome = FieldSpec::of(field).check(state.validation_value()).err();
        let message = outcome.map(|e| e.to_string());
        if let Some(msg) = &message {
            state.set_error(msg.clone());
        }

        debug!("Validated {}: {:?}", field, message);

        // Only report a change the renderer can see.
        match (&previous, &message) {
            (Some(_), None) => self.events.push(FormEvent::ErrorCleared { field }),
            (prev, Some(msg)) if prev.as_ref() != Some(msg) => {
                self.events.push(FormEvent::ErrorShown {
                    field,
                    message: msg.clone(),
                });
            }
            _ => {}
        }

        message
    }

    /// Submit handler using the current time.
    pub fn submit(&mut self, snapshot: FormSnapshot) -> ValidationResult {
        self.submit_at(snapshot, Instant::now())
    }

    /// Submit the values currently held by the field states.
    pub fn submit_current(&mut self) -> ValidationResult {
        let snapshot = self.snapshot();
        self.submit(snapshot)
    }

    /// Submit handler.
    ///
    /// Hides the banner and clears every error, then validates all fields.
    /// On failure each failing field shows its message. On success every
    /// value is reset and the banner is shown until `now + banner duration`.
    pub fn submit_at(&mut self, snapshot: FormSnapshot, now: Instant) -> ValidationResult {
        self.clear_errors();

        for state in self.fields.values_mut() {
            state.set_value(snapshot.get(state.id()));
        }

        let result = Self::validate_all(&snapshot);

        if result.is_invalid() {
            info!("Submit rejected: {} invalid field(s)", result.error_count());
            for error in result.errors() {
                let message = error.message();
                self.field_state_mut(error.field).set_error(message.clone());
                self.events.push(FormEvent::ErrorShown {
                    field: error.field,
                    message,
                });
            }
            return result;
        }

        info!("Submit accepted");
        for state in self.fields.values_mut() {
            state.clear();
        }
        self.events.push(FormEvent::FieldsReset);

        if self.banner.show(now) {
            self.events.push(FormEvent::BannerShown);
        }

        result
    }

    /// Fire banner hides that are due at `now`.
    pub fn tick(&mut self, now: Instant) {
        if self.banner.fire_due(now) {
            info!("Success banner hidden");
            self.events.push(FormEvent::BannerHidden);
        }
    }

    /// Clear every displayed error and hide the banner.
    fn clear_errors(&mut self) {
        for state in self.fields.values_mut() {
            if state.clear_error() {
                self.events.push(FormEvent::ErrorCleared { field: state.field_id() });
            }
        }
        if self.banner.hide() {
            self.events.push(FormEvent::BannerHidden);
        }
    }

    // -------------------------------------------------------------------------
    // State access
    // -------------------------------------------------------------------------

    /// Record a new value for a field without validating it.
    pub fn set_value(&mut self, field: FieldId, value: &str) {
        self.field_state_mut(field).set_value(value);
    }

    /// Get a field's display state.
    pub fn field(&self, field: FieldId) -> &FieldState {
        // Every FieldId is inserted in with_config and never removed.
        &self.fields[&field]
    }

    /// Iterate over all field states in field order.
    pub fn fields(&self) -> impl Iterator<Item = &FieldState> {
        self.fields.values()
    }

    /// Snapshot of the values currently held.
    pub fn snapshot(&self) -> FormSnapshot {
        self.fields
            .values()
            .map(|state| (state.id(), state.value()))
            .collect()
    }

    /// Whether the success banner is shown.
    pub fn is_banner_visible(&self) -> bool {
        self.banner.is_visible()
    }

    /// Earliest pending banner hide.
    pub fn next_banner_deadline(&self) -> Option<Instant> {
        self.banner.next_deadline()
    }

    /// Drain the events queued since the last call.
    pub fn take_events(&mut self) -> Vec<FormEvent> {
        std::mem::take(&mut self.events)
    }

    fn field_state_mut(&mut self, field: FieldId) -> &mut FieldState {
        self.fields
            .entry(field)
            .or_insert_with(|| FieldState::new(field))
    }
}

impl Default for FormValidator {
    fn default() -> Self {
        Self::new()
    }
}
