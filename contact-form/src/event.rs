//! Output events consumed by whatever renders the form.

use serde::{Deserialize, Serialize};

use crate::field::FieldId;

/// A change the renderer must apply to the form's display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum FormEvent {
    /// Show `message` under the field and turn on its error styling.
    ErrorShown { field: FieldId, message: String },
    /// Remove the field's message and error styling.
    ErrorCleared { field: FieldId },
    /// Empty every field's value.
    FieldsReset,
    /// Show the success banner.
    BannerShown,
    /// Hide the success banner.
    BannerHidden,
}

/// The rendering collaborator.
pub trait Renderer {
    /// Apply one event to the display.
    fn render(&mut self, event: &FormEvent);
}

impl<F: FnMut(&FormEvent)> Renderer for F {
    fn render(&mut self, event: &FormEvent) {
        self(event)
    }
}

/// Renderer that just keeps every event it receives.
#[derive(Debug, Clone, Default)]
pub struct RecordingRenderer {
    events: Vec<FormEvent>,
}

impl RecordingRenderer {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Events received so far.
    pub fn events(&self) -> &[FormEvent] {
        &self.events
    }

    /// Drain the recorded events.
    pub fn take(&mut self) -> Vec<FormEvent> {
        std::mem::take(&mut self.events)
    }
}

impl Renderer for RecordingRenderer {
    fn render(&mut self, event: &FormEvent) {
        self.events.push(event.clone());
    }
}
