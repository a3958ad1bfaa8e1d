//! Single-task event loop driving a [`FormValidator`].
//!
//! Inputs arrive on a channel. Banner hides are slept on in the same
//! `select!`, so validation and timers never run concurrently.

use log::{debug, info};
use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;
use tokio::time::{Instant, sleep_until};

use crate::config::FormConfig;
use crate::event::Renderer;
use crate::field::FieldId;
use crate::snapshot::FormSnapshot;
use crate::validator::FormValidator;

/// An input delivered by the form surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "input", rename_all = "snake_case")]
pub enum FormInput {
    /// The user changed a field's value.
    Edit { field: FieldId, value: String },
    /// A field lost focus holding `value`.
    Blur { field: FieldId, value: String },
    /// The form was submitted with these values.
    Submit { values: FormSnapshot },
    /// The form was submitted with the values recorded by earlier edits.
    SubmitCurrent,
}

/// Event loop owning the validator.
pub struct FormRuntime {
    validator: FormValidator,
}

impl FormRuntime {
    /// Create a runtime with a fresh validator.
    pub fn new(config: FormConfig) -> Self {
        Self {
            validator: FormValidator::with_config(config),
        }
    }

    /// The validator driven by this runtime.
    pub fn validator(&self) -> &FormValidator {
        &self.validator
    }

    /// Run until the input channel closes.
    ///
    /// Hides still pending when the channel closes are dropped.
    pub async fn run<R: Renderer>(
        &mut self,
        mut inputs: mpsc::Receiver<FormInput>,
        renderer: &mut R,
    ) {
        info!("Form runtime started");

        loop {
            let deadline = self.validator.next_banner_deadline();

            tokio::select! {
                input = inputs.recv() => {
                    let Some(input) = input else {
                        break;
                    };
                    self.handle(input);
                }
                _ = sleep_until_optional(deadline) => {
                    self.validator.tick(Instant::now());
                }
            }

            for event in self.validator.take_events() {
                renderer.render(&event);
            }
        }

        info!("Form runtime stopped");
    }

    /// Apply one input to the validator.
    pub fn handle(&mut self, input: FormInput) {
        debug!("Input: {:?}", input);
        match input {
            FormInput::Edit { field, value } => self.validator.set_value(field, &value),
            FormInput::Blur { field, value } => {
                self.validator.validate_field(field, &value);
            }
            FormInput::Submit { values } => {
                self.validator.submit(values);
            }
            FormInput::SubmitCurrent => {
                self.validator.submit_current();
            }
        }
    }
}

impl Default for FormRuntime {
    fn default() -> Self {
        Self::new(FormConfig::default())
    }
}

/// Sleep until a deadline, or wait forever if None.
async fn sleep_until_optional(deadline: Option<Instant>) {
    match deadline {
        Some(d) => sleep_until(d).await,
        None => std::future::pending::<()>().await,
    }
}
