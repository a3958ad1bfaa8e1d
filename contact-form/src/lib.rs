//! Contact form validation.
//!
//! The core is [`FormValidator::validate_all`], a pure function from a
//! [`FormSnapshot`] to a [`ValidationResult`]. Around it sits a thin display
//! layer: per-field error state, a success banner with a timed hide, and
//! [`FormEvent`]s for whatever renders the form.
//!
//! # Example
//!
//! ```
//! use contact_form::{FieldId, FormValidator};
//!
//! let mut form = FormValidator::new();
//! assert_eq!(
//!     form.validate_field(FieldId::Name, "A").as_deref(),
//!     Some("Name must be at least 2 characters"),
//! );
//! assert!(form.field(FieldId::Name).shows_error());
//! ```

pub mod banner;
pub mod config;
pub mod error;
pub mod event;
pub mod field;
pub mod result;
pub mod runtime;
pub mod snapshot;
pub mod state;
pub mod validatable;
pub mod validator;

pub use banner::{BannerTimerPolicy, DEFAULT_BANNER_DURATION, SuccessBanner};
pub use config::FormConfig;
pub use error::{FormError, ValidationError};
pub use event::{FormEvent, RecordingRenderer, Renderer};
pub use field::{FIELD_SPECS, FieldId, FieldSpec, FormatKind};
pub use result::{FieldError, ValidationResult};
pub use runtime::{FormInput, FormRuntime};
pub use snapshot::FormSnapshot;
pub use state::FieldState;
pub use validatable::Validatable;
pub use validator::FormValidator;
