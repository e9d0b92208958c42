//! Registration form controller.
//!
//! Tracks the `name`, `email` and `password` fields of a sign-up form,
//! revalidates every field on each edit, and turns a valid form into a
//! sanitized [`SubmissionRecord`](submit::SubmissionRecord).
//!
//! # Example
//!
//! ```
//! use regform::prelude::*;
//!
//! let mut form = RegistrationForm::new();
//! form.on_field_change("name", "Jo");
//! form.on_field_change("email", "jo@example.com");
//! assert!(!form.is_valid());
//!
//! form.on_field_change("password", "abc123!");
//! assert!(form.is_valid());
//!
//! let record = form.on_submit_requested().cloned().unwrap();
//! assert_eq!(record.name(), "Jo");
//! assert!(form.show_result());
//! ```

pub mod error;
pub mod field;
pub mod form;
pub mod sanitize;
pub mod submit;
pub mod validation;

pub use error::FormError;
pub use form::RegistrationForm;

pub mod prelude {
    pub use crate::error::FormError;
    pub use crate::field::{Field, FieldSet};
    pub use crate::form::RegistrationForm;
    pub use crate::sanitize::sanitize;
    pub use crate::submit::{ResultView, SubmissionRecord, submit};
    pub use crate::validation::{
        ErrorKind, ErrorMap, FieldError, PasswordPolicy, ValidationResult, Validator,
    };
}
