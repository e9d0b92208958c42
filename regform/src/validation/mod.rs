//! Form validation.
//!
//! Rules are declared per field with a fluent builder and evaluated against
//! a [`FieldSet`](crate::field::FieldSet) snapshot. Every field is checked on
//! every pass; within a field, the first failing rule supplies the message.
//!
//! # Example
//!
//! ```
//! use regform::field::{Field, FieldSet};
//! use regform::validation::Validator;
//!
//! let validator = Validator::new()
//!     .field(Field::Name)
//!         .required("Name is required")
//!         .min_length(2, "Name must be at least 2 characters")
//!     .field(Field::Email)
//!         .required("Email is required")
//!         .email("Please enter a valid email")
//!     .build();
//!
//! let result = validator.validate(&FieldSet::new("J", "jo@example.com", ""));
//! assert_eq!(result.error(Field::Name), Some("Name must be at least 2 characters"));
//! assert!(result.error(Field::Email).is_none());
//! ```

mod policy;
mod result;
pub mod rules;
mod validator;

pub use policy::PasswordPolicy;
pub use result::{ErrorKind, ErrorMap, FieldError, ValidationResult};
pub use validator::{FieldBuilder, Validator};
