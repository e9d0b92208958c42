//! Error types

use crate::field::Field;

/// Errors raised while addressing or configuring a form.
///
/// Validation findings are not errors in this sense. They are reported as
/// data through [`ValidationResult`](crate::validation::ValidationResult).
#[derive(Debug, thiserror::Error)]
pub enum FormError {
    /// The name does not refer to one of the form's fields.
    #[error("unknown field '{0}'")]
    UnknownField(String),

    /// A pattern rule was given a regex that does not compile.
    #[error("invalid pattern for field '{field}': {source}")]
    InvalidPattern {
        field: Field,
        #[source]
        source: regex::Error,
    },
}

impl FormError {
    /// Creates a new unknown field error.
    pub fn unknown_field(name: impl Into<String>) -> Self {
        Self::UnknownField(name.into())
    }
}
