use std::collections::BTreeMap;
use std::fmt;

use crate::field::Field;

/// Messages keyed by field. A field without an entry has no error.
pub type ErrorMap = BTreeMap<Field, String>;

/// The kind of problem a failed rule reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A required value is absent or blank.
    MissingField,
    /// A value is present but does not have the expected shape.
    FormatMismatch,
    /// A password does not satisfy the strength policy.
    PolicyViolation,
}

/// Information about a single field validation error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// The field that failed validation.
    pub field: Field,
    /// What kind of rule failed.
    pub kind: ErrorKind,
    /// Human-readable error message.
    pub message: String,
}

impl FieldError {
    /// Creates a new field error.
    pub fn new(field: Field, kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            field,
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Result of validating a field set.
///
/// Validity is derived from the collected errors, so the two can never
/// disagree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ValidationResult {
    /// All fields passed validation.
    #[default]
    Valid,
    /// One or more fields failed validation. Never empty.
    Invalid(Vec<FieldError>),
}

impl ValidationResult {
    /// Build a result from the errors of one validation pass.
    pub fn from_errors(errors: Vec<FieldError>) -> Self {
        if errors.is_empty() {
            Self::Valid
        } else {
            Self::Invalid(errors)
        }
    }

    /// Check if all fields passed validation.
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    /// Check if any field failed validation.
    pub fn is_invalid(&self) -> bool {
        !self.is_valid()
    }

    /// Get all validation errors, in evaluation order.
    pub fn errors(&self) -> &[FieldError] {
        match self {
            Self::Valid => &[],
            Self::Invalid(errors) => errors,
        }
    }

    /// Get the first validation error (if any).
    pub fn first_error(&self) -> Option<&FieldError> {
        self.errors().first()
    }

    /// Get the error message for a field (if it failed).
    pub fn error(&self, field: Field) -> Option<&str> {
        self.find(field).map(|e| e.message.as_str())
    }

    /// Get the kind of error for a field (if it failed).
    pub fn kind(&self, field: Field) -> Option<ErrorKind> {
        self.find(field).map(|e| e.kind)
    }

    /// Collect the errors into a map keyed by field.
    pub fn error_map(&self) -> ErrorMap {
        let mut map = ErrorMap::new();
        for error in self.errors() {
            map.entry(error.field)
                .or_insert_with(|| error.message.clone());
        }
        map
    }

    fn find(&self, field: Field) -> Option<&FieldError> {
        self.errors().iter().find(|e| e.field == field)
    }
}
