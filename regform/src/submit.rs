//! Submission pipeline: turns a valid field set into a sanitized record.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::field::{FieldSet, trim_value};
use crate::sanitize::sanitize;

/// The finalized output of a successful submit.
///
/// `name` and `email` are trimmed and sanitized; `password` is exactly what
/// the user typed.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionRecord {
    name: String,
    email: String,
    password: String,
}

impl SubmissionRecord {
    fn from_fields(fields: &FieldSet) -> Self {
        Self {
            name: sanitize(trim_value(fields.name())),
            email: sanitize(trim_value(fields.email())),
            password: fields.password().to_string(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    /// The parts of the record that may be displayed back to the user.
    pub fn view(&self) -> ResultView<'_> {
        ResultView {
            name: &self.name,
            email: &self.email,
        }
    }
}

impl fmt::Debug for SubmissionRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SubmissionRecord")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Displayable view of a submission. Never includes the password.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResultView<'a> {
    pub name: &'a str,
    pub email: &'a str,
}

/// Produce a submission record, or nothing if the form is not valid.
///
/// The check happens here as well as at the submit control; an invalid
/// form never yields a record.
pub fn submit(fields: &FieldSet, is_valid: bool) -> Option<SubmissionRecord> {
    if !is_valid {
        log::debug!("[submit] rejected: form is invalid");
        return None;
    }
    Some(SubmissionRecord::from_fields(fields))
}
