//! Registration form controller.

use crate::field::{Field, FieldSet};
use crate::submit::{ResultView, SubmissionRecord, submit};
use crate::validation::{ErrorMap, ValidationResult, Validator};

/// Owns the state of one registration form session.
///
/// The presentation layer forwards raw edits and reads everything it
/// renders back from here: field values, per-field errors, whether submit
/// is enabled, and the result panel. Every edit revalidates the whole form
/// before returning, so observed errors always match the current values.
///
/// # Example
///
/// ```
/// use regform::field::Field;
/// use regform::RegistrationForm;
///
/// let mut form = RegistrationForm::new();
/// form.on_field_change("email", "bad-email");
///
/// assert_eq!(form.error(Field::Email), Some("Invalid Email format."));
/// assert!(form.on_submit_requested().is_none());
/// ```
#[derive(Debug)]
pub struct RegistrationForm {
    fields: FieldSet,
    validator: Validator,
    validation: ValidationResult,
    show_password: bool,
    show_result: bool,
    last_submission: Option<SubmissionRecord>,
}

impl RegistrationForm {
    /// Create a form with the standard registration rules.
    pub fn new() -> Self {
        Self::with_validator(Validator::registration())
    }

    /// Create a form with custom rules.
    pub fn with_validator(validator: Validator) -> Self {
        let fields = FieldSet::default();
        let validation = validator.validate(&fields);
        Self {
            fields,
            validator,
            validation,
            show_password: false,
            show_result: false,
            last_submission: None,
        }
    }

    // Inbound events

    /// Apply a raw edit to a field and revalidate.
    ///
    /// Unknown field names are ignored.
    pub fn on_field_change(&mut self, field_name: &str, raw_value: impl Into<String>) {
        if self.fields.update(field_name, raw_value) {
            self.revalidate();
        }
    }

    /// Typed variant of [`on_field_change`](Self::on_field_change).
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        self.fields.set(field, value);
        self.revalidate();
    }

    /// Submit the form if it is valid.
    ///
    /// Validity is re-derived from the current values rather than taken
    /// from the cached result. On success the record replaces any previous
    /// one and the result panel is shown. On failure nothing changes.
    pub fn on_submit_requested(&mut self) -> Option<&SubmissionRecord> {
        let is_valid = self.validator.validate(&self.fields).is_valid();
        let record = submit(&self.fields, is_valid)?;

        log::info!("[form] submission accepted");
        self.show_result = true;
        Some(&*self.last_submission.insert(record))
    }

    /// Flip password visibility. Has no effect on validation.
    pub fn on_toggle_password_visibility(&mut self) {
        self.show_password = !self.show_password;
    }

    /// Return to the state of a freshly opened form.
    pub fn reset(&mut self) {
        self.fields = FieldSet::default();
        self.show_password = false;
        self.show_result = false;
        self.last_submission = None;
        self.revalidate();
    }

    fn revalidate(&mut self) {
        self.validation = self.validator.validate(&self.fields);
        match self.validation.first_error() {
            Some(first) => log::debug!(
                "[form] revalidated: {} error(s), first: {}",
                self.validation.errors().len(),
                first
            ),
            None => log::debug!("[form] revalidated: valid"),
        }
    }

    // Outbound state

    pub fn fields(&self) -> &FieldSet {
        &self.fields
    }

    pub fn value(&self, field: Field) -> &str {
        self.fields.get(field)
    }

    pub fn validation(&self) -> &ValidationResult {
        &self.validation
    }

    pub fn errors(&self) -> ErrorMap {
        self.validation.error_map()
    }

    pub fn error(&self, field: Field) -> Option<&str> {
        self.validation.error(field)
    }

    /// Whether the submit control should be enabled.
    pub fn is_valid(&self) -> bool {
        self.validation.is_valid()
    }

    pub fn show_password(&self) -> bool {
        self.show_password
    }

    pub fn show_result(&self) -> bool {
        self.show_result
    }

    /// What the result panel displays, once a submit has succeeded.
    pub fn result(&self) -> Option<ResultView<'_>> {
        if !self.show_result {
            return None;
        }
        self.last_submission.as_ref().map(SubmissionRecord::view)
    }

    /// The full record of the last successful submit, for the host
    /// application.
    pub fn last_submission(&self) -> Option<&SubmissionRecord> {
        self.last_submission.as_ref()
    }
}

impl Default for RegistrationForm {
    fn default() -> Self {
        Self::new()
    }
}
