//! Validator builder for fluent validation API.

use std::fmt;

use regex::Regex;

use super::policy::PasswordPolicy;
use super::result::{ErrorKind, FieldError, ValidationResult};
use super::rules::{self, EMAIL_INVALID, NAME_REQUIRED, PASSWORD_REQUIRED};
use crate::error::FormError;
use crate::field::{Field, FieldSet, trim_value};

/// Type alias for validation predicates.
type Check = Box<dyn Fn(&str) -> bool + Send + Sync>;

/// A single rule: a predicate and what to report when it fails.
struct Rule {
    check: Check,
    kind: ErrorKind,
    message: String,
}

/// Internal representation of a field being validated.
struct FieldEntry {
    field: Field,
    rules: Vec<Rule>,
}

impl FieldEntry {
    /// Run the rules in order, stopping at the first failure.
    fn check(&self, value: &str) -> Option<FieldError> {
        self.rules
            .iter()
            .find(|rule| !(rule.check)(value))
            .map(|rule| FieldError::new(self.field, rule.kind, rule.message.clone()))
    }
}

/// Set of per-field validation rules.
///
/// A validator holds no state between passes: [`validate`](Self::validate)
/// is a pure function of the field set it is given.
///
/// # Example
///
/// ```
/// use regform::field::{Field, FieldSet};
/// use regform::validation::Validator;
///
/// let validator = Validator::registration();
/// let result = validator.validate(&FieldSet::new("", "a@b.com", "abc123!"));
///
/// assert!(result.is_invalid());
/// assert_eq!(result.error(Field::Name), Some("Name is required"));
/// ```
pub struct Validator {
    fields: Vec<FieldEntry>,
}

impl Validator {
    /// Create a validator with no rules.
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// The standard registration rules with the default password policy.
    pub fn registration() -> Self {
        Self::registration_with(PasswordPolicy::default())
    }

    /// The standard registration rules with a custom password policy.
    pub fn registration_with(policy: PasswordPolicy) -> Self {
        let policy_message = policy.message();
        Self::new()
            .field(Field::Name)
            .required(NAME_REQUIRED)
            .field(Field::Email)
            .required(EMAIL_INVALID)
            .rule(rules::is_email, ErrorKind::FormatMismatch, EMAIL_INVALID)
            .field(Field::Password)
            .present(PASSWORD_REQUIRED)
            .password_policy(policy, policy_message)
            .build()
    }

    /// Start adding rules for a field.
    ///
    /// Rules for a field that already has some are appended after them.
    pub fn field(self, field: Field) -> FieldBuilder {
        FieldBuilder {
            validator: self,
            field,
            rules: Vec::new(),
        }
    }

    /// Run every field's rules against `fields`.
    ///
    /// All fields are checked; a failure in one never skips another.
    pub fn validate(&self, fields: &FieldSet) -> ValidationResult {
        let errors: Vec<FieldError> = self
            .fields
            .iter()
            .filter_map(|entry| entry.check(fields.get(entry.field)))
            .collect();

        log::debug!(
            "[validation] {} field(s) checked, {} error(s)",
            self.fields.len(),
            errors.len()
        );

        ValidationResult::from_errors(errors)
    }

    fn push(&mut self, field: Field, rules: Vec<Rule>) {
        match self.fields.iter_mut().find(|entry| entry.field == field) {
            Some(entry) => entry.rules.extend(rules),
            None => self.fields.push(FieldEntry { field, rules }),
        }
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Validator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.fields.iter().map(|e| (e.field, e.rules.len())))
            .finish()
    }
}

/// Builder for adding validation rules to a single field.
pub struct FieldBuilder {
    validator: Validator,
    field: Field,
    rules: Vec<Rule>,
}

impl FieldBuilder {
    /// Add a custom validation rule.
    pub fn rule<F>(mut self, f: F, kind: ErrorKind, msg: impl Into<String>) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        self.rules.push(Rule {
            check: Box::new(f),
            kind,
            message: msg.into(),
        });
        self
    }

    /// Require the field to be non-blank after trimming whitespace.
    pub fn required(self, msg: impl Into<String>) -> Self {
        self.rule(|v| !trim_value(v).is_empty(), ErrorKind::MissingField, msg)
    }

    /// Require the field to be non-empty, counting whitespace as content.
    pub fn present(self, msg: impl Into<String>) -> Self {
        self.rule(|v| !v.is_empty(), ErrorKind::MissingField, msg)
    }

    /// Require minimum length (in characters).
    pub fn min_length(self, min: usize, msg: impl Into<String>) -> Self {
        self.rule(
            move |v| v.chars().count() >= min,
            ErrorKind::FormatMismatch,
            msg,
        )
    }

    /// Require maximum length (in characters).
    pub fn max_length(self, max: usize, msg: impl Into<String>) -> Self {
        self.rule(
            move |v| v.chars().count() <= max,
            ErrorKind::FormatMismatch,
            msg,
        )
    }

    /// Require the value to match a compiled regex.
    pub fn regex(self, re: Regex, msg: impl Into<String>) -> Self {
        self.rule(move |v| re.is_match(v), ErrorKind::FormatMismatch, msg)
    }

    /// Require the value to match a regex pattern.
    pub fn pattern(self, pattern: &str, msg: impl Into<String>) -> Result<Self, FormError> {
        let re = Regex::new(pattern).map_err(|source| FormError::InvalidPattern {
            field: self.field,
            source,
        })?;
        Ok(self.regex(re, msg))
    }

    /// Require a valid email address.
    pub fn email(self, msg: impl Into<String>) -> Self {
        self.rule(
            |v| {
                if v.is_empty() {
                    true // Empty is valid; use required() for non-empty
                } else {
                    email_address::EmailAddress::is_valid(v)
                }
            },
            ErrorKind::FormatMismatch,
            msg,
        )
    }

    /// Require the value to satisfy a password policy.
    pub fn password_policy(self, policy: PasswordPolicy, msg: impl Into<String>) -> Self {
        self.rule(
            move |v| policy.is_satisfied_by(v),
            ErrorKind::PolicyViolation,
            msg,
        )
    }

    /// Continue to the next field.
    pub fn field(self, field: Field) -> FieldBuilder {
        self.build().field(field)
    }

    /// Finalize the rules and return the validator.
    pub fn build(self) -> Validator {
        let mut validator = self.validator;
        validator.push(self.field, self.rules);
        validator
    }
}
