//! Field store: the current value of every form field.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FormError;

/// One named input slot of the registration form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Name,
    Email,
    Password,
}

impl Field {
    /// Every field, in evaluation and display order.
    pub const ALL: [Field; 3] = [Field::Name, Field::Email, Field::Password];

    /// The field's name as used by the presentation layer.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Password => "password",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Field {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(Self::Name),
            "email" => Ok(Self::Email),
            "password" => Ok(Self::Password),
            other => Err(FormError::unknown_field(other)),
        }
    }
}

/// Strip leading and trailing whitespace, counting U+FEFF as whitespace.
pub fn trim_value(value: &str) -> &str {
    value.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
}

/// Current values of all form fields.
///
/// Every field is always present; a fresh set holds empty strings. Values
/// are stored exactly as typed, without trimming.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSet {
    name: String,
    email: String,
    password: String,
}

impl FieldSet {
    /// Create a field set with the given values.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password: password.into(),
        }
    }

    /// Get the current value of a field.
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Password => &self.password,
        }
    }

    /// Replace the value of a single field.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Password => &mut self.password,
        };
        *slot = value.into();
    }

    /// Replace the value of the field called `field_name`.
    ///
    /// Unknown names are ignored. Returns whether a field was updated.
    pub fn update(&mut self, field_name: &str, value: impl Into<String>) -> bool {
        match field_name.parse::<Field>() {
            Ok(field) => {
                self.set(field, value);
                true
            }
            Err(e) => {
                log::debug!("[fields] ignoring update: {}", e);
                false
            }
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
}
