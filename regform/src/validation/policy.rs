//! Password strength policy.

use serde::{Deserialize, Serialize};

/// Special characters a registration password may (and must) draw from.
///
/// Includes `)` but not `(`.
pub const DEFAULT_SPECIALS: &str = "@$#!%&?:)";

/// Composite strength rule for passwords.
///
/// A password satisfies the policy when it is at least `min_length`
/// characters long, contains an ASCII letter, an ASCII digit and one of
/// `specials`, and consists only of ASCII letters, ASCII digits and
/// `specials`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PasswordPolicy {
    /// Minimum length in characters.
    pub min_length: usize,
    /// The special-character alphabet.
    pub specials: String,
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self {
            min_length: 6,
            specials: DEFAULT_SPECIALS.to_string(),
        }
    }
}

impl PasswordPolicy {
    fn is_special(&self, c: char) -> bool {
        self.specials.contains(c)
    }

    /// Whether `c` belongs to the permitted alphabet.
    pub fn allows(&self, c: char) -> bool {
        c.is_ascii_alphanumeric() || self.is_special(c)
    }

    /// Check a password against every part of the policy.
    pub fn is_satisfied_by(&self, password: &str) -> bool {
        password.chars().count() >= self.min_length
            && password.chars().any(|c| c.is_ascii_alphabetic())
            && password.chars().any(|c| c.is_ascii_digit())
            && password.chars().any(|c| self.is_special(c))
            && password.chars().all(|c| self.allows(c))
    }

    /// The message shown when a password violates the policy.
    pub fn message(&self) -> String {
        let specials: Vec<String> = self.specials.chars().map(String::from).collect();
        format!(
            "Password must be at least {} characters long and include at least one letter, \
             one number, and one special character ({})",
            self.min_length,
            specials.join(" ")
        )
    }
}
