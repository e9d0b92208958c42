//! Messages and patterns of the registration rule set.

use std::sync::LazyLock;

use regex::Regex;

pub const NAME_REQUIRED: &str = "Name is required";
pub const EMAIL_INVALID: &str = "Invalid Email format.";
pub const PASSWORD_REQUIRED: &str = "Password is required";

/// `local@domain.tld`, anchored at both ends.
pub const EMAIL_PATTERN: &str = r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$";

pub(crate) static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(EMAIL_PATTERN).expect("email pattern compiles"));

/// Check an email address against [`EMAIL_PATTERN`].
pub fn is_email(value: &str) -> bool {
    EMAIL_REGEX.is_match(value)
}
