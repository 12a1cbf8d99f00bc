//! Domain validation errors.

use std::fmt;

/// Errors that can occur when a field value fails its format rule.
///
/// The rejected input is carried along so callers can log it, but the
/// rendered message only names the violated rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided phone number is not exactly 10 digits.
    InvalidPhone(String),

    /// The provided birthday is not a real `dd-mm-yyyy` date.
    InvalidBirthday(String),
}

impl ValidationError {
    /// The raw input that was rejected.
    pub fn rejected_value(&self) -> &str {
        match self {
            Self::InvalidPhone(value) | Self::InvalidBirthday(value) => value,
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPhone(_) => write!(f, "Phone number must be 10 digits"),
            Self::InvalidBirthday(_) => write!(f, "Birthday must be in the format dd-mm-yyyy"),
        }
    }
}

impl std::error::Error for ValidationError {}
