//! Generic validated field.
//!
//! Every field kind in a contact record is a single string guarded by a
//! format rule. The storage and the get/set contract live here once; the
//! kinds only differ in the [`FieldRule`] they plug in.

use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::marker::PhantomData;

/// A format rule applied whenever a field is constructed or assigned.
pub trait FieldRule {
    /// Check `value`, returning the error to report when it is rejected.
    fn validate(value: &str) -> Result<(), ValidationError>;
}

/// Rule of the base field: every value is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct AnyValue;

impl FieldRule for AnyValue {
    fn validate(_value: &str) -> Result<(), ValidationError> {
        Ok(())
    }
}

/// A single string value that always satisfies the rule `R`.
///
/// The stored value is the last one that passed validation: a rejected
/// assignment leaves it untouched.
///
/// # Example
///
/// ```
/// use address_book::domain::{Field, AnyValue};
///
/// let mut field = Field::<AnyValue>::new("anything").unwrap();
/// field.set_value("something else").unwrap();
/// assert_eq!(field.value(), "something else");
/// ```
pub struct Field<R> {
    value: String,
    rule: PhantomData<R>,
}

impl<R: FieldRule> Field<R> {
    /// Create a new field, running the value through the rule.
    ///
    /// # Errors
    ///
    /// Returns the rule's `ValidationError` if the value is rejected.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        R::validate(&value)?;

        Ok(Self {
            value,
            rule: PhantomData,
        })
    }

    /// Replace the stored value.
    ///
    /// # Errors
    ///
    /// Returns the rule's `ValidationError` and keeps the previous value if
    /// the new one is rejected.
    pub fn set_value(&mut self, value: impl Into<String>) -> Result<(), ValidationError> {
        let value = value.into();
        R::validate(&value)?;
        self.value = value;
        Ok(())
    }
}

impl<R> Field<R> {
    /// Get the stored value.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Get the value as a string slice.
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.value
    }
}

// Manual impls so `R` itself needs no derives.
impl<R> Clone for Field<R> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            rule: PhantomData,
        }
    }
}

impl<R> PartialEq for Field<R> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<R> Eq for Field<R> {}

impl<R> std::hash::Hash for Field<R> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<R> fmt::Debug for Field<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Field").field(&self.value).finish()
    }
}

impl<R> fmt::Display for Field<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl<R> PartialEq<str> for Field<R> {
    fn eq(&self, other: &str) -> bool {
        self.value == other
    }
}

impl<R> PartialEq<&str> for Field<R> {
    fn eq(&self, other: &&str) -> bool {
        self.value == *other
    }
}

// Serde support - serialize as string
impl<R> Serialize for Field<R> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.value.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de, R: FieldRule> Deserialize<'de> for Field<R> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Field::new(s).map_err(serde::de::Error::custom)
    }
}
