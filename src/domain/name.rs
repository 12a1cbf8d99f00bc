//! Contact name field.

use super::errors::ValidationError;
use super::field::{Field, FieldRule};

/// Rule for contact names: any value is accepted.
///
/// The name is a semantic wrapper; it exists so a contact name can't be
/// mixed up with a phone or a birthday string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct NameRule;

impl FieldRule for NameRule {
    fn validate(_value: &str) -> Result<(), ValidationError> {
        Ok(())
    }
}

/// The name of a contact, also used as its directory key.
///
/// # Example
///
/// ```
/// use address_book::domain::Name;
///
/// let name = Name::new("John").unwrap();
/// assert_eq!(name.value(), "John");
/// ```
pub type Name = Field<NameRule>;
