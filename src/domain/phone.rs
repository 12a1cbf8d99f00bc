//! Phone number field.

use super::errors::ValidationError;
use super::field::{Field, FieldRule};

/// Number of digits in a phone number.
pub const PHONE_DIGITS: usize = 10;

/// Rule for phone numbers: exactly ten ASCII decimal digits, nothing else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PhoneRule;

impl FieldRule for PhoneRule {
    fn validate(value: &str) -> Result<(), ValidationError> {
        if value.len() == PHONE_DIGITS && value.bytes().all(|b| b.is_ascii_digit()) {
            Ok(())
        } else {
            Err(ValidationError::InvalidPhone(value.to_string()))
        }
    }
}

/// A validated phone number.
///
/// # Example
///
/// ```
/// use address_book::domain::Phone;
///
/// let phone = Phone::new("1231231331").unwrap();
/// assert_eq!(phone.value(), "1231231331");
/// assert!(Phone::new("123-123-1331").is_err());
/// ```
pub type Phone = Field<PhoneRule>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_valid() {
        let phone = Phone::new("1231231331").unwrap();
        assert_eq!(phone.value(), "1231231331");
    }

    #[test]
    fn test_phone_validates_format() {
        assert!(Phone::new("").is_err());
        assert!(Phone::new("123456789").is_err());
        assert!(Phone::new("12345678901").is_err());
        assert!(Phone::new("123456789a").is_err());
        assert!(Phone::new("+123456789").is_err());
        assert!(Phone::new("123 456 78").is_err());
        assert!(Phone::new("0000000000").is_ok());
        assert!(Phone::new("9876543210").is_ok());
    }

    #[test]
    fn test_phone_rejects_non_ascii_digits() {
        // Ten characters, all numeric, but not ASCII.
        assert!(Phone::new("١٢٣٤٥٦٧٨٩٠").is_err());
    }

    #[test]
    fn test_phone_error_message() {
        let err = Phone::new("12345").unwrap_err();
        assert_eq!(err, ValidationError::InvalidPhone("12345".to_string()));
        assert_eq!(err.to_string(), "Phone number must be 10 digits");
    }

    #[test]
    fn test_phone_failed_set_keeps_value() {
        let mut phone = Phone::new("1111111111").unwrap();
        assert!(phone.set_value("22").is_err());
        assert_eq!(phone.value(), "1111111111");
    }

    #[test]
    fn test_phone_deserialization_invalid_fails() {
        let result: Result<Phone, _> = serde_json::from_str("\"invalid\"");
        assert!(result.is_err());
    }
}
