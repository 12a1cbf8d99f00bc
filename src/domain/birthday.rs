//! Birthday field.

use super::errors::ValidationError;
use super::field::{Field, FieldRule};
use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;

/// `chrono` format string of a stored birthday.
pub const BIRTHDAY_FORMAT: &str = "%d-%m-%Y";

// chrono alone would also take "1-5-2020" or a five-digit year.
static BIRTHDAY_SHAPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{2}-[0-9]{2}-[0-9]{4}$").expect("Failed to compile birthday regex")
});

/// Rule for birthdays: `dd-mm-yyyy` naming a real calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BirthdayRule;

impl BirthdayRule {
    fn parse(value: &str) -> Option<NaiveDate> {
        if !BIRTHDAY_SHAPE.is_match(value) {
            return None;
        }

        NaiveDate::parse_from_str(value, BIRTHDAY_FORMAT)
            .ok()
            .filter(|date| date.year() >= 1)
    }
}

impl FieldRule for BirthdayRule {
    fn validate(value: &str) -> Result<(), ValidationError> {
        match Self::parse(value) {
            Some(_) => Ok(()),
            None => Err(ValidationError::InvalidBirthday(value.to_string())),
        }
    }
}

/// A validated birthday, stored as the original `dd-mm-yyyy` string.
///
/// # Example
///
/// ```
/// use address_book::domain::Birthday;
///
/// let birthday = Birthday::new("15-05-1423").unwrap();
/// assert_eq!(birthday.value(), "15-05-1423");
/// assert!(Birthday::new("31-04-2020").is_err());
/// ```
pub type Birthday = Field<BirthdayRule>;

impl Field<BirthdayRule> {
    /// The birthday as a calendar date.
    pub fn date(&self) -> NaiveDate {
        // SAFETY: every stored value passed BirthdayRule::parse
        BirthdayRule::parse(self.value()).expect("birthday validated as dd-mm-yyyy")
    }

    /// Month of the birthday (1-12).
    pub fn month(&self) -> u32 {
        self.date().month()
    }

    /// Day of the month of the birthday (1-31).
    pub fn day(&self) -> u32 {
        self.date().day()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_birthday_valid() {
        let birthday = Birthday::new("15-05-1423").unwrap();
        assert_eq!(birthday.value(), "15-05-1423");
        assert_eq!(birthday.date(), NaiveDate::from_ymd_opt(1423, 5, 15).unwrap());
        assert_eq!(birthday.month(), 5);
        assert_eq!(birthday.day(), 15);
    }

    #[test]
    fn test_birthday_accepts_real_dates() {
        assert!(Birthday::new("01-01-2000").is_ok());
        assert!(Birthday::new("31-12-1999").is_ok());
        assert!(Birthday::new("29-02-2020").is_ok());
        assert!(Birthday::new("30-04-2020").is_ok());
    }

    #[test]
    fn test_birthday_rejects_impossible_dates() {
        assert!(Birthday::new("31-02-2020").is_err());
        assert!(Birthday::new("31-04-2020").is_err());
        assert!(Birthday::new("29-02-2021").is_err());
        assert!(Birthday::new("00-05-2020").is_err());
        assert!(Birthday::new("15-13-2020").is_err());
        assert!(Birthday::new("15-05-0000").is_err());
    }

    #[test]
    fn test_birthday_rejects_wrong_shape() {
        assert!(Birthday::new("").is_err());
        assert!(Birthday::new("15/05/2020").is_err());
        assert!(Birthday::new("2020-05-15").is_err());
        assert!(Birthday::new("5-5-2020").is_err());
        assert!(Birthday::new("15-05-20").is_err());
        assert!(Birthday::new("15-05-20201").is_err());
        assert!(Birthday::new(" 15-05-2020").is_err());
        assert!(Birthday::new("15-05-2020\n").is_err());
    }

    #[test]
    fn test_birthday_error_message() {
        let err = Birthday::new("15/05/2020").unwrap_err();
        assert_eq!(err.to_string(), "Birthday must be in the format dd-mm-yyyy");
    }

    #[test]
    fn test_birthday_failed_set_keeps_value() {
        let mut birthday = Birthday::new("15-05-1423").unwrap();
        assert!(birthday.set_value("31-02-2020").is_err());
        assert_eq!(birthday.value(), "15-05-1423");

        birthday.set_value("01-06-1990").unwrap();
        assert_eq!(birthday.value(), "01-06-1990");
    }

    #[test]
    fn test_birthday_deserialization() {
        let birthday: Birthday = serde_json::from_str("\"15-05-1423\"").unwrap();
        assert_eq!(birthday.value(), "15-05-1423");

        let result: Result<Birthday, _> = serde_json::from_str("\"1423-05-15\"");
        assert!(result.is_err());
    }
}
