//! Contact record: a name, an optional birthday and a list of phones.

use crate::domain::{Birthday, Name, Phone};
use crate::error::{RecordError, RecordResult};
use chrono::{Datelike, Local, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, trace};

/// A single contact in the address book.
///
/// Every field is validated on the way in, so a record never holds a
/// malformed phone number or birthday. Phones keep their insertion order and
/// may contain duplicates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRecord {
    /// Contact name, also the directory key
    name: Name,

    /// Birthday, if known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,

    /// Phone numbers in insertion order
    #[serde(default)]
    phones: Vec<Phone>,
}

impl ContactRecord {
    /// Create a record with no phones.
    ///
    /// An empty birthday string counts as no birthday.
    ///
    /// # Errors
    ///
    /// Returns `RecordError::Validation` if the birthday is not a real
    /// `dd-mm-yyyy` date.
    pub fn new(name: impl Into<String>, birthday: Option<&str>) -> RecordResult<Self> {
        let birthday = match birthday {
            Some(value) if !value.is_empty() => Some(Birthday::new(value)?),
            _ => None,
        };

        Ok(Self {
            name: Name::new(name)?,
            birthday,
            phones: Vec::new(),
        })
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    /// Replace or clear the birthday. On a validation failure the previous
    /// birthday is kept.
    pub fn set_birthday(&mut self, birthday: Option<&str>) -> RecordResult<()> {
        self.birthday = match birthday {
            Some(value) if !value.is_empty() => Some(Birthday::new(value)?),
            _ => None,
        };
        Ok(())
    }

    /// Append a phone number. Duplicates are allowed.
    pub fn add_phone(&mut self, phone: impl Into<String>) -> RecordResult<()> {
        self.phones.push(Phone::new(phone)?);
        Ok(())
    }

    /// Remove the first phone equal to `phone`. Does nothing if there is none.
    pub fn remove_phone(&mut self, phone: &str) {
        if let Some(index) = self.position(phone) {
            self.phones.remove(index);
        }
    }

    /// Replace the first phone equal to `old_phone` with `new_phone`, in place.
    ///
    /// # Errors
    ///
    /// - `RecordError::PhoneNotFound` if `old_phone` is not on the record
    /// - `RecordError::Validation` if `new_phone` is invalid; the record is
    ///   left unchanged
    pub fn edit_phone(&mut self, old_phone: &str, new_phone: impl Into<String>) -> RecordResult<()> {
        let index = self
            .position(old_phone)
            .ok_or_else(|| RecordError::PhoneNotFound(old_phone.to_string()))?;

        let new_phone = Phone::new(new_phone)?;
        debug!(name = %self.name, old = old_phone, new = %new_phone, "Editing phone");
        self.phones[index] = new_phone;
        Ok(())
    }

    /// Find the first phone equal to `phone`.
    pub fn find_phone(&self, phone: &str) -> Option<&Phone> {
        self.phones.iter().find(|p| p.value() == phone)
    }

    /// Days until the next birthday, counted from the local clock.
    ///
    /// See [`ContactRecord::days_to_birthday_from`].
    pub fn days_to_birthday(&self) -> RecordResult<Option<i64>> {
        self.days_to_birthday_from(Local::now().naive_local())
    }

    /// Days from `now` until the next birthday, or `None` without a birthday.
    ///
    /// The next birthday is midnight of the birthday's day and month in the
    /// current year, or in the following year once `now` is past it. Partial
    /// days are dropped, so on the birthday itself (after midnight) the count
    /// is for next year. The birth year is ignored.
    ///
    /// # Errors
    ///
    /// Returns `RecordError::InvalidCalendarDate` when the next birthday
    /// doesn't exist, i.e. 29 February in a non-leap year. No fallback date
    /// is substituted.
    pub fn days_to_birthday_from(&self, now: NaiveDateTime) -> RecordResult<Option<i64>> {
        let Some(birthday) = &self.birthday else {
            return Ok(None);
        };

        let (month, day) = (birthday.month(), birthday.day());
        trace!(name = %self.name, month, day, "Parsed birthday");

        let mut next = Self::midnight(now.year(), month, day)?;
        if now > next {
            next = Self::midnight(now.year() + 1, month, day)?;
        }

        Ok(Some((next - now).num_days()))
    }

    fn midnight(year: i32, month: u32, day: u32) -> RecordResult<NaiveDateTime> {
        NaiveDate::from_ymd_opt(year, month, day)
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .ok_or(RecordError::InvalidCalendarDate { year, month, day })
    }

    fn position(&self, phone: &str) -> Option<usize> {
        self.phones.iter().position(|p| p.value() == phone)
    }
}

impl fmt::Display for ContactRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones: Vec<&str> = self.phones.iter().map(Phone::value).collect();
        write!(f, "Contact name: {}, phones: {}", self.name, phones.join("; "))
    }
}
