//! Domain value objects and types.
//!
//! This module contains the validated fields a contact record is made of:
//! names, phone numbers and birthdays. Each one is a [`Field`] with its own
//! [`FieldRule`], so invalid data can't be represented in a record.

pub mod birthday;
pub mod errors;
pub mod field;
pub mod name;
pub mod phone;

pub use birthday::{Birthday, BirthdayRule};
pub use errors::ValidationError;
pub use field::{AnyValue, Field, FieldRule};
pub use name::{Name, NameRule};
pub use phone::{Phone, PhoneRule};
