//! Data models for the address book.
//!
//! This module contains the contact record, the aggregate of validated
//! fields that the directory stores.

pub mod record;

pub use record::ContactRecord;
