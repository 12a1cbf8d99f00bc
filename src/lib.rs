//! Address book - a small in-memory contact directory.
//!
//! Contacts have a name, an optional birthday and any number of phone
//! numbers. Every field is validated when it is set, records are stored by
//! name, and the directory can be walked in fixed-size pages.
//!
//! # Architecture
//!
//! - **domain**: Validated fields (name, phone, birthday) and their errors
//! - **models**: The contact record
//! - **directory**: The name-keyed directory and its page iterator
//! - **error**: Record and configuration error types
//! - **config**: Configuration for the demo binary
//!
//! # Example
//!
//! ```
//! use address_book::{ContactRecord, Directory};
//!
//! let mut john = ContactRecord::new("John", Some("15-05-1423")).unwrap();
//! john.add_phone("1231231331").unwrap();
//!
//! let mut book = Directory::new();
//! book.add_record(john);
//!
//! let record = book.find("John").unwrap();
//! assert_eq!(record.to_string(), "Contact name: John, phones: 1231231331");
//! ```

pub mod config;
pub mod directory;
pub mod domain;
pub mod error;
pub mod models;

pub use config::Config;
pub use directory::{Directory, Pages};
pub use domain::{Birthday, Name, Phone, ValidationError};
pub use error::{ConfigError, RecordError, RecordResult};
pub use models::ContactRecord;
