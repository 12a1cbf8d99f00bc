//! Name-keyed directory of contact records.

use super::pages::Pages;
use crate::models::ContactRecord;
use indexmap::IndexMap;
use std::fmt;
use tracing::debug;

/// An in-memory address book mapping contact names to records.
///
/// Records are kept in insertion order. Replacing a record under an existing
/// name keeps that name's original position; deleting one keeps the order of
/// the others.
///
/// There is no internal locking. Callers sharing a directory between threads
/// wrap it in a lock such as `RwLock`.
///
/// # Example
///
/// ```
/// use address_book::{ContactRecord, Directory};
///
/// let mut book = Directory::new();
/// book.add_record(ContactRecord::new("John", None).unwrap());
/// book.add_record(ContactRecord::new("Mary", None).unwrap());
///
/// assert!(book.find("John").is_some());
/// assert_eq!(book.iterator(1).count(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Directory {
    records: IndexMap<String, ContactRecord>,
}

impl Directory {
    /// Create an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record under its name.
    ///
    /// A record already stored under the same name is replaced and dropped.
    pub fn add_record(&mut self, record: ContactRecord) {
        let name = record.name().value().to_string();
        if self.records.contains_key(&name) {
            debug!(name = %name, "Replacing existing record");
        } else {
            debug!(name = %name, "Adding record");
        }
        self.records.insert(name, record);
    }

    /// Look up a record by name.
    pub fn find(&self, name: &str) -> Option<&ContactRecord> {
        self.records.get(name)
    }

    /// Look up a record by name for editing its phones or birthday.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut ContactRecord> {
        self.records.get_mut(name)
    }

    /// Remove the record stored under `name`, if any.
    pub fn delete(&mut self, name: &str) {
        if self.records.shift_remove(name).is_some() {
            debug!(name, "Deleted record");
        }
    }

    /// Walk the directory in pages of `chunk_size` records.
    ///
    /// Each call starts a fresh pass over the current contents.
    ///
    /// # Panics
    ///
    /// Panics if `chunk_size` is 0.
    pub fn iterator(&self, chunk_size: usize) -> Pages<'_> {
        Pages::new(self.records.values(), chunk_size)
    }

    /// Whether a record is stored under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.records.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All name/record pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ContactRecord)> + '_ {
        self.records.iter().map(|(name, record)| (name.as_str(), record))
    }

    /// All names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.records.keys().map(String::as_str)
    }
}

impl FromIterator<ContactRecord> for Directory {
    fn from_iter<I: IntoIterator<Item = ContactRecord>>(iter: I) -> Self {
        let mut directory = Self::new();
        directory.extend(iter);
        directory
    }
}

impl Extend<ContactRecord> for Directory {
    fn extend<I: IntoIterator<Item = ContactRecord>>(&mut self, iter: I) {
        for record in iter {
            self.add_record(record);
        }
    }
}

impl fmt::Display for Directory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for record in self.records.values() {
            if !first {
                writeln!(f)?;
            }
            write!(f, "{}", record)?;
            first = false;
        }
        Ok(())
    }
}
