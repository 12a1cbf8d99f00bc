//! Fixed-size pages over the records of a directory.

use crate::models::ContactRecord;
use indexmap::map::Values;
use std::iter::FusedIterator;

/// Lazy iterator over a directory in pages of `chunk_size` records.
///
/// Every page is full except possibly the last one, which holds the
/// remainder. Records come in the directory's insertion order.
#[derive(Debug, Clone)]
pub struct Pages<'a> {
    records: Values<'a, String, ContactRecord>,
    chunk_size: usize,
}

impl<'a> Pages<'a> {
    /// # Panics
    ///
    /// Panics if `chunk_size` is 0.
    pub(crate) fn new(records: Values<'a, String, ContactRecord>, chunk_size: usize) -> Self {
        assert!(chunk_size != 0, "chunk size must be non-zero");
        Self {
            records,
            chunk_size,
        }
    }

    /// Number of records on a full page.
    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }
}

impl<'a> Iterator for Pages<'a> {
    type Item = Vec<&'a ContactRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        let page: Vec<&'a ContactRecord> = self.records.by_ref().take(self.chunk_size).collect();
        if page.is_empty() {
            None
        } else {
            Some(page)
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let pages = self.records.len().div_ceil(self.chunk_size);
        (pages, Some(pages))
    }
}

impl ExactSizeIterator for Pages<'_> {}

impl FusedIterator for Pages<'_> {}
