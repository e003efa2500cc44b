use fnv::FnvHashMap;

use crate::error::{Error, Result};
use crate::table::RecordTable;

/// Maps the raw values of an identifier field of the books table to zero-based row positions.
pub struct BookIndex {
    field: String,
    row_dict: FnvHashMap<String, usize>,
}

impl BookIndex {

    pub fn from(books: &RecordTable, field: &str) -> Result<Self> {

        let mut row_dict: FnvHashMap<String, usize> =
            FnvHashMap::with_capacity_and_hasher(books.len(), Default::default());

        for (row, book) in books.iter().enumerate() {
            let key = book.get(field)?;

            if row_dict.insert(key.to_string(), row).is_some() {
                return Err(Error::DuplicateKey { field: field.to_string(), key: key.to_string() });
            }
        }

        Ok(BookIndex { field: field.to_string(), row_dict })
    }

    pub fn len(&self) -> usize {
        self.row_dict.len()
    }

    pub fn is_empty(&self) -> bool {
        self.row_dict.is_empty()
    }

    pub fn row(&self, key: &str) -> Result<usize> {
        self.row_dict.get(key)
            .cloned()
            .ok_or_else(|| Error::UnknownKey { field: self.field.clone(), key: key.to_string() })
    }
}
