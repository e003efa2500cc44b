/**
 * BookRank
 * Copyright (C) 2018 Sebastian Schelter
 *
 * This program is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with this program. If not, see <http://www.gnu.org/licenses/>.
 */

use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

use csv::StringRecord;
use fnv::FnvHashMap;
use serde::de::DeserializeOwned;

use crate::error::{Error, Result};

/// An immutable table loaded from a comma-separated file. The first line is the schema, all other
/// lines are rows. The csv reader rejects rows whose length differs from the schema.
pub struct RecordTable {
    schema: StringRecord,
    field_positions: FnvHashMap<String, usize>,
    rows: Vec<StringRecord>,
}

impl RecordTable {

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        RecordTable::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .delimiter(b',')
            .from_reader(reader);

        let schema = csv_reader.headers()?.clone();

        let mut field_positions: FnvHashMap<String, usize> =
            FnvHashMap::with_capacity_and_hasher(schema.len(), Default::default());

        for (position, field) in schema.iter().enumerate() {
            if field_positions.insert(field.to_string(), position).is_some() {
                return Err(Error::DuplicateField(field.to_string()));
            }
        }

        let rows = csv_reader.records().collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(RecordTable { schema, field_positions, rows })
    }

    pub fn schema(&self) -> impl Iterator<Item=&str> {
        self.schema.iter()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn at(&self, index: usize) -> Result<Record> {
        self.rows.get(index)
            .map(|row| Record { table: self, row })
            .ok_or(Error::IndexOutOfBounds { index, len: self.rows.len() })
    }

    /// Records in file order, every call starts from the first row again.
    pub fn iter<'a>(&'a self) -> impl Iterator<Item=Record<'a>> + 'a {
        self.rows.iter().map(move |row| Record { table: self, row })
    }

    /// Returns the last record whose `field` contains `text` as a substring. Later matches
    /// replace earlier ones during the scan.
    pub fn search_field_text(&self, field: &str, text: &str) -> Result<Option<Record>> {
        let mut result = None;

        for record in self.iter() {
            if record.get(field)?.contains(text) {
                result = Some(record);
            }
        }

        Ok(result)
    }

    fn position(&self, field: &str) -> Result<usize> {
        self.field_positions.get(field)
            .cloned()
            .ok_or_else(|| Error::UnknownField(field.to_string()))
    }
}

/// A view of a single row which resolves values by field name.
#[derive(Clone, Copy)]
pub struct Record<'a> {
    table: &'a RecordTable,
    row: &'a StringRecord,
}

impl<'a> Record<'a> {

    pub fn get(&self, field: &str) -> Result<&'a str> {
        let row = self.row;
        let position = self.table.position(field)?;
        // Row length equals schema length, the csv reader enforces that.
        Ok(&row[position])
    }

    pub fn parse<T: FromStr>(&self, field: &str) -> Result<T> {
        let value = self.get(field)?;
        value.parse::<T>()
            .map_err(|_| Error::InvalidValue { field: field.to_string(), value: value.to_string() })
    }

    /// Field name and value pairs in schema order
    pub fn fields(&self) -> impl Iterator<Item=(&'a str, &'a str)> + 'a {
        let (table, row) = (self.table, self.row);
        table.schema.iter().zip(row.iter())
    }

    pub fn deserialize<T: DeserializeOwned>(&self) -> Result<T> {
        let value = self.row.deserialize(Some(&self.table.schema))?;
        Ok(value)
    }
}

impl<'a> std::fmt::Debug for Record<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_map().entries(self.fields()).finish()
    }
}
