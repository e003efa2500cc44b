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

use fnv::FnvHashMap;
use serde_derive::{Deserialize, Serialize};

use crate::error::{Error, Result};

pub type SparseVector<T> = FnvHashMap<u32, T>;

pub fn new_sparse_vector<T>(capacity: usize) -> SparseVector<T> {
    FnvHashMap::with_capacity_and_hasher(capacity, Default::default())
}

/// Row store for a sparse matrix: one hash map from column to value per row. Only non-default
/// entries are stored, the shape is fixed at construction.
#[derive(Debug, Clone)]
pub struct SparseMatrix<T> {
    num_columns: usize,
    rows: Vec<SparseVector<T>>,
}

impl<T: Copy + Default + PartialEq> SparseMatrix<T> {

    pub fn new(num_rows: usize, num_columns: usize) -> Self {
        SparseMatrix {
            num_columns,
            rows: vec![new_sparse_vector(0); num_rows],
        }
    }

    pub(crate) fn from_rows(num_columns: usize, rows: Vec<SparseVector<T>>) -> Self {
        SparseMatrix { num_columns, rows }
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows.len(), self.num_columns)
    }

    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn num_columns(&self) -> usize {
        self.num_columns
    }

    /// Number of explicitly stored entries
    pub fn nnz(&self) -> usize {
        self.rows.iter().map(|row| row.len()).sum()
    }

    pub fn get(&self, row: usize, column: usize) -> T {
        self.rows.get(row)
            .and_then(|entries| entries.get(&(column as u32)))
            .cloned()
            .unwrap_or_default()
    }

    /// Overwrites the value of a cell, writing the default value removes the entry.
    pub fn set(&mut self, row: usize, column: usize, value: T) -> Result<()> {
        let (num_rows, num_columns) = self.shape();

        if row >= num_rows || column >= num_columns {
            return Err(Error::CellOutOfBounds { row, column, num_rows, num_columns });
        }

        if value == T::default() {
            self.rows[row].remove(&(column as u32));
        } else {
            self.rows[row].insert(column as u32, value);
        }

        Ok(())
    }

    pub fn row(&self, row: usize) -> &SparseVector<T> {
        &self.rows[row]
    }

    pub fn rows(&self) -> impl Iterator<Item=&SparseVector<T>> {
        self.rows.iter()
    }
}

/// The fields of a book we report on, read out of a record of the books table by field name.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct BookSummary {
    pub title: String,
    pub authors: String,
    pub isbn: String,
    pub original_publication_year: String,
}
