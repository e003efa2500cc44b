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

use std::io;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong while loading the tables and running the analyses. None of these
/// are recovered from, the binaries abort on the first one.
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unknown field '{0}'")]
    UnknownField(String),

    #[error("Field '{0}' occurs more than once in the header")]
    DuplicateField(String),

    #[error("Row {index} is out of bounds for a table with {len} rows")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("Cannot parse value '{value}' of field '{field}'")]
    InvalidValue { field: String, value: String },

    #[error("Rating {0} is not within [1, 5]")]
    InvalidRating(i64),

    #[error("No book with {field} '{key}'")]
    UnknownKey { field: String, key: String },

    #[error("More than one book with {field} '{key}'")]
    DuplicateKey { field: String, key: String },

    #[error("Cell ({row}, {column}) is outside of a {num_rows}x{num_columns} matrix")]
    CellOutOfBounds { row: usize, column: usize, num_rows: usize, num_columns: usize },

    #[error("Expected a matrix with {expected} columns, found {found}")]
    ShapeMismatch { expected: usize, found: usize },

    #[error("No book whose {field} contains '{text}'")]
    NoMatch { field: String, text: String },
}
