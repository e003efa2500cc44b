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
use std::io::prelude::*;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::Result;
use crate::table::RecordTable;
use crate::utils;

/// Locations of the input tables, all of them are expected in a single data directory.
#[derive(Debug, Clone, PartialEq)]
pub struct DataFiles {
    pub books: PathBuf,
    pub ratings: PathBuf,
    pub tags: PathBuf,
    pub book_tags: PathBuf,
}

impl DataFiles {

    pub fn in_dir<P: AsRef<Path>>(data_dir: P) -> Self {
        let data_dir = data_dir.as_ref();

        DataFiles {
            books: data_dir.join("books.csv"),
            ratings: data_dir.join("ratings.csv"),
            tags: data_dir.join("tags.csv"),
            book_tags: data_dir.join("book_tags.csv"),
        }
    }
}

/// Loads a table and reports the loading time.
pub fn load_table(path: &Path) -> Result<RecordTable> {
    let label = format!("RecordTable({})", path.display());
    let table = utils::timed(&label, || RecordTable::from_path(path))?;

    println!("Read {} records from {}", table.len(), path.display());

    Ok(table)
}

/// Output rows as JSON, one object per line, to a file at the specified path.
pub fn write_json<T: Serialize>(rows: &[T], output_path: &Path) -> Result<()> {

    let mut out = BufWriter::new(File::create(output_path)?);

    for row in rows.iter() {
        writeln!(out, "{}", serde_json::to_string(row)?)?;
    }

    out.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {

    use super::*;
    use serde_json::Value;

    use crate::report::{AuthorRow, SimilarBook};
    use crate::types::BookSummary;

    #[test]
    fn files_in_data_dir() {
        let files = DataFiles::in_dir("./data");

        assert_eq!(files.books, Path::new("./data/books.csv"));
        assert_eq!(files.ratings, Path::new("./data/ratings.csv"));
        assert_eq!(files.tags, Path::new("./data/tags.csv"));
        assert_eq!(files.book_tags, Path::new("./data/book_tags.csv"));
    }

    #[test]
    fn missing_tables_fail() {
        let files = DataFiles::in_dir("/nonexistent");
        assert!(load_table(&files.books).is_err());
    }

    fn json_lines(path: &Path) -> Vec<Value> {
        std::fs::read_to_string(path).unwrap()
            .lines()
            .map(|line| serde_json::from_str::<Value>(line).unwrap())
            .collect()
    }

    #[test]
    fn ranked_authors_as_json_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("authors.json");

        let rows = vec![
            AuthorRow {
                rank: 1,
                author: "Bill Watterson".to_string(),
                average_rating: 4.5,
                num_ratings: 12,
                num_books: 3,
            },
            AuthorRow {
                rank: 2,
                author: "Neil Gaiman".to_string(),
                average_rating: 4.25,
                num_ratings: 4,
                num_books: 2,
            },
        ];

        write_json(&rows, &path).unwrap();

        let lines = json_lines(&path);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0]["rank"], 1);
        assert_eq!(lines[0]["author"], "Bill Watterson");
        assert_eq!(lines[1]["average_rating"], 4.25);
        assert_eq!(lines[1]["num_books"], 2);
    }

    #[test]
    fn similar_books_are_flattened() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("similar.json");

        let rows = vec![SimilarBook {
            rank: 0,
            distance: 0.0,
            book: BookSummary {
                title: "The Golden Compass".to_string(),
                authors: "Philip Pullman".to_string(),
                isbn: "679879242".to_string(),
                original_publication_year: "1995".to_string(),
            },
        }];

        write_json(&rows, &path).unwrap();

        let lines = json_lines(&path);
        assert_eq!(lines.len(), 1);

        let object = lines[0].as_object().unwrap();
        assert!(object.get("book").is_none());
        assert_eq!(object["rank"], 0);
        assert_eq!(object["distance"], 0.0);
        assert_eq!(object["title"], "The Golden Compass");
        assert_eq!(object["authors"], "Philip Pullman");
        assert_eq!(object["original_publication_year"], "1995");
    }

    #[test]
    fn writing_into_a_missing_directory_fails() {
        let rows: Vec<AuthorRow> = Vec::new();
        let result = write_json(&rows, Path::new("/nonexistent/authors.json"));
        assert!(result.is_err());
    }
}
