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

use crate::error::Result;
use crate::lookup::BookIndex;
use crate::table::RecordTable;
use crate::types::SparseMatrix;

/// Tag counts per book, one row per book in file order and one column per tag. The `tag_id` of a
/// book tag is used directly as column index and must be smaller than the number of tags. If a
/// (book, tag) pair occurs more than once, the last count wins.
pub fn sparse_vsm(
    books: &RecordTable,
    tags: &RecordTable,
    book_tags: &RecordTable,
) -> Result<SparseMatrix<i64>> {

    let book_index = BookIndex::from(books, "book_id")?;

    let mut counts = SparseMatrix::new(books.len(), tags.len());

    for book_tag in book_tags.iter() {
        let book_row = book_index.row(book_tag.get("goodreads_book_id")?)?;
        let tag_column = book_tag.parse::<usize>("tag_id")?;
        let count = book_tag.parse::<i64>("count")?;

        counts.set(book_row, tag_column, count)?;
    }

    Ok(counts)
}
