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

use crate::error::{Error, Result};
use crate::lookup::BookIndex;
use crate::table::{Record, RecordTable};

pub const MIN_RATING: i64 = 1;
pub const MAX_RATING: i64 = 5;

/// Collapses irregular whitespace in an author name into single spaces.
pub fn normalize_author(author: &str) -> String {
    author.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// The normalized authors of a book, in the order in which they are credited. Duplicates are kept.
pub fn authors_from_book(book: &Record) -> Result<Vec<String>> {
    let authors = book.get("authors")?
        .split(',')
        .map(normalize_author)
        .collect();

    Ok(authors)
}

/// Values per author. Authors are assigned consecutive indices in the order in which they are
/// first seen, iteration follows that order.
pub struct AuthorBag<T> {
    author_dict: FnvHashMap<String, usize>,
    entries: Vec<(String, Vec<T>)>,
}

impl<T> AuthorBag<T> {

    pub fn new() -> Self {
        AuthorBag {
            author_dict: FnvHashMap::with_capacity_and_hasher(100, Default::default()),
            entries: Vec::new(),
        }
    }

    pub fn push(&mut self, author: &str, value: T) {
        let index = match self.author_dict.get(author) {
            Some(index) => *index,
            None => {
                let index = self.entries.len();
                self.author_dict.insert(author.to_string(), index);
                self.entries.push((author.to_string(), Vec::new()));
                index
            }
        };

        self.entries[index].1.push(value);
    }

    pub fn get(&self, author: &str) -> Option<&[T]> {
        self.author_dict.get(author)
            .map(|index| self.entries[*index].1.as_slice())
    }

    pub fn num_authors(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item=(&str, &[T])> {
        self.entries.iter()
            .map(|(author, values)| (author.as_str(), values.as_slice()))
    }
}

impl<T> Default for AuthorBag<T> {
    fn default() -> Self {
        AuthorBag::new()
    }
}

fn validate_rating(rating: i64) -> Result<u8> {
    if rating < MIN_RATING || rating > MAX_RATING {
        return Err(Error::InvalidRating(rating));
    }
    Ok(rating as u8)
}

/// Collects the ratings of every book for each of its authors. Books are resolved via their `id`
/// field, ratings outside of [1, 5] abort the aggregation.
pub fn aggregate_ratings(books: &RecordTable, ratings: &RecordTable) -> Result<AuthorBag<u8>> {

    let book_index = BookIndex::from(books, "id")?;

    // Authors are extracted once per book instead of once per rating
    let authors_per_book = books.iter()
        .map(|book| authors_from_book(&book))
        .collect::<Result<Vec<_>>>()?;

    let mut authors_ratings = AuthorBag::new();

    for rating_record in ratings.iter() {
        let book_row = book_index.row(rating_record.get("book_id")?)?;
        let rating = validate_rating(rating_record.parse::<i64>("rating")?)?;

        for author in authors_per_book[book_row].iter() {
            authors_ratings.push(author, rating);
        }
    }

    Ok(authors_ratings)
}

/// Titles credited to each author. Duplicate titles are not removed, so the number of entries is
/// the number of authorship credits.
pub fn authors_books(books: &RecordTable) -> Result<AuthorBag<String>> {

    let mut books_per_author = AuthorBag::new();

    for book in books.iter() {
        let title = book.get("title")?;
        for author in authors_from_book(&book)? {
            books_per_author.push(&author, title.to_string());
        }
    }

    Ok(books_per_author)
}

#[cfg(test)]
mod tests {

    use super::*;

    const BOOKS: &str = "\
id,title,authors
1,First,\"Jane   Doe , John Smith\"
2,Second,Jane Doe
3,Third,\"A, B,C\"
";

    #[test]
    fn normalize() {
        assert_eq!(normalize_author(" Jane   Doe "), "Jane Doe");
        assert_eq!(normalize_author("\tJane\n Doe"), "Jane Doe");
        assert_eq!(normalize_author("   "), "");
    }

    #[test]
    fn authors_are_split_and_normalized() {
        let books = RecordTable::from_reader(BOOKS.as_bytes()).unwrap();

        let authors = authors_from_book(&books.at(2).unwrap()).unwrap();
        assert_eq!(authors, vec!["A", "B", "C"]);

        let authors = authors_from_book(&books.at(0).unwrap()).unwrap();
        assert_eq!(authors, vec!["Jane Doe", "John Smith"]);
    }

    #[test]
    fn bag_keeps_first_seen_order() {
        let mut bag = AuthorBag::new();
        bag.push("b", 1);
        bag.push("a", 2);
        bag.push("b", 3);

        let entries: Vec<(&str, &[i32])> = bag.iter().collect();
        assert_eq!(entries, vec![("b", &[1, 3][..]), ("a", &[2][..])]);
        assert_eq!(bag.num_authors(), 2);
        assert_eq!(bag.get("b"), Some(&[1, 3][..]));
        assert_eq!(bag.get("c"), None);
    }

    #[test]
    fn ratings_accumulate_over_coauthored_books() {
        let books = RecordTable::from_reader(BOOKS.as_bytes()).unwrap();
        let ratings = RecordTable::from_reader(
            "user_id,book_id,rating\n1,1,5\n2,2,3\n1,3,4\n3,1,2\n".as_bytes()).unwrap();

        let authors_ratings = aggregate_ratings(&books, &ratings).unwrap();

        assert_eq!(authors_ratings.get("Jane Doe"), Some(&[5, 3, 2][..]));
        assert_eq!(authors_ratings.get("John Smith"), Some(&[5, 2][..]));
        assert_eq!(authors_ratings.get("C"), Some(&[4][..]));

        let order: Vec<&str> = authors_ratings.iter().map(|(author, _)| author).collect();
        assert_eq!(order, vec!["Jane Doe", "John Smith", "A", "B", "C"]);
    }

    #[test]
    fn ratings_outside_of_range_are_rejected() {
        let books = RecordTable::from_reader(BOOKS.as_bytes()).unwrap();

        for invalid in &["0", "6", "-1"] {
            let input = format!("user_id,book_id,rating\n1,1,{}\n", invalid);
            let ratings = RecordTable::from_reader(input.as_bytes()).unwrap();

            assert!(matches!(aggregate_ratings(&books, &ratings), Err(Error::InvalidRating(_))));
        }
    }

    #[test]
    fn ratings_for_unknown_books_are_rejected() {
        let books = RecordTable::from_reader(BOOKS.as_bytes()).unwrap();
        let ratings = RecordTable::from_reader("user_id,book_id,rating\n1,4,5\n".as_bytes())
            .unwrap();

        assert!(matches!(aggregate_ratings(&books, &ratings), Err(Error::UnknownKey { .. })));
    }

    #[test]
    fn books_per_author() {
        let books = RecordTable::from_reader(BOOKS.as_bytes()).unwrap();
        let books_per_author = authors_books(&books).unwrap();

        assert_eq!(books_per_author.get("Jane Doe").unwrap(), &["First".to_string(),
            "Second".to_string()]);
        assert_eq!(books_per_author.get("B").unwrap().len(), 1);
    }
}
