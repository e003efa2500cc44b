pub mod error;
pub mod types;
pub mod table;
pub mod lookup;
pub mod authors;
pub mod ranking;
pub mod vsm;
pub mod tfidf;
pub mod neighbors;
pub mod report;
pub mod io;
pub mod utils;

mod usage_tests;

use crate::error::{Error, Result};
use crate::lookup::BookIndex;
use crate::report::{AuthorRow, SimilarBook};
use crate::table::RecordTable;
use crate::tfidf::TfidfTransformer;
use crate::utils::timed;

/// Ranks authors by the mean of all ratings of the books they are credited on. With
/// `filter_outliers`, authors credited on a single book only are left out.
pub fn top_rated_authors(
    books: &RecordTable,
    ratings: &RecordTable,
    num_results: usize,
    filter_outliers: bool,
) -> Result<Vec<AuthorRow>> {

    let authors_books = timed("authors_books", || authors::authors_books(books))?;
    let authors_ratings = timed("aggregate_ratings", || {
        authors::aggregate_ratings(books, ratings)
    })?;

    println!("Found {} ratings for {} authors of {} books.",
        ratings.len(), authors_ratings.num_authors(), books.len());

    let books_filter = if filter_outliers { Some(&authors_books) } else { None };

    let best = timed("best_average_ratings", || {
        ranking::best_average_ratings(&authors_ratings, num_results, books_filter)
    });

    let rows = best.into_iter()
        .enumerate()
        .map(|(position, ranked)| {
            let num_books = authors_books.get(&ranked.author)
                .map(|titles| titles.len())
                .unwrap_or(0);

            AuthorRow {
                rank: position + 1,
                author: ranked.author,
                average_rating: ranked.average_rating,
                num_ratings: ranked.num_ratings,
                num_books,
            }
        })
        .collect();

    Ok(rows)
}

/// Finds the book whose title contains `title` (the last one in file order if there are several)
/// and returns it together with its `num_results` closest books in the TF-IDF weighted tag space.
pub fn similar_books(
    books: &RecordTable,
    tags: &RecordTable,
    book_tags: &RecordTable,
    title: &str,
    num_results: usize,
    tfidf: &TfidfTransformer,
) -> Result<Vec<SimilarBook>> {

    let counts = timed("sparse_vsm", || vsm::sparse_vsm(books, tags, book_tags))?;

    let (num_books, num_tags) = counts.shape();
    println!("Embedded {} books into a space of {} tags with {} non-zero entries.",
        num_books, num_tags, counts.nnz());

    let weights = timed("tfidf_normalize", || tfidf.fit_transform(&counts))?;

    let query_book = timed("search_field_text", || books.search_field_text("title", title))?
        .ok_or_else(|| Error::NoMatch { field: "title".to_string(), text: title.to_string() })?;

    let book_index = BookIndex::from(books, "id")?;
    let query_row = book_index.row(query_book.get("id")?)?;

    let matches = timed("closest_documents", || {
        neighbors::closest_documents(&weights, weights.row(query_row), num_results)
    });

    matches.into_iter()
        .enumerate()
        .map(|(rank, neighbor)| {
            Ok(SimilarBook {
                rank,
                distance: neighbor.distance,
                book: books.at(neighbor.row)?.deserialize()?,
            })
        })
        .collect()
}
