use std::cmp::Ordering;

use serde_derive::Serialize;

use crate::authors::AuthorBag;

/// An author with the mean of all ratings of the books they are credited on.
#[derive(Serialize, PartialEq, Debug, Clone)]
pub struct RankedAuthor {
    pub author: String,
    pub average_rating: f64,
    pub num_ratings: usize,
}

/// Descending order on the mean rating. There is no total order on floating point numbers, NaN
/// compares as equal.
fn by_average_rating_descending(a: &RankedAuthor, b: &RankedAuthor) -> Ordering {
    match a.average_rating.partial_cmp(&b.average_rating) {
        Some(ordering) => ordering.reverse(),
        None => Ordering::Equal,
    }
}

/// The `num_results` authors with the highest mean rating. If `authors_books` is supplied, only
/// authors credited on more than one book are considered. The sort is stable, so authors with the
/// same mean appear in the order in which the bag first saw them.
pub fn best_average_ratings(
    authors_ratings: &AuthorBag<u8>,
    num_results: usize,
    authors_books: Option<&AuthorBag<String>>,
) -> Vec<RankedAuthor> {

    let mut all_ratings: Vec<RankedAuthor> = authors_ratings.iter()
        .filter(|(_, ratings)| !ratings.is_empty())
        .filter(|(author, _)| {
            match authors_books {
                Some(books) => books.get(author).map(|titles| titles.len()).unwrap_or(0) > 1,
                None => true,
            }
        })
        .map(|(author, ratings)| {
            let sum: u64 = ratings.iter().map(|rating| u64::from(*rating)).sum();
            RankedAuthor {
                author: author.to_string(),
                average_rating: sum as f64 / ratings.len() as f64,
                num_ratings: ratings.len(),
            }
        })
        .collect();

    all_ratings.sort_by(by_average_rating_descending);
    all_ratings.truncate(num_results);

    all_ratings
}
