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

#[cfg(test)]
mod tests {

    use crate::{similar_books, top_rated_authors};
    use crate::error::Error;
    use crate::report;
    use crate::table::RecordTable;
    use crate::tfidf::TfidfTransformer;

    const BOOKS: &str = "\
id,book_id,title,authors,isbn,original_publication_year
1,119322,The Golden Compass (His Dark Materials #1),Philip Pullman,679879242,1995
2,119324,The Subtle Knife (His Dark Materials #2),Philip Pullman,679879269,1997
3,5907,The Hobbit,J.R.R. Tolkien,618260307,1937
4,24213,\"Alice's Adventures in Wonderland & Through the Looking-Glass\",\"Lewis Carroll,  John Tenniel\",451527747,1865
5,12067,Good Omens,\"Terry Pratchett, Neil Gaiman\",60853980,1990
";

    const RATINGS: &str = "\
user_id,book_id,rating
1,1,4
2,1,5
3,2,4
1,3,5
2,3,5
3,4,3
1,5,5
2,5,4
";

    const TAGS: &str = "\
tag_id,tag_name
0,fantasy
1,young-adult
2,classics
3,humor
4,to-read
";

    const BOOK_TAGS: &str = "\
goodreads_book_id,tag_id,count
119322,0,120
119322,1,80
119322,4,300
119324,0,90
119324,1,60
119324,4,250
5907,0,200
5907,2,150
5907,4,400
24213,2,180
24213,4,100
12067,0,50
12067,3,160
12067,4,220
";

    fn table(content: &str) -> RecordTable {
        RecordTable::from_reader(content.as_bytes()).unwrap()
    }

    #[test]
    fn programmatic_usage_top_authors() {

        /* The books table maps every book to its authors, the ratings reference books by id. */
        let books = table(BOOKS);
        let ratings = table(RATINGS);

        /* Without filtering, authors of a single highly rated book dominate the ranking. */
        let rows = top_rated_authors(&books, &ratings, 3, false).unwrap();

        let authors: Vec<&str> = rows.iter().map(|row| row.author.as_str()).collect();
        assert_eq!(authors, vec!["J.R.R. Tolkien", "Terry Pratchett", "Neil Gaiman"]);
        assert_eq!(rows[0].rank, 1);
        assert_eq!(rows[0].num_ratings, 2);
        assert_eq!(rows[0].num_books, 1);

        /* With outlier filtering, only Philip Pullman is credited on more than one book. */
        let rows = top_rated_authors(&books, &ratings, 10, true).unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].author, "Philip Pullman");
        assert!((rows[0].average_rating - 13.0 / 3.0).abs() < 0.000_001);
        assert_eq!(rows[0].num_books, 2);

        println!("{}", report::authors_table(&rows).draw());
    }

    #[test]
    fn programmatic_usage_similar_books() {

        let books = table(BOOKS);
        let tags = table(TAGS);
        let book_tags = table(BOOK_TAGS);

        /* The query book comes first at distance zero, followed by its neighbors. */
        let rows = similar_books(&books, &tags, &book_tags, "Golden Compass", 2,
            &TfidfTransformer::default()).unwrap();

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].rank, 0);
        assert!(rows[0].distance.abs() < 0.000_001);
        assert_eq!(rows[0].book.title, "The Golden Compass (His Dark Materials #1)");
        assert_eq!(rows[1].book.title, "The Subtle Knife (His Dark Materials #2)");

        for pair in rows.windows(2) {
            assert!(pair[0].distance <= pair[1].distance);
        }

        println!("{}", report::similar_books_table(&rows).draw());
    }

    #[test]
    fn title_search_uses_the_last_match() {
        let books = table(BOOKS);
        let tags = table(TAGS);
        let book_tags = table(BOOK_TAGS);

        let rows = similar_books(&books, &tags, &book_tags, "His Dark Materials", 0,
            &TfidfTransformer::default()).unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].book.title, "The Subtle Knife (His Dark Materials #2)");
    }

    #[test]
    fn unknown_title() {
        let books = table(BOOKS);
        let tags = table(TAGS);
        let book_tags = table(BOOK_TAGS);

        let result = similar_books(&books, &tags, &book_tags, "Dune", 5,
            &TfidfTransformer::default());

        assert!(matches!(result, Err(Error::NoMatch { .. })));
    }
}
