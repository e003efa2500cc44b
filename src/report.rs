use serde_derive::Serialize;

use crate::types::BookSummary;

/// A line of the top authors report.
#[derive(Serialize, PartialEq, Debug, Clone)]
pub struct AuthorRow {
    pub rank: usize,
    pub author: String,
    pub average_rating: f64,
    pub num_ratings: usize,
    pub num_books: usize,
}

/// A line of the similar books report. Rank zero is the query book.
#[derive(Serialize, PartialEq, Debug, Clone)]
pub struct SimilarBook {
    pub rank: usize,
    pub distance: f64,
    #[serde(flatten)]
    pub book: BookSummary,
}

pub fn format_float(value: f64) -> String {
    format!("{:.3}", value)
}

/// Console table with fixed column widths. Cell contents are wrapped at word boundaries, words
/// longer than a column are split.
pub struct TextTable {
    widths: Vec<usize>,
    header: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl TextTable {

    pub fn new(header: &[&str], widths: &[usize]) -> Self {
        debug_assert_eq!(header.len(), widths.len(), "Every column needs a width");

        TextTable {
            widths: widths.iter().map(|width| (*width).max(1)).collect(),
            header: header.iter().map(|name| name.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, cells: Vec<String>) {
        debug_assert_eq!(cells.len(), self.widths.len(), "Row length must match the header");
        self.rows.push(cells);
    }

    pub fn draw(&self) -> String {
        let border = self.rule('-');

        let mut lines = vec![border.clone()];
        lines.extend(self.draw_row(&self.header, true));
        lines.push(self.rule('='));

        for row in self.rows.iter() {
            lines.extend(self.draw_row(row, false));
            lines.push(border.clone());
        }

        lines.join("\n")
    }

    fn rule(&self, symbol: char) -> String {
        let mut line = String::from("+");
        for width in self.widths.iter() {
            line.extend(std::iter::repeat(symbol).take(width + 2));
            line.push('+');
        }
        line
    }

    fn draw_row(&self, cells: &[String], centered: bool) -> Vec<String> {
        let wrapped: Vec<Vec<String>> = cells.iter()
            .zip(self.widths.iter())
            .map(|(cell, width)| wrap(cell, *width))
            .collect();

        let height = wrapped.iter().map(|lines| lines.len()).max().unwrap_or(1);

        (0..height)
            .map(|line_index| {
                let mut line = String::from("|");
                for (lines, width) in wrapped.iter().zip(self.widths.iter()) {
                    let text = lines.get(line_index).map(|text| text.as_str()).unwrap_or("");
                    let padded = if centered {
                        format!(" {:^width$} |", text, width = width)
                    } else {
                        format!(" {:<width$} |", text, width = width)
                    };
                    line.push_str(&padded);
                }
                line
            })
            .collect()
    }
}

/// Greedy word wrap, counted in characters.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in text.split_whitespace() {
        let chars: Vec<char> = word.chars().collect();

        for chunk in chars.chunks(width) {
            let chunk_len = chunk.len();

            if current_len > 0 && current_len + 1 + chunk_len > width {
                lines.push(std::mem::replace(&mut current, String::new()));
                current_len = 0;
            }

            if current_len > 0 {
                current.push(' ');
                current_len += 1;
            }

            current.extend(chunk.iter());
            current_len += chunk_len;
        }
    }

    if current_len > 0 || lines.is_empty() {
        lines.push(current);
    }

    lines
}

pub fn authors_table(rows: &[AuthorRow]) -> TextTable {
    let mut table = TextTable::new(
        &["Number", "Author", "Average Rating", "Number of Entries", "Number of Books"],
        &[10, 20, 20, 20, 20],
    );

    for row in rows.iter() {
        table.add_row(vec![
            row.rank.to_string(),
            row.author.clone(),
            format_float(row.average_rating),
            row.num_ratings.to_string(),
            row.num_books.to_string(),
        ]);
    }

    table
}

pub fn similar_books_table(rows: &[SimilarBook]) -> TextTable {
    let mut table = TextTable::new(
        &["Number", "Distance", "Title", "Authors", "Isbn", "Publication Year"],
        &[10, 10, 35, 35, 10, 15],
    );

    for row in rows.iter() {
        table.add_row(vec![
            row.rank.to_string(),
            format_float(row.distance),
            row.book.title.clone(),
            row.book.authors.clone(),
            row.book.isbn.clone(),
            row.book.original_publication_year.clone(),
        ]);
    }

    table
}
