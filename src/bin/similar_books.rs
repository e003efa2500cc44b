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

use std::env;
use std::error::Error;
use std::path::Path;

use getopts::Options;

use bookrank::io::{self, DataFiles};
use bookrank::report;
use bookrank::tfidf::TfidfTransformer;

fn main() {

    let args: Vec<String> = env::args().collect();
    let program = args[0].clone();

    let mut opts = Options::new();
    opts.optopt("d", "data-dir", "Directory containing books.csv, tags.csv and book_tags.csv \
        (optional, defaults to ./data).", "PATH");
    opts.optopt("t", "title", "Part of the title of the book to find similar books for \
        (optional, defaults to 'The Golden Compass'). If several titles match, the last one in \
        books.csv is used.", "TEXT");
    opts.optopt("n", "num-results", "Number of similar books to report in addition to the book \
        itself (optional, defaults to 10).", "NUMBER");
    opts.optopt("o", "outputfile", "Additionally write the similar books as JSON lines to this \
        file (optional).", "PATH");
    opts.optflag("h", "help", "Print this help menu");

    let matches = match opts.parse(&args[1..]) {
        Ok(matches) => matches,
        Err(failure) => {
            let hint = failure.to_string();
            return print_usage_and_exit(&program, opts, Some(&hint))
        },
    };

    if matches.opt_present("h") {
        return print_usage_and_exit(&program, opts, None);
    }

    if !matches.free.is_empty() {
        let hint = format!("Unexpected arguments: {}", matches.free.join(" "));
        return print_usage_and_exit(&program, opts, Some(&hint));
    }

    let data_dir = matches.opt_str("d").unwrap_or_else(|| String::from("./data"));
    let title = matches.opt_str("t").unwrap_or_else(|| String::from("The Golden Compass"));
    let output_path = matches.opt_str("o");

    let n: usize = match matches.opt_get_default("n", 10) {
        Ok(n) => n,
        Err(failure) => {
            let hint = format!("Problem with option 'n': {}", failure.to_string());
            return print_usage_and_exit(&program, opts, Some(&hint))
        },
    };

    find_similar_books(&data_dir, &title, n, output_path).unwrap();
}

fn print_usage_and_exit(
    program: &str,
    opts: Options,
    hint: Option<&str>
) {

    if let Some(hint) = hint {
        eprintln!("\n{}\n", hint);
    }

    let brief = format!("Usage: {} [options]", program);
    eprint!("{}", opts.usage(&brief));
}

fn find_similar_books(
    data_dir: &str,
    title: &str,
    n: usize,
    output_path: Option<String>,
) -> Result<(), Box<dyn Error>> {

    println!("The {} books most similar to '{}' by their tags\n", n, title);

    let files = DataFiles::in_dir(data_dir);

    let books = io::load_table(&files.books)?;
    let tags = io::load_table(&files.tags)?;
    let book_tags = io::load_table(&files.book_tags)?;

    let rows = bookrank::similar_books(&books, &tags, &book_tags, title, n,
        &TfidfTransformer::default())?;

    println!("{}", report::similar_books_table(&rows).draw());

    if let Some(path) = output_path {
        println!("Writing similar books to {}", path);
        io::write_json(&rows, Path::new(&path))?;
    }

    println!("\n\nDone.");

    Ok(())
}
