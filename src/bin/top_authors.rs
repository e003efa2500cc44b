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

const FILTER_OUTLIERS: &str = "filter-outliers";

fn main() {

    let args: Vec<String> = env::args().collect();
    let program = args[0].clone();

    let mut opts = Options::new();
    opts.optopt("d", "data-dir", "Directory containing books.csv and ratings.csv (optional, \
        defaults to ./data).", "PATH");
    opts.optopt("n", "num-results", "Number of authors to report (optional, defaults to 10).",
        "NUMBER");
    opts.optopt("o", "outputfile", "Additionally write the ranked authors as JSON lines to this \
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

    let filter_outliers = match parse_filter_outliers(&matches.free) {
        Ok(filter_outliers) => filter_outliers,
        Err(hint) => return print_usage_and_exit(&program, opts, Some(&hint)),
    };

    let data_dir = matches.opt_str("d").unwrap_or_else(|| String::from("./data"));
    let output_path = matches.opt_str("o");

    let n: usize = match matches.opt_get_default("n", 10) {
        Ok(n) => n,
        Err(failure) => {
            let hint = format!("Problem with option 'n': {}", failure.to_string());
            return print_usage_and_exit(&program, opts, Some(&hint))
        },
    };

    rank_authors(&data_dir, n, filter_outliers, output_path).unwrap();
}

/// Positional arguments are either empty or exactly `filter-outliers`. Anything else is rejected
/// instead of being ignored, so a typo cannot silently switch the filter off.
fn parse_filter_outliers(free: &[String]) -> Result<bool, String> {
    match free {
        [] => Ok(false),
        [argument] if argument == FILTER_OUTLIERS => Ok(true),
        _ => Err(format!("Unknown argument(s) '{}', the only argument accepted is '{}'.",
            free.join(" "), FILTER_OUTLIERS)),
    }
}

fn print_usage_and_exit(
    program: &str,
    opts: Options,
    hint: Option<&str>
) {

    if let Some(hint) = hint {
        eprintln!("\n{}\n", hint);
    }

    let brief = format!("Usage: {} [options] [{}]\n\nPass '{}' to ignore authors of a single \
        book. Any other positional argument is rejected.", program, FILTER_OUTLIERS,
        FILTER_OUTLIERS);
    eprint!("{}", opts.usage(&brief));
}

fn rank_authors(
    data_dir: &str,
    n: usize,
    filter_outliers: bool,
    output_path: Option<String>,
) -> Result<(), Box<dyn Error>> {

    println!("Top {} authors by average rating{}", n,
        if filter_outliers { ", ignoring authors of a single book" } else { "" });

    let files = DataFiles::in_dir(data_dir);

    let books = io::load_table(&files.books)?;
    let ratings = io::load_table(&files.ratings)?;

    let rows = bookrank::top_rated_authors(&books, &ratings, n, filter_outliers)?;

    println!("\n{}", report::authors_table(&rows).draw());

    if let Some(path) = output_path {
        println!("Writing ranked authors to {}", path);
        io::write_json(&rows, Path::new(&path))?;
    }

    println!("\n\nDone.");

    Ok(())
}

#[cfg(test)]
mod tests {

    use super::*;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| value.to_string()).collect()
    }

    #[test]
    fn filter_outliers_argument() {
        assert_eq!(parse_filter_outliers(&args(&[])), Ok(false));
        assert_eq!(parse_filter_outliers(&args(&["filter-outliers"])), Ok(true));
    }

    #[test]
    fn other_arguments_are_rejected() {
        assert!(parse_filter_outliers(&args(&["filter_outliers"])).is_err());
        assert!(parse_filter_outliers(&args(&["filter-outliers", "extra"])).is_err());

        let hint = parse_filter_outliers(&args(&["verbose"])).unwrap_err();
        assert!(hint.contains("'verbose'"));
        assert!(hint.contains("'filter-outliers'"));
    }
}
