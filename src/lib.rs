mod constants;
pub use constants::USAGE;
pub mod models;
pub use models::{BookReader, BookReport, Error, FrequencyRecord};
pub mod types;
pub mod utils;
pub use types::{CharacterFrequency, CharacterTally, WordCount};
pub use utils::{build_report, count_words, tally_characters};

use std::path::Path;

#[cfg(doctest)]
doc_comment::doctest!("../README.md");

/// Reads the book at `path` and reports its word count and letter frequencies.
///
/// Files ending in `.gz` are decompressed before being analyzed.
pub fn analyze_book<P: AsRef<Path>>(path: P) -> Result<BookReport, Error> {
    BookReport::from_path(path)
}
