use crate::constants::{CHARACTER_COUNT_HEADER, REPORT_FOOTER, REPORT_HEADER, WORD_COUNT_HEADER};
use crate::models::{BookReader, Error, FrequencyRecord};
use crate::types::WordCount;
use crate::utils::{build_report, count_words, tally_characters};
use log::info;
use std::fmt;
use std::path::{Path, PathBuf};

/// The analysis of a single book: its word count and letter frequencies.
///
/// The `Display` implementation renders the full console report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookReport {
    pub path: PathBuf,
    pub word_count: WordCount,
    pub records: Vec<FrequencyRecord>,
}

impl BookReport {
    /// Analyzes text which has already been loaded from `path`.
    pub fn from_text<P: AsRef<Path>>(path: P, text: &str) -> Self {
        let word_count = count_words(text);
        let tally = tally_characters(text);
        let records = build_report(&tally);

        info!(
            "Analyzed {:?}: {} words, {} distinct characters, {} letters",
            path.as_ref(),
            word_count,
            tally.len(),
            records.len()
        );

        Self {
            path: path.as_ref().to_path_buf(),
            word_count,
            records,
        }
    }

    /// Reads the book at `path` and analyzes it.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let text = BookReader::read_to_string(&path)?;

        Ok(Self::from_text(path, &text))
    }
}

impl fmt::Display for BookReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", REPORT_HEADER)?;
        writeln!(f, "Analyzing book found at {}...", self.path.display())?;
        writeln!(f, "{}", WORD_COUNT_HEADER)?;
        writeln!(f, "Found {} total words", self.word_count)?;
        writeln!(f, "{}", CHARACTER_COUNT_HEADER)?;

        for record in &self.records {
            writeln!(f, "{}", record)?;
        }

        writeln!(f, "{}", REPORT_FOOTER)
    }
}
