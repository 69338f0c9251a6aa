pub mod constants;
pub mod models;

use csv::Reader;
use log::warn;
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

use constants::{EXPECTED_REPORTS_CSV_PATH, TEST_FILES_DIRECTORY};
pub use models::ExpectedReport;

/// Utility to load the expected reports from a CSV file for testing and benchmarking.
pub fn load_expected_reports_from_file<P: AsRef<Path>>(
    file_path: P,
) -> Result<Vec<ExpectedReport>, Box<dyn Error>> {
    let mut expected_reports = Vec::new();
    let mut reader = Reader::from_path(file_path)?;

    for record in reader.records() {
        let record = record?;
        if record.len() != 4 {
            warn!("Skipping invalid row: {:?}", record);
            continue;
        }

        expected_reports.push(ExpectedReport {
            file_name: record[0].to_string(),
            word_count: record[1].parse()?,
            char_count: record[2].parse()?,
            letter_counts: ExpectedReport::parse_letter_counts(&record[3])?,
        });
    }

    Ok(expected_reports)
}

/// Loads the expected reports for every file under `tests/test_files`.
pub fn load_expected_reports() -> Vec<ExpectedReport> {
    load_expected_reports_from_file(&*EXPECTED_REPORTS_CSV_PATH)
        .expect("Failed to load expected reports from CSV")
}

/// Resolves the path of a file under `tests/test_files`.
pub fn test_file_path(file_name: &str) -> PathBuf {
    TEST_FILES_DIRECTORY.join(file_name)
}

/// Reads a file under `tests/test_files`, byte for byte.
pub fn read_test_file(file_name: &str) -> String {
    fs::read_to_string(test_file_path(file_name)).expect("Failed to read test file")
}
