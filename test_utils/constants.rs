#![allow(unused)] // Ignore due to all constants not being utilized across all test targets

use std::path::PathBuf;
use std::sync::LazyLock;

macro_rules! define_path {
    ($($segment:expr),*) => {{
        PathBuf::from_iter(vec![$($segment),*])
    }};
}

// Lazy-initialized static variables
pub static TEST_FILES_DIRECTORY: LazyLock<PathBuf> =
    LazyLock::new(|| define_path!(env!("CARGO_MANIFEST_DIR"), "..", "tests", "test_files"));

pub static EXPECTED_REPORTS_CSV_PATH: LazyLock<PathBuf> = LazyLock::new(|| {
    define_path!(
        env!("CARGO_MANIFEST_DIR"),
        "..",
        "tests",
        "test_data_files",
        "expected_reports.csv"
    )
});
