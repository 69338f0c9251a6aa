pub mod build_report;
pub mod count_words;
pub mod is_letter;
pub mod sort_records;
pub mod tally_characters;

pub use build_report::build_report;
pub use count_words::count_words;
pub use is_letter::is_letter;
pub use sort_records::sort_records;
pub use tally_characters::tally_characters;
