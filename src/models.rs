pub mod book_reader;
pub use book_reader::BookReader;

pub mod book_report;
pub use book_report::BookReport;

pub mod error;
pub use error::Error;

pub mod frequency_record;
pub use frequency_record::FrequencyRecord;
