pub mod expected_report;
pub use expected_report::ExpectedReport;
