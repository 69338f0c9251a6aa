/// First line of the console report.
pub const REPORT_HEADER: &str = "============ BOOKBOT ============";
/// Introduces the word count section.
pub const WORD_COUNT_HEADER: &str = "----------- Word Count ----------";
/// Introduces the per-letter frequency section.
pub const CHARACTER_COUNT_HEADER: &str = "--------- Character Count -------";
/// Last line of the console report.
pub const REPORT_FOOTER: &str = "============= END ===============";

/// Printed to standard output when the book path argument is missing or extra
/// arguments are given.
pub const USAGE: &str = "Usage: bookbot <path_to_book>";

/// Books with this extension are decompressed before being counted.
pub const GZIP_EXTENSION: &str = "gz";
