/// The known-good analysis of one file under `tests/test_files`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpectedReport {
    pub file_name: String,
    pub word_count: usize,
    pub char_count: usize,
    /// Letter counts in report order (count descending, then character ascending).
    pub letter_counts: Vec<(char, usize)>,
}

impl ExpectedReport {
    /// Parses a `letter_counts` column such as `e=16;t=16;n=10`.
    pub fn parse_letter_counts(column: &str) -> Result<Vec<(char, usize)>, String> {
        column
            .split(';')
            .filter(|entry| !entry.is_empty())
            .map(|entry| {
                let (letter, count) = entry
                    .split_once('=')
                    .ok_or_else(|| format!("Malformed letter count: {:?}", entry))?;

                let mut letters = letter.chars();
                let letter = match (letters.next(), letters.next()) {
                    (Some(letter), None) => letter,
                    _ => return Err(format!("Expected a single character, got {:?}", letter)),
                };

                let count = count
                    .parse::<usize>()
                    .map_err(|err| format!("Invalid count in {:?}: {}", entry, err))?;

                Ok((letter, count))
            })
            .collect()
    }
}
