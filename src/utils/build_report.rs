use crate::models::FrequencyRecord;
use crate::types::CharacterTally;
use crate::utils::{is_letter, sort_records};

/// Converts a character tally into a list of frequency records for reporting.
///
/// Only letters (of any alphabet) are kept; digits, punctuation, whitespace,
/// symbols and combining marks are discarded. The records are sorted by
/// count, highest first, with ties ordered by character.
///
/// # Example
/// ```
/// use bookbot::models::FrequencyRecord;
/// use bookbot::types::CharacterTally;
/// use bookbot::utils::build_report;
///
/// let tally: CharacterTally = [('a', 5), ('b', 3), ('c', 8), ('!', 2), (' ', 10)]
///     .into_iter()
///     .collect();
///
/// assert_eq!(
///     build_report(&tally),
///     vec![
///         FrequencyRecord::new('c', 8),
///         FrequencyRecord::new('a', 5),
///         FrequencyRecord::new('b', 3),
///     ]
/// );
/// ```
pub fn build_report(tally: &CharacterTally) -> Vec<FrequencyRecord> {
    let mut records: Vec<FrequencyRecord> = tally
        .iter()
        .filter(|(character, _)| is_letter(**character))
        .map(|(&character, &num)| FrequencyRecord::new(character, num))
        .collect();

    sort_records(&mut records);

    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::tally_characters;

    fn tally_of(pairs: &[(char, usize)]) -> CharacterTally {
        pairs.iter().cloned().collect()
    }

    #[test]
    fn test_build_report_filters_and_sorts() {
        let tally = tally_of(&[('a', 5), ('b', 3), ('c', 8), ('!', 2), (' ', 10)]);

        assert_eq!(
            build_report(&tally),
            vec![
                FrequencyRecord::new('c', 8),
                FrequencyRecord::new('a', 5),
                FrequencyRecord::new('b', 3),
            ]
        );
    }

    #[test]
    fn test_build_report_no_alphabetic_characters() {
        let tally = tally_of(&[('!', 5), (' ', 3), ('1', 2)]);

        assert!(build_report(&tally).is_empty());
    }

    #[test]
    fn test_build_report_empty_tally() {
        assert!(build_report(&CharacterTally::new()).is_empty());
    }

    #[test]
    fn test_build_report_keeps_non_ascii_letters() {
        let tally = tally_of(&[('é', 2), ('ж', 7), ('7', 9), ('€', 1)]);

        assert_eq!(
            build_report(&tally),
            vec![FrequencyRecord::new('ж', 7), FrequencyRecord::new('é', 2)]
        );
    }

    #[test]
    fn test_build_report_drops_symbols_numerals_and_marks() {
        let tally = tally_of(&[('ⓐ', 4), ('\u{093E}', 3), ('ⅻ', 2), ('क', 1)]);

        assert_eq!(build_report(&tally), vec![FrequencyRecord::new('क', 1)]);
    }

    #[test]
    fn test_build_report_from_circled_and_devanagari_text() {
        let report = build_report(&tally_characters("Ⓐ ⓑ Ⅻ का"));

        assert_eq!(report, vec![FrequencyRecord::new('क', 1)]);
    }

    #[test]
    fn test_build_report_records_match_tally() {
        let text = "This is a sample text for testing our BookBot implementation.\n\
                    It contains various characters, punctuation marks, and repeated letters.";
        let tally = tally_characters(text);
        let report = build_report(&tally);

        assert!(!report.is_empty());

        for record in &report {
            assert!(is_letter(record.char));
            assert_eq!(tally.get(&record.char), Some(&record.num));
        }

        for pair in report.windows(2) {
            assert!(pair[0].num >= pair[1].num);
        }

        let letter_keys = tally.keys().filter(|&&c| is_letter(c)).count();
        assert_eq!(report.len(), letter_keys);
    }
}
