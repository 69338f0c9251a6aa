use crate::types::CharacterTally;

/// Counts the frequency of each character in the given text, case-insensitively.
///
/// Characters are lowercased one at a time before being tallied, so `'A'` and `'a'`
/// accumulate into the same key. Whitespace, digits and punctuation are tallied too;
/// filtering happens later, in [`build_report`](crate::utils::build_report).
///
/// Note: A character whose lowercase form spans more than one code point (e.g. `'İ'`)
/// is tallied as-is, which keeps the tally total equal to `text.chars().count()`.
///
/// # Example
/// ```
/// use bookbot::utils::tally_characters;
///
/// let tally = tally_characters("Hello");
/// assert_eq!(tally.get(&'l'), Some(&2));
/// assert_eq!(tally.get(&'h'), Some(&1));
/// assert_eq!(tally.get(&'H'), None);
/// ```
pub fn tally_characters(text: &str) -> CharacterTally {
    let mut tally = CharacterTally::new();

    for character in text.chars() {
        *tally.entry(lowercase_char(character)).or_insert(0) += 1;
    }

    tally
}

fn lowercase_char(character: char) -> char {
    let mut lowercase = character.to_lowercase();

    match (lowercase.next(), lowercase.next()) {
        (Some(single), None) => single,
        _ => character,
    }
}
