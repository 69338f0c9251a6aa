use unicode_general_category::{get_general_category, GeneralCategory};

/// Returns `true` if the character is a letter of any alphabet.
///
/// Only the Unicode letter categories count (`Lu`, `Ll`, `Lt`, `Lm`, `Lo`). Digits,
/// punctuation, whitespace, symbols (e.g. `'ⓐ'`), letter-like numerals (e.g. `'ⅻ'`) and
/// combining marks (e.g. the Devanagari vowel sign `'ा'`) are rejected.
///
/// # Example
/// ```
/// use bookbot::utils::is_letter;
///
/// assert!(is_letter('e'));
/// assert!(is_letter('ж'));
/// assert!(!is_letter('ⓐ'));
/// assert!(!is_letter('7'));
/// ```
pub fn is_letter(character: char) -> bool {
    matches!(
        get_general_category(character),
        GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter
    )
}
