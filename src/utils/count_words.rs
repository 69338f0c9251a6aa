use crate::types::WordCount;

/// Counts the number of words in the given text.
///
/// Any run of whitespace (spaces, tabs, line breaks) acts as a single delimiter,
/// and leading or trailing whitespace never yields an empty word. Punctuation stays
/// attached to the word it touches.
///
/// # Example
/// ```
/// use bookbot::utils::count_words;
///
/// assert_eq!(count_words("Hello world this is a test"), 6);
/// assert_eq!(count_words("  \n\t "), 0);
/// ```
pub fn count_words(text: &str) -> WordCount {
    text.split_whitespace().count()
}
