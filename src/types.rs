use std::collections::HashMap;

// Types listed here are either shared across multiple files and/or exposed via the library.

/// The total number of whitespace-delimited words within a text document.
pub type WordCount = usize;

/// Represents the total number of occurrences of a single (lowercased) character
/// within a text document.
pub type CharacterFrequency = usize;

/// Represents a map of lowercased characters to their frequency counts within a
/// text document.
///
/// Every character is tallied, including whitespace, digits and punctuation, so the
/// sum of all values equals the character length of the source text.
pub type CharacterTally = HashMap<char, CharacterFrequency>;
