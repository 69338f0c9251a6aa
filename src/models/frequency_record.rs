use crate::types::CharacterFrequency;
use std::fmt;

/// A single entry of a character frequency report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrequencyRecord {
    /// An alphabetic, lowercased character.
    pub char: char,
    /// The number of times the character occurs in the text.
    pub num: CharacterFrequency,
}

impl FrequencyRecord {
    pub fn new(char: char, num: CharacterFrequency) -> Self {
        Self { char, num }
    }
}

impl fmt::Display for FrequencyRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.char, self.num)
    }
}
