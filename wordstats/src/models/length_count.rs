// src/models/length_count.rs
use std::fmt;

/// The number of words seen with one particular length.
///
/// For example 102 words that are 4 characters long.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LengthCount {
    word_length: usize,
    occurrences: u64,
}

impl LengthCount {
    #[inline]
    #[must_use]
    pub const fn new(word_length: usize, occurrences: u64) -> Self {
        Self {
            word_length,
            occurrences,
        }
    }

    /// A length that has not been counted yet.
    pub(crate) const fn empty(word_length: usize) -> Self {
        Self::new(word_length, 0)
    }

    /// Number of characters in each word counted here.
    #[inline]
    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.word_length
    }

    /// Number of words with this length.
    #[inline]
    #[must_use]
    pub const fn occurrences(&self) -> u64 {
        self.occurrences
    }

    pub(crate) fn increment(&mut self) {
        self.occurrences = self.occurrences.saturating_add(1);
    }
}

impl fmt::Display for LengthCount {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Number of words of length {} is {}",
            self.word_length, self.occurrences
        )
    }
}
