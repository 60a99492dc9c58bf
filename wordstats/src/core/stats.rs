// src/core/stats.rs
pub mod report;
#[cfg(test)]
pub(crate) mod test_utils;
pub mod tokenizer;

use crate::core::config::LineEnding;
use crate::error::{Result, StatsError};
use crate::models::{AverageLength, LengthCount};
use std::collections::BTreeMap;
use std::fs;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

/// Word statistics for a single text document.
///
/// A word is any contiguous block of non-whitespace characters, whether
/// alphabetical, numerical or special. One trailing `.` or `,` is not part of
/// the word and is not counted in its length.
///
/// Built once from a complete document and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordStatistics {
    word_count: u64,
    length_counts: BTreeMap<usize, LengthCount>,
    total_characters: u64,
    average_word_length: AverageLength,
    modal_lengths: Vec<LengthCount>,
}

impl WordStatistics {
    /// Computes statistics for the document at `path`.
    ///
    /// # Errors
    ///
    /// This function may return an error if:
    /// * `path` is empty (`InvalidArgument`)
    /// * The file does not exist or cannot be read as UTF-8 text (`SourceNotFound`)
    /// * The file contains no words (`EmptyDocument`)
    #[inline]
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if path.as_os_str().is_empty() {
            return Err(StatsError::InvalidArgument(String::from(
                "source path cannot be empty",
            )));
        }

        debug!(path = %path.display(), "loading word statistics");
        let content = fs::read_to_string(path).map_err(|source| StatsError::SourceNotFound {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_text(&content)
    }

    /// Computes statistics for everything remaining in `reader`.
    ///
    /// # Errors
    ///
    /// This function may return an error if:
    /// * Reading fails or the input is not UTF-8 text (`Unreadable`)
    /// * The input contains no words (`EmptyDocument`)
    #[inline]
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self> {
        let mut content = String::new();
        reader.read_to_string(&mut content)?;
        Self::from_text(&content)
    }

    /// Computes statistics for an in-memory document.
    ///
    /// # Errors
    ///
    /// Returns `EmptyDocument` if `text` contains no words.
    #[inline]
    pub fn from_text(text: &str) -> Result<Self> {
        let mut accumulator = Accumulator::new();
        for word in tokenizer::words(text) {
            accumulator.add_word(word);
        }
        accumulator.finish()
    }

    /// Total number of words in the document.
    #[inline]
    #[must_use]
    pub const fn number_of_words(&self) -> u64 {
        self.word_count
    }

    /// Average length of all words, to three decimal places.
    #[inline]
    #[must_use]
    pub const fn average_word_length(&self) -> AverageLength {
        self.average_word_length
    }

    /// The most frequently occurring word length(s), shortest first.
    ///
    /// There is more than one entry when several lengths tie for the highest count.
    #[inline]
    #[must_use]
    pub fn modal_length(&self) -> &[LengthCount] {
        &self.modal_lengths
    }

    /// Number of words of each observed length, shortest first.
    #[inline]
    #[must_use]
    pub fn list_occurrences_of_each_length(&self) -> Vec<LengthCount> {
        self.length_counts.values().copied().collect()
    }

    /// Sum of the lengths of all words.
    #[inline]
    #[must_use]
    pub const fn total_characters(&self) -> u64 {
        self.total_characters
    }

    /// Renders the report using the platform line separator.
    #[inline]
    #[must_use]
    pub fn produce_report(&self) -> String {
        self.render_report(LineEnding::Native)
    }

    #[inline]
    #[must_use]
    pub fn render_report(&self, line_ending: LineEnding) -> String {
        report::render(self, line_ending)
    }
}

/// Running totals for a document, fed one word at a time.
#[derive(Debug, Default)]
pub struct Accumulator {
    word_count: u64,
    length_counts: BTreeMap<usize, LengthCount>,
    total_characters: u64,
}

impl Accumulator {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts one word whose trailing punctuation has already been removed.
    #[inline]
    pub fn add_word(&mut self, word: &str) {
        let length = word.chars().count();
        let length_u64 = u64::try_from(length).unwrap_or(u64::MAX);

        self.word_count = self.word_count.saturating_add(1);
        self.total_characters = self.total_characters.saturating_add(length_u64);
        self.length_counts
            .entry(length)
            .or_insert_with(|| LengthCount::empty(length))
            .increment();
    }

    /// Derives the average and modal lengths.
    ///
    /// # Errors
    ///
    /// Returns `EmptyDocument` if no words were added.
    #[inline]
    pub fn finish(self) -> Result<WordStatistics> {
        let average_word_length =
            AverageLength::from_ratio(self.total_characters, self.word_count)
                .ok_or(StatsError::EmptyDocument)?;
        let modal_lengths = modal_lengths(&self.length_counts);

        info!(
            words = self.word_count,
            distinct_lengths = self.length_counts.len(),
            average = %average_word_length,
            "computed word statistics"
        );

        Ok(WordStatistics {
            word_count: self.word_count,
            length_counts: self.length_counts,
            total_characters: self.total_characters,
            average_word_length,
            modal_lengths,
        })
    }
}

/// Every entry sharing the highest occurrence count, in key order.
fn modal_lengths(length_counts: &BTreeMap<usize, LengthCount>) -> Vec<LengthCount> {
    let max = length_counts
        .values()
        .map(LengthCount::occurrences)
        .max()
        .unwrap_or(0);

    length_counts
        .values()
        .filter(|count| count.occurrences() == max)
        .copied()
        .collect()
}
