// src/core/stats/report.rs
use crate::core::config::LineEnding;
use crate::core::stats::WordStatistics;
use std::fmt::Write as _;

/// Builds the multi-line statistics report.
///
/// One line each for word count and average, one line per word length
/// (shortest first), then a closing sentence naming the modal length(s).
/// There is no line ending after the last line.
#[must_use]
pub fn render(stats: &WordStatistics, line_ending: LineEnding) -> String {
    let eol = line_ending.as_str();
    let mut report = String::new();

    let _ = write!(report, "Word count = {}{eol}", stats.number_of_words());
    let _ = write!(
        report,
        "Average word length = {}{eol}",
        stats.average_word_length()
    );
    for length_count in stats.list_occurrences_of_each_length() {
        let _ = write!(report, "{length_count}{eol}");
    }
    report.push_str(&modal_summary(stats));

    report
}

fn modal_summary(stats: &WordStatistics) -> String {
    let modal = stats.modal_length();
    let occurrences = modal.first().map_or(0, |count| count.occurrences());
    let plural = if modal.len() > 1 { "s" } else { "" };
    let lengths = modal
        .iter()
        .map(|count| count.word_length().to_string())
        .collect::<Vec<_>>()
        .join(" & ");

    format!(
        "The most frequently occurring word length is {occurrences}, for word length{plural} of {lengths}"
    )
}
