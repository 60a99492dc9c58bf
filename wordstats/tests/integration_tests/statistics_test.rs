// tests/integration_tests/statistics_test.rs
use super::common::{create_test_file, example_path};
use anyhow::Result;
use tempfile::TempDir;
use wordstats::{LengthCount, WordStatistics};

#[test]
fn test_number_of_words() -> Result<()> {
    let stats = WordStatistics::from_path(example_path())?;
    assert_eq!(stats.number_of_words(), 9, "number of words incorrect");
    Ok(())
}

#[test]
fn test_average_word_length() -> Result<()> {
    let stats = WordStatistics::from_path(example_path())?;
    assert_eq!(
        stats.average_word_length().to_string(),
        "4.556",
        "average length of words incorrect"
    );
    assert_eq!(stats.average_word_length().thousandths(), 4556);
    Ok(())
}

#[test]
fn test_modal_length() -> Result<()> {
    let stats = WordStatistics::from_path(example_path())?;
    let modal = stats.modal_length();

    assert_eq!(modal.len(), 2, "results size incorrect");
    assert_eq!(modal[0], LengthCount::new(4, 2), "first modal incorrect");
    assert_eq!(modal[1], LengthCount::new(5, 2), "second modal incorrect");
    Ok(())
}

#[test]
fn test_list_occurrences_of_each_length() -> Result<()> {
    let stats = WordStatistics::from_path(example_path())?;
    let expected = vec![
        LengthCount::new(1, 1),
        LengthCount::new(2, 1),
        LengthCount::new(3, 1),
        LengthCount::new(4, 2),
        LengthCount::new(5, 2),
        LengthCount::new(7, 1),
        LengthCount::new(10, 1),
    ];

    assert_eq!(stats.list_occurrences_of_each_length(), expected);
    Ok(())
}

#[test]
fn test_properties_hold_for_mixed_document() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let text = "The quick brown fox, jumps over the lazy dog.\n\
                Pack my box with five dozen liquor jugs..\n\
                \t  Sphinx of black quartz, judge my vow.  ";
    let path = create_test_file(temp_dir.path(), "pangrams.txt", text)?;
    let stats = WordStatistics::from_path(&path)?;

    let distribution = stats.list_occurrences_of_each_length();
    let total: u64 = distribution.iter().map(LengthCount::occurrences).sum();
    assert_eq!(total, stats.number_of_words(), "counts must add up");
    assert_eq!(stats.number_of_words(), 24);

    let max = distribution
        .iter()
        .map(LengthCount::occurrences)
        .max()
        .unwrap_or(0);
    let modal = stats.modal_length();
    assert!(!modal.is_empty(), "modal set must not be empty");
    assert!(modal.iter().all(|count| count.occurrences() == max));
    assert!(
        modal
            .windows(2)
            .all(|pair| pair[0].word_length() < pair[1].word_length()),
        "modal lengths must be ascending"
    );

    let lengths: u64 = distribution
        .iter()
        .map(|count| u64::try_from(count.word_length()).unwrap_or(u64::MAX) * count.occurrences())
        .sum();
    assert_eq!(lengths, stats.total_characters());
    Ok(())
}

#[test]
fn test_double_period_keeps_one() -> Result<()> {
    let stats = WordStatistics::from_text("ok.. ok.")?;
    assert_eq!(
        stats.list_occurrences_of_each_length(),
        vec![LengthCount::new(2, 1), LengthCount::new(3, 1)],
        "\"ok..\" should keep one period"
    );
    Ok(())
}

#[test]
fn test_reader_and_path_agree() -> Result<()> {
    let from_path = WordStatistics::from_path(example_path())?;
    let file = std::fs::File::open(example_path())?;
    let from_reader = WordStatistics::from_reader(file)?;
    assert_eq!(from_path, from_reader);
    Ok(())
}
