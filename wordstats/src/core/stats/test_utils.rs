use anyhow::Result;
use std::fs::{self, File};
use std::io::Write as _;
use std::path::PathBuf;
use tempfile::TempDir;

/// Nine words whose lengths are 1, 2, 3, 4, 5, 4, 5, 7 and 10.
pub const EXAMPLE_TEXT: &str = "A ab abc abcd abcde.\nwxyz vwxyz, abcdefg abcdefghij\n";

pub fn create_test_file(dir: &TempDir, name: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.path().join(name);
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = File::create(&file_path)?;
    file.write_all(content.as_bytes())?;
    Ok(file_path)
}
