// src/cli.rs
use anyhow::{Context as _, Result};
use clap::Parser;
use std::env;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::core::config::{Config, LineEnding, load_config, read_config};
use crate::core::stats::WordStatistics;
use crate::error::StatsError;

/// Path that selects standard input instead of a file.
pub const STDIN_PATH: &str = "-";

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Text file to report on ("-" reads standard input)
    pub file: Option<PathBuf>,

    /// Line ending between report lines (overrides .wordstats.toml)
    #[arg(short = 'l', long, value_enum)]
    pub line_ending: Option<LineEnding>,

    /// Configuration file to use instead of searching for .wordstats.toml
    #[arg(short = 'c', long)]
    pub config: Option<PathBuf>,
}

/// Computes the statistics report described by `args`.
///
/// # Errors
///
/// This function may return an error if:
/// * No input file was given
/// * The input cannot be read or contains no words
/// * A configuration file exists but cannot be read or parsed
#[inline]
pub fn build_report(args: &Args) -> Result<String> {
    let file = args.file.as_deref().ok_or_else(|| {
        StatsError::InvalidArgument(String::from("an input file path is required"))
    })?;
    let reads_stdin = file == Path::new(STDIN_PATH);

    let config = resolve_config(args, file, reads_stdin)?;
    let line_ending = args.line_ending.unwrap_or(config.report.line_ending);
    debug!(?line_ending, "resolved report settings");

    let stats = if reads_stdin {
        WordStatistics::from_reader(io::stdin().lock())
            .context("Failed to compute statistics for standard input")?
    } else {
        WordStatistics::from_path(file).with_context(|| {
            format!("Failed to compute statistics for: {}", file.display())
        })?
    };

    Ok(stats.render_report(line_ending))
}

fn resolve_config(args: &Args, file: &Path, reads_stdin: bool) -> Result<Config> {
    if let Some(path) = &args.config {
        return read_config(path);
    }

    let current_dir = env::current_dir()?;
    if reads_stdin {
        return load_config(&current_dir);
    }

    let absolute_file = if file.is_absolute() {
        file.to_path_buf()
    } else {
        current_dir.join(file)
    };
    let search_dir = absolute_file.parent().unwrap_or(current_dir.as_path());
    load_config(search_dir)
}

/// Prints the report for `args` to standard output.
///
/// # Errors
///
/// Returns any error from [`build_report`].
#[inline]
pub fn run(args: Args) -> Result<()> {
    let report = build_report(&args)?;
    println!("{report}");
    Ok(())
}
