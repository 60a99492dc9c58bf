// src/lib.rs
pub mod cli;
pub mod core;
pub mod error;
pub mod models;

pub use cli::{Args, run};
pub use crate::core::config::{Config, LineEnding, load_config};
pub use crate::core::stats::WordStatistics;
pub use crate::core::stats::tokenizer::{strip_trailing_punctuation, tokenize};
pub use error::StatsError;
pub use models::{AverageLength, LengthCount};
