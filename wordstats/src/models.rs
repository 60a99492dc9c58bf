// src/models.rs
pub mod average_length;
pub mod length_count;

pub use average_length::AverageLength;
pub use length_count::LengthCount;
