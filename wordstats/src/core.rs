// src/core.rs
pub mod config;
pub mod stats;
