// src/main.rs
use anyhow::Result;
use clap::Parser as _;
use tracing_subscriber::EnvFilter;
use wordstats::{Args, run};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    run(args)
}
