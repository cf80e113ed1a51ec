//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `link_extractor` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - Printing the bullet line
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use link_extractor::initialization::init_logger_with;
use link_extractor::{extract_link, Config, Opt};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let config = Config::from(Opt::parse());

    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    match extract_link(&config).await {
        Ok(report) => {
            println!("{}", report.bullet);
            Ok(())
        }
        Err(e) => {
            eprintln!("link_extractor error: {:#}", e);
            process::exit(1);
        }
    }
}
