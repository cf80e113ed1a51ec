//! Application initialization and resource setup.
//!
//! This module provides functions to initialize the shared resources of a run:
//! - Logger (plain or JSON, on stderr)
//! - HTTP client used for the network title fetch

mod client;
mod logger;

// Re-export public API
pub use client::init_client;
pub use logger::init_logger_with;
