//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, ValueEnum};

use crate::config::constants::{
    DEFAULT_CLIPBOARD_COMMAND, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT,
};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Command-line options.
///
/// Parsed by `clap` and converted into a [`Config`] for the library.
///
/// # Examples
///
/// ```bash
/// # Read the URL from the clipboard
/// link_extractor
///
/// # Skip the clipboard and the network
/// link_extractor --url https://example.com/post --offline
/// ```
#[derive(Debug, Parser)]
#[command(
    name = "link_extractor",
    about = "Prints a markdown bullet point linking to the URL in your clipboard."
)]
pub struct Opt {
    /// Use this URL instead of reading the clipboard
    #[arg(long)]
    pub url: Option<String>,

    /// Command that prints the clipboard contents
    #[arg(long, default_value = DEFAULT_CLIPBOARD_COMMAND)]
    pub clipboard_cmd: String,

    /// Browser session file to look titles up in (default: auto-detect)
    #[arg(long, value_parser)]
    pub session_file: Option<PathBuf>,

    /// Do not look titles up in the browser session
    #[arg(long)]
    pub no_session: bool,

    /// Do not fetch the page over the network
    #[arg(long)]
    pub offline: bool,

    /// Network fetch timeout in seconds
    #[arg(
        long,
        default_value_t = DEFAULT_TIMEOUT_SECS,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub timeout_seconds: u64,

    /// HTTP User-Agent header value
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}

/// Library configuration (no CLI dependencies).
///
/// # Examples
///
/// ```no_run
/// use link_extractor::Config;
///
/// let config = Config {
///     url: Some("https://example.com/".to_string()),
///     use_network: false,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// URL to use instead of the clipboard contents
    pub url: Option<String>,

    /// Command that prints the clipboard contents
    pub clipboard_cmd: String,

    /// Explicit session store path; auto-detected when `None`
    pub session_file: Option<PathBuf>,

    /// Look titles up in the browser session store
    pub use_session: bool,

    /// Fetch the page over the network when the session has no title
    pub use_network: bool,

    /// Per-request timeout in seconds; values below 1 are raised to 1
    pub timeout_seconds: u64,

    /// HTTP User-Agent header value
    pub user_agent: String,

    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,
}

impl Config {
    /// Network fetch timeout, never shorter than one second.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds.max(1))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            url: None,
            clipboard_cmd: DEFAULT_CLIPBOARD_COMMAND.to_string(),
            session_file: None,
            use_session: true,
            use_network: true,
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            log_level: LogLevel::Warn,
            log_format: LogFormat::Plain,
        }
    }
}

impl From<Opt> for Config {
    fn from(opt: Opt) -> Self {
        Self {
            url: opt.url,
            clipboard_cmd: opt.clipboard_cmd,
            session_file: opt.session_file,
            use_session: !opt.no_session,
            use_network: !opt.offline,
            timeout_seconds: opt.timeout_seconds,
            user_agent: opt.user_agent,
            log_level: opt.log_level,
            log_format: opt.log_format,
        }
    }
}
