//! Error type definitions.

use std::path::PathBuf;

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Errors reading the clipboard.
#[derive(Error, Debug)]
pub enum ClipboardError {
    /// The configured clipboard command is blank.
    #[error("Clipboard command is empty")]
    EmptyCommand,

    /// The clipboard command could not be started.
    #[error("Failed to run clipboard command '{command}': {source}")]
    Spawn {
        /// Command line that was attempted
        command: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The clipboard command ran but reported failure.
    #[error("Clipboard command '{command}' exited with {status}")]
    ExitStatus {
        /// Command line that was run
        command: String,
        /// Exit status as reported by the OS
        status: std::process::ExitStatus,
    },
}

/// Errors locating or loading the browser session store.
#[derive(Error, Debug)]
pub enum SessionError {
    /// No session file was found in any profile directory.
    #[error("No session store found under {0}")]
    NotFound(PathBuf),

    /// The home directory could not be determined.
    #[error("Cannot determine home directory")]
    NoHome,

    /// The session file exists but could not be read.
    #[error("Failed to read session store {path}: {source}")]
    Io {
        /// Session file path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The session file is not valid JSON.
    #[error("Session store {path} is not valid JSON: {source}")]
    Json {
        /// Session file path
        path: PathBuf,
        /// Underlying parse error
        #[source]
        source: serde_json::Error,
    },
}

/// Errors fetching a page title over the network.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The URL is not an http(s) URL.
    #[error("Not a fetchable URL: '{0}'")]
    InvalidUrl(String),

    /// The request failed (connection, timeout, redirect loop, body read).
    #[error("Request failed: {0}")]
    Request(#[from] ReqwestError),

    /// The server answered with a non-success status.
    #[error("HTTP status {0}")]
    HttpStatus(u16),

    /// The response is not an HTML document.
    #[error("Non-HTML content-type: {0}")]
    NotHtml(String),

    /// The response body exceeds the size limit.
    #[error("Response body too large: {0} bytes")]
    BodyTooLarge(usize),

    /// The document has no `<title>` element.
    #[error("No title element in document")]
    MissingTitle,
}
