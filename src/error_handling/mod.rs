//! Error types for every stage of the pipeline.
//!
//! Only [`InitializationError`] is ever surfaced to the binary. Clipboard,
//! session and fetch errors are logged where they happen and turned into an
//! empty value, so a missing title never stops the bullet from printing.

mod types;

// Re-export public API
pub use types::{ClipboardError, FetchError, InitializationError, SessionError};
