//! Clipboard access.
//!
//! The clipboard is read by running an external command (`xclip -out` by
//! default) and taking its standard output.

use std::process::{Command, Stdio};

use percent_encoding::percent_decode_str;

use crate::error_handling::ClipboardError;

/// Runs `command` and returns its output as a decoded URL.
///
/// The command line is split on whitespace into a program and its arguments;
/// no shell is involved.
///
/// # Errors
///
/// Returns a `ClipboardError` if the command is blank, cannot be started, or
/// exits unsuccessfully.
pub fn read_clipboard(command: &str) -> Result<String, ClipboardError> {
    let mut words = command.split_whitespace();
    let program = words.next().ok_or(ClipboardError::EmptyCommand)?;

    let output = Command::new(program)
        .args(words)
        .stdin(Stdio::null())
        .stderr(Stdio::null())
        .output()
        .map_err(|source| ClipboardError::Spawn {
            command: command.to_string(),
            source,
        })?;

    if !output.status.success() {
        return Err(ClipboardError::ExitStatus {
            command: command.to_string(),
            status: output.status,
        });
    }

    let contents = String::from_utf8_lossy(&output.stdout);
    log::debug!("Clipboard contents: {:?}", contents);
    Ok(decode_url(&contents))
}

/// Trims and percent-decodes a URL.
///
/// Invalid UTF-8 in the decoded bytes is replaced rather than rejected.
pub fn decode_url(raw: &str) -> String {
    percent_decode_str(raw.trim())
        .decode_utf8_lossy()
        .into_owned()
}
