//! Configuration constants.
//!
//! Defaults for the CLI, limits for the network fetch, and the fixed tables
//! used by the title parser.

/// Default per-request timeout for the network title fetch.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Default command used to read the clipboard.
///
/// `xclip -out` prints the primary selection, which is what you get after
/// selecting a URL in the browser's address bar.
pub const DEFAULT_CLIPBOARD_COMMAND: &str = "xclip -out";

/// Default User-Agent string for HTTP requests.
///
/// Users can override this via the `--user-agent` CLI flag.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36";

/// Maximum response body size in bytes (2MB)
/// Responses larger than this are not parsed for a title
pub const MAX_RESPONSE_BODY_SIZE: usize = 2 * 1024 * 1024;

/// Maximum HTML preview length in characters, used in debug logging
pub const MAX_HTML_PREVIEW_CHARS: usize = 500;

/// Redirect hops followed by the fetch client
pub const MAX_REDIRECT_HOPS: usize = 10;

// Session store layout (relative to the home directory)
/// Directory holding Firefox profiles
pub const FIREFOX_PROFILES_DIR: &str = ".mozilla/firefox";
/// Suffix of the default profile directory name (`xxxxxxxx.default`)
pub const FIREFOX_DEFAULT_PROFILE_SUFFIX: &str = ".default";
/// Session file inside a profile directory
pub const SESSION_STORE_FILE: &str = "sessionstore.js";
/// Fallback session file written while Firefox is running
pub const SESSION_RECOVERY_FILE: &str = "sessionstore-backups/recovery.js";

/// Separators recognised in fancy titles, in priority order.
///
/// Each separator carries exactly one space on each side. The first one found
/// in a title is the one it is split on.
pub const TITLE_SEPARATORS: &[&str] = &[
    " \u{2014} ", // em dash
    " \u{2013} ", // en dash
    " \u{00b7} ", // middle dot
    " -- ",
    " - ",
    " | ",
    " >> ",
    " : ",
];

/// Words ignored when comparing title parts with the site.
pub const STOP_WORDS: &[&str] = &["the", "of", "to", "and", "a", "in", "is", "it"];
