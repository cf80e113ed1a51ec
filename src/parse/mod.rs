//! HTML parsing.
//!
//! Only the document title is of interest; parsing is done with CSS
//! selectors via the `scraper` crate.

mod html;

// Re-export public API
pub use html::{extract_title, extract_title_from_body};
