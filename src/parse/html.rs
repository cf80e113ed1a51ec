//! Page title extraction.

use scraper::{Html, Selector};
use std::sync::LazyLock;

const TITLE_SELECTOR_STR: &str = "title";

static TITLE_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(TITLE_SELECTOR_STR).unwrap_or_else(|e| {
        log::error!(
            "Failed to parse title selector '{}': {}",
            TITLE_SELECTOR_STR,
            e
        );
        crate::utils::parse_selector_unsafe("*:not(*)", "TITLE_SELECTOR fallback")
    })
});

/// Extracts the text of the first `<title>` element of a document.
///
/// The text nodes of the element are concatenated as-is; entity decoding
/// is done by the parser and whitespace is left for the title normalizer.
///
/// # Returns
///
/// The title text (possibly empty), or `None` if the document has no
/// `<title>` element.
pub fn extract_title(document: &Html) -> Option<String> {
    let element = document.select(&TITLE_SELECTOR).next();
    match element {
        Some(element) => {
            let title: String = element.text().collect();
            log::debug!(
                "Extracted title text: '{}' (length: {})",
                title,
                title.len()
            );
            Some(title)
        }
        None => {
            log::debug!("No title element found in document");
            None
        }
    }
}

/// Parses an HTML body and extracts its title.
pub fn extract_title_from_body(body: &str) -> Option<String> {
    let document = Html::parse_document(body);
    extract_title(&document)
}
