//! Title clean-up.
//!
//! Page titles often repeat the site name around the real title:
//! `"A Desert Spider With Astonishing Moves - NYTimes.com"`. This module
//! decodes the raw title and strips such decorations:
//!
//! 1. Find the first separator (see [`TITLE_SEPARATORS`]) present in the title.
//! 2. Split the title on it and score every part by how much of it appears in
//!    the site name.
//! 3. Keep the parts that do not resemble the site. When none resemble it the
//!    title is left alone, since the separator was not decoration after all.

use log::debug;

use crate::config::{STOP_WORDS, TITLE_SEPARATORS};

/// A piece of a split title together with its similarity to the site.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredPart<'a> {
    /// The part text, borrowed from the title
    pub text: &'a str,
    /// Fraction of the part's words found in the site name
    pub score: f64,
}

impl ScoredPart<'_> {
    /// Whether any word of this part occurs in the site name.
    pub fn resembles_site(&self) -> bool {
        self.score > 0.0
    }
}

/// Decodes HTML entities and trims surrounding whitespace.
///
/// Titles from the session store are stored escaped (`&amp;`, `&#8211;`), and
/// fetched titles frequently carry newlines from the page source.
pub fn normalize_title(raw: &str) -> String {
    html_escape::decode_html_entities(raw).trim().to_string()
}

/// Returns the first separator, in priority order, that occurs in `title`.
pub fn detect_separator(title: &str) -> Option<&'static str> {
    TITLE_SEPARATORS
        .iter()
        .copied()
        .find(|separator| title.contains(separator))
}

/// Lower-cases a word and drops everything but letters, digits and `_`.
fn clean_token(word: &str) -> String {
    word.to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '_')
        .collect()
}

/// Scores how strongly `part` resembles `site`.
///
/// The part is split on whitespace and periods (so `"NYTimes.com"` yields
/// `nytimes` and `com`), stop words are dropped, and each remaining word that
/// occurs in `site` adds `1 / n` where `n` is the number of remaining words.
/// Words that are empty once cleaned (`"▶"`, `"—"`) still count towards `n`
/// but never match.
pub fn score_part(part: &str, site: &str) -> f64 {
    let tokens: Vec<String> = part
        .split(|c: char| c.is_whitespace() || c == '.')
        .map(clean_token)
        .filter(|token| !STOP_WORDS.contains(&token.as_str()))
        .collect();

    if tokens.is_empty() {
        return 0.0;
    }

    let weight = 1.0 / tokens.len() as f64;
    tokens
        .iter()
        .filter(|token| !token.is_empty() && site.contains(token.as_str()))
        .map(|_| weight)
        .sum()
}

/// Splits `title` on `separator` and scores each part against `site`.
pub fn score_parts<'a>(title: &'a str, separator: &str, site: &str) -> Vec<ScoredPart<'a>> {
    title
        .split(separator)
        .map(|text| ScoredPart {
            text,
            score: score_part(text, site),
        })
        .collect()
}

/// Strips site-name decorations from a title.
///
/// # Examples
///
/// ```
/// use link_extractor::title::defancify;
///
/// assert_eq!(
///     defancify("A Desert Spider With Astonishing Moves - NYTimes.com", "nytimes.com"),
///     "A Desert Spider With Astonishing Moves"
/// );
/// // No part names the site: the dash is part of the title.
/// assert_eq!(
///     defancify("Understand - a novelette by Ted Chiang", "infinityplus.co.uk"),
///     "Understand - a novelette by Ted Chiang"
/// );
/// ```
pub fn defancify(title: &str, site: &str) -> String {
    let Some(separator) = detect_separator(title) else {
        return title.to_string();
    };

    let parts = score_parts(title, separator, site);
    debug!(
        "Split title on {:?} into {} parts: {:?}",
        separator,
        parts.len(),
        parts
    );

    if !parts.iter().any(ScoredPart::resembles_site) {
        return title.to_string();
    }

    let kept: Vec<&str> = parts
        .iter()
        .filter(|part| !part.resembles_site())
        .map(|part| part.text)
        .collect();
    if !kept.is_empty() {
        return kept.join(separator);
    }

    // Every part mentions the site; keep the one that mentions it least.
    parts
        .iter()
        .min_by(|a, b| {
            a.score
                .total_cmp(&b.score)
                .then_with(|| a.text.cmp(b.text))
        })
        .map(|part| part.text.to_string())
        .unwrap_or_else(|| title.to_string())
}
