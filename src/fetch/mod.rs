//! Network title fetch.
//!
//! Downloads the page at a URL and extracts the text of its `<title>`
//! element. Every failure is reported as a [`FetchError`]; turning that into
//! an empty title is left to the resolver.

mod request;

use log::debug;

use crate::config::{MAX_HTML_PREVIEW_CHARS, MAX_RESPONSE_BODY_SIZE};
use crate::error_handling::FetchError;
use crate::parse::extract_title_from_body;
use request::RequestHeaders;

/// Whether a `Content-Type` value denotes an HTML document.
fn is_html_content_type(content_type: &str) -> bool {
    let content_type = content_type.trim().to_lowercase();
    content_type.starts_with("text/html") || content_type.starts_with("application/xhtml+xml")
}

/// Fetches `url` and returns the raw text of its first `<title>` element.
///
/// A missing `Content-Type` header is tolerated (some servers don't send
/// it); an explicit non-HTML type is not.
///
/// # Errors
///
/// - `FetchError::InvalidUrl` if `url` is not an http(s) URL
/// - `FetchError::Request` on connection failures, timeouts or body read errors
/// - `FetchError::HttpStatus` for non-success responses
/// - `FetchError::NotHtml` for non-HTML content types
/// - `FetchError::BodyTooLarge` for bodies over `MAX_RESPONSE_BODY_SIZE`
/// - `FetchError::MissingTitle` if the document has no `<title>`
pub async fn fetch_title(client: &reqwest::Client, url: &str) -> Result<String, FetchError> {
    let parsed = url::Url::parse(url).map_err(|_| FetchError::InvalidUrl(url.to_string()))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(FetchError::InvalidUrl(url.to_string()));
    }

    let mut response = RequestHeaders::apply_to_request_builder(client.get(parsed))
        .send()
        .await?;
    debug!("Final url after redirects: {}", response.url());

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::HttpStatus(status.as_u16()));
    }

    match response.headers().get(reqwest::header::CONTENT_TYPE) {
        Some(content_type) => {
            let content_type = content_type.to_str().unwrap_or_default();
            if !is_html_content_type(content_type) {
                return Err(FetchError::NotHtml(content_type.to_string()));
            }
        }
        None => debug!("No Content-Type header for {}, continuing anyway", url),
    }

    if let Some(length) = response.content_length() {
        let length = usize::try_from(length).unwrap_or(usize::MAX);
        if length > MAX_RESPONSE_BODY_SIZE {
            return Err(FetchError::BodyTooLarge(length));
        }
    }

    // Content-Length may be absent (chunked or close-delimited bodies)
    let mut bytes = Vec::new();
    while let Some(chunk) = response.chunk().await? {
        if bytes.len() + chunk.len() > MAX_RESPONSE_BODY_SIZE {
            return Err(FetchError::BodyTooLarge(bytes.len() + chunk.len()));
        }
        bytes.extend_from_slice(&chunk);
    }
    debug!("Body length for {}: {} bytes", url, bytes.len());
    let body = String::from_utf8_lossy(&bytes);

    extract_title_from_body(&body).ok_or_else(|| {
        let preview = body
            .chars()
            .take(MAX_HTML_PREVIEW_CHARS)
            .collect::<String>();
        debug!(
            "HTML preview (first {} chars) for {}: {}",
            MAX_HTML_PREVIEW_CHARS, url, preview
        );
        FetchError::MissingTitle
    })
}

#[cfg(test)]
mod tests {
    include!("tests.rs");
}
