//! Site extraction.
//!
//! The "site" shown in the bullet and used to recognise fancy titles is the
//! URL's network location (host plus any explicit port) without a leading
//! `www.`: `https://www.nytimes.com/2014/...` becomes `nytimes.com`.

use url::Host;

/// Returns the site for a URL, or an empty string if the URL has no host.
///
/// The host is lower-cased by the URL parser and internationalized domains
/// are returned in Unicode (`münchen.de`, not `xn--mnchen-3ya.de`).
/// Non-default ports are kept (`localhost:8080`), default ones are dropped
/// by the parser.
pub fn site_for_url(url: &str) -> String {
    let parsed = match url::Url::parse(url) {
        Ok(parsed) => parsed,
        Err(e) => {
            log::debug!("Cannot extract site from '{}': {}", url, e);
            return String::new();
        }
    };

    let Some(host) = parsed.host_str().filter(|host| !host.is_empty()) else {
        log::debug!("URL '{}' has no host component", url);
        return String::new();
    };

    // The parser stores domains in punycode; show them as written
    let host = match parsed.host() {
        Some(Host::Domain(domain)) => domain_to_unicode(domain),
        _ => host.to_string(),
    };

    let host = host.strip_prefix("www.").unwrap_or(&host);
    match parsed.port() {
        Some(port) => format!("{}:{}", host, port),
        None => host.to_string(),
    }
}

fn domain_to_unicode(domain: &str) -> String {
    let (unicode, result) = idna::domain_to_unicode(domain);
    match result {
        Ok(()) => unicode,
        Err(e) => {
            log::debug!("Keeping ASCII form of '{}': {:?}", domain, e);
            domain.to_string()
        }
    }
}
