//! Title source resolution.
//!
//! A title is taken from the browser session when the URL was opened
//! recently, otherwise from the page itself. When neither works the title is
//! empty: a bullet with an empty title is still worth printing.

use log::{debug, info};
use strum_macros::{Display, EnumIter};

use crate::fetch::fetch_title;
use crate::session::CachedTitleLookup;

/// Where a resolved title came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
pub enum TitleSource {
    /// The browser session store
    Session,
    /// The page, fetched over the network
    Network,
    /// No title could be found
    Unavailable,
}

/// A raw (not yet normalized) title and its source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTitle {
    /// Raw title text; empty when unavailable
    pub title: String,
    /// Where the title came from
    pub source: TitleSource,
}

impl ResolvedTitle {
    fn unavailable() -> Self {
        Self {
            title: String::new(),
            source: TitleSource::Unavailable,
        }
    }
}

/// Resolves the raw title for `url`.
///
/// The `lookup` is consulted first; an empty cached title counts as a miss.
/// The network is only used when a `client` is given. Errors never escape:
/// they are logged and yield an empty title.
pub async fn resolve_title<L>(
    url: &str,
    lookup: &L,
    client: Option<&reqwest::Client>,
) -> ResolvedTitle
where
    L: CachedTitleLookup + ?Sized,
{
    match lookup.cached_title(url) {
        Some(title) if !title.is_empty() => {
            debug!("Title for {} found in session store", url);
            return ResolvedTitle {
                title,
                source: TitleSource::Session,
            };
        }
        Some(_) => debug!("Session entry for {} has no title", url),
        None => debug!("{} not found in session store", url),
    }

    let Some(client) = client else {
        debug!("Network fetch disabled, no title for {}", url);
        return ResolvedTitle::unavailable();
    };

    match fetch_title(client, url).await {
        Ok(title) => ResolvedTitle {
            title,
            source: TitleSource::Network,
        },
        Err(e) => {
            info!("Could not fetch title for '{}': {}", url, e);
            ResolvedTitle::unavailable()
        }
    }
}
