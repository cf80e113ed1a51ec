//! link_extractor library: turn a URL into a reading-list bullet
//!
//! Reads a URL (from the clipboard by default), finds the page title in the
//! browser session or on the page itself, strips site-name decorations from
//! it and formats a markdown bullet:
//!
//! ```text
//!   * [A Desert Spider With Astonishing Moves [nytimes.com]](http://www.nytimes.com/...)
//! ```
//!
//! # Example
//!
//! ```no_run
//! use link_extractor::{extract_link, Config};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     url: Some("https://www.rust-lang.org/learn".to_string()),
//!     ..Default::default()
//! };
//!
//! let report = extract_link(&config).await?;
//! println!("{}", report.bullet);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

pub mod clipboard;
pub mod config;
pub mod domain;
pub mod error_handling;
pub mod fetch;
pub mod format;
pub mod initialization;
mod parse;
pub mod resolve;
pub mod session;
pub mod title;
mod utils;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel, Opt};
pub use format::format_bullet;
pub use resolve::{resolve_title, ResolvedTitle, TitleSource};
pub use run::{extract_link, LinkReport};
pub use title::{defancify, normalize_title};

// Internal run module (drives one URL through the pipeline)
mod run {
    use anyhow::{Context, Result};
    use log::{debug, info, warn};

    use crate::clipboard::{decode_url, read_clipboard};
    use crate::config::Config;
    use crate::domain::site_for_url;
    use crate::error_handling::SessionError;
    use crate::format::format_bullet;
    use crate::initialization::init_client;
    use crate::resolve::{resolve_title, TitleSource};
    use crate::session::SessionStore;
    use crate::title::{defancify, normalize_title};

    /// Result of turning one URL into a bullet.
    #[derive(Debug, Clone)]
    pub struct LinkReport {
        /// The (percent-decoded) URL
        pub url: String,
        /// The URL's site, without a leading `www.`
        pub site: String,
        /// Title as found, before normalization and clean-up
        pub raw_title: String,
        /// Final title used in the bullet
        pub title: String,
        /// Where the raw title came from
        pub source: TitleSource,
        /// The formatted markdown bullet
        pub bullet: String,
    }

    /// Runs the whole pipeline for the configured URL.
    ///
    /// Unavailable inputs (empty clipboard, no session store, no network) are
    /// logged and produce an empty value; the bullet is built regardless.
    ///
    /// # Errors
    ///
    /// Returns an error only if the HTTP client cannot be initialized.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use link_extractor::{extract_link, Config};
    ///
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let config = Config {
    ///     url: Some("https://example.com/".to_string()),
    ///     use_network: false,
    ///     ..Default::default()
    /// };
    /// let report = extract_link(&config).await?;
    /// assert_eq!(report.site, "example.com");
    /// # Ok(())
    /// # }
    /// ```
    pub async fn extract_link(config: &Config) -> Result<LinkReport> {
        let url = match &config.url {
            Some(url) => decode_url(url),
            None => read_clipboard(&config.clipboard_cmd).unwrap_or_else(|e| {
                warn!("Could not read the clipboard: {}", e);
                String::new()
            }),
        };
        if url.is_empty() {
            warn!("No URL to link to");
        }

        let site = site_for_url(&url);
        debug!("Site for {}: {}", url, site);

        let session = if config.use_session {
            load_session(config)
        } else {
            None
        };

        let client = if config.use_network {
            Some(init_client(config).context("Failed to initialize HTTP client")?)
        } else {
            None
        };

        let resolved = resolve_title(&url, &session, client.as_ref()).await;
        info!("Title source: {}", resolved.source);

        let title = defancify(&normalize_title(&resolved.title), &site);
        debug!("Title {:?} resolved to {:?}", resolved.title, title);

        let bullet = format_bullet(&title, &site, &url);
        Ok(LinkReport {
            url,
            site,
            raw_title: resolved.title,
            title,
            source: resolved.source,
            bullet,
        })
    }

    /// Loads the configured or auto-detected session store, if any.
    fn load_session(config: &Config) -> Option<SessionStore> {
        let result = match &config.session_file {
            Some(path) => SessionStore::load(path),
            None => SessionStore::discover(),
        };
        match result {
            Ok(store) => Some(store),
            Err(e @ (SessionError::NotFound(_) | SessionError::NoHome)) => {
                debug!("No session store: {}", e);
                None
            }
            Err(e) => {
                warn!("Ignoring session store: {}", e);
                None
            }
        }
    }
}
