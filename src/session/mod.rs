//! Browser session store lookup.
//!
//! Firefox keeps the state of open and recently closed tabs in a JSON file in
//! the profile directory. When the URL being linked was opened recently, its
//! title can be read from there without touching the network.
//!
//! The store's layout differs between open tabs, closed tabs and Firefox
//! versions, so entries are found by a depth-first search for any object
//! whose `url` field matches, not by walking a fixed path.

mod search;

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use serde_json::Value;

use crate::config::{
    FIREFOX_DEFAULT_PROFILE_SUFFIX, FIREFOX_PROFILES_DIR, SESSION_RECOVERY_FILE,
    SESSION_STORE_FILE,
};
use crate::error_handling::SessionError;

pub use search::{find_first, find_title, has_matching_url};

/// A source of previously seen page titles, keyed by URL.
pub trait CachedTitleLookup {
    /// Returns the cached title for `url`, or `None` when the URL is unknown.
    ///
    /// `url` is expected to be percent-decoded.
    fn cached_title(&self, url: &str) -> Option<String>;
}

impl<T: CachedTitleLookup> CachedTitleLookup for Option<T> {
    fn cached_title(&self, url: &str) -> Option<String> {
        self.as_ref().and_then(|lookup| lookup.cached_title(url))
    }
}

/// A parsed browser session store.
#[derive(Debug, Clone)]
pub struct SessionStore {
    data: Value,
}

impl SessionStore {
    /// Wraps already-parsed session data.
    pub fn from_value(data: Value) -> Self {
        Self { data }
    }

    /// Reads and parses the session file at `path`.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Io` if the file cannot be read and
    /// `SessionError::Json` if it is not valid JSON.
    pub fn load(path: &Path) -> Result<Self, SessionError> {
        let contents = fs::read_to_string(path).map_err(|source| SessionError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let data = serde_json::from_str(&contents).map_err(|source| SessionError::Json {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("Loaded session store from {}", path.display());
        Ok(Self { data })
    }

    /// Finds and loads the session file of the default Firefox profile.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NoHome` when `$HOME` is unset, otherwise any
    /// error from [`locate_session_file`] or [`SessionStore::load`].
    pub fn discover() -> Result<Self, SessionError> {
        let home = home_dir().ok_or(SessionError::NoHome)?;
        let path = locate_session_file(&home)?;
        Self::load(&path)
    }
}

impl CachedTitleLookup for SessionStore {
    fn cached_title(&self, url: &str) -> Option<String> {
        if url.is_empty() {
            return None;
        }
        find_title(&self.data, url)
    }
}

fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .filter(|home| !home.is_empty())
        .map(PathBuf::from)
}

/// Whether a profile directory name denotes a default profile.
///
/// Matches both `abcd1234.default` and `abcd1234.default-release`.
fn is_default_profile(name: &str) -> bool {
    name.ends_with(FIREFOX_DEFAULT_PROFILE_SUFFIX)
        || name.contains(&format!("{}-", FIREFOX_DEFAULT_PROFILE_SUFFIX))
}

/// Locates the session file of the default Firefox profile under `home`.
///
/// Profiles are searched in name order. In each, `sessionstore.js` is
/// preferred over the recovery file Firefox writes while it is running.
///
/// # Errors
///
/// Returns `SessionError::NotFound` if no default profile holds a session file.
pub fn locate_session_file(home: &Path) -> Result<PathBuf, SessionError> {
    let profiles_dir = home.join(FIREFOX_PROFILES_DIR);
    let entries = match fs::read_dir(&profiles_dir) {
        Ok(entries) => entries,
        Err(e) => {
            debug!("Cannot list {}: {}", profiles_dir.display(), e);
            return Err(SessionError::NotFound(profiles_dir));
        }
    };

    let mut profiles: Vec<PathBuf> = entries
        .filter_map(Result::ok)
        .filter(|entry| entry.path().is_dir())
        .filter(|entry| is_default_profile(&entry.file_name().to_string_lossy()))
        .map(|entry| entry.path())
        .collect();
    profiles.sort();

    profiles
        .iter()
        .flat_map(|profile| {
            [
                profile.join(SESSION_STORE_FILE),
                profile.join(SESSION_RECOVERY_FILE),
            ]
        })
        .find(|candidate| candidate.is_file())
        .ok_or(SessionError::NotFound(profiles_dir))
}
